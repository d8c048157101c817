use redshark_quiz::application::services::{advance, FlowEvent, Rejection};
use redshark_quiz::domain::{LeadField, Phase};

#[test]
fn given_welcome_when_opening_finishes_then_qualifier_awaits_quick_reply() {
    let transition = advance(Phase::Welcome, false, &FlowEvent::OpeningFinished).unwrap();

    assert_eq!(transition.next_phase, Phase::AwaitingQualifier);
    assert!(transition.awaiting_quick_reply);
    assert!(transition.human_entry.is_none());
    assert!(transition.assistant_reply.is_none());
    assert!(!transition.submit);
}

#[test]
fn given_later_phase_when_opening_finishes_again_then_it_is_rejected() {
    let result = advance(Phase::CollectingName, false, &FlowEvent::OpeningFinished);

    assert_eq!(result.unwrap_err(), Rejection::OpeningAlreadyPlayed);
}

#[test]
fn given_qualifier_when_either_fixed_label_is_chosen_then_name_collection_starts() {
    for label in ["SIM", "NÃO"] {
        let transition = advance(
            Phase::AwaitingQualifier,
            true,
            &FlowEvent::QuickReply(label.to_string()),
        )
        .unwrap();

        assert_eq!(transition.next_phase, Phase::CollectingName);
        assert!(!transition.awaiting_quick_reply);
        assert_eq!(transition.human_entry.as_deref(), Some(label));
        assert_eq!(
            transition.assistant_reply.as_deref(),
            Some("Perfeito! Agora preciso do seu nome completo:")
        );
    }
}

#[test]
fn given_qualifier_when_label_is_unknown_then_it_is_rejected() {
    let result = advance(
        Phase::AwaitingQualifier,
        true,
        &FlowEvent::QuickReply("sim".to_string()),
    );

    assert_eq!(result.unwrap_err(), Rejection::InvalidQuickReply);
}

#[test]
fn given_no_pending_qualifier_when_quick_reply_arrives_then_it_is_rejected() {
    let result = advance(
        Phase::CollectingName,
        false,
        &FlowEvent::QuickReply("SIM".to_string()),
    );

    assert_eq!(result.unwrap_err(), Rejection::QuickReplyNotAvailable);
}

#[test]
fn given_collecting_name_when_text_arrives_then_name_is_recorded_and_greeting_uses_it() {
    let transition = advance(
        Phase::CollectingName,
        false,
        &FlowEvent::FreeText("  Ana Silva  ".to_string()),
    )
    .unwrap();

    assert_eq!(transition.next_phase, Phase::CollectingPhone);
    assert_eq!(transition.human_entry.as_deref(), Some("Ana Silva"));
    assert_eq!(
        transition.set_field,
        Some((LeadField::FullName, "Ana Silva".to_string()))
    );
    let reply = transition.assistant_reply.unwrap();
    assert!(reply.contains("Ana Silva"));
    assert!(!transition.submit);
}

#[test]
fn given_collecting_phone_when_text_arrives_then_phone_is_recorded() {
    let transition = advance(
        Phase::CollectingPhone,
        false,
        &FlowEvent::FreeText("+55 11 99999-0000".to_string()),
    )
    .unwrap();

    assert_eq!(transition.next_phase, Phase::CollectingEmail);
    assert_eq!(
        transition.set_field,
        Some((LeadField::Phone, "+55 11 99999-0000".to_string()))
    );
    assert_eq!(
        transition.assistant_reply.as_deref(),
        Some("Ótimo! Agora preciso do seu email:")
    );
}

#[test]
fn given_collecting_email_when_text_arrives_then_flow_completes_and_submission_fires() {
    let transition = advance(
        Phase::CollectingEmail,
        false,
        &FlowEvent::FreeText("ana@example.com".to_string()),
    )
    .unwrap();

    assert_eq!(transition.next_phase, Phase::Completed);
    assert_eq!(
        transition.set_field,
        Some((LeadField::Email, "ana@example.com".to_string()))
    );
    assert!(transition.submit);
    assert_eq!(
        transition.assistant_reply.as_deref(),
        Some("✅ Perfeito! Seus dados foram registrados com sucesso!")
    );
}

#[test]
fn given_any_collecting_phase_when_text_is_blank_then_it_is_rejected() {
    for phase in [
        Phase::CollectingName,
        Phase::CollectingPhone,
        Phase::CollectingEmail,
    ] {
        let result = advance(phase, false, &FlowEvent::FreeText("   ".to_string()));
        assert_eq!(result.unwrap_err(), Rejection::EmptyInput);
    }
}

#[test]
fn given_welcome_when_free_text_arrives_then_it_is_rejected() {
    let result = advance(
        Phase::Welcome,
        false,
        &FlowEvent::FreeText("oi".to_string()),
    );

    assert_eq!(result.unwrap_err(), Rejection::FreeTextNotAvailable);
}

#[test]
fn given_completed_phase_when_any_event_arrives_then_it_is_rejected() {
    let free_text = advance(
        Phase::Completed,
        false,
        &FlowEvent::FreeText("oi".to_string()),
    );
    let quick_reply = advance(
        Phase::Completed,
        false,
        &FlowEvent::QuickReply("SIM".to_string()),
    );

    assert_eq!(free_text.unwrap_err(), Rejection::AlreadyCompleted);
    assert_eq!(quick_reply.unwrap_err(), Rejection::AlreadyCompleted);
}

#[test]
fn given_field_order_then_no_event_reaches_a_later_field_early() {
    // The table has no edge from the qualifier straight to phone or email:
    // free text before the name phase is simply rejected.
    let result = advance(
        Phase::AwaitingQualifier,
        true,
        &FlowEvent::FreeText("+55 11 99999-0000".to_string()),
    );

    assert_eq!(result.unwrap_err(), Rejection::FreeTextNotAvailable);
}
