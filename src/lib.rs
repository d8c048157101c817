//! Scripted conversational lead-capture engine for the Redshark quiz.
//!
//! The core is a conversation state machine over an append-only message
//! timeline: a fixed opening script, a yes/no qualifier, then name, phone and
//! email collected in order, a best-effort webhook submission, and a
//! follow-up link. Rendering, toasts and the concrete transports are ports
//! with adapters under `infrastructure`.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
