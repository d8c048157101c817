/// The two fixed labels the qualifying question accepts.
pub const QUICK_REPLY_YES: &str = "SIM";
pub const QUICK_REPLY_NO: &str = "NÃO";

pub fn quick_reply_labels() -> [&'static str; 2] {
    [QUICK_REPLY_YES, QUICK_REPLY_NO]
}

/// Anything outside the two labels is rejected by the flow.
pub fn is_valid_quick_reply(value: &str) -> bool {
    value == QUICK_REPLY_YES || value == QUICK_REPLY_NO
}
