/// The contact record assembled over the conversation.
///
/// Each field is populated exactly once, in the fixed order full name,
/// phone, email, by the flow advancing through its collecting phases. No
/// format validation is applied beyond non-empty input; that is the
/// documented behavior of the flow, not an oversight.
#[derive(Debug, Clone, Default)]
pub struct Lead {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// One of the three collected fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    FullName,
    Phone,
    Email,
}

impl Lead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::FullName => self.full_name = Some(value),
            LeadField::Phone => self.phone = Some(value),
            LeadField::Email => self.email = Some(value),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.full_name.is_some() && self.phone.is_some() && self.email.is_some()
    }
}
