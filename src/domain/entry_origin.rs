use std::fmt;
use std::str::FromStr;

/// Who authored a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryOrigin {
    Assistant,
    Human,
}

impl EntryOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryOrigin::Assistant => "ASSISTANT",
            EntryOrigin::Human => "HUMAN",
        }
    }
}

impl FromStr for EntryOrigin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASSISTANT" => Ok(EntryOrigin::Assistant),
            "HUMAN" => Ok(EntryOrigin::Human),
            _ => Err(format!("Invalid entry origin: {}", s)),
        }
    }
}

impl fmt::Display for EntryOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
