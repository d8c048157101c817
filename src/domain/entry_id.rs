/// Identifier of one timeline entry.
///
/// Ids are assigned by the owning [`super::Timeline`] in strictly increasing
/// order, so comparing two ids answers "which entry came first". They are not
/// guaranteed to be contiguous: the counter survives a `clear`, keeping ids
/// unique for the whole engine lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
