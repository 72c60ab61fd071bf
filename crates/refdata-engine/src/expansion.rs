use std::collections::HashSet;

use refdata_types::{Record, RecordId};

/// Set of record ids whose children are currently shown.
///
/// Owned by one hosting view; the Hierarchy View and the Ancestor Picker
/// each keep their own instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<RecordId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the expansion of `id`. Returns true when the id is now expanded.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.expanded.contains(id)
    }

    pub fn expand(&mut self, id: impl Into<RecordId>) {
        self.expanded.insert(id.into());
    }

    pub fn collapse(&mut self, id: &RecordId) {
        self.expanded.remove(id);
    }

    pub fn expand_all<'a>(&mut self, records: impl IntoIterator<Item = &'a Record>) {
        self.expanded
            .extend(records.into_iter().map(|record| record.id.clone()));
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.expanded.iter()
    }
}

impl FromIterator<RecordId> for ExpansionState {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        Self {
            expanded: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut state = ExpansionState::new();
        let id = RecordId::new("a");

        assert!(state.toggle(&id));
        assert!(state.is_expanded(&id));
        assert!(!state.toggle(&id));
        assert!(!state.is_expanded(&id));
        assert!(state.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut state: ExpansionState = ["a", "b"].into_iter().map(RecordId::from).collect();
        assert_eq!(state.len(), 2);
        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_expand_all() {
        let records = vec![Record::new("a", "A", "Alpha"), Record::new("b", "B", "Beta")];
        let mut state = ExpansionState::new();
        state.expand_all(&records);
        assert!(state.is_expanded(&RecordId::new("a")));
        assert!(state.is_expanded(&RecordId::new("b")));
    }
}
