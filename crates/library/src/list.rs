//! Selectable list of game names.

/// The list widget's model: names in registry order plus a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameList {
    entries: Vec<String>,
    selected: Option<usize>,
}

impl GameList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all entries. The selection is cleared.
    pub fn replace(&mut self, entries: impl IntoIterator<Item = String>) {
        self.entries = entries.into_iter().collect();
        self.selected = None;
    }

    /// Selects the entry at `index`. Returns `false` if out of range.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Selects the entry with the given name. Returns `false` if absent.
    pub fn select(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|e| e == name) {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Name of the selected entry.
    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|i| self.entries[i].as_str())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> GameList {
        let mut l = GameList::new();
        l.replace(names.iter().map(|n| n.to_string()));
        l
    }

    #[test]
    fn select_by_name_and_index() {
        let mut l = list(&["A", "B", "C"]);

        assert!(l.select("B"));
        assert_eq!(l.selected(), Some("B"));
        assert_eq!(l.selected_index(), Some(1));

        assert!(l.select_index(2));
        assert_eq!(l.selected(), Some("C"));
    }

    #[test]
    fn invalid_selection_keeps_previous() {
        let mut l = list(&["A"]);
        l.select("A");

        assert!(!l.select("missing"));
        assert!(!l.select_index(5));
        assert_eq!(l.selected(), Some("A"));
    }

    #[test]
    fn replace_clears_selection() {
        let mut l = list(&["A", "B"]);
        l.select("A");

        l.replace(vec!["A".to_string()]);
        assert_eq!(l.selected(), None);
        assert_eq!(l.entries(), ["A".to_string()]);
    }

    #[test]
    fn len_and_is_empty() {
        let mut l = GameList::new();
        assert!(l.is_empty());
        l.replace(vec!["x".to_string()]);
        assert_eq!(l.len(), 1);
        assert!(!l.is_empty());

        l.clear_selection();
        assert_eq!(l.selected(), None);
    }
}
