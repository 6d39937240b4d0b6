//! Ephemeral category selection for the tech-stack section.
//!
//! Single-select with toggle-off semantics: clicking the selected category
//! clears the selection, clicking a different one replaces it. This is
//! transient view state - it is never written to the page document and
//! resets on remount.

/// Which category's detail panel is expanded, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySelection {
    selected: Option<String>,
}

impl CategorySelection {
    /// Nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The expanded category, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether `id` is the expanded category.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Toggle a category: same id clears, different id replaces.
    pub fn toggle(&mut self, id: &str) {
        if self.is_selected(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
    }

    /// Collapse whatever is expanded.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert_eq!(CategorySelection::new().selected(), None);
    }

    #[test]
    fn toggling_same_id_clears() {
        let mut sel = CategorySelection::new();
        sel.toggle("frontend");
        assert!(sel.is_selected("frontend"));
        sel.toggle("frontend");
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn toggling_other_id_replaces() {
        let mut sel = CategorySelection::new();
        sel.toggle("frontend");
        sel.toggle("backend");
        assert!(sel.is_selected("backend"));
        assert!(!sel.is_selected("frontend"));
    }

    #[test]
    fn clear_resets() {
        let mut sel = CategorySelection::new();
        sel.toggle("design");
        sel.clear();
        assert_eq!(sel.selected(), None);
    }
}
