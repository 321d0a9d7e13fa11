/// A single entry in the outline.
///
/// Hierarchy is never stored: an item's position in the outline and its
/// `level` relative to its neighbors are the only structural information.
/// The well-formedness rule is that an item may be at most one level deeper
/// than the item immediately above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display text
    pub label: String,
    /// Checkbox state
    pub completed: bool,
    /// Nesting depth (0 = top-level)
    pub level: usize,
}

impl Item {
    /// Create a new unchecked, top-level item
    pub fn new(label: impl Into<String>) -> Self {
        Item {
            label: label.into(),
            completed: false,
            level: 0,
        }
    }
}
