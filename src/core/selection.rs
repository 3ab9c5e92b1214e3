//! Selection and highlight state shared by words and lines.
//!
//! Each node carries one [`Mark`] per channel. The node's own bit is set by
//! direct operations; the descendant bit is always a fold over the children,
//! so propagation never needs to touch more than one level at a time.

/// State of one channel (selection or highlight) on one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    None,
    /// The node itself is marked
    Own,
    /// Some descendant is marked, the node itself is not
    Descendant,
    /// Marked itself and through a descendant
    Both,
}

impl Mark {
    pub fn from_parts(own: bool, descendant: bool) -> Self {
        match (own, descendant) {
            (false, false) => Mark::None,
            (true, false) => Mark::Own,
            (false, true) => Mark::Descendant,
            (true, true) => Mark::Both,
        }
    }

    /// The node's own flag.
    pub fn is_set(self) -> bool {
        matches!(self, Mark::Own | Mark::Both)
    }

    /// The node's "has marked descendant" flag.
    pub fn has_descendant(self) -> bool {
        matches!(self, Mark::Descendant | Mark::Both)
    }

    /// Whether anything at or below the node is marked.
    pub fn is_active(self) -> bool {
        self != Mark::None
    }

    pub fn with_own(self, own: bool) -> Self {
        Mark::from_parts(own, self.has_descendant())
    }

    pub fn with_descendant(self, descendant: bool) -> Self {
        Mark::from_parts(self.is_set(), descendant)
    }

    /// Descendant bit folded from child marks.
    pub fn fold_children<I>(self, children: I) -> Self
    where
        I: IntoIterator<Item = Mark>,
    {
        self.with_descendant(children.into_iter().any(Mark::is_active))
    }
}

/// Both channels of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeState {
    pub selection: Mark,
    pub highlight: Mark,
}

impl NodeState {
    pub fn is_selected(&self) -> bool {
        self.selection.is_set()
    }

    pub fn has_selected_descendant(&self) -> bool {
        self.selection.has_descendant()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight.is_set()
    }

    pub fn has_highlight_descendant(&self) -> bool {
        self.highlight.has_descendant()
    }
}

/// Operations shared by every level of the text hierarchy.
///
/// All mutators are idempotent.
pub trait TextSelect {
    /// Select the node and everything below it.
    fn select_all(&mut self);

    /// Deselect the node and everything below it.
    fn clear_selected(&mut self);

    /// Highlight the node and everything below it.
    fn highlight_all(&mut self);

    /// Remove highlighting from the node and everything below it.
    fn clear_highlighted(&mut self);

    /// Append the node's selected text to `out`.
    fn write_selected(&self, out: &mut String);

    /// Selected text as a fresh buffer.
    fn selected_text(&self) -> String {
        let mut out = String::new();
        self.write_selected(&mut out);
        out
    }

    fn state(&self) -> NodeState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_parts() {
        assert_eq!(Mark::from_parts(true, true), Mark::Both);
        assert!(Mark::Own.is_set());
        assert!(!Mark::Own.has_descendant());
        assert!(Mark::Descendant.has_descendant());
        assert!(!Mark::Descendant.is_set());
        assert!(!Mark::None.is_active());
    }

    #[test]
    fn test_with_own_keeps_descendant() {
        assert_eq!(Mark::Descendant.with_own(true), Mark::Both);
        assert_eq!(Mark::Both.with_own(false), Mark::Descendant);
        assert_eq!(Mark::Own.with_descendant(true), Mark::Both);
    }

    #[test]
    fn test_fold_children() {
        let children = [Mark::None, Mark::Own, Mark::None];
        assert_eq!(Mark::Own.fold_children(children), Mark::Both);
        assert_eq!(Mark::Both.fold_children([Mark::None]), Mark::Own);
        assert_eq!(Mark::None.fold_children(Vec::new()), Mark::None);
    }
}
