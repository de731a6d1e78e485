use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Annotation category attached to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkKind {
    /// Candidate digits written in the middle of the cell
    Centre,
    /// Candidate digits written along the edges of the cell
    Corner,
    /// Highlight colours
    Colour,
}

impl MarkKind {
    pub const ALL: [MarkKind; 3] = [MarkKind::Centre, MarkKind::Corner, MarkKind::Colour];

    /// Parse the lowercase name used by the bindings layer
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "centre" | "center" => Some(MarkKind::Centre),
            "corner" => Some(MarkKind::Corner),
            "colour" | "color" => Some(MarkKind::Colour),
            _ => None,
        }
    }
}

/// A set of distinct free-form marks for one cell and one category.
///
/// Marks are kept sorted, so [`Annotations::get`] always enumerates them in
/// ascending string order. Every operation succeeds; an empty string is a
/// mark like any other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotations {
    marks: BTreeSet<String>,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mark: impl Into<String>) {
        self.marks.insert(mark.into());
    }

    /// Remove a mark, returning whether it was present
    pub fn delete(&mut self, mark: &str) -> bool {
        self.marks.remove(mark)
    }

    /// Flip membership of `mark`
    pub fn toggle(&mut self, mark: impl Into<String>) {
        let mark = mark.into();
        if !self.marks.remove(&mark) {
            self.marks.insert(mark);
        }
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Marks in ascending order
    pub fn get(&self) -> Vec<String> {
        self.marks.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.marks.iter().map(String::as_str)
    }

    /// Smallest mark, if any
    pub fn first(&self) -> Option<&str> {
        self.marks.first().map(String::as_str)
    }

    pub fn contains(&self, mark: &str) -> bool {
        self.marks.contains(mark)
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Annotations {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Annotations {
            marks: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_is_sorted() {
        let mut marks = Annotations::new();
        marks.add("3");
        marks.add("1");
        marks.add("2");
        assert_eq!(marks.get(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut marks = Annotations::new();
        marks.add("5");
        marks.add("5");
        assert_eq!(marks.len(), 1);
    }

    #[test]
    fn test_delete_reports_presence() {
        let mut marks: Annotations = ["4"].into_iter().collect();
        assert!(marks.delete("4"));
        assert!(!marks.delete("4"));
        assert!(marks.is_empty());
    }

    #[test]
    fn test_toggle_twice_is_no_op() {
        let mut marks: Annotations = ["1", "9"].into_iter().collect();
        let before = marks.clone();

        marks.toggle("5");
        assert!(marks.contains("5"));
        marks.toggle("5");
        assert_eq!(marks, before);

        marks.toggle("9");
        assert!(!marks.contains("9"));
        marks.toggle("9");
        assert_eq!(marks, before);
    }

    #[test]
    fn test_empty_string_is_a_mark() {
        let mut marks = Annotations::new();
        marks.toggle("");
        assert_eq!(marks.get(), vec![""]);
        assert_eq!(marks.first(), Some(""));
    }

    #[test]
    fn test_clear() {
        let mut marks: Annotations = ["red", "blue"].into_iter().collect();
        marks.clear();
        assert!(marks.is_empty());
        marks.clear();
        assert!(marks.is_empty());
    }

    #[test]
    fn test_first_is_smallest() {
        let marks: Annotations = ["red", "blue", "green"].into_iter().collect();
        assert_eq!(marks.first(), Some("blue"));
        assert_eq!(Annotations::new().first(), None);
    }

    #[test]
    fn test_mark_kind_from_name() {
        assert_eq!(MarkKind::from_name("centre"), Some(MarkKind::Centre));
        assert_eq!(MarkKind::from_name("color"), Some(MarkKind::Colour));
        assert_eq!(MarkKind::from_name("corner"), Some(MarkKind::Corner));
        assert_eq!(MarkKind::from_name("edge"), None);
    }

    #[test]
    fn test_serializes_as_sorted_array() {
        let marks: Annotations = ["b", "a"].into_iter().collect();
        assert_eq!(serde_json::to_string(&marks).unwrap(), r#"["a","b"]"#);
    }
}
