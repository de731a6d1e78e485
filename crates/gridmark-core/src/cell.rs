use serde::{Deserialize, Serialize};

use crate::annotations::{Annotations, MarkKind};

/// The atomic grid unit: a value plus three independent annotation sets.
///
/// `modifiable` is fixed at construction. A fixed cell (a puzzle given)
/// silently ignores every attempt to change its value, while its marks stay
/// editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    value: String,
    modifiable: bool,
    pub centre_marks: Annotations,
    pub corner_marks: Annotations,
    pub colours: Annotations,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new("", true)
    }
}

impl Cell {
    pub fn new(value: impl Into<String>, modifiable: bool) -> Self {
        Cell {
            value: value.into(),
            modifiable,
            centre_marks: Annotations::new(),
            corner_marks: Annotations::new(),
            colours: Annotations::new(),
        }
    }

    /// Create a non-modifiable cell holding a puzzle given
    pub fn fixed(value: impl Into<String>) -> Self {
        Cell::new(value, false)
    }

    /// Current value, empty when nothing has been entered
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn modifiable(&self) -> bool {
        self.modifiable
    }

    pub fn has_value(&self) -> bool {
        !self.value.is_empty()
    }

    /// Set the value; a no-op on fixed cells. Returns whether the value changed.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        if !self.modifiable {
            return false;
        }
        let value = value.into();
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    /// Reset the value (modifiable cells only) and empty every annotation set
    pub fn clear(&mut self) {
        if self.modifiable {
            self.value.clear();
        }
        self.centre_marks.clear();
        self.corner_marks.clear();
        self.colours.clear();
    }

    pub fn marks(&self, kind: MarkKind) -> &Annotations {
        match kind {
            MarkKind::Centre => &self.centre_marks,
            MarkKind::Corner => &self.corner_marks,
            MarkKind::Colour => &self.colours,
        }
    }

    pub fn marks_mut(&mut self, kind: MarkKind) -> &mut Annotations {
        match kind {
            MarkKind::Centre => &mut self.centre_marks,
            MarkKind::Corner => &mut self.corner_marks,
            MarkKind::Colour => &mut self.colours,
        }
    }

    /// True when the cell has no value and no marks of any kind
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && MarkKind::ALL.iter().all(|kind| self.marks(*kind).is_empty())
    }
}
