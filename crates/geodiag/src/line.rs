//! Lines between two arena points, optionally rotatable about their start.

use crate::point::PointId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub usize);

/// Line from `start` to `end`.
///
/// When `rotatable` is set, a drag gesture moves `end` around `start` while
/// keeping the length fixed.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub start: PointId,
    pub end: PointId,
    /// Extra CSS classes on top of the base `line` class.
    pub classes: Vec<String>,
    pub rotatable: bool,
}

impl Line {
    pub fn new(start: PointId, end: PointId) -> Self {
        Self {
            start,
            end,
            classes: Vec::new(),
            rotatable: false,
        }
    }

    pub fn rotatable(mut self, rotatable: bool) -> Self {
        self.rotatable = rotatable;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }
}
