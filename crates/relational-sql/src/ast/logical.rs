//! `AND` / `OR` combinations of two conditions.

use std::any::Any;
use std::fmt;

use crate::{
    error::SegmentError,
    segment::{Condition, Segment, Visitable},
    visitor::{Visitor, walk},
};

#[derive(Debug)]
pub struct AndCondition {
    left: Box<dyn Condition>,
    right: Box<dyn Condition>,
}

impl AndCondition {
    pub const KIND: &'static str = "AndCondition";

    pub fn new(left: Box<dyn Condition>, right: Box<dyn Condition>) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &dyn Condition {
        self.left.as_ref()
    }

    pub fn right(&self) -> &dyn Condition {
        self.right.as_ref()
    }
}

impl Visitable for AndCondition {
    fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), SegmentError> {
        walk(self, visitor, |visitor| {
            self.left.visit(&mut *visitor)?;
            self.right.visit(visitor)
        })
    }
}

impl Segment for AndCondition {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Condition for AndCondition {}

impl fmt::Display for AndCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} AND {}", self.left, self.right)
    }
}

#[derive(Debug)]
pub struct OrCondition {
    left: Box<dyn Condition>,
    right: Box<dyn Condition>,
}

impl OrCondition {
    pub const KIND: &'static str = "OrCondition";

    pub fn new(left: Box<dyn Condition>, right: Box<dyn Condition>) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &dyn Condition {
        self.left.as_ref()
    }

    pub fn right(&self) -> &dyn Condition {
        self.right.as_ref()
    }
}

impl Visitable for OrCondition {
    fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), SegmentError> {
        walk(self, visitor, |visitor| {
            self.left.visit(&mut *visitor)?;
            self.right.visit(visitor)
        })
    }
}

impl Segment for OrCondition {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Condition for OrCondition {}

impl fmt::Display for OrCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} OR {}", self.left, self.right)
    }
}
