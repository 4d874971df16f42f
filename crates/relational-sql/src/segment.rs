//! Node capabilities shared by every fragment of the AST.
//!
//! The set of node kinds is open: downstream crates add their own fragments by
//! implementing [`Segment`] (and [`Expression`] or [`Condition`] where it fits),
//! and every existing [`Visitor`] can walk them without modification.

use std::any::Any;
use std::fmt;

use crate::{
    ast::logical::{AndCondition, OrCondition},
    error::SegmentError,
    visitor::Visitor,
};

/// Anything that can drive a depth-first traversal of itself and its children.
pub trait Visitable {
    /// Calls `visitor.enter(self)`, visits each child in construction order,
    /// then calls `visitor.leave(self)`.
    ///
    /// The first error returned by the visitor aborts the traversal and is
    /// returned unchanged. No further callbacks fire after it, including the
    /// `leave` of nodes that were already entered.
    fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), SegmentError>;
}

/// A unit of a composable query-fragment tree.
pub trait Segment: Visitable + fmt::Display + fmt::Debug + Send + Sync {
    /// Stable name of the node kind, e.g. `"Column"`.
    fn kind(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

impl<'a> dyn Segment + 'a {
    pub fn is<T: Segment + 'static>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Segment + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// Left-hand operand of a condition: columns, literals, function calls.
pub trait Expression: Segment {}

/// A boolean fragment usable in a `WHERE` or `ON` clause.
pub trait Condition: Segment {
    /// Combines `self` and `other` with `AND`, keeping `self` as the first child.
    fn and<C>(self, other: C) -> AndCondition
    where
        Self: Sized + 'static,
        C: Condition + 'static,
    {
        AndCondition::new(Box::new(self), Box::new(other))
    }

    /// Combines `self` and `other` with `OR`, keeping `self` as the first child.
    fn or<C>(self, other: C) -> OrCondition
    where
        Self: Sized + 'static,
        C: Condition + 'static,
    {
        OrCondition::new(Box::new(self), Box::new(other))
    }
}
