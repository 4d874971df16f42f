//! The `<expression> <comparator> <predicate>` condition, e.g. `age > :age`.

use std::any::Any;
use std::fmt;

use crate::{
    ast::{column::Column, comparator::Comparator},
    error::SegmentError,
    segment::{Condition, Expression, Segment, Visitable},
    visitor::{Visitor, walk},
};

/// Simple condition consisting of an expression, a comparator and a predicate.
///
/// The comparator and predicate are kept verbatim. Whether they form valid SQL
/// is decided by whoever renders the tree.
#[derive(Debug)]
pub struct SimpleCondition {
    expression: Box<dyn Expression>,
    comparator: String,
    predicate: String,
}

impl SimpleCondition {
    pub const KIND: &'static str = "SimpleCondition";

    pub fn new(expression: Box<dyn Expression>, comparator: &str, predicate: &str) -> Self {
        Self {
            expression,
            comparator: comparator.to_string(),
            predicate: predicate.to_string(),
        }
    }

    /// Creates a condition comparing the bare column `column` to `predicate`.
    ///
    /// Only the column name is checked; see [`Column::create`].
    pub fn create(column: &str, comparator: &str, predicate: &str) -> Result<Self, SegmentError> {
        Ok(Self::new(
            Box::new(Column::create(column)?),
            comparator,
            predicate,
        ))
    }

    pub fn compare(
        column: &str,
        comparator: Comparator,
        predicate: &str,
    ) -> Result<Self, SegmentError> {
        Self::create(column, comparator.as_str(), predicate)
    }

    pub fn expression(&self) -> &dyn Expression {
        self.expression.as_ref()
    }

    pub fn comparator(&self) -> &str {
        &self.comparator
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }
}

impl Visitable for SimpleCondition {
    fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), SegmentError> {
        walk(self, visitor, |visitor| self.expression.visit(visitor))
    }
}

impl Segment for SimpleCondition {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Condition for SimpleCondition {}

impl fmt::Display for SimpleCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.expression, self.comparator, self.predicate)
    }
}
