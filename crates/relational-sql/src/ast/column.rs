use std::any::Any;
use std::fmt;

use crate::{
    ast::table::Table,
    error::{SegmentError, require_text},
    segment::{Expression, Segment, Visitable},
    visitor::{Visitor, walk},
};

/// A column reference, optionally qualified by its owning table (`u.id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    name: String,
    table: Option<Table>,
}

impl Column {
    pub const KIND: &'static str = "Column";

    /// A bare column reference with no table qualifier.
    pub fn create(name: &str) -> Result<Self, SegmentError> {
        require_text(name, "Column name")?;
        Ok(Self {
            name: name.to_string(),
            table: None,
        })
    }

    pub fn qualified(name: &str, table: Table) -> Result<Self, SegmentError> {
        let mut column = Self::create(name)?;
        column.table = Some(table);
        Ok(column)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }
}

impl Visitable for Column {
    fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), SegmentError> {
        walk(self, visitor, |visitor| match &self.table {
            Some(table) => table.visit(visitor),
            None => Ok(()),
        })
    }
}

impl Segment for Column {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Expression for Column {}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(table) = &self.table {
            write!(f, "{}.", table.reference_name())?;
        }
        write!(f, "{}", self.name)
    }
}
