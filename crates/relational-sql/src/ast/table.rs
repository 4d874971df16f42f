use std::any::Any;
use std::fmt;

use crate::{
    error::{SegmentError, require_text},
    segment::{Segment, Visitable},
    visitor::{Visitor, walk},
};

/// A table reference, e.g. `users` or `users AS u`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    name: String,
    alias: Option<String>,
}

impl Table {
    pub const KIND: &'static str = "Table";

    pub fn create(name: &str) -> Result<Self, SegmentError> {
        require_text(name, "Table name")?;
        Ok(Self {
            name: name.to_string(),
            alias: None,
        })
    }

    pub fn aliased(name: &str, alias: &str) -> Result<Self, SegmentError> {
        require_text(alias, "Table alias")?;
        let mut table = Self::create(name)?;
        table.alias = Some(alias.to_string());
        Ok(table)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Name other fragments use to qualify columns: the alias if any, else the table name.
    pub fn reference_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

impl Visitable for Table {
    fn visit(&self, visitor: &mut dyn Visitor) -> Result<(), SegmentError> {
        walk(self, visitor, |_| Ok(()))
    }
}

impl Segment for Table {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} AS {}", self.name, alias),
            None => write!(f, "{}", self.name),
        }
    }
}
