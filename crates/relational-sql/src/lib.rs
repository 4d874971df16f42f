//! Composable AST for relational query fragments (tables, columns,
//! conditions) and the depth-first `Visitor` protocol renderers use to walk it.
//!
//! ```rust,ignore
//! use relational_sql::{SimpleCondition, Condition, render, RenderSettings};
//!
//! let tree = SimpleCondition::create("age", ">", ":age")?
//!     .and(SimpleCondition::create("name", "=", ":name")?);
//! let sql = render(&tree, &RenderSettings::default())?;
//! ```

pub mod ast;
pub mod error;
pub mod macros;
pub mod render;
pub mod segment;
pub mod visitor;

pub use ast::{
    column::Column,
    comparator::Comparator,
    condition::SimpleCondition,
    logical::{AndCondition, OrCondition},
    table::Table,
};
pub use error::SegmentError;
pub use render::{
    RenderError, SqlRenderer,
    dialect::{Ansi, Dialect, MySql, Postgres},
    render,
    settings::{DialectKind, RenderSettings},
};
pub use segment::{Condition, Expression, Segment, Visitable};
pub use visitor::{Visitor, walk};
