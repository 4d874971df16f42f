//! Concrete fragments of the relational AST.

pub mod column;
pub mod comparator;
pub mod condition;
pub mod logical;
pub mod table;
