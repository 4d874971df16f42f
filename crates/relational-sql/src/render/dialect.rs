//! Defines the `Dialect` trait for database-specific identifier syntax.

pub trait Dialect: Send + Sync {
    /// Quotes a table or column name. A quote character inside the name is
    /// escaped by doubling it, so `we"ird` becomes `"we""ird"` in PostgreSQL.
    ///
    /// - PostgreSQL and ANSI: `"my_column"`
    /// - MySQL: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Human-readable dialect name, used in log output.
    fn name(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}

/// Standard SQL quoting, used when no specific database is targeted.
#[derive(Debug, Clone)]
pub struct Ansi;

impl Dialect for Ansi {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn name(&self) -> String {
        "ANSI".into()
    }
}
