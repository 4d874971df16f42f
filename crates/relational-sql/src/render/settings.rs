use serde::{Deserialize, Serialize};

use crate::render::{
    RenderError,
    dialect::{Ansi, Dialect, MySql, Postgres},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialectKind {
    Postgres,
    #[serde(rename = "mysql")]
    MySql,
    #[default]
    Ansi,
}

impl DialectKind {
    pub fn dialect(&self) -> Box<dyn Dialect> {
        match self {
            DialectKind::Postgres => Box::new(Postgres),
            DialectKind::MySql => Box::new(MySql),
            DialectKind::Ansi => Box::new(Ansi),
        }
    }
}

/// Options controlling how `SqlRenderer` turns a condition tree into SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default)]
    pub dialect: DialectKind,

    /// When false, identifiers are emitted exactly as they were given.
    #[serde(default = "default_quote_identifiers")]
    pub quote_identifiers: bool,
}

fn default_quote_identifiers() -> bool {
    true
}

impl RenderSettings {
    pub fn new(dialect: DialectKind) -> Self {
        Self {
            dialect,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, RenderError> {
        serde_json::from_str(json).map_err(RenderError::InvalidSettings)
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            dialect: DialectKind::default(),
            quote_identifiers: default_quote_identifiers(),
        }
    }
}
