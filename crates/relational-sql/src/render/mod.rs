//! Renders condition trees into SQL text by walking them with a `Visitor`.

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    ast::{
        column::Column,
        condition::SimpleCondition,
        logical::{AndCondition, OrCondition},
        table::Table,
    },
    error::SegmentError,
    render::{dialect::Dialect, settings::RenderSettings},
    segment::{Segment, Visitable},
    visitor::Visitor,
};

pub mod dialect;
pub mod settings;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot render segment of kind {0}")]
    UnsupportedSegment(String),

    #[error("Leave called without a matching enter")]
    UnbalancedTraversal,

    #[error("Invalid render settings: {0}")]
    InvalidSettings(#[source] serde_json::Error),
}

/// Per-segment bookkeeping kept while the segment is entered.
struct Frame {
    kind: &'static str,
    /// Text emitted between children, e.g. ` AND `.
    separator: Option<&'static str>,
    children: usize,
}

/// A visitor that accumulates SQL text for a condition tree.
///
/// Not reusable across traversals running at the same time; create one per
/// rendering.
pub struct SqlRenderer<'a> {
    sql: String,
    dialect: &'a dyn Dialect,
    quote_identifiers: bool,
    frames: Vec<Frame>,
}

impl<'a> SqlRenderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            dialect,
            quote_identifiers: true,
            frames: Vec::new(),
        }
    }

    pub fn with_quoting(mut self, quote_identifiers: bool) -> Self {
        self.quote_identifiers = quote_identifiers;
        self
    }

    /// Consumes the renderer and returns the rendered SQL.
    pub fn finish(self) -> String {
        debug!(
            "Rendered {} bytes of {} SQL",
            self.sql.len(),
            self.dialect.name()
        );
        self.sql
    }

    fn identifier(&self, ident: &str) -> String {
        if self.quote_identifiers {
            self.dialect.quote_identifier(ident)
        } else {
            ident.to_string()
        }
    }

    fn column(&self, column: &Column) -> String {
        match column.table() {
            Some(table) => format!(
                "{}.{}",
                self.identifier(table.reference_name()),
                self.identifier(column.name())
            ),
            None => self.identifier(column.name()),
        }
    }

    fn table(&self, table: &Table) -> String {
        match table.alias() {
            Some(alias) => format!(
                "{} AS {}",
                self.identifier(table.name()),
                self.identifier(alias)
            ),
            None => self.identifier(table.name()),
        }
    }
}

impl Visitor for SqlRenderer<'_> {
    fn enter(&mut self, segment: &dyn Segment) -> Result<(), SegmentError> {
        let parent_kind = self.frames.last().map(|frame| frame.kind);

        if let Some(parent) = self.frames.last_mut() {
            if let Some(separator) = parent.separator.filter(|_| parent.children > 0) {
                self.sql.push_str(separator);
            }
            parent.children += 1;
        }

        let separator = if let Some(column) = segment.downcast_ref::<Column>() {
            let rendered = self.column(column);
            self.sql.push_str(&rendered);
            None
        } else if let Some(table) = segment.downcast_ref::<Table>() {
            // Already emitted as the column qualifier.
            if parent_kind != Some(Column::KIND) {
                let rendered = self.table(table);
                self.sql.push_str(&rendered);
            }
            None
        } else if segment.is::<SimpleCondition>() {
            None
        } else if segment.is::<AndCondition>() {
            self.sql.push('(');
            Some(" AND ")
        } else if segment.is::<OrCondition>() {
            self.sql.push('(');
            Some(" OR ")
        } else {
            warn!("No SQL rendering for {} segment", segment.kind());
            return Err(SegmentError::visitor(RenderError::UnsupportedSegment(
                segment.kind().to_string(),
            )));
        };

        self.frames.push(Frame {
            kind: segment.kind(),
            separator,
            children: 0,
        });
        Ok(())
    }

    fn leave(&mut self, segment: &dyn Segment) -> Result<(), SegmentError> {
        let frame = self
            .frames
            .pop()
            .ok_or_else(|| SegmentError::visitor(RenderError::UnbalancedTraversal))?;

        if let Some(condition) = segment.downcast_ref::<SimpleCondition>() {
            self.sql.push(' ');
            self.sql.push_str(condition.comparator());
            self.sql.push(' ');
            self.sql.push_str(condition.predicate());
        } else if frame.separator.is_some() {
            self.sql.push(')');
        }
        Ok(())
    }
}

/// Renders `root` to SQL using the dialect and quoting chosen in `settings`.
pub fn render<S>(root: &S, settings: &RenderSettings) -> Result<String, SegmentError>
where
    S: Visitable + ?Sized,
{
    let dialect = settings.dialect.dialect();
    let mut renderer = SqlRenderer::new(dialect.as_ref()).with_quoting(settings.quote_identifiers);
    root.visit(&mut renderer)?;
    Ok(renderer.finish())
}
