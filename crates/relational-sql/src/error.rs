use std::error::Error as StdError;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SegmentError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Raised by a `Visitor` callback. Carried through the traversal untouched.
    #[error(transparent)]
    Visitor(Box<dyn StdError + Send + Sync>),
}

impl SegmentError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        SegmentError::InvalidArgument(message.into())
    }

    /// Wraps an error raised from inside `Visitor::enter` or `Visitor::leave`.
    pub fn visitor<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        SegmentError::Visitor(Box::new(err))
    }

    /// Recovers the original visitor error, if this is one of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match self {
            SegmentError::Visitor(err) => err.downcast_ref::<E>(),
            SegmentError::InvalidArgument(_) => None,
        }
    }
}

/// Fails with `InvalidArgument` unless `value` has at least one non-whitespace character.
pub(crate) fn require_text(value: &str, what: &str) -> Result<(), SegmentError> {
    if value.trim().is_empty() {
        debug!("Rejected blank {}", what);
        return Err(SegmentError::invalid_argument(format!(
            "{what} must not be empty"
        )));
    }
    Ok(())
}
