use tracing::trace;

use crate::{error::SegmentError, segment::Segment};

/// AST segment visitor.
///
/// Segments call `enter` before visiting their children and `leave` once all
/// children have been left. Implementations must accept any segment kind; use
/// [`Segment::kind`] or `downcast_ref` to pick the ones of interest.
pub trait Visitor {
    fn enter(&mut self, segment: &dyn Segment) -> Result<(), SegmentError>;

    fn leave(&mut self, _segment: &dyn Segment) -> Result<(), SegmentError> {
        Ok(())
    }
}

/// Entry-only visitors can be plain closures.
impl<F> Visitor for F
where
    F: FnMut(&dyn Segment) -> Result<(), SegmentError>,
{
    fn enter(&mut self, segment: &dyn Segment) -> Result<(), SegmentError> {
        self(segment)
    }
}

/// Runs the enter, children, leave sequence for `segment`.
///
/// Every `Visitable` implementation delegates here; `children` visits the
/// direct children in construction order and is a no-op for leaves.
pub fn walk<F>(
    segment: &dyn Segment,
    visitor: &mut dyn Visitor,
    children: F,
) -> Result<(), SegmentError>
where
    F: FnOnce(&mut dyn Visitor) -> Result<(), SegmentError>,
{
    trace!("Entering {} segment", segment.kind());
    visitor.enter(segment)?;

    children(&mut *visitor)?;

    trace!("Leaving {} segment", segment.kind());
    visitor.leave(segment)
}
