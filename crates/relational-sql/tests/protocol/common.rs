use relational_sql::{Segment, SegmentError, Visitor};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Records every callback as `enter Kind[display]` / `leave Kind[display]`.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<String>,
}

impl Visitor for Recorder {
    fn enter(&mut self, segment: &dyn Segment) -> Result<(), SegmentError> {
        self.events
            .push(format!("enter {}[{}]", segment.kind(), segment));
        Ok(())
    }

    fn leave(&mut self, segment: &dyn Segment) -> Result<(), SegmentError> {
        self.events
            .push(format!("leave {}[{}]", segment.kind(), segment));
        Ok(())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("refusing to enter {0}")]
pub struct Refused(pub String);

/// Records like `Recorder`, but fails on entering the segment displayed as `target`.
pub struct FailOn {
    pub target: String,
    pub events: Vec<String>,
}

impl FailOn {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            events: Vec::new(),
        }
    }
}

impl Visitor for FailOn {
    fn enter(&mut self, segment: &dyn Segment) -> Result<(), SegmentError> {
        let display = segment.to_string();
        self.events.push(format!("enter {display}"));
        if display == self.target {
            return Err(SegmentError::visitor(Refused(display)));
        }
        Ok(())
    }

    fn leave(&mut self, segment: &dyn Segment) -> Result<(), SegmentError> {
        self.events.push(format!("leave {segment}"));
        Ok(())
    }
}
