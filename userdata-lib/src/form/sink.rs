//! Consumers of accepted snapshots.

use std::io::Write;

use crate::error::SinkError;
use crate::model::FormSnapshot;

/// Receives a snapshot once it has passed validation.
pub trait SubmissionSink {
    fn accept(&mut self, snapshot: &FormSnapshot) -> Result<(), SinkError>;
}

impl<F> SubmissionSink for F
where
    F: FnMut(&FormSnapshot),
{
    fn accept(&mut self, snapshot: &FormSnapshot) -> Result<(), SinkError> {
        self(snapshot);
        Ok(())
    }
}

/// Displays the collected data as pretty-printed JSON.
#[derive(Debug)]
pub struct JsonDisplay<W> {
    writer: W,
}

impl<W: Write> JsonDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmissionSink for JsonDisplay<W> {
    fn accept(&mut self, snapshot: &FormSnapshot) -> Result<(), SinkError> {
        let json = snapshot.to_json_pretty()?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()?;
        Ok(())
    }
}
