//! Destinations for progress events.

use super::event::ProgressEvent;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

/// The consumer is gone; nothing more can be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("progress consumer disconnected")]
pub struct SinkClosed;

/// Receives the ordered events of one streaming run.
pub trait ProgressSink {
    /// Delivers one event.
    fn send(&mut self, event: ProgressEvent) -> Result<(), SinkClosed>;

    /// Returns `true` once the consumer has disconnected.
    ///
    /// Checked at every generation boundary, before any further work.
    fn is_closed(&self) -> bool {
        false
    }
}

impl ProgressSink for UnboundedSender<ProgressEvent> {
    fn send(&mut self, event: ProgressEvent) -> Result<(), SinkClosed> {
        UnboundedSender::send(self, event).map_err(|_| SinkClosed)
    }

    fn is_closed(&self) -> bool {
        UnboundedSender::is_closed(self)
    }
}

/// Collects every event in memory.
impl ProgressSink for Vec<ProgressEvent> {
    fn send(&mut self, event: ProgressEvent) -> Result<(), SinkClosed> {
        self.push(event);
        Ok(())
    }
}
