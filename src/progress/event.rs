//! Progress events and their text framing.
//!
//! Each event is framed as a server-sent-events record: a generation is a
//! `data:` line carrying `{"generation":g,"best_value":v}`, and completion
//! is a `done` event with a `[DONE]` payload.

use crate::ga::GenerationRecord;

/// Name of the SSE event that terminates a stream.
pub const DONE_EVENT: &str = "done";

/// Payload of the terminal event.
pub const DONE_DATA: &str = "[DONE]";

/// One message delivered to a streaming consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A generation finished.
    Generation(GenerationRecord),
    /// No further events will follow.
    Completed,
}

impl ProgressEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProgressEvent::Completed)
    }

    /// Renders the event as one SSE record, including the blank-line terminator.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapsack_ga::ga::GenerationRecord;
    /// use knapsack_ga::progress::ProgressEvent;
    ///
    /// let event = ProgressEvent::Generation(GenerationRecord {
    ///     generation_index: 3,
    ///     best_value: 42,
    /// });
    /// assert_eq!(
    ///     event.to_sse_frame().unwrap(),
    ///     "data: {\"generation\":3,\"best_value\":42}\n\n"
    /// );
    /// ```
    pub fn to_sse_frame(&self) -> serde_json::Result<String> {
        match self {
            ProgressEvent::Generation(record) => {
                Ok(format!("data: {}\n\n", serde_json::to_string(record)?))
            }
            ProgressEvent::Completed => Ok(format!("event: {DONE_EVENT}\ndata: {DONE_DATA}\n\n")),
        }
    }
}

impl From<GenerationRecord> for ProgressEvent {
    fn from(record: GenerationRecord) -> Self {
        ProgressEvent::Generation(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_frame() {
        let event = ProgressEvent::from(GenerationRecord {
            generation_index: 1,
            best_value: 7,
        });
        assert_eq!(
            event.to_sse_frame().unwrap(),
            "data: {\"generation\":1,\"best_value\":7}\n\n"
        );
        assert!(!event.is_terminal());
    }

    #[test]
    fn test_completed_frame() {
        let frame = ProgressEvent::Completed.to_sse_frame().unwrap();
        assert_eq!(frame, "event: done\ndata: [DONE]\n\n");
        assert!(ProgressEvent::Completed.is_terminal());
    }

    #[test]
    fn test_data_line_is_json() {
        let frame = ProgressEvent::Generation(GenerationRecord {
            generation_index: 12,
            best_value: 0,
        })
        .to_sse_frame()
        .unwrap();
        let payload = frame
            .lines()
            .find_map(|line| line.strip_prefix("data: "))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(value["generation"], 12);
        assert_eq!(value["best_value"], 0);
    }
}
