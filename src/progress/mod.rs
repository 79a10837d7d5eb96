//! Incremental progress delivery (streaming mode).
//!
//! A streaming run emits one [`ProgressEvent::Generation`] per completed
//! generation and a final [`ProgressEvent::Completed`]. Delivery is paced
//! by [`GaConfig::pace_ms`](crate::ga::GaConfig::pace_ms) and stops as soon
//! as the consumer disconnects.
//!
//! # Key Types
//!
//! - [`ProgressSink`]: Where events go (a tokio channel, a `Vec`, or your own)
//! - [`stream_run`]: Drives a run into a sink
//! - [`spawn_streaming`]: Spawns a run and hands back the receiving end
//! - [`StreamOutcome`]: How the stream ended

mod event;
mod sink;
mod stream;

pub use event::{ProgressEvent, DONE_DATA, DONE_EVENT};
pub use sink::{ProgressSink, SinkClosed};
pub use stream::{spawn_streaming, stream_run, StreamOutcome};
