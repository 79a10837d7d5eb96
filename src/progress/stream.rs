//! Paced, cancellable streaming of a GA run.
//!
//! [`stream_run`] drives an [`EvolutionRun`] one generation at a time,
//! pushing each [`GenerationRecord`](crate::ga::GenerationRecord) to a
//! [`ProgressSink`] and sleeping `pace_ms` between generations. The
//! consumer's disconnect (or the cancel flag) is checked at every
//! generation boundary; a generation is never interrupted halfway.

use super::event::ProgressEvent;
use super::sink::ProgressSink;
use crate::ga::{ConfigError, EvolutionRun, GaConfig, Knapsack, RunResult};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::info;

/// How a streaming run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamOutcome {
    /// Every generation and the terminal event were delivered.
    Completed(RunResult),
    /// The consumer went away; no further events were sent.
    Disconnected { generations_sent: usize },
    /// The cancel flag was raised; no further events were sent.
    Cancelled { generations_sent: usize },
}

impl StreamOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, StreamOutcome::Completed(_))
    }
}

/// Streams `run` into `sink` until it completes, the consumer disconnects,
/// or `cancel` is raised.
///
/// After the last generation a [`ProgressEvent::Completed`] is sent.
pub async fn stream_run<R, S>(
    mut run: EvolutionRun<R>,
    sink: &mut S,
    cancel: Option<Arc<AtomicBool>>,
) -> StreamOutcome
where
    R: Rng,
    S: ProgressSink,
{
    let pace = Duration::from_millis(run.config().pace_ms);
    let mut sent = 0usize;

    loop {
        // A finished run only owes the terminal event.
        let cancelled = cancel.as_ref().is_some_and(|flag| flag.load(Ordering::Relaxed));
        if cancelled && !run.is_finished() {
            run.cancel();
            return StreamOutcome::Cancelled {
                generations_sent: sent,
            };
        }
        if sink.is_closed() {
            return disconnected(&mut run, sent);
        }

        let Some(record) = run.step() else {
            break;
        };
        if sink.send(record.into()).is_err() {
            return disconnected(&mut run, sent);
        }
        sent += 1;

        tokio::time::sleep(pace).await;
    }

    if sink.send(ProgressEvent::Completed).is_err() {
        return disconnected(&mut run, sent);
    }
    StreamOutcome::Completed(run.finish())
}

fn disconnected<R: Rng>(run: &mut EvolutionRun<R>, sent: usize) -> StreamOutcome {
    info!(generations_sent = sent, "progress consumer disconnected");
    run.cancel();
    StreamOutcome::Disconnected {
        generations_sent: sent,
    }
}

/// Spawns a streaming run on the current tokio runtime.
///
/// Dropping the returned receiver stops the run at its next generation
/// boundary.
///
/// # Panics
/// Panics if called outside a tokio runtime.
pub fn spawn_streaming(
    knapsack: Knapsack,
    config: GaConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<(UnboundedReceiver<ProgressEvent>, JoinHandle<StreamOutcome>), ConfigError> {
    let run = EvolutionRun::new(knapsack, config)?;
    let (mut tx, rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(async move { stream_run(run, &mut tx, cancel).await });
    Ok((rx, handle))
}
