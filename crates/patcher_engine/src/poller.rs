use std::sync::Arc;
use std::time::Duration;

use patcher_logging::patcher_debug;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::{EngineEvent, EventSink};

pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// A recurring poll timer for one job.
///
/// The first tick fires one interval after the start. Cancelling (or
/// dropping) the loop fires its token once; requests already in flight are
/// not aborted.
pub struct PollLoop {
    job_id: String,
    _guard: DropGuard,
}

impl PollLoop {
    /// Must be called from within a tokio runtime.
    pub fn spawn(job_id: String, interval: Duration, sink: Arc<dyn EventSink>) -> Self {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tick_job = job_id.clone();
        let first_tick = Instant::now() + interval;

        tokio::spawn(async move {
            let mut ticker = interval_at(first_tick, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = ticker.tick() => sink.emit(EngineEvent::PollTick {
                        job_id: tick_job.clone(),
                    }),
                }
            }
            patcher_debug!("Poll loop for job {} stopped", tick_job);
        });

        Self {
            job_id,
            _guard: token.drop_guard(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn cancel(self) {
        drop(self);
    }
}
