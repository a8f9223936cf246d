use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use patcher_logging::{patcher_debug, patcher_info};
use tokio::sync::mpsc;

use crate::poller::PollLoop;
use crate::{Backend, EngineEvent, PollSeq};

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::UnboundedSender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::UnboundedSender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Executes backend requests and owns the single poll-loop slot.
///
/// Every method spawns onto the current tokio runtime and reports back
/// through the sink; none of them wait for the network.
pub struct EngineHandle {
    backend: Arc<dyn Backend>,
    sink: Arc<dyn EventSink>,
    poll_interval: Duration,
    poll: Mutex<Option<PollLoop>>,
}

impl EngineHandle {
    pub fn new(backend: Arc<dyn Backend>, sink: Arc<dyn EventSink>, poll_interval: Duration) -> Self {
        Self {
            backend,
            sink,
            poll_interval,
            poll: Mutex::new(None),
        }
    }

    pub fn submit(&self, device_name: String) {
        let backend = self.backend.clone();
        let sink = self.sink.clone();
        tokio::spawn(async move {
            let result = backend.start_processing(&device_name).await;
            sink.emit(EngineEvent::Submitted {
                device_name,
                result,
            });
        });
    }

    /// Starts polling `job_id`, cancelling any loop that is still running.
    pub fn start_polling(&self, job_id: String) {
        let mut slot = self.poll.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.take() {
            patcher_debug!("Replacing poll loop for job {}", previous.job_id());
            previous.cancel();
        }
        patcher_info!("Polling job {} every {:?}", job_id, self.poll_interval);
        *slot = Some(PollLoop::spawn(job_id, self.poll_interval, self.sink.clone()));
    }

    /// Cancels the loop if it belongs to `job_id`.
    pub fn stop_polling(&self, job_id: &str) {
        let mut slot = self.poll.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.as_ref().is_some_and(|poll| poll.job_id() == job_id) {
            if let Some(poll) = slot.take() {
                poll.cancel();
                patcher_info!("Stopped polling job {}", job_id);
            }
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poll
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn request_status(&self, job_id: String, seq: PollSeq) {
        let backend = self.backend.clone();
        let sink = self.sink.clone();
        tokio::spawn(async move {
            let result = backend.job_status(&job_id).await;
            sink.emit(EngineEvent::Status {
                job_id,
                seq,
                result,
            });
        });
    }
}
