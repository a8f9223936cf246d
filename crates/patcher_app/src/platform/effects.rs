use patcher_core::{Effect, JobId, JobStatus, Msg};
use patcher_engine::{EngineEvent, EngineHandle, StartOutcome, StatusPayload};
use patcher_logging::{patcher_error, patcher_info, patcher_warn};

use super::notifications::NotificationManager;

pub struct EffectRunner {
    engine: EngineHandle,
    notifications: NotificationManager,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, notifications: NotificationManager) -> Self {
        Self {
            engine,
            notifications,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Notify { message, kind } => {
                    self.notifications.notify(message, kind);
                }
                Effect::StartJob { model } => {
                    patcher_info!("StartJob model={}", model);
                    self.engine.submit(model.into_string());
                }
                Effect::StartPolling { job_id } => {
                    self.engine.start_polling(job_id.into_string());
                }
                Effect::StopPolling { job_id } => {
                    self.engine.stop_polling(job_id.as_str());
                }
                Effect::RequestStatus { job_id, seq } => {
                    self.engine.request_status(job_id.into_string(), seq);
                }
            }
        }
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Submitted {
            device_name,
            result,
        } => match result {
            Ok(StartOutcome::Accepted { job_id }) => {
                patcher_info!("Job {} created for {}", job_id, device_name);
                Msg::SubmissionAccepted {
                    job_id: JobId::new(job_id),
                }
            }
            Ok(StartOutcome::Rejected { error }) => {
                patcher_warn!("Backend rejected {}: {}", device_name, error);
                Msg::SubmissionRejected { error }
            }
            Err(err) => {
                patcher_error!("Failed to start processing {}: {}", device_name, err);
                Msg::SubmissionFailed {
                    reason: err.to_string(),
                }
            }
        },
        EngineEvent::PollTick { job_id } => Msg::PollTick {
            job_id: JobId::new(job_id),
        },
        EngineEvent::Status {
            job_id,
            seq,
            result,
        } => match result {
            Ok(payload) => Msg::StatusReceived {
                job_id: JobId::new(job_id),
                seq,
                status: map_status(payload),
            },
            Err(err) => {
                patcher_warn!("Error checking status of job {} (#{}): {}", job_id, seq, err);
                Msg::StatusFailed {
                    job_id: JobId::new(job_id),
                    seq,
                    reason: err.to_string(),
                }
            }
        },
    }
}

fn map_status(payload: StatusPayload) -> JobStatus {
    JobStatus {
        progress: payload.progress,
        status: payload.status,
        download_url: payload.download_url,
        filename: payload.filename,
    }
}
