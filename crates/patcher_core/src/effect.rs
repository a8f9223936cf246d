use crate::{DeviceModel, JobId, NotificationKind, PollSeq};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify {
        message: String,
        kind: NotificationKind,
    },
    StartJob {
        model: DeviceModel,
    },
    StartPolling {
        job_id: JobId,
    },
    StopPolling {
        job_id: JobId,
    },
    RequestStatus {
        job_id: JobId,
        seq: PollSeq,
    },
}

impl Effect {
    pub(crate) fn notify(message: impl Into<String>, kind: NotificationKind) -> Self {
        Effect::Notify {
            message: message.into(),
            kind,
        }
    }
}
