//! Patcher core: pure job-lifecycle state machine and view-model helpers.
mod download;
mod effect;
mod msg;
mod notification;
mod stages;
mod state;
mod update;
mod validate;
mod view_model;

pub use download::{rewrite_download_path, DownloadLink, FILE_SEGMENT, STREAM_SEGMENT};
pub use effect::Effect;
pub use msg::Msg;
pub use notification::{
    Notification, NotificationId, NotificationKind, NotificationPhase, NotificationStack,
    NotificationStep, NotificationTimings,
};
pub use stages::{StageSet, STAGE_COUNT, STAGE_STEP};
pub use state::{AppState, ControllerState, JobHandle, JobId, JobStatus, PollSeq};
pub use update::{update, COMPLETED_MESSAGE};
pub use validate::{validate, DeviceModel, ValidationError, MAX_MODEL_LEN, MIN_MODEL_LEN};
pub use view_model::{AppViewModel, DownloadView, ProgressView};
