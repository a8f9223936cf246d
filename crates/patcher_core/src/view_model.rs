use crate::{ControllerState, DownloadLink, JobId, StageSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub controller: ControllerState,
    pub input: String,
    pub trigger_enabled: bool,
    pub job_id: Option<JobId>,
    pub progress: ProgressView,
    pub download: DownloadView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressView {
    pub visible: bool,
    pub percent: u8,
    pub status_text: String,
    pub stages: StageSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadView {
    pub visible: bool,
    pub link: Option<DownloadLink>,
}
