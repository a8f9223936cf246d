use std::fmt;

use crate::view_model::{AppViewModel, DownloadView, ProgressView};
use crate::{DownloadLink, StageSet};

/// Per-job counter stamped on every status request.
pub type PollSeq = u64;

/// Opaque backend job identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The single in-flight job. Only exists while polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    id: JobId,
    last_issued: PollSeq,
    last_applied: Option<PollSeq>,
}

impl JobHandle {
    fn new(id: JobId) -> Self {
        Self {
            id,
            last_issued: 0,
            last_applied: None,
        }
    }

    pub fn id(&self) -> &JobId {
        &self.id
    }
}

/// One status snapshot as reported by the backend.
///
/// `progress` is kept as sent; only the rendered percentage is clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatus {
    pub progress: i64,
    pub status: String,
    pub download_url: Option<String>,
    pub filename: Option<String>,
}

impl JobStatus {
    pub fn is_complete(&self) -> bool {
        self.progress == 100
    }

    /// Progress bounded to 0..=100 for the bar width and stage markers.
    pub fn percent(&self) -> u8 {
        self.progress.clamp(0, 100) as u8
    }

    /// Grouping follows the reference page: the "Error" check does not
    /// depend on progress.
    pub fn is_failure(&self) -> bool {
        (self.progress == 0 && self.status.contains("Failed")) || self.status.contains("Error")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    Submitting,
    Polling,
    Completed,
    Failed,
}

impl ControllerState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ControllerState::Completed | ControllerState::Failed)
    }

    pub fn is_busy(self) -> bool {
        matches!(self, ControllerState::Submitting | ControllerState::Polling)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    controller: ControllerState,
    input: String,
    job: Option<JobHandle>,
    trigger_enabled: bool,
    progress_visible: bool,
    progress_percent: u8,
    status_text: String,
    stages: StageSet,
    download_visible: bool,
    download_link: Option<DownloadLink>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            controller: ControllerState::Idle,
            input: String::new(),
            job: None,
            trigger_enabled: true,
            progress_visible: false,
            progress_percent: 0,
            status_text: String::new(),
            stages: StageSet::initial(),
            download_visible: false,
            download_link: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            controller: self.controller,
            input: self.input.clone(),
            trigger_enabled: self.trigger_enabled,
            job_id: self.job.as_ref().map(|job| job.id.clone()),
            progress: ProgressView {
                visible: self.progress_visible,
                percent: self.progress_percent,
                status_text: self.status_text.clone(),
                stages: self.stages,
            },
            download: DownloadView {
                visible: self.download_visible,
                link: self.download_link.clone(),
            },
            dirty: self.dirty,
        }
    }

    pub fn controller(&self) -> ControllerState {
        self.controller
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }

    pub fn job(&self) -> Option<&JobHandle> {
        self.job.as_ref()
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_submission(&mut self) {
        self.controller = ControllerState::Submitting;
        self.job = None;
        self.trigger_enabled = false;
        self.progress_visible = true;
        self.progress_percent = 0;
        self.stages = StageSet::initial();
        self.download_visible = false;
        self.dirty = true;
    }

    pub(crate) fn accept_job(&mut self, id: JobId) {
        self.controller = ControllerState::Polling;
        self.job = Some(JobHandle::new(id));
        self.dirty = true;
    }

    pub(crate) fn fail_submission(&mut self) {
        self.controller = ControllerState::Failed;
        self.job = None;
        self.trigger_enabled = true;
        self.progress_visible = false;
        self.dirty = true;
    }

    /// Returns true when `job_id` names the job currently being polled.
    pub(crate) fn is_polling(&self, job_id: &JobId) -> bool {
        self.controller == ControllerState::Polling
            && self.job.as_ref().is_some_and(|job| &job.id == job_id)
    }

    pub(crate) fn next_poll_seq(&mut self) -> Option<PollSeq> {
        let job = self.job.as_mut()?;
        job.last_issued += 1;
        Some(job.last_issued)
    }

    /// Records `seq` as applied unless a newer response was applied already.
    pub(crate) fn claim_response(&mut self, seq: PollSeq) -> bool {
        let Some(job) = self.job.as_mut() else {
            return false;
        };
        if job.last_applied.is_some_and(|applied| seq <= applied) {
            return false;
        }
        job.last_applied = Some(seq);
        true
    }

    pub(crate) fn apply_status(&mut self, status: &JobStatus) {
        let percent = status.percent();
        self.progress_percent = percent;
        self.status_text = status.status.clone();
        self.stages.update(percent);
        self.dirty = true;
    }

    pub(crate) fn complete_job(&mut self, link: Option<DownloadLink>) {
        self.controller = ControllerState::Completed;
        self.job = None;
        self.trigger_enabled = true;
        self.progress_visible = false;
        self.download_visible = true;
        if link.is_some() {
            self.download_link = link;
        }
        self.dirty = true;
    }

    pub(crate) fn fail_job(&mut self) {
        self.controller = ControllerState::Failed;
        self.job = None;
        self.trigger_enabled = true;
        self.dirty = true;
    }
}
