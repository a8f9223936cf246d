use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sequence number the controller stamps on a status request.
pub type PollSeq = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartRequest<'a> {
    pub device_name: &'a str,
}

/// Raw creation response; exactly one of the two fields is expected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StartResponse {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    Accepted { job_id: String },
    Rejected { error: String },
}

/// Status payload from `GET /status/{job_id}`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusPayload {
    pub progress: i64,
    pub status: String,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Submitted {
        device_name: String,
        result: Result<StartOutcome, BackendError>,
    },
    PollTick {
        job_id: String,
    },
    Status {
        job_id: String,
        seq: PollSeq,
        result: Result<StatusPayload, BackendError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}
