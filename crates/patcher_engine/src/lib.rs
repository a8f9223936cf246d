//! Patcher engine: backend client, poll scheduling and effect execution.
mod backend;
mod engine;
mod poller;
mod types;

pub use backend::{Backend, BackendSettings, ReqwestBackend};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use poller::{PollLoop, POLL_INTERVAL};
pub use types::{
    BackendError, EngineEvent, PollSeq, StartOutcome, StartRequest, StartResponse, StatusPayload,
};
