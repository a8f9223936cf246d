#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the device model input box.
    InputChanged(String),
    /// User clicked one of the example model chips.
    ExampleChosen(String),
    /// User pressed the process trigger.
    SubmitClicked,
    /// Backend created the job.
    SubmissionAccepted { job_id: crate::JobId },
    /// Backend answered the creation request with an error field.
    SubmissionRejected { error: String },
    /// Creation request could not be completed.
    SubmissionFailed { reason: String },
    /// Poll interval elapsed for a job.
    PollTick { job_id: crate::JobId },
    /// Status response for a previously issued request.
    StatusReceived {
        job_id: crate::JobId,
        seq: crate::PollSeq,
        status: crate::JobStatus,
    },
    /// Status request failed; polling carries on.
    StatusFailed {
        job_id: crate::JobId,
        seq: crate::PollSeq,
        reason: String,
    },
}
