use crate::{
    validate, AppState, ControllerState, DownloadLink, Effect, JobId, JobStatus, Msg,
    NotificationKind,
};

pub const COMPLETED_MESSAGE: &str = "120FPS file generated successfully!";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::ExampleChosen(model) => {
            let message = format!("Device model set to {model}");
            state.set_input(model);
            vec![Effect::notify(message, NotificationKind::Info)]
        }
        Msg::SubmitClicked => {
            // The disabled trigger is the only guard against a second job.
            if !state.trigger_enabled() {
                return (state, Vec::new());
            }
            match validate(state.input()) {
                Err(err) => vec![Effect::notify(err.to_string(), NotificationKind::Error)],
                Ok(model) => {
                    state.begin_submission();
                    vec![
                        Effect::notify(
                            format!("Starting processing for {model}"),
                            NotificationKind::Info,
                        ),
                        Effect::StartJob { model },
                    ]
                }
            }
        }
        Msg::SubmissionAccepted { job_id } => {
            if state.controller() != ControllerState::Submitting {
                return (state, Vec::new());
            }
            state.accept_job(job_id.clone());
            vec![Effect::StartPolling { job_id }]
        }
        Msg::SubmissionRejected { error } => {
            if state.controller() != ControllerState::Submitting {
                return (state, Vec::new());
            }
            state.fail_submission();
            vec![Effect::notify(error, NotificationKind::Error)]
        }
        Msg::SubmissionFailed { reason } => {
            if state.controller() != ControllerState::Submitting {
                return (state, Vec::new());
            }
            state.fail_submission();
            vec![Effect::notify(
                format!("Failed to start processing: {reason}"),
                NotificationKind::Error,
            )]
        }
        Msg::PollTick { job_id } => {
            if !state.is_polling(&job_id) {
                return (state, Vec::new());
            }
            match state.next_poll_seq() {
                Some(seq) => vec![Effect::RequestStatus { job_id, seq }],
                None => Vec::new(),
            }
        }
        Msg::StatusReceived {
            job_id,
            seq,
            status,
        } => {
            // Stragglers for a finished job and responses overtaken by a
            // newer one are dropped.
            if !state.is_polling(&job_id) || !state.claim_response(seq) {
                return (state, Vec::new());
            }
            apply_status(&mut state, job_id, &status)
        }
        Msg::StatusFailed { .. } => Vec::new(),
    };

    (state, effects)
}

fn apply_status(state: &mut AppState, job_id: JobId, status: &JobStatus) -> Vec<Effect> {
    state.apply_status(status);

    if status.is_complete() {
        let link = status
            .download_url
            .as_deref()
            .map(|url| DownloadLink::from_status(url, status.filename.as_deref()));
        state.complete_job(link);
        vec![
            Effect::StopPolling { job_id },
            Effect::notify(COMPLETED_MESSAGE, NotificationKind::Success),
        ]
    } else if status.is_failure() {
        state.fail_job();
        vec![
            Effect::StopPolling { job_id },
            Effect::notify(status.status.clone(), NotificationKind::Error),
        ]
    } else {
        Vec::new()
    }
}
