use std::sync::Once;

use patcher_core::{
    update, AppState, ControllerState, Effect, JobId, Msg, NotificationKind, StageSet,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(patcher_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn error_notice(message: &str) -> Effect {
    Effect::Notify {
        message: message.to_string(),
        kind: NotificationKind::Error,
    }
}

#[test]
fn valid_submit_disables_trigger_and_starts_job() {
    init_logging();
    let (mut state, effects) = submit(AppState::new(), "  abcd1234 ");
    let view = state.view();

    assert_eq!(view.controller, ControllerState::Submitting);
    assert!(!view.trigger_enabled);
    assert!(view.progress.visible);
    assert_eq!(view.progress.percent, 0);
    assert_eq!(view.progress.stages, StageSet::initial());
    assert!(!view.download.visible);
    assert!(state.consume_dirty());

    assert_eq!(effects.len(), 2);
    assert_eq!(
        effects[0],
        Effect::Notify {
            message: "Starting processing for ABCD1234".to_string(),
            kind: NotificationKind::Info,
        }
    );
    match &effects[1] {
        Effect::StartJob { model } => assert_eq!(model.as_str(), "ABCD1234"),
        other => panic!("expected StartJob, got {other:?}"),
    }
}

#[test]
fn short_model_fails_validation_without_request() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "AB");

    assert_eq!(state.controller(), ControllerState::Idle);
    assert!(state.trigger_enabled());
    assert_eq!(
        effects,
        vec![error_notice("Device model should be between 5-20 characters")]
    );
}

#[test]
fn empty_model_fails_validation_without_request() {
    init_logging();
    let (state, effects) = submit(AppState::new(), "   ");

    assert_eq!(state.controller(), ControllerState::Idle);
    assert_eq!(effects, vec![error_notice("Please enter a device model")]);
}

#[test]
fn second_submit_while_busy_is_ignored() {
    init_logging();
    let (state, _) = submit(AppState::new(), "ABCD1234");
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());

    let (state, _) = update(
        state,
        Msg::SubmissionAccepted {
            job_id: JobId::new("j1"),
        },
    );
    let (state, effects) = submit(state, "OTHER123");
    assert!(effects.is_empty());
    assert_eq!(state.controller(), ControllerState::Polling);
}

#[test]
fn accepted_submission_starts_polling() {
    init_logging();
    let (state, _) = submit(AppState::new(), "ABCD1234");
    let (state, effects) = update(
        state,
        Msg::SubmissionAccepted {
            job_id: JobId::new("j1"),
        },
    );

    assert_eq!(state.controller(), ControllerState::Polling);
    assert_eq!(state.view().job_id, Some(JobId::new("j1")));
    assert_eq!(
        effects,
        vec![Effect::StartPolling {
            job_id: JobId::new("j1")
        }]
    );
}

#[test]
fn rejected_submission_restores_trigger_and_hides_progress() {
    init_logging();
    let (state, _) = submit(AppState::new(), "ABCD1234");
    let (state, effects) = update(
        state,
        Msg::SubmissionRejected {
            error: "Backend busy".to_string(),
        },
    );
    let view = state.view();

    assert_eq!(view.controller, ControllerState::Failed);
    assert!(view.trigger_enabled);
    assert!(!view.progress.visible);
    assert_eq!(view.job_id, None);
    assert_eq!(effects, vec![error_notice("Backend busy")]);
}

#[test]
fn transport_failure_is_reported_with_prefix() {
    init_logging();
    let (state, _) = submit(AppState::new(), "ABCD1234");
    let (state, effects) = update(
        state,
        Msg::SubmissionFailed {
            reason: "connection refused".to_string(),
        },
    );

    assert_eq!(state.controller(), ControllerState::Failed);
    assert!(state.trigger_enabled());
    assert_eq!(
        effects,
        vec![error_notice(
            "Failed to start processing: connection refused"
        )]
    );
}

#[test]
fn failed_submission_accepts_new_submit() {
    init_logging();
    let (state, _) = submit(AppState::new(), "ABCD1234");
    let (state, _) = update(
        state,
        Msg::SubmissionFailed {
            reason: "offline".to_string(),
        },
    );
    let (state, effects) = submit(state, "ABCD1234");

    assert_eq!(state.controller(), ControllerState::Submitting);
    assert!(matches!(effects.last(), Some(Effect::StartJob { .. })));
}

#[test]
fn late_submission_answers_are_ignored_outside_submitting() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::SubmissionAccepted {
            job_id: JobId::new("late"),
        },
    );

    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn example_chip_sets_input_and_notifies() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::ExampleChosen("CPH2649".to_string()));

    assert_eq!(state.input(), "CPH2649");
    assert!(state.consume_dirty());
    assert_eq!(
        effects,
        vec![Effect::Notify {
            message: "Device model set to CPH2649".to_string(),
            kind: NotificationKind::Info,
        }]
    );
}
