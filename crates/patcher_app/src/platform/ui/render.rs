use std::fmt;

use patcher_core::{AppViewModel, DownloadLink};

use super::constants::*;

/// One change to a page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCommand {
    SetInputValue(String),
    SetTriggerEnabled(bool),
    SetProgressVisible(bool),
    SetProgressWidth(u8),
    SetProgressStatus(String),
    SetStepActive { step: usize, active: bool },
    SetDownloadVisible(bool),
    SetDownloadLink(DownloadLink),
}

impl fmt::Display for SurfaceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceCommand::SetInputValue(value) => write!(f, "#{INPUT_DEVICE_MODEL} = {value:?}"),
            SurfaceCommand::SetTriggerEnabled(enabled) => {
                let state = if *enabled { "enabled" } else { "disabled" };
                write!(f, "#{BUTTON_PROCESS} {state}")
            }
            SurfaceCommand::SetProgressVisible(visible) => {
                write!(f, "#{PANEL_PROGRESS} {}", visibility(*visible))
            }
            SurfaceCommand::SetProgressWidth(percent) => write!(f, "#{PROGRESS_BAR} {percent}%"),
            SurfaceCommand::SetProgressStatus(text) => write!(f, "#{LABEL_PROGRESS_STATUS} {text}"),
            SurfaceCommand::SetStepActive { step, active } => {
                let state = if *active { "active" } else { "inactive" };
                write!(f, "#{STEP_PREFIX}{step} {state}")
            }
            SurfaceCommand::SetDownloadVisible(visible) => {
                write!(f, "#{PANEL_DOWNLOAD} {}", visibility(*visible))
            }
            SurfaceCommand::SetDownloadLink(link) => match &link.suggested_name {
                Some(name) => write!(f, "#{LINK_DOWNLOAD} {} (save as {name})", link.href),
                None => write!(f, "#{LINK_DOWNLOAD} {}", link.href),
            },
        }
    }
}

fn visibility(visible: bool) -> &'static str {
    if visible {
        "shown"
    } else {
        "hidden"
    }
}

/// Full description of the page for `view`; the surface drops no-op changes.
#[allow(clippy::vec_init_then_push)]
pub fn render(view: &AppViewModel) -> Vec<SurfaceCommand> {
    let mut cmds = Vec::new();

    cmds.push(SurfaceCommand::SetInputValue(view.input.clone()));
    cmds.push(SurfaceCommand::SetTriggerEnabled(view.trigger_enabled));

    cmds.push(SurfaceCommand::SetProgressVisible(view.progress.visible));
    cmds.push(SurfaceCommand::SetProgressWidth(view.progress.percent));
    cmds.push(SurfaceCommand::SetProgressStatus(
        view.progress.status_text.clone(),
    ));
    for (index, active) in view.progress.stages.iter().enumerate() {
        cmds.push(SurfaceCommand::SetStepActive {
            step: index + 1,
            active,
        });
    }

    cmds.push(SurfaceCommand::SetDownloadVisible(view.download.visible));
    if let Some(link) = &view.download.link {
        cmds.push(SurfaceCommand::SetDownloadLink(link.clone()));
    }

    cmds
}

#[cfg(test)]
mod tests {
    use patcher_core::{update, AppState, Msg};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn idle_page_shows_first_step_only() {
        let cmds = render(&AppState::new().view());
        let steps: Vec<_> = cmds
            .iter()
            .filter_map(|cmd| match cmd {
                SurfaceCommand::SetStepActive { active, .. } => Some(*active),
                _ => None,
            })
            .collect();

        assert_eq!(steps, vec![true, false, false, false, false]);
        assert!(cmds.contains(&SurfaceCommand::SetTriggerEnabled(true)));
        assert!(cmds.contains(&SurfaceCommand::SetProgressVisible(false)));
        assert!(!cmds
            .iter()
            .any(|cmd| matches!(cmd, SurfaceCommand::SetDownloadLink(_))));
    }

    #[test]
    fn submitting_disables_trigger_and_shows_progress() {
        let (state, _) = update(AppState::new(), Msg::InputChanged("abcd1234".to_string()));
        let (state, _) = update(state, Msg::SubmitClicked);
        let cmds = render(&state.view());

        assert!(cmds.contains(&SurfaceCommand::SetTriggerEnabled(false)));
        assert!(cmds.contains(&SurfaceCommand::SetProgressVisible(true)));
        assert!(cmds.contains(&SurfaceCommand::SetProgressWidth(0)));
    }

    #[test]
    fn commands_describe_their_element() {
        assert_eq!(
            SurfaceCommand::SetStepActive {
                step: 3,
                active: true
            }
            .to_string(),
            "#step3 active"
        );
        assert_eq!(
            SurfaceCommand::SetDownloadLink(DownloadLink {
                href: "/download_file/j1".to_string(),
                suggested_name: Some("out.bin".to_string()),
            })
            .to_string(),
            "#downloadLink /download_file/j1 (save as out.bin)"
        );
    }
}
