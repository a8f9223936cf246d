//! The page session: surface elements plus the notification container.
//!
//! Built once by the app and handed to the components that render into it;
//! nothing looks elements up globally.

use std::sync::{Arc, Mutex, Weak};

use patcher_core::{DownloadLink, NotificationStack, STAGE_COUNT};

use super::ui::render::SurfaceCommand;

/// Current state of every page element the controller renders into.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    pub input_value: String,
    pub trigger_enabled: bool,
    pub progress_visible: bool,
    pub progress_width: u8,
    pub progress_status: String,
    pub steps: [bool; STAGE_COUNT],
    pub download_visible: bool,
    pub download_link: Option<DownloadLink>,
}

impl Page {
    /// Applies a command; returns false when the element already matched.
    pub fn apply(&mut self, command: &SurfaceCommand) -> bool {
        match command {
            SurfaceCommand::SetInputValue(value) => replace(&mut self.input_value, value.clone()),
            SurfaceCommand::SetTriggerEnabled(enabled) => {
                replace(&mut self.trigger_enabled, *enabled)
            }
            SurfaceCommand::SetProgressVisible(visible) => {
                replace(&mut self.progress_visible, *visible)
            }
            SurfaceCommand::SetProgressWidth(percent) => {
                replace(&mut self.progress_width, *percent)
            }
            SurfaceCommand::SetProgressStatus(text) => {
                replace(&mut self.progress_status, text.clone())
            }
            SurfaceCommand::SetStepActive { step, active } => {
                match step.checked_sub(1).and_then(|i| self.steps.get_mut(i)) {
                    Some(slot) => replace(slot, *active),
                    None => false,
                }
            }
            SurfaceCommand::SetDownloadVisible(visible) => {
                replace(&mut self.download_visible, *visible)
            }
            SurfaceCommand::SetDownloadLink(link) => {
                replace(&mut self.download_link, Some(link.clone()))
            }
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

pub struct PageContext {
    page: Page,
    notifications: Arc<Mutex<NotificationStack>>,
}

impl PageContext {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            notifications: Arc::new(Mutex::new(NotificationStack::new())),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn apply(&mut self, command: &SurfaceCommand) -> bool {
        self.page.apply(command)
    }

    /// Weak handle so timers outliving the page become no-ops.
    pub fn notification_container(&self) -> Weak<Mutex<NotificationStack>> {
        Arc::downgrade(&self.notifications)
    }

    #[cfg(test)]
    pub fn notifications(&self) -> NotificationStack {
        self.notifications.lock().unwrap().clone()
    }
}
