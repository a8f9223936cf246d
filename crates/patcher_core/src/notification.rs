use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Info => "info-circle",
            NotificationKind::Success => "check-circle",
            NotificationKind::Warning => "exclamation-triangle",
            NotificationKind::Error => "exclamation-circle",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Where a displayed notification is in its show/hide lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// In the container, transition-in not started yet.
    Inserted,
    Visible,
    /// Fading out; removal follows.
    Hidden,
}

/// One timed lifecycle step, in firing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStep {
    Show,
    Hide,
    Remove,
}

impl NotificationStep {
    pub const ALL: [NotificationStep; 3] = [
        NotificationStep::Show,
        NotificationStep::Hide,
        NotificationStep::Remove,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimings {
    /// Delay before the visible style is added (next scheduling tick).
    pub show_delay: Duration,
    /// Time from creation until the visible style is removed.
    pub visible_for: Duration,
    /// Time from hiding until removal from the container.
    pub fade_out: Duration,
}

impl Default for NotificationTimings {
    fn default() -> Self {
        Self {
            show_delay: Duration::from_millis(10),
            visible_for: Duration::from_millis(5000),
            fade_out: Duration::from_millis(500),
        }
    }
}

impl NotificationTimings {
    /// Offset of `step` measured from creation.
    pub fn offset(&self, step: NotificationStep) -> Duration {
        match step {
            NotificationStep::Show => self.show_delay,
            NotificationStep::Hide => self.visible_for,
            NotificationStep::Remove => self.visible_for + self.fade_out,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.offset(NotificationStep::Remove)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Utc>,
    pub phase: NotificationPhase,
}

/// The notification container: every displayed entry, oldest first.
///
/// No cap and no deduplication; two identical messages are two entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationStack {
    entries: Vec<Notification>,
    next_id: NotificationId,
}

impl NotificationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        created_at: DateTime<Utc>,
    ) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Notification {
            id,
            message: message.into(),
            kind,
            created_at,
            phase: NotificationPhase::Inserted,
        });
        id
    }

    /// Applies a lifecycle step; returns false when nothing changed (the
    /// entry is gone or already past that step).
    pub fn apply(&mut self, id: NotificationId, step: NotificationStep) -> bool {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            return false;
        };
        let entry = &mut self.entries[index];
        match step {
            NotificationStep::Show => {
                if entry.phase != NotificationPhase::Inserted {
                    return false;
                }
                entry.phase = NotificationPhase::Visible;
            }
            NotificationStep::Hide => {
                if entry.phase == NotificationPhase::Hidden {
                    return false;
                }
                entry.phase = NotificationPhase::Hidden;
            }
            NotificationStep::Remove => {
                self.entries.remove(index);
            }
        }
        true
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn visible_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.phase == NotificationPhase::Visible)
            .count()
    }
}
