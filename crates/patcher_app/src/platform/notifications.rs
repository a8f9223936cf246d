use std::sync::{Mutex, PoisonError, Weak};

use chrono::Utc;
use patcher_core::{
    NotificationId, NotificationKind, NotificationStack, NotificationStep, NotificationTimings,
};
use patcher_logging::{patcher_debug, patcher_error, patcher_info, patcher_warn};
use tokio::time::Instant;

use super::ui::constants::CONTAINER_NOTIFICATIONS;

/// Shows transient messages in the page's notification container.
///
/// Each notification gets its own timer task; nothing is shared between
/// them, so overlapping notifications expire independently.
#[derive(Clone)]
pub struct NotificationManager {
    container: Weak<Mutex<NotificationStack>>,
    timings: NotificationTimings,
}

impl NotificationManager {
    pub fn new(container: Weak<Mutex<NotificationStack>>, timings: NotificationTimings) -> Self {
        Self { container, timings }
    }

    /// Returns `None` when the container is already gone.
    ///
    /// Must be called from within a tokio runtime.
    pub fn notify(&self, message: String, kind: NotificationKind) -> Option<NotificationId> {
        let container = self.container.upgrade()?;
        let id = container
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.as_str(), kind, Utc::now());
        drop(container);

        let icon = kind.icon();
        match kind {
            NotificationKind::Error => {
                patcher_error!("#{} [{}] {}", CONTAINER_NOTIFICATIONS, icon, message)
            }
            NotificationKind::Warning => {
                patcher_warn!("#{} [{}] {}", CONTAINER_NOTIFICATIONS, icon, message)
            }
            NotificationKind::Info | NotificationKind::Success => {
                patcher_info!("#{} [{}] {}", CONTAINER_NOTIFICATIONS, icon, message)
            }
        }

        let weak = self.container.clone();
        let timings = self.timings;
        let created = Instant::now();
        tokio::spawn(async move {
            for step in NotificationStep::ALL {
                tokio::time::sleep_until(created + timings.offset(step)).await;
                let Some(container) = weak.upgrade() else {
                    return;
                };
                let changed = container
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .apply(id, step);
                if changed {
                    patcher_debug!("Notification {} {:?}", id, step);
                }
            }
        });

        Some(id)
    }
}
