//! Bounded toast queue with timed dismissal

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;

use super::types::{Notification, NotificationKind, ToastId};
use super::{Notifier, ToastSurface};
use crate::config::NotificationsConfig;

/// Renders toasts onto a [`ToastSurface`] and keeps at most
/// `capacity` of them alive, dismissing the oldest to make room.
///
/// Cloning is cheap; clones share the same queue. Timers run on the ambient
/// tokio runtime. Without one, toasts are never auto-dismissed and dismissal
/// skips the exit transition.
#[derive(Clone)]
pub struct NotificationManager {
    inner: Arc<Inner>,
}

struct Inner {
    surface: Arc<dyn ToastSurface>,
    config: NotificationsConfig,
    state: Mutex<QueueState>,
}

#[derive(Default)]
struct QueueState {
    toasts: VecDeque<TrackedToast>,
    next_id: u64,
}

struct TrackedToast {
    id: ToastId,
    /// Exit transition started; no longer counts against capacity
    leaving: bool,
    timer: Option<JoinHandle<()>>,
}

impl NotificationManager {
    pub fn new(surface: Arc<dyn ToastSurface>, config: NotificationsConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                surface,
                config,
                state: Mutex::new(QueueState::default()),
            }),
        }
    }

    /// Show a toast and return its id.
    ///
    /// `title` defaults per kind, `duration` defaults to the configured one.
    /// A zero duration keeps the toast until it is dismissed.
    pub fn show_notification(
        &self,
        message: &str,
        kind: NotificationKind,
        title: Option<&str>,
        duration: Option<Duration>,
    ) -> ToastId {
        let duration = duration.unwrap_or_else(|| self.inner.config.default_duration());

        // Evict and insert under one lock so concurrent callers never
        // overshoot capacity.
        let (id, evicted) = {
            let mut state = self.inner.lock();
            let evicted = if state.live_count() >= self.inner.config.capacity {
                state
                    .oldest_live()
                    .and_then(|oldest| state.begin_leave(oldest).map(|timer| (oldest, timer)))
            } else {
                None
            };
            let id = ToastId(state.next_id);
            state.next_id += 1;
            state.toasts.push_back(TrackedToast {
                id,
                leaving: false,
                timer: None,
            });
            (id, evicted)
        };

        if let Some((oldest, timer)) = evicted {
            tracing::debug!(toast = %oldest, "Evicting oldest notification");
            self.inner.start_exit(oldest, timer);
        }

        let notification = Notification::new(id, kind, message, title, duration);
        self.inner.surface.mount(&notification);

        if !notification.is_persistent() {
            self.schedule_auto_dismiss(id, duration);
        }

        id
    }

    pub fn show_success(
        &self,
        message: &str,
        title: Option<&str>,
        duration: Option<Duration>,
    ) -> ToastId {
        self.show_notification(message, NotificationKind::Success, title, duration)
    }

    pub fn show_error(
        &self,
        message: &str,
        title: Option<&str>,
        duration: Option<Duration>,
    ) -> ToastId {
        self.show_notification(message, NotificationKind::Error, title, duration)
    }

    pub fn show_warning(
        &self,
        message: &str,
        title: Option<&str>,
        duration: Option<Duration>,
    ) -> ToastId {
        self.show_notification(message, NotificationKind::Warning, title, duration)
    }

    pub fn show_info(
        &self,
        message: &str,
        title: Option<&str>,
        duration: Option<Duration>,
    ) -> ToastId {
        self.show_notification(message, NotificationKind::Info, title, duration)
    }

    /// Start dismissing a toast. Returns false if it is unknown or already leaving.
    pub fn dismiss(&self, id: ToastId) -> bool {
        self.inner.dismiss(id)
    }

    /// Dismiss every live toast.
    pub fn dismiss_all(&self) {
        let ids: Vec<ToastId> = self
            .inner
            .lock()
            .toasts
            .iter()
            .filter(|t| !t.leaving)
            .map(|t| t.id)
            .collect();
        for id in ids {
            self.inner.dismiss(id);
        }
    }

    /// Number of live toasts (leaving ones excluded).
    pub fn notification_count(&self) -> usize {
        self.inner.lock().live_count()
    }

    fn schedule_auto_dismiss(&self, id: ToastId, after: Duration) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(toast = %id, "No async runtime, notification will not auto-dismiss");
            return;
        };

        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let handle = runtime.spawn(async move {
            tokio::time::sleep(after).await;
            if let Some(inner) = weak.upgrade() {
                inner.dismiss(id);
            }
        });

        let mut state = self.inner.lock();
        match state.toasts.iter_mut().find(|t| t.id == id && !t.leaving) {
            Some(toast) => toast.timer = Some(handle),
            None => handle.abort(),
        }
    }
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, QueueState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn dismiss(self: &Arc<Self>, id: ToastId) -> bool {
        let Some(timer) = self.lock().begin_leave(id) else {
            return false;
        };
        self.start_exit(id, timer);
        true
    }

    /// Run the exit transition of a toast already flagged as leaving.
    fn start_exit(self: &Arc<Self>, id: ToastId, timer: Option<JoinHandle<()>>) {
        if let Some(timer) = timer {
            timer.abort();
        }

        self.surface.begin_exit(id);

        let transition = self.config.exit_transition();
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) if !transition.is_zero() => {
                let weak = Arc::downgrade(self);
                runtime.spawn(async move {
                    tokio::time::sleep(transition).await;
                    if let Some(inner) = weak.upgrade() {
                        inner.remove(id);
                    }
                });
            }
            _ => self.remove(id),
        }
    }

    fn remove(&self, id: ToastId) {
        self.lock().toasts.retain(|t| t.id != id);
        self.surface.remove(id);
    }
}

impl QueueState {
    fn live_count(&self) -> usize {
        self.toasts.iter().filter(|t| !t.leaving).count()
    }

    fn oldest_live(&self) -> Option<ToastId> {
        self.toasts.iter().find(|t| !t.leaving).map(|t| t.id)
    }

    /// Flag a live toast as leaving and hand back its pending timer.
    /// `None` if the toast is unknown or already leaving.
    fn begin_leave(&mut self, id: ToastId) -> Option<Option<JoinHandle<()>>> {
        let toast = self.toasts.iter_mut().find(|t| t.id == id && !t.leaving)?;
        toast.leaving = true;
        Some(toast.timer.take())
    }
}

impl Notifier for NotificationManager {
    fn notify_success(&self, message: &str) {
        self.show_success(message, None, None);
    }

    fn notify_error(&self, message: &str) {
        self.show_error(message, None, None);
    }

    fn notify_warning(&self, message: &str) {
        self.show_warning(message, None, None);
    }

    fn notify_info(&self, message: &str) {
        self.show_info(message, None, None);
    }
}
