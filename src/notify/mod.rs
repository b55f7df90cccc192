//! Toast notifications
//!
//! [`NotificationManager`] owns the queue and timers; the place toasts are
//! drawn is injected as a [`ToastSurface`]. Other components only see the
//! narrow [`Notifier`] capability.

pub mod escape;
pub mod manager;
pub mod types;

pub use escape::escape_html;
pub use manager::NotificationManager;
pub use types::{Notification, NotificationKind, ToastId};

/// Where toasts are drawn.
pub trait ToastSurface: Send + Sync {
    /// Insert a new toast element.
    fn mount(&self, toast: &Notification);

    /// Start the exit transition of a toast.
    fn begin_exit(&self, id: ToastId);

    /// Remove a toast element once its transition finished.
    fn remove(&self, id: ToastId);
}

/// User feedback capability handed to the dashboard.
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);

    fn notify_error(&self, message: &str);

    fn notify_warning(&self, message: &str);

    fn notify_info(&self, message: &str);
}
