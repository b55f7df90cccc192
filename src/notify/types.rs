//! Toast notification types and markup

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::escape::escape_html;

/// Identifier of a toast, unique per manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// Title used when the caller doesn't give one.
    pub fn default_title(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Success",
            NotificationKind::Error => "Error",
            NotificationKind::Warning => "Warning",
            NotificationKind::Info => "Information",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✕",
            NotificationKind::Warning => "⚠",
            NotificationKind::Info => "ℹ",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

impl FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "success" => Ok(NotificationKind::Success),
            "error" => Ok(NotificationKind::Error),
            "warning" => Ok(NotificationKind::Warning),
            "info" => Ok(NotificationKind::Info),
            _ => Err(format!("Invalid notification type: {}", s)),
        }
    }
}

/// A toast as handed to the surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: ToastId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Zero means the toast stays until dismissed
    pub duration: Duration,
}

impl Notification {
    pub fn new(
        id: ToastId,
        kind: NotificationKind,
        message: impl Into<String>,
        title: Option<&str>,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            kind,
            title: title.unwrap_or(kind.default_title()).to_string(),
            message: message.into(),
            duration,
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    /// HTML for the toast element. Title and message are escaped.
    pub fn markup(&self) -> String {
        format!(
            concat!(
                r#"<div class="notification notification-{kind}" id="{id}" role="alert">"#,
                r#"<div class="notification-icon">{icon}</div>"#,
                r#"<div class="notification-content">"#,
                r#"<div class="notification-title">{title}</div>"#,
                r#"<div class="notification-message">{message}</div>"#,
                r#"</div>"#,
                r#"<button class="notification-close" aria-label="Close">&times;</button>"#,
                r#"</div>"#
            ),
            kind = self.kind.as_str(),
            id = self.id,
            icon = self.kind.icon(),
            title = escape_html(&self.title),
            message = escape_html(&self.message),
        )
    }
}
