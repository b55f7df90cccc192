//! Toast notification configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Toast limits and timings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Maximum toasts visible at once
    pub capacity: usize,
    /// Auto-dismiss delay when the caller gives none; 0 keeps toasts until closed
    pub default_duration_ms: u64,
    /// Length of the exit transition before a toast is removed
    pub exit_transition_ms: u64,
}

impl NotificationsConfig {
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }

    pub fn exit_transition(&self) -> Duration {
        Duration::from_millis(self.exit_transition_ms)
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            default_duration_ms: 5000,
            exit_transition_ms: 300,
        }
    }
}
