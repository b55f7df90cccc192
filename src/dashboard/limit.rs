//! Validation of the requested trace limit

/// Outcome of checking the limit input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitInput {
    /// Integer within `1..=max`
    Accepted(u32),
    /// Anything else, replaced by the default
    Corrected(u32),
}

impl LimitInput {
    pub fn value(&self) -> u32 {
        match self {
            LimitInput::Accepted(v) | LimitInput::Corrected(v) => *v,
        }
    }
}

/// Parse `raw` as an integer in `1..=max`.
///
/// Out-of-range values reset to `default` rather than clamping to the nearest
/// bound, so `500` becomes the default, not `max`.
pub fn validate_limit(raw: &str, default: u32, max: u32) -> LimitInput {
    match raw.trim().parse::<i64>() {
        Ok(n) if (1..=i64::from(max)).contains(&n) => LimitInput::Accepted(n as u32),
        _ => LimitInput::Corrected(default),
    }
}
