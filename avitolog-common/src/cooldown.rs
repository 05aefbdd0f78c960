//! Client-side cooldown before another import may be submitted

use crate::api_failure::ApiFailure;
use serde_json::Value;

/// Whole seconds to wait for a server-supplied delay.
///
/// Only positive finite delays start a cooldown; fractional delays round up.
pub fn cooldown_seconds(delay: f64) -> Option<u32> {
    if !delay.is_finite() || delay <= 0.0 {
        return None;
    }
    Some(delay.ceil().min(u32::MAX as f64) as u32)
}

/// Read a delay from a JSON number or a numeric string.
pub fn seconds_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Delay carried by a 429 response: the `Retry-After` header first, then the
/// body's `retry_after` field.
pub fn retry_after_seconds(failure: &ApiFailure) -> Option<u32> {
    let from_header = failure
        .retry_after
        .as_deref()
        .and_then(|h| h.trim().parse::<f64>().ok())
        .and_then(cooldown_seconds);

    from_header.or_else(|| {
        failure
            .body
            .as_ref()?
            .get("retry_after")
            .and_then(seconds_from_value)
            .and_then(cooldown_seconds)
    })
}

/// Countdown in whole seconds. Zero means submission is allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cooldown {
    remaining: u32,
}

impl Cooldown {
    /// Replace any running countdown.
    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
    }

    /// One second elapsed. Returns the seconds still remaining.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn clear(&mut self) {
        self.remaining = 0;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }
}
