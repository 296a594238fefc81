use std::time::Duration;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Inclusive character bounds for a contact form field, measured after
/// trimming surrounding whitespace.
#[derive(Debug, Clone, Copy)]
pub struct FieldLimits {
    pub min: usize,
    pub max: usize,
}

/// Shared by the dependency-free field validator and the schema layer so the
/// two can never drift apart numerically.
pub const NAME_LIMITS: FieldLimits = FieldLimits { min: 2, max: 50 };
pub const MESSAGE_LIMITS: FieldLimits = FieldLimits { min: 10, max: 1000 };

/// Maximum contact submissions per client within one rate-limit window.
pub const RATE_LIMIT: u32 = 5;

/// Fixed rate-limit window (1 minute).
pub const RATE_WINDOW: Duration = Duration::from_secs(60);

/// How often the rate limiter sweeps expired entries (5 minutes).
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// Minimum milliseconds between form load and submission before a request
/// is treated as automated (3 seconds). Exactly this much elapsed passes.
pub const MIN_SUBMISSION_TIME_MS: i64 = 3_000;
