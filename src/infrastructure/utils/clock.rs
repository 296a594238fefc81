use chrono::Utc;

/// Current wall-clock time in epoch milliseconds.
///
/// The abuse-prevention pipeline compares against client-supplied epoch
/// timestamps, so it needs wall-clock time rather than a monotonic instant.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
