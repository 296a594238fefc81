use crate::constants::MIN_SUBMISSION_TIME_MS;
use crate::infrastructure::utils::clock::now_ms;

/// Returns `true` when the form was submitted less than
/// [`MIN_SUBMISSION_TIME_MS`] after it was loaded. Humans read and type;
/// bots post immediately.
///
/// Exactly the minimum elapsed passes. A load time far in the past also
/// passes: there is no upper bound on how long someone may sit on a form.
pub fn is_submission_too_fast(form_load_time: i64) -> bool {
    is_submission_too_fast_at(form_load_time, now_ms())
}

/// Deterministic variant taking an explicit `now` in epoch milliseconds.
pub fn is_submission_too_fast_at(form_load_time: i64, now: i64) -> bool {
    now - form_load_time < MIN_SUBMISSION_TIME_MS
}

/// The minimum milliseconds between form load and submission.
pub fn min_submission_time() -> i64 {
    MIN_SUBMISSION_TIME_MS
}
