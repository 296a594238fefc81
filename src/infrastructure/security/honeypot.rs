/// Returns `true` when the hidden honeypot field was filled in, which only
/// automated submitters do.
///
/// Whitespace-only values pass: a stray keyboard tap from a real user must
/// not get their message dropped.
pub fn is_honeypot_triggered(honeypot: Option<&str>) -> bool {
    honeypot.is_some_and(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_passes() {
        assert!(!is_honeypot_triggered(None));
    }

    #[test]
    fn empty_and_whitespace_values_pass() {
        for value in ["", " ", "\t", "  \t  "] {
            assert!(!is_honeypot_triggered(Some(value)), "input: {value:?}");
        }
    }

    #[test]
    fn non_blank_value_triggers() {
        for value in ["x", "bot@spam.com", " filled "] {
            assert!(is_honeypot_triggered(Some(value)), "input: {value:?}");
        }
    }
}
