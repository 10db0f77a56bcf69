//! Live evaluation settings.

use std::time::Duration;

pub const DEBOUNCE_ENV: &str = "PWD_METER_DEBOUNCE_MS";

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Returns the delay before a live evaluation runs.
///
/// Priority:
/// 1. Environment variable `PWD_METER_DEBOUNCE_MS` (milliseconds)
/// 2. Default of 300ms
///
/// Unparseable values fall back to the default.
pub fn get_debounce_delay() -> Duration {
    std::env::var(DEBOUNCE_ENV)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_DEBOUNCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_debounce_default() {
        remove_env(DEBOUNCE_ENV);
        assert_eq!(get_debounce_delay(), DEFAULT_DEBOUNCE);
    }

    #[test]
    #[serial]
    fn test_debounce_from_env() {
        set_env(DEBOUNCE_ENV, "50");
        assert_eq!(get_debounce_delay(), Duration::from_millis(50));
        remove_env(DEBOUNCE_ENV);
    }

    #[test]
    #[serial]
    fn test_debounce_invalid_falls_back() {
        set_env(DEBOUNCE_ENV, "soon");
        assert_eq!(get_debounce_delay(), DEFAULT_DEBOUNCE);
        remove_env(DEBOUNCE_ENV);
    }
}
