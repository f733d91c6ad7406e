//! Derived session figures shown in the status bar and on the end screen.

use std::time::Duration;

fn round_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Hits per second, rounded to one decimal. Zero before any time has passed.
pub fn speed(hits: u32, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return 0.0;
    }
    round_1(f64::from(hits) / secs)
}

/// Percentage of clicks that hit, rounded to one decimal. Zero without clicks.
///
/// One click can take out overlapping targets, so this can exceed 100.
pub fn accuracy(hits: u32, clicks: u32) -> f64 {
    if clicks == 0 {
        return 0.0;
    }
    round_1(f64::from(hits) / f64::from(clicks) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_is_guarded_at_time_zero() {
        assert_eq!(speed(0, Duration::ZERO), 0.0);
        assert_eq!(speed(5, Duration::ZERO), 0.0);
    }

    #[test]
    fn speed_rounds_to_one_decimal() {
        assert_eq!(speed(10, Duration::from_secs(4)), 2.5);
        assert_eq!(speed(2, Duration::from_secs(3)), 0.7);
    }

    #[test]
    fn accuracy_is_guarded_without_clicks() {
        assert_eq!(accuracy(0, 0), 0.0);
    }

    #[test]
    fn accuracy_rounds_to_one_decimal() {
        assert_eq!(accuracy(1, 3), 33.3);
        assert_eq!(accuracy(2, 3), 66.7);
        assert_eq!(accuracy(4, 4), 100.0);
    }
}
