/// Formats elapsed seconds as `MM:SS.d`.
///
/// The seconds field is rounded to one decimal and then truncated, while the tenths
/// digit is truncated from the raw sub-second part, so `0.96` reads `00:01.9`. A
/// seconds field that rounds up to 60 rolls over to the next minute with a zero
/// tenths digit.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return "00:00.0".to_string();
    }

    let tenths = ((secs * 1000.0) % 1000.0) as u64 / 100;
    let seconds = round_to_tenth(secs % 60.0) as u64;
    let minutes = (secs / 60.0).floor() as u64;

    if seconds >= 60 {
        return format!("{:02}:00.0", minutes + 1);
    }
    format!("{minutes:02}:{seconds:02}.{tenths}")
}

/// Rounds to one decimal from the exact binary value, so `0.95` (stored just below
/// it) rounds down. Scaling by ten first would round it up.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
