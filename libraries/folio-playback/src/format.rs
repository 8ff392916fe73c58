//! Time label formatting

/// Fallback shown when the time is not known yet
const UNKNOWN_TIME: &str = "0:00";

/// Format seconds as `M:SS`
///
/// Minutes are not padded, seconds are zero-padded to two digits.
/// `NaN`, infinities and negative values (including `-0.0`) render as `"0:00"`,
/// which covers media whose duration has not loaded yet and live streams.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds.is_sign_negative() {
        return UNKNOWN_TIME.to_string();
    }

    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}
