use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, WavCueError};

// ASCII digits only: the fraction is truncated by byte index
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([0-9]+):)?([0-9]+):([0-9]+)(?:\.([0-9]+))?s?$").expect("time pattern is valid")
});

/// Parse `[H:]M:S[.fraction][s]` into seconds.
///
/// The fraction is read as milliseconds: it is right-padded with zeros or
/// truncated to exactly three digits.
pub fn parse_time(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let invalid = || WavCueError::InvalidTimeFormat(trimmed.to_string());

    let caps = TIME_RE.captures(trimmed).ok_or_else(invalid)?;
    let field = |idx: usize| -> Result<u64> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse().map_err(|_| invalid()),
            None => Ok(0),
        }
    };
    let hours = field(1)?;
    let minutes = field(2)?;
    let seconds = field(3)?;

    let millis = match caps.get(4) {
        Some(frac) => {
            let digits = frac.as_str();
            let ms_text = format!("{:0<3}", &digits[..digits.len().min(3)]);
            ms_text.parse::<u32>().map_err(|_| invalid())?
        }
        None => 0,
    };

    let whole = hours
        .checked_mul(3600)
        .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(seconds))
        .ok_or_else(invalid)?;

    Ok(whole as f64 + f64::from(millis) / 1000.0)
}

/// Format seconds as `HH:MM:SS.mmm`. Hours widen past two digits as needed.
pub fn format_time(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = total_ms % 3_600_000 / 60_000;
    let secs = total_ms % 60_000 / 1000;
    let ms = total_ms % 1000;
    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, ms)
}

/// Plain decimal seconds with three fraction digits, as audio editors expect
/// in label files.
pub fn format_label(seconds: f64) -> String {
    format!("{:.3}", seconds)
}
