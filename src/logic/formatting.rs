//! Formatting and display logic
//!
//! Pure functions for turning sizes and timestamps into display strings,
//! and for normalizing human-scaled size strings back into bytes.

use chrono::{DateTime, NaiveDate, Utc};

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Format a byte count for the size column
///
/// Containers show "-"; leaves without a known size show an empty string.
///
/// # Examples
/// ```
/// use arbor::logic::formatting::format_size;
///
/// assert_eq!(format_size(None, true), "-");
/// assert_eq!(format_size(None, false), "");
/// assert_eq!(format_size(Some(512), false), "512 B");
/// assert_eq!(format_size(Some(12 * 1024), false), "12.00 KB");
/// assert_eq!(format_size(Some(1_258_291), false), "1.20 MB");
/// ```
pub fn format_size(size: Option<u64>, is_container: bool) -> String {
    if is_container {
        return "-".to_string();
    }
    match size {
        Some(bytes) => format_bytes(bytes),
        None => String::new(),
    }
}

/// Format bytes into human-readable string (e.g., "1.20 KB", "5.30 MB")
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Normalize a size string to bytes
///
/// Accepts `"<number> <unit>"` with unit KB, MB or GB (1024-based), a bare
/// number of bytes, or a number followed by `B`. Anything unparseable
/// normalizes to 0 so it sorts with unsized items.
///
/// # Examples
/// ```
/// use arbor::logic::formatting::parse_size;
///
/// assert_eq!(parse_size("245 KB"), 245 * 1024);
/// assert_eq!(parse_size("1.5MB"), 1_572_864);
/// assert_eq!(parse_size("2 GB"), 2 * 1024 * 1024 * 1024);
/// assert_eq!(parse_size("300"), 300);
/// assert_eq!(parse_size("125 GB free of 250 GB"), 0);
/// assert_eq!(parse_size(""), 0);
/// ```
pub fn parse_size(text: &str) -> u64 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }

    let split_at = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (number, unit) = text.split_at(split_at);

    let value: f64 = match number.parse() {
        Ok(v) => v,
        Err(_) => return 0,
    };

    let multiplier = match unit.trim() {
        "" | "B" => 1,
        "KB" => KB,
        "MB" => MB,
        "GB" => GB,
        _ => return 0,
    };

    (value * multiplier as f64).round() as u64
}

/// Format a timestamp for the modified column ("2023-05-15 14:02")
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Parse a seed date: RFC 3339 or a bare `YYYY-MM-DD` (midnight UTC)
///
/// # Examples
/// ```
/// use arbor::logic::formatting::{format_date, parse_date};
///
/// let d = parse_date("2023-05-15").unwrap();
/// assert_eq!(format_date(d), "2023-05-15 00:00");
/// let t = parse_date("2023-05-15T10:30:00Z").unwrap();
/// assert_eq!(format_date(t), "2023-05-15 10:30");
/// assert!(parse_date("yesterday").is_none());
/// ```
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
