use chrono::NaiveDateTime;

/// Placeholder shown when a timestamp is absent entirely.
pub const UNKNOWN_DATE: &str = "Unknown";

/// Format a PDF date string (`D:YYYYMMDDHHmmss...`) as a human-readable
/// timestamp, e.g. `December 1, 2023, 02:30:45 PM`.
///
/// Inputs that do not carry the `D:` marker are returned unchanged; the
/// service uses plain `Unknown` for missing dates and that must survive the
/// round trip. Malformed digit runs also fall back to the raw input.
pub fn format_pdf_date(raw: &str) -> String {
    if raw.is_empty() {
        return UNKNOWN_DATE.to_string();
    }
    if !raw.starts_with("D:") {
        return raw.to_string();
    }

    let Some(digits) = raw.get(2..16) else {
        return raw.to_string();
    };
    match NaiveDateTime::parse_from_str(digits, "%Y%m%d%H%M%S") {
        Ok(stamp) => stamp.format("%B %-d, %Y, %I:%M:%S %p").to_string(),
        Err(_) => raw.to_string(),
    }
}
