//! Formatting utilities used for console and export outputs.

/// Round to two decimals on the exact binary value, ties to even
/// (`round(v, 2)` semantics). Scaling by 100 first would round twice.
pub fn round2(v: f64) -> f64 {
    format!("{:.2}", v).parse().unwrap_or(v)
}

pub fn hours2readable(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let used = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(used)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let used = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(used)), s)
}
