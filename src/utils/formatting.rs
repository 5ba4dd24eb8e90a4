//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns, ignoring ANSI escapes.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(visible)), s)
}

/// Display width of `s` once ANSI color sequences are removed.
pub fn visible_width(s: &str) -> usize {
    let mut plain = String::with_capacity(s.len());
    let mut in_escape = false;
    for ch in s.chars() {
        if in_escape {
            if ch == 'm' {
                in_escape = false;
            }
        } else if ch == '\x1b' {
            in_escape = true;
        } else {
            plain.push(ch);
        }
    }
    UnicodeWidthStr::width(plain.as_str())
}

/// `50.0` → `50%`, `33.333` → `33.3%`
pub fn percent(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{:.0}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Text progress bar, `width` cells wide, for a value in [0, 100].
pub fn progress_bar(pct: f64, width: usize) -> String {
    let filled = ((pct.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    )
}
