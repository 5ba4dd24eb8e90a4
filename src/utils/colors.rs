/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Profit color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_profit(cents: i64) -> &'static str {
    if cents > 0 {
        GREEN
    } else if cents < 0 {
        RED
    } else {
        RESET
    }
}

/// Signed, colored amount (`+$130.00` in green, `-$20.00` in red).
pub fn colorize_profit(cents: i64) -> String {
    format!(
        "{}{}{RESET}",
        color_for_profit(cents),
        crate::utils::money::format_signed(cents)
    )
}

/// Grey placeholder for empty optional fields.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}
