//! Money helpers. Every amount is held as integer cents.

/// Amount in cents. Negative values are losses.
pub type Cents = i64;

/// Parse a user supplied amount: `300`, `300.5`, `$1200.75`, `-20`.
/// At most two decimals are accepted.
pub fn parse_amount(input: &str) -> Option<Cents> {
    let s = input.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let s = s.strip_prefix('$').unwrap_or(s);

    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if frac.len() > 2
        || !whole.chars().all(|c| c.is_ascii_digit())
        || !frac.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }

    let whole_val: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac_val: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };

    let cents = whole_val.checked_mul(100)?.checked_add(frac_val)?;
    Some(if negative { -cents } else { cents })
}

/// Convert a decimal currency value (as used on the wire) into cents.
pub fn from_decimal(value: f64) -> Cents {
    (value * 100.0).round() as Cents
}

/// Convert cents into a decimal currency value.
pub fn to_decimal(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `123456` → `$1,234.56`, `-2000` → `-$20.00`
pub fn format_amount(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(abs / 100), abs % 100)
}

/// Like [`format_amount`] but always carries a sign: `+$130.00`, `-$20.00`.
pub fn format_signed(cents: Cents) -> String {
    if cents >= 0 {
        format!("+{}", format_amount(cents))
    } else {
        format_amount(cents)
    }
}
