//! Display formatting for dollar amounts and multipliers

/// Format a dollar amount with thousands separators and 2 decimals,
/// e.g. `7540.0` -> `"7,540.00"`
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" is shown as "0.00"
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    format!("{}{}.{}", sign, grouped, cents)
}

/// Shortest decimal form, always with a fractional part (`1.0`, `7.54`)
pub fn format_multiplier(multiplier: f64) -> String {
    if multiplier.fract() == 0.0 && multiplier.is_finite() {
        format!("{:.1}", multiplier)
    } else {
        format!("{}", multiplier)
    }
}
