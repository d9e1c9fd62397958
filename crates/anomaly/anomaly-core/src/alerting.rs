//! Alert message formatting.

/// Format an amount with `,` thousands separators and two decimals.
///
/// `1234567.891` becomes `1,234,567.89`. Non-finite values fall back to
/// their `Display` form.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value);
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Prefix a formatted amount with a currency symbol.
pub fn format_currency(value: f64, symbol: &str) -> String {
    format!("{}{}", symbol, format_amount(value))
}

/// Message attached to an anomalous verdict.
pub fn alert_message(current: f64, mean: f64, symbol: &str) -> String {
    format!(
        "Alert: This month's cost of {} is significantly higher than your average of {}.",
        format_currency(current, symbol),
        format_currency(mean, symbol)
    )
}
