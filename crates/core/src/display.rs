//! Display helpers for money and percentages.
//!
//! Percentages everywhere in this crate are already scaled (13.8 means
//! 13.8 %), so nothing here divides by 100.

/// Round to cents, folding `-0.00` into `0.00`.
fn round_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn currency_prefix(currency: &str) -> String {
    let code = currency.trim().to_uppercase();
    match code.as_str() {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        _ => format!("{code} "),
    }
}

/// `1234567.891` → `"1,234,567.89"` (input must be non-negative)
fn group_thousands(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{grouped}.{frac_part}")
}

/// `format_currency(-1234.5, "USD")` → `"-$1,234.50"`
pub fn format_currency(value: f64, currency: &str) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let rounded = round_cents(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{}{}", currency_prefix(currency), group_thousands(rounded.abs()))
}

/// `format_percentage(13.8)` → `"+13.80%"`, zero has no sign.
pub fn format_percentage(pct: f64) -> String {
    if !pct.is_finite() {
        return "N/A".to_string();
    }
    let rounded = round_cents(pct);
    let sign = if rounded > 0.0 {
        "+"
    } else if rounded < 0.0 {
        "-"
    } else {
        ""
    };
    format!("{sign}{:.2}%", rounded.abs())
}

/// Day-change label: `"+$4.20 (+1.05%)"`.
pub fn format_change(value: f64, pct: f64, currency: &str) -> String {
    let amount = format_currency(value, currency);
    let amount = if value.is_finite() && round_cents(value) > 0.0 {
        format!("+{amount}")
    } else {
        amount
    };
    format!("{amount} ({})", format_percentage(pct))
}
