use roster_types::Amount;

use super::PLACEHOLDER;

/// en-US dollar amount with two fraction digits and thousands separators.
///
/// Numeric text formats like a number; other text is returned unchanged.
pub fn format_currency(value: Option<&Amount>) -> String {
    match value {
        None => PLACEHOLDER.to_string(),
        Some(Amount::Number(n)) => format_number(*n),
        Some(Amount::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return PLACEHOLDER.to_string();
            }
            match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => format_dollars(n),
                _ => text.clone(),
            }
        }
    }
}

/// Format a bare number, e.g. an average.
pub fn format_number(value: f64) -> String {
    if value.is_finite() {
        format_dollars(value)
    } else {
        PLACEHOLDER.to_string()
    }
}

fn format_dollars(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}
