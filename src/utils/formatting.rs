//! Formatting utilities for display

use chrono::NaiveDate;

/// Group a number with comma thousands separators ("12500" -> "12,500").
pub fn format_grouped(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse a comma-grouped amount back to a number. Returns `None` for
/// anything that is not digits-and-commas.
pub fn parse_grouped(text: &str) -> Option<u32> {
    let cleaned: String = text.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Whole-dollar currency display ("$12,500").
pub fn format_currency(amount: u32) -> String {
    format!("${}", format_grouped(amount))
}

/// Table date display ("Feb 20, 2024").
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Avatar initials from a first/last name pair.
pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .next()
        .into_iter()
        .chain(last_name.chars().next())
        .collect()
}
