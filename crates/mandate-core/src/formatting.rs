//! Formatting utilities for display values.

/// Formats a vote count with thousands separators (e.g. `12789` -> `"12,789"`).
pub fn format_votes(votes: u32) -> String {
    let digits = votes.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a percentage with one decimal place.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
