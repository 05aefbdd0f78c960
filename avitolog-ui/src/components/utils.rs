//! Formatting helpers for views

use chrono::{DateTime, Utc};

/// Format a price in kopecks as whole rubles with grouped thousands.
///
/// Missing prices render as an em dash placeholder.
pub fn format_price_rub(minor: Option<i64>) -> String {
    let Some(minor) = minor else {
        return "—".to_string();
    };
    let rubles = (minor as f64 / 100.0).round() as i64;
    let digits = rubles.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }

    let sign = if rubles < 0 { "-" } else { "" };
    format!("{sign}{grouped}\u{a0}₽")
}

/// Average rating with one decimal.
pub fn format_rating(avg: f64) -> String {
    if avg.is_finite() {
        format!("{avg:.1}")
    } else {
        "0.0".to_string()
    }
}

/// Timestamp as `dd.mm.yyyy hh:mm` (UTC), empty when unknown.
pub fn format_timestamp(at: Option<&DateTime<Utc>>) -> String {
    at.map(|t| t.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price_rub(Some(5_500_000)), "55\u{a0}000\u{a0}₽");
        assert_eq!(format_price_rub(Some(123_456_789)), "1\u{a0}234\u{a0}568\u{a0}₽");
        assert_eq!(format_price_rub(Some(99_900)), "999\u{a0}₽");
        assert_eq!(format_price_rub(Some(0)), "0\u{a0}₽");
    }

    #[test]
    fn test_format_price_missing() {
        assert_eq!(format_price_rub(None), "—");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.26), "4.3");
        assert_eq!(format_rating(0.0), "0.0");
        assert_eq!(format_rating(f64::NAN), "0.0");
    }

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap();
        assert_eq!(format_timestamp(Some(&at)), "01.05.2024 09:05");
        assert_eq!(format_timestamp(None), "");
    }
}
