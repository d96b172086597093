//! # Shared Formatting Utilities
//!
//! Pure display-formatting functions used across the dashboard views.
//! Every function is total: the full input domain produces a string, and
//! absent values degrade to a `-` placeholder rather than panicking.
//!
//! ## Functions
//!
//! - [`format_price`] - Currency with magnitude-dependent precision
//! - [`format_market_cap`] - Large values with T/B/M/K suffixes
//! - [`format_supply`] - Suffixed values without a currency symbol
//! - [`format_percentage`] - Signed percent change with up/down class
//! - [`format_rank`] - `#N` market-cap rank
//! - [`format_number`] - Comma-grouped number
//! - [`truncate_text`] - Ellipsis truncation
//! - [`relative_time`] - "2 hours ago" style timestamps

use chrono::{DateTime, Utc};

/// Placeholder rendered for absent values.
pub const PLACEHOLDER: &str = "-";

/// Format a number with commas (e.g. 1234567.89 -> "1,234,567.89").
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (formatted.as_str(), ""),
    };

    let negative = integer_part.starts_with('-');
    let digits = integer_part.trim_start_matches('-');

    // Add commas to the integer part
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let mut grouped: String = result.chars().rev().collect();
    if negative {
        grouped.insert(0, '-');
    }

    if decimal_part.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, decimal_part)
    }
}

/// Render `value` with `max` fraction digits, trimming trailing zeros
/// down to `min` fraction digits.
fn format_fraction(value: f64, min: usize, max: usize) -> String {
    let mut s = format!("{:.prec$}", value, prec = max);
    if let Some(dot) = s.find('.') {
        let mut frac_len = s.len() - dot - 1;
        while frac_len > min && s.ends_with('0') {
            s.pop();
            frac_len -= 1;
        }
    }
    s
}

/// Format a price with magnitude-dependent decimal places.
///
/// Exactly zero renders as `$0.00`. Sub-cent prices keep 6-8 fraction
/// digits, sub-dollar prices 4-6, everything else 2 with comma grouping.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(0.0), "$0.00");
/// assert_eq!(format_price(0.00001234), "$0.00001234");
/// assert_eq!(format_price(0.5), "$0.5000");
/// assert_eq!(format_price(64250.0), "$64,250.00");
/// ```
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }
    if price < 0.01 {
        return format!("${}", format_fraction(price, 6, 8));
    }
    if price < 1.0 {
        return format!("${}", format_fraction(price, 4, 6));
    }
    format!("${}", format_number(price, 2))
}

/// Format a market cap or volume with a magnitude suffix.
///
/// Thresholds are checked in descending order: 1e12 -> T, 1e9 -> B,
/// 1e6 -> M, 1e3 -> K, two decimal places throughout. Values below one
/// thousand render raw with two decimals.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_market_cap;
///
/// assert_eq!(format_market_cap(1_234_567_890.0), "$1.23B");
/// assert_eq!(format_market_cap(999.0), "$999.00");
/// ```
pub fn format_market_cap(value: f64) -> String {
    if value >= 1e12 {
        return format!("${:.2}T", value / 1e12);
    }
    if value >= 1e9 {
        return format!("${:.2}B", value / 1e9);
    }
    if value >= 1e6 {
        return format!("${:.2}M", value / 1e6);
    }
    if value >= 1e3 {
        return format!("${:.2}K", value / 1e3);
    }
    format!("${:.2}", value)
}

/// Format a circulating/total supply with a magnitude suffix, no currency
/// symbol. Below one thousand the raw value is comma-grouped.
pub fn format_supply(supply: f64) -> String {
    if supply >= 1e12 {
        return format!("{:.2}T", supply / 1e12);
    }
    if supply >= 1e9 {
        return format!("{:.2}B", supply / 1e9);
    }
    if supply >= 1e6 {
        return format!("{:.2}M", supply / 1e6);
    }
    if supply >= 1e3 {
        return format!("{:.2}K", supply / 1e3);
    }
    format_number(supply, 2)
}

/// A formatted percent change plus its display classification.
///
/// Zero counts as positive ("up") so a flat market renders green.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedPercentage {
    pub formatted: String,
    pub is_positive: bool,
}

/// Format a percentage change with an explicit leading sign.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_percentage;
///
/// let up = format_percentage(10.0);
/// assert_eq!(up.formatted, "+10.00%");
/// assert!(up.is_positive);
///
/// let down = format_percentage(-5.0);
/// assert_eq!(down.formatted, "-5.00%");
/// assert!(!down.is_positive);
/// ```
pub fn format_percentage(pct: f64) -> FormattedPercentage {
    let is_positive = pct >= 0.0;
    let formatted = if is_positive {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    };
    FormattedPercentage { formatted, is_positive }
}

/// Format a market-cap rank as `#N`. Unranked coins render the placeholder.
pub fn format_rank(rank: Option<u32>) -> String {
    match rank {
        Some(rank) => format!("#{}", rank),
        None => PLACEHOLDER.to_string(),
    }
}

/// Truncate text to `max_len` characters with a trailing ellipsis.
/// Operates on character boundaries, so multi-byte names are safe.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_len).collect();
    format!("{}...", truncated)
}

/// Render an RFC 3339 timestamp relative to `now` ("2 hours ago").
///
/// Unparseable input and future timestamps degrade to the placeholder and
/// "Just now" respectively.
pub fn relative_time(rfc3339: &str, now: DateTime<Utc>) -> String {
    let past = match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(ts) => ts.with_timezone(&Utc),
        Err(_) => return PLACEHOLDER.to_string(),
    };

    let elapsed = now.signed_duration_since(past);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if days > 0 {
        format!("{} day{} ago", days, if days > 1 { "s" } else { "" })
    } else if hours > 0 {
        format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" })
    } else if minutes > 0 {
        format!("{} minute{} ago", minutes, if minutes > 1 { "s" } else { "" })
    } else {
        "Just now".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_price_zero() {
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_price_sub_cent_keeps_6_to_8_fraction_digits() {
        for p in [0.00999, 0.005, 0.0001234, 0.00000012345] {
            let s = format_price(p);
            let frac = s.split('.').nth(1).unwrap().len();
            assert!((6..=8).contains(&frac), "{} -> {} has {} fraction digits", p, s, frac);
        }
    }

    #[test]
    fn test_format_price_sub_dollar() {
        assert_eq!(format_price(0.5), "$0.5000");
        assert_eq!(format_price(0.123456789), "$0.123457");
    }

    #[test]
    fn test_format_price_grouped() {
        assert_eq!(format_price(1.0), "$1.00");
        assert_eq!(format_price(64250.0), "$64,250.00");
        assert_eq!(format_price(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_market_cap_suffixes() {
        assert_eq!(format_market_cap(2.5e12), "$2.50T");
        assert_eq!(format_market_cap(1_234_567_890.0), "$1.23B");
        assert_eq!(format_market_cap(5_600_000.0), "$5.60M");
        assert_eq!(format_market_cap(12_345.0), "$12.35K");
        assert_eq!(format_market_cap(999.0), "$999.00");
    }

    #[test]
    fn test_format_supply() {
        assert_eq!(format_supply(19_700_000.0), "19.70M");
        assert_eq!(format_supply(120.5), "120.50");
    }

    #[test]
    fn test_format_percentage_sign_and_class() {
        let up = format_percentage(10.0);
        assert_eq!(up.formatted, "+10.00%");
        assert!(up.is_positive);

        let down = format_percentage(-5.0);
        assert_eq!(down.formatted, "-5.00%");
        assert!(!down.is_positive);

        // Zero classifies as up
        let flat = format_percentage(0.0);
        assert_eq!(flat.formatted, "+0.00%");
        assert!(flat.is_positive);
    }

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(Some(1)), "#1");
        assert_eq!(format_rank(Some(250)), "#250");
        assert_eq!(format_rank(None), "-");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(-9876543.2, 1), "-9,876,543.2");
        assert_eq!(format_number(17468.0, 0), "17,468");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Bitcoin", 10), "Bitcoin");
        assert_eq!(truncate_text("Wrapped Ethereum", 7), "Wrapped...");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(relative_time("2025-06-01T11:59:30Z", now), "Just now");
        assert_eq!(relative_time("2025-06-01T11:15:00Z", now), "45 minutes ago");
        assert_eq!(relative_time("2025-06-01T09:00:00Z", now), "3 hours ago");
        assert_eq!(relative_time("2025-05-30T12:00:00Z", now), "2 days ago");
        assert_eq!(relative_time("not a timestamp", now), "-");
    }
}
