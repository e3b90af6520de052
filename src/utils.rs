// src/utils.rs
use chrono::{Local, Months};

/// Parses a user-supplied amount. Anything that is not a number comes back
/// as NaN so it surfaces in the formatted output instead of being masked.
pub fn parse_amount(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats an amount as Kenyan shillings with thousands separators and
/// exactly two decimals, e.g. `KES 1,234.50`. NaN formats as `KES NaN`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "KES NaN".to_string();
    }

    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("KES {}{}.{}", sign, grouped, frac_part)
}

/// Line-item total from the raw field contents. An unparseable price
/// contributes 0, an unparseable quantity defaults to a single unit.
pub fn calculate_total_price(price_text: &str, quantity_text: &str) -> f64 {
    let price = price_text.trim().parse::<f64>().unwrap_or(0.0);
    let quantity = quantity_text.trim().parse::<i64>().unwrap_or(1);
    price * quantity as f64
}

// The action label is part of the call contract but the template never
// used it; keeping the parameter keeps call sites uniform.
pub fn confirm_message(_action: &str, item_name: &str) -> String {
    format!(
        "Are you sure you want to delete {}? This action cannot be undone.",
        item_name
    )
}

/// Default reporting window: one calendar month back until today, as
/// `YYYY-MM-DD to YYYY-MM-DD`. Month subtraction is normalized, so the
/// span is 28-31 real days depending on the month.
pub fn default_date_range() -> String {
    let today = Local::now().date_naive();
    let start = today.checked_sub_months(Months::new(1)).unwrap_or(today);
    format!("{} to {}", start.format("%Y-%m-%d"), today.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(1234.5), "KES 1,234.50");
        assert_eq!(format_currency(1_000_000.0), "KES 1,000,000.00");
        assert_eq!(format_currency(0.0), "KES 0.00");
        assert_eq!(format_currency(999.999), "KES 1,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1234.5), "KES -1,234.50");
    }

    #[test]
    fn test_unparseable_amount_formats_as_nan() {
        assert_eq!(format_currency(parse_amount("abc")), "KES NaN");
        assert_eq!(format_currency(parse_amount("")), "KES NaN");
    }

    #[test]
    fn test_parse_amount_accepts_floats() {
        assert_eq!(parse_amount("10.5"), 10.5);
        assert_eq!(parse_amount(" 42 "), 42.0);
    }

    #[test]
    fn test_calculate_total_price() {
        assert_eq!(calculate_total_price("10", "3"), 30.0);
    }

    #[test]
    fn test_calculate_total_price_defaults() {
        // Missing quantity counts as one unit, missing price as zero.
        assert_eq!(calculate_total_price("10", ""), 10.0);
        assert_eq!(calculate_total_price("", "3"), 0.0);
        assert_eq!(calculate_total_price("", ""), 0.0);
    }

    #[test]
    fn test_confirm_message_embeds_item_name() {
        let message = confirm_message("delete", "Sugar 1kg");
        assert!(message.contains("Sugar 1kg"));
    }

    #[test]
    fn test_default_date_range_shape() {
        let range = default_date_range();
        let parts: Vec<&str> = range.split(" to ").collect();
        assert_eq!(parts.len(), 2);

        let today = Local::now().date_naive();
        let expected_start = today.checked_sub_months(Months::new(1)).unwrap_or(today);
        assert_eq!(parts[0], expected_start.format("%Y-%m-%d").to_string());
        assert_eq!(parts[1], today.format("%Y-%m-%d").to_string());
    }
}
