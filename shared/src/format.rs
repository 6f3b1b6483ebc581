//! Display formatting: Indian Rupee amounts and calendar dates.

use chrono::NaiveDate;

/// Shown in place of a missing value
pub const PLACEHOLDER: &str = "—";

const CURRENCY_SYMBOL: &str = "₹";

/// Strip a time-of-day suffix ("2026-01-05T00:00:00" -> "2026-01-05")
pub fn date_only(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_only(date).trim(), "%Y-%m-%d").ok()
}

/// Row date, e.g. "5 Jan". Unparseable input is returned unchanged.
pub fn format_row_date(date: &str) -> String {
    match parse_date(date) {
        Some(parsed) => parsed.format("%-d %b").to_string(),
        None => date.to_string(),
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "",
    }
}

pub fn month_abbrev(month: u32) -> &'static str {
    let name = month_name(month);
    name.get(..3).unwrap_or(name)
}

/// Caption form, e.g. "January 2026"
pub fn format_month_year(month: u32, year: i32) -> String {
    format!("{} {}", month_name(month), year)
}

/// Short title form, e.g. "Jan 2026"
pub fn format_month_year_short(month: u32, year: i32) -> String {
    format!("{} {}", month_abbrev(month), year)
}

/// Rupee amount with Indian digit grouping, e.g. "₹1,23,456.78"
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{}0.00", CURRENCY_SYMBOL);
    }

    let paise_total = (amount.abs() * 100.0).round() as u64;
    let rupees = paise_total / 100;
    let paise = paise_total % 100;
    let sign = if amount < 0.0 && paise_total > 0 { "-" } else { "" };

    format!("{}{}{}.{:02}", sign, CURRENCY_SYMBOL, group_indian(rupees), paise)
}

/// Lakh/crore grouping: last three digits, then pairs
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
