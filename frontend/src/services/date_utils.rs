use chrono::{Datelike, NaiveDate};
use js_sys::Date;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Today as YYYY-MM-DD, the value format of a date input
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// (month 1-12, year) of today
pub fn current_month_year() -> (u32, i32) {
    let today = today();
    (today.month(), today.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_iso_shape() {
        let iso = today_iso();
        assert_eq!(iso.len(), 10);
        assert!(shared::format::parse_date(&iso).is_some());
    }

    #[wasm_bindgen_test]
    fn test_current_month_in_range() {
        let (month, year) = current_month_year();
        assert!((1..=12).contains(&month));
        assert!(year > 2000);
    }
}
