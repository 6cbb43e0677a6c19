//! Display formatting

use chrono::NaiveDate;

/// Dollar amount with two decimals, e.g. `$100.00`
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Calendar date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(100.0), "$100.00");
        assert_eq!(format_money(33.333), "$33.33");
        assert_eq!(format_money(7.5), "$7.50");
    }

    #[test]
    fn test_format_date_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "2024-01-05");
    }
}
