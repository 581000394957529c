//! Calendar-date helpers. All booking arithmetic runs on `NaiveDate`
//! values in a single reference timezone; inputs are normalized to
//! `YYYY-MM-DD` at the HTTP boundary so month/DST boundaries cannot
//! shift a stay by a day.

use chrono::{Duration, NaiveDate};

use crate::types::HotelError;

pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, HotelError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FMT)
        .map_err(|_| HotelError::validation(field))
}

/// Every date a stay occupies, ascending. The checkout day itself is
/// free (the guest leaves that morning); equal check-in and check-out
/// denote a single-day stay and yield exactly that one date.
pub fn dates_between(check_in: NaiveDate, check_out: NaiveDate) -> Vec<NaiveDate> {
    if check_in == check_out {
        return vec![check_in];
    }

    let mut dates = vec![];
    let mut current = check_in;
    while current < check_out {
        dates.push(current);
        current += Duration::days(1);
    }

    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FMT).unwrap()
    }

    #[test]
    fn excludes_checkout_day() {
        let dates = dates_between(d("2024-06-01"), d("2024-06-03"));
        assert_eq!(dates, vec![d("2024-06-01"), d("2024-06-02")]);
    }

    #[test]
    fn equal_dates_mean_single_day_stay() {
        assert_eq!(
            dates_between(d("2024-06-01"), d("2024-06-01")),
            vec![d("2024-06-01")]
        );
    }

    #[test]
    fn crosses_month_boundary_without_drift() {
        let dates = dates_between(d("2024-02-28"), d("2024-03-02"));
        assert_eq!(
            dates,
            vec![d("2024-02-28"), d("2024-02-29"), d("2024-03-01")]
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_date("06/01/2024", "checkIn").is_err());
        assert_eq!(parse_date(" 2024-06-01 ", "checkIn").unwrap(), d("2024-06-01"));
    }
}
