//! Static room inventory and the price calculator.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::RoomType;

/// Per-type inventory entry: nightly price, optional monthly rate for
/// long stays, and the ordered list of physical room ids.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomTypeConfig {
    pub price_per_night: i32,
    pub price_per_month: Option<i32>,
    pub room_ids: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RoomCatalog {
    small: RoomTypeConfig,
    big: RoomTypeConfig,
}

impl Default for RoomCatalog {
    fn default() -> Self {
        RoomCatalog {
            small: RoomTypeConfig {
                price_per_night: 700,
                price_per_month: Some(16000),
                room_ids: ["11", "12", "13", "14", "21", "22", "23", "24"]
                    .map(str::to_owned)
                    .to_vec(),
            },
            big: RoomTypeConfig {
                price_per_night: 900,
                price_per_month: Some(19000),
                room_ids: ["31", "32", "33", "34"].map(str::to_owned).to_vec(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    pub nights: i64,
    pub price_per_night: i32,
    pub total: i32,
}

impl RoomCatalog {
    pub fn new(small: RoomTypeConfig, big: RoomTypeConfig) -> Self {
        RoomCatalog { small, big }
    }

    pub fn config(&self, room_type: RoomType) -> &RoomTypeConfig {
        match room_type {
            RoomType::Small => &self.small,
            RoomType::Big => &self.big,
        }
    }

    pub fn room_ids(&self, room_type: RoomType) -> &[String] {
        &self.config(room_type).room_ids
    }

    pub fn total_rooms(&self, room_type: RoomType) -> usize {
        self.config(room_type).room_ids.len()
    }

    /// Nights and total price for a stay. Stays of 30 nights and more
    /// are billed per full month at the monthly rate plus the remainder
    /// at the nightly rate. A same-day stay is billed as one night.
    pub fn price_quote(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_type: RoomType,
    ) -> PriceQuote {
        let config = self.config(room_type);
        let nights = (check_out - check_in).num_days().max(1);
        let price_per_night = config.price_per_night;

        let total = match config.price_per_month {
            Some(monthly) if nights >= 30 => {
                let full_months = (nights / 30) as i32;
                let remainder_days = (nights % 30) as i32;
                full_months * monthly + remainder_days * price_per_night
            }
            _ => nights as i32 * price_per_night,
        };

        PriceQuote {
            nights,
            price_per_night,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::DATE_FMT;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FMT).unwrap()
    }

    #[test]
    fn short_stay_is_nightly_rate() {
        let catalog = RoomCatalog::default();
        let quote = catalog
            .price_quote(d("2024-06-01"), d("2024-06-04"), RoomType::Small);
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.total, 3 * 700);
    }

    #[test]
    fn forty_five_nights_bill_one_month_plus_remainder() {
        let catalog = RoomCatalog::default();
        let quote = catalog
            .price_quote(d("2024-06-01"), d("2024-07-16"), RoomType::Big);
        assert_eq!(quote.nights, 45);
        assert_eq!(quote.total, 19000 + 15 * 900);
    }

    #[test]
    fn same_day_stay_bills_one_night() {
        let catalog = RoomCatalog::default();
        let quote = catalog
            .price_quote(d("2024-06-01"), d("2024-06-01"), RoomType::Small);
        assert_eq!(quote.nights, 1);
        assert_eq!(quote.total, 700);
    }

    #[test]
    fn exactly_thirty_nights_use_monthly_rate() {
        let catalog = RoomCatalog::default();
        let quote = catalog
            .price_quote(d("2024-06-01"), d("2024-07-01"), RoomType::Small);
        assert_eq!(quote.nights, 30);
        assert_eq!(quote.total, 16000);
    }
}
