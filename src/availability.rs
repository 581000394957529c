//! Room-availability computation: date-range overlap of the requested
//! stay against every active booking of the same type.
//!
//! Only `confirmed` bookings occupy rooms. An unconfirmed booking has
//! not claimed a room yet, a deleted one never counts. A confirmed
//! booking without an assigned room conservatively blocks the whole
//! type for its dates until staff pick a specific room.

use std::collections::HashSet;

use chrono::NaiveDate;
use log::warn;

use crate::dates::dates_between;
use crate::lifecycle::BookingStatus;
use crate::rooms::RoomCatalog;
use crate::services::db_models::Booking;
use crate::types::RoomType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub available_rooms: Vec<String>,
    pub booked_rooms: Vec<String>,
    pub total_rooms: usize,
}

/// Single membership predicate shared by both views below, so the
/// per-room and per-date calendars can never disagree on which bookings
/// count.
fn is_active(booking: &Booking) -> bool {
    BookingStatus::from_stored(&booking.status) == BookingStatus::Confirmed
}

/// A corrupt row without dates cannot participate in overlap checks;
/// skip it rather than fail the whole scan, but leave a trace.
fn stay_dates(booking: &Booking) -> Option<Vec<NaiveDate>> {
    match (booking.check_in, booking.check_out) {
        (Some(ci), Some(co)) => Some(dates_between(ci, co)),
        _ => {
            warn!(
                "booking {} has missing dates, skipping in availability scan",
                booking.id
            );
            None
        }
    }
}

/// Which rooms of `room_type` are free for the requested stay.
/// `exclude_booking` lets the edit UI ignore the booking being edited.
/// Room order follows the inventory list.
pub fn available_rooms(
    catalog: &RoomCatalog,
    room_type: RoomType,
    check_in: NaiveDate,
    check_out: NaiveDate,
    exclude_booking: Option<i64>,
    bookings: &[Booking],
) -> Availability {
    let inventory = catalog.room_ids(room_type);
    let requested: HashSet<NaiveDate> = dates_between(check_in, check_out).into_iter().collect();

    let mut booked: HashSet<&str> = HashSet::new();

    for booking in bookings {
        if !is_active(booking)
            || booking.room_type != room_type.as_str()
            || Some(booking.id) == exclude_booking
        {
            continue;
        }
        let Some(stay) = stay_dates(booking) else {
            continue;
        };
        if !stay.iter().any(|date| requested.contains(date)) {
            continue;
        }

        match &booking.room_id {
            Some(room) => {
                booked.insert(room.as_str());
            }
            // Unassigned claim: one unit of capacity, but nobody knows
            // which room, so every room of the type is off the table.
            None => {
                booked.extend(inventory.iter().map(String::as_str));
            }
        }
    }

    let available_rooms = inventory
        .iter()
        .filter(|room| !booked.contains(room.as_str()))
        .cloned()
        .collect();
    let booked_rooms = inventory
        .iter()
        .filter(|room| booked.contains(room.as_str()))
        .cloned()
        .collect();

    Availability {
        available_rooms,
        booked_rooms,
        total_rooms: inventory.len(),
    }
}

/// Dates on which the type is fully booked, sorted ascending. A date is
/// full when distinct assigned rooms plus unassigned type-level claims
/// reach the inventory count. This feeds the public calendar widget and
/// must agree with `available_rooms` on what counts as active.
pub fn unavailable_dates(
    catalog: &RoomCatalog,
    room_type: RoomType,
    bookings: &[Booking],
) -> Vec<NaiveDate> {
    use std::collections::HashMap;

    let capacity = catalog.total_rooms(room_type);

    let mut rooms_per_date: HashMap<NaiveDate, HashSet<&str>> = HashMap::new();
    let mut unassigned_per_date: HashMap<NaiveDate, usize> = HashMap::new();

    for booking in bookings {
        if !is_active(booking) || booking.room_type != room_type.as_str() {
            continue;
        }
        let Some(stay) = stay_dates(booking) else {
            continue;
        };

        for date in stay {
            match &booking.room_id {
                Some(room) => {
                    rooms_per_date.entry(date).or_default().insert(room);
                }
                None => {
                    *unassigned_per_date.entry(date).or_default() += 1;
                }
            }
        }
    }

    let mut full: Vec<NaiveDate> = rooms_per_date
        .keys()
        .chain(unassigned_per_date.keys())
        .copied()
        .collect::<HashSet<_>>()
        .into_iter()
        .filter(|date| {
            let assigned = rooms_per_date.get(date).map_or(0, HashSet::len);
            let unassigned = unassigned_per_date.get(date).copied().unwrap_or(0);
            assigned + unassigned >= capacity
        })
        .collect();
    full.sort();

    full
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::DATE_FMT;
    use crate::rooms::RoomTypeConfig;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FMT).unwrap()
    }

    fn three_small_rooms() -> RoomCatalog {
        RoomCatalog::new(
            RoomTypeConfig {
                price_per_night: 700,
                price_per_month: Some(16000),
                room_ids: vec!["22".into(), "23".into(), "32".into()],
            },
            RoomTypeConfig {
                price_per_night: 900,
                price_per_month: Some(19000),
                room_ids: vec!["41".into()],
            },
        )
    }

    fn booking(
        id: i64,
        room_id: Option<&str>,
        check_in: &str,
        check_out: &str,
        status: &str,
    ) -> Booking {
        Booking {
            id,
            room_type: "small".into(),
            room_id: room_id.map(str::to_owned),
            check_in: Some(d(check_in)),
            check_out: Some(d(check_out)),
            guests: 2,
            name: "Anna".into(),
            surname: "Kovale".into(),
            phone: "+66".into(),
            source: "user".into(),
            status: status.into(),
            total: 1400,
            created_at: d("2024-05-01").and_hms_opt(12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn no_bookings_leaves_full_inventory() {
        let catalog = three_small_rooms();
        let result = available_rooms(
            &catalog,
            RoomType::Small,
            d("2024-06-01"),
            d("2024-06-05"),
            None,
            &[],
        );
        assert_eq!(result.available_rooms, vec!["22", "23", "32"]);
        assert_eq!(result.total_rooms, 3);
        assert!(result.booked_rooms.is_empty());
    }

    #[test]
    fn overlapping_confirmed_booking_blocks_its_room() {
        let catalog = three_small_rooms();
        let bookings = [booking(1, Some("22"), "2024-06-01", "2024-06-03", "confirmed")];
        let result = available_rooms(
            &catalog,
            RoomType::Small,
            d("2024-06-02"),
            d("2024-06-04"),
            None,
            &bookings,
        );
        assert_eq!(result.available_rooms, vec!["23", "32"]);
        assert_eq!(result.booked_rooms, vec!["22"]);
    }

    #[test]
    fn checkout_day_does_not_collide_with_next_checkin() {
        let catalog = three_small_rooms();
        let bookings = [booking(1, Some("22"), "2024-06-01", "2024-06-03", "confirmed")];
        let result = available_rooms(
            &catalog,
            RoomType::Small,
            d("2024-06-03"),
            d("2024-06-05"),
            None,
            &bookings,
        );
        assert_eq!(result.available_rooms, vec!["22", "23", "32"]);
    }

    #[test]
    fn unconfirmed_and_deleted_bookings_never_block() {
        let catalog = three_small_rooms();
        let bookings = [
            booking(1, Some("22"), "2024-06-01", "2024-06-05", "unconfirmed"),
            booking(2, Some("23"), "2024-06-01", "2024-06-05", "deleted"),
        ];
        let result = available_rooms(
            &catalog,
            RoomType::Small,
            d("2024-06-02"),
            d("2024-06-03"),
            None,
            &bookings,
        );
        assert_eq!(result.available_rooms, vec!["22", "23", "32"]);
    }

    #[test]
    fn unassigned_confirmed_booking_blocks_whole_type() {
        let catalog = three_small_rooms();
        let bookings = [booking(1, None, "2024-06-05", "2024-06-06", "confirmed")];
        let result = available_rooms(
            &catalog,
            RoomType::Small,
            d("2024-06-05"),
            d("2024-06-06"),
            None,
            &bookings,
        );
        assert!(result.available_rooms.is_empty());
        assert_eq!(result.booked_rooms, vec!["22", "23", "32"]);
    }

    #[test]
    fn excluded_booking_is_ignored() {
        let catalog = three_small_rooms();
        let bookings = [booking(7, Some("22"), "2024-06-01", "2024-06-03", "confirmed")];
        let result = available_rooms(
            &catalog,
            RoomType::Small,
            d("2024-06-02"),
            d("2024-06-04"),
            Some(7),
            &bookings,
        );
        assert_eq!(result.available_rooms, vec!["22", "23", "32"]);
    }

    #[test]
    fn booking_with_missing_dates_is_skipped() {
        let catalog = three_small_rooms();
        let mut corrupt = booking(1, Some("22"), "2024-06-01", "2024-06-03", "confirmed");
        corrupt.check_out = None;
        let result = available_rooms(
            &catalog,
            RoomType::Small,
            d("2024-06-02"),
            d("2024-06-04"),
            None,
            &[corrupt],
        );
        assert_eq!(result.available_rooms, vec!["22", "23", "32"]);
    }

    #[test]
    fn date_is_full_when_rooms_plus_unassigned_reach_capacity() {
        let catalog = three_small_rooms();
        let bookings = [
            booking(1, Some("22"), "2024-07-01", "2024-07-02", "confirmed"),
            booking(2, Some("23"), "2024-07-01", "2024-07-02", "confirmed"),
            booking(3, None, "2024-07-01", "2024-07-02", "confirmed"),
        ];
        let full = unavailable_dates(&catalog, RoomType::Small, &bookings);
        assert_eq!(full, vec![d("2024-07-01")]);
    }

    #[test]
    fn duplicate_room_assignments_count_once() {
        let catalog = three_small_rooms();
        let bookings = [
            booking(1, Some("22"), "2024-07-01", "2024-07-02", "confirmed"),
            booking(2, Some("22"), "2024-07-01", "2024-07-02", "confirmed"),
            booking(3, Some("23"), "2024-07-01", "2024-07-02", "confirmed"),
        ];
        // Two distinct rooms occupied, capacity three: still open.
        assert!(unavailable_dates(&catalog, RoomType::Small, &bookings).is_empty());
    }

    #[test]
    fn unavailable_dates_come_back_sorted() {
        let catalog = three_small_rooms();
        let bookings = [
            booking(1, None, "2024-07-10", "2024-07-12", "confirmed"),
            booking(2, None, "2024-07-10", "2024-07-12", "confirmed"),
            booking(3, None, "2024-07-01", "2024-07-12", "confirmed"),
        ];
        let full = unavailable_dates(&catalog, RoomType::Small, &bookings);
        assert_eq!(full, vec![d("2024-07-10"), d("2024-07-11")]);
    }
}
