//! Status state machines for bookings and food orders, plus the input
//! validation that guards every transition.
//!
//! All status strings coming from clients, Telegram callbacks or stored
//! rows pass through exactly one normalization path per lifecycle, so
//! every surface agrees on what counts as an active record.

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Deserializer};

use crate::dates::parse_date;
use crate::rooms::RoomCatalog;
use crate::services::db_models::{Booking, Order};
use crate::types::{HotelError, RoomType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Unconfirmed,
    Confirmed,
    Deleted,
}

impl BookingStatus {
    /// Strict parse for client-supplied values. Unknown strings are an
    /// input error, never coerced.
    pub fn parse(raw: &str) -> Result<Self, HotelError> {
        match raw.trim().to_lowercase().as_str() {
            "unconfirmed" => Ok(BookingStatus::Unconfirmed),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "deleted" => Ok(BookingStatus::Deleted),
            _ => Err(HotelError::InvalidStatus(raw.to_owned())),
        }
    }

    /// Lenient read for stored rows: an unrecognized legacy value falls
    /// back to `unconfirmed` with a warning instead of breaking a scan.
    pub fn from_stored(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|_| {
            warn!("unknown stored booking status '{raw}', treating as unconfirmed");
            BookingStatus::Unconfirmed
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Unconfirmed => "unconfirmed",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Deleted => "deleted",
        }
    }
}

/// A booking expires strictly after its checkout day: the guest may
/// still be on site until checkout, so `checkOut == today` is not
/// expired. Rows without a checkout date never expire. The cleanup
/// sweep's SQL filter pushes this same comparison into the UPDATE.
pub fn booking_expired(check_out: Option<NaiveDate>, today: NaiveDate) -> bool {
    matches!(check_out, Some(co) if co < today)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Unconfirmed,
    Live,
    Completed,
    Deleted,
}

impl OrderStatus {
    /// Strict parse, alias-mapped: `declined` is the legacy spelling of
    /// `deleted` and normalizes to it.
    pub fn parse(raw: &str) -> Result<Self, HotelError> {
        match raw.trim().to_lowercase().as_str() {
            "unconfirmed" => Ok(OrderStatus::Unconfirmed),
            "live" => Ok(OrderStatus::Live),
            "completed" => Ok(OrderStatus::Completed),
            "deleted" | "declined" => Ok(OrderStatus::Deleted),
            _ => Err(HotelError::InvalidStatus(raw.to_owned())),
        }
    }

    pub fn from_stored(raw: &str) -> Self {
        Self::parse(raw).unwrap_or_else(|_| {
            warn!("unknown stored order status '{raw}', treating as unconfirmed");
            OrderStatus::Unconfirmed
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Unconfirmed => "unconfirmed",
            OrderStatus::Live => "live",
            OrderStatus::Completed => "completed",
            OrderStatus::Deleted => "deleted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Confirm,
    Decline,
    Complete,
}

/// Transition table for orders: `unconfirmed -> {live, deleted}`,
/// `live -> {completed, deleted}`. Declining an already deleted order is
/// an idempotent no-op; everything else out of a terminal state fails.
pub fn next_order_status(
    current: OrderStatus,
    action: OrderAction,
) -> Result<OrderStatus, HotelError> {
    match (current, action) {
        (OrderStatus::Unconfirmed, OrderAction::Confirm) => Ok(OrderStatus::Live),
        (OrderStatus::Live, OrderAction::Complete) => Ok(OrderStatus::Completed),
        (OrderStatus::Unconfirmed, OrderAction::Decline)
        | (OrderStatus::Live, OrderAction::Decline)
        | (OrderStatus::Deleted, OrderAction::Decline) => Ok(OrderStatus::Deleted),
        (current, action) => Err(HotelError::InvalidStatus(format!(
            "cannot {} an order in status '{}'",
            match action {
                OrderAction::Confirm => "confirm",
                OrderAction::Decline => "decline",
                OrderAction::Complete => "complete",
            },
            current.as_str()
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingSource {
    User,
    Admin,
}

impl BookingSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingSource::User => "user",
            BookingSource::Admin => "admin",
        }
    }
}

/// Raw guest/admin booking submission, every field optional so that
/// validation can report the full list of violations at once.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInput {
    pub room_type: Option<String>,
    pub room_id: Option<String>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<i32>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ValidBooking {
    pub room_type: RoomType,
    pub room_id: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub source: BookingSource,
    pub status: BookingStatus,
    pub total: i32,
}

fn non_empty(value: &Option<String>, field: &str, violations: &mut Vec<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_owned(),
        _ => {
            violations.push(field.to_owned());
            String::new()
        }
    }
}

/// Validates a booking submission against the inventory and computes its
/// total. Guest bookings start `unconfirmed` and unassigned; admin
/// entries default to `confirmed` and may carry an explicit room id.
pub fn validate_booking(
    input: &BookingInput,
    source: BookingSource,
    catalog: &RoomCatalog,
) -> Result<ValidBooking, HotelError> {
    let mut violations = vec![];

    let room_type = match &input.room_type {
        Some(raw) => match RoomType::parse(raw) {
            Ok(rt) => Some(rt),
            Err(_) => {
                violations.push("roomType".to_owned());
                None
            }
        },
        None => {
            violations.push("roomType".to_owned());
            None
        }
    };

    let check_in = match &input.check_in {
        Some(raw) => parse_date(raw, "checkIn")
            .map_err(|_| violations.push("checkIn".to_owned()))
            .ok(),
        None => {
            violations.push("checkIn".to_owned());
            None
        }
    };
    let check_out = match &input.check_out {
        Some(raw) => parse_date(raw, "checkOut")
            .map_err(|_| violations.push("checkOut".to_owned()))
            .ok(),
        None => {
            violations.push("checkOut".to_owned());
            None
        }
    };

    if let (Some(ci), Some(co)) = (check_in, check_out) {
        // Equal dates are the single-day stay convention.
        if co < ci {
            violations.push("checkOut".to_owned());
        }
    }

    let guests = match input.guests {
        Some(g) if g > 0 => Some(g),
        _ => {
            violations.push("guests".to_owned());
            None
        }
    };

    let name = non_empty(&input.name, "name", &mut violations);
    let surname = non_empty(&input.surname, "surname", &mut violations);
    let phone = non_empty(&input.phone, "phone", &mut violations);

    if !violations.is_empty() {
        return Err(HotelError::Validation(violations));
    }

    let status = match (&input.status, source) {
        (Some(raw), BookingSource::Admin) => BookingStatus::parse(raw)?,
        (_, BookingSource::Admin) => BookingStatus::Confirmed,
        (_, BookingSource::User) => BookingStatus::Unconfirmed,
    };
    let room_id = match source {
        BookingSource::Admin => input.room_id.clone().filter(|r| !r.trim().is_empty()),
        BookingSource::User => None,
    };

    let room_type = room_type.unwrap();
    let (check_in, check_out) = (check_in.unwrap(), check_out.unwrap());
    let quote = catalog.price_quote(check_in, check_out, room_type);

    Ok(ValidBooking {
        room_type,
        room_id,
        check_in,
        check_out,
        guests: guests.unwrap(),
        name,
        surname,
        phone,
        source,
        status,
        total: quote.total,
    })
}

fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

/// Partial admin edit of a booking. `roomId` distinguishes "absent"
/// (keep) from an explicit `null` (unassign).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdate {
    pub room_type: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub room_id: Option<Option<String>>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<i32>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
}

/// Full replacement row produced by merging an update into the stored
/// booking, written back in a single UPDATE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingPatch {
    pub room_type: String,
    pub room_id: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: i32,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub status: String,
    pub total: i32,
}

/// Merges a partial update into the current booking. Room type and
/// status strings are parsed strictly; whenever the room type or the
/// date range changes the total is recomputed, and changed dates re-run
/// the structural `checkOut >= checkIn` check.
pub fn merge_booking_update(
    current: &Booking,
    update: &BookingUpdate,
    catalog: &RoomCatalog,
) -> Result<BookingPatch, HotelError> {
    let room_type = match &update.room_type {
        Some(raw) => RoomType::parse(raw)?,
        None => RoomType::parse(&current.room_type)?,
    };
    let status = match &update.status {
        Some(raw) => BookingStatus::parse(raw)?,
        None => BookingStatus::from_stored(&current.status),
    };

    let check_in = match &update.check_in {
        Some(raw) => Some(parse_date(raw, "checkIn")?),
        None => current.check_in,
    };
    let check_out = match &update.check_out {
        Some(raw) => Some(parse_date(raw, "checkOut")?),
        None => current.check_out,
    };

    let dates_changed = update.check_in.is_some() || update.check_out.is_some();
    if dates_changed {
        match (check_in, check_out) {
            (Some(ci), Some(co)) if co >= ci => {}
            _ => return Err(HotelError::validation("checkOut")),
        }
    }

    let guests = match update.guests {
        Some(g) if g > 0 => g,
        Some(_) => return Err(HotelError::validation("guests")),
        None => current.guests,
    };

    let pricing_inputs_changed = dates_changed || update.room_type.is_some();
    let total = match (pricing_inputs_changed, check_in, check_out) {
        (true, Some(ci), Some(co)) => catalog.price_quote(ci, co, room_type).total,
        _ => current.total,
    };

    let room_id = match &update.room_id {
        Some(new) => new.clone().filter(|r| !r.trim().is_empty()),
        None => current.room_id.clone(),
    };

    Ok(BookingPatch {
        room_type: room_type.as_str().to_owned(),
        room_id,
        check_in,
        check_out,
        guests,
        name: update.name.clone().unwrap_or_else(|| current.name.clone()),
        surname: update
            .surname
            .clone()
            .unwrap_or_else(|| current.surname.clone()),
        phone: update.phone.clone().unwrap_or_else(|| current.phone.clone()),
        status: status.as_str().to_owned(),
        total,
    })
}

/// Raw line item of a food order as submitted by the front end.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OrderItemInput {
    pub dish_id: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOrderItem {
    pub dish_id: String,
    pub quantity: i32,
    pub price: i32,
    pub subtotal: i32,
}

/// Drops malformed items (no dish id, non-positive quantity, negative
/// price) and totals the rest. An order with nothing left is rejected
/// outright rather than partially accepted.
pub fn validate_order_items(
    items: &[OrderItemInput],
) -> Result<(Vec<ValidOrderItem>, i32), HotelError> {
    let mut valid = vec![];

    for item in items {
        let dish_id = match &item.dish_id {
            Some(id) if !id.trim().is_empty() => id.trim().to_owned(),
            _ => continue,
        };
        let quantity = match item.quantity {
            Some(q) if q > 0 => q,
            _ => continue,
        };
        let price = match item.price {
            Some(p) if p >= 0 => p,
            _ => continue,
        };

        valid.push(ValidOrderItem {
            dish_id,
            quantity,
            price,
            subtotal: price * quantity,
        });
    }

    if valid.is_empty() {
        return Err(HotelError::validation("items"));
    }

    let total = valid.iter().map(|i| i.subtotal).sum();
    Ok((valid, total))
}

/// Raw order submission.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OrderInput {
    #[serde(default)]
    pub items: Vec<OrderItemInput>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub communication: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ValidOrder {
    pub items: Vec<ValidOrderItem>,
    pub total: i32,
    pub name: String,
    pub phone: String,
    pub communication: String,
}

pub fn validate_order(input: &OrderInput) -> Result<ValidOrder, HotelError> {
    let mut violations = vec![];
    let name = non_empty(&input.name, "name", &mut violations);
    let phone = non_empty(&input.phone, "phone", &mut violations);
    if !violations.is_empty() {
        return Err(HotelError::Validation(violations));
    }

    let (items, total) = validate_order_items(&input.items)?;

    Ok(ValidOrder {
        items,
        total,
        name,
        phone,
        communication: input
            .communication
            .clone()
            .unwrap_or_default()
            .trim()
            .to_owned(),
    })
}

/// Partial admin edit of an order. Replacing the item list is
/// all-or-nothing: the full new list is validated before anything is
/// written.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OrderUpdate {
    pub items: Option<Vec<OrderItemInput>>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub communication: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OrderPatch {
    pub name: String,
    pub phone: String,
    pub communication: String,
    pub status: String,
    pub total: i32,
    pub items: Option<Vec<ValidOrderItem>>,
}

pub fn merge_order_update(
    current: &Order,
    update: &OrderUpdate,
) -> Result<OrderPatch, HotelError> {
    let status = match &update.status {
        Some(raw) => OrderStatus::parse(raw)?,
        None => OrderStatus::from_stored(&current.status),
    };

    let (items, total) = match &update.items {
        Some(raw_items) => {
            let (valid, total) = validate_order_items(raw_items)?;
            (Some(valid), total)
        }
        None => (None, current.total),
    };

    Ok(OrderPatch {
        name: update.name.clone().unwrap_or_else(|| current.name.clone()),
        phone: update.phone.clone().unwrap_or_else(|| current.phone.clone()),
        communication: update
            .communication
            .clone()
            .unwrap_or_else(|| current.communication.clone()),
        status: status.as_str().to_owned(),
        total,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest_input() -> BookingInput {
        BookingInput {
            room_type: Some("small".into()),
            check_in: Some("2024-06-01".into()),
            check_out: Some("2024-06-03".into()),
            guests: Some(2),
            name: Some("Anna".into()),
            surname: Some("Kovale".into()),
            phone: Some("+66 90 000 0000".into()),
            ..Default::default()
        }
    }

    #[test]
    fn guest_booking_defaults_unconfirmed_and_unassigned() {
        let booking =
            validate_booking(&guest_input(), BookingSource::User, &RoomCatalog::default())
                .unwrap();
        assert_eq!(booking.status, BookingStatus::Unconfirmed);
        assert_eq!(booking.room_id, None);
        assert_eq!(booking.total, 2 * 700);
    }

    #[test]
    fn admin_booking_defaults_confirmed() {
        let mut input = guest_input();
        input.room_id = Some("22".into());
        let booking =
            validate_booking(&input, BookingSource::Admin, &RoomCatalog::default()).unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.room_id.as_deref(), Some("22"));
    }

    #[test]
    fn validation_reports_every_violated_field() {
        let input = BookingInput {
            room_type: Some("penthouse".into()),
            check_in: Some("2024-06-01".into()),
            check_out: Some("not-a-date".into()),
            guests: Some(0),
            name: Some("  ".into()),
            ..Default::default()
        };
        let err = validate_booking(&input, BookingSource::User, &RoomCatalog::default())
            .unwrap_err();
        match err {
            HotelError::Validation(fields) => {
                for expected in ["roomType", "checkOut", "guests", "name", "surname", "phone"] {
                    assert!(fields.iter().any(|f| f == expected), "missing {expected}");
                }
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn checkout_before_checkin_is_rejected_but_equal_is_fine() {
        let mut input = guest_input();
        input.check_out = Some("2024-05-31".into());
        assert!(validate_booking(&input, BookingSource::User, &RoomCatalog::default()).is_err());

        input.check_out = Some("2024-06-01".into());
        let booking =
            validate_booking(&input, BookingSource::User, &RoomCatalog::default()).unwrap();
        assert_eq!(booking.check_in, booking.check_out);
    }

    #[test]
    fn declined_normalizes_to_deleted() {
        assert_eq!(OrderStatus::parse("Declined").unwrap(), OrderStatus::Deleted);
        assert_eq!(OrderStatus::parse(" DELETED ").unwrap(), OrderStatus::Deleted);
    }

    #[test]
    fn unknown_stored_status_falls_back_without_crashing() {
        assert_eq!(OrderStatus::from_stored("archived"), OrderStatus::Unconfirmed);
        assert_eq!(BookingStatus::from_stored("???"), BookingStatus::Unconfirmed);
    }

    #[test]
    fn unknown_client_status_is_rejected() {
        assert!(matches!(
            OrderStatus::parse("archived"),
            Err(HotelError::InvalidStatus(_))
        ));
    }

    #[test]
    fn order_transitions_follow_the_table() {
        use OrderAction::*;
        use OrderStatus::*;

        assert_eq!(next_order_status(Unconfirmed, Confirm).unwrap(), Live);
        assert_eq!(next_order_status(Live, Complete).unwrap(), Completed);
        assert_eq!(next_order_status(Unconfirmed, Decline).unwrap(), Deleted);
        assert_eq!(next_order_status(Live, Decline).unwrap(), Deleted);
        // Declining twice stays deleted, idempotently.
        assert_eq!(next_order_status(Deleted, Decline).unwrap(), Deleted);

        assert!(next_order_status(Unconfirmed, Complete).is_err());
        assert!(next_order_status(Completed, Decline).is_err());
        assert!(next_order_status(Completed, Complete).is_err());
        assert!(next_order_status(Live, Confirm).is_err());
    }

    #[test]
    fn booking_expires_only_after_checkout_day() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        assert!(booking_expired(NaiveDate::from_ymd_opt(2024, 7, 9), today));
        assert!(!booking_expired(NaiveDate::from_ymd_opt(2024, 7, 10), today));
        assert!(!booking_expired(NaiveDate::from_ymd_opt(2024, 7, 11), today));
        assert!(!booking_expired(None, today));
    }

    fn stored_booking() -> Booking {
        Booking {
            id: 5,
            room_type: "small".into(),
            room_id: Some("22".into()),
            check_in: NaiveDate::from_ymd_opt(2024, 6, 1),
            check_out: NaiveDate::from_ymd_opt(2024, 6, 3),
            guests: 2,
            name: "Anna".into(),
            surname: "Kovale".into(),
            phone: "+66".into(),
            source: "user".into(),
            status: "confirmed".into(),
            total: 1400,
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn date_change_recomputes_total_and_rechecks_ordering() {
        let update = BookingUpdate {
            check_out: Some("2024-06-05".into()),
            ..Default::default()
        };
        let patch =
            merge_booking_update(&stored_booking(), &update, &RoomCatalog::default()).unwrap();
        assert_eq!(patch.total, 4 * 700);
        assert_eq!(patch.room_id.as_deref(), Some("22"));

        let bad = BookingUpdate {
            check_out: Some("2024-05-20".into()),
            ..Default::default()
        };
        assert!(merge_booking_update(&stored_booking(), &bad, &RoomCatalog::default()).is_err());
    }

    #[test]
    fn room_type_change_reprices_but_untouched_fields_survive() {
        let update = BookingUpdate {
            room_type: Some("big".into()),
            ..Default::default()
        };
        let patch =
            merge_booking_update(&stored_booking(), &update, &RoomCatalog::default()).unwrap();
        assert_eq!(patch.room_type, "big");
        assert_eq!(patch.total, 2 * 900);
        assert_eq!(patch.name, "Anna");
        assert_eq!(patch.status, "confirmed");
    }

    #[test]
    fn explicit_null_room_id_unassigns() {
        let update = BookingUpdate {
            room_id: Some(None),
            ..Default::default()
        };
        let patch =
            merge_booking_update(&stored_booking(), &update, &RoomCatalog::default()).unwrap();
        assert_eq!(patch.room_id, None);
    }

    #[test]
    fn invalid_status_in_update_is_rejected() {
        let update = BookingUpdate {
            status: Some("archived".into()),
            ..Default::default()
        };
        assert!(matches!(
            merge_booking_update(&stored_booking(), &update, &RoomCatalog::default()),
            Err(HotelError::InvalidStatus(_))
        ));
    }

    #[test]
    fn order_item_replacement_is_all_or_nothing() {
        let order = Order {
            id: 3,
            name: "Ben".into(),
            phone: "+66".into(),
            communication: "".into(),
            status: "unconfirmed".into(),
            total: 160,
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        };

        let update = OrderUpdate {
            items: Some(vec![OrderItemInput {
                dish_id: Some("dish-9".into()),
                quantity: Some(3),
                price: Some(50),
            }]),
            ..Default::default()
        };
        let patch = merge_order_update(&order, &update).unwrap();
        assert_eq!(patch.total, 150);
        assert_eq!(patch.items.as_ref().unwrap().len(), 1);

        // A replacement list with nothing valid rejects the whole edit.
        let bad = OrderUpdate {
            items: Some(vec![OrderItemInput::default()]),
            ..Default::default()
        };
        assert!(merge_order_update(&order, &bad).is_err());

        // No items key: totals and items untouched.
        let contact_only = OrderUpdate {
            phone: Some("+66 99".into()),
            ..Default::default()
        };
        let patch = merge_order_update(&order, &contact_only).unwrap();
        assert_eq!(patch.total, 160);
        assert!(patch.items.is_none());
    }

    #[test]
    fn malformed_items_are_filtered_and_totalled() {
        let items = vec![
            OrderItemInput {
                dish_id: Some("dish-1".into()),
                quantity: Some(2),
                price: Some(80),
            },
            OrderItemInput {
                dish_id: Some("dish-2".into()),
                quantity: Some(0),
                price: Some(95),
            },
        ];
        let (valid, total) = validate_order_items(&items).unwrap();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].dish_id, "dish-1");
        assert_eq!(total, 160);
    }

    #[test]
    fn order_with_no_valid_items_fails_closed() {
        let items = vec![OrderItemInput {
            dish_id: None,
            quantity: Some(1),
            price: Some(50),
        }];
        assert!(validate_order_items(&items).is_err());
        assert!(validate_order_items(&[]).is_err());
    }
}
