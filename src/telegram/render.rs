//! Message texts and inline keyboards for the staff chat.
//!
//! Transitions re-render by replacing the trailing `Status:` line of
//! the previously sent text, never by prepending, so re-running a
//! render is idempotent.

use serde_json::{json, Value};

use crate::dates::DATE_FMT;
use crate::services::db_models::{Booking, Order, OrderItem};
use crate::types::RoomType;

const STATUS_MARKER: &str = "\n\nStatus: ";

fn room_type_label(raw: &str) -> &'static str {
    match RoomType::parse(raw) {
        Ok(RoomType::Big) => "Big room",
        _ => "Small room",
    }
}

fn date_label(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FMT).to_string())
        .unwrap_or_else(|| "—".to_owned())
}

pub fn booking_text(booking: &Booking) -> String {
    format!(
        "📢 New Booking #{}\nRoom: {}\nCheck-in: {}\nCheck-out: {}\nGuests: {}\nName: {} {}\nPhone: {}\nTotal: {} THB",
        booking.id,
        room_type_label(&booking.room_type),
        date_label(booking.check_in),
        date_label(booking.check_out),
        booking.guests,
        booking.name,
        booking.surname,
        booking.phone,
        booking.total,
    )
}

pub fn order_text(order: &Order, items: &[OrderItem]) -> String {
    let mut text = format!("🍽 New Food Order #{}\n", order.id);
    for item in items {
        text.push_str(&format!(
            "• {} x{} — {} THB\n",
            item.dish_id, item.quantity, item.subtotal
        ));
    }
    text.push_str(&format!(
        "Total: {} THB\nName: {}\nPhone: {}",
        order.total, order.name, order.phone
    ));
    if !order.communication.is_empty() {
        text.push_str(&format!("\nContact via: {}", order.communication));
    }
    text
}

/// Replaces any previous status suffix before appending the new one, so
/// applying the same transition twice yields the same text.
pub fn with_status_line(text: &str, status_line: &str) -> String {
    let base = match text.rfind(STATUS_MARKER) {
        Some(idx) => &text[..idx],
        None => text,
    };
    format!("{base}{STATUS_MARKER}{status_line}")
}

pub fn booking_confirmed_line(room_id: Option<&str>) -> String {
    match room_id {
        Some(room) => format!("✅ Confirmed — room {room}"),
        None => "✅ Confirmed".to_owned(),
    }
}

pub const BOOKING_DELETED_LINE: &str = "❌ Deleted";
pub const ORDER_LIVE_LINE: &str = "🍳 Confirmed — in progress";
pub const ORDER_COMPLETED_LINE: &str = "✅ Completed";
pub const ORDER_DECLINED_LINE: &str = "❌ Declined";

pub fn booking_keyboard(booking_id: i64) -> Value {
    json!([[
        { "text": "✅ Confirm", "callback_data": format!("confirm:{booking_id}") },
        { "text": "🗑 Delete", "callback_data": format!("delete:{booking_id}") },
    ]])
}

/// Room choice shown after the staff hits Confirm; built from a fresh
/// availability query so committed rooms never appear.
pub fn room_choice_keyboard(booking_id: i64, available_rooms: &[String]) -> Value {
    let mut rows: Vec<Value> = available_rooms
        .chunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .map(|room| {
                    json!({
                        "text": format!("Room {room}"),
                        "callback_data": format!("room:{booking_id}:{room}"),
                    })
                })
                .collect()
        })
        .collect();
    rows.push(json!([
        { "text": "↩️ Back", "callback_data": format!("cancel:{booking_id}") }
    ]));
    Value::Array(rows)
}

pub fn order_keyboard(order_id: i64) -> Value {
    json!([[
        { "text": "✅ Confirm", "callback_data": format!("order_confirm:{order_id}") },
        { "text": "❌ Decline", "callback_data": format!("order_decline:{order_id}") },
    ]])
}

pub fn order_live_keyboard(order_id: i64) -> Value {
    json!([[
        { "text": "🏁 Complete", "callback_data": format!("order_complete:{order_id}") }
    ]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking() -> Booking {
        Booking {
            id: 12,
            room_type: "big".into(),
            room_id: None,
            check_in: NaiveDate::from_ymd_opt(2024, 6, 1),
            check_out: NaiveDate::from_ymd_opt(2024, 6, 3),
            guests: 2,
            name: "Anna".into(),
            surname: "Kovale".into(),
            phone: "+66 90 000 0000".into(),
            source: "user".into(),
            status: "unconfirmed".into(),
            total: 1800,
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn booking_text_carries_the_essentials() {
        let text = booking_text(&booking());
        assert!(text.contains("New Booking #12"));
        assert!(text.contains("Big room"));
        assert!(text.contains("Check-in: 2024-06-01"));
        assert!(text.contains("Check-out: 2024-06-03"));
        assert!(text.contains("Anna Kovale"));
    }

    #[test]
    fn status_suffix_replacement_is_idempotent() {
        let base = booking_text(&booking());
        let confirmed = with_status_line(&base, &booking_confirmed_line(Some("22")));
        assert!(confirmed.ends_with("Status: ✅ Confirmed — room 22"));

        let deleted = with_status_line(&confirmed, BOOKING_DELETED_LINE);
        assert!(deleted.ends_with("Status: ❌ Deleted"));
        assert!(!deleted.contains("Confirmed"));

        // Running the same transition twice changes nothing.
        assert_eq!(with_status_line(&deleted, BOOKING_DELETED_LINE), deleted);
    }

    #[test]
    fn confirmed_line_without_room_omits_the_label() {
        assert_eq!(booking_confirmed_line(Some("22")), "✅ Confirmed — room 22");
        assert_eq!(booking_confirmed_line(None), "✅ Confirmed");
    }

    #[test]
    fn room_choice_keyboard_lists_rooms_plus_back_row() {
        let rooms = vec!["22".to_owned(), "23".to_owned(), "32".to_owned(), "33".to_owned()];
        let keyboard = room_choice_keyboard(5, &rooms);
        let rows = keyboard.as_array().unwrap();
        // Two room rows (3 + 1) and the back row.
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0][0]["callback_data"].as_str().unwrap(),
            "room:5:22"
        );
        assert_eq!(
            rows[2][0]["callback_data"].as_str().unwrap(),
            "cancel:5"
        );
    }

    #[test]
    fn order_text_lists_items_and_total() {
        let order = Order {
            id: 3,
            name: "Ben".into(),
            phone: "+66".into(),
            communication: "WhatsApp".into(),
            status: "unconfirmed".into(),
            total: 160,
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        };
        let items = vec![OrderItem {
            id: 1,
            order_id: 3,
            dish_id: "dish-1".into(),
            quantity: 2,
            price: 80,
            subtotal: 160,
        }];
        let text = order_text(&order, &items);
        assert!(text.contains("New Food Order #3"));
        assert!(text.contains("dish-1 x2 — 160 THB"));
        assert!(text.contains("Total: 160 THB"));
        assert!(text.contains("Contact via: WhatsApp"));
    }
}
