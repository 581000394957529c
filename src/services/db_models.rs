use chrono::{NaiveDate, NaiveDateTime};
use diesel::Queryable;
use serde::Serialize;

/// Stored booking row. Serialized camelCase for the admin front end.
/// Dates are nullable to tolerate legacy rows; readers skip such rows
/// defensively instead of failing whole scans.
#[derive(Queryable, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub room_type: String,
    pub room_id: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: i32,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub source: String,
    pub status: String,
    pub total: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Queryable, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub communication: String,
    pub status: String,
    pub total: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Queryable, Debug, Clone, Serialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub dish_id: String,
    pub quantity: i32,
    pub price: i32,
    pub subtotal: i32,
}

#[derive(Queryable, Debug, Clone, Serialize)]
pub struct Dish {
    pub id: i64,
    pub category: String,
    pub name: String,
    pub price: i32,
}

/// Order plus its line items, the shape the admin UI consumes.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}
