use chrono::{NaiveDate, NaiveDateTime};
use diesel::{AsChangeset, Insertable};

use crate::schema::{bookings, dishes, order_items, orders};

#[derive(Insertable, Clone)]
#[diesel(table_name = bookings)]
pub struct NewBooking {
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

/// Full-row booking update. `treat_none_as_null` because the patch is a
/// complete replacement: `None` here means "store NULL", not "skip".
#[derive(AsChangeset, Clone)]
#[diesel(table_name = bookings, treat_none_as_null = true)]
pub struct BookingChangeset {
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

#[derive(Insertable, Clone)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub name: String,
    pub phone: String,
    pub communication: String,
    pub status: String,
    pub total: i32,
    pub created_at: NaiveDateTime,
}

#[derive(AsChangeset, Clone)]
#[diesel(table_name = orders)]
pub struct OrderChangeset {
    pub name: String,
    pub phone: String,
    pub communication: String,
    pub status: String,
    pub total: i32,
}

#[derive(Insertable, Clone)]
#[diesel(table_name = order_items)]
pub struct NewOrderItem {
    pub order_id: i64,
    pub dish_id: String,
    pub quantity: i32,
    pub price: i32,
    pub subtotal: i32,
}

#[derive(Insertable, Clone)]
#[diesel(table_name = dishes)]
pub struct NewDish {
    pub category: String,
    pub name: String,
    pub price: i32,
}

#[derive(AsChangeset, Clone)]
#[diesel(table_name = dishes)]
pub struct DishChangeset {
    pub category: String,
    pub name: String,
    pub price: i32,
}
