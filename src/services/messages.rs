use actix::Message;
use chrono::NaiveDate;

use crate::lifecycle::{BookingUpdate, OrderAction, OrderUpdate, ValidBooking, ValidOrder};
use crate::services::db_models::{Booking, Dish, OrderWithItems};
use crate::types::HotelError;

#[derive(Message)]
#[rtype(result = "Result<Vec<Booking>, HotelError>")]
pub struct FetchBookings {
    pub include_deleted: bool,
}

#[derive(Message)]
#[rtype(result = "Result<Booking, HotelError>")]
pub struct FetchBooking(pub i64);

#[derive(Message)]
#[rtype(result = "Result<Booking, HotelError>")]
pub struct CreateBooking(pub ValidBooking);

#[derive(Message)]
#[rtype(result = "Result<Booking, HotelError>")]
pub struct UpdateBooking {
    pub id: i64,
    pub update: BookingUpdate,
}

/// Soft delete; repeating it on an already deleted booking succeeds.
#[derive(Message)]
#[rtype(result = "Result<Booking, HotelError>")]
pub struct DeleteBooking(pub i64);

/// Telegram room pick: confirms the booking and pins it to a room.
/// Availability is deliberately not re-checked here (see DESIGN.md).
#[derive(Message)]
#[rtype(result = "Result<Booking, HotelError>")]
pub struct AssignBookingRoom {
    pub id: i64,
    pub room_id: String,
}

/// Sweep: every non-deleted booking with a past checkout is retired.
#[derive(Message)]
#[rtype(result = "Result<usize, HotelError>")]
pub struct CleanupExpired {
    pub today: NaiveDate,
}

/// Destructive purge of deleted bookings and completed/deleted orders.
#[derive(Message)]
#[rtype(result = "Result<(usize, usize), HotelError>")]
pub struct ClearHistory;

#[derive(Message)]
#[rtype(result = "Result<OrderWithItems, HotelError>")]
pub struct CreateOrder(pub ValidOrder);

#[derive(Message)]
#[rtype(result = "Result<Vec<OrderWithItems>, HotelError>")]
pub struct FetchOrders {
    pub include_deleted: bool,
}

#[derive(Message)]
#[rtype(result = "Result<OrderWithItems, HotelError>")]
pub struct FetchOrder(pub i64);

/// Status transition validated against the order state machine inside
/// the row transaction.
#[derive(Message)]
#[rtype(result = "Result<OrderWithItems, HotelError>")]
pub struct TransitionOrder {
    pub id: i64,
    pub action: OrderAction,
}

#[derive(Message)]
#[rtype(result = "Result<OrderWithItems, HotelError>")]
pub struct UpdateOrder {
    pub id: i64,
    pub update: OrderUpdate,
}

#[derive(Message)]
#[rtype(result = "Result<Vec<Dish>, HotelError>")]
pub struct FetchDishes;

#[derive(Message)]
#[rtype(result = "Result<Dish, HotelError>")]
pub struct CreateDish {
    pub category: String,
    pub name: String,
    pub price: i32,
}

#[derive(Message)]
#[rtype(result = "Result<Dish, HotelError>")]
pub struct UpdateDish {
    pub id: i64,
    pub category: String,
    pub name: String,
    pub price: i32,
}

#[derive(Message)]
#[rtype(result = "Result<usize, HotelError>")]
pub struct DeleteDish(pub i64);
