use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

use crate::types::HotelError;

pub mod db_models;
pub mod db_utils;
pub mod insertable;
pub mod messages;
pub mod pg_handling;

#[get("/")]
pub async fn home_page() -> impl Responder {
    HttpResponse::Ok().body("Hotel booking backend")
}

/// Maps the error taxonomy onto HTTP statuses. Database details never
/// reach a guest; they get a generic failure flag instead.
pub fn error_response(err: &HotelError) -> HttpResponse {
    let body = json!({ "success": false, "error": err.to_string() });
    match err {
        HotelError::Validation(_)
        | HotelError::InvalidStatus(_)
        | HotelError::InvalidRoomType(_) => HttpResponse::BadRequest().json(body),
        HotelError::NotFound(_) => HttpResponse::NotFound().json(body),
        HotelError::Db(_) => HttpResponse::InternalServerError()
            .json(json!({ "success": false, "error": "internal error" })),
    }
}

pub fn mailbox_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(json!({ "success": false, "error": "unable to perform action" }))
}

fn truthy(raw: Option<&str>) -> bool {
    matches!(raw, Some("true") | Some("1"))
}

// public guest-facing endpoints
pub mod public_route {
    use actix_web::web::{Data, Json, Query};
    use actix_web::{get, post, HttpResponse, Responder};
    use serde::Deserialize;
    use serde_json::json;
    use std::time::Instant;

    use super::{error_response, mailbox_error};
    use crate::availability::unavailable_dates;
    use crate::dates::DATE_FMT;
    use crate::lifecycle::{validate_booking, validate_order, BookingInput, BookingSource, OrderInput};
    use crate::services::db_utils::AppState;
    use crate::services::messages::{CreateBooking, CreateOrder, FetchBookings, FetchDishes};
    use crate::types::{HotelError, RoomType};

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RoomTypeQuery {
        pub room_type: Option<String>,
    }

    #[get("/booked-dates")]
    pub async fn booked_dates(state: Data<AppState>, query: Query<RoomTypeQuery>) -> impl Responder {
        let room_type = match &query.room_type {
            Some(raw) => match RoomType::parse(raw) {
                Ok(rt) => rt,
                Err(err) => return error_response(&err),
            },
            None => return error_response(&HotelError::InvalidRoomType("".to_owned())),
        };

        match state.pg_db.send(FetchBookings { include_deleted: false }).await {
            Ok(Ok(bookings)) => {
                let dates: Vec<String> = unavailable_dates(&state.catalog, room_type, &bookings)
                    .into_iter()
                    .map(|d| d.format(DATE_FMT).to_string())
                    .collect();
                HttpResponse::Ok().json(dates)
            }
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[post("/book-room")]
    pub async fn book_room(state: Data<AppState>, body: Json<BookingInput>) -> impl Responder {
        let valid = match validate_booking(&body, BookingSource::User, &state.catalog) {
            Ok(valid) => valid,
            Err(err) => return error_response(&err),
        };

        match state.pg_db.send(CreateBooking(valid)).await {
            Ok(Ok(booking)) => {
                let notifier = state.notifier.clone();
                actix_web::rt::spawn(async move {
                    notifier.booking_created(&booking).await;
                });
                HttpResponse::Ok().json(json!({ "success": true }))
            }
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[get("/menu")]
    pub async fn view_menu(state: Data<AppState>) -> impl Responder {
        if let Some(dishes) = state.menu_cache.get_at(Instant::now()) {
            return HttpResponse::Ok().json(dishes);
        }

        match state.pg_db.send(FetchDishes).await {
            Ok(Ok(dishes)) => {
                state.menu_cache.store_at(Instant::now(), dishes.clone());
                HttpResponse::Ok().json(dishes)
            }
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[post("/order-food")]
    pub async fn order_food(state: Data<AppState>, body: Json<OrderInput>) -> impl Responder {
        let valid = match validate_order(&body) {
            Ok(valid) => valid,
            Err(err) => return error_response(&err),
        };

        match state.pg_db.send(CreateOrder(valid)).await {
            Ok(Ok(created)) => {
                let notifier = state.notifier.clone();
                actix_web::rt::spawn(async move {
                    notifier.order_created(&created.order, &created.items).await;
                });
                HttpResponse::Ok().json(json!({ "success": true }))
            }
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }
}

// sub-route "/admin" (bookings)
pub mod admin_bookings_route {
    use actix_web::web::{Data, Json, Path, Query};
    use actix_web::{delete, get, post, put, HttpResponse, Responder};
    use serde::Deserialize;
    use serde_json::json;

    use super::{error_response, mailbox_error, truthy};
    use crate::availability::available_rooms;
    use crate::dates::parse_date;
    use crate::lifecycle::{validate_booking, BookingInput, BookingSource, BookingStatus, BookingUpdate};
    use crate::services::db_utils::AppState;
    use crate::services::messages::{
        ClearHistory, CreateBooking, DeleteBooking, FetchBooking, FetchBookings, UpdateBooking,
    };
    use crate::types::{HotelError, RoomType};

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AvailableRoomsQuery {
        pub room_type: Option<String>,
        pub check_in: Option<String>,
        pub check_out: Option<String>,
        pub exclude_booking_id: Option<i64>,
    }

    #[get("/available-rooms")]
    pub async fn get_available_rooms(
        state: Data<AppState>,
        query: Query<AvailableRoomsQuery>,
    ) -> impl Responder {
        let mut violations = vec![];

        let room_type = match &query.room_type {
            Some(raw) => match RoomType::parse(raw) {
                Ok(rt) => Some(rt),
                Err(err) => return error_response(&err),
            },
            None => {
                violations.push("roomType".to_owned());
                None
            }
        };
        let check_in = query
            .check_in
            .as_deref()
            .and_then(|raw| parse_date(raw, "checkIn").ok());
        if check_in.is_none() {
            violations.push("checkIn".to_owned());
        }
        let check_out = query
            .check_out
            .as_deref()
            .and_then(|raw| parse_date(raw, "checkOut").ok());
        if check_out.is_none() {
            violations.push("checkOut".to_owned());
        }
        if !violations.is_empty() {
            return error_response(&HotelError::Validation(violations));
        }

        match state.pg_db.send(FetchBookings { include_deleted: false }).await {
            Ok(Ok(bookings)) => {
                let result = available_rooms(
                    &state.catalog,
                    room_type.unwrap(),
                    check_in.unwrap(),
                    check_out.unwrap(),
                    query.exclude_booking_id,
                    &bookings,
                );
                HttpResponse::Ok().json(json!({
                    "availableRooms": result.available_rooms,
                    "totalRooms": result.total_rooms,
                    "bookedRooms": result.booked_rooms,
                }))
            }
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ListQuery {
        pub include_deleted: Option<String>,
    }

    #[get("/bookings/all")]
    pub async fn all_bookings(state: Data<AppState>, query: Query<ListQuery>) -> impl Responder {
        let include_deleted = truthy(query.include_deleted.as_deref());

        match state.pg_db.send(FetchBookings { include_deleted }).await {
            Ok(Ok(bookings)) => HttpResponse::Ok().json(bookings),
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[post("/bookings")]
    pub async fn create_booking(state: Data<AppState>, body: Json<BookingInput>) -> impl Responder {
        let valid = match validate_booking(&body, BookingSource::Admin, &state.catalog) {
            Ok(valid) => valid,
            Err(err) => return error_response(&err),
        };

        match state.pg_db.send(CreateBooking(valid)).await {
            Ok(Ok(booking)) => HttpResponse::Ok().json(json!({ "success": true, "booking": booking })),
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[put("/bookings/{id}")]
    pub async fn update_booking(
        state: Data<AppState>,
        path: Path<i64>,
        body: Json<BookingUpdate>,
    ) -> impl Responder {
        let id = path.into_inner();

        let previous_status = match state.pg_db.send(FetchBooking(id)).await {
            Ok(Ok(booking)) => BookingStatus::from_stored(&booking.status),
            Ok(Err(err)) => return error_response(&err),
            _ => return mailbox_error(),
        };

        match state
            .pg_db
            .send(UpdateBooking {
                id,
                update: body.into_inner(),
            })
            .await
        {
            Ok(Ok(booking)) => {
                let new_status = BookingStatus::from_stored(&booking.status);
                if new_status != previous_status {
                    let notifier = state.notifier.clone();
                    let updated = booking.clone();
                    actix_web::rt::spawn(async move {
                        match new_status {
                            BookingStatus::Deleted => notifier.booking_deleted(&updated).await,
                            BookingStatus::Confirmed => {
                                notifier
                                    .booking_confirmed(&updated, updated.room_id.as_deref())
                                    .await;
                            }
                            BookingStatus::Unconfirmed => {}
                        }
                    });
                }
                HttpResponse::Ok().json(json!({ "success": true, "booking": booking }))
            }
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[delete("/bookings/{id}")]
    pub async fn delete_booking(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.pg_db.send(DeleteBooking(path.into_inner())).await {
            Ok(Ok(booking)) => {
                let notifier = state.notifier.clone();
                let deleted = booking.clone();
                actix_web::rt::spawn(async move {
                    notifier.booking_deleted(&deleted).await;
                });
                HttpResponse::Ok().json(json!({ "success": true, "booking": booking }))
            }
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[post("/history/clear")]
    pub async fn clear_history(state: Data<AppState>) -> impl Responder {
        match state.pg_db.send(ClearHistory).await {
            Ok(Ok((removed_bookings, removed_orders))) => HttpResponse::Ok().json(json!({
                "success": true,
                "removedBookings": removed_bookings,
                "removedOrders": removed_orders,
            })),
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }
}

// sub-route "/admin" (orders)
pub mod admin_orders_route {
    use actix_web::web::{Data, Json, Path, Query};
    use actix_web::{delete, get, post, put, HttpResponse, Responder};
    use serde_json::json;

    use super::admin_bookings_route::ListQuery;
    use super::{error_response, mailbox_error, truthy};
    use crate::lifecycle::{validate_order, OrderAction, OrderInput, OrderUpdate};
    use crate::services::db_models::OrderWithItems;
    use crate::services::db_utils::AppState;
    use crate::services::messages::{
        CreateOrder, FetchOrder, FetchOrders, TransitionOrder, UpdateOrder,
    };
    use crate::telegram::Notifier;

    #[get("/orders/all")]
    pub async fn all_orders(state: Data<AppState>, query: Query<ListQuery>) -> impl Responder {
        let include_deleted = truthy(query.include_deleted.as_deref());

        match state.pg_db.send(FetchOrders { include_deleted }).await {
            Ok(Ok(orders)) => HttpResponse::Ok().json(orders),
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[get("/orders/{id}")]
    pub async fn get_order(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.pg_db.send(FetchOrder(path.into_inner())).await {
            Ok(Ok(order)) => HttpResponse::Ok().json(order),
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[post("/orders")]
    pub async fn create_order(state: Data<AppState>, body: Json<OrderInput>) -> impl Responder {
        let valid = match validate_order(&body) {
            Ok(valid) => valid,
            Err(err) => return error_response(&err),
        };

        match state.pg_db.send(CreateOrder(valid)).await {
            Ok(Ok(created)) => HttpResponse::Ok().json(json!({ "success": true, "order": created })),
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[put("/orders/{id}")]
    pub async fn update_order(
        state: Data<AppState>,
        path: Path<i64>,
        body: Json<OrderUpdate>,
    ) -> impl Responder {
        match state
            .pg_db
            .send(UpdateOrder {
                id: path.into_inner(),
                update: body.into_inner(),
            })
            .await
        {
            Ok(Ok(updated)) => HttpResponse::Ok().json(json!({ "success": true, "order": updated })),
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    async fn notify_transition(notifier: &Notifier, action: OrderAction, updated: &OrderWithItems) {
        match action {
            OrderAction::Confirm => notifier.order_confirmed(&updated.order, &updated.items).await,
            OrderAction::Decline => notifier.order_declined(&updated.order, &updated.items).await,
            OrderAction::Complete => notifier.order_completed(&updated.order, &updated.items).await,
        }
    }

    async fn transition(state: Data<AppState>, id: i64, action: OrderAction) -> HttpResponse {
        match state.pg_db.send(TransitionOrder { id, action }).await {
            Ok(Ok(updated)) => {
                let notifier = state.notifier.clone();
                let for_notify = updated.clone();
                actix_web::rt::spawn(async move {
                    notify_transition(&notifier, action, &for_notify).await;
                });
                HttpResponse::Ok().json(json!({ "success": true, "order": updated }))
            }
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[post("/orders/{id}/confirm")]
    pub async fn confirm_order(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        transition(state, path.into_inner(), OrderAction::Confirm).await
    }

    #[post("/orders/{id}/decline")]
    pub async fn decline_order(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        transition(state, path.into_inner(), OrderAction::Decline).await
    }

    #[post("/orders/{id}/complete")]
    pub async fn complete_order(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        transition(state, path.into_inner(), OrderAction::Complete).await
    }

    /// DELETE maps onto the decline transition: terminal, idempotent.
    #[delete("/orders/{id}")]
    pub async fn delete_order(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        transition(state, path.into_inner(), OrderAction::Decline).await
    }
}

// sub-route "/admin/menu"
pub mod admin_menu_route {
    use actix_web::web::{Data, Json, Path};
    use actix_web::{delete, post, put, HttpResponse, Responder};
    use serde::Deserialize;
    use serde_json::json;

    use super::{error_response, mailbox_error};
    use crate::services::db_utils::AppState;
    use crate::services::messages::{CreateDish, DeleteDish, UpdateDish};
    use crate::types::HotelError;

    #[derive(Deserialize)]
    pub struct DishBody {
        pub category: Option<String>,
        pub name: Option<String>,
        pub price: Option<i32>,
    }

    fn validate_dish(body: &DishBody) -> Result<(String, String, i32), HotelError> {
        let mut violations = vec![];
        let category = body.category.as_deref().unwrap_or("").trim().to_owned();
        if category.is_empty() {
            violations.push("category".to_owned());
        }
        let name = body.name.as_deref().unwrap_or("").trim().to_owned();
        if name.is_empty() {
            violations.push("name".to_owned());
        }
        let price = match body.price {
            Some(p) if p >= 0 => p,
            _ => {
                violations.push("price".to_owned());
                0
            }
        };

        if violations.is_empty() {
            Ok((category, name, price))
        } else {
            Err(HotelError::Validation(violations))
        }
    }

    #[post("")]
    pub async fn create_dish(state: Data<AppState>, body: Json<DishBody>) -> impl Responder {
        let (category, name, price) = match validate_dish(&body) {
            Ok(fields) => fields,
            Err(err) => return error_response(&err),
        };

        match state.pg_db.send(CreateDish { category, name, price }).await {
            Ok(Ok(dish)) => {
                state.menu_cache.invalidate();
                HttpResponse::Ok().json(json!({ "success": true, "dish": dish }))
            }
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[put("/{id}")]
    pub async fn update_dish(
        state: Data<AppState>,
        path: Path<i64>,
        body: Json<DishBody>,
    ) -> impl Responder {
        let (category, name, price) = match validate_dish(&body) {
            Ok(fields) => fields,
            Err(err) => return error_response(&err),
        };

        match state
            .pg_db
            .send(UpdateDish {
                id: path.into_inner(),
                category,
                name,
                price,
            })
            .await
        {
            Ok(Ok(dish)) => {
                state.menu_cache.invalidate();
                HttpResponse::Ok().json(json!({ "success": true, "dish": dish }))
            }
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }

    #[delete("/{id}")]
    pub async fn delete_dish(state: Data<AppState>, path: Path<i64>) -> impl Responder {
        match state.pg_db.send(DeleteDish(path.into_inner())).await {
            Ok(Ok(_)) => {
                state.menu_cache.invalidate();
                HttpResponse::Ok().json(json!({ "success": true }))
            }
            Ok(Err(err)) => error_response(&err),
            _ => mailbox_error(),
        }
    }
}

// Telegram webhook: staff button presses and text commands
pub mod telegram_route {
    use actix_web::web::{Data, Json};
    use actix_web::{post, HttpResponse, Responder};
    use log::warn;

    use crate::availability::available_rooms;
    use crate::lifecycle::{BookingStatus, OrderAction, OrderStatus};
    use crate::services::db_models::{Booking, OrderWithItems};
    use crate::services::db_utils::AppState;
    use crate::services::messages::{
        AssignBookingRoom, DeleteBooking, FetchBooking, FetchBookings, FetchOrders,
        TransitionOrder,
    };
    use crate::telegram::callback::{
        parse_callback, parse_command, CallbackAction, TextCommand, Update,
    };
    use crate::types::RoomType;

    /// Telegram retries updates that do not get a 200, so the handler
    /// answers OK unconditionally and logs whatever it could not act on.
    #[post("/telegram-webhook")]
    pub async fn webhook(state: Data<AppState>, body: Json<Update>) -> impl Responder {
        let update = body.into_inner();

        if let Some(query) = update.callback_query {
            match query.data.as_deref().and_then(parse_callback) {
                Some(action) => handle_callback(&state, action).await,
                None => warn!(
                    "unrecognized callback data: {:?}",
                    query.data.as_deref().unwrap_or("")
                ),
            }
        } else if let Some(message) = update.message {
            if let Some(command) = message.text.as_deref().and_then(parse_command) {
                handle_command(&state, command).await;
            }
        }

        HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
    }

    /// Fresh availability for the booking's own stay, excluding the
    /// booking itself so editing it does not block its current room.
    async fn availability_for(state: &AppState, booking: &Booking) -> Option<Vec<String>> {
        let room_type = RoomType::parse(&booking.room_type).ok()?;
        let (check_in, check_out) = (booking.check_in?, booking.check_out?);

        let bookings = match state.pg_db.send(FetchBookings { include_deleted: false }).await {
            Ok(Ok(bookings)) => bookings,
            _ => return None,
        };

        Some(
            available_rooms(
                &state.catalog,
                room_type,
                check_in,
                check_out,
                Some(booking.id),
                &bookings,
            )
            .available_rooms,
        )
    }

    async fn handle_callback(state: &AppState, action: CallbackAction) {
        match action {
            CallbackAction::ConfirmBooking(id) => {
                let booking = match state.pg_db.send(FetchBooking(id)).await {
                    Ok(Ok(booking)) => booking,
                    Ok(Err(err)) => return warn!("confirm callback for booking {id}: {err}"),
                    _ => return warn!("confirm callback for booking {id}: actor unavailable"),
                };
                match availability_for(state, &booking).await {
                    Some(rooms) => state.notifier.show_room_choice(id, &rooms).await,
                    None => warn!("cannot offer rooms for booking {id}: no usable dates"),
                }
            }
            CallbackAction::AssignRoom(id, room) => {
                let booking = match state.pg_db.send(FetchBooking(id)).await {
                    Ok(Ok(booking)) => booking,
                    Ok(Err(err)) => return warn!("room callback for booking {id}: {err}"),
                    _ => return warn!("room callback for booking {id}: actor unavailable"),
                };
                // The picker UI is the only guard against double
                // assignment; a stale press goes through regardless.
                if let Some(free) = availability_for(state, &booking).await {
                    if !free.contains(&room) {
                        warn!(
                            "conflict ignored: room {room} already committed for booking {id}'s dates"
                        );
                    }
                }

                match state
                    .pg_db
                    .send(AssignBookingRoom {
                        id,
                        room_id: room.clone(),
                    })
                    .await
                {
                    Ok(Ok(updated)) => {
                        state
                            .notifier
                            .booking_confirmed(&updated, Some(room.as_str()))
                            .await
                    }
                    Ok(Err(err)) => warn!("failed to assign room {room} to booking {id}: {err}"),
                    _ => warn!("failed to assign room {room} to booking {id}: actor unavailable"),
                }
            }
            CallbackAction::DeleteBooking(id) => match state.pg_db.send(DeleteBooking(id)).await {
                Ok(Ok(deleted)) => state.notifier.booking_deleted(&deleted).await,
                Ok(Err(err)) => warn!("delete callback for booking {id}: {err}"),
                _ => warn!("delete callback for booking {id}: actor unavailable"),
            },
            CallbackAction::CancelBooking(id) => {
                state.notifier.restore_booking_keyboard(id).await;
            }
            CallbackAction::ConfirmOrder(id) => {
                order_transition(state, id, OrderAction::Confirm).await;
            }
            CallbackAction::DeclineOrder(id) => {
                order_transition(state, id, OrderAction::Decline).await;
            }
            CallbackAction::CompleteOrder(id) => {
                order_transition(state, id, OrderAction::Complete).await;
            }
        }
    }

    async fn order_transition(state: &AppState, id: i64, action: OrderAction) {
        match state.pg_db.send(TransitionOrder { id, action }).await {
            Ok(Ok(updated)) => match action {
                OrderAction::Confirm => {
                    state.notifier.order_confirmed(&updated.order, &updated.items).await
                }
                OrderAction::Decline => {
                    state.notifier.order_declined(&updated.order, &updated.items).await
                }
                OrderAction::Complete => {
                    state.notifier.order_completed(&updated.order, &updated.items).await
                }
            },
            Ok(Err(err)) => {
                warn!("order {id} transition failed: {err}");
                state.notifier.send_plain(&format!("⚠️ Order #{id}: {err}")).await;
            }
            _ => warn!("order {id} transition failed: actor unavailable"),
        }
    }

    fn booking_summary(booking: &Booking) -> String {
        format!(
            "#{} {} {} → {} | {} {} | {} | {}",
            booking.id,
            booking.room_type,
            booking
                .check_in
                .map(|d| d.to_string())
                .unwrap_or_else(|| "—".to_owned()),
            booking
                .check_out
                .map(|d| d.to_string())
                .unwrap_or_else(|| "—".to_owned()),
            booking.name,
            booking.surname,
            booking.phone,
            booking.status,
        )
    }

    fn order_summary(entry: &OrderWithItems) -> String {
        format!(
            "#{} {} THB | {} | {} | {}",
            entry.order.id,
            entry.order.total,
            entry.order.name,
            entry.order.phone,
            entry.order.status,
        )
    }

    async fn handle_command(state: &AppState, command: TextCommand) {
        match command {
            TextCommand::UnconfirmedBookings | TextCommand::AllBookings => {
                let all = command == TextCommand::AllBookings;
                let bookings = match state.pg_db.send(FetchBookings { include_deleted: all }).await
                {
                    Ok(Ok(bookings)) => bookings,
                    _ => return warn!("failed to list bookings for staff command"),
                };
                let lines: Vec<String> = bookings
                    .iter()
                    .filter(|b| {
                        all || BookingStatus::from_stored(&b.status) == BookingStatus::Unconfirmed
                    })
                    .map(booking_summary)
                    .collect();
                let text = if lines.is_empty() {
                    "No bookings to show".to_owned()
                } else {
                    lines.join("\n")
                };
                state.notifier.send_plain(&text).await;
            }
            TextCommand::UnconfirmedOrders | TextCommand::AllOrders => {
                let all = command == TextCommand::AllOrders;
                let orders = match state.pg_db.send(FetchOrders { include_deleted: all }).await {
                    Ok(Ok(orders)) => orders,
                    _ => return warn!("failed to list orders for staff command"),
                };
                let lines: Vec<String> = orders
                    .iter()
                    .filter(|o| {
                        all || OrderStatus::from_stored(&o.order.status) == OrderStatus::Unconfirmed
                    })
                    .map(order_summary)
                    .collect();
                let text = if lines.is_empty() {
                    "No orders to show".to_owned()
                } else {
                    lines.join("\n")
                };
                state.notifier.send_plain(&text).await;
            }
        }
    }
}
