use std::collections::HashMap;

use actix::Handler;
use chrono::Local;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::{ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};

use crate::lifecycle::{merge_booking_update, merge_order_update, next_order_status, OrderStatus};
use crate::services::db_models::{Booking, Dish, Order, OrderItem, OrderWithItems};
use crate::services::db_utils::PgActor;
use crate::services::insertable::{
    BookingChangeset, DishChangeset, NewBooking, NewDish, NewOrder, NewOrderItem, OrderChangeset,
};
use crate::services::messages::{
    AssignBookingRoom, CleanupExpired, ClearHistory, CreateBooking, CreateDish, CreateOrder,
    DeleteBooking, DeleteDish, FetchBooking, FetchBookings, FetchDishes, FetchOrder, FetchOrders,
    TransitionOrder, UpdateBooking, UpdateDish, UpdateOrder,
};
use crate::types::HotelError;

fn establish_connection(
    pool: &Pool<ConnectionManager<PgConnection>>,
) -> Result<PooledConnection<ConnectionManager<PgConnection>>, HotelError> {
    pool.get()
        .map_err(|_| HotelError::Db("failed to establish connection".to_owned()))
}

fn not_found(what: &str) -> impl Fn(diesel::result::Error) -> HotelError + '_ {
    move |err| match err {
        diesel::result::Error::NotFound => HotelError::NotFound(what.to_owned()),
        other => other.into(),
    }
}

impl Handler<FetchBookings> for PgActor {
    type Result = Result<Vec<Booking>, HotelError>;

    fn handle(&mut self, msg: FetchBookings, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::bookings::dsl::bookings;
        use crate::schema::bookings::{created_at, status};

        let mut conn = establish_connection(&self.pool)?;

        let mut query = bookings.order(created_at.desc()).into_boxed();
        if !msg.include_deleted {
            query = query.filter(status.ne("deleted"));
        }

        Ok(query.load::<Booking>(&mut conn)?)
    }
}

impl Handler<FetchBooking> for PgActor {
    type Result = Result<Booking, HotelError>;

    fn handle(&mut self, msg: FetchBooking, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::bookings::dsl::bookings;

        let mut conn = establish_connection(&self.pool)?;

        bookings
            .find(msg.0)
            .first(&mut conn)
            .map_err(not_found("booking"))
    }
}

impl Handler<CreateBooking> for PgActor {
    type Result = Result<Booking, HotelError>;

    fn handle(&mut self, msg: CreateBooking, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::bookings::dsl::bookings;

        let mut conn = establish_connection(&self.pool)?;
        let valid = msg.0;

        Ok(diesel::insert_into(bookings)
            .values(NewBooking {
                room_type: valid.room_type.as_str().to_owned(),
                room_id: valid.room_id,
                check_in: Some(valid.check_in),
                check_out: Some(valid.check_out),
                guests: valid.guests,
                name: valid.name,
                surname: valid.surname,
                phone: valid.phone,
                source: valid.source.as_str().to_owned(),
                status: valid.status.as_str().to_owned(),
                total: valid.total,
                created_at: Local::now().naive_local(),
            })
            .get_result::<Booking>(&mut conn)?)
    }
}

impl Handler<UpdateBooking> for PgActor {
    type Result = Result<Booking, HotelError>;

    fn handle(&mut self, msg: UpdateBooking, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::bookings::dsl::bookings;

        let mut conn = establish_connection(&self.pool)?;
        let catalog = self.catalog.clone();

        conn.build_transaction().run(move |trx_conn| {
            let current: Booking = bookings
                .find(msg.id)
                .first(trx_conn)
                .map_err(not_found("booking"))?;

            let patch = merge_booking_update(&current, &msg.update, &catalog)?;

            Ok(diesel::update(bookings.find(msg.id))
                .set(BookingChangeset {
                    room_type: patch.room_type,
                    room_id: patch.room_id,
                    check_in: patch.check_in,
                    check_out: patch.check_out,
                    guests: patch.guests,
                    name: patch.name,
                    surname: patch.surname,
                    phone: patch.phone,
                    status: patch.status,
                    total: patch.total,
                })
                .get_result::<Booking>(trx_conn)?)
        })
    }
}

impl Handler<DeleteBooking> for PgActor {
    type Result = Result<Booking, HotelError>;

    fn handle(&mut self, msg: DeleteBooking, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::bookings::dsl::bookings;
        use crate::schema::bookings::status;

        let mut conn = establish_connection(&self.pool)?;

        diesel::update(bookings.find(msg.0))
            .set(status.eq("deleted"))
            .get_result::<Booking>(&mut conn)
            .map_err(not_found("booking"))
    }
}

impl Handler<AssignBookingRoom> for PgActor {
    type Result = Result<Booking, HotelError>;

    fn handle(&mut self, msg: AssignBookingRoom, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::bookings::dsl::bookings;
        use crate::schema::bookings::{room_id, status};

        let mut conn = establish_connection(&self.pool)?;

        diesel::update(bookings.find(msg.id))
            .set((status.eq("confirmed"), room_id.eq(msg.room_id)))
            .get_result::<Booking>(&mut conn)
            .map_err(not_found("booking"))
    }
}

impl Handler<CleanupExpired> for PgActor {
    type Result = Result<usize, HotelError>;

    fn handle(&mut self, msg: CleanupExpired, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::bookings::dsl::bookings;
        use crate::schema::bookings::{check_out, status};

        let mut conn = establish_connection(&self.pool)?;

        // In-SQL form of lifecycle::booking_expired; NULL checkouts
        // fail the comparison and survive, as there.
        Ok(diesel::update(
            bookings
                .filter(check_out.lt(msg.today))
                .filter(status.ne("deleted")),
        )
        .set(status.eq("deleted"))
        .execute(&mut conn)?)
    }
}

impl Handler<ClearHistory> for PgActor {
    type Result = Result<(usize, usize), HotelError>;

    fn handle(&mut self, _msg: ClearHistory, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::bookings::dsl::bookings;
        use crate::schema::bookings::status as booking_status;
        use crate::schema::order_items::dsl::order_items;
        use crate::schema::order_items::order_id as item_order_id;
        use crate::schema::orders::dsl::orders;
        use crate::schema::orders::{id as order_pk, status as order_status};

        let mut conn = establish_connection(&self.pool)?;

        conn.build_transaction().run(|trx_conn| {
            let removed_bookings =
                diesel::delete(bookings.filter(booking_status.eq("deleted"))).execute(trx_conn)?;

            let purgeable: Vec<i64> = orders
                .filter(order_status.eq_any(["completed", "deleted"]))
                .select(order_pk)
                .load(trx_conn)?;

            diesel::delete(order_items.filter(item_order_id.eq_any(&purgeable)))
                .execute(trx_conn)?;
            let removed_orders =
                diesel::delete(orders.filter(order_pk.eq_any(&purgeable))).execute(trx_conn)?;

            Ok((removed_bookings, removed_orders))
        })
    }
}

impl Handler<CreateOrder> for PgActor {
    type Result = Result<OrderWithItems, HotelError>;

    fn handle(&mut self, msg: CreateOrder, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::order_items::dsl::order_items;
        use crate::schema::orders::dsl::orders;

        let mut conn = establish_connection(&self.pool)?;
        let valid = msg.0;

        conn.build_transaction().run(move |trx_conn| {
            let order: Order = diesel::insert_into(orders)
                .values(NewOrder {
                    name: valid.name,
                    phone: valid.phone,
                    communication: valid.communication,
                    status: "unconfirmed".to_owned(),
                    total: valid.total,
                    created_at: Local::now().naive_local(),
                })
                .get_result(trx_conn)?;

            let rows: Vec<NewOrderItem> = valid
                .items
                .into_iter()
                .map(|item| NewOrderItem {
                    order_id: order.id,
                    dish_id: item.dish_id,
                    quantity: item.quantity,
                    price: item.price,
                    subtotal: item.subtotal,
                })
                .collect();

            let items = diesel::insert_into(order_items)
                .values(&rows)
                .get_results::<OrderItem>(trx_conn)?;

            Ok(OrderWithItems { order, items })
        })
    }
}

fn load_items_for(
    conn: &mut PgConnection,
    ids: &[i64],
) -> Result<HashMap<i64, Vec<OrderItem>>, HotelError> {
    use crate::schema::order_items::dsl::order_items;
    use crate::schema::order_items::{id, order_id};

    let rows: Vec<OrderItem> = order_items
        .filter(order_id.eq_any(ids))
        .order(id.asc())
        .load(conn)?;

    let mut grouped: HashMap<i64, Vec<OrderItem>> = HashMap::new();
    for item in rows {
        grouped.entry(item.order_id).or_default().push(item);
    }
    Ok(grouped)
}

impl Handler<FetchOrders> for PgActor {
    type Result = Result<Vec<OrderWithItems>, HotelError>;

    fn handle(&mut self, msg: FetchOrders, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::orders::dsl::orders;
        use crate::schema::orders::{created_at, status};

        let mut conn = establish_connection(&self.pool)?;

        let mut query = orders.order(created_at.desc()).into_boxed();
        if !msg.include_deleted {
            query = query.filter(status.ne("deleted"));
        }
        let order_rows: Vec<Order> = query.load(&mut conn)?;

        let ids: Vec<i64> = order_rows.iter().map(|o| o.id).collect();
        let mut grouped = load_items_for(&mut conn, &ids)?;

        Ok(order_rows
            .into_iter()
            .map(|order| {
                let items = grouped.remove(&order.id).unwrap_or_default();
                OrderWithItems { order, items }
            })
            .collect())
    }
}

impl Handler<FetchOrder> for PgActor {
    type Result = Result<OrderWithItems, HotelError>;

    fn handle(&mut self, msg: FetchOrder, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::orders::dsl::orders;

        let mut conn = establish_connection(&self.pool)?;

        let order: Order = orders
            .find(msg.0)
            .first(&mut conn)
            .map_err(not_found("order"))?;
        let items = load_items_for(&mut conn, &[order.id])?
            .remove(&order.id)
            .unwrap_or_default();

        Ok(OrderWithItems { order, items })
    }
}

impl Handler<TransitionOrder> for PgActor {
    type Result = Result<OrderWithItems, HotelError>;

    fn handle(&mut self, msg: TransitionOrder, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::orders::dsl::orders;
        use crate::schema::orders::status;

        let mut conn = establish_connection(&self.pool)?;

        conn.build_transaction().run(move |trx_conn| {
            let current: Order = orders
                .find(msg.id)
                .first(trx_conn)
                .map_err(not_found("order"))?;

            let next = next_order_status(OrderStatus::from_stored(&current.status), msg.action)?;

            let order: Order = diesel::update(orders.find(msg.id))
                .set(status.eq(next.as_str()))
                .get_result(trx_conn)?;
            let items = load_items_for(trx_conn, &[msg.id])?
                .remove(&msg.id)
                .unwrap_or_default();

            Ok(OrderWithItems { order, items })
        })
    }
}

impl Handler<UpdateOrder> for PgActor {
    type Result = Result<OrderWithItems, HotelError>;

    fn handle(&mut self, msg: UpdateOrder, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::order_items::dsl::order_items;
        use crate::schema::order_items::order_id as item_order_id;
        use crate::schema::orders::dsl::orders;

        let mut conn = establish_connection(&self.pool)?;

        conn.build_transaction().run(move |trx_conn| {
            let current: Order = orders
                .find(msg.id)
                .first(trx_conn)
                .map_err(not_found("order"))?;

            let patch = merge_order_update(&current, &msg.update)?;

            let order: Order = diesel::update(orders.find(msg.id))
                .set(OrderChangeset {
                    name: patch.name,
                    phone: patch.phone,
                    communication: patch.communication,
                    status: patch.status,
                    total: patch.total,
                })
                .get_result(trx_conn)?;

            if let Some(new_items) = patch.items {
                diesel::delete(order_items.filter(item_order_id.eq(msg.id))).execute(trx_conn)?;

                let rows: Vec<NewOrderItem> = new_items
                    .into_iter()
                    .map(|item| NewOrderItem {
                        order_id: msg.id,
                        dish_id: item.dish_id,
                        quantity: item.quantity,
                        price: item.price,
                        subtotal: item.subtotal,
                    })
                    .collect();
                diesel::insert_into(order_items)
                    .values(&rows)
                    .execute(trx_conn)?;
            }

            let items = load_items_for(trx_conn, &[msg.id])?
                .remove(&msg.id)
                .unwrap_or_default();

            Ok(OrderWithItems { order, items })
        })
    }
}

impl Handler<FetchDishes> for PgActor {
    type Result = Result<Vec<Dish>, HotelError>;

    fn handle(&mut self, _msg: FetchDishes, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::dishes::dsl::dishes;
        use crate::schema::dishes::id;

        let mut conn = establish_connection(&self.pool)?;

        Ok(dishes.order(id.asc()).load::<Dish>(&mut conn)?)
    }
}

impl Handler<CreateDish> for PgActor {
    type Result = Result<Dish, HotelError>;

    fn handle(&mut self, msg: CreateDish, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::dishes::dsl::dishes;

        let mut conn = establish_connection(&self.pool)?;

        Ok(diesel::insert_into(dishes)
            .values(NewDish {
                category: msg.category,
                name: msg.name,
                price: msg.price,
            })
            .get_result::<Dish>(&mut conn)?)
    }
}

impl Handler<UpdateDish> for PgActor {
    type Result = Result<Dish, HotelError>;

    fn handle(&mut self, msg: UpdateDish, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::dishes::dsl::dishes;

        let mut conn = establish_connection(&self.pool)?;

        diesel::update(dishes.find(msg.id))
            .set(DishChangeset {
                category: msg.category,
                name: msg.name,
                price: msg.price,
            })
            .get_result::<Dish>(&mut conn)
            .map_err(not_found("dish"))
    }
}

impl Handler<DeleteDish> for PgActor {
    type Result = Result<usize, HotelError>;

    fn handle(&mut self, msg: DeleteDish, _ctx: &mut Self::Context) -> Self::Result {
        use crate::schema::dishes::dsl::dishes;

        let mut conn = establish_connection(&self.pool)?;

        Ok(diesel::delete(dishes.find(msg.0)).execute(&mut conn)?)
    }
}
