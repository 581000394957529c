use std::env;
use std::sync::Arc;
use std::time::Duration;

use actix::{Addr, SyncArbiter};
use actix_cors::Cors;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use chrono::Local;
use dotenv::dotenv;
use log::{error, info};

use menu_cache::MenuCache;
use rooms::RoomCatalog;
use services::db_utils::{get_db_pool, AppState, PgActor};
use services::messages::CleanupExpired;
use settings::Settings;
use telegram::Notifier;

mod availability;
mod dates;
mod lifecycle;
mod menu_cache;
mod rooms;
mod schema;
mod services;
mod settings;
mod telegram;
mod types;

fn init_pg_db(catalog: RoomCatalog) -> Addr<PgActor> {
    let db_url = env::var("PG_DATABASE_URL").expect("PG_DATABASE_URL must be set");
    let pool = get_db_pool(&db_url).expect("failed to initialize connection pool");

    SyncArbiter::start(5, move || PgActor {
        pool: pool.clone(),
        catalog: catalog.clone(),
    })
}

/// Retires bookings whose checkout date has passed: once right away,
/// then hourly. Failures are logged, never fatal to the server.
fn spawn_cleanup_sweep(pg_db: Addr<PgActor>) {
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(3600));
        loop {
            interval.tick().await;
            let today = Local::now().date_naive();
            match pg_db.send(CleanupExpired { today }).await {
                Ok(Ok(0)) => {}
                Ok(Ok(count)) => info!("cleanup sweep retired {count} expired bookings"),
                Ok(Err(err)) => error!("cleanup sweep failed: {err}"),
                Err(err) => error!("cleanup sweep failed: {err}"),
            }
        }
    });
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let settings = Settings::load().expect("invalid configuration");
    let catalog = settings.catalog();

    let pg_db = init_pg_db(catalog.clone());
    let notifier = Arc::new(Notifier::new(
        settings.telegram.token.clone(),
        settings.telegram.chat_id,
    ));
    let menu_cache = Arc::new(MenuCache::new(Duration::from_secs(
        settings.menu_cache_ttl_secs,
    )));

    spawn_cleanup_sweep(pg_db.clone());

    let bind_addr = settings.bind_addr.clone();
    info!("starting hotel backend on {bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(Data::new(AppState {
                pg_db: pg_db.clone(),
                catalog: catalog.clone(),
                notifier: notifier.clone(),
                menu_cache: menu_cache.clone(),
            }))
            .service(services::home_page)
            .service(services::public_route::booked_dates)
            .service(services::public_route::book_room)
            .service(services::telegram_route::webhook)
            .service(
                web::scope("/api")
                    .service(services::public_route::view_menu)
                    .service(services::public_route::order_food),
            )
            .service(
                web::scope("/admin")
                    .service(services::admin_bookings_route::get_available_rooms)
                    .service(services::admin_bookings_route::all_bookings)
                    .service(services::admin_bookings_route::create_booking)
                    .service(services::admin_bookings_route::update_booking)
                    .service(services::admin_bookings_route::delete_booking)
                    .service(services::admin_bookings_route::clear_history)
                    .service(services::admin_orders_route::all_orders)
                    .service(services::admin_orders_route::get_order)
                    .service(services::admin_orders_route::create_order)
                    .service(services::admin_orders_route::update_order)
                    .service(services::admin_orders_route::confirm_order)
                    .service(services::admin_orders_route::decline_order)
                    .service(services::admin_orders_route::complete_order)
                    .service(services::admin_orders_route::delete_order)
                    .service(
                        web::scope("/menu")
                            .service(services::admin_menu_route::create_dish)
                            .service(services::admin_menu_route::update_dish)
                            .service(services::admin_menu_route::delete_dish),
                    ),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
