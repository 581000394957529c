use std::sync::Arc;

use actix::{Actor, Addr, SyncContext};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;

use crate::menu_cache::MenuCache;
use crate::rooms::RoomCatalog;
use crate::telegram::Notifier;
use crate::types::PoolInitializationError;

/// Synchronous diesel worker; one instance per arbiter thread. Carries
/// the room catalog so update handlers can recompute booking totals
/// inside the row transaction.
pub struct PgActor {
    pub pool: Pool<ConnectionManager<PgConnection>>,
    pub catalog: RoomCatalog,
}

impl Actor for PgActor {
    type Context = SyncContext<Self>;
}

pub struct AppState {
    pub pg_db: Addr<PgActor>,
    pub catalog: RoomCatalog,
    pub notifier: Arc<Notifier>,
    pub menu_cache: Arc<MenuCache>,
}

pub fn get_db_pool(
    db_url: &str,
) -> Result<Pool<ConnectionManager<PgConnection>>, PoolInitializationError> {
    let manager: ConnectionManager<PgConnection> = ConnectionManager::<PgConnection>::new(db_url);
    match Pool::builder().build(manager) {
        Ok(val) => Ok(val),
        Err(err) => Err(PoolInitializationError(err.to_string())),
    }
}
