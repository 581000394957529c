//! TTL cache for the dish list. The public menu endpoint is read far
//! more often than the menu changes, so reads are served from memory
//! and every admin menu write invalidates the entry.
//!
//! All methods take the current `Instant` from the caller, which keeps
//! expiry deterministic in tests.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::services::db_models::Dish;

pub struct MenuCache {
    ttl: Duration,
    entry: Mutex<Option<(Instant, Vec<Dish>)>>,
}

impl MenuCache {
    pub fn new(ttl: Duration) -> Self {
        MenuCache {
            ttl,
            entry: Mutex::new(None),
        }
    }

    pub fn get_at(&self, now: Instant) -> Option<Vec<Dish>> {
        let guard = self.entry.lock().unwrap();
        match guard.as_ref() {
            Some((stored_at, dishes)) if now.duration_since(*stored_at) < self.ttl => {
                Some(dishes.clone())
            }
            _ => None,
        }
    }

    pub fn store_at(&self, now: Instant, dishes: Vec<Dish>) {
        *self.entry.lock().unwrap() = Some((now, dishes));
    }

    pub fn invalidate(&self) {
        *self.entry.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: i64) -> Dish {
        Dish {
            id,
            category: "Drinks".into(),
            name: "Thai Iced Tea".into(),
            price: 45,
        }
    }

    #[test]
    fn serves_within_ttl_and_expires_after() {
        let cache = MenuCache::new(Duration::from_secs(60));
        let start = Instant::now();

        assert!(cache.get_at(start).is_none());
        cache.store_at(start, vec![dish(1)]);

        let hit = cache.get_at(start + Duration::from_secs(59)).unwrap();
        assert_eq!(hit.len(), 1);

        assert!(cache.get_at(start + Duration::from_secs(60)).is_none());
    }

    #[test]
    fn invalidate_drops_entry_immediately() {
        let cache = MenuCache::new(Duration::from_secs(60));
        let start = Instant::now();

        cache.store_at(start, vec![dish(1), dish(2)]);
        cache.invalidate();
        assert!(cache.get_at(start).is_none());
    }
}
