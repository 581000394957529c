//! Correlation state between domain records and the staff-chat messages
//! that represent them. Keeping the pair around lets a later lifecycle
//! transition edit the original message instead of posting a duplicate.
//!
//! Best-effort by design: the map is in-memory and does not survive a
//! restart, in which case the next transition simply posts anew.

use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBinding {
    pub chat_id: i64,
    pub message_id: i64,
    pub last_text: String,
}

/// One instance per lifecycle (bookings and orders have different
/// message layouts), same implementation for both.
#[derive(Default)]
pub struct MessageBindings {
    inner: Mutex<HashMap<i64, MessageBinding>>,
}

impl MessageBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, record_id: i64, chat_id: i64, message_id: i64, text: String) {
        self.inner.lock().unwrap().insert(
            record_id,
            MessageBinding {
                chat_id,
                message_id,
                last_text: text,
            },
        );
    }

    pub fn get(&self, record_id: i64) -> Option<MessageBinding> {
        self.inner.lock().unwrap().get(&record_id).cloned()
    }

    pub fn set_text(&self, record_id: i64, text: String) {
        if let Some(binding) = self.inner.lock().unwrap().get_mut(&record_id) {
            binding.last_text = text;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_then_get_round_trips() {
        let bindings = MessageBindings::new();
        bindings.bind(7, 100, 555, "hello".into());

        let binding = bindings.get(7).unwrap();
        assert_eq!(binding.chat_id, 100);
        assert_eq!(binding.message_id, 555);
        assert_eq!(binding.last_text, "hello");
        assert!(bindings.get(8).is_none());
    }

    #[test]
    fn set_text_updates_only_existing_entries() {
        let bindings = MessageBindings::new();
        bindings.bind(7, 100, 555, "old".into());

        bindings.set_text(7, "new".into());
        assert_eq!(bindings.get(7).unwrap().last_text, "new");

        // Unknown id is a silent no-op.
        bindings.set_text(9, "whatever".into());
        assert!(bindings.get(9).is_none());
    }

    #[test]
    fn rebinding_replaces_the_message_identity() {
        let bindings = MessageBindings::new();
        bindings.bind(7, 100, 555, "first".into());
        bindings.bind(7, 100, 556, "second".into());

        let binding = bindings.get(7).unwrap();
        assert_eq!(binding.message_id, 556);
        assert_eq!(binding.last_text, "second");
    }
}
