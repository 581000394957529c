//! Staff notifications over the Telegram Bot API.
//!
//! Delivery sits behind a fire-and-forget boundary: every call here
//! logs failures and swallows them, so a Telegram outage can never fail
//! or roll back the booking/order write that triggered it.

use std::time::Duration;

use log::{info, warn};
use serde_json::{json, Value};

use crate::services::db_models::{Booking, Order, OrderItem};

pub mod bindings;
pub mod callback;
pub mod render;

use bindings::MessageBindings;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin transport over `sendMessage`/`editMessageText`.
pub struct TelegramClient {
    http: reqwest::Client,
    token: String,
    chat_id: i64,
}

impl TelegramClient {
    pub fn new(token: String, chat_id: i64) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build http client");

        TelegramClient {
            http,
            token,
            chat_id,
        }
    }

    fn url(&self, method: &str) -> String {
        format!("https://api.telegram.org/bot{}/{}", self.token, method)
    }

    async fn call(&self, method: &str, body: Value) -> Result<Value, String> {
        let resp = self
            .http
            .post(self.url(method))
            .json(&body)
            .send()
            .await
            .map_err(|err| err.to_string())?;
        let payload: Value = resp.json().await.map_err(|err| err.to_string())?;

        if payload["ok"].as_bool() != Some(true) {
            return Err(format!("telegram api rejected {method}: {payload}"));
        }
        Ok(payload)
    }

    pub async fn send_message(
        &self,
        text: &str,
        keyboard: Option<Value>,
    ) -> Result<i64, String> {
        let mut body = json!({ "chat_id": self.chat_id, "text": text });
        if let Some(kb) = keyboard {
            body["reply_markup"] = json!({ "inline_keyboard": kb });
        }

        let payload = self.call("sendMessage", body).await?;
        payload["result"]["message_id"]
            .as_i64()
            .ok_or_else(|| "sendMessage response missing message_id".to_owned())
    }

    pub async fn edit_message(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<Value>,
    ) -> Result<(), String> {
        let mut body = json!({
            "chat_id": chat_id,
            "message_id": message_id,
            "text": text,
        });
        if let Some(kb) = keyboard {
            body["reply_markup"] = json!({ "inline_keyboard": kb });
        }

        self.call("editMessageText", body).await.map(|_| ())
    }
}

/// Formats lifecycle events and keeps the booking/order message
/// bindings, editing in place when a message for the record exists.
pub struct Notifier {
    client: Option<TelegramClient>,
    pub bookings: MessageBindings,
    pub orders: MessageBindings,
}

impl Notifier {
    pub fn new(token: Option<String>, chat_id: Option<i64>) -> Self {
        let client = match (token, chat_id) {
            (Some(token), Some(chat_id)) if !token.is_empty() => {
                Some(TelegramClient::new(token, chat_id))
            }
            _ => {
                info!("telegram token/chat id not configured, staff notifications disabled");
                None
            }
        };

        Notifier {
            client,
            bookings: MessageBindings::new(),
            orders: MessageBindings::new(),
        }
    }

    pub async fn booking_created(&self, booking: &Booking) {
        let text = render::booking_text(booking);
        self.post(&self.bookings, booking.id, text, Some(render::booking_keyboard(booking.id)))
            .await;
    }

    pub async fn booking_confirmed(&self, booking: &Booking, room_id: Option<&str>) {
        let line = render::booking_confirmed_line(room_id);
        self.transition(
            &self.bookings,
            booking.id,
            render::booking_text(booking),
            &line,
            None,
        )
        .await;
    }

    pub async fn booking_deleted(&self, booking: &Booking) {
        self.transition(
            &self.bookings,
            booking.id,
            render::booking_text(booking),
            render::BOOKING_DELETED_LINE,
            None,
        )
        .await;
    }

    /// Swaps the bound message's keyboard for the room picker. The text
    /// stays as last rendered.
    pub async fn show_room_choice(&self, booking_id: i64, available_rooms: &[String]) {
        let keyboard = render::room_choice_keyboard(booking_id, available_rooms);
        self.reset_keyboard(booking_id, keyboard).await;
    }

    pub async fn restore_booking_keyboard(&self, booking_id: i64) {
        self.reset_keyboard(booking_id, render::booking_keyboard(booking_id))
            .await;
    }

    pub async fn order_created(&self, order: &Order, items: &[OrderItem]) {
        let text = render::order_text(order, items);
        self.post(&self.orders, order.id, text, Some(render::order_keyboard(order.id)))
            .await;
    }

    pub async fn order_confirmed(&self, order: &Order, items: &[OrderItem]) {
        self.transition(
            &self.orders,
            order.id,
            render::order_text(order, items),
            render::ORDER_LIVE_LINE,
            Some(render::order_live_keyboard(order.id)),
        )
        .await;
    }

    pub async fn order_declined(&self, order: &Order, items: &[OrderItem]) {
        self.transition(
            &self.orders,
            order.id,
            render::order_text(order, items),
            render::ORDER_DECLINED_LINE,
            None,
        )
        .await;
    }

    pub async fn order_completed(&self, order: &Order, items: &[OrderItem]) {
        self.transition(
            &self.orders,
            order.id,
            render::order_text(order, items),
            render::ORDER_COMPLETED_LINE,
            None,
        )
        .await;
    }

    /// Plain reply for staff text commands.
    pub async fn send_plain(&self, text: &str) {
        let Some(client) = &self.client else { return };
        if let Err(err) = client.send_message(text, None).await {
            warn!("failed to send telegram message: {err}");
        }
    }

    async fn post(
        &self,
        bindings: &MessageBindings,
        record_id: i64,
        text: String,
        keyboard: Option<Value>,
    ) {
        let Some(client) = &self.client else { return };
        match client.send_message(&text, keyboard).await {
            Ok(message_id) => bindings.bind(record_id, client.chat_id, message_id, text),
            Err(err) => warn!("failed to notify staff about record {record_id}: {err}"),
        }
    }

    /// Applies a status line to the bound message, or posts a fresh one
    /// when the binding got lost (e.g. after a restart).
    async fn transition(
        &self,
        bindings: &MessageBindings,
        record_id: i64,
        fallback_text: String,
        status_line: &str,
        keyboard: Option<Value>,
    ) {
        let Some(client) = &self.client else { return };

        match bindings.get(record_id) {
            Some(binding) => {
                let text = render::with_status_line(&binding.last_text, status_line);
                match client
                    .edit_message(binding.chat_id, binding.message_id, &text, keyboard)
                    .await
                {
                    Ok(()) => bindings.set_text(record_id, text),
                    Err(err) => warn!("failed to edit staff message for record {record_id}: {err}"),
                }
            }
            None => {
                let text = render::with_status_line(&fallback_text, status_line);
                match client.send_message(&text, keyboard).await {
                    Ok(message_id) => bindings.bind(record_id, client.chat_id, message_id, text),
                    Err(err) => warn!("failed to notify staff about record {record_id}: {err}"),
                }
            }
        }
    }

    async fn reset_keyboard(&self, booking_id: i64, keyboard: Value) {
        let Some(client) = &self.client else { return };
        let Some(binding) = self.bookings.get(booking_id) else {
            return;
        };

        if let Err(err) = client
            .edit_message(binding.chat_id, binding.message_id, &binding.last_text, Some(keyboard))
            .await
        {
            warn!("failed to update keyboard for booking {booking_id}: {err}");
        }
    }
}
