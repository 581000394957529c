//! Wire shapes of the Telegram webhook and the parsers for button
//! callback data and staff text commands.

use serde::Deserialize;

/// Subset of the Bot API `Update` object the webhook cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub callback_query: Option<CallbackQuery>,
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub data: Option<String>,
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// One button press, decoded from `callback_data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    ConfirmBooking(i64),
    DeleteBooking(i64),
    AssignRoom(i64, String),
    CancelBooking(i64),
    ConfirmOrder(i64),
    DeclineOrder(i64),
    CompleteOrder(i64),
}

pub fn parse_callback(data: &str) -> Option<CallbackAction> {
    let mut parts = data.splitn(3, ':');
    let kind = parts.next()?;
    let id: i64 = parts.next()?.trim().parse().ok()?;

    match kind {
        "confirm" => Some(CallbackAction::ConfirmBooking(id)),
        "delete" => Some(CallbackAction::DeleteBooking(id)),
        "cancel" => Some(CallbackAction::CancelBooking(id)),
        "room" => {
            let room = parts.next()?.trim();
            if room.is_empty() {
                return None;
            }
            Some(CallbackAction::AssignRoom(id, room.to_owned()))
        }
        "order_confirm" => Some(CallbackAction::ConfirmOrder(id)),
        "order_decline" => Some(CallbackAction::DeclineOrder(id)),
        "order_complete" => Some(CallbackAction::CompleteOrder(id)),
        _ => None,
    }
}

/// Staff text commands typed straight into the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCommand {
    UnconfirmedBookings,
    UnconfirmedOrders,
    AllBookings,
    AllOrders,
}

pub fn parse_command(text: &str) -> Option<TextCommand> {
    match text.trim().to_lowercase().as_str() {
        "#bookings" | "#unconfirm" => Some(TextCommand::UnconfirmedBookings),
        "#orders" | "#2confirm" => Some(TextCommand::UnconfirmedOrders),
        "#allbookings" => Some(TextCommand::AllBookings),
        "#allorders" => Some(TextCommand::AllOrders),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_button_kind() {
        assert_eq!(parse_callback("confirm:5"), Some(CallbackAction::ConfirmBooking(5)));
        assert_eq!(parse_callback("delete:12"), Some(CallbackAction::DeleteBooking(12)));
        assert_eq!(parse_callback("cancel:3"), Some(CallbackAction::CancelBooking(3)));
        assert_eq!(
            parse_callback("room:5:22"),
            Some(CallbackAction::AssignRoom(5, "22".to_owned()))
        );
        assert_eq!(parse_callback("order_confirm:8"), Some(CallbackAction::ConfirmOrder(8)));
        assert_eq!(parse_callback("order_decline:8"), Some(CallbackAction::DeclineOrder(8)));
        assert_eq!(parse_callback("order_complete:8"), Some(CallbackAction::CompleteOrder(8)));
    }

    #[test]
    fn malformed_callback_data_is_ignored() {
        assert_eq!(parse_callback(""), None);
        assert_eq!(parse_callback("confirm"), None);
        assert_eq!(parse_callback("confirm:abc"), None);
        assert_eq!(parse_callback("room:5"), None);
        assert_eq!(parse_callback("room:5:"), None);
        assert_eq!(parse_callback("unknown:5"), None);
    }

    #[test]
    fn text_commands_accept_aliases() {
        assert_eq!(parse_command(" #Bookings "), Some(TextCommand::UnconfirmedBookings));
        assert_eq!(parse_command("#unconfirm"), Some(TextCommand::UnconfirmedBookings));
        assert_eq!(parse_command("#orders"), Some(TextCommand::UnconfirmedOrders));
        assert_eq!(parse_command("#2confirm"), Some(TextCommand::UnconfirmedOrders));
        assert_eq!(parse_command("#allbookings"), Some(TextCommand::AllBookings));
        assert_eq!(parse_command("#allorders"), Some(TextCommand::AllOrders));
        assert_eq!(parse_command("hello"), None);
    }
}
