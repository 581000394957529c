use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The two configured room categories. Every room id in the inventory
/// belongs to exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Small,
    Big,
}

impl RoomType {
    pub fn parse(raw: &str) -> Result<Self, HotelError> {
        match raw.trim().to_lowercase().as_str() {
            "small" => Ok(RoomType::Small),
            "big" => Ok(RoomType::Big),
            other => Err(HotelError::InvalidRoomType(other.to_owned())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Small => "small",
            RoomType::Big => "big",
        }
    }
}

impl Display for RoomType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug)]
pub struct PoolInitializationError(pub String);

impl Display for PoolInitializationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Error taxonomy shared by the lifecycles, the availability engine and
/// the HTTP layer. Validation failures carry every violated field, not
/// just the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotelError {
    Validation(Vec<String>),
    NotFound(String),
    InvalidStatus(String),
    InvalidRoomType(String),
    Db(String),
}

impl HotelError {
    pub fn validation(field: &str) -> Self {
        HotelError::Validation(vec![field.to_owned()])
    }
}

impl Display for HotelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HotelError::Validation(fields) => {
                write!(f, "invalid or missing fields: {}", fields.join(", "))
            }
            HotelError::NotFound(what) => write!(f, "{what} not found"),
            HotelError::InvalidStatus(raw) => write!(f, "invalid status '{raw}'"),
            HotelError::InvalidRoomType(raw) => {
                write!(f, "invalid room type '{raw}', must be \"small\" or \"big\"")
            }
            HotelError::Db(msg) => write!(f, "database error: {msg}"),
        }
    }
}

impl std::error::Error for HotelError {}

impl From<diesel::result::Error> for HotelError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => HotelError::NotFound("record".to_owned()),
            other => HotelError::Db(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_type_parses_case_insensitively() {
        assert_eq!(RoomType::parse(" Small ").unwrap(), RoomType::Small);
        assert_eq!(RoomType::parse("BIG").unwrap(), RoomType::Big);
    }

    #[test]
    fn unknown_room_type_is_an_error() {
        assert!(matches!(
            RoomType::parse("suite"),
            Err(HotelError::InvalidRoomType(_))
        ));
    }
}
