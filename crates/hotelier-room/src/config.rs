//! Hotel configuration: the hotel's name and its starting inventory.

use hotelier_protocol::RoomNumber;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// HotelConfig
// ---------------------------------------------------------------------------

/// Configuration for one hotel instance.
///
/// Every field has a default, so a partial JSON document such as
/// `{"name": "Seaside Inn"}` still yields the standard three rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelConfig {
    /// Shown in the menu banner.
    pub name: String,

    /// Rooms added to the registry at startup, in this order.
    pub rooms: Vec<RoomSeed>,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            name: "Hotel Management System".to_string(),
            rooms: vec![
                RoomSeed::new(101, "Single"),
                RoomSeed::new(102, "Double"),
                RoomSeed::new(201, "Deluxe"),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// RoomSeed
// ---------------------------------------------------------------------------

/// A room to create at startup. Seeds always start out available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSeed {
    pub number: RoomNumber,
    pub category: String,
}

impl RoomSeed {
    pub fn new(number: i32, category: impl Into<String>) -> Self {
        Self {
            number: RoomNumber(number),
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_config_default_seeds_three_rooms() {
        let config = HotelConfig::default();
        assert_eq!(config.name, "Hotel Management System");
        let numbers: Vec<i32> = config.rooms.iter().map(|r| r.number.0).collect();
        assert_eq!(numbers, vec![101, 102, 201]);
        assert_eq!(config.rooms[2].category, "Deluxe");
    }

    #[test]
    fn test_hotel_config_partial_json_fills_defaults() {
        let config: HotelConfig =
            serde_json::from_str(r#"{"name": "Seaside Inn"}"#).unwrap();
        assert_eq!(config.name, "Seaside Inn");
        assert_eq!(config.rooms, HotelConfig::default().rooms);
    }

    #[test]
    fn test_hotel_config_explicit_rooms() {
        let json = r#"{"rooms": [{"number": 7, "category": "Suite"}]}"#;
        let config: HotelConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rooms, vec![RoomSeed::new(7, "Suite")]);
        assert_eq!(config.name, HotelConfig::default().name);
    }

    #[test]
    fn test_hotel_config_empty_room_list_is_kept() {
        let config: HotelConfig = serde_json::from_str(r#"{"rooms": []}"#).unwrap();
        assert!(config.rooms.is_empty());
    }

    #[test]
    fn test_hotel_config_rejects_bad_room_number() {
        let json = r#"{"rooms": [{"number": "ten", "category": "Suite"}]}"#;
        let result: Result<HotelConfig, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
