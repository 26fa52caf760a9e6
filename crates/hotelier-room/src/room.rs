//! A single room record and its booking state machine.
//!
//! ```text
//!   Available ──(book)──→ Booked { occupant }
//!       ↑                        │
//!       └───────(checkout)───────┘
//! ```

use std::fmt;

use hotelier_protocol::RoomNumber;
use serde::{Deserialize, Serialize};

use crate::RoomError;

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// Whether a room is free, and who is in it if not.
///
/// The occupant lives inside the `Booked` variant, so a vacant room can
/// never carry a stale guest name.
///
/// `#[default]` makes `RoomStatus::default()` return `Available`, which
/// lets [`Room::checkout`] swap the status out with `std::mem::take`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RoomStatus {
    #[default]
    Available,
    Booked { occupant: String },
}

impl RoomStatus {
    /// Returns `true` if a guest holds the room.
    pub fn is_booked(&self) -> bool {
        matches!(self, Self::Booked { .. })
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Booked { occupant } => write!(f, "Booked by {occupant}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// One unit of hotel inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    number: RoomNumber,
    category: String,
    status: RoomStatus,
}

impl Room {
    /// Creates an available room.
    pub fn new(number: RoomNumber, category: impl Into<String>) -> Self {
        Self {
            number,
            category: category.into(),
            status: RoomStatus::Available,
        }
    }

    /// The number this room was added under. Not necessarily unique.
    pub fn number(&self) -> RoomNumber {
        self.number
    }

    /// Free-text label such as "Single" or "Deluxe".
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The booking state, including the occupant when booked.
    pub fn status(&self) -> &RoomStatus {
        &self.status
    }

    /// Returns `true` if a guest holds the room.
    pub fn is_booked(&self) -> bool {
        self.status.is_booked()
    }

    /// The current guest's name, or `""` when the room is available.
    pub fn occupant(&self) -> &str {
        match &self.status {
            RoomStatus::Available => "",
            RoomStatus::Booked { occupant } => occupant,
        }
    }

    /// Books the room for `occupant`.
    ///
    /// Fails with [`RoomError::AlreadyBooked`] and leaves the current
    /// guest in place if the room is taken. The name is stored as given.
    pub fn book(&mut self, occupant: impl Into<String>) -> Result<(), RoomError> {
        if self.status.is_booked() {
            return Err(RoomError::AlreadyBooked(self.number));
        }
        self.status = RoomStatus::Booked {
            occupant: occupant.into(),
        };
        Ok(())
    }

    /// Checks the current guest out and returns their name.
    ///
    /// Fails with [`RoomError::NotBooked`] if the room was vacant.
    pub fn checkout(&mut self) -> Result<String, RoomError> {
        match std::mem::take(&mut self.status) {
            RoomStatus::Booked { occupant } => Ok(occupant),
            RoomStatus::Available => Err(RoomError::NotBooked(self.number)),
        }
    }

    /// The status line printed by "Display All Rooms".
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// A serializable snapshot of this room.
    pub fn info(&self) -> RoomInfo {
        RoomInfo {
            number: self.number,
            category: self.category.clone(),
            booked: self.is_booked(),
            occupant: self.occupant().to_string(),
        }
    }
}

/// `Room Number: 101 | Type: Single | Status: Available`
impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room Number: {} | Type: {} | Status: {}",
            self.number, self.category, self.status
        )
    }
}

/// A flat snapshot of a room, suitable for structured output.
///
/// The console serializes a list of these into its log event whenever the
/// rooms are listed, so the log carries the same data the clerk saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub number: RoomNumber,
    pub category: String,
    pub booked: bool,
    /// Empty when `booked` is false.
    pub occupant: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single() -> Room {
        Room::new(RoomNumber(101), "Single")
    }

    #[test]
    fn test_new_room_is_available() {
        let room = single();
        assert!(!room.is_booked());
        assert_eq!(room.occupant(), "");
        assert_eq!(room.status(), &RoomStatus::Available);
    }

    #[test]
    fn test_book_available_room_sets_occupant() {
        let mut room = single();
        room.book("Alice").unwrap();
        assert!(room.is_booked());
        assert_eq!(room.occupant(), "Alice");
    }

    #[test]
    fn test_book_booked_room_keeps_prior_occupant() {
        let mut room = single();
        room.book("Alice").unwrap();
        assert_eq!(
            room.book("Bob"),
            Err(RoomError::AlreadyBooked(RoomNumber(101)))
        );
        assert_eq!(room.occupant(), "Alice");
    }

    #[test]
    fn test_checkout_booked_room_clears_occupant() {
        let mut room = single();
        room.book("Alice").unwrap();
        assert_eq!(room.checkout(), Ok("Alice".to_string()));
        assert!(!room.is_booked());
        assert_eq!(room.occupant(), "");
    }

    #[test]
    fn test_checkout_available_room_fails_without_change() {
        let mut room = single();
        assert_eq!(room.checkout(), Err(RoomError::NotBooked(RoomNumber(101))));
        assert_eq!(room, single());
    }

    #[test]
    fn test_booked_iff_occupant_non_empty() {
        let mut room = single();
        assert_eq!(room.is_booked(), !room.occupant().is_empty());
        room.book("Alice").unwrap();
        assert_eq!(room.is_booked(), !room.occupant().is_empty());
        room.checkout().unwrap();
        assert_eq!(room.is_booked(), !room.occupant().is_empty());
    }

    #[test]
    fn test_empty_occupant_is_accepted_and_still_booked() {
        let mut room = single();
        room.book("").unwrap();
        assert!(room.is_booked());
        assert_eq!(room.describe(), "Room Number: 101 | Type: Single | Status: Booked by ");
    }

    #[test]
    fn test_describe_available() {
        assert_eq!(
            single().describe(),
            "Room Number: 101 | Type: Single | Status: Available"
        );
    }

    #[test]
    fn test_describe_booked() {
        let mut room = Room::new(RoomNumber(201), "Deluxe");
        room.book("Grace Hopper").unwrap();
        assert_eq!(
            room.describe(),
            "Room Number: 201 | Type: Deluxe | Status: Booked by Grace Hopper"
        );
    }

    #[test]
    fn test_info_snapshot() {
        let mut room = single();
        room.book("Alice").unwrap();
        let info = room.info();
        assert_eq!(info.number, RoomNumber(101));
        assert_eq!(info.category, "Single");
        assert!(info.booked);
        assert_eq!(info.occupant, "Alice");
    }

    #[test]
    fn test_info_serializes_to_flat_json() {
        let json = serde_json::to_value(single().info()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "number": 101,
                "category": "Single",
                "booked": false,
                "occupant": ""
            })
        );
    }
}
