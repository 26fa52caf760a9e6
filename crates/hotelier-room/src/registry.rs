//! Room registry: holds every room and routes operations to them.

use hotelier_protocol::RoomNumber;

use crate::{HotelConfig, Room, RoomError, RoomInfo};

/// The in-memory inventory of one hotel.
///
/// Rooms are kept in insertion order. Numbers are not checked for
/// uniqueness; every lookup is a linear scan that stops at the first
/// match, so the earliest-added room wins when numbers collide.
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Creates a registry holding the configured seed rooms, all available.
    pub fn from_config(config: &HotelConfig) -> Self {
        let mut registry = Self::new();
        for seed in &config.rooms {
            registry.add_room(Room::new(seed.number, seed.category.clone()));
        }
        registry
    }

    /// Appends a room. Duplicate numbers are accepted.
    pub fn add_room(&mut self, room: Room) {
        tracing::debug!(
            room = %room.number(),
            category = room.category(),
            "room added"
        );
        self.rooms.push(room);
    }

    /// Books the first room numbered `number` for `occupant`.
    pub fn book_room(
        &mut self,
        number: RoomNumber,
        occupant: &str,
    ) -> Result<(), RoomError> {
        let room = self.find_mut(number)?;
        match room.book(occupant) {
            Ok(()) => {
                tracing::info!(room = %number, occupant, "room booked");
                Ok(())
            }
            Err(e) => {
                tracing::debug!(room = %number, error = %e, "booking rejected");
                Err(e)
            }
        }
    }

    /// Checks out the first room numbered `number`, returning the guest
    /// who left.
    pub fn check_out(&mut self, number: RoomNumber) -> Result<String, RoomError> {
        let room = self.find_mut(number)?;
        match room.checkout() {
            Ok(occupant) => {
                tracing::info!(room = %number, %occupant, "room checked out");
                Ok(occupant)
            }
            Err(e) => {
                tracing::debug!(room = %number, error = %e, "checkout rejected");
                Err(e)
            }
        }
    }

    /// Status lines for every room, in insertion order.
    pub fn list_all(&self) -> Vec<String> {
        self.rooms.iter().map(Room::describe).collect()
    }

    /// Returns the first room numbered `number`, if any.
    pub fn get(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number() == number)
    }

    /// All rooms, in insertion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Structured snapshots of every room, in insertion order.
    pub fn snapshot(&self) -> Vec<RoomInfo> {
        self.rooms.iter().map(Room::info).collect()
    }

    /// Returns the number of registered rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if no rooms have been added.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    fn find_mut(&mut self, number: RoomNumber) -> Result<&mut Room, RoomError> {
        match self.rooms.iter_mut().find(|r| r.number() == number) {
            Some(room) => Ok(room),
            None => {
                tracing::debug!(room = %number, "room not found");
                Err(RoomError::NotFound(number))
            }
        }
    }
}
