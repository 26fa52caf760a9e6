//! Room inventory for Hotelier.
//!
//! A single owned [`RoomRegistry`] holds every room of one hotel, in the
//! order they were added. Rooms are booked and checked out in place;
//! nothing is ever removed.
//!
//! # Key types
//!
//! - [`Room`]: one room with its number, category, and booking status
//! - [`RoomStatus`]: `Available` or `Booked { occupant }`
//! - [`RoomRegistry`]: ordered collection with add/book/checkout/list
//! - [`HotelConfig`]: hotel name and the rooms to seed at startup
//! - [`RoomError`]: not found, already booked, not booked

mod config;
mod error;
mod registry;
mod room;

pub use config::{HotelConfig, RoomSeed};
pub use error::RoomError;
pub use registry::RoomRegistry;
pub use room::{Room, RoomInfo, RoomStatus};
