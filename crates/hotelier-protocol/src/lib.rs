//! Menu protocol for Hotelier.
//!
//! This crate defines the "language" the console and the room registry
//! share:
//!
//! - **Types** ([`RoomNumber`], [`MenuChoice`]): the values a user types
//!   at the menu, in their parsed form.
//! - **Errors** ([`ProtocolError`]): what can go wrong while turning
//!   terminal text into those values.
//!
//! # Architecture
//!
//! The protocol layer sits between raw terminal lines and the registry.
//! It doesn't know about rooms or bookings; it only knows how to parse
//! and render menu input.
//!
//! ```text
//! Console (lines) → Protocol (MenuChoice, RoomNumber) → Registry (rooms)
//! ```

mod error;
mod types;

pub use error::ProtocolError;
pub use types::{MenuChoice, RoomNumber};
