//! Unified error type for Hotelier.

use hotelier_protocol::ProtocolError;
use hotelier_room::RoomError;

/// Top-level error that wraps all crate-specific errors.
///
/// Protocol and room errors are normally reported to the clerk and the
/// console keeps going; only `Io` and `Config` end the program.
///
/// The `Protocol` and `Room` variants exist for library callers that drive
/// a [`RoomRegistry`](hotelier_room::RoomRegistry) directly and want to
/// bubble failures up with `?` into one error type.
#[derive(Debug, thiserror::Error)]
pub enum HotelierError {
    /// Unparseable menu input.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A room operation was rejected.
    #[error(transparent)]
    Room(#[from] RoomError),

    /// Reading the terminal or writing to it failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The hotel configuration file could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}
