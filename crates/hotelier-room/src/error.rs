//! Error types for the room layer.

use hotelier_protocol::RoomNumber;

/// Errors that can occur during room operations.
///
/// None of these are fatal: the console reports them to the clerk and
/// carries on with the next menu choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    /// No room with this number is registered.
    #[error("room {0} not found")]
    NotFound(RoomNumber),

    /// Booking was attempted on an occupied room.
    #[error("room {0} is already booked")]
    AlreadyBooked(RoomNumber),

    /// Checkout was attempted on a vacant room.
    #[error("room {0} was not booked")]
    NotBooked(RoomNumber),
}
