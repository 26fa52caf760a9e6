//! Error types for the protocol layer.
//!
//! Each crate in Hotelier defines its own error enum. When you see a
//! `ProtocolError`, you know the problem is in what the user typed, not in
//! the state of any room.

/// Errors that can occur while parsing menu input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The menu choice parsed as a number but isn't one of the options.
    #[error("invalid menu choice: {0}")]
    InvalidChoice(i32),

    /// The input was expected to be a number and wasn't.
    ///
    /// Carries the trimmed text the user entered.
    #[error("not a number: {0:?}")]
    NotANumber(String),
}
