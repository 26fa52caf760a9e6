//! Core protocol types: room numbers and menu choices.
//!
//! These are the parsed forms of what a front desk clerk types at the
//! menu. Parsing lives here so the console never handles raw integers.
//!
//! Both kinds of input are read as a signed 32-bit integer. A line that
//! is a well-formed integer is a *number*, even if it is negative or out
//! of range for what it's used for; only text that isn't an integer at all
//! is rejected as [`ProtocolError::NotANumber`]. So `-1` at the menu is an
//! invalid choice, and `-5` at the room prompt is simply a room that
//! doesn't exist.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// The number painted on a room door, e.g. `101`.
///
/// This is a newtype wrapper around `i32`. Wrapping the primitive means a
/// room number can't be passed where a menu option or a room count is
/// expected, and signatures like `fn check_out(number: RoomNumber)` say
/// what they take.
///
/// The value is signed so that any integer a clerk types is a valid room
/// number that merely fails to match a room. Nothing enforces uniqueness;
/// the number is whatever the caller assigned when adding the room.
///
/// The derives:
///   - `Clone, Copy` → it's just an `i32`, so copy it freely
///   - `PartialEq, Eq, Hash` → compare numbers during registry lookups
///   - `PartialOrd, Ord` → sort a list of numbers if a caller wants to
///   - `Serialize, Deserialize` → appears in `HotelConfig` seed entries
///     and in room snapshots
///
/// `#[serde(transparent)]` serializes `RoomNumber(101)` as just `101`,
/// not as `{ "0": 101 }`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoomNumber(pub i32);

/// Displays as the bare number, so `format!("Room {number}")` reads
/// `Room 101`.
impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RoomNumber {
    fn from(n: i32) -> Self {
        Self(n)
    }
}

impl FromStr for RoomNumber {
    type Err = ProtocolError;

    /// Parses a room number, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_number(s).map(Self)
    }
}

// ---------------------------------------------------------------------------
// MenuChoice
// ---------------------------------------------------------------------------

/// One option of the main menu.
///
/// ```text
/// 1. Display All Rooms
/// 2. Book a Room
/// 3. Check Out
/// 4. Exit
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListRooms,
    BookRoom,
    CheckOut,
    Exit,
}

impl MenuChoice {
    /// Every option, in the order the menu prints them.
    pub const ALL: [MenuChoice; 4] = [
        Self::ListRooms,
        Self::BookRoom,
        Self::CheckOut,
        Self::Exit,
    ];

    /// Maps a menu number to its option.
    ///
    /// Any number outside `1..=4`, including zero and negatives, is
    /// [`ProtocolError::InvalidChoice`].
    pub fn from_number(n: i32) -> Result<Self, ProtocolError> {
        match n {
            1 => Ok(Self::ListRooms),
            2 => Ok(Self::BookRoom),
            3 => Ok(Self::CheckOut),
            4 => Ok(Self::Exit),
            other => Err(ProtocolError::InvalidChoice(other)),
        }
    }

    /// The number the user types to pick this option.
    pub fn number(self) -> i32 {
        match self {
            Self::ListRooms => 1,
            Self::BookRoom => 2,
            Self::CheckOut => 3,
            Self::Exit => 4,
        }
    }

    /// The text shown next to the number in the menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::ListRooms => "Display All Rooms",
            Self::BookRoom => "Book a Room",
            Self::CheckOut => "Check Out",
            Self::Exit => "Exit",
        }
    }
}

/// Renders the menu line, e.g. `2. Book a Room`.
impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_number(s).and_then(Self::from_number)
    }
}

/// Parses a trimmed line as an `i32`. Text that doesn't fit (letters,
/// blanks, values beyond the `i32` range) is `NotANumber`.
fn parse_number(s: &str) -> Result<i32, ProtocolError> {
    let trimmed = s.trim();
    trimmed
        .parse()
        .map_err(|_| ProtocolError::NotANumber(trimmed.to_string()))
}
