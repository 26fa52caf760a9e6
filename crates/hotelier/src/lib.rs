//! # Hotelier
//!
//! An in-memory room inventory tracker for a single hotel front desk.
//!
//! The [`Console`] reads menu choices from any `BufRead`, drives a
//! [`RoomRegistry`], and writes the outcome of each operation to any
//! `Write`. The `hotelier` binary wires it to stdin/stdout.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hotelier::prelude::*;
//!
//! let stdin = std::io::stdin();
//! let stdout = std::io::stdout();
//! let mut console = ConsoleBuilder::new()
//!     .config(HotelConfig::default())
//!     .build(stdin.lock(), stdout.lock());
//! console.run()?;
//! # Ok::<(), HotelierError>(())
//! ```

mod config;
mod console;
mod error;
pub mod logging;

pub use config::{config_from_args, load_config};
pub use console::{Console, ConsoleBuilder};
pub use error::HotelierError;

/// Everything needed to run a front desk console.
pub mod prelude {
    pub use crate::{
        config_from_args, load_config, Console, ConsoleBuilder, HotelierError,
    };
    pub use hotelier_protocol::{MenuChoice, ProtocolError, RoomNumber};
    pub use hotelier_room::{
        HotelConfig, Room, RoomError, RoomInfo, RoomRegistry, RoomSeed,
        RoomStatus,
    };
}
