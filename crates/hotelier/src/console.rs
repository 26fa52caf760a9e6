//! The interactive front desk console.
//!
//! One loop iteration per menu selection:
//!   1. Print the banner, the menu, and the `Enter choice: ` prompt
//!   2. Read one line and parse it as a [`MenuChoice`]
//!   3. Run the matching registry operation, prompting for more input
//!      where the operation needs it
//!   4. Print the outcome and go around again
//!
//! Rejected operations and bad input are reported and the loop carries
//! on. Only choosing Exit, running out of input, or an I/O failure ends
//! the loop.

use std::io::{BufRead, Write};

use hotelier_protocol::{MenuChoice, ProtocolError, RoomNumber};
use hotelier_room::{HotelConfig, RoomError, RoomRegistry};

use crate::HotelierError;

/// Whether the loop should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

/// Builder for a [`Console`].
///
/// # Example
///
/// ```rust
/// use hotelier::prelude::*;
///
/// let input = "1\n4\n".as_bytes();
/// let mut output = Vec::new();
/// let mut console = ConsoleBuilder::new().build(input, &mut output);
/// console.run().unwrap();
/// ```
pub struct ConsoleBuilder {
    config: HotelConfig,
    registry: Option<RoomRegistry>,
}

impl ConsoleBuilder {
    /// Creates a new builder with the default hotel configuration.
    pub fn new() -> Self {
        Self {
            config: HotelConfig::default(),
            registry: None,
        }
    }

    /// Sets the hotel configuration. Its rooms seed the registry unless
    /// an explicit registry is supplied.
    pub fn config(mut self, config: HotelConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses an existing registry instead of seeding from the config.
    pub fn registry(mut self, registry: RoomRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Builds a console reading from `input` and writing to `output`.
    pub fn build<R: BufRead, W: Write>(self, input: R, output: W) -> Console<R, W> {
        let registry = self
            .registry
            .unwrap_or_else(|| RoomRegistry::from_config(&self.config));
        Console {
            hotel_name: self.config.name,
            registry,
            input,
            output,
        }
    }
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A front desk session over a pair of text streams.
pub struct Console<R, W> {
    hotel_name: String,
    registry: RoomRegistry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// The registry this console operates on.
    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// Consumes the console, handing back its registry.
    pub fn into_registry(self) -> RoomRegistry {
        self.registry
    }

    /// Runs the menu loop until Exit is chosen or input runs out.
    pub fn run(&mut self) -> Result<(), HotelierError> {
        tracing::info!(
            hotel = %self.hotel_name,
            rooms = self.registry.len(),
            "console started"
        );

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                tracing::info!("input closed");
                break;
            };

            let step = match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    tracing::debug!(?choice, "menu choice");
                    self.handle_choice(choice)?
                }
                Err(e) => {
                    self.report_protocol(&e)?;
                    Step::Continue
                }
            };

            if step == Step::Quit {
                break;
            }
        }

        tracing::info!("console stopped");
        Ok(())
    }

    fn handle_choice(&mut self, choice: MenuChoice) -> Result<Step, HotelierError> {
        match choice {
            MenuChoice::ListRooms => {
                for line in self.registry.list_all() {
                    writeln!(self.output, "{line}")?;
                }
                self.log_listing();
                Ok(Step::Continue)
            }
            MenuChoice::BookRoom => self.book_room(),
            MenuChoice::CheckOut => self.check_out(),
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting... Thank you!")?;
                Ok(Step::Quit)
            }
        }
    }

    fn book_room(&mut self) -> Result<Step, HotelierError> {
        let number = match self.prompt_room_number()? {
            Some(Ok(number)) => number,
            Some(Err(e)) => {
                self.report_protocol(&e)?;
                return Ok(Step::Continue);
            }
            None => return Ok(Step::Quit),
        };
        let Some(guest) = self.prompt("Enter Guest Name: ")? else {
            return Ok(Step::Quit);
        };

        match self.registry.book_room(number, &guest) {
            Ok(()) => writeln!(
                self.output,
                "Room {number} booked successfully for {guest}"
            )?,
            Err(e) => self.report_room(&e)?,
        }
        Ok(Step::Continue)
    }

    fn check_out(&mut self) -> Result<Step, HotelierError> {
        let number = match self.prompt_room_number()? {
            Some(Ok(number)) => number,
            Some(Err(e)) => {
                self.report_protocol(&e)?;
                return Ok(Step::Continue);
            }
            None => return Ok(Step::Quit),
        };

        match self.registry.check_out(number) {
            Ok(_) => writeln!(self.output, "Room {number} checked out successfully.")?,
            Err(e) => self.report_room(&e)?,
        }
        Ok(Step::Continue)
    }

    /// Records the listed rooms as a JSON snapshot in the log.
    fn log_listing(&self) {
        match serde_json::to_string(&self.registry.snapshot()) {
            Ok(rooms) => tracing::debug!(%rooms, "rooms listed"),
            Err(e) => tracing::warn!(error = %e, "room snapshot not serializable"),
        }
    }

    fn print_menu(&mut self) -> Result<(), HotelierError> {
        writeln!(self.output)?;
        writeln!(self.output, "=== {} ===", self.hotel_name)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{choice}")?;
        }
        write!(self.output, "Enter choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// `None` means input ran out before a number was entered.
    fn prompt_room_number(
        &mut self,
    ) -> Result<Option<Result<RoomNumber, ProtocolError>>, HotelierError> {
        Ok(self
            .prompt("Enter Room Number: ")?
            .map(|line| line.parse::<RoomNumber>()))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, HotelierError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, HotelierError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn report_protocol(&mut self, err: &ProtocolError) -> Result<(), HotelierError> {
        tracing::debug!(error = %err, "bad menu input");
        match err {
            ProtocolError::InvalidChoice(_) => {
                writeln!(self.output, "Invalid choice! Try again.")?
            }
            ProtocolError::NotANumber(_) => {
                writeln!(self.output, "Please enter a valid number.")?
            }
        }
        Ok(())
    }

    fn report_room(&mut self, err: &RoomError) -> Result<(), HotelierError> {
        match err {
            RoomError::NotFound(_) => writeln!(self.output, "Room not found!")?,
            RoomError::AlreadyBooked(number) => {
                writeln!(self.output, "Room {number} is already booked.")?
            }
            RoomError::NotBooked(number) => {
                writeln!(self.output, "Room {number} was not booked.")?
            }
        }
        Ok(())
    }
}
