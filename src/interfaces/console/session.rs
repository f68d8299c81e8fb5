use super::menu::{MENU, MenuCommand, SEPARATOR, parse_unit_choice};
use crate::application::registry::{ApartmentRegistry, ClearOutcome, PaymentOutcome, SelectOutcome};
use crate::domain::apartment::Rent;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Read-eval-print loop over the numbered menu.
///
/// Registry errors are printed as status lines and never end the session.
/// The loop ends on the exit command or when the input is exhausted.
pub struct ConsoleSession<R: BufRead, W: Write> {
    registry: ApartmentRegistry,
    input: R,
    output: W,
}

/// Outcome of one pass through the loop.
enum Step {
    Continue,
    Exit,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(registry: ApartmentRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    /// Runs until exit or end of input, then hands the registry back.
    pub fn run(mut self) -> io::Result<ApartmentRegistry> {
        info!(apartments = self.registry.len(), "session started");
        loop {
            self.output.write_all(MENU.as_bytes())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            let step = match MenuCommand::parse(&line) {
                Some(command) => {
                    debug!(?command, "menu command");
                    self.execute(command)?
                }
                None => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    Some(Step::Continue)
                }
            };

            match step {
                Some(Step::Continue) => writeln!(self.output, "{SEPARATOR}")?,
                Some(Step::Exit) | None => break,
            }
        }
        self.output.flush()?;
        info!(apartments = self.registry.len(), "session ended");
        Ok(self.registry)
    }

    /// Executes one command. `None` means input ran out mid-command.
    fn execute(&mut self, command: MenuCommand) -> io::Result<Option<Step>> {
        match command {
            MenuCommand::Add => return self.add_apartment(),
            MenuCommand::Display => self.display_apartments()?,
            MenuCommand::UpdateRent => return self.update_rent(),
            MenuCommand::Select => {
                let Some(name) = self.prompt("Enter Apartment Name to select: ")? else {
                    return Ok(None);
                };
                match self.registry.select(&name) {
                    Ok(SelectOutcome::Selected) => {
                        writeln!(self.output, "Apartment {name} selected.")?
                    }
                    Ok(SelectOutcome::AlreadySelected) => {
                        writeln!(self.output, "Apartment {name} is already selected.")?
                    }
                    Err(e) => writeln!(self.output, "{e}")?,
                }
            }
            MenuCommand::PayRent => {
                let Some(name) = self.prompt("Enter Apartment Name to pay rent: ")? else {
                    return Ok(None);
                };
                match self.registry.pay_rent(&name) {
                    Ok(PaymentOutcome::NowPaid) => {
                        writeln!(self.output, "Rent for Apartment {name} is now paid.")?
                    }
                    Ok(PaymentOutcome::AlreadyPaid) => {
                        writeln!(self.output, "Rent for Apartment {name} is already paid.")?
                    }
                    Err(e) => writeln!(self.output, "{e}")?,
                }
            }
            MenuCommand::ClearRentPayment => {
                let Some(name) = self.prompt("Enter Apartment Name to clear rent payment: ")?
                else {
                    return Ok(None);
                };
                match self.registry.clear_rent_payment(&name) {
                    Ok(ClearOutcome::Cleared) => {
                        writeln!(self.output, "Rent payment for Apartment {name} is cleared.")?
                    }
                    Ok(ClearOutcome::NothingToClear) => writeln!(
                        self.output,
                        "Rent for Apartment {name} is not paid, nothing to clear."
                    )?,
                    Err(e) => writeln!(self.output, "{e}")?,
                }
            }
            MenuCommand::Exit => {
                writeln!(self.output, "Exiting the Apartment Rent Management System.")?;
                return Ok(Some(Step::Exit));
            }
        }
        Ok(Some(Step::Continue))
    }

    fn add_apartment(&mut self) -> io::Result<Option<Step>> {
        let Some(name) = self.prompt("Enter Apartment Name: ")? else {
            return Ok(None);
        };
        let Some(rent) = self.prompt_rent("Enter Rent: ")? else {
            return Ok(None);
        };
        let Some(rent) = rent else {
            return Ok(Some(Step::Continue));
        };
        let Some(choice) = self.prompt("Apartment Type (1 for TWO-BHK, 2 for THREE-BHK): ")?
        else {
            return Ok(None);
        };

        match parse_unit_choice(&choice) {
            Some(unit_type) => {
                self.registry.add(unit_type, name.as_str(), rent);
                writeln!(
                    self.output,
                    "Apartment {name} ({unit_type}) with Rent {rent} added."
                )?;
            }
            None => writeln!(self.output, "Invalid option. Try again.")?,
        }
        Ok(Some(Step::Continue))
    }

    fn display_apartments(&mut self) -> io::Result<()> {
        writeln!(self.output, "Apartments List:")?;
        for apartment in self.registry.list() {
            let status = if apartment.rent_paid {
                "Rent Paid"
            } else {
                "Rent Not Paid"
            };
            writeln!(
                self.output,
                "Type: {}, Name: {}, Rent: {} ({status})",
                apartment.unit_type, apartment.name, apartment.rent
            )?;
        }
        Ok(())
    }

    fn update_rent(&mut self) -> io::Result<Option<Step>> {
        let Some(name) = self.prompt("Enter Apartment Name to update rent: ")? else {
            return Ok(None);
        };
        let Some(rent) = self.prompt_rent("Enter New Rent: ")? else {
            return Ok(None);
        };
        let Some(rent) = rent else {
            return Ok(Some(Step::Continue));
        };

        match self.registry.update_rent(&name, rent) {
            Ok(()) => writeln!(
                self.output,
                "Rent updated for apartment {name}. New rent: {rent}"
            )?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(Some(Step::Continue))
    }

    /// Prompts for a rent. The inner `None` means the text was not a number,
    /// which has already been reported.
    fn prompt_rent(&mut self, message: &str) -> io::Result<Option<Option<Rent>>> {
        let Some(text) = self.prompt(message)? else {
            return Ok(None);
        };
        match text.parse::<Rent>() {
            Ok(rent) => Ok(Some(Some(rent))),
            Err(_) => {
                writeln!(self.output, "Invalid rent: {}", text.trim())?;
                Ok(Some(None))
            }
        }
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
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
}
