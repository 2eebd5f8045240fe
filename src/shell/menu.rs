//! Interactive menu loop

use std::io::{BufRead, Write};
use tracing::debug;

use crate::service::{DeskResult, FrontDesk};
use crate::shell::messages;
use crate::types::MenuChoice;
use crate::user::VisitorDetails;

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Reads menu choices and fields from `input`, drives the desk, and writes
/// results to `output`
///
/// End of input is treated like choosing Exit.
#[derive(Debug)]
pub struct MainMenu<'d, R, W> {
    desk: &'d mut FrontDesk,
    input: R,
    output: W,
}

impl<'d, R: BufRead, W: Write> MainMenu<'d, R, W> {
    /// Create a menu over the given desk and streams
    pub fn new(desk: &'d mut FrontDesk, input: R, output: W) -> Self {
        Self { desk, input, output }
    }

    /// Run until Exit is chosen or input ends
    ///
    /// Desk failures are printed and the loop continues; only I/O errors end
    /// the session early.
    pub fn run(&mut self) -> DeskResult<()> {
        loop {
            write!(self.output, "{}", messages::menu())?;
            let Some(line) = self.prompt("Enter your choice")? else {
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(%choice, "Menu choice");
                    self.dispatch(choice)?
                }
                Err(_) => {
                    writeln!(self.output, "{}", messages::INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Hand back the output stream, e.g. to inspect a scripted session
    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch(&mut self, choice: MenuChoice) -> DeskResult<Flow> {
        match choice {
            MenuChoice::RegisterVisitor => self.register_visitor(),
            MenuChoice::CheckIn => self.check_in(),
            MenuChoice::PreApprove => self.pre_approve(),
            MenuChoice::CheckOut => self.check_out(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn register_visitor(&mut self) -> DeskResult<Flow> {
        let Some(name) = self.prompt("Enter Visitor Name")? else {
            return Ok(Flow::Exit);
        };
        let Some(purpose) = self.prompt("Enter Purpose")? else {
            return Ok(Flow::Exit);
        };
        let Some(employee) = self.prompt("Enter Employee Name")? else {
            return Ok(Flow::Exit);
        };
        let Some(company) = self.prompt("Enter Company Name")? else {
            return Ok(Flow::Exit);
        };
        let Some(contact) = self.prompt("Enter Contact Info")? else {
            return Ok(Flow::Exit);
        };
        let details = VisitorDetails::new(name, purpose, employee, company, contact);

        match self.desk.register_visitor(details) {
            Ok(receipt) => writeln!(self.output, "{}", messages::registered(&receipt))?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn check_in(&mut self) -> DeskResult<Flow> {
        let Some(epass) = self.prompt("Enter ePass ID for Check-in")? else {
            return Ok(Flow::Exit);
        };
        match self.desk.check_in(&epass) {
            Ok(event) => writeln!(self.output, "{}", messages::checked_in(&event))?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn check_out(&mut self) -> DeskResult<Flow> {
        let Some(epass) = self.prompt("Enter ePass ID for Check-out")? else {
            return Ok(Flow::Exit);
        };
        match self.desk.check_out(&epass) {
            Ok(event) => writeln!(self.output, "{}", messages::checked_out(&event))?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn pre_approve(&mut self) -> DeskResult<Flow> {
        let Some(employee_name) = self.prompt("Enter Employee Name")? else {
            return Ok(Flow::Exit);
        };
        // Unknown employees are turned away before asking for a slot
        if !self.desk.registry().contains_employee(&employee_name) {
            writeln!(self.output, "Employee not found.")?;
            return Ok(Flow::Continue);
        }

        let Some(time_slot) = self.prompt("Enter Time Slot")? else {
            return Ok(Flow::Exit);
        };
        match self.desk.pre_approve(&employee_name, &time_slot) {
            Ok(epass) => writeln!(self.output, "{}", messages::pre_approved(&epass))?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    /// Print `label: ` and read one line without its terminator; `None` at EOF
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    fn prompt(&mut self, label: &str) -> DeskResult<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
