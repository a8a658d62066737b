use std::io::{self, Write};

use todo_core::{AddOutcome, NoteCatalog, NoteStore, RejectReason, RemoveOutcome};
use tracing::{debug, warn};

use crate::args::OutputFormat;
use crate::formatters::{print_entries, print_failure, print_success};
use crate::terminal::Terminal;

const MENU: &str = "\
[1] Add note.
[2] Show all notes.
[3] Find note.
[4] Remove one note.
[5] Remove all notes.
[6] Exit.
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ShowAll,
    Find,
    RemoveOne,
    RemoveAll,
    Exit,
}

impl MenuChoice {
    /// `None` for anything that isn't one of the listed numbers
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::ShowAll),
            3 => Some(MenuChoice::Find),
            4 => Some(MenuChoice::RemoveOne),
            5 => Some(MenuChoice::RemoveAll),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    EndOfInput,
}

/// The interactive menu: read a choice, run it against the catalog, repeat until exit
pub struct CommandLoop<S, T> {
    catalog: NoteCatalog<S>,
    terminal: T,
    state: LoopState,
}

impl<S: NoteStore, T: Terminal> CommandLoop<S, T> {
    pub fn new(catalog: NoteCatalog<S>, terminal: T) -> Self {
        Self {
            catalog,
            terminal,
            state: LoopState::Running,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (NoteCatalog<S>, T) {
        (self.catalog, self.terminal)
    }

    pub fn run(&mut self) -> io::Result<()> {
        while self.state() == LoopState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// One menu cycle
    pub fn step(&mut self) -> io::Result<LoopState> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        self.terminal.clear_display()?;
        write!(self.terminal.out(), "{MENU}")?;

        let Some(input) = self.terminal.prompt("Your choice: ")? else {
            debug!("Input closed at main menu");
            self.state = LoopState::Terminated;
            return Ok(self.state);
        };

        let flow = match MenuChoice::parse(&input) {
            None => {
                debug!(input = %input, "Invalid menu choice");
                print_failure(self.terminal.out(), "Invalid choice.")?;
                Flow::Continue
            }
            Some(MenuChoice::Exit) => {
                self.state = LoopState::Terminated;
                return Ok(self.state);
            }
            Some(choice) => {
                self.terminal.clear_display()?;
                self.dispatch(choice)?
            }
        };

        match flow {
            Flow::Continue => self.terminal.wait_for_acknowledgement()?,
            Flow::EndOfInput => self.state = LoopState::Terminated,
        }

        Ok(self.state)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::ShowAll => self.show_all(),
            MenuChoice::Find => self.find(),
            MenuChoice::RemoveOne => self.remove_one(),
            MenuChoice::RemoveAll => self.remove_all(),
            MenuChoice::Exit => Ok(Flow::EndOfInput),
        }
    }

    fn add(&mut self) -> io::Result<Flow> {
        let Some(content) = self.terminal.prompt("Enter note: ")? else {
            return Ok(Flow::EndOfInput);
        };

        match self.catalog.add(&content) {
            Ok(AddOutcome::Added) => print_success(self.terminal.out(), "Note added.")?,
            Ok(AddOutcome::Rejected(RejectReason::EmptyContent)) => {
                print_failure(self.terminal.out(), "Note cannot be empty.")?
            }
            Ok(AddOutcome::Rejected(RejectReason::LineBreak)) => {
                print_failure(self.terminal.out(), "Note must fit on one line.")?
            }
            Err(e) => return self.storage_error(e),
        }

        Ok(Flow::Continue)
    }

    fn show_all(&mut self) -> io::Result<Flow> {
        match self.catalog.list_all() {
            Ok(entries) => print_entries(
                self.terminal.out(),
                &entries,
                OutputFormat::Pretty,
                "No notes found.",
            )?,
            Err(e) => return self.storage_error(e),
        }

        Ok(Flow::Continue)
    }

    fn find(&mut self) -> io::Result<Flow> {
        let Some(query) = self.terminal.prompt("Search query: ")? else {
            return Ok(Flow::EndOfInput);
        };

        match self.catalog.search(&query) {
            Ok(hits) => print_entries(
                self.terminal.out(),
                &hits,
                OutputFormat::Pretty,
                "No matching notes.",
            )?,
            Err(e) => return self.storage_error(e),
        }

        Ok(Flow::Continue)
    }

    fn remove_one(&mut self) -> io::Result<Flow> {
        let entries = match self.catalog.list_all() {
            Ok(entries) => entries,
            Err(e) => return self.storage_error(e),
        };

        if entries.is_empty() {
            print_failure(self.terminal.out(), "No notes to remove.")?;
            return Ok(Flow::Continue);
        }

        print_entries(self.terminal.out(), &entries, OutputFormat::Pretty, "")?;

        let Some(input) = self.terminal.prompt("Enter number to remove: ")? else {
            return Ok(Flow::EndOfInput);
        };

        let Ok(position) = input.trim().parse::<i64>() else {
            print_failure(self.terminal.out(), "Invalid input.")?;
            return Ok(Flow::Continue);
        };

        match self.catalog.remove_by_position(position) {
            Ok(RemoveOutcome::Removed(_)) => print_success(self.terminal.out(), "Removed.")?,
            Ok(RemoveOutcome::OutOfRange { .. }) => {
                print_failure(self.terminal.out(), "Number out of range.")?
            }
            Ok(RemoveOutcome::Empty) => {
                print_failure(self.terminal.out(), "No notes to remove.")?
            }
            Err(e) => return self.storage_error(e),
        }

        Ok(Flow::Continue)
    }

    fn remove_all(&mut self) -> io::Result<Flow> {
        match self.catalog.remove_all() {
            Ok(_) => print_success(self.terminal.out(), "All notes removed.")?,
            Err(e) => return self.storage_error(e),
        }

        Ok(Flow::Continue)
    }

    fn storage_error(&mut self, error: todo_core::Error) -> io::Result<Flow> {
        warn!(error = %error, "Storage operation failed");
        print_failure(self.terminal.out(), &format!("Error: {error}"))?;
        Ok(Flow::Continue)
    }
}
