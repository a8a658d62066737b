use std::path::Path;

use anyhow::{bail, Context};
use termcolor::StandardStream;
use todo_core::{AddOutcome, FileStore, NoteCatalog, RejectReason, RemoveOutcome};

use crate::{
    args::NoteCommand,
    commands::menu::color_choice,
    formatters::{print_entries, print_success},
};

pub fn note_cmd(file_path: &Path, subcommand: NoteCommand) -> Result<(), anyhow::Error> {
    let mut catalog = NoteCatalog::new(FileStore::new(file_path));
    let mut out = StandardStream::stdout(color_choice());

    match subcommand {
        NoteCommand::Add(args) => {
            let content = args.content.join(" ");
            match catalog.add(&content).context("Failed to add note")? {
                AddOutcome::Added => print_success(&mut out, "Note added.")?,
                AddOutcome::Rejected(RejectReason::EmptyContent) => {
                    bail!("Note cannot be empty")
                }
                AddOutcome::Rejected(RejectReason::LineBreak) => {
                    bail!("Note must fit on one line")
                }
            }
        }
        NoteCommand::List(args) => {
            let entries = catalog.list_all().context("Failed to list notes")?;
            print_entries(&mut out, &entries, args.output, "No notes found.")?;
        }
        NoteCommand::Find(args) => {
            let hits = catalog.search(&args.term).context("Failed to search notes")?;
            print_entries(&mut out, &hits, args.output, "No matching notes.")?;
        }
        NoteCommand::Remove(args) => {
            match catalog
                .remove_by_position(args.position)
                .context("Failed to remove note")?
            {
                RemoveOutcome::Removed(note) => {
                    print_success(&mut out, &format!("Removed: {}", note.content()))?
                }
                RemoveOutcome::OutOfRange { position, count } => {
                    bail!("Number out of range: {position} (there are {count} notes)")
                }
                RemoveOutcome::Empty => bail!("No notes to remove"),
            }
        }
        NoteCommand::Clear => {
            catalog.remove_all().context("Failed to remove notes")?;
            print_success(&mut out, "All notes removed.")?;
        }
    };

    Ok(())
}
