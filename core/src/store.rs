use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Note;

pub const DEFAULT_FILE_NAME: &str = "todo.txt";

const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Persistence of the ordered note list
pub trait NoteStore {
    /// Read every note in stored order; a store that was never written is empty
    fn load_all(&self) -> Result<Vec<Note>>;

    /// Add one note after the last one
    fn append(&mut self, note: &Note) -> Result<()>;

    /// Replace the whole list with `notes`
    fn save_all(&mut self, notes: &[Note]) -> Result<()>;

    fn clear(&mut self) -> Result<()> {
        self.save_all(&[])
    }
}

/// Plain text file, one note per line.
///
/// No handle is kept between calls: each operation opens, uses and closes the file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                std::fs::create_dir_all(parent).map_err(|e| Error::storage(parent, e))
            }
            _ => Ok(()),
        }
    }
}

impl NoteStore for FileStore {
    fn load_all(&self) -> Result<Vec<Note>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Notes file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(Error::storage(&self.path, e)),
        };

        let mut notes = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| Error::storage(&self.path, e))?;
            notes.push(Note::from_stored(line));
        }

        debug!(path = %self.path.display(), count = notes.len(), "Loaded notes");
        Ok(notes)
    }

    fn append(&mut self, note: &Note) -> Result<()> {
        self.ensure_parent()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::storage(&self.path, e))?;

        write!(file, "{}{}", note.content(), LINE_ENDING)
            .map_err(|e| Error::storage(&self.path, e))?;

        debug!(path = %self.path.display(), "Appended note");
        Ok(())
    }

    /// Writes a sibling temp file and renames it over the notes file, so a
    /// failed rewrite leaves the previous list in place
    fn save_all(&mut self, notes: &[Note]) -> Result<()> {
        self.ensure_parent()?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let temp = NamedTempFile::new_in(dir).map_err(|e| Error::storage(dir, e))?;

        let mut writer = BufWriter::new(temp);
        for note in notes {
            write!(writer, "{}{}", note.content(), LINE_ENDING)
                .map_err(|e| Error::storage(&self.path, e))?;
        }
        let temp = writer
            .into_inner()
            .map_err(|e| Error::storage(&self.path, e.into_error()))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| Error::storage(&self.path, e))?;
        temp.persist(&self.path)
            .map_err(|e| Error::storage(&self.path, e.error))?;

        debug!(path = %self.path.display(), count = notes.len(), "Rewrote notes file");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.ensure_parent()?;

        File::create(&self.path).map_err(|e| Error::storage(&self.path, e))?;

        debug!(path = %self.path.display(), "Truncated notes file");
        Ok(())
    }
}

/// In-memory store, mainly for tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    notes: Vec<Note>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}

impl NoteStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn append(&mut self, note: &Note) -> Result<()> {
        self.notes.push(note.clone());
        Ok(())
    }

    fn save_all(&mut self, notes: &[Note]) -> Result<()> {
        self.notes = notes.to_vec();
        Ok(())
    }
}
