use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{AddOutcome, ClearOutcome, Entry, Note, RejectReason, RemoveOutcome};
use crate::store::NoteStore;

/// User-level note operations on top of a [`NoteStore`].
///
/// Every operation reloads the list first, so positions always refer to the
/// latest persisted order.
pub struct NoteCatalog<S> {
    store: S,
}

impl<S: NoteStore> NoteCatalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append `content` unless it is blank or spans several lines
    pub fn add(&mut self, content: &str) -> Result<AddOutcome> {
        if content.trim().is_empty() {
            debug!("Rejected blank note");
            return Ok(AddOutcome::Rejected(RejectReason::EmptyContent));
        }

        let note = match Note::new(content) {
            Ok(note) => note,
            Err(Error::LineBreak) => {
                debug!("Rejected multi-line note");
                return Ok(AddOutcome::Rejected(RejectReason::LineBreak));
            }
            Err(e) => return Err(e),
        };

        self.store.append(&note)?;
        Ok(AddOutcome::Added)
    }

    pub fn list_all(&self) -> Result<Vec<Entry>> {
        let notes = self.store.load_all()?;

        Ok(notes
            .into_iter()
            .enumerate()
            .map(|(i, note)| Entry::new(i + 1, note.into_content()))
            .collect())
    }

    /// Notes containing `query`, ignoring ASCII case. Positions refer to the full list.
    pub fn search(&self, query: &str) -> Result<Vec<Entry>> {
        let notes = self.store.load_all()?;

        let hits: Vec<Entry> = notes
            .into_iter()
            .enumerate()
            .filter(|(_, note)| note.matches(query))
            .map(|(i, note)| Entry::new(i + 1, note.into_content()))
            .collect();

        debug!(query, hits = hits.len(), "Searched notes");
        Ok(hits)
    }

    /// Remove the note at 1-based `position` and rewrite the rest in order
    pub fn remove_by_position(&mut self, position: i64) -> Result<RemoveOutcome> {
        let mut notes = self.store.load_all()?;
        let count = notes.len();

        if count == 0 {
            return Ok(RemoveOutcome::Empty);
        }

        let index = match usize::try_from(position) {
            Ok(p) if (1..=count).contains(&p) => p - 1,
            _ => {
                debug!(position, count, "Position out of range");
                return Ok(RemoveOutcome::OutOfRange { position, count });
            }
        };

        let removed = notes.remove(index);
        self.store.save_all(&notes)?;

        debug!(position, remaining = notes.len(), "Removed note");
        Ok(RemoveOutcome::Removed(removed))
    }

    pub fn remove_all(&mut self) -> Result<ClearOutcome> {
        self.store.clear()?;
        Ok(ClearOutcome::Cleared)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};
    use tempfile::TempDir;

    fn catalog() -> NoteCatalog<MemoryStore> {
        NoteCatalog::new(MemoryStore::new())
    }

    fn entries(pairs: &[(usize, &str)]) -> Vec<Entry> {
        pairs.iter().map(|(p, c)| Entry::new(*p, *c)).collect()
    }

    fn count<S: NoteStore>(catalog: &NoteCatalog<S>) -> usize {
        catalog.list_all().unwrap().len()
    }

    #[test]
    fn test_add_then_list_keeps_call_order() {
        let mut catalog = catalog();
        for content in ["first", "second", "third"] {
            assert_eq!(catalog.add(content).unwrap(), AddOutcome::Added);
        }

        assert_eq!(
            catalog.list_all().unwrap(),
            entries(&[(1, "first"), (2, "second"), (3, "third")])
        );
    }

    #[test]
    fn test_add_rejects_blank_content() {
        let mut catalog = catalog();
        catalog.add("kept").unwrap();

        assert_eq!(
            catalog.add("").unwrap(),
            AddOutcome::Rejected(RejectReason::EmptyContent)
        );
        assert_eq!(
            catalog.add("   ").unwrap(),
            AddOutcome::Rejected(RejectReason::EmptyContent)
        );
        assert_eq!(count(&catalog), 1);
    }

    #[test]
    fn test_add_rejects_line_breaks() {
        let mut catalog = catalog();

        assert_eq!(
            catalog.add("one\ntwo").unwrap(),
            AddOutcome::Rejected(RejectReason::LineBreak)
        );
        assert_eq!(count(&catalog), 0);
    }

    #[test]
    fn test_search_on_fresh_store_is_empty() {
        let catalog = catalog();
        assert!(catalog.search("milk").unwrap().is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut catalog = catalog();
        catalog.add("MILK run").unwrap();

        assert_eq!(catalog.search("milk").unwrap(), entries(&[(1, "MILK run")]));
    }

    #[test]
    fn test_search_keeps_full_list_positions() {
        let mut catalog = catalog();
        catalog.add("buy milk").unwrap();
        catalog.add("call mom").unwrap();
        catalog.add("Milkshake").unwrap();

        let hits = catalog.search("MILK").unwrap();
        assert_eq!(hits, entries(&[(1, "buy milk"), (3, "Milkshake")]));

        let all = catalog.list_all().unwrap();
        for hit in &hits {
            assert!(all.contains(hit));
            assert!(hit.content.to_lowercase().contains("milk"));
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let mut catalog = catalog();
        catalog.add("a").unwrap();
        catalog.add("b").unwrap();

        assert_eq!(catalog.search("").unwrap(), catalog.list_all().unwrap());
    }

    #[test]
    fn test_remove_on_empty_list() {
        let mut catalog = catalog();

        assert_eq!(catalog.remove_by_position(1).unwrap(), RemoveOutcome::Empty);
        assert_eq!(count(&catalog), 0);
    }

    #[test]
    fn test_remove_out_of_range_leaves_list_alone() {
        let mut catalog = catalog();
        catalog.add("a").unwrap();
        catalog.add("b").unwrap();

        for position in [0, -1, 3, i64::MAX] {
            assert_eq!(
                catalog.remove_by_position(position).unwrap(),
                RemoveOutcome::OutOfRange { position, count: 2 }
            );
        }
        assert_eq!(catalog.list_all().unwrap(), entries(&[(1, "a"), (2, "b")]));
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut catalog = catalog();
        for content in ["a", "b", "c", "d"] {
            catalog.add(content).unwrap();
        }

        let outcome = catalog.remove_by_position(2).unwrap();

        assert_eq!(outcome, RemoveOutcome::Removed(Note::new("b").unwrap()));
        assert_eq!(
            catalog.list_all().unwrap(),
            entries(&[(1, "a"), (2, "c"), (3, "d")])
        );
    }

    #[test]
    fn test_remove_all_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut catalog = NoteCatalog::new(FileStore::new(dir.path().join("todo.txt")));
        catalog.add("one").unwrap();

        assert_eq!(catalog.remove_all().unwrap(), ClearOutcome::Cleared);
        assert_eq!(std::fs::read_to_string(catalog.store().path()).unwrap(), "");
        assert_eq!(catalog.remove_all().unwrap(), ClearOutcome::Cleared);
        assert_eq!(std::fs::read_to_string(catalog.store().path()).unwrap(), "");
    }

    #[test]
    fn test_round_trip_against_file() {
        let dir = TempDir::new().unwrap();
        let mut catalog = NoteCatalog::new(FileStore::new(dir.path().join("todo.txt")));

        catalog.add("buy milk").unwrap();
        assert_eq!(catalog.list_all().unwrap(), entries(&[(1, "buy milk")]));

        catalog.add("call mom").unwrap();
        assert_eq!(
            catalog.list_all().unwrap(),
            entries(&[(1, "buy milk"), (2, "call mom")])
        );

        assert!(matches!(
            catalog.remove_by_position(1).unwrap(),
            RemoveOutcome::Removed(_)
        ));
        assert_eq!(catalog.list_all().unwrap(), entries(&[(1, "call mom")]));
    }

    /// Memory store whose rewrites always fail
    struct FailingSaveStore(MemoryStore);

    impl NoteStore for FailingSaveStore {
        fn load_all(&self) -> Result<Vec<Note>> {
            self.0.load_all()
        }

        fn append(&mut self, note: &Note) -> Result<()> {
            self.0.append(note)
        }

        fn save_all(&mut self, _notes: &[Note]) -> Result<()> {
            Err(Error::StorageUnavailable {
                path: "todo.txt".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            })
        }
    }

    #[test]
    fn test_failed_remove_keeps_original_list() {
        let mut catalog = NoteCatalog::new(FailingSaveStore(MemoryStore::new()));
        for content in ["a", "b", "c"] {
            catalog.add(content).unwrap();
        }

        assert!(matches!(
            catalog.remove_by_position(1),
            Err(Error::StorageUnavailable { .. })
        ));
        assert_eq!(
            catalog.list_all().unwrap(),
            entries(&[(1, "a"), (2, "b"), (3, "c")])
        );
    }

    #[test]
    fn test_storage_errors_propagate() {
        let dir = TempDir::new().unwrap();
        let mut catalog = NoteCatalog::new(FileStore::new(dir.path()));

        assert!(matches!(
            catalog.add("x"),
            Err(Error::StorageUnavailable { .. })
        ));
        assert!(matches!(
            catalog.list_all(),
            Err(Error::StorageUnavailable { .. })
        ));
    }
}
