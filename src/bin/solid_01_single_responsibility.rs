// Single responsibility: the journal holds entries, the persistence
// manager owns saving and loading. Neither does the other's job.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Journal {
    title: String,
    entries: Vec<String>,
}

impl Journal {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    fn add_entry(&mut self, entry: impl Into<String>) {
        let number = self.entries.len() + 1;
        self.entries.push(format!("{number}: {}", entry.into()));
    }

    fn entries(&self) -> &[String] {
        &self.entries
    }
}

// =============================================================================
// Persistence lives in its own type
// =============================================================================

#[derive(Error, Debug)]
enum PersistenceError {
    #[error("failed to read or write journal file: {0}")]
    Io(#[from] std::io::Error),

    #[error("journal file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

struct PersistenceManager;

impl PersistenceManager {
    /// One entry per line, as a plain text dump.
    fn save_text(journal: &Journal, path: &Path) -> Result<(), PersistenceError> {
        let mut contents = String::new();
        for entry in journal.entries() {
            contents.push_str(entry);
            contents.push('\n');
        }
        fs::write(path, contents)?;
        Ok(())
    }

    fn save_json(journal: &Journal, path: &Path) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(journal)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn load_json(path: &Path) -> Result<Journal, PersistenceError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

fn main() {
    let mut journal = Journal::new("My Journal");
    journal.add_entry("I ate a bug.");
    journal.add_entry("I cried today.");

    println!("=== Journal contents ===");
    println!("{}", journal.title);
    for entry in journal.entries() {
        println!("  {entry}");
    }

    println!("\n=== Saving through the persistence manager ===");
    let text_path = Path::new("my_journal.txt");
    match PersistenceManager::save_text(&journal, text_path) {
        Ok(()) => println!("wrote {}", text_path.display()),
        Err(err) => eprintln!("save failed: {err}"),
    }

    let json_path = Path::new("my_journal.json");
    match PersistenceManager::save_json(&journal, json_path) {
        Ok(()) => println!("wrote {}", json_path.display()),
        Err(err) => eprintln!("save failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_entries_are_numbered_in_order() {
        let mut journal = Journal::new("t");
        journal.add_entry("first");
        journal.add_entry("second");
        assert_eq!(journal.entries(), &["1: first", "2: second"]);
    }

    #[test]
    fn test_new_journal_is_empty() {
        let journal = Journal::new("empty");
        assert!(journal.entries().is_empty());
    }

    #[test]
    fn test_text_save_writes_one_entry_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journal.txt");

        let mut journal = Journal::new("t");
        journal.add_entry("a");
        journal.add_entry("b");
        PersistenceManager::save_text(&journal, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1: a\n2: b\n");
    }

    #[test]
    fn test_json_round_trip_preserves_the_journal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journal.json");

        let mut journal = Journal::new("trip");
        journal.add_entry("out");
        journal.add_entry("back");
        PersistenceManager::save_json(&journal, &path).unwrap();

        let loaded = PersistenceManager::load_json(&path).unwrap();
        assert_eq!(loaded, journal);
    }

    #[test]
    fn test_load_missing_file_is_an_io_error() {
        let result = PersistenceManager::load_json(Path::new("/nonexistent/journal.json"));
        assert!(matches!(result, Err(PersistenceError::Io(_))));
    }

    #[test]
    fn test_load_garbage_is_a_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        fs::write(&path, "not json at all").unwrap();

        let result = PersistenceManager::load_json(&path);
        assert!(matches!(result, Err(PersistenceError::Json(_))));
    }

    #[test]
    fn test_error_messages_name_the_failure() {
        let err = PersistenceManager::load_json(Path::new("/nonexistent/journal.json"))
            .unwrap_err();
        assert!(err.to_string().contains("read or write"));
    }
}
