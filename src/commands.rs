use crate::archive::ArchiveStore;
use crate::cli::Cli;
use crate::clipboard::ClipboardGateway;
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

const EMPTY_CLIPBOARD: &str = "Clipboard is empty.";
const INVALID_ARGUMENTS: &str = "Invalid arguments. If you're having trouble try '--help'.";

/// What a single run actually did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// The archive step stored a value.
    pub archived: bool,
    /// The copy step wrote to the clipboard.
    pub copied: bool,
    /// The store file was rewritten.
    pub saved: bool,
}

/// Handle `--archive` then `--copy`, reporting each result to `out`.
///
/// Rejected keys, missing keys and an empty clipboard are reported and the run
/// continues. The store is written back only if the archive step changed it.
pub fn run(
    cli: &Cli,
    store: &mut ArchiveStore,
    clipboard: &mut dyn ClipboardGateway,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let mut outcome = Outcome::default();

    if let Some(key) = cli.archive.as_deref() {
        outcome.archived = archive_from_clipboard(key, store, clipboard, out)?;
        if outcome.archived {
            store.save()?;
            outcome.saved = true;
        }
    }

    if let Some(key) = cli.copy.as_deref() {
        outcome.copied = copy_to_clipboard(key, store, clipboard, out)?;
    }

    if cli.archive.is_none() && cli.copy.is_none() {
        writeln!(out, "{INVALID_ARGUMENTS}")?;
    }

    debug!(?outcome, "Run finished");
    Ok(outcome)
}

fn archive_from_clipboard(
    key: &str,
    store: &mut ArchiveStore,
    clipboard: &mut dyn ClipboardGateway,
    out: &mut dyn Write,
) -> Result<bool> {
    let Some(text) = clipboard.read_text()? else {
        writeln!(out, "{EMPTY_CLIPBOARD}")?;
        return Ok(false);
    };

    match store.put(key, text) {
        Ok(()) => {
            info!(key = %key, "Archived clipboard");
            writeln!(out, "Current clipboard saved to key '{key}'.")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok(false)
        }
    }
}

fn copy_to_clipboard(
    key: &str,
    store: &ArchiveStore,
    clipboard: &mut dyn ClipboardGateway,
    out: &mut dyn Write,
) -> Result<bool> {
    match store.get(key) {
        Ok(value) => {
            clipboard.write_text(value)?;
            info!(key = %key, "Restored clipboard");
            writeln!(out, "{key} copied to clipboard.")?;
            Ok(true)
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::STORE_FILE_NAME;
    use crate::clipboard::MemoryClipboard;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    struct Harness {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl Harness {
        fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join(STORE_FILE_NAME);
            Self {
                _temp_dir: temp_dir,
                path,
            }
        }

        /// Load, dispatch, and return the outcome plus everything printed.
        fn invoke(&self, cli: Cli, clipboard: &mut MemoryClipboard) -> (Outcome, String) {
            let mut store = ArchiveStore::load(&self.path).unwrap();
            let mut out = Vec::new();
            let outcome = run(&cli, &mut store, clipboard, &mut out).unwrap();
            (outcome, String::from_utf8(out).unwrap())
        }

        fn file(&self) -> String {
            fs::read_to_string(&self.path).unwrap()
        }
    }

    fn archive(key: &str) -> Cli {
        Cli {
            archive: Some(key.to_string()),
            ..Cli::default()
        }
    }

    fn copy(key: &str) -> Cli {
        Cli {
            copy: Some(key.to_string()),
            ..Cli::default()
        }
    }

    #[test]
    fn test_archive_saves_clipboard_under_key() {
        let harness = Harness::new();
        let mut clipboard = MemoryClipboard::with_text("hello");

        let (outcome, printed) = harness.invoke(archive("note1"), &mut clipboard);

        assert_eq!(printed, "Current clipboard saved to key 'note1'.\n");
        assert_eq!(
            outcome,
            Outcome {
                archived: true,
                copied: false,
                saved: true
            }
        );
        assert_eq!(harness.file(), r#"{"foo":"bar","note1":"hello"}"#);
    }

    #[test]
    fn test_copy_restores_archived_value() {
        let harness = Harness::new();
        let mut clipboard = MemoryClipboard::with_text("hello");
        harness.invoke(archive("note1"), &mut clipboard);

        let mut clipboard = MemoryClipboard::with_text("something else");
        let (outcome, printed) = harness.invoke(copy("note1"), &mut clipboard);

        assert_eq!(printed, "note1 copied to clipboard.\n");
        assert!(outcome.copied);
        assert!(!outcome.saved);
        assert_eq!(clipboard.contents(), Some("hello"));
    }

    #[test]
    fn test_archive_same_key_keeps_latest_value() {
        let harness = Harness::new();
        harness.invoke(archive("note1"), &mut MemoryClipboard::with_text("first"));
        harness.invoke(archive("note1"), &mut MemoryClipboard::with_text("second"));

        let store = ArchiveStore::load(&harness.path).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("note1").unwrap(), "second");
    }

    #[test]
    fn test_invalid_key_reports_and_does_not_write() {
        let harness = Harness::new();
        ArchiveStore::load(&harness.path).unwrap();
        let before = harness.file();

        let (outcome, printed) =
            harness.invoke(archive("bad key"), &mut MemoryClipboard::with_text("hello"));

        assert_eq!(
            printed,
            "Invalid key. Keys must contain only letters, numbers, and underscores.\n"
        );
        assert_eq!(outcome, Outcome::default());
        assert_eq!(harness.file(), before);
    }

    #[test]
    fn test_empty_clipboard_reports_and_continues_to_copy() {
        let harness = Harness::new();
        let mut clipboard = MemoryClipboard::new();
        let cli = Cli {
            archive: Some("note1".to_string()),
            copy: Some("foo".to_string()),
            ..Cli::default()
        };

        let (outcome, printed) = harness.invoke(cli, &mut clipboard);

        assert_eq!(printed, "Clipboard is empty.\nfoo copied to clipboard.\n");
        assert!(!outcome.archived);
        assert!(outcome.copied);
        assert_eq!(clipboard.contents(), Some("bar"));
    }

    #[test]
    fn test_copy_missing_key_reports_without_writing() {
        let harness = Harness::new();
        ArchiveStore::load(&harness.path).unwrap();
        let before = fs::metadata(&harness.path).unwrap().modified().unwrap();
        let mut clipboard = MemoryClipboard::with_text("untouched");

        let (outcome, printed) = harness.invoke(copy("missingKey"), &mut clipboard);

        assert_eq!(
            printed,
            "There is no saved clipboard under the name 'missingKey'\n"
        );
        assert_eq!(outcome, Outcome::default());
        assert_eq!(clipboard.contents(), Some("untouched"));
        assert_eq!(harness.file(), r#"{"foo":"bar"}"#);
        assert_eq!(fs::metadata(&harness.path).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn test_archive_runs_before_copy() {
        let harness = Harness::new();
        let mut clipboard = MemoryClipboard::with_text("fresh");
        let cli = Cli {
            archive: Some("note1".to_string()),
            copy: Some("note1".to_string()),
            ..Cli::default()
        };

        let (outcome, printed) = harness.invoke(cli, &mut clipboard);

        assert_eq!(
            printed,
            "Current clipboard saved to key 'note1'.\nnote1 copied to clipboard.\n"
        );
        assert!(outcome.archived && outcome.copied && outcome.saved);
        assert_eq!(clipboard.contents(), Some("fresh"));
    }

    #[test]
    fn test_no_flags_reports_invalid_arguments() {
        let harness = Harness::new();

        let (outcome, printed) = harness.invoke(Cli::default(), &mut MemoryClipboard::new());

        assert_eq!(printed, "Invalid arguments. If you're having trouble try '--help'.\n");
        assert_eq!(outcome, Outcome::default());
    }

    #[test]
    fn test_corrupt_store_is_fatal() {
        let harness = Harness::new();
        fs::write(&harness.path, "[1, 2").unwrap();

        assert!(ArchiveStore::load(&harness.path).is_err());
        assert_eq!(harness.file(), "[1, 2");
    }
}
