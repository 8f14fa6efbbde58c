//! Where ledgers live between sessions.
//!
//! [`FileStore`] keeps one `MessagePack` file per learner; [`MemoryStore`]
//! keeps everything in process and is used by tests and throwaway sessions.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind as IoErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use colloquy_foundation::{Error, ErrorKind, Result};
use tracing::{debug, warn};

use crate::ledger::ProgressLedger;

/// Persistence backend for ledgers, keyed by learner identity key.
pub trait ProgressStore {
    /// Loads the ledger for `key`; an unknown key yields an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if stored data exists but cannot be read.
    fn load(&self, key: &str) -> Result<ProgressLedger>;

    /// Replaces the stored ledger for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be written.
    fn save(&mut self, key: &str, ledger: &ProgressLedger) -> Result<()>;
}

// =============================================================================
// Memory Store
// =============================================================================

/// In-process store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    ledgers: HashMap<String, ProgressLedger>,
    reject_writes: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose writes always fail.
    #[must_use]
    pub fn rejecting_writes() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    /// Number of stored ledgers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ledgers.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ledgers.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, key: &str) -> Result<ProgressLedger> {
        Ok(self.ledgers.get(key).cloned().unwrap_or_default())
    }

    fn save(&mut self, key: &str, ledger: &ProgressLedger) -> Result<()> {
        if self.reject_writes {
            return Err(Error::persistence(format!("store rejected write for '{key}'")));
        }
        self.ledgers.insert(key.to_string(), ledger.clone());
        Ok(())
    }
}

// =============================================================================
// File Store
// =============================================================================

/// One `MessagePack` file per learner under a data directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`. The directory is created on first save.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that holds the ledger for `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.progress", file_stem(key)))
    }
}

/// Encodes `key` as a file name stem, one to one.
///
/// ASCII letters, digits, `-` and `_` are kept; every other byte of the
/// UTF-8 encoding becomes `%XX`.
#[must_use]
pub fn file_stem(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            stem.push(char::from(byte));
        } else {
            let _ = write!(stem, "%{byte:02X}");
        }
    }
    stem
}

/// Moves an undecodable file aside so the next save does not overwrite it.
fn set_aside(path: &Path) {
    let aside = path.with_extension("progress.corrupt");
    match fs::rename(path, &aside) {
        Ok(()) => warn!(
            path = %path.display(),
            moved_to = %aside.display(),
            "unreadable progress set aside"
        ),
        Err(e) => warn!(
            path = %path.display(),
            error = %e,
            "could not set aside unreadable progress"
        ),
    }
}

impl ProgressStore for FileStore {
    fn load(&self, key: &str) -> Result<ProgressLedger> {
        let path = self.path_for(key);
        match File::open(&path) {
            Ok(file) => {
                debug!(path = %path.display(), "loading progress");
                let ledger = read_ledger(file, &path);
                if let Err(Error {
                    kind: ErrorKind::Serialization(_),
                }) = &ledger
                {
                    set_aside(&path);
                }
                ledger
            }
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(ProgressLedger::new()),
            Err(e) => Err(Error::io(format!(
                "failed to open file '{}': {e}",
                path.display()
            ))),
        }
    }

    fn save(&mut self, key: &str, ledger: &ProgressLedger) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| {
            Error::io(format!(
                "failed to create directory '{}': {e}",
                self.root.display()
            ))
        })?;
        let path = self.path_for(key);
        save_to_file(ledger, &path)?;
        debug!(path = %path.display(), dialogues = ledger.len(), "saved progress");
        Ok(())
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Serializes a ledger to `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(ledger: &ProgressLedger) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(ledger).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a ledger from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid ledger.
pub fn from_bytes(bytes: &[u8]) -> Result<ProgressLedger> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

fn save_to_file(ledger: &ProgressLedger, path: &Path) -> Result<()> {
    write_atomic(path, &to_bytes(ledger)?)
}

/// Writes `bytes` next to `path` and renames the result into place, so a
/// reader sees either the old contents or the new ones.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be written or renamed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let file = File::create(&tmp).map_err(|e| {
        Error::io(format!("failed to create file '{}': {e}", tmp.display()))
    })?;

    let mut writer = BufWriter::new(file);

    writer.write_all(bytes).map_err(|e| {
        Error::io(format!("failed to write to file '{}': {e}", tmp.display()))
    })?;

    writer.flush().map_err(|e| {
        Error::io(format!("failed to flush file '{}': {e}", tmp.display()))
    })?;
    drop(writer);

    fs::rename(&tmp, path).map_err(|e| {
        Error::io(format!("failed to replace file '{}': {e}", path.display()))
    })
}

fn read_ledger(file: File, path: &Path) -> Result<ProgressLedger> {
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();

    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::io(format!("failed to read file '{}': {e}", path.display()))
    })?;

    from_bytes(&bytes)
}
