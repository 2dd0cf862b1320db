//! JSON file credential storage
//!
//! The whole store is one small JSON object (`{ "accessToken": "..." }`).
//! Writes go to a sibling temporary file that is renamed over the target, so
//! a crash mid-write leaves the previous contents intact. On unix the
//! temporary file is created owner-only, before any byte is written.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use super::error::{StorageError, StorageResult};
use super::traits::CredentialStore;

const DEFAULT_DIR: &str = "tudofresco";
const DEFAULT_FILE: &str = "session.json";

type Entries = BTreeMap<String, String>;

/// File-backed key-value store
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: Mutex::new(()) }
    }

    /// `tudofresco/session.json` under the local data dir
    /// (`~/.local/share` on Linux, `~/Library/Application Support` on macOS)
    pub fn default_path() -> StorageResult<PathBuf> {
        dirs::data_local_dir()
            .map(|data| data.join(DEFAULT_DIR).join(DEFAULT_FILE))
            .ok_or_else(|| StorageError::Unavailable("local data directory not found".to_string()))
    }

    /// Store at [`FileStore::default_path`]
    pub fn at_default_path() -> StorageResult<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> StorageResult<Entries> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(err.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&raw).map_err(|err| StorageError::Corrupt {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }

    fn write_entries(&self, entries: &Entries) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_vec_pretty(entries)?;
        let staging = self.path.with_extension("json.tmp");
        let written = write_staging(&staging, &contents)
            .and_then(|()| fs::rename(&staging, &self.path).map_err(StorageError::from));
        if let Err(err) = written {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }

        debug!(path = %self.path.display(), entries = entries.len(), "Session file written");
        Ok(())
    }
}

fn write_staging(path: &Path, contents: &[u8]) -> StorageResult<()> {
    // A leftover from an earlier crash may carry wider permissions.
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }

    let mut file = create_private(path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    Ok(())
}

#[cfg(unix)]
fn create_private(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new().write(true).create_new(true).mode(0o600).open(path)
}

#[cfg(not(unix))]
fn create_private(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

impl CredentialStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock();
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock();
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
