use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use engine_logging::engine_debug;
use serde::{Deserialize, Serialize};

use crate::persist::{load_ron, save_ron, PersistError};

pub const SETTINGS_FILENAME: &str = "settings.ron";

/// Key/value settings with last-write-wins semantics.
pub trait SettingsStore: Send + Sync {
    fn get(&self, id: &str) -> Result<Option<String>, PersistError>;
    fn put(&self, id: &str, value: &str) -> Result<(), PersistError>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Settings kept in memory and mirrored to `settings.ron` on every write.
#[derive(Debug)]
pub struct RonSettingsStore {
    dir: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl RonSettingsStore {
    /// Loads existing settings from `dir`; a missing file is an empty store.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let dir = dir.into();
        let file: SettingsFile = load_ron(&dir, SETTINGS_FILENAME)?.unwrap_or_default();
        engine_debug!(
            "loaded {} setting(s) from {:?}",
            file.entries.len(),
            dir.join(SETTINGS_FILENAME)
        );
        Ok(Self {
            dir,
            entries: Mutex::new(file.entries),
        })
    }

    /// A store that ignores whatever is on disk; the first write replaces it.
    pub fn empty(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SettingsStore for RonSettingsStore {
    fn get(&self, id: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries().get(id).cloned())
    }

    /// The in-memory value only changes once the file write succeeded.
    fn put(&self, id: &str, value: &str) -> Result<(), PersistError> {
        let mut entries = self.entries();
        let mut next = entries.clone();
        next.insert(id.to_string(), value.to_string());
        let file = SettingsFile { entries: next };
        save_ron(&self.dir, SETTINGS_FILENAME, &file)?;
        *entries = file.entries;
        Ok(())
    }
}
