use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{KeyValueStorage, StorageError};

const CACHE_DIR: &str = "kwsuggest";
const SESSIONS_DIR: &str = "sessions";

/// Location of the store file for `session_id` under the platform cache directory.
pub fn session_path(session_id: &str) -> Option<PathBuf> {
    dirs::cache_dir().map(|p| {
        p.join(CACHE_DIR)
            .join(SESSIONS_DIR)
            .join(format!("{}.json", sanitize_session_id(session_id)))
    })
}

/// Session id used when none is given: the launching shell's process id.
pub fn session_id_from_env() -> String {
    #[cfg(unix)]
    {
        std::os::unix::process::parent_id().to_string()
    }
    #[cfg(not(unix))]
    {
        "default".to_string()
    }
}

fn sanitize_session_id(session_id: &str) -> String {
    let cleaned: String = session_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "default".to_string()
    } else {
        cleaned
    }
}

/// Storage persisted as a single JSON object file, one file per session.
///
/// The file is read once on open. Every write rewrites the whole file.
/// No file locking - last writer wins if two prompts share a session.
#[derive(Debug)]
pub struct SessionFileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl SessionFileStorage {
    pub fn open(path: PathBuf) -> Self {
        let items = load_items(&path);
        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the session file. A missing file is not an error.
    pub fn clear(&mut self) -> io::Result<()> {
        self.items.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(&self.items)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn load_items(path: &Path) -> BTreeMap<String, String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return BTreeMap::new(),
    };

    match serde_json::from_str(&content) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Ignoring unreadable session store {:?}: {}", path, e);
            BTreeMap::new()
        }
    }
}

impl KeyValueStorage for SessionFileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
#[path = "session_file_tests.rs"]
mod session_file_tests;
