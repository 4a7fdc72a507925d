//! Persistent key-value preferences
//!
//! A small string store in `~/.config/aetherion/defaults.json`, holding the
//! selected theme ids and the override mirror. Every mutation is written
//! through to disk; the in-memory value stays authoritative if the write fails.
//!
//! `Preferences` is a cheap handle: clones share the same store, so the
//! override store and the theme manager see each other's writes.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Well-known preference keys
pub mod keys {
    /// Last applied preset id
    pub const SELECTED_THEME_ID: &str = "theme.selectedID";
    /// Last applied raw catalog entry id (non-preset JSON themes included)
    pub const SELECTED_ENTRY_ID: &str = "theme.selectedRawID";
    /// Byte-identical copy of the override file
    pub const OVERRIDE_MIRROR: &str = "theme.override.mirror";
}

/// On-disk layout of the preferences file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PrefsFile {
    /// Schema version for forward compatibility
    #[serde(default)]
    version: u32,
    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl PrefsFile {
    const CURRENT_VERSION: u32 = 1;
}

#[derive(Debug)]
struct Inner {
    /// `None` for a purely in-memory store
    path: Option<PathBuf>,
    data: PrefsFile,
}

/// Shared handle to the preferences store
#[derive(Debug, Clone)]
pub struct Preferences {
    inner: Rc<RefCell<Inner>>,
}

impl Preferences {
    /// Open the store backed by `path`; a missing or malformed file starts empty
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!("Ignoring malformed preferences {}: {}", path.display(), e);
                    PrefsFile::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No preferences at {}, starting empty", path.display());
                PrefsFile::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read preferences {}: {}", path.display(), e);
                PrefsFile::default()
            }
        };
        Self {
            inner: Rc::new(RefCell::new(Inner {
                path: Some(path),
                data,
            })),
        }
    }

    /// Store that never touches disk
    pub fn in_memory() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                path: None,
                data: PrefsFile::default(),
            })),
        }
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<PathBuf> {
        self.inner.borrow().path.clone()
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.inner.borrow().data.values.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.borrow().data.values.contains_key(key)
    }

    /// Set `key` and write through
    pub fn set_string(&self, key: &str, value: impl Into<String>) -> io::Result<()> {
        self.inner
            .borrow_mut()
            .data
            .values
            .insert(key.to_string(), value.into());
        self.flush()
    }

    /// Remove `key` and write through; removing an absent key is a no-op
    pub fn remove(&self, key: &str) -> io::Result<()> {
        let removed = self.inner.borrow_mut().data.values.remove(key).is_some();
        if removed {
            self.flush()
        } else {
            Ok(())
        }
    }

    /// Write the current contents to the backing file
    pub fn flush(&self) -> io::Result<()> {
        let mut inner = self.inner.borrow_mut();
        let Some(path) = inner.path.clone() else {
            return Ok(());
        };
        inner.data.version = PrefsFile::CURRENT_VERSION;
        let contents = serde_json::to_string_pretty(&inner.data)?;
        drop(inner);
        ensure_parent(&path)?;
        crate::util::fs::write_atomic(&path, contents.as_bytes())
    }
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
