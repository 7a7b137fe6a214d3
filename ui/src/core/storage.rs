//! Local persistence for user preferences.
//!
//! Every backend stores plain string values under string keys. Callers treat
//! failures as non-fatal and keep their in-memory value for the session.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage is unavailable: {0}")]
    Unavailable(String),

    #[error("could not access `{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse `{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Persistence adapter for preferences.
pub trait PreferenceBackend {
    /// `Ok(None)` when the key has never been written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    fn store(&self, key: &str, value: &str) -> Result<()>;
}

/// Session-only storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let backend = Self::default();
        backend
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        backend
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PartialEq for MemoryBackend {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl PreferenceBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

#[cfg(target_arch = "wasm32")]
impl LocalStorageBackend {
    fn storage() -> Result<web_sys::Storage> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceBackend for LocalStorageBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }
}

/// A JSON object of string pairs on disk (desktop builds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub const FILE_NAME: &'static str = "preferences.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `preferences.json` inside the per-user config directory, if the
    /// platform has one.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn in_config_dir() -> Option<Self> {
        directories::ProjectDirs::from("dev", "Folio", "Folio")
            .map(|dirs| Self::new(dirs.config_dir().join(Self::FILE_NAME)))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let raw = serde_json::to_string_pretty(entries).map_err(|source| StorageError::Parse {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, raw).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn store(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StorageError::Parse { .. }) => BTreeMap::new(),
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }
}

/// Injectable handle to the preference backend, shared through context.
#[derive(Clone)]
pub struct Preferences(Rc<dyn PreferenceBackend>);

impl Preferences {
    pub fn new(backend: impl PreferenceBackend + 'static) -> Self {
        Self(Rc::new(backend))
    }

    pub fn backend(&self) -> Rc<dyn PreferenceBackend> {
        self.0.clone()
    }

    /// `localStorage` on the web.
    #[cfg(target_arch = "wasm32")]
    pub fn platform_default() -> Self {
        Self::new(LocalStorageBackend)
    }

    /// The user config directory on desktop, memory when there is none.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn platform_default() -> Self {
        match FileBackend::in_config_dir() {
            Some(file) => Self::new(file),
            None => {
                dioxus::logger::tracing::warn!(
                    "[prefs] no config directory; preferences last for this session only"
                );
                Self::new(MemoryBackend::new())
            }
        }
    }
}
