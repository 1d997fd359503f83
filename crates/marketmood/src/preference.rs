//! Display-mode preference persistence.
//!
//! The preference store owns the single piece of durable state in the
//! theming core: the user's [`DisplayMode`]. Persistence goes through the
//! [`PreferenceBackend`] trait, a minimal single-string key/value surface
//! so the host environment decides where the value actually lives
//! (a settings file on desktop, local storage behind FFI, a fake in
//! tests).
//!
//! Persistence is best-effort throughout. A missing, unreadable, or
//! corrupt value degrades to [`DisplayMode::Automatic`]; a failed write
//! keeps the in-memory value authoritative for the session. Neither path
//! surfaces an error to the caller; failures are logged at `warn` and
//! absorbed.
//!
//! # Example
//!
//! ```rust
//! use marketmood::{DisplayMode, MemoryBackend, PreferenceStore};
//!
//! let mut store = PreferenceStore::load(MemoryBackend::new());
//! assert_eq!(store.current(), DisplayMode::Automatic);
//!
//! store.set(DisplayMode::Light);
//!
//! // A fresh session against the same backend sees the saved mode.
//! let backend = store.into_backend();
//! let store = PreferenceStore::load(backend);
//! assert_eq!(store.current(), DisplayMode::Light);
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use marketmood_theme::DisplayMode;

/// The key the display mode is stored under.
const DISPLAY_MODE_KEY: &str = "marketmood.display_mode";

/// Errors a persistence backend can report.
///
/// These never escape [`PreferenceStore`]; the store logs and falls back
/// to defaults. The type is public so custom backends can construct them.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("preference write failed: {0}")]
    Write(#[source] std::io::Error),

    #[error("preference document malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A single-string key/value persistence surface supplied by the host.
pub trait PreferenceBackend {
    /// Reads the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    entries: BTreeMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed backend storing keys in one small JSON document.
///
/// The document is a flat string-to-string object, rewritten in full on
/// every `set`. Suitable for the handful of values a dashboard persists;
/// not a database.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend persisting to `path`. The file and its parent
    /// directory are created lazily on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => return Err(PreferenceError::Read(err)),
        };
        Ok(serde_json::from_str(&raw)?)
    }
}

impl PreferenceBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_document()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut document = self.read_document().unwrap_or_default();
        document.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(PreferenceError::Write)?;
            }
        }
        let raw = serde_json::to_string_pretty(&document)?;
        std::fs::write(&self.path, raw).map_err(PreferenceError::Write)
    }
}

/// Owns the current display mode and keeps it in sync with a backend.
#[derive(Debug)]
pub struct PreferenceStore<B: PreferenceBackend> {
    backend: B,
    current: DisplayMode,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    /// Loads the persisted display mode, defaulting to
    /// [`DisplayMode::Automatic`] when absent or unreadable. Never fails.
    pub fn load(backend: B) -> Self {
        let current = match backend.get(DISPLAY_MODE_KEY) {
            Ok(Some(raw)) => match raw.parse::<DisplayMode>() {
                Ok(mode) => mode,
                Err(err) => {
                    warn!(%err, raw = %raw, "stored display mode malformed, using default");
                    DisplayMode::default()
                }
            },
            Ok(None) => DisplayMode::default(),
            Err(err) => {
                warn!(%err, "display mode unreadable, using default");
                DisplayMode::default()
            }
        };
        debug!(mode = %current, "display mode loaded");
        Self { backend, current }
    }

    /// The in-memory display mode.
    pub fn current(&self) -> DisplayMode {
        self.current
    }

    /// Updates the display mode and persists it synchronously.
    ///
    /// Persistence is best-effort: a write failure is logged and the
    /// in-memory value stays authoritative for the session.
    pub fn set(&mut self, mode: DisplayMode) {
        self.current = mode;
        if let Err(err) = self.backend.set(DISPLAY_MODE_KEY, mode.as_str()) {
            warn!(%err, mode = %mode, "display mode not persisted");
        } else {
            debug!(mode = %mode, "display mode persisted");
        }
    }

    /// Consumes the store, returning the backend. Used by tests that
    /// simulate a fresh session against the same persisted state.
    pub fn into_backend(self) -> B {
        self.backend
    }
}
