use crate::db::db::Db;
use crate::db::store::Store;
use anyhow::Result;
use std::path::Path;

/// Key of the focus mode flag in the store.
pub const FOCUS_MODE_KEY: &str = "focusMode";

/// Persisted application state that is not part of the task collection.
pub struct Settings {
    store: Store,
}

impl Settings {
    pub fn new() -> Result<Settings> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Settings> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Settings {
        Settings { store: Store::new(db) }
    }

    /// Whether focus mode is on. Off until it has been set once.
    pub fn focus_mode(&self) -> Result<bool> {
        Ok(self.store.get::<bool>(FOCUS_MODE_KEY)?.unwrap_or(false))
    }

    /// Persists the flag and returns the stored value.
    pub fn set_focus_mode(&mut self, enabled: bool) -> Result<bool> {
        self.store.set(FOCUS_MODE_KEY, &enabled)?;
        tracing::debug!(enabled, "focus mode set");
        Ok(enabled)
    }

    /// Flips the flag and returns the new value.
    pub fn toggle_focus_mode(&mut self) -> Result<bool> {
        let enabled = !self.focus_mode()?;
        self.set_focus_mode(enabled)
    }
}
