//! Typed preferences over a [`PreferenceStore`].
//!
//! Reads never fail: an absent key, a malformed value or a version
//! mismatch all yield `T::default()` (the last two with a warning).
//! Writes report failure to the caller, which keeps its in-memory copy
//! authoritative either way.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{decode, encode, PreferenceStore, StoreError};
use crate::catalog::ItemId;
use crate::state::Theme;

/// A typed, versioned preference key.
pub struct Pref<T> {
    pub key: &'static str,
    pub version: u32,
    /// Decoder for values written before the envelope existed.
    legacy: Option<fn(&str) -> Option<T>>,
}

impl<T> Pref<T> {
    pub const fn new(key: &'static str, version: u32) -> Self {
        Self {
            key,
            version,
            legacy: None,
        }
    }

    pub const fn with_legacy(key: &'static str, version: u32, legacy: fn(&str) -> Option<T>) -> Self {
        Self {
            key,
            version,
            legacy: Some(legacy),
        }
    }
}

/// Durable copy of the learning progress sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredProgress {
    pub completed: Vec<ItemId>,
    pub bookmarked: Vec<ItemId>,
}

pub const THEME: Pref<Theme> = Pref::with_legacy("theme", 1, Theme::parse);
/// Profile picture as a `data:` URL.
pub const PROFILE_IMAGE: Pref<Option<String>> = Pref::with_legacy("profileImage", 1, legacy_image);
pub const LEARNING_PROGRESS: Pref<StoredProgress> =
    Pref::with_legacy("learningProgress", 1, legacy_progress);

fn legacy_image(raw: &str) -> Option<Option<String>> {
    raw.starts_with("data:image/").then(|| Some(raw.to_string()))
}

/// Bare `{completed, bookmarked}` objects predate the envelope.
fn legacy_progress(raw: &str) -> Option<StoredProgress> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    let obj = value.as_object()?;
    if obj.contains_key("v") {
        return None;
    }
    serde_json::from_value(value).ok()
}

/// Every key this crate owns; `Preferences::clear` removes exactly these.
pub const ALL_KEYS: &[&str] = &[THEME.key, PROFILE_IMAGE.key, LEARNING_PROGRESS.key];

pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read a preference, falling back to the default on any problem.
    pub fn get<T: DeserializeOwned + Default>(&self, pref: &Pref<T>) -> T {
        match self.try_get(pref) {
            Ok(Some(v)) => v,
            Ok(None) => T::default(),
            Err(e) => {
                log::warn!("{}; falling back to default", e);
                T::default()
            }
        }
    }

    /// Read a preference, surfacing decode and I/O failures.
    pub fn try_get<T: DeserializeOwned>(&self, pref: &Pref<T>) -> Result<Option<T>, StoreError> {
        let raw = match self.store.get_raw(pref.key)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match decode::<T>(pref.key, pref.version, &raw) {
            Ok(v) => Ok(Some(v)),
            Err(e) => match pref.legacy.and_then(|f| f(&raw)) {
                Some(v) => {
                    log::debug!("[{}] read legacy value", pref.key);
                    Ok(Some(v))
                }
                None => Err(e),
            },
        }
    }

    /// Write a preference synchronously.
    pub fn set<T: Serialize>(&mut self, pref: &Pref<T>, value: &T) -> Result<(), StoreError> {
        let raw = encode(pref.key, pref.version, value)?;
        self.store.set_raw(pref.key, &raw)?;
        log::debug!("[{}] saved ({} bytes)", pref.key, raw.len());
        Ok(())
    }

    pub fn remove<T>(&mut self, pref: &Pref<T>) -> Result<(), StoreError> {
        self.store.remove(pref.key)
    }

    /// Drop every preference this crate owns.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        for key in ALL_KEYS {
            self.store.remove(key)?;
        }
        log::info!("Cleared {} stored preferences", ALL_KEYS.len());
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};

    #[test]
    fn absent_keys_default() {
        let prefs = Preferences::new(MemoryStore::new());
        assert_eq!(prefs.get(&THEME), Theme::Dark);
        assert_eq!(prefs.get(&PROFILE_IMAGE), None);
        assert_eq!(prefs.get(&LEARNING_PROGRESS), StoredProgress::default());
    }

    #[test]
    fn theme_survives_fresh_load() {
        let mut prefs = Preferences::new(MemoryStore::new());
        prefs.set(&THEME, &Theme::Light).unwrap();

        let reloaded = Preferences::new(prefs.into_store());
        assert_eq!(reloaded.get(&THEME), Theme::Light);
    }

    #[test]
    fn theme_survives_fresh_file_store() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut prefs = Preferences::new(FileStore::open(dir.path()).unwrap());
            prefs.set(&THEME, &Theme::Light).unwrap();
        }
        let prefs = Preferences::new(FileStore::open(dir.path()).unwrap());
        assert_eq!(prefs.get(&THEME), Theme::Light);
    }

    #[test]
    fn corrupted_theme_falls_back() {
        let store = MemoryStore::new().with_raw("theme", "{\"v\":1,\"value\":42}");
        let prefs = Preferences::new(store);
        assert!(prefs.try_get(&THEME).is_err());
        assert_eq!(prefs.get(&THEME), Theme::Dark);
    }

    #[test]
    fn legacy_bare_theme_is_read() {
        let prefs = Preferences::new(MemoryStore::new().with_raw("theme", "light"));
        assert_eq!(prefs.get(&THEME), Theme::Light);
    }

    #[test]
    fn legacy_data_url_is_read() {
        let prefs = Preferences::new(MemoryStore::new().with_raw("profileImage", "data:image/png;base64,AA=="));
        assert_eq!(prefs.get(&PROFILE_IMAGE).as_deref(), Some("data:image/png;base64,AA=="));
    }

    #[test]
    fn progress_without_envelope_is_read() {
        let raw = r#"{"completed":["1-0"],"bookmarked":[]}"#;
        let prefs = Preferences::new(MemoryStore::new().with_raw("learningProgress", raw));
        assert_eq!(prefs.get(&LEARNING_PROGRESS).completed, vec![ItemId::from_raw("1-0")]);
    }

    #[test]
    fn progress_from_future_version_defaults() {
        let raw = r#"{"v":2,"value":{"completed":["1-0"]}}"#;
        let prefs = Preferences::new(MemoryStore::new().with_raw("learningProgress", raw));
        assert_eq!(prefs.get(&LEARNING_PROGRESS), StoredProgress::default());
    }

    #[test]
    fn progress_partial_fields_default() {
        let raw = r#"{"v":1,"value":{"completed":["2-1"]}}"#;
        let prefs = Preferences::new(MemoryStore::new().with_raw("learningProgress", raw));
        let p = prefs.get(&LEARNING_PROGRESS);
        assert_eq!(p.completed, vec![ItemId::from_raw("2-1")]);
        assert!(p.bookmarked.is_empty());
    }

    #[test]
    fn clear_removes_owned_keys_only() {
        let store = MemoryStore::new().with_raw("unrelated", "1");
        let mut prefs = Preferences::new(store);
        prefs.set(&THEME, &Theme::Light).unwrap();
        prefs.set(&PROFILE_IMAGE, &Some("data:image/png;base64,AA==".to_string())).unwrap();
        prefs.clear().unwrap();
        assert_eq!(prefs.store().len(), 1);
    }
}
