//! Persistent Preference Store.
//!
//! Key-value access over durable client storage. Two backends:
//!
//! - `MemoryStore`: in-process map, used by tests and as a fallback
//!   when the on-disk store cannot be opened
//! - `FileStore`: one JSON document per key under a directory,
//!   replaced atomically on every write
//!
//! Values are wrapped in a versioned envelope `{"v": N, "value": ...}` so a
//! key can be migrated later without misreading data written by an older
//! release. Typed access and default fallback live in [`prefs`].

pub mod file;
pub mod memory;
pub mod prefs;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use prefs::{Pref, Preferences, StoredProgress};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Raw string storage keyed by preference name.
///
/// Writes are synchronous: once `set_raw` returns `Ok`, a subsequent
/// `get_raw` in the same session observes the new value.
pub trait PreferenceStore {
    /// `Ok(None)` when the key has never been written.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_raw(key)
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_raw(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum StoreErrorKind {
    Io(std::io::Error),
    Encode(String),
    Decode(String),
    VersionMismatch { stored: u32, expected: u32 },
}

/// Failure reading or writing a single preference key.
#[derive(Debug)]
pub struct StoreError {
    pub key: String,
    pub kind: StoreErrorKind,
}

impl StoreError {
    pub fn io(key: &str, err: std::io::Error) -> Self {
        Self {
            key: key.to_string(),
            kind: StoreErrorKind::Io(err),
        }
    }

    fn decode(key: &str, msg: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            kind: StoreErrorKind::Decode(msg.into()),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            StoreErrorKind::Io(e) => write!(f, "[{}] storage I/O failed: {}", self.key, e),
            StoreErrorKind::Encode(m) => write!(f, "[{}] cannot encode value: {}", self.key, m),
            StoreErrorKind::Decode(m) => write!(f, "[{}] malformed stored value: {}", self.key, m),
            StoreErrorKind::VersionMismatch { stored, expected } => write!(
                f,
                "[{}] stored version {} does not match expected {}",
                self.key, stored, expected
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            StoreErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

// ─── Versioned envelope ──────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    v: u32,
    value: T,
}

pub(crate) fn encode<T: Serialize>(key: &str, version: u32, value: &T) -> Result<String, StoreError> {
    serde_json::to_string(&Envelope { v: version, value }).map_err(|e| StoreError {
        key: key.to_string(),
        kind: StoreErrorKind::Encode(e.to_string()),
    })
}

pub(crate) fn decode<T: DeserializeOwned>(key: &str, version: u32, raw: &str) -> Result<T, StoreError> {
    let env: Envelope<serde_json::Value> =
        serde_json::from_str(raw).map_err(|e| StoreError::decode(key, e.to_string()))?;

    if env.v != version {
        return Err(StoreError {
            key: key.to_string(),
            kind: StoreErrorKind::VersionMismatch {
                stored: env.v,
                expected: version,
            },
        });
    }

    serde_json::from_value(env.value).map_err(|e| StoreError::decode(key, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_roundtrip() {
        let raw = encode("k", 3, &vec![1u32, 2]).unwrap();
        assert_eq!(raw, r#"{"v":3,"value":[1,2]}"#);
        let back: Vec<u32> = decode("k", 3, &raw).unwrap();
        assert_eq!(back, vec![1, 2]);
    }

    #[test]
    fn version_mismatch_is_reported() {
        let raw = encode("k", 1, &"x").unwrap();
        let err = decode::<String>("k", 2, &raw).unwrap_err();
        assert!(matches!(
            err.kind,
            StoreErrorKind::VersionMismatch { stored: 1, expected: 2 }
        ));
        assert!(err.to_string().contains("[k]"));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode::<String>("theme", 1, "{not json").unwrap_err();
        assert!(matches!(err.kind, StoreErrorKind::Decode(_)));
    }
}
