//! Browser localStorage helpers for the two persisted records.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal keeps exactly two keys: the remembered course
//! ([`CoursePreference::STORAGE_KEY`]) and the quiz history
//! ([`ProgressBook::STORAGE_KEY`]). Reads happen once on mount and writes
//! happen on explicit user actions. On the server every read is empty and
//! every write is dropped.

use curriculum::{CoursePreference, ProgressBook};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("discarding unreadable {key}: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("could not persist {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Drop `key` from `localStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

pub fn load_preference() -> CoursePreference {
    load_json(CoursePreference::STORAGE_KEY).unwrap_or_default()
}

pub fn save_preference(pref: &CoursePreference) {
    match pref.course {
        Some(_) => save_json(CoursePreference::STORAGE_KEY, pref),
        None => remove(CoursePreference::STORAGE_KEY),
    }
}

pub fn load_progress() -> ProgressBook {
    load_json(ProgressBook::STORAGE_KEY).unwrap_or_default()
}

pub fn save_progress(book: &ProgressBook) {
    save_json(ProgressBook::STORAGE_KEY, book);
}
