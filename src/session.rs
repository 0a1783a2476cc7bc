//! Device-local session store.
//!
//! A flat JSON file of key → blob, holding the logged-in user, favorite
//! stations, and preferred language. Every write is flushed to disk
//! immediately. Nothing is synced anywhere.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::logging::{self, Component};
use crate::model::{MarineError, Role, UserSession};

pub const SESSION_KEY: &str = "marine_user_session";
pub const FAVORITES_KEY: &str = "marine_favorites";
pub const LANGUAGE_KEY: &str = "preferred-language";

pub const DEFAULT_HOME_LOCATION: &str = "Visakhapatnam Coast";

// ---------------------------------------------------------------------------
// Key-value store
// ---------------------------------------------------------------------------

pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, serde_json::Value>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MarineError> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)
                .map_err(|e| MarineError::Store(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(MarineError::Store(format!("{}: {}", path.display(), e))),
        };
        Ok(Self { path, entries })
    }

    /// Reads and decodes `key`. An undecodable blob is logged and treated as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.entries.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                logging::warn(Component::Store, None, &format!("Failed to decode '{}': {}", key, e));
                None
            }
        }
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), MarineError> {
        let encoded = serde_json::to_value(value)?;
        self.entries.insert(key.to_string(), encoded);
        self.flush()
    }

    pub fn remove(&mut self, key: &str) -> Result<(), MarineError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), MarineError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| MarineError::Store(format!("{}: {}", parent.display(), e)))?;
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, text)
            .map_err(|e| MarineError::Store(format!("{}: {}", self.path.display(), e)))
    }
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// A name/phone pair granted the admin role at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminIdentity {
    pub name: String,
    pub phone: String,
}

/// Role for a login: admin when name (case-insensitive) and phone (exact)
/// match a configured identity.
pub fn role_for(name: &str, phone: &str, admins: &[AdminIdentity]) -> Role {
    let is_admin = admins
        .iter()
        .any(|a| a.name.trim().eq_ignore_ascii_case(name.trim()) && a.phone.trim() == phone.trim());
    if is_admin { Role::Admin } else { Role::User }
}

/// Creates and persists a session. Name and phone are required.
pub fn login(
    store: &mut FileStore,
    name: &str,
    phone: &str,
    location: Option<&str>,
    admins: &[AdminIdentity],
) -> Result<UserSession, MarineError> {
    let (name, phone) = (name.trim(), phone.trim());
    if name.is_empty() || phone.is_empty() {
        return Err(MarineError::MissingCredentials);
    }

    let session = UserSession {
        name: name.to_string(),
        phone: phone.to_string(),
        role: role_for(name, phone, admins),
        location: Some(
            location
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .unwrap_or(DEFAULT_HOME_LOCATION)
                .to_string(),
        ),
    };
    store.set(SESSION_KEY, &session)?;
    logging::info(Component::Store, None, &format!("Logged in as {}", session.name));
    Ok(session)
}

pub fn logout(store: &mut FileStore) -> Result<(), MarineError> {
    store.remove(SESSION_KEY)
}

pub fn current_user(store: &FileStore) -> Option<UserSession> {
    store.get(SESSION_KEY)
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

pub fn favorites(store: &FileStore) -> Vec<String> {
    store.get(FAVORITES_KEY).unwrap_or_default()
}

pub fn is_favorite(store: &FileStore, location_id: &str) -> bool {
    favorites(store).iter().any(|id| id == location_id)
}

/// Adds or removes `location_id`. Returns whether it is now a favorite.
pub fn toggle_favorite(store: &mut FileStore, location_id: &str) -> Result<bool, MarineError> {
    let mut ids = favorites(store);
    let now_favorite = if let Some(pos) = ids.iter().position(|id| id == location_id) {
        ids.remove(pos);
        false
    } else {
        ids.push(location_id.to_string());
        true
    };
    store.set(FAVORITES_KEY, &ids)?;
    Ok(now_favorite)
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

pub fn preferred_language(store: &FileStore) -> Language {
    store
        .get::<String>(LANGUAGE_KEY)
        .map(|code| Language::from_code_or_default(&code))
        .unwrap_or_default()
}

pub fn set_preferred_language(store: &mut FileStore, language: Language) -> Result<(), MarineError> {
    store.set(LANGUAGE_KEY, &language.code())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FileStore::open(dir.path().join("store.json")).expect("empty store opens");
        (dir, store)
    }

    fn admins() -> Vec<AdminIdentity> {
        vec![AdminIdentity {
            name: "Harbor Master".to_string(),
            phone: "9000000001".to_string(),
        }]
    }

    #[test]
    fn test_login_requires_name_and_phone() {
        let (_dir, mut store) = temp_store();
        assert_eq!(
            login(&mut store, "  ", "9876543210", None, &[]),
            Err(MarineError::MissingCredentials)
        );
        assert_eq!(
            login(&mut store, "Ravi", "", None, &[]),
            Err(MarineError::MissingCredentials)
        );
        assert!(current_user(&store).is_none());
    }

    #[test]
    fn test_login_defaults_location_and_user_role() {
        let (_dir, mut store) = temp_store();
        let session = login(&mut store, "Ravi", "9876543210", None, &admins()).unwrap();
        assert_eq!(session.role, Role::User);
        assert_eq!(session.location.as_deref(), Some(DEFAULT_HOME_LOCATION));
        assert_eq!(current_user(&store), Some(session));
    }

    #[test]
    fn test_admin_match_is_case_insensitive_on_name_only() {
        assert_eq!(role_for("harbor master", "9000000001", &admins()), Role::Admin);
        assert_eq!(role_for("Harbor Master", "9000000002", &admins()), Role::User);
        assert_eq!(role_for("Harbor Master", "9000000001", &[]), Role::User);
    }

    #[test]
    fn test_logout_clears_session() {
        let (_dir, mut store) = temp_store();
        login(&mut store, "Ravi", "9876543210", Some("Kochi"), &[]).unwrap();
        logout(&mut store).unwrap();
        assert!(current_user(&store).is_none());
        // Logging out twice is harmless.
        logout(&mut store).unwrap();
    }

    #[test]
    fn test_toggle_favorite_adds_then_removes() {
        let (_dir, mut store) = temp_store();
        assert!(toggle_favorite(&mut store, "kochi").unwrap());
        assert!(toggle_favorite(&mut store, "puri").unwrap());
        assert!(is_favorite(&store, "kochi"));
        assert!(!toggle_favorite(&mut store, "kochi").unwrap());
        assert_eq!(favorites(&store), vec!["puri".to_string()]);
    }

    #[test]
    fn test_language_defaults_to_english_and_persists() {
        let (_dir, mut store) = temp_store();
        assert_eq!(preferred_language(&store), Language::En);
        set_preferred_language(&mut store, Language::Te).unwrap();
        assert_eq!(preferred_language(&store), Language::Te);
    }

    #[test]
    fn test_unknown_stored_language_falls_back_to_english() {
        let (_dir, mut store) = temp_store();
        store.set(LANGUAGE_KEY, &"xx").unwrap();
        assert_eq!(preferred_language(&store), Language::En);
    }

    #[test]
    fn test_corrupt_blob_is_treated_as_absent() {
        let (_dir, mut store) = temp_store();
        store.set(FAVORITES_KEY, &42).unwrap();
        assert!(favorites(&store).is_empty());
    }

    #[test]
    fn test_corrupt_file_is_a_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(FileStore::open(&path), Err(MarineError::Store(_))));
    }
}
