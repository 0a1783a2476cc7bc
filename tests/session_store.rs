/// Integration tests for the device-local session store
///
/// These tests verify that login, favorites, and language preference
/// survive reopening the store file, the way they survive an app restart.
///
/// Run with: cargo test --test session_store

use seasafe_service::i18n::Language;
use seasafe_service::model::{MarineError, Role};
use seasafe_service::session::{self, AdminIdentity, FileStore, DEFAULT_HOME_LOCATION};

fn admins() -> Vec<AdminIdentity> {
    vec![AdminIdentity {
        name: "Harbor Master".to_string(),
        phone: "9000000001".to_string(),
    }]
}

#[test]
fn test_session_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("store.json");

    {
        let mut store = FileStore::open(&path).unwrap();
        let user = session::login(&mut store, "Harbor Master", "9000000001", Some("Kochi"), &admins()).unwrap();
        assert_eq!(user.role, Role::Admin);
        session::toggle_favorite(&mut store, "kochi").unwrap();
        session::set_preferred_language(&mut store, Language::Ml).unwrap();
    }

    let store = FileStore::open(&path).unwrap();
    let user = session::current_user(&store).expect("session survives reopen");
    assert_eq!(user.name, "Harbor Master");
    assert_eq!(user.location.as_deref(), Some("Kochi"));
    assert_eq!(session::favorites(&store), vec!["kochi".to_string()]);
    assert_eq!(session::preferred_language(&store), Language::Ml);
}

#[test]
fn test_logout_keeps_favorites_and_language() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut store = FileStore::open(&path).unwrap();
    session::login(&mut store, "Ravi", "9876543210", None, &[]).unwrap();
    session::toggle_favorite(&mut store, "puri").unwrap();
    session::set_preferred_language(&mut store, Language::Or).unwrap();
    session::logout(&mut store).unwrap();

    let store = FileStore::open(&path).unwrap();
    assert!(session::current_user(&store).is_none());
    assert!(session::is_favorite(&store, "puri"));
    assert_eq!(session::preferred_language(&store), Language::Or);
}

#[test]
fn test_relogin_replaces_previous_user() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path().join("store.json")).unwrap();

    session::login(&mut store, "Ravi", "9876543210", Some("Goa"), &[]).unwrap();
    let second = session::login(&mut store, "Meena", "9123456780", None, &[]).unwrap();

    assert_eq!(second.role, Role::User);
    assert_eq!(second.location.as_deref(), Some(DEFAULT_HOME_LOCATION));
    assert_eq!(session::current_user(&store), Some(second));
}

#[test]
fn test_blank_credentials_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path().join("store.json")).unwrap();
    assert_eq!(
        session::login(&mut store, "", "", None, &[]),
        Err(MarineError::MissingCredentials)
    );
}
