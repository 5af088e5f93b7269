use super::*;
use crate::storage::MemoryStore;

fn alice() -> User {
    User {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
    }
}

// =============================================================
// read_session / hydrate_session
// =============================================================

#[test]
fn empty_store_is_logged_out() {
    let store = MemoryStore::new();
    assert_eq!(hydrate_session(&store), Session::logged_out());
}

#[test]
fn profile_without_token_is_logged_out() {
    let store = MemoryStore::new();
    store.set_item(USER_INFO_KEY, r#"{"id":"u1","name":"Alice","email":"alice@example.com"}"#);
    let session = hydrate_session(&store);
    assert!(!session.is_logged_in);
    assert!(session.user.is_none());
}

#[test]
fn blank_token_is_logged_out() {
    let store = MemoryStore::new();
    store.set_item(ACCESS_TOKEN_KEY, "   ");
    assert!(!hydrate_session(&store).is_logged_in);
}

#[test]
fn token_without_profile_is_logged_in_anonymously() {
    let store = MemoryStore::new();
    store.set_item(ACCESS_TOKEN_KEY, "tok");
    let session = hydrate_session(&store);
    assert!(session.is_logged_in);
    assert!(session.user.is_none());
    assert_eq!(session.user_name(), None);
}

#[test]
fn token_and_profile_hydrate_user() {
    let store = MemoryStore::new();
    write_session(&store, "tok", &alice()).unwrap();
    let session = hydrate_session(&store);
    assert_eq!(session, Session::logged_in(Some(alice())));
    assert_eq!(session.user_name(), Some("Alice"));
}

#[test]
fn malformed_profile_is_an_error() {
    let store = MemoryStore::new();
    store.set_item(ACCESS_TOKEN_KEY, "tok");
    store.set_item(USER_INFO_KEY, "not json at all");
    assert!(matches!(read_session(&store), Err(SessionError::MalformedProfile(_))));
}

#[test]
fn malformed_profile_hydrates_logged_out() {
    let store = MemoryStore::new();
    store.set_item(ACCESS_TOKEN_KEY, "tok");
    store.set_item(USER_INFO_KEY, "{broken");
    let session = hydrate_session(&store);
    assert_eq!(session, Session { is_logged_in: false, user: None });
}

#[test]
fn profile_with_wrong_shape_hydrates_logged_out() {
    let store = MemoryStore::new();
    store.set_item(ACCESS_TOKEN_KEY, "tok");
    store.set_item(USER_INFO_KEY, r#"{"id":1}"#);
    assert!(!hydrate_session(&store).is_logged_in);
}

// =============================================================
// write_session / clear_session
// =============================================================

#[test]
fn write_session_trims_token() {
    let store = MemoryStore::new();
    write_session(&store, "  tok  ", &alice()).unwrap();
    assert_eq!(store.get_item(ACCESS_TOKEN_KEY).as_deref(), Some("tok"));
}

#[test]
fn write_session_rejects_blank_token_without_writing() {
    let store = MemoryStore::new();
    let err = write_session(&store, " ", &alice()).unwrap_err();
    assert!(matches!(err, SessionError::EmptyToken));
    assert!(store.is_empty());
}

#[test]
fn clear_session_removes_both_keys_only() {
    let store = MemoryStore::new();
    write_session(&store, "tok", &alice()).unwrap();
    store.set_item("unrelated", "keep");
    clear_session(&store);
    assert_eq!(store.get_item(ACCESS_TOKEN_KEY), None);
    assert_eq!(store.get_item(USER_INFO_KEY), None);
    assert_eq!(store.get_item("unrelated").as_deref(), Some("keep"));
}

// =============================================================
// is_session_key
// =============================================================

#[test]
fn session_keys_and_full_clear_are_relevant() {
    assert!(is_session_key(Some(ACCESS_TOKEN_KEY)));
    assert!(is_session_key(Some(USER_INFO_KEY)));
    assert!(is_session_key(None));
}

#[test]
fn unrelated_keys_are_ignored() {
    assert!(!is_session_key(Some("diaryDraft")));
}

#[test]
fn error_messages_are_descriptive() {
    assert_eq!(SessionError::EmptyToken.to_string(), "access token is empty");
}
