use super::*;

#[test]
fn get_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get_item("absent"), None);
    assert!(store.is_empty());
}

#[test]
fn set_then_get_returns_latest_value() {
    let store = MemoryStore::new();
    store.set_item("k", "one");
    store.set_item("k", "two");
    assert_eq!(store.get_item("k").as_deref(), Some("two"));
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_absent_key_is_noop() {
    let store = MemoryStore::new();
    store.set_item("k", "v");
    store.remove_item("other");
    assert_eq!(store.len(), 1);
    store.remove_item("k");
    assert!(store.is_empty());
}

#[test]
fn clones_share_backing_map() {
    let tab_a = MemoryStore::new();
    let tab_b = tab_a.clone();
    tab_a.set_item("k", "v");
    assert_eq!(tab_b.get_item("k").as_deref(), Some("v"));
    tab_b.clear();
    assert!(tab_a.is_empty());
}
