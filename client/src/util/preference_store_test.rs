use super::*;

#[test]
fn memory_store_missing_key_is_unset() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), None);
}

#[test]
fn memory_store_overwrites_value() {
    let mut store = MemoryStore::with_entry("theme", "dark");
    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn memory_store_keys_are_independent() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark");
    store.set("other", "x");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(store.get("other").as_deref(), Some("x"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_outside_browser() {
    let mut storage = BrowserStorage;
    storage.set("theme", "dark");
    assert_eq!(storage.get("theme"), None);
}
