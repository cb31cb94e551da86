use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("k"), None);
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k").as_deref(), Some("v"));
    storage.remove("k");
    assert_eq!(storage.get("k"), None);
}

#[test]
fn memory_storage_with_entry_is_seeded() {
    let storage = MemoryStorage::with_entry("auth-store", "{}");
    assert_eq!(storage.get("auth-store").as_deref(), Some("{}"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_inert_outside_browser() {
    let storage = LocalStorage;
    assert_eq!(storage.get("auth-store"), None);
    assert_eq!(storage.set("auth-store", "{}"), Err(StorageError::Unavailable));
    storage.remove("auth-store");
}
