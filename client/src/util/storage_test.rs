use super::*;

fn record() -> SessionRecord {
    SessionRecord { token: "jwt.token".to_owned(), user_id: "42".to_owned(), username: "alice".to_owned() }
}

fn stores() -> SessionStores<MemoryStore> {
    SessionStores::new(MemoryStore::new(), MemoryStore::new())
}

fn assert_holds_record(store: &MemoryStore) {
    assert_eq!(store.get_item(TOKEN_KEY).unwrap().as_deref(), Some("jwt.token"));
    assert_eq!(store.get_item(USER_ID_KEY).unwrap().as_deref(), Some("42"));
    assert_eq!(store.get_item(USERNAME_KEY).unwrap().as_deref(), Some("alice"));
    assert_eq!(store.len(), 3);
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_clones_share_items() {
    let store = MemoryStore::new();
    let alias = store.clone();
    alias.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
    store.clear().unwrap();
    assert!(alias.is_empty());
}

// =============================================================
// SessionStores::persist
// =============================================================

#[test]
fn remember_writes_durable_and_clears_session() {
    let stores = stores();
    stores.session().set_item("token", "stale").unwrap();

    stores.persist(&record(), true).unwrap();

    assert_holds_record(stores.durable());
    assert!(stores.session().is_empty());
}

#[test]
fn forget_writes_session_and_clears_durable() {
    let stores = stores();
    stores.durable().set_item("token", "stale").unwrap();
    stores.durable().set_item("cart", "sku-1").unwrap();

    stores.persist(&record(), false).unwrap();

    assert_holds_record(stores.session());
    assert!(stores.durable().is_empty());
}

#[test]
fn exactly_one_tier_populated_after_switching_modes() {
    let stores = stores();
    for remember in [true, false, false, true] {
        stores.persist(&record(), remember).unwrap();
        assert_ne!(stores.durable().is_empty(), stores.session().is_empty());
        assert_eq!(stores.durable().is_empty(), !remember);
    }
}

// =============================================================
// SessionStores::load
// =============================================================

#[test]
fn load_returns_none_when_empty() {
    assert_eq!(stores().load().unwrap(), None);
}

#[test]
fn load_reads_whichever_tier_holds_record() {
    let stores = stores();
    stores.persist(&record(), false).unwrap();
    assert_eq!(stores.load().unwrap(), Some(record()));
    stores.persist(&record(), true).unwrap();
    assert_eq!(stores.load().unwrap(), Some(record()));
}

#[test]
fn load_ignores_partial_record() {
    let stores = stores();
    stores.durable().set_item(TOKEN_KEY, "t").unwrap();
    assert_eq!(stores.load().unwrap(), None);
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_in_native_tests() {
    let local = BrowserStorage::local();
    assert_eq!(local.get_item(TOKEN_KEY), Err(LoginError::Unavailable));
    assert_eq!(local.set_item(TOKEN_KEY, "t"), Err(LoginError::Unavailable));
    assert_eq!(BrowserStorage::session().clear(), Err(LoginError::Unavailable));
}
