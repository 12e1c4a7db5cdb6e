use super::*;

#[test]
fn browser_storage_is_empty_outside_the_browser() {
    BrowserStorage.set("k", "v");
    assert_eq!(BrowserStorage.get("k"), None);
}

#[test]
fn json_round_trips_through_store() {
    let store = MemoryStore::default();
    save_json(&store, "prefs", &vec![1_u8, 2, 3]);
    assert_eq!(store.get("prefs").as_deref(), Some("[1,2,3]"));
    assert_eq!(load_json::<Vec<u8>>(&store, "prefs"), Some(vec![1, 2, 3]));
}

#[test]
fn load_json_ignores_garbage() {
    let store = MemoryStore::default();
    store.set("prefs", "{not json");
    assert_eq!(load_json::<Vec<u8>>(&store, "prefs"), None);
    assert_eq!(load_json::<Vec<u8>>(&store, "missing"), None);
}
