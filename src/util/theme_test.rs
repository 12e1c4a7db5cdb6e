#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn toggled_inverts_mode() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
}

#[test]
fn read_preference_defaults_to_light_without_stored_value() {
    let store = MemoryStore::default();
    assert_eq!(read_preference(&store), ThemeMode::Light);
}

#[test]
fn set_theme_preference_persists_json_and_returns_action() {
    let store = MemoryStore::default();
    let action = set_theme_preference(&store, ThemeMode::Dark);
    assert_eq!(action, ShellAction::SetTheme(ThemeMode::Dark));
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("\"dark\""));
    assert_eq!(read_preference(&store), ThemeMode::Dark);
}

#[test]
fn set_theme_preference_is_idempotent() {
    let store = MemoryStore::default();
    let first = set_theme_preference(&store, ThemeMode::Dark);
    let second = set_theme_preference(&store, ThemeMode::Dark);
    assert_eq!(first, second);
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("\"dark\""));
    assert_eq!(store.writes.get(), 2);
}

#[test]
fn latest_preference_wins() {
    let store = MemoryStore::default();
    set_theme_preference(&store, ThemeMode::Dark);
    set_theme_preference(&store, ThemeMode::Light);
    assert_eq!(read_preference(&store), ThemeMode::Light);
}

#[test]
fn read_preference_accepts_bare_strings() {
    let store = MemoryStore::default();
    store.set(THEME_STORAGE_KEY, "dark");
    assert_eq!(read_preference(&store), ThemeMode::Dark);
}

#[test]
fn read_preference_ignores_unknown_values() {
    let store = MemoryStore::default();
    store.set(THEME_STORAGE_KEY, "\"sepia\"");
    assert_eq!(read_preference(&store), ThemeMode::Light);
}
