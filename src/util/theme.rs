//! Theme preference: read at startup, applied to `<html data-theme>`, and
//! persisted on every toggle.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op to keep
//! server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::shell::ShellAction;
use crate::util::storage::{PreferenceStore, load_json, save_json};

pub const THEME_STORAGE_KEY: &str = "vegan-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Read the stored preference, falling back to the system color scheme.
pub fn read_preference(store: &impl PreferenceStore) -> ThemeMode {
    if let Some(mode) = load_json::<ThemeMode>(store, THEME_STORAGE_KEY) {
        return mode;
    }
    // Older builds wrote the bare string.
    match store.get(THEME_STORAGE_KEY).as_deref() {
        Some("dark") => return ThemeMode::Dark,
        Some("light") => return ThemeMode::Light,
        _ => {}
    }
    if system_prefers_dark() { ThemeMode::Dark } else { ThemeMode::Light }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", mode.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Set the theme: apply it to the document, persist it, and return the
/// action that updates shell state.
pub fn set_theme_preference(store: &impl PreferenceStore, mode: ThemeMode) -> ShellAction {
    apply(mode);
    save_json(store, THEME_STORAGE_KEY, &mode);
    ShellAction::SetTheme(mode)
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
