//! Viewport breakpoint tracking.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use leptos::prelude::*;

/// `sm` breakpoint: below it the header keeps only the menu and theme toggle.
pub const SMALL_QUERY: &str = "(min-width: 600px)";
/// `md` breakpoint: at or above it the title replaces the drawer trigger.
pub const WIDESCREEN_QUERY: &str = "(min-width: 900px)";

/// Width tier the header layout switches on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Viewport {
    /// Below `sm`.
    Compact,
    /// `sm` up to `md`.
    #[default]
    Narrow,
    /// `md` and wider.
    Wide,
}

impl Viewport {
    pub fn from_matches(small: bool, wide: bool) -> Self {
        match (small, wide) {
            (_, true) => Self::Wide,
            (true, false) => Self::Narrow,
            (false, false) => Self::Compact,
        }
    }

    pub fn is_wide(self) -> bool {
        self == Self::Wide
    }

    pub fn is_compact(self) -> bool {
        self == Self::Compact
    }
}

/// Reactive viewport tier.
///
/// Starts at [`Viewport::Narrow`] so server and first client render agree,
/// then follows both media queries' `change` events until the owning
/// component is disposed.
pub fn use_viewport() -> ReadSignal<Viewport> {
    let viewport = RwSignal::new(Viewport::default());

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        let window = web_sys::window();
        let query = |q: &str| window.as_ref().and_then(|w| w.match_media(q).ok().flatten());
        if let (Some(small), Some(wide)) = (query(SMALL_QUERY), query(WIDESCREEN_QUERY)) {
            let read = {
                let (small, wide) = (small.clone(), wide.clone());
                move || Viewport::from_matches(small.matches(), wide.matches())
            };
            viewport.set(read());
            let on_change = Closure::<dyn Fn()>::new(move || viewport.set(read()));
            for mql in [&small, &wide] {
                if mql
                    .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                    .is_err()
                {
                    leptos::logging::warn!("media query listener not installed for {}", mql.media());
                }
            }
            let listener = StoredValue::new_local((small, wide, on_change));
            on_cleanup(move || {
                listener.try_with_value(|(small, wide, on_change)| {
                    for mql in [small, wide] {
                        let _ = mql.remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
                    }
                });
            });
        } else {
            leptos::logging::warn!("matchMedia unavailable; keeping {:?} layout", Viewport::default());
        }
    }

    viewport.read_only()
}
