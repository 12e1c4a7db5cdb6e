//! Page header: drawer trigger, brand, wallet connect, role badge, theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the `RwSignal<ShellState>` projection and the `WalletHandle` from
//! context. Everything it shows is derived by [`HeaderModel::new`], so the
//! render itself holds no logic.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::Session;
use crate::state::shell::ShellState;
use crate::util::media::{Viewport, use_viewport};
use crate::util::storage::BrowserStorage;
use crate::util::theme::{self, ThemeMode};
use crate::wallet::handle::WalletHandle;

pub const TITLE: &str = "Vegan Rob's DAO";

const ACCOUNT_PREFIX_CHARS: usize = 8;

/// Display state of the header for one `(theme, viewport, session)` input.
///
/// Below `sm` only the drawer trigger and theme toggle remain; the title
/// needs `md`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderModel {
    pub show_menu_trigger: bool,
    pub show_logo: bool,
    pub show_title: bool,
    /// Connect button and the account/role block.
    pub show_wallet: bool,
    pub logo_src: &'static str,
    pub connect_disabled: bool,
    /// `None` while disconnected.
    pub account_short: Option<String>,
    pub account_full: String,
    pub role_label: &'static str,
    pub toggle_icon: &'static str,
    /// Mode a click on the toggle switches to.
    pub toggle_target: ThemeMode,
}

impl HeaderModel {
    pub fn new(theme: ThemeMode, viewport: Viewport, session: &Session) -> Self {
        let (logo_src, toggle_icon) = match theme {
            ThemeMode::Dark => ("/images/logo_main_white.png", "/images/sun.png"),
            ThemeMode::Light => ("/images/logo_main.png", "/images/moon.png"),
        };
        Self {
            show_menu_trigger: !viewport.is_wide(),
            show_logo: !viewport.is_compact(),
            show_title: viewport.is_wide(),
            show_wallet: !viewport.is_compact(),
            logo_src,
            connect_disabled: session.is_connected,
            account_short: session.is_connected.then(|| truncate_account(&session.account)),
            account_full: session.account.clone(),
            role_label: session.role.as_str(),
            toggle_icon,
            toggle_target: theme.toggled(),
        }
    }
}

/// First eight characters followed by `...`.
pub fn truncate_account(account: &str) -> String {
    let prefix: String = account.chars().take(ACCOUNT_PREFIX_CHARS).collect();
    format!("{prefix}...")
}

/// Top bar of every page.
#[component]
pub fn Header(
    /// Opens the navigation drawer on narrow viewports.
    #[prop(into)]
    on_drawer_open: Callback<()>,
) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let wallet = expect_context::<WalletHandle>();
    let viewport = use_viewport();

    let model = Memo::new(move |_| shell.with(|s| HeaderModel::new(s.theme, viewport.get(), &s.session)));

    let on_toggle = move |_| {
        let next = model.get_untracked().toggle_target;
        let action = theme::set_theme_preference(&BrowserStorage, next);
        shell.update(|s| s.apply(action));
    };

    view! {
        <header class="header">
            <Show when=move || model.get().show_menu_trigger>
                <button class="btn header__menu" title="Open menu" on:click=move |_| on_drawer_open.run(())>
                    "☰"
                </button>
            </Show>

            <Show when=move || model.get().show_logo>
                <A href="/" attr:class="header__brand">
                    <img class="header__logo" src=move || model.get().logo_src alt="logo"/>
                </A>
            </Show>
            <Show when=move || model.get().show_title>
                <span class="header__title">{TITLE}</span>
            </Show>

            <span class="header__spacer"></span>

            <Show when=move || model.get().show_wallet>
                <button
                    class="btn header__connect"
                    disabled=move || model.get().connect_disabled
                    on:click=move |_| wallet.connect()
                >
                    "Connect Wallet"
                </button>

                {move || {
                    let m = model.get();
                    m.account_short.map(|short| {
                        view! {
                            <span class="header__account" title=m.account_full>{short}</span>
                        }
                    })
                }}
                <span class="header__role">{move || model.get().role_label}</span>
            </Show>

            <img
                class="header__theme-toggle"
                src=move || model.get().toggle_icon
                alt="Toggle theme"
                title="Toggle theme"
                on:click=on_toggle
            />
        </header>
    }
}
