//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::{Header, TITLE};
use crate::config::AppConfig;
use crate::state::shell::ShellState;
use crate::util::storage::BrowserStorage;
use crate::util::theme;
use crate::wallet::handle::WalletHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the theme, provides the shell state and wallet handle, and mounts
/// the header above the routed page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env().unwrap_or_else(|err| {
        leptos::logging::error!("{err}; falling back to default chain and unset contracts");
        AppConfig::default()
    });

    let mode = theme::read_preference(&BrowserStorage);
    theme::apply(mode);
    let shell = RwSignal::new(ShellState::with_theme(mode));
    provide_context(shell);
    provide_context(WalletHandle::install(&config, shell));

    let drawer_open = RwSignal::new(false);

    view! {
        <Stylesheet id="leptos" href="/pkg/dao-header.css"/>
        <Title text=TITLE/>

        <Router>
            <Header on_drawer_open=move |()| drawer_open.set(true)/>
            <Show when=move || drawer_open.get()>
                <nav class="drawer">
                    <button class="btn drawer__close" on:click=move |_| drawer_open.set(false)>
                        "×"
                    </button>
                    <a href="/" on:click=move |_| drawer_open.set(false)>
                        "Home"
                    </a>
                </nav>
            </Show>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| ()/>
                </Routes>
            </main>
        </Router>
    }
}
