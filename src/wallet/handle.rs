//! Leptos wiring for the page's wallet session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` installs one [`WalletHandle`] and provides it via context; the header
//! calls [`WalletHandle::connect`] from its button. Session actions are folded
//! into the shared `RwSignal<ShellState>`.

#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::state::shell::ShellState;

#[cfg(feature = "hydrate")]
type BrowserSession = super::session::WalletSession<super::browser::Eip1193Provider, crate::contracts::rpc::JsonRpcReader>;

/// Copyable handle to the browser wallet session.
///
/// Without `hydrate` there is no provider to talk to and the handle is inert.
#[derive(Clone, Copy)]
pub struct WalletHandle {
    #[cfg(feature = "hydrate")]
    session: StoredValue<Rc<BrowserSession>, LocalStorage>,
}

impl WalletHandle {
    /// Create the session, start draining provider events, and release the
    /// provider listeners when the owning reactive scope is disposed.
    pub fn install(config: &AppConfig, shell: RwSignal<ShellState>) -> Self {
        #[cfg(feature = "hydrate")]
        {
            use crate::contracts::rpc::JsonRpcReader;
            use crate::state::shell::{Dispatch, ShellAction};

            let dispatch: Dispatch = Rc::new(move |action: ShellAction| {
                leptos::logging::log!("shell action {}", action.kind());
                shell.update(|s| s.apply(action));
            });
            let reader = JsonRpcReader::new(config.rpc_url.clone(), config.contracts);
            leptos::logging::log!("contract reads via {}", reader.rpc_url());
            let (session, events) = super::session::WalletSession::new(
                super::browser::Eip1193Provider,
                reader,
                config.chain.clone(),
                dispatch,
            );
            let session = Rc::new(session);

            // Ends once the session (and with it every event sender) is dropped.
            leptos::task::spawn_local(BrowserSession::drain_events(Rc::downgrade(&session), events));

            let session = StoredValue::new_local(session);
            on_cleanup(move || {
                session.try_with_value(|s| s.release());
            });
            Self { session }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, shell);
            Self {}
        }
    }

    /// Start a connect attempt. Failures are reported through
    /// [`crate::util::notice::report`].
    pub fn connect(self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(session) = self.session.try_get_value() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match session.connect().await {
                    Ok(state) => leptos::logging::log!("wallet connected: {} as {}", state.account, state.role),
                    Err(err) => crate::util::notice::report(&err),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = self;
        }
    }
}
