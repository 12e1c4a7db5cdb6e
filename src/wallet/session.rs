//! Wallet session: connect, follow provider events, keep the role current.
//!
//! ARCHITECTURE
//! ============
//! `WalletSession` owns the [`Session`] record and never touches shared UI
//! state; every change is emitted as a [`ShellAction`] through `dispatch`.
//! Provider listeners only push into an mpsc channel. The receiver returned
//! by [`WalletSession::new`] is drained by [`WalletSession::drain_events`]:
//! events start in arrival order but run concurrently, so a chain switch-back
//! waiting on a wallet prompt never holds back a later account change.
//!
//! CONCURRENCY
//! ===========
//! - One connect at a time; a second request while one is in flight returns
//!   `ConnectInProgress`.
//! - Every account change bumps `generation` before its first await. A role
//!   resolution that finishes after a newer account change is discarded
//!   instead of overwriting it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use futures::channel::mpsc;
use futures::{Stream, StreamExt};

use super::chain::{self, chain_id_hex};
use super::role::resolve_role;
use super::{EventSink, ProviderEvent, WalletProvider};
use crate::config::ChainSpec;
use crate::contracts::ContractReader;
use crate::error::{ProviderError, WalletError};
use crate::state::session::{Role, Session};
use crate::state::shell::{Dispatch, ShellAction};

/// Clears the in-flight flag when a connect attempt ends, however it ends.
struct InFlight<'a>(&'a Cell<bool>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct WalletSession<P: WalletProvider, R> {
    provider: P,
    reader: R,
    chain: ChainSpec,
    dispatch: Dispatch,
    session: RefCell<Session>,
    generation: Cell<u64>,
    connecting: Cell<bool>,
    subscription: RefCell<Option<P::Subscription>>,
    events: mpsc::UnboundedSender<ProviderEvent>,
}

impl<P, R> WalletSession<P, R>
where
    P: WalletProvider,
    R: ContractReader,
{
    /// Create a disconnected session and the receiver its provider events
    /// will arrive on.
    pub fn new(
        provider: P,
        reader: R,
        chain: ChainSpec,
        dispatch: Dispatch,
    ) -> (Self, mpsc::UnboundedReceiver<ProviderEvent>) {
        let (events, rx) = mpsc::unbounded();
        let session = Self {
            provider,
            reader,
            chain,
            dispatch,
            session: RefCell::new(Session::default()),
            generation: Cell::new(0),
            connecting: Cell::new(false),
            subscription: RefCell::new(None),
            events,
        };
        (session, rx)
    }

    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    /// Connect the injected wallet.
    ///
    /// Switches (or adds) the target chain on a best-effort basis, requests
    /// account access, resolves the first account's role, and subscribes to
    /// provider events. Re-connecting replaces the previous subscription.
    ///
    /// # Errors
    ///
    /// - [`WalletError::ConnectInProgress`] if another connect is running.
    /// - [`WalletError::NoWalletDetected`] if no provider is injected.
    /// - [`WalletError::WalletConnectFailed`] if account access is refused,
    ///   fails, or yields no accounts. The session is left unchanged.
    pub async fn connect(&self) -> Result<Session, WalletError> {
        if self.connecting.replace(true) {
            return Err(WalletError::ConnectInProgress);
        }
        let _in_flight = InFlight(&self.connecting);

        if !self.provider.is_present() {
            return Err(WalletError::NoWalletDetected);
        }

        match chain::ensure_target_chain(&self.provider, &self.chain).await {
            Ok(outcome) => leptos::logging::log!("wallet on chain {} ({outcome:?})", chain_id_hex(self.chain.chain_id)),
            Err(err) => leptos::logging::warn!("{err}; connecting anyway"),
        }

        let accounts = self
            .provider
            .request_accounts()
            .await
            .map_err(WalletError::WalletConnectFailed)?;
        let Some(account) = accounts.into_iter().next() else {
            return Err(WalletError::WalletConnectFailed(ProviderError::uncoded("provider returned no accounts")));
        };

        self.subscribe();
        self.switch_account(account).await;
        Ok(self.session())
    }

    /// Handle provider events until the stream ends or the session is gone.
    pub async fn drain_events(session: Weak<Self>, events: impl Stream<Item = ProviderEvent>) {
        events
            .for_each_concurrent(None, |event| {
                let session = session.upgrade();
                async move {
                    if let Some(session) = session {
                        session.handle_event(event).await;
                    }
                }
            })
            .await;
    }

    /// React to one provider event.
    pub async fn handle_event(&self, event: ProviderEvent) {
        match event {
            ProviderEvent::AccountsChanged(accounts) => self.handle_accounts_changed(accounts).await,
            ProviderEvent::ChainChanged(chain_id) => self.handle_chain_changed(&chain_id).await,
        }
    }

    /// Follow the wallet's account list: first entry becomes the account, an
    /// empty list disconnects without any contract read.
    pub async fn handle_accounts_changed(&self, accounts: Vec<String>) {
        match accounts.into_iter().next() {
            Some(account) => self.switch_account(account).await,
            None => self.clear_account(),
        }
    }

    /// Pull the wallet back to the configured chain.
    pub async fn handle_chain_changed(&self, chain_id: &str) {
        if chain::is_target_chain(chain_id, self.chain.chain_id) {
            return;
        }
        leptos::logging::log!("wallet moved to chain {chain_id}; switching back");
        if let Err(err) = self.provider.switch_chain(self.chain.chain_id).await {
            leptos::logging::warn!("switch back to {} failed: {err}", chain_id_hex(self.chain.chain_id));
        }
    }

    /// Remove the provider listeners.
    pub fn release(&self) {
        if self.subscription.borrow_mut().take().is_some() {
            leptos::logging::log!("wallet listeners released");
        }
    }

    fn subscribe(&self) {
        self.release();
        let events = self.events.clone();
        let sink: EventSink = Rc::new(move |event| {
            if events.unbounded_send(event).is_err() {
                leptos::logging::warn!("wallet event dropped: session is gone");
            }
        });
        match self.provider.subscribe(sink) {
            Ok(subscription) => *self.subscription.borrow_mut() = Some(subscription),
            Err(err) => leptos::logging::warn!("wallet events unavailable: {err}"),
        }
    }

    async fn switch_account(&self, account: String) {
        let generation = self.next_generation();
        self.session.borrow_mut().set_account(account.clone());
        self.emit(ShellAction::SetAccount(account.clone()));

        let role = match resolve_role(&self.reader, &account).await {
            Ok(role) => role,
            Err(err) => {
                leptos::logging::warn!("{err}; showing {account} as {}", Role::Guest);
                Role::Guest
            }
        };

        if self.generation.get() != generation {
            leptos::logging::log!("role for {account} superseded by a newer account change");
            return;
        }
        self.session.borrow_mut().role = role;
        self.emit(ShellAction::SetPosition(role));
    }

    fn clear_account(&self) {
        self.next_generation();
        self.session.borrow_mut().clear();
        self.emit(ShellAction::SetAccount(String::new()));
        self.emit(ShellAction::SetPosition(Role::Guest));
    }

    fn next_generation(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    fn emit(&self, action: ShellAction) {
        (self.dispatch)(action);
    }
}
