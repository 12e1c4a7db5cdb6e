//! In-memory provider/reader fakes shared by wallet tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use alloy_primitives::{Address, U256, hex};
use futures::channel::oneshot;

use super::{EventSink, ProviderEvent, WalletProvider};
use crate::config::ChainSpec;
use crate::contracts::ContractReader;
use crate::error::{ContractError, ProviderError};
use crate::state::shell::{Dispatch, ShellAction};

pub(crate) fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

/// Lowercase `0x` form, as providers report accounts.
pub(crate) fn account(byte: u8) -> String {
    hex::encode_prefixed(addr(byte).as_slice())
}

pub(crate) fn recorder() -> (Dispatch, Rc<RefCell<Vec<ShellAction>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (Rc::new(move |action| sink.borrow_mut().push(action)), log)
}

// =========================================================================
// FakeProvider
// =========================================================================

#[derive(Default)]
struct ProviderState {
    absent: Cell<bool>,
    switch_results: RefCell<VecDeque<Result<(), ProviderError>>>,
    switch_gate: RefCell<Option<oneshot::Receiver<()>>>,
    add_result: RefCell<Option<ProviderError>>,
    accounts: RefCell<Option<Result<Vec<String>, ProviderError>>>,
    calls: RefCell<Vec<String>>,
    sink: RefCell<Option<EventSink>>,
    live_subscriptions: Cell<usize>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeProvider {
    state: Rc<ProviderState>,
}

impl FakeProvider {
    pub(crate) fn with_accounts(accounts: &[String]) -> Self {
        let provider = Self::default();
        *provider.state.accounts.borrow_mut() = Some(Ok(accounts.to_vec()));
        provider
    }

    pub(crate) fn absent() -> Self {
        let provider = Self::default();
        provider.state.absent.set(true);
        provider
    }

    pub(crate) fn reject_accounts(&self, err: ProviderError) {
        *self.state.accounts.borrow_mut() = Some(Err(err));
    }

    /// Queue the result of the next `switch_chain`; unqueued calls succeed.
    pub(crate) fn push_switch(&self, result: Result<(), ProviderError>) {
        self.state.switch_results.borrow_mut().push_back(result);
    }

    /// Park the next `switch_chain`, like a wallet prompt left open, until the
    /// returned sender fires.
    pub(crate) fn hold_next_switch(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.state.switch_gate.borrow_mut() = Some(rx);
        tx
    }

    pub(crate) fn fail_add(&self, err: ProviderError) {
        *self.state.add_result.borrow_mut() = Some(err);
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state.calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.state.calls.borrow_mut().clear();
    }

    pub(crate) fn live_subscriptions(&self) -> usize {
        self.state.live_subscriptions.get()
    }

    /// Fire an event through the most recent subscription.
    pub(crate) fn emit(&self, event: ProviderEvent) {
        let sink = self.state.sink.borrow().clone();
        if let Some(sink) = sink {
            sink(event);
        }
    }

    fn record(&self, call: String) {
        self.state.calls.borrow_mut().push(call);
    }
}

pub(crate) struct FakeSubscription {
    state: Rc<ProviderState>,
}

impl Drop for FakeSubscription {
    fn drop(&mut self) {
        let live = self.state.live_subscriptions.get();
        self.state.live_subscriptions.set(live.saturating_sub(1));
    }
}

#[async_trait::async_trait(?Send)]
impl WalletProvider for FakeProvider {
    type Subscription = FakeSubscription;

    fn is_present(&self) -> bool {
        !self.state.absent.get()
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError> {
        self.record(format!("switch:{chain_id}"));
        let gate = self.state.switch_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.state.switch_results.borrow_mut().pop_front().unwrap_or(Ok(()))
    }

    async fn add_chain(&self, chain: &ChainSpec) -> Result<(), ProviderError> {
        self.record(format!("add:{}", chain.chain_id));
        match self.state.add_result.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.record("accounts".to_owned());
        self.state.accounts.borrow().clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    fn subscribe(&self, sink: EventSink) -> Result<Self::Subscription, ProviderError> {
        self.record("subscribe".to_owned());
        *self.state.sink.borrow_mut() = Some(sink);
        self.state.live_subscriptions.set(self.state.live_subscriptions.get() + 1);
        Ok(FakeSubscription { state: Rc::clone(&self.state) })
    }
}

// =========================================================================
// FakeReader
// =========================================================================

#[derive(Default)]
struct ReaderState {
    owner: Address,
    admin: Address,
    balances: RefCell<HashMap<Address, U256>>,
    failure: RefCell<Option<ContractError>>,
    reads: Cell<usize>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeReader {
    state: Rc<ReaderState>,
}

impl FakeReader {
    pub(crate) fn new(owner: Address, admin: Address) -> Self {
        Self { state: Rc::new(ReaderState { owner, admin, ..ReaderState::default() }) }
    }

    pub(crate) fn with_balance(self, holder: Address, balance: u64) -> Self {
        self.state.balances.borrow_mut().insert(holder, U256::from(balance));
        self
    }

    pub(crate) fn fail_with(&self, err: ContractError) {
        *self.state.failure.borrow_mut() = Some(err);
    }

    pub(crate) fn reads(&self) -> usize {
        self.state.reads.get()
    }

    /// Park the next `balance_of` until the returned sender fires.
    pub(crate) fn hold_next_balance(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.state.gate.borrow_mut() = Some(rx);
        tx
    }

    fn check(&self) -> Result<(), ContractError> {
        self.state.reads.set(self.state.reads.get() + 1);
        match self.state.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ContractReader for FakeReader {
    async fn balance_of(&self, holder: Address) -> Result<U256, ContractError> {
        let gate = self.state.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.check()?;
        Ok(self.state.balances.borrow().get(&holder).copied().unwrap_or(U256::ZERO))
    }

    async fn owner(&self) -> Result<Address, ContractError> {
        self.check()?;
        Ok(self.state.owner)
    }

    async fn admin(&self) -> Result<Address, ContractError> {
        self.check()?;
        Ok(self.state.admin)
    }
}
