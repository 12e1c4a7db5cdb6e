//! `window.ethereum` binding for [`WalletProvider`].
//!
//! Requests go through the provider's `request({ method, params })` and are
//! awaited as promises. Rejections are converted into [`ProviderError`]s,
//! reading the EIP-1193 `code` and falling back to `data.originalError.code`,
//! which some mobile wallets use to wrap `4902`.

use std::rc::Rc;

use js_sys::{Function, JSON, Promise, Reflect};
use serde::de::DeserializeOwned;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::chain::{add_chain_params, switch_chain_params};
use super::{ACCOUNTS_CHANGED, CHAIN_CHANGED, EventSink, ProviderEvent, WalletProvider};
use crate::config::ChainSpec;
use crate::error::ProviderError;

/// The wallet extension injected at `window.ethereum`, looked up per call so
/// a late-injecting extension is still found.
#[derive(Clone, Copy, Debug, Default)]
pub struct Eip1193Provider;

impl Eip1193Provider {
    fn ethereum() -> Option<JsValue> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        (!value.is_undefined() && !value.is_null()).then_some(value)
    }

    async fn request(&self, method: &str, params: serde_json::Value) -> Result<JsValue, ProviderError> {
        let ethereum = Self::ethereum().ok_or_else(|| ProviderError::uncoded("no wallet provider injected"))?;
        let request = method_of(&ethereum, "request")?;
        let args = to_js(&serde_json::json!({ "method": method, "params": params }))?;
        let pending = request.call1(&ethereum, &args).map_err(provider_error)?;
        let promise: Promise = pending
            .dyn_into()
            .map_err(|_| ProviderError::uncoded(format!("{method} did not return a promise")))?;
        JsFuture::from(promise).await.map_err(provider_error)
    }
}

/// Listeners registered by [`Eip1193Provider::subscribe`]; removed on drop.
pub struct ProviderSubscription {
    ethereum: JsValue,
    listeners: Vec<(&'static str, Closure<dyn Fn(JsValue)>)>,
}

impl Drop for ProviderSubscription {
    fn drop(&mut self) {
        let Ok(remove) = method_of(&self.ethereum, "removeListener") else {
            return;
        };
        for (event, listener) in &self.listeners {
            let _ = remove.call2(&self.ethereum, &JsValue::from_str(event), listener.as_ref());
        }
    }
}

#[async_trait::async_trait(?Send)]
impl WalletProvider for Eip1193Provider {
    type Subscription = ProviderSubscription;

    fn is_present(&self) -> bool {
        Self::ethereum().is_some()
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError> {
        self.request("wallet_switchEthereumChain", switch_chain_params(chain_id))
            .await
            .map(|_| ())
    }

    async fn add_chain(&self, chain: &ChainSpec) -> Result<(), ProviderError> {
        self.request("wallet_addEthereumChain", add_chain_params(chain))
            .await
            .map(|_| ())
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        let accounts = self.request("eth_requestAccounts", serde_json::json!([])).await?;
        from_js(&accounts)
    }

    fn subscribe(&self, sink: EventSink) -> Result<Self::Subscription, ProviderError> {
        let ethereum = Self::ethereum().ok_or_else(|| ProviderError::uncoded("no wallet provider injected"))?;
        let on = method_of(&ethereum, "on")?;

        let accounts_sink = Rc::clone(&sink);
        let on_accounts = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
            match from_js::<Vec<String>>(&value) {
                Ok(accounts) => accounts_sink(ProviderEvent::AccountsChanged(accounts)),
                Err(err) => leptos::logging::warn!("ignoring {ACCOUNTS_CHANGED}: {err}"),
            }
        });
        let on_chain = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| match value.as_string() {
            Some(chain_id) => sink(ProviderEvent::ChainChanged(chain_id)),
            None => leptos::logging::warn!("ignoring {CHAIN_CHANGED}: non-string chain id"),
        });

        // Built before registering so a failed `on` still unregisters the rest.
        let subscription = ProviderSubscription {
            ethereum: ethereum.clone(),
            listeners: vec![(ACCOUNTS_CHANGED, on_accounts), (CHAIN_CHANGED, on_chain)],
        };
        for (event, listener) in &subscription.listeners {
            on.call2(&ethereum, &JsValue::from_str(event), listener.as_ref())
                .map_err(provider_error)?;
        }
        Ok(subscription)
    }
}

fn method_of(target: &JsValue, name: &str) -> Result<Function, ProviderError> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(provider_error)?
        .dyn_into::<Function>()
        .map_err(|_| ProviderError::uncoded(format!("provider has no {name}()")))
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, ProviderError> {
    JSON::parse(&value.to_string()).map_err(provider_error)
}

fn from_js<T: DeserializeOwned>(value: &JsValue) -> Result<T, ProviderError> {
    let text: String = JSON::stringify(value).map_err(provider_error)?.into();
    serde_json::from_str(&text).map_err(|e| ProviderError::uncoded(format!("unexpected provider payload: {e}")))
}

fn provider_error(value: JsValue) -> ProviderError {
    let code = js_code(&value).or_else(|| {
        Reflect::get(&value, &JsValue::from_str("data"))
            .ok()
            .and_then(|data| Reflect::get(&data, &JsValue::from_str("originalError")).ok())
            .and_then(|original| js_code(&original))
    });
    let message = Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "wallet request failed".to_owned());
    ProviderError { code, message }
}

#[allow(clippy::cast_possible_truncation)]
fn js_code(value: &JsValue) -> Option<i64> {
    Reflect::get(value, &JsValue::from_str("code")).ok()?.as_f64().map(|c| c as i64)
}
