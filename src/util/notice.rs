//! Blocking user notices for wallet failures.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::error::WalletError;

/// Report a wallet error: always logged, and shown as a blocking alert when
/// the error carries a user-facing notice.
pub fn report(err: &WalletError) {
    let line = describe(err);
    match err.notice() {
        Some(message) => {
            leptos::logging::warn!("{line}");
            show(message);
        }
        None => leptos::logging::log!("{line}"),
    }
}

/// Log line for `err`. A request the user dismissed in the wallet is not a
/// fault and is named as such.
pub fn describe(err: &WalletError) -> String {
    match err {
        WalletError::WalletConnectFailed(provider) | WalletError::ChainSwitchFailed(provider)
            if provider.is_user_rejected() =>
        {
            "wallet: request rejected in wallet".to_owned()
        }
        _ if err.retryable() => format!("wallet: {err} (retry with Connect Wallet)"),
        _ => format!("wallet: {err}"),
    }
}

fn show(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
