//! Wallet session record: connected account and its derived role.
//!
//! DESIGN
//! ======
//! `role` is a cached projection of `account` and the contract state at the
//! time of resolution. Clearing the account always resets it to GUEST.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Privilege tier shown next to the account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    Guest,
    Member,
    Admin,
    Owner,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Guest => "GUEST",
            Self::Member => "MEMBER",
            Self::Admin => "ADMIN",
            Self::Owner => "OWNER",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The currently connected account, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Account as reported by the provider; empty when disconnected.
    pub account: String,
    pub is_connected: bool,
    pub role: Role,
}

impl Session {
    /// Switch to `account`. A different account drops back to GUEST until its
    /// role is resolved; the same account keeps its role.
    pub fn set_account(&mut self, account: impl Into<String>) {
        let account = account.into();
        if account != self.account {
            self.role = Role::Guest;
        }
        self.is_connected = !account.is_empty();
        self.account = account;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
