//! Application-shell state and the actions that mutate it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wallet session and the theme toggle never touch shared state directly.
//! They emit `ShellAction` values, and the owner of the `RwSignal<ShellState>`
//! folds them in with [`ShellState::apply`].

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::rc::Rc;

use crate::state::session::{Role, Session};
use crate::util::theme::ThemeMode;

/// Typed replacement for the shell's `SET_*` store actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellAction {
    SetTheme(ThemeMode),
    /// Empty string means disconnected.
    SetAccount(String),
    SetPosition(Role),
}

impl ShellAction {
    /// Store action name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetTheme(_) => "SET_THEME",
            Self::SetAccount(_) => "SET_ACCOUNT",
            Self::SetPosition(_) => "SET_POSITION",
        }
    }
}

/// Sink the wallet session emits actions into.
pub type Dispatch = Rc<dyn Fn(ShellAction)>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    pub theme: ThemeMode,
    pub session: Session,
}

impl ShellState {
    pub fn with_theme(theme: ThemeMode) -> Self {
        Self { theme, session: Session::default() }
    }

    pub fn apply(&mut self, action: ShellAction) {
        match action {
            ShellAction::SetTheme(mode) => self.theme = mode,
            ShellAction::SetAccount(account) => self.session.set_account(account),
            ShellAction::SetPosition(role) => self.session.role = role,
        }
    }
}
