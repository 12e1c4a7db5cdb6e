//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the wallet-owned record of the connected account; `shell` is
//! the application-wide projection that components read and that only changes
//! through typed actions.

pub mod session;
pub mod shell;
