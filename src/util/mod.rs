//! Utility helpers shared across the header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, media
//! queries, alerts) from component and wallet logic to keep those testable.

pub mod media;
pub mod notice;
pub mod storage;
pub mod theme;
