//! Utility helpers shared across reader modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure formatting
//! from page and component logic to improve reuse and testability.

pub mod date;
pub mod dom;
pub mod markup;
