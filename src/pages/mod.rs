//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns orchestration (fetching, navigation) and delegates
//! rendering details to `components`.

pub mod reader;
