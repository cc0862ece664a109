//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `posts`, `reader`) so components can
//! depend on small focused models. Each model is plain data with pure
//! transitions; components hold them in `RwSignal`s provided via context.

pub mod posts;
pub mod reader;
pub mod theme;
