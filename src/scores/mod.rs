//! Best-score persistence on top of a string key-value store.

pub mod best;
pub mod store;

pub use best::*;
pub use store::*;
