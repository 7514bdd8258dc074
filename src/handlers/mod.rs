//! HTTP handlers for the pokemon collection.

pub mod pokemon;
pub use pokemon::*;
