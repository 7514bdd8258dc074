//! SQL text for the store: fixed statements with positional parameters.

mod statements;
pub use statements::*;
