//! PokemonService: CRUD and identifier checks over the store.

mod crud;
pub mod validation;
pub use crud::PokemonService;
pub use validation::{check_range, parse_id, INVALID_ID_MESSAGE};
