//! Shared application state for all routes.

use crate::store::PokemonStore;

#[derive(Clone)]
pub struct AppState {
    /// Each handler checks out its own connection from here.
    pub store: PokemonStore,
}

impl AppState {
    pub fn new(store: PokemonStore) -> Self {
        AppState { store }
    }
}
