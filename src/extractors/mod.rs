pub mod pokemon_id;

pub use pokemon_id::PokemonId;
