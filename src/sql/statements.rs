//! Every statement issued against the `pokemon` table. Values are always bound, never formatted in.

pub const PING: &str = "SELECT 1";

pub const CREATE_POKEMON_TABLE: &str = concat!(
    "CREATE TABLE IF NOT EXISTS pokemon (",
    "id INTEGER PRIMARY KEY NOT NULL, ",
    "number INTEGER NOT NULL, ",
    "name TEXT NOT NULL, ",
    "sprite TEXT NOT NULL)",
);

pub const LIST_POKEMON: &str = "SELECT id, number, name, sprite FROM pokemon ORDER BY id";

pub const GET_POKEMON: &str = "SELECT id, number, name, sprite FROM pokemon WHERE id = ?";

pub const POKEMON_EXISTS: &str = "SELECT 1 FROM pokemon WHERE id = ?";

// NULL on an empty table.
pub const MAX_POKEMON_ID: &str = "SELECT MAX(id) FROM pokemon";

pub const COUNT_POKEMON: &str = "SELECT COUNT(*) FROM pokemon";

pub const INSERT_POKEMON: &str =
    "INSERT INTO pokemon (id, number, name, sprite) VALUES (?, ?, ?, ?)";

pub const UPDATE_POKEMON: &str = "UPDATE pokemon SET number = ?, name = ?, sprite = ? WHERE id = ?";

pub const DELETE_POKEMON: &str = "DELETE FROM pokemon WHERE id = ?";
