//! The single stored resource.

use serde::{Deserialize, Serialize};

/// One row of the `pokemon` table.
///
/// Every field defaults to its zero value when absent from a request body, so an
/// update with a partial payload overwrites omitted fields with `0` / `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Pokemon {
    pub id: i64,
    pub number: i64,
    pub name: String,
    pub sprite: String,
}

impl Pokemon {
    pub fn new(id: i64, number: i64, name: impl Into<String>, sprite: impl Into<String>) -> Self {
        Pokemon {
            id,
            number,
            name: name.into(),
            sprite: sprite.into(),
        }
    }
}
