use schema::{MovementKind, PokemonType};
use serde::{Deserialize, Serialize};

/// An attack a combatant can play on its turn. Pure data: the battle
/// driver interprets `power` and `accuracy` when it resolves a turn, the
/// core only hands movements around. The core never mutates a movement
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub name: String,
    pub description: String,
    pub pokemon_type: PokemonType,
    pub kind: MovementKind,
    pub power: u32,
    /// Display string such as "100%"; the core does not parse it.
    pub accuracy: String,
    pub pp: u32,
}

impl Movement {
    pub fn new(
        name: String,
        description: String,
        pokemon_type: PokemonType,
        kind: MovementKind,
        power: u32,
        accuracy: String,
        pp: u32,
    ) -> Self {
        Movement {
            name,
            description,
            pokemon_type,
            kind,
            power,
            accuracy,
            pp,
        }
    }
}
