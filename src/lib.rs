//! Battle Core
//!
//! Entities for a turn-based creature battle: combatants with derived
//! battle statistics, attack movements, teams, and a pluggable strategy for
//! choosing which movement a combatant plays on its turn. Turn resolution,
//! damage formulas and data loading live in an external battle driver; this
//! crate owns the entities that driver consumes.

// --- MODULE DECLARATIONS ---
pub mod errors;
pub mod movement;
pub mod pokemon;
pub mod selector;
pub mod team;

// --- PUBLIC API RE-EXPORTS ---

// From the `schema` crate: the closed enumerations shared with data
// loaders and battle drivers.
pub use schema::{MovementKind, PokemonType};

// From this crate's modules.
pub use errors::{TeamResult, TeamValidationError};
pub use movement::Movement;
pub use pokemon::{BaseStats, Pokemon, Stat, StatStages};
pub use selector::{MoveSelector, RandomMoveSelector};
pub use team::{Team, MOVES_PER_POKEMON, TEAM_SIZE};
