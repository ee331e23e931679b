// Battle Core Schema - Shared type definitions
// This crate contains the closed enumerations consumed by the battle core:
// the type chart identifiers and the movement kinds. Keeping them in their
// own crate lets data loaders and battle drivers share them without pulling
// in the core itself.

// Re-export the main types
pub use move_types::*;
pub use pokemon_types::*;

pub mod move_types;
pub mod pokemon_types;
