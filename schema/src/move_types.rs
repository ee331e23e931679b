use serde::{Deserialize, Serialize};
use std::fmt;

/// How a movement deals its effect: physical and special movements carry
/// damage, status movements only manipulate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum MovementKind {
    Physical,
    Special,
    Status,
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
