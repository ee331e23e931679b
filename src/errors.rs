use std::fmt;

/// Reasons a team fails validation. `Team::is_valid` collapses these to a
/// bool for callers that only want the predicate; `Team::validate` reports
/// the first rule broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamValidationError {
    /// Roster does not hold exactly the required number of combatants.
    RosterSize(usize),
    /// A combatant does not carry exactly the required number of movements.
    MoveCount { pokemon: String, count: usize },
    /// The bound selector answered with a movement outside the attacker's
    /// set (or with nothing at all).
    SelectorContract,
}

impl fmt::Display for TeamValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamValidationError::RosterSize(size) => {
                write!(f, "team has {} pokemon, expected exactly 6", size)
            }
            TeamValidationError::MoveCount { pokemon, count } => {
                write!(f, "{} has {} movements, expected exactly 4", pokemon, count)
            }
            TeamValidationError::SelectorContract => {
                write!(f, "move selector returned a movement the attacker does not know")
            }
        }
    }
}

impl std::error::Error for TeamValidationError {}

/// Type alias for Results using TeamValidationError
pub type TeamResult<T> = Result<T, TeamValidationError>;
