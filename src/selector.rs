use crate::movement::Movement;
use crate::pokemon::Pokemon;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Strategy for choosing the movement a combatant plays on its turn.
///
/// Contract: the returned movement must come from `attacker.moves`, and
/// `None` is only acceptable when the attacker has no movements. The
/// contract is behavioral, not type-level; `Team::check_move_selector`
/// exercises it against fixture combatants before a team enters battle.
pub trait MoveSelector {
    fn select_move(&mut self, attacker: &Pokemon, defender: &Pokemon) -> Option<Movement>;
}

/// Any closure of the right shape is a selector, so scripted and
/// test-only strategies stay one-liners.
impl<F> MoveSelector for F
where
    F: FnMut(&Pokemon, &Pokemon) -> Option<Movement>,
{
    fn select_move(&mut self, attacker: &Pokemon, defender: &Pokemon) -> Option<Movement> {
        self(attacker, defender)
    }
}

/// Default strategy: a fresh uniform draw from the attacker's movements on
/// every call, independent of the defender and of any battle state. Owns
/// its generator so tests can seed it.
#[derive(Debug, Clone)]
pub struct RandomMoveSelector {
    rng: StdRng,
}

impl RandomMoveSelector {
    pub fn new() -> Self {
        RandomMoveSelector {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        RandomMoveSelector {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomMoveSelector {
    fn select_move(&mut self, attacker: &Pokemon, _defender: &Pokemon) -> Option<Movement> {
        attacker.moves.choose(&mut self.rng).cloned()
    }
}
