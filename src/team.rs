use crate::errors::{TeamResult, TeamValidationError};
use crate::movement::Movement;
use crate::pokemon::{BaseStats, Pokemon};
use crate::selector::{MoveSelector, RandomMoveSelector};
use schema::{MovementKind, PokemonType};
use std::fmt;

/// Combatants a battle-ready team fields.
pub const TEAM_SIZE: usize = 6;
/// Movements each combatant on a battle-ready team carries.
pub const MOVES_PER_POKEMON: usize = 4;

/// A roster of combatants plus the strategy that picks their moves. The
/// team is the sole holder of the selector; combatants never see it.
///
/// Construction performs no structural checks: a team may exist in an
/// invalid state, and validity is the queryable predicate [`Team::is_valid`]
/// (or [`Team::validate`] for the reason). Check it before handing the team
/// to a battle driver.
pub struct Team {
    pub name: String,
    pub pokemons: Vec<Pokemon>,
    selector: Box<dyn MoveSelector>,
}

impl Team {
    /// New team with the default random selector bound.
    pub fn new(name: String, pokemons: Vec<Pokemon>) -> Self {
        Team {
            name,
            pokemons,
            selector: Box::new(RandomMoveSelector::new()),
        }
    }

    /// New team with a caller-supplied strategy.
    pub fn with_selector(
        name: String,
        pokemons: Vec<Pokemon>,
        selector: Box<dyn MoveSelector>,
    ) -> Self {
        Team {
            name,
            pokemons,
            selector,
        }
    }

    /// A team is defeated only when its last combatant's hp reaches zero.
    pub fn is_defeated(&self) -> bool {
        self.pokemons.iter().all(|pokemon| !pokemon.is_alive())
    }

    /// First living combatant in roster order, `None` when none remain.
    /// Roster order defines who is active; there is no switch concept.
    pub fn active_pokemon(&self) -> Option<&Pokemon> {
        self.pokemons.iter().find(|pokemon| pokemon.is_alive())
    }

    /// Mutable access to the active combatant, for the driver applying
    /// damage or stage changes.
    pub fn active_pokemon_mut(&mut self) -> Option<&mut Pokemon> {
        self.pokemons.iter_mut().find(|pokemon| pokemon.is_alive())
    }

    pub fn count_alive(&self) -> usize {
        self.pokemons
            .iter()
            .filter(|pokemon| pokemon.is_alive())
            .count()
    }

    /// Restore every combatant to full health and neutral stages. Movement
    /// PP is not tracked as consumed, so there is nothing to restore there.
    pub fn reset(&mut self) {
        for pokemon in &mut self.pokemons {
            pokemon.restore();
        }
    }

    /// Replace the bound strategy. Last write wins; the next turn already
    /// uses the new selector.
    pub fn set_move_selector(&mut self, selector: Box<dyn MoveSelector>) {
        self.selector = selector;
    }

    /// Ask the bound selector which movement the active combatant plays
    /// against `defender`. `None` when no combatant is left standing or
    /// the selector has nothing to give.
    pub fn choose_move(&mut self, defender: &Pokemon) -> Option<Movement> {
        let attacker = self.pokemons.iter().find(|pokemon| pokemon.is_alive())?;
        self.selector.select_move(attacker, defender)
    }

    pub fn is_valid(&mut self) -> bool {
        self.validate().is_ok()
    }

    /// The checks a team must pass before entering battle: exactly
    /// [`TEAM_SIZE`] combatants, [`MOVES_PER_POKEMON`] movements each, and
    /// a selector honoring the attacker's-move contract. Reports the first
    /// rule broken.
    pub fn validate(&mut self) -> TeamResult<()> {
        if self.pokemons.len() != TEAM_SIZE {
            return Err(TeamValidationError::RosterSize(self.pokemons.len()));
        }
        for pokemon in &self.pokemons {
            if pokemon.moves.len() != MOVES_PER_POKEMON {
                return Err(TeamValidationError::MoveCount {
                    pokemon: pokemon.name.clone(),
                    count: pokemon.moves.len(),
                });
            }
        }
        if !self.check_move_selector() {
            return Err(TeamValidationError::SelectorContract);
        }
        Ok(())
    }

    /// Exercise the bound selector against two fixture combatants with
    /// disjoint movement sets and require the pick to come from the
    /// attacker's set. Catches strategies that answer from the defender's
    /// moves, with a constant unrelated movement, or with nothing at all.
    pub fn check_move_selector(&mut self) -> bool {
        let attacker = dummy_pokemon("dummy", 1);
        let defender = dummy_pokemon("dummy2", 5);
        match self.selector.select_move(&attacker, &defender) {
            Some(movement) => attacker.moves.contains(&movement),
            None => false,
        }
    }
}

impl fmt::Debug for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The selector is an opaque strategy; show the rest.
        f.debug_struct("Team")
            .field("name", &self.name)
            .field("pokemons", &self.pokemons)
            .finish_non_exhaustive()
    }
}

/// Fixture combatant for the selector contract check: flat base 100,
/// single type, movements named dummy{first_move}..dummy{first_move + 3}.
fn dummy_pokemon(name: &str, first_move: usize) -> Pokemon {
    let moves = (first_move..first_move + MOVES_PER_POKEMON)
        .map(|i| dummy_movement(&format!("dummy{}", i)))
        .collect();
    let base = BaseStats {
        hp: 100,
        attack: 100,
        defense: 100,
        sp_attack: 100,
        sp_defense: 100,
        speed: 100,
    };
    Pokemon::new(name.to_string(), PokemonType::Normal, None, base, moves)
}

fn dummy_movement(name: &str) -> Movement {
    Movement::new(
        name.to_string(),
        "dummy".to_string(),
        PokemonType::Normal,
        MovementKind::Physical,
        100,
        "100%".to_string(),
        100,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn movement(name: &str) -> Movement {
        Movement::new(
            name.to_string(),
            "test movement".to_string(),
            PokemonType::Normal,
            MovementKind::Physical,
            80,
            "100%".to_string(),
            20,
        )
    }

    fn pokemon(name: &str, move_count: usize) -> Pokemon {
        let moves = (0..move_count)
            .map(|i| movement(&format!("{} move {}", name, i)))
            .collect();
        let base = BaseStats {
            hp: 60,
            attack: 70,
            defense: 60,
            sp_attack: 80,
            sp_defense: 70,
            speed: 90,
        };
        Pokemon::new(name.to_string(), PokemonType::Fire, None, base, moves)
    }

    fn full_team() -> Team {
        let roster = (0..TEAM_SIZE)
            .map(|i| pokemon(&format!("member {}", i), MOVES_PER_POKEMON))
            .collect();
        Team::new("Red".to_string(), roster)
    }

    #[test]
    fn full_roster_with_default_selector_is_valid() {
        let mut team = full_team();

        assert_eq!(team.validate(), Ok(()));
        assert!(team.is_valid());
    }

    #[rstest]
    #[case(5)]
    #[case(7)]
    fn wrong_roster_size_is_invalid(#[case] size: usize) {
        let roster = (0..size)
            .map(|i| pokemon(&format!("member {}", i), MOVES_PER_POKEMON))
            .collect();
        let mut team = Team::new("Red".to_string(), roster);

        assert_eq!(team.validate(), Err(TeamValidationError::RosterSize(size)));
        assert!(!team.is_valid());
    }

    #[test]
    fn combatant_with_three_movements_is_invalid() {
        let mut team = full_team();
        team.pokemons[2] = pokemon("short on moves", 3);

        assert_eq!(
            team.validate(),
            Err(TeamValidationError::MoveCount {
                pokemon: "short on moves".to_string(),
                count: 3,
            })
        );
    }

    #[test]
    fn selector_answering_from_the_defender_is_invalid() {
        let mut team = full_team();
        team.set_move_selector(Box::new(|_: &Pokemon, defender: &Pokemon| {
            defender.moves.first().cloned()
        }));

        assert!(!team.check_move_selector());
        assert_eq!(team.validate(), Err(TeamValidationError::SelectorContract));
    }

    #[test]
    fn selector_answering_nothing_is_invalid() {
        let mut team = full_team();
        team.set_move_selector(Box::new(|_: &Pokemon, _: &Pokemon| -> Option<Movement> {
            None
        }));

        assert_eq!(team.validate(), Err(TeamValidationError::SelectorContract));
    }

    #[test]
    fn constant_first_attacker_move_selector_is_valid() {
        let mut team = full_team();
        team.set_move_selector(Box::new(|attacker: &Pokemon, _: &Pokemon| {
            attacker.moves.first().cloned()
        }));

        assert_eq!(team.validate(), Ok(()));
    }

    #[test]
    fn active_pokemon_is_first_alive_in_roster_order() {
        let mut team = full_team();
        assert_eq!(team.active_pokemon().unwrap().name, "member 0");

        let lethal = team.pokemons[0].max_hp;
        team.pokemons[0].receive_damage(lethal);

        assert_eq!(team.active_pokemon().unwrap().name, "member 1");
        assert_eq!(team.count_alive(), TEAM_SIZE - 1);
        assert!(!team.is_defeated());
    }

    #[test]
    fn team_is_defeated_once_every_combatant_drops() {
        let mut team = full_team();

        for pokemon in &mut team.pokemons {
            let lethal = pokemon.max_hp;
            pokemon.receive_damage(lethal);
        }

        assert!(team.is_defeated());
        assert_eq!(team.count_alive(), 0);
        assert_eq!(team.active_pokemon(), None);
    }

    #[test]
    fn reset_restores_the_whole_roster() {
        let mut team = full_team();
        for pokemon in &mut team.pokemons {
            let lethal = pokemon.max_hp;
            pokemon.receive_damage(lethal);
            pokemon.modify_stage(crate::pokemon::Stat::Speed, -4);
        }
        assert!(team.is_defeated());

        team.reset();

        assert!(!team.is_defeated());
        assert_eq!(team.count_alive(), TEAM_SIZE);
        for pokemon in &team.pokemons {
            assert_eq!(pokemon.hp, pokemon.max_hp);
            assert_eq!(pokemon.stage(crate::pokemon::Stat::Speed), 0);
        }
    }

    #[test]
    fn choose_move_asks_the_selector_for_the_active_combatant() {
        let mut team = full_team();
        team.set_move_selector(Box::new(|attacker: &Pokemon, _: &Pokemon| {
            attacker.moves.first().cloned()
        }));
        let defender = pokemon("opponent", MOVES_PER_POKEMON);

        let chosen = team.choose_move(&defender).expect("team has a combatant");
        assert_eq!(chosen.name, "member 0 move 0");

        // Knock out the lead; the selector now answers for the next one.
        let lethal = team.pokemons[0].max_hp;
        team.pokemons[0].receive_damage(lethal);
        let chosen = team.choose_move(&defender).expect("five combatants left");
        assert_eq!(chosen.name, "member 1 move 0");
    }

    #[test]
    fn choose_move_on_a_defeated_team_yields_nothing() {
        let mut team = full_team();
        for pokemon in &mut team.pokemons {
            let lethal = pokemon.max_hp;
            pokemon.receive_damage(lethal);
        }
        let defender = pokemon("opponent", MOVES_PER_POKEMON);

        assert_eq!(team.choose_move(&defender), None);
    }

    #[test]
    fn default_selector_passes_the_contract_check() {
        let mut team = Team::with_selector(
            "Blue".to_string(),
            Vec::new(),
            Box::new(RandomMoveSelector::seeded(9)),
        );

        // Structural checks fail on the empty roster, the selector check
        // alone still passes: it runs on fixtures, not the roster.
        assert!(team.check_move_selector());
        assert_eq!(team.validate(), Err(TeamValidationError::RosterSize(0)));
    }
}
