use crate::movement::Movement;
use schema::PokemonType;
use serde::{Deserialize, Serialize};

/// Base stats for a species, before the genetic model is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

/// The stats a battle can temporarily raise or lower through stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
    Accuracy,
}

/// Temporary stage modifiers, one per adjustable stat. Stages live in
/// [-6, +6], default to 0, and reset between battles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatStages {
    pub attack: i8,
    pub defense: i8,
    pub sp_attack: i8,
    pub sp_defense: i8,
    pub speed: i8,
    pub accuracy: i8,
}

impl StatStages {
    pub fn reset(&mut self) {
        *self = StatStages::default();
    }
}

/// A combatant. Derived stats are fixed at construction; only `hp` and the
/// stage modifiers change during a battle. The movement list is exactly
/// what the caller supplied: its size is a team-level rule, checked by
/// `Team::validate`, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    pub type1: PokemonType,
    pub type2: Option<PokemonType>,
    pub max_hp: f32,
    /// Invariant: `0.0 <= hp <= max_hp`.
    pub hp: f32,
    pub attack: f32,
    pub defense: f32,
    pub sp_attack: f32,
    pub sp_defense: f32,
    pub speed: f32,
    pub stages: StatStages,
    pub moves: Vec<Movement>,
}

impl Pokemon {
    /// Genetic constants applied to every base stat.
    pub const IV: u16 = 30;
    pub const EV: u16 = 85;
    /// Declared by the genetic model; the damage formula that consumes it
    /// lives in the external battle driver.
    pub const LEVEL: u16 = 50;
    /// Damage multiplier when a movement's type matches the attacker's.
    /// Applied by the external battle driver, never here.
    pub const SAME_TYPE_ATTACK_BONUS: f32 = 1.5;

    pub fn new(
        name: String,
        type1: PokemonType,
        type2: Option<PokemonType>,
        base: BaseStats,
        moves: Vec<Movement>,
    ) -> Self {
        let max_hp = Self::genetic_term(base.hp) + 60.0;
        Pokemon {
            name,
            type1,
            type2,
            max_hp,
            hp: max_hp,
            attack: Self::genetic_term(base.attack) + 5.0,
            defense: Self::genetic_term(base.defense) + 5.0,
            sp_attack: Self::genetic_term(base.sp_attack) + 5.0,
            sp_defense: Self::genetic_term(base.sp_defense) + 5.0,
            speed: Self::genetic_term(base.speed) + 5.0,
            stages: StatStages::default(),
            moves,
        }
    }

    /// Shared part of the derivation formula: base + IV/2 + EV/8. HP adds
    /// a flat 60 on top, every other stat a flat 5.
    fn genetic_term(base: u16) -> f32 {
        f32::from(base) + f32::from(Self::IV) * 0.5 + f32::from(Self::EV) * 0.125
    }

    /// Apply damage, clamping `hp` into `[0, max_hp]`. A negative amount
    /// heals, capped at `max_hp`; damage never drives `hp` negative.
    pub fn receive_damage(&mut self, amount: f32) {
        self.hp = (self.hp - amount).clamp(0.0, self.max_hp);
    }

    /// A combatant at exactly zero hp is defeated.
    pub fn is_alive(&self) -> bool {
        self.hp > 0.0
    }

    /// Full restore between battles: hp back to max, all stages neutral.
    pub fn restore(&mut self) {
        self.hp = self.max_hp;
        self.stages.reset();
    }

    /// Current stage for a stat (0 if untouched).
    pub fn stage(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Attack => self.stages.attack,
            Stat::Defense => self.stages.defense,
            Stat::SpAttack => self.stages.sp_attack,
            Stat::SpDefense => self.stages.sp_defense,
            Stat::Speed => self.stages.speed,
            Stat::Accuracy => self.stages.accuracy,
        }
    }

    /// Shift a stage by `delta`, clamped to [-6, +6].
    pub fn modify_stage(&mut self, stat: Stat, delta: i8) {
        let slot = self.stage_slot_mut(stat);
        *slot = slot.saturating_add(delta).clamp(-6, 6);
    }

    /// Effective value of a stat once its stage multiplier is applied. The
    /// fixed derived stat itself never changes. Accuracy has no derived
    /// stat, so its effective value is the bare multiplier the battle
    /// driver applies to a movement's accuracy.
    pub fn effective_stat(&self, stat: Stat) -> f32 {
        let fixed = match stat {
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpAttack => self.sp_attack,
            Stat::SpDefense => self.sp_defense,
            Stat::Speed => self.speed,
            Stat::Accuracy => 1.0,
        };
        fixed * stage_multiplier(self.stage(stat))
    }

    fn stage_slot_mut(&mut self, stat: Stat) -> &mut i8 {
        match stat {
            Stat::Attack => &mut self.stages.attack,
            Stat::Defense => &mut self.stages.defense,
            Stat::SpAttack => &mut self.stages.sp_attack,
            Stat::SpDefense => &mut self.stages.sp_defense,
            Stat::Speed => &mut self.stages.speed,
            Stat::Accuracy => &mut self.stages.accuracy,
        }
    }
}

/// Standard stage multiplier
/// Negative stages: (2 / (2 + |stage|))
/// Positive stages: ((2 + stage) / 2)
fn stage_multiplier(stage: i8) -> f32 {
    let clamped_stage = stage.clamp(-6, 6);

    if clamped_stage < 0 {
        2.0 / (2.0 + f32::from(-clamped_stage))
    } else {
        (2.0 + f32::from(clamped_stage)) / 2.0
    }
}
