//! Spell execution.
//!
//! Casting costs the caster mana and deals the spell's damage to the
//! target. A caster without enough mana fails and nothing changes.

use thiserror::Error;
use tracing::debug;

use crate::spells::Spell;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastError {
    #[error("Not enough mana to cast spell")]
    InsufficientMana { cost: i32, available: i32 },

    #[error("{resource} would leave the i32 range")]
    OutOfRange { resource: &'static str },
}

/// Anything that can cast spells or be hit by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Target {
    pub mana: i32,
    pub health: i32,
}

impl Target {
    pub const fn new(mana: i32, health: i32) -> Self {
        Self { mana, health }
    }

    pub const fn can_afford(&self, spell: &Spell) -> bool {
        self.mana >= spell.cost
    }

    /// Mana left after paying for `spell`. Does not mutate.
    fn mana_after(&self, spell: &Spell) -> Result<i32, CastError> {
        if !self.can_afford(spell) {
            return Err(CastError::InsufficientMana {
                cost: spell.cost,
                available: self.mana,
            });
        }
        self.mana
            .checked_sub(spell.cost)
            .ok_or(CastError::OutOfRange { resource: "mana" })
    }

    fn health_after(&self, spell: &Spell) -> Result<i32, CastError> {
        self.health
            .checked_sub(spell.damage)
            .ok_or(CastError::OutOfRange { resource: "health" })
    }

    /// Cast `spell` with this entity as both caster and target.
    pub fn cast_on_self(&mut self, spell: &Spell) -> Result<(), CastError> {
        let mana = self.mana_after(spell)?;
        let health = self.health_after(spell)?;
        self.mana = mana;
        self.health = health;
        debug!(?spell, mana, health, "self cast");
        Ok(())
    }
}

/// Cast `spell` from `origin` at `target`.
///
/// Both results are computed before either entity changes, so any error
/// leaves `origin` and `target` untouched.
pub fn execute_spell(
    spell: &Spell,
    origin: &mut Target,
    target: &mut Target,
) -> Result<(), CastError> {
    let mana = origin.mana_after(spell)?;
    let health = target.health_after(spell)?;
    origin.mana = mana;
    target.health = health;
    debug!(
        ?spell,
        origin_mana = mana,
        target_health = health,
        "spell cast"
    );
    Ok(())
}
