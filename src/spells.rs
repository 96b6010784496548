//! Auto-generated from `data/spells.csv` by csvgen.
//! Do not edit manually - regenerate with csvgen.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spell {
    /// CSV column `Damage`.
    pub damage: i32,
    /// CSV column `Range`.
    pub range: f32,
    /// CSV column `Cost`.
    pub cost: i32,
}

impl Spell {
    pub const fn new(damage: i32, range: f32, cost: i32) -> Self {
        Self {
            damage,
            range,
            cost,
        }
    }
}

pub const FIREBALL: Spell = Spell {
    damage: 15,
    range: 5.0,
    cost: 15,
};

pub const FROSTBOLT: Spell = Spell {
    damage: 12,
    range: 5.0,
    cost: 20,
};

pub const HEAVY_STRIKE: Spell = Spell {
    damage: 20,
    range: 0.7,
    cost: 5,
};

pub static ALL: &[Spell] = &[
    FIREBALL,
    FROSTBOLT,
    HEAVY_STRIKE,
];

pub static NAMES: &[&str] = &[
    "Fireball",
    "Frostbolt",
    "HeavyStrike",
];

/// Look up an entry by its `Name` cell.
pub fn get(name: &str) -> Option<&'static Spell> {
    NAMES.iter().position(|n| *n == name).map(|i| &ALL[i])
}
