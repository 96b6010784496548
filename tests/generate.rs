//! End-to-end generation tests over in-memory CSV text.

use std::fs;

use csvgen::generate;
use csvgen::parser::Dialect;
use csvgen::processor::Options;

/// `src/spells.rs` is generator output; this fails when it goes stale.
#[test]
fn spell_table_is_up_to_date() {
    let csv = fs::read_to_string("data/spells.csv").unwrap();
    let expected = fs::read_to_string("src/spells.rs").unwrap();

    let generated = generate(
        &csv,
        &Dialect::default(),
        &Options::new("spells", "data/spells.csv"),
    )
    .unwrap();

    assert_eq!(generated, expected, "regenerate src/spells.rs from data/spells.csv");
}

#[test]
fn example_table_generates_constants_and_all() {
    let csv = fs::read_to_string("tests/fixtures/Example.csv").unwrap();
    let src = generate(
        &csv,
        &Dialect::default(),
        &Options::new("Example", "Example.csv").with_type_name("Spell"),
    )
    .unwrap();

    assert!(src.contains("pub struct Spell {\n"));
    assert!(src.contains("    pub damage: i32,\n"));
    assert!(src.contains("    pub cost: i32,\n"));
    let fireball = "pub const FIREBALL: Spell = Spell {\n    damage: 15,\n    cost: 15,\n};";
    let frostbolt = "pub const FROSTBOLT: Spell = Spell {\n    damage: 12,\n    cost: 20,\n};";
    let all = "pub static ALL: &[Spell] = &[\n    FIREBALL,\n    FROSTBOLT,\n];";
    assert!(src.contains(fireball));
    assert!(src.contains(frostbolt));
    assert!(src.contains(all));

    let fireball = src.find("pub const FIREBALL").unwrap();
    let frostbolt = src.find("pub const FROSTBOLT").unwrap();
    assert!(fireball < frostbolt, "constants keep row order");
}

#[test]
fn generation_is_deterministic() {
    let csv = "Name,School,Rank,Channeled\n\
               Arcane Missiles,Arcane,,true\n\
               Blink,Arcane,2,false\n";
    let options = Options::new("mage", "mage.csv");

    let a = generate(csv, &Dialect::default(), &options).unwrap();
    let b = generate(csv, &Dialect::default(), &options).unwrap();
    assert_eq!(a, b);

    assert!(a.contains("pub struct Mage {"));
    assert!(a.contains("    pub school: &'static str,\n"));
    assert!(a.contains("    pub rank: Option<i32>,\n"));
    assert!(a.contains("    pub channeled: bool,\n"));
    let missiles = "pub const ARCANE_MISSILES: Mage = Mage {\n    \
                    school: \"Arcane\",\n    \
                    rank: None,\n    \
                    channeled: true,\n\
                    };";
    assert!(a.contains(missiles));
    assert!(a.contains("    rank: Some(2),\n"));
    assert!(a.contains("    \"Arcane Missiles\",\n"));
}

#[test]
fn errors_carry_context() {
    let err = generate(
        "Name,Cost\nFireball,15\nFireball,20\n",
        &Dialect::default(),
        &Options::new("spells", "x.csv"),
    )
    .unwrap_err();

    let chain = format!("{err:#}");
    assert!(chain.starts_with("Processing table"), "got {chain}");
    assert!(chain.contains("FIREBALL"), "got {chain}");
}

#[test]
fn quoted_header_with_newline_stays_commented() {
    let src = generate(
        "Name,\"Mana\nCost\"\nFireball,15\n",
        &Dialect::default(),
        &Options::new("spells", "spells.csv"),
    )
    .unwrap();

    assert!(src.contains("    /// CSV column `Mana Cost`.\n    pub mana_cost: i32,\n"));
    assert!(!src.lines().any(|line| line.starts_with("Cost")));
}

/// `cargo fmt` would reflow the generated slices and stale the table.
#[test]
fn spell_table_is_excluded_from_rustfmt() {
    let lib = fs::read_to_string("src/lib.rs").unwrap();
    assert!(lib.contains("#[rustfmt::skip]\npub mod spells;\n"));
}
