//! Tunable generation rates and tint tables.
//!
//! Every field has a serde default, so a config file only needs to name the
//! rates it changes. The defaults here are the canonical values; golden
//! outputs are pinned against them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use clowder_core::{Result, SeededRng};

use crate::taxonomy::{
    PeltColour, BLACK_COLOURS, BROWN_COLOURS, GINGER_COLOURS, WHITE_COLOURS,
};

/// Colour-keyed tint selection table.
///
/// `groups` maps a pelt colour to a group name; `possible` maps group names
/// to candidate tint lists. The "Basic" group is the ungrouped fallback and
/// competes with the colour's own group on a coin flip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TintConfig {
    /// Pelt colour to tint-group name.
    #[serde(default)]
    pub groups: HashMap<PeltColour, String>,
    /// Tint-group name to candidate tints.
    #[serde(default)]
    pub possible: HashMap<String, Vec<String>>,
}

impl TintConfig {
    /// Draw a tint for `colour`, or `None` when the table has nothing to
    /// offer. Always spends the coin flip so the draw sequence does not
    /// depend on table contents.
    pub fn pick(&self, colour: PeltColour, rng: &mut SeededRng) -> Result<Option<String>> {
        fn usable(list: Option<&Vec<String>>) -> Option<&Vec<String>> {
            list.filter(|l| !l.is_empty())
        }
        let basic = usable(self.possible.get("Basic"));
        let grouped = usable(self.groups.get(&colour).and_then(|g| self.possible.get(g)));
        let preferred = if rng.next_bool() { basic } else { grouped };
        match preferred.or(basic).or(grouped) {
            Some(list) => Ok(Some(rng.choose(list)?.clone())),
            None => Ok(None),
        }
    }
}

/// All generation rates in one place.
///
/// `*_rarity` fields are 1-in-N odds, `*_pow2` fields are 1-in-2^N, and the
/// `*_chance` fields are plain probabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// 1-in-N odds of a male coat converting to tortie/calico.
    pub male_tortie_rarity: u32,
    /// 1-in-N odds of a female coat converting to tortie/calico.
    pub female_tortie_rarity: u32,
    /// Vitiligo appears 1 time in 2^N.
    pub vitiligo_rarity_pow2: u32,
    /// 1-in-N odds of point markings on a white-bearing coat.
    pub random_point_rarity: u32,
    /// 1-in-N odds of a wildcard tortie (free overlay and accent colour).
    pub wildcard_tortie_rarity: u32,
    /// Base probability of heterochromia before amplifiers.
    pub base_heterochromia_chance: f64,
    /// Probability a kit copies one parent's coat wholesale.
    pub direct_inheritance_chance: f64,
    /// Multiplier on heterochromia odds when a parent already has it.
    pub parent_heterochromia_penalty: f64,
    /// Pelt tint table.
    pub tints: TintConfig,
    /// White-area tint table.
    pub white_tints: TintConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            male_tortie_rarity: 26,
            female_tortie_rarity: 3,
            vitiligo_rarity_pow2: 3,
            random_point_rarity: 6,
            wildcard_tortie_rarity: 9,
            base_heterochromia_chance: 1.0 / 120.0,
            direct_inheritance_chance: 0.10,
            parent_heterochromia_penalty: 0.5,
            tints: default_tints(),
            white_tints: default_white_tints(),
        }
    }
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}

fn default_tints() -> TintConfig {
    let mut groups = HashMap::new();
    for &c in &GINGER_COLOURS {
        groups.insert(c, "Warm".to_owned());
    }
    for &c in &BLACK_COLOURS {
        groups.insert(c, "Cool".to_owned());
    }
    groups.insert(PeltColour::White, "White".to_owned());
    groups.insert(PeltColour::Palegrey, "Cool".to_owned());
    groups.insert(PeltColour::Silver, "Cool".to_owned());
    for &c in &BROWN_COLOURS {
        groups.insert(c, "Brown".to_owned());
    }

    let mut possible = HashMap::new();
    possible.insert("Basic".to_owned(), strings(&["none", "gray", "pink"]));
    possible.insert("Warm".to_owned(), strings(&["rose", "peach"]));
    possible.insert("Cool".to_owned(), strings(&["blue", "slate"]));
    possible.insert("White".to_owned(), strings(&["frost"]));
    possible.insert("Brown".to_owned(), strings(&["umber", "fawn"]));

    TintConfig { groups, possible }
}

fn default_white_tints() -> TintConfig {
    let mut groups = HashMap::new();
    for &c in &WHITE_COLOURS {
        groups.insert(c, "White".to_owned());
    }

    let mut possible = HashMap::new();
    possible.insert("Basic".to_owned(), strings(&["none", "cream", "gray"]));
    possible.insert("White".to_owned(), strings(&["frost"]));

    TintConfig { groups, possible }
}
