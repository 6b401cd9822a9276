//! The cat itself: identity, life stage, and the looks attached to it.

use serde::{Deserialize, Serialize};

use clowder_core::Result;

use crate::config::GenerationConfig;
use crate::genetics::{self, Genotype};
use crate::looks::Looks;

/// Biological sex, which skews tortie/calico odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Sex {
    Female,
    Male,
}

/// Life stage, derived from age in moons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum AgeStage {
    Newborn,
    Kitten,
    Adolescent,
    YoungAdult,
    Adult,
    SeniorAdult,
    Senior,
}

impl AgeStage {
    /// Map an age in moons onto its stage bracket.
    pub fn from_moons(moons: u32) -> Self {
        match moons {
            0 => AgeStage::Newborn,
            1..=5 => AgeStage::Kitten,
            6..=11 => AgeStage::Adolescent,
            12..=47 => AgeStage::YoungAdult,
            48..=95 => AgeStage::Adult,
            96..=119 => AgeStage::SeniorAdult,
            _ => AgeStage::Senior,
        }
    }
}

/// One cat: a stable identity plus the appearance its seed produced.
///
/// Serialize-only, like [`Looks`]: a saved cat is restored by regenerating
/// from its seed, not by deserializing the record.
#[derive(Debug, Clone, Serialize)]
pub struct Cat {
    /// Stable identifier assigned by the caller.
    pub id: u64,
    /// Seed the looks were generated from.
    pub seed: u32,
    /// Biological sex.
    pub sex: Sex,
    /// Moon of birth, for age bookkeeping.
    pub birth_moon: u32,
    /// Generated appearance.
    pub looks: Looks,
}

impl Cat {
    /// Generate a cat with no recorded parentage.
    pub fn generate(
        id: u64,
        seed: u32,
        sex: Sex,
        birth_moon: u32,
        current_moon: u32,
        config: &GenerationConfig,
    ) -> Result<Self> {
        let stage = AgeStage::from_moons(current_moon.saturating_sub(birth_moon));
        let looks = genetics::generate(
            &Genotype {
                seed,
                sex,
                stage,
                parents: None,
            },
            config,
        )?;
        Ok(Self {
            id,
            seed,
            sex,
            birth_moon,
            looks,
        })
    }

    /// Generate a kit whose looks lean on its parents' coats.
    pub fn from_parents(
        id: u64,
        seed: u32,
        sex: Sex,
        birth_moon: u32,
        current_moon: u32,
        parents: (&Looks, &Looks),
        config: &GenerationConfig,
    ) -> Result<Self> {
        let stage = AgeStage::from_moons(current_moon.saturating_sub(birth_moon));
        let looks = genetics::generate(
            &Genotype {
                seed,
                sex,
                stage,
                parents: Some(parents),
            },
            config,
        )?;
        Ok(Self {
            id,
            seed,
            sex,
            birth_moon,
            looks,
        })
    }

    /// Life stage at the given moon.
    pub fn stage(&self, current_moon: u32) -> AgeStage {
        AgeStage::from_moons(current_moon.saturating_sub(self.birth_moon))
    }

    /// Sprite frame to render at the given moon.
    pub fn sprite_index(&self, current_moon: u32) -> u8 {
        self.looks.sprite_index(self.stage(current_moon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_brackets() {
        assert_eq!(AgeStage::from_moons(0), AgeStage::Newborn);
        assert_eq!(AgeStage::from_moons(1), AgeStage::Kitten);
        assert_eq!(AgeStage::from_moons(5), AgeStage::Kitten);
        assert_eq!(AgeStage::from_moons(6), AgeStage::Adolescent);
        assert_eq!(AgeStage::from_moons(11), AgeStage::Adolescent);
        assert_eq!(AgeStage::from_moons(12), AgeStage::YoungAdult);
        assert_eq!(AgeStage::from_moons(47), AgeStage::YoungAdult);
        assert_eq!(AgeStage::from_moons(48), AgeStage::Adult);
        assert_eq!(AgeStage::from_moons(95), AgeStage::Adult);
        assert_eq!(AgeStage::from_moons(96), AgeStage::SeniorAdult);
        assert_eq!(AgeStage::from_moons(119), AgeStage::SeniorAdult);
        assert_eq!(AgeStage::from_moons(120), AgeStage::Senior);
        assert_eq!(AgeStage::from_moons(300), AgeStage::Senior);
    }

    #[test]
    fn cat_generation_is_reproducible() {
        let config = GenerationConfig::default();
        let a = Cat::generate(1, 900, Sex::Female, 0, 60, &config).unwrap();
        let b = Cat::generate(2, 900, Sex::Female, 0, 60, &config).unwrap();
        assert_eq!(a.looks, b.looks);
        assert_eq!(a.stage(60), AgeStage::Adult);
        assert_eq!(a.sprite_index(60), a.looks.sprites.adult);
        assert_eq!(a.sprite_index(0), crate::looks::sprite::NEWBORN);
    }
}
