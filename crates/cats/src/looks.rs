//! The finished appearance record a generation run produces.

use serde::{Deserialize, Serialize};

use crate::cat::AgeStage;
use crate::taxonomy::{EyeColour, PeltColour, PeltLength, PeltPattern};

/// Sprite-sheet frame codes. The sheet lays frames out in fixed slots, so
/// these are byte offsets into it, not arbitrary ids.
pub mod sprite {
    /// Kitten frames.
    pub const KITTEN: [u8; 3] = [0, 1, 2];
    /// Adolescent frames.
    pub const ADOLESCENT: [u8; 3] = [3, 4, 5];
    /// Short/medium-fur adult frames.
    pub const ADULT_SHORT: [u8; 3] = [6, 7, 8];
    /// Long-fur adult frames.
    pub const ADULT_LONG: [u8; 3] = [9, 10, 11];
    /// Senior frames.
    pub const SENIOR: [u8; 3] = [12, 13, 14];
    /// Paralysed adult, short/medium fur.
    pub const PARALYSED_SHORT: u8 = 15;
    /// Paralysed adult, long fur.
    pub const PARALYSED_LONG: u8 = 16;
    /// Paralysed kitten or adolescent.
    pub const PARALYSED_YOUNG: u8 = 17;
    /// Sick adult.
    pub const SICK_ADULT: u8 = 18;
    /// Sick kitten or adolescent.
    pub const SICK_YOUNG: u8 = 19;
    /// Newborn.
    pub const NEWBORN: u8 = 20;
}

/// Frames chosen for one cat, one per life phase plus the fur-length-keyed
/// paralysed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSet {
    /// Frame used through kittenhood.
    pub kitten: u8,
    /// Frame used through adolescence.
    pub adolescent: u8,
    /// Frame used from young adult through senior adult.
    pub adult: u8,
    /// Frame used as a senior.
    pub senior: u8,
    /// Paralysed adult frame, already resolved against fur length.
    pub paralysed: u8,
    /// Paralysed frame before adulthood.
    pub paralysed_young: u8,
    /// Sick adult frame.
    pub sick_adult: u8,
    /// Sick frame before adulthood.
    pub sick_young: u8,
}

/// Everything visible about a cat. Built once by the generator and then
/// treated as immutable; [`Looks::fix`] is the only sanctioned mutation.
///
/// Name-pool traits borrow from the static taxonomy tables, so the record
/// serializes but is never read back; regeneration from the seed is the
/// canonical way to restore one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Looks {
    /// Coat pattern.
    pub pattern: PeltPattern,
    /// Base coat colour.
    pub colour: PeltColour,
    /// Fur length.
    pub length: PeltLength,

    /// Pattern underneath the patches, set only for tortie/calico coats.
    pub tortie_base: Option<PeltPattern>,
    /// Pattern rendered inside the patches.
    pub tortie_pattern: Option<PeltPattern>,
    /// Accent colour of the patches.
    pub tortie_colour: Option<PeltColour>,
    /// Patch silhouette name.
    pub patch_shape: Option<&'static str>,

    /// White patch marking, if any.
    pub white_patches: Option<&'static str>,
    /// Point (extremity) marking, if any. Never coexists with a
    /// high-coverage white patch.
    pub points: Option<&'static str>,
    /// Vitiligo variant, if any.
    pub vitiligo: Option<&'static str>,

    /// Primary eye colour.
    pub eye_colour: EyeColour,
    /// Second eye colour when heterochromatic; always from a different
    /// family than the primary.
    pub eye_colour2: Option<EyeColour>,

    /// Skin tone name.
    pub skin: &'static str,
    /// Scars carried, possibly empty.
    pub scars: Vec<&'static str>,
    /// Worn accessory, if any.
    pub accessory: Option<&'static str>,

    /// Pelt tint name, when the tint table yields one.
    pub tint: Option<String>,
    /// White-area tint name; only rolled when white patches or points exist.
    pub white_tint: Option<String>,

    /// Per-phase sprite frames.
    pub sprites: SpriteSet,
    /// Render opacity, full by default.
    pub opacity: u8,
    /// Whether the sprite renders mirrored.
    pub reversed: bool,
}

impl Looks {
    /// Frame for the given life stage. Paralysed and sick variants are
    /// looked up separately by the renderer.
    pub fn sprite_index(&self, stage: AgeStage) -> u8 {
        match stage {
            AgeStage::Newborn => sprite::NEWBORN,
            AgeStage::Kitten => self.sprites.kitten,
            AgeStage::Adolescent => self.sprites.adolescent,
            AgeStage::YoungAdult | AgeStage::Adult | AgeStage::SeniorAdult => self.sprites.adult,
            AgeStage::Senior => self.sprites.senior,
        }
    }

    /// Whether any white shows on the coat.
    pub fn has_white(&self) -> bool {
        self.white_patches.is_some() || self.points.is_some()
    }

    /// Remove contradictory trait combinations. A missing tail supersedes a
    /// half tail.
    pub fn fix(&mut self) {
        if self.scars.contains(&"Notail") {
            self.scars.retain(|s| *s != "Halftail");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{EyeColour, PeltColour, PeltLength, PeltPattern};

    fn plain_looks() -> Looks {
        Looks {
            pattern: PeltPattern::Single,
            colour: PeltColour::Black,
            length: PeltLength::Short,
            tortie_base: None,
            tortie_pattern: None,
            tortie_colour: None,
            patch_shape: None,
            white_patches: None,
            points: None,
            vitiligo: None,
            eye_colour: EyeColour::Amber,
            eye_colour2: None,
            skin: "Pink",
            scars: Vec::new(),
            accessory: None,
            tint: None,
            white_tint: None,
            sprites: SpriteSet {
                kitten: 1,
                adolescent: 4,
                adult: 7,
                senior: 13,
                paralysed: sprite::PARALYSED_SHORT,
                paralysed_young: sprite::PARALYSED_YOUNG,
                sick_adult: sprite::SICK_ADULT,
                sick_young: sprite::SICK_YOUNG,
            },
            opacity: 255,
            reversed: false,
        }
    }

    #[test]
    fn sprite_index_follows_life_stage() {
        let looks = plain_looks();
        assert_eq!(looks.sprite_index(AgeStage::Newborn), sprite::NEWBORN);
        assert_eq!(looks.sprite_index(AgeStage::Kitten), 1);
        assert_eq!(looks.sprite_index(AgeStage::Adolescent), 4);
        assert_eq!(looks.sprite_index(AgeStage::YoungAdult), 7);
        assert_eq!(looks.sprite_index(AgeStage::Adult), 7);
        assert_eq!(looks.sprite_index(AgeStage::SeniorAdult), 7);
        assert_eq!(looks.sprite_index(AgeStage::Senior), 13);
    }

    #[test]
    fn has_white_covers_patches_and_points() {
        let mut looks = plain_looks();
        assert!(!looks.has_white());
        looks.white_patches = Some("Tuxedo");
        assert!(looks.has_white());
        looks.white_patches = None;
        looks.points = Some("Colourpoint");
        assert!(looks.has_white());
    }

    #[test]
    fn fix_drops_half_tail_when_tail_is_gone() {
        let mut looks = plain_looks();
        looks.scars = vec!["Halftail", "Notail", "Snout"];
        looks.fix();
        assert_eq!(looks.scars, vec!["Notail", "Snout"]);

        let mut untouched = plain_looks();
        untouched.scars = vec!["Halftail"];
        untouched.fix();
        assert_eq!(untouched.scars, vec!["Halftail"]);
    }
}
