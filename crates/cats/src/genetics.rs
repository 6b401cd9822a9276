//! The appearance generation pipeline.
//!
//! One engine per genotype, seeded once, driven through a fixed draw order.
//! The order is the reproducibility contract: inserting, removing or
//! reordering a single draw changes every cat downstream of it, so each step
//! below spends its words even when the outcome is discarded (see
//! [`SeededRng::chance`]).

use tracing::debug;

use clowder_core::{Result, SeededRng};

use crate::cat::{AgeStage, Sex};
use crate::config::GenerationConfig;
use crate::looks::{sprite, Looks, SpriteSet};
use crate::taxonomy::{
    ColourFamily, EyeColour, EyeFamily, PatternCategory, PeltColour, PeltLength, PeltPattern,
    WhiteTier, BLACK_COLOURS, BLUE_EYES, BROWN_COLOURS, COLOUR_FAMILIES, GINGER_COLOURS,
    GREEN_EYES, MISHAP_SCARS, PATTERN_CATEGORIES, PLANT_ACCESSORIES, POINT_MARKINGS,
    RESTRICTED_OVERLAYS, SCARS, SKIN_TONES, TORTIE_BASES, TORTIE_PATTERNS, TORTIE_SHAPES,
    VITILIGO, WHITE_COLOURS, WHITE_TIER_POOLS, WILD_ACCESSORIES, YELLOW_EYES,
};

/// Everything the pipeline needs to know about the cat being generated.
#[derive(Debug, Clone, Copy)]
pub struct Genotype<'a> {
    /// Seed for the per-cat engine.
    pub seed: u32,
    /// Sex, which skews tortie conversion odds.
    pub sex: Sex,
    /// Life stage at generation time; gates scars and accessories.
    pub stage: AgeStage,
    /// Parents' looks, when the cat is born rather than spawned.
    pub parents: Option<(&'a Looks, &'a Looks)>,
}

/// Category weights for a parentless pattern draw.
const BASE_PATTERN_WEIGHTS: [u32; 5] = [35, 20, 30, 15, 0];

/// White-tier weights by coat kind.
const TIER_WEIGHTS_TORTIE: [u32; 5] = [2, 1, 0, 0, 0];
const TIER_WEIGHTS_CALICO: [u32; 5] = [0, 0, 20, 15, 1];
const TIER_WEIGHTS_DEFAULT: [u32; 5] = [10, 10, 10, 10, 1];

/// Per-parent category vote over pattern categories, indexed by the parent's
/// own category (tabby, spotted, plain, exotic).
const PARENT_PATTERN_WEIGHTS: [[u32; 5]; 4] = [
    [50, 10, 5, 7, 0],
    [10, 50, 5, 5, 0],
    [5, 5, 50, 0, 0],
    [15, 15, 1, 45, 0],
];

/// Per-parent vote over colour families, indexed by the parent's family.
const PARENT_COLOUR_WEIGHTS: [[u32; 4]; 4] = [
    [40, 0, 0, 10],
    [0, 40, 2, 5],
    [0, 5, 40, 0],
    [10, 5, 0, 35],
];

/// Per-parent vote over fur lengths, indexed by the parent's length.
const PARENT_LENGTH_WEIGHTS: [[u32; 3]; 3] = [[50, 10, 2], [25, 50, 25], [2, 10, 50]];

/// Probability a coat shows any white at all.
const HAS_WHITE_CHANCE: f64 = 0.4;
/// Odds a non-wildcard tortie overlay repeats its base pattern.
const OVERLAY_SELF_BIAS: f64 = 0.97;
/// Heterochromia amplifier for a fully white coat or white base colour.
const HETEROCHROMIA_FULL_WHITE: f64 = 5.1;
/// Heterochromia amplifier for any high-coverage white patch.
const HETEROCHROMIA_HIGH_WHITE: f64 = 4.0;
/// Odds the tortie accent crosses to the ginger (or black) family rather
/// than brown.
const ACCENT_PRIMARY_CROSS: f64 = 2.0 / 3.0;

/// Category a parent votes with. Tortie coats vote as their base pattern, or
/// as plain when no base was recorded.
fn voting_category(parent: &Looks) -> usize {
    match parent.pattern.category() {
        PatternCategory::Tortie => parent
            .tortie_base
            .map(|base| base.category().index())
            .unwrap_or(PatternCategory::Plain.index()),
        other => other.index(),
    }
}

/// Concatenate both parents' votes and resolve one weighted pick over the
/// candidate list repeated twice.
fn vote(rng: &mut SeededRng, first: &[u32], second: &[u32]) -> Result<usize> {
    let weights: Vec<u32> = first.iter().chain(second).copied().collect();
    Ok(rng.choose_index_weighted(&weights)? % first.len())
}

/// Run the full pipeline and produce a finished [`Looks`].
///
/// Infallible with the built-in taxonomy; the `Result` surfaces config
/// mistakes such as malformed tint tables.
pub fn generate(genotype: &Genotype<'_>, config: &GenerationConfig) -> Result<Looks> {
    let rng = &mut SeededRng::new(genotype.seed);

    let mut pattern;
    let mut colour;
    let length;
    let mut tortie_base: Option<PeltPattern> = None;
    let mut inherited = false;

    // Step 1: base coat, either copied from a parent or drawn fresh.
    if let Some((first, second)) = genotype.parents {
        if rng.chance(config.direct_inheritance_chance) {
            let donor = if rng.next_bool() { first } else { second };
            pattern = donor.pattern;
            colour = donor.colour;
            length = donor.length;
            tortie_base = donor.tortie_base;
            inherited = true;
            debug!(seed = genotype.seed, "coat copied from parent");
        } else {
            let idx = vote(
                rng,
                &PARENT_PATTERN_WEIGHTS[voting_category(first)],
                &PARENT_PATTERN_WEIGHTS[voting_category(second)],
            )?;
            pattern = *rng.choose(PATTERN_CATEGORIES[idx])?;
            let idx = vote(
                rng,
                &PARENT_COLOUR_WEIGHTS[first.colour.family().index()],
                &PARENT_COLOUR_WEIGHTS[second.colour.family().index()],
            )?;
            colour = *rng.choose(COLOUR_FAMILIES[idx])?;
            let idx = vote(
                rng,
                &PARENT_LENGTH_WEIGHTS[first.length.index()],
                &PARENT_LENGTH_WEIGHTS[second.length.index()],
            )?;
            length = PeltLength::ALL[idx];
        }
    } else {
        pattern = *rng.choose_nested_weighted(&PATTERN_CATEGORIES, &BASE_PATTERN_WEIGHTS)?;
        colour = *rng.choose_nested(&COLOUR_FAMILIES)?;
        length = *rng.choose(&PeltLength::ALL)?;
    }

    let tortie_rarity = match genotype.sex {
        Sex::Male => config.male_tortie_rarity,
        Sex::Female => config.female_tortie_rarity,
    };
    if !inherited && rng.inverse_chance(tortie_rarity) {
        tortie_base = Some(match pattern {
            PeltPattern::Single | PeltPattern::TwoColour => PeltPattern::Single,
            other => other,
        });
        pattern = *rng.choose(&TORTIE_PATTERNS)?;
        debug!(seed = genotype.seed, ?pattern, "coat converted to patchwork");
    }

    // The word is drawn even for a copied coat so step 3 stays aligned; the
    // rewrites below must not touch an inherited pattern, which is copied
    // exactly.
    let has_white = rng.chance(HAS_WHITE_CHANCE);
    if !inherited {
        if matches!(pattern, PeltPattern::Single | PeltPattern::TwoColour) {
            pattern = if has_white {
                PeltPattern::TwoColour
            } else {
                PeltPattern::Single
            };
        }
        if pattern == PeltPattern::Calico && !has_white {
            pattern = PeltPattern::Tortie;
        }
    }

    // Step 2: vitiligo.
    let vitiligo = if rng.chance_pow2(config.vitiligo_rarity_pow2) {
        Some(*rng.choose(&VITILIGO)?)
    } else {
        None
    };

    // Step 3: white patches and points.
    let mut white_patches: Option<&'static str> = None;
    let mut points: Option<&'static str> = None;
    if has_white {
        let mut copied = false;
        if let Some((first, second)) = genotype.parents {
            let carriers: Vec<&Looks> = [first, second]
                .into_iter()
                .filter(|p| p.has_white())
                .collect();
            if !carriers.is_empty() && rng.chance(config.direct_inheritance_chance) {
                let donor = if carriers.len() == 1 || rng.next_bool() {
                    carriers[0]
                } else {
                    carriers[1]
                };
                white_patches = donor.white_patches;
                points = donor.points;
                copied = true;
            }
        }
        if !copied {
            if pattern != PeltPattern::Tortie && rng.inverse_chance(config.random_point_rarity) {
                points = Some(*rng.choose(&POINT_MARKINGS)?);
            }
            let tier_weights = match pattern {
                PeltPattern::Tortie => &TIER_WEIGHTS_TORTIE,
                PeltPattern::Calico => &TIER_WEIGHTS_CALICO,
                _ => &TIER_WEIGHTS_DEFAULT,
            };
            let patch = *rng.choose_nested_weighted(&WHITE_TIER_POOLS, tier_weights)?;
            white_patches = Some(patch);
            if points.is_some()
                && WhiteTier::of(patch).is_some_and(WhiteTier::overrides_points)
            {
                points = None;
            }
        }
    }

    // Step 4: sprite frames, skin, orientation.
    let kitten = *rng.choose(&sprite::KITTEN)?;
    let adolescent = *rng.choose(&sprite::ADOLESCENT)?;
    let senior = *rng.choose(&sprite::SENIOR)?;
    let (adult, paralysed) = if length == PeltLength::Long {
        (*rng.choose(&sprite::ADULT_LONG)?, sprite::PARALYSED_LONG)
    } else {
        (*rng.choose(&sprite::ADULT_SHORT)?, sprite::PARALYSED_SHORT)
    };
    let skin = *rng.choose(&SKIN_TONES)?;
    let reversed = rng.next_bool();

    // Step 5: scars and accessories, scaled by age bracket. Newborns carry
    // neither.
    let mut scars: Vec<&'static str> = Vec::new();
    let mut accessory: Option<&'static str> = None;
    if genotype.stage != AgeStage::Newborn {
        let (scar_rate, accessory_rate) = match genotype.stage {
            AgeStage::Kitten | AgeStage::Adolescent => (0.02, 0.005),
            AgeStage::YoungAdult | AgeStage::Adult => (0.05, 0.01),
            _ => (0.0625, 0.0125),
        };
        if rng.chance(scar_rate) {
            let scar = if rng.next_bool() {
                *rng.choose(&SCARS)?
            } else {
                *rng.choose(&MISHAP_SCARS)?
            };
            scars.push(scar);
        }
        if rng.chance(accessory_rate) {
            accessory = Some(if rng.next_bool() {
                *rng.choose(&PLANT_ACCESSORIES)?
            } else {
                *rng.choose(&WILD_ACCESSORIES)?
            });
        }
    }

    // Step 6: eyes. High white coverage and parental heterochromia both
    // bend the odds of a mismatched pair.
    let eye_colour = *rng.choose(&EyeColour::ALL)?;
    let mut heterochromia = config.base_heterochromia_chance;
    if let Some(patch) = white_patches {
        let high_coverage = WhiteTier::of(patch).is_some_and(WhiteTier::overrides_points);
        if high_coverage || colour == PeltColour::White {
            heterochromia *= if patch == "Fullwhite" || colour == PeltColour::White {
                HETEROCHROMIA_FULL_WHITE
            } else {
                HETEROCHROMIA_HIGH_WHITE
            };
        }
    }
    if let Some((first, second)) = genotype.parents {
        if first.eye_colour2.is_some() || second.eye_colour2.is_some() {
            heterochromia *= config.parent_heterochromia_penalty;
        }
    }
    let eye_colour2 = if heterochromia >= 1.0 || rng.chance(heterochromia) {
        let other_families: [&[EyeColour]; 2] = match eye_colour.family() {
            EyeFamily::Yellow => [&BLUE_EYES, &GREEN_EYES],
            EyeFamily::Blue => [&YELLOW_EYES, &GREEN_EYES],
            EyeFamily::Green => [&YELLOW_EYES, &BLUE_EYES],
        };
        Some(*rng.choose_nested(&other_families)?)
    } else {
        None
    };

    // Step 7: resolve the tortie patchwork.
    let mut tortie_pattern: Option<PeltPattern> = None;
    let mut tortie_colour: Option<PeltColour> = None;
    let mut patch_shape: Option<&'static str> = None;
    if matches!(pattern, PeltPattern::Tortie | PeltPattern::Calico) {
        tortie_colour = Some(PeltColour::Golden);
        let base = match tortie_base {
            Some(base) => base,
            None => {
                let base = *rng.choose(&TORTIE_BASES)?;
                tortie_base = Some(base);
                base
            }
        };
        patch_shape = Some(*rng.choose(&TORTIE_SHAPES)?);
        if rng.inverse_chance(config.wildcard_tortie_rarity) {
            tortie_pattern = Some(*rng.choose(&TORTIE_BASES)?);
            tortie_colour = Some(*rng.choose_except(&PeltColour::ALL, &colour)?);
            debug!(seed = genotype.seed, "wildcard patchwork");
        } else {
            tortie_pattern = Some(match base {
                PeltPattern::Singlestripe | PeltPattern::Smoke | PeltPattern::Single => {
                    *rng.choose(&RESTRICTED_OVERLAYS)?
                }
                base if rng.chance(OVERLAY_SELF_BIAS) => base,
                _ => PeltPattern::Single,
            });
            // Pure white bases do not hold a visible patchwork; nudge the
            // coat into the rest of the white family.
            if colour == PeltColour::White {
                colour = *rng.choose_except(&WHITE_COLOURS, &PeltColour::White)?;
            }
            tortie_colour = Some(match colour.family() {
                ColourFamily::Black | ColourFamily::White => {
                    if rng.chance(ACCENT_PRIMARY_CROSS) {
                        *rng.choose(&GINGER_COLOURS)?
                    } else {
                        *rng.choose(&BROWN_COLOURS)?
                    }
                }
                ColourFamily::Ginger => {
                    if rng.chance(ACCENT_PRIMARY_CROSS) {
                        *rng.choose(&BLACK_COLOURS)?
                    } else {
                        *rng.choose(&BROWN_COLOURS)?
                    }
                }
                ColourFamily::Brown => {
                    let families: [&[PeltColour]; 3] =
                        [&BROWN_COLOURS, &BLACK_COLOURS, &GINGER_COLOURS];
                    let family = families[rng.choose_index_weighted(&[1, 1, 2])?];
                    if family.contains(&colour) {
                        *rng.choose_except(family, &colour)?
                    } else {
                        *rng.choose(family)?
                    }
                }
            });
        }
    }

    // Step 8: tints.
    let tint = config.tints.pick(colour, rng)?;
    let white_tint = if white_patches.is_some() || points.is_some() {
        config.white_tints.pick(colour, rng)?
    } else {
        None
    };

    let mut looks = Looks {
        pattern,
        colour,
        length,
        tortie_base,
        tortie_pattern,
        tortie_colour,
        patch_shape,
        white_patches,
        points,
        vitiligo,
        eye_colour,
        eye_colour2,
        skin,
        scars,
        accessory,
        tint,
        white_tint,
        sprites: SpriteSet {
            kitten,
            adolescent,
            adult,
            senior,
            paralysed,
            paralysed_young: sprite::PARALYSED_YOUNG,
            sick_adult: sprite::SICK_ADULT,
            sick_young: sprite::SICK_YOUNG,
        },
        opacity: 255,
        reversed,
    };

    // Step 9: contradiction cleanup.
    looks.fix();
    Ok(looks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{EyeColour, PeltColour, PeltLength, PeltPattern};

    fn run(seed: u32, sex: Sex, stage: AgeStage) -> Looks {
        generate(
            &Genotype {
                seed,
                sex,
                stage,
                parents: None,
            },
            &GenerationConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn golden_seed_2007_male_adult() {
        let looks = run(2007, Sex::Male, AgeStage::Adult);
        assert_eq!(looks.pattern, PeltPattern::Mackerel);
        assert_eq!(looks.colour, PeltColour::Darkgrey);
        assert_eq!(looks.length, PeltLength::Medium);
        assert_eq!(looks.tortie_base, None);
        assert_eq!(looks.tortie_pattern, None);
        assert_eq!(looks.tortie_colour, None);
        assert_eq!(looks.patch_shape, None);
        assert_eq!(looks.white_patches, Some("Toestail"));
        assert_eq!(looks.points, None);
        assert_eq!(looks.vitiligo, None);
        assert_eq!(looks.eye_colour, EyeColour::Hazel);
        assert_eq!(looks.eye_colour2, None);
        assert_eq!(looks.skin, "Lightbrown");
        assert!(looks.scars.is_empty());
        assert_eq!(looks.accessory, None);
        assert_eq!(looks.tint.as_deref(), Some("none"));
        assert_eq!(looks.white_tint.as_deref(), Some("none"));
        assert_eq!(looks.sprites.kitten, 2);
        assert_eq!(looks.sprites.adolescent, 3);
        assert_eq!(looks.sprites.adult, 7);
        assert_eq!(looks.sprites.senior, 12);
        assert_eq!(looks.sprites.paralysed, sprite::PARALYSED_SHORT);
        assert_eq!(looks.sprites.paralysed_young, sprite::PARALYSED_YOUNG);
        assert_eq!(looks.sprites.sick_adult, sprite::SICK_ADULT);
        assert_eq!(looks.sprites.sick_young, sprite::SICK_YOUNG);
        assert_eq!(looks.opacity, 255);
        assert!(!looks.reversed);
    }

    #[test]
    fn golden_seed_1_produces_a_tortie() {
        let looks = run(1, Sex::Female, AgeStage::Senior);
        assert_eq!(looks.pattern, PeltPattern::Tortie);
        assert_eq!(looks.colour, PeltColour::Palegrey);
        assert_eq!(looks.length, PeltLength::Long);
        assert_eq!(looks.tortie_base, Some(PeltPattern::Single));
        assert_eq!(looks.tortie_pattern, Some(PeltPattern::Tabby));
        assert_eq!(looks.tortie_colour, Some(PeltColour::Darkginger));
        assert_eq!(looks.patch_shape, Some("Brindle"));
        assert_eq!(looks.white_patches, None);
        assert_eq!(looks.eye_colour, EyeColour::Gold);
        assert_eq!(looks.skin, "Red");
        assert_eq!(looks.tint.as_deref(), Some("blue"));
        assert_eq!(looks.white_tint, None);
        assert_eq!(looks.sprites.adult, 10);
        assert_eq!(looks.sprites.paralysed, sprite::PARALYSED_LONG);
    }

    #[test]
    fn golden_seed_42_has_vitiligo() {
        let looks = run(42, Sex::Female, AgeStage::Senior);
        assert_eq!(looks.pattern, PeltPattern::Masked);
        assert_eq!(looks.colour, PeltColour::Ghost);
        assert_eq!(looks.length, PeltLength::Medium);
        assert_eq!(looks.vitiligo, Some("Bleached"));
        assert_eq!(looks.eye_colour, EyeColour::Amber);
        assert_eq!(looks.skin, "Dark");
        assert_eq!(looks.tint.as_deref(), Some("slate"));
        assert_eq!(looks.white_tint, None);
        assert!(looks.reversed);
    }

    #[test]
    fn golden_seed_77777_carries_white() {
        let looks = run(77_777, Sex::Female, AgeStage::Senior);
        assert_eq!(looks.pattern, PeltPattern::Smoke);
        assert_eq!(looks.colour, PeltColour::Silver);
        assert_eq!(looks.length, PeltLength::Short);
        assert_eq!(looks.white_patches, Some("Piebald"));
        assert_eq!(looks.points, None);
        assert_eq!(looks.eye_colour, EyeColour::Cobalt);
        assert_eq!(looks.skin, "Darksalmon");
        assert_eq!(looks.tint.as_deref(), Some("slate"));
        assert_eq!(looks.white_tint.as_deref(), Some("cream"));
    }

    #[test]
    fn golden_seed_2024_plain_coat() {
        let looks = run(2024, Sex::Female, AgeStage::Senior);
        assert_eq!(looks.pattern, PeltPattern::Sokoke);
        assert_eq!(looks.colour, PeltColour::Goldbrown);
        assert_eq!(looks.length, PeltLength::Short);
        assert_eq!(looks.vitiligo, Some("Smokey"));
        assert_eq!(looks.eye_colour, EyeColour::Sage);
        assert_eq!(looks.skin, "Darkgrey");
        assert_eq!(looks.tint.as_deref(), Some("pink"));
        assert!(!looks.reversed);
    }

    #[test]
    fn generation_is_deterministic() {
        for seed in [0u32, 1, 7, 500, u32::MAX] {
            let a = run(seed, Sex::Female, AgeStage::Adult);
            let b = run(seed, Sex::Female, AgeStage::Adult);
            assert_eq!(a, b, "seed {seed}");
        }
    }

    #[test]
    fn forced_inheritance_copies_one_parent_wholesale() {
        let p1 = run(11, Sex::Female, AgeStage::Adult);
        let p2 = run(22, Sex::Male, AgeStage::Adult);
        let config = GenerationConfig {
            direct_inheritance_chance: 1.0,
            ..GenerationConfig::default()
        };
        let kid = generate(
            &Genotype {
                seed: 33,
                sex: Sex::Female,
                stage: AgeStage::Kitten,
                parents: Some((&p1, &p2)),
            },
            &config,
        )
        .unwrap();
        assert_eq!(kid.pattern, PeltPattern::Ticked);
        assert_eq!(
            (kid.pattern, kid.colour, kid.length, kid.tortie_base),
            (p1.pattern, p1.colour, p1.length, p1.tortie_base)
        );
    }

    fn parent_with_coat(
        pattern: PeltPattern,
        colour: PeltColour,
        length: PeltLength,
        tortie_base: Option<PeltPattern>,
    ) -> Looks {
        Looks {
            pattern,
            colour,
            length,
            tortie_base,
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
                kitten: 0,
                adolescent: 3,
                adult: 6,
                senior: 12,
                paralysed: sprite::PARALYSED_SHORT,
                paralysed_young: sprite::PARALYSED_YOUNG,
                sick_adult: sprite::SICK_ADULT,
                sick_young: sprite::SICK_YOUNG,
            },
            opacity: 255,
            reversed: false,
        }
    }

    fn forced_kid(seed: u32, parent: &Looks) -> Looks {
        let config = GenerationConfig {
            direct_inheritance_chance: 1.0,
            ..GenerationConfig::default()
        };
        generate(
            &Genotype {
                seed,
                sex: Sex::Female,
                stage: AgeStage::Kitten,
                parents: Some((parent, parent)),
            },
            &config,
        )
        .unwrap()
    }

    #[test]
    fn forced_inheritance_preserves_plain_coats() {
        // Single is the coat most exposed to the has-white rewrite; the
        // copied tuple must survive it for every seed.
        let parent = parent_with_coat(
            PeltPattern::Single,
            PeltColour::Black,
            PeltLength::Short,
            None,
        );
        for seed in 0..64u32 {
            let kid = forced_kid(seed, &parent);
            assert_eq!(
                (kid.pattern, kid.colour, kid.length, kid.tortie_base),
                (parent.pattern, parent.colour, parent.length, parent.tortie_base),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn forced_inheritance_preserves_calico_coats() {
        // Calico normally downgrades to Tortie without white; an inherited
        // Calico must not.
        let parent = parent_with_coat(
            PeltPattern::Calico,
            PeltColour::Ginger,
            PeltLength::Medium,
            Some(PeltPattern::Tabby),
        );
        for seed in 0..64u32 {
            let kid = forced_kid(seed, &parent);
            assert_eq!(
                (kid.pattern, kid.colour, kid.length, kid.tortie_base),
                (parent.pattern, parent.colour, parent.length, parent.tortie_base),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn golden_two_parent_kit_without_the_shortcut() {
        let p1 = run(11, Sex::Female, AgeStage::Adult);
        let p2 = run(22, Sex::Male, AgeStage::Adult);
        let config = GenerationConfig {
            direct_inheritance_chance: 0.0,
            ..GenerationConfig::default()
        };
        let kid = generate(
            &Genotype {
                seed: 33,
                sex: Sex::Female,
                stage: AgeStage::Kitten,
                parents: Some((&p1, &p2)),
            },
            &config,
        )
        .unwrap();
        assert_eq!(kid.pattern, PeltPattern::Tortie);
        assert_eq!(kid.colour, PeltColour::Goldbrown);
        assert_eq!(kid.length, PeltLength::Long);
        assert_eq!(kid.tortie_base, Some(PeltPattern::Classic));
        assert_eq!(kid.tortie_pattern, Some(PeltPattern::Classic));
        assert_eq!(kid.tortie_colour, Some(PeltColour::Brown));
        assert_eq!(kid.patch_shape, Some("Mottled"));
        assert_eq!(kid.white_patches, Some("Vest"));
        assert_eq!(kid.points, None);
        assert_eq!(kid.eye_colour, EyeColour::Hazel);
        assert_eq!(kid.skin, "Peach");
        assert_eq!(kid.tint.as_deref(), Some("fawn"));
        assert_eq!(kid.white_tint.as_deref(), Some("none"));
        assert_eq!(kid.sprites.adult, 11);
        assert!(kid.reversed);
    }

    #[test]
    fn newborns_never_carry_scars_or_accessories() {
        for seed in 0..512u32 {
            let looks = run(seed, Sex::Male, AgeStage::Newborn);
            assert!(looks.scars.is_empty(), "seed {seed}");
            assert_eq!(looks.accessory, None, "seed {seed}");
        }
    }

    #[test]
    fn points_never_survive_high_white_coverage() {
        for seed in 0..2_000u32 {
            let looks = run(seed, Sex::Female, AgeStage::Adult);
            if let (Some(patch), Some(point)) = (looks.white_patches, looks.points) {
                let tier = WhiteTier::of(patch).unwrap();
                assert!(!tier.overrides_points(), "seed {seed}: {patch} with {point}");
            }
        }
    }
}
