//! Trait taxonomy: the closed classification tables behind generation.
//!
//! These are hand-authored constants — which colours count as "ginger",
//! which patterns count as "tabby", which white-patch names sit in which
//! severity tier. The generator leans on these groupings for every
//! conditional probability adjustment, so their membership and ordering are
//! load-bearing: reordering a table changes which seed maps to which cat.

use serde::{Deserialize, Serialize};

/// Base coat colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum PeltColour {
    White,
    Palegrey,
    Silver,
    Grey,
    Darkgrey,
    Ghost,
    Black,
    Cream,
    Paleginger,
    Golden,
    Ginger,
    Darkginger,
    Sienna,
    Lightbrown,
    Lilac,
    Brown,
    Goldbrown,
    Darkbrown,
    Chocolate,
}

/// Colour family used for inheritance weighting and tortie accent crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum ColourFamily {
    Ginger,
    Black,
    White,
    Brown,
}

/// Ginger-family colours.
pub static GINGER_COLOURS: [PeltColour; 6] = [
    PeltColour::Cream,
    PeltColour::Paleginger,
    PeltColour::Golden,
    PeltColour::Ginger,
    PeltColour::Darkginger,
    PeltColour::Sienna,
];

/// Black-family colours.
pub static BLACK_COLOURS: [PeltColour; 4] = [
    PeltColour::Grey,
    PeltColour::Darkgrey,
    PeltColour::Ghost,
    PeltColour::Black,
];

/// White-family colours.
pub static WHITE_COLOURS: [PeltColour; 3] =
    [PeltColour::White, PeltColour::Palegrey, PeltColour::Silver];

/// Brown-family colours.
pub static BROWN_COLOURS: [PeltColour; 6] = [
    PeltColour::Lightbrown,
    PeltColour::Lilac,
    PeltColour::Brown,
    PeltColour::Goldbrown,
    PeltColour::Darkbrown,
    PeltColour::Chocolate,
];

/// Colour families in draw order: ginger, black, white, brown.
pub static COLOUR_FAMILIES: [&[PeltColour]; 4] = [
    &GINGER_COLOURS,
    &BLACK_COLOURS,
    &WHITE_COLOURS,
    &BROWN_COLOURS,
];

impl PeltColour {
    /// Every colour, in stable table order.
    pub const ALL: [PeltColour; 19] = [
        PeltColour::White,
        PeltColour::Palegrey,
        PeltColour::Silver,
        PeltColour::Grey,
        PeltColour::Darkgrey,
        PeltColour::Ghost,
        PeltColour::Black,
        PeltColour::Cream,
        PeltColour::Paleginger,
        PeltColour::Golden,
        PeltColour::Ginger,
        PeltColour::Darkginger,
        PeltColour::Sienna,
        PeltColour::Lightbrown,
        PeltColour::Lilac,
        PeltColour::Brown,
        PeltColour::Goldbrown,
        PeltColour::Darkbrown,
        PeltColour::Chocolate,
    ];

    /// The family this colour belongs to.
    pub fn family(self) -> ColourFamily {
        use PeltColour::*;
        match self {
            Cream | Paleginger | Golden | Ginger | Darkginger | Sienna => ColourFamily::Ginger,
            Grey | Darkgrey | Ghost | Black => ColourFamily::Black,
            White | Palegrey | Silver => ColourFamily::White,
            Lightbrown | Lilac | Brown | Goldbrown | Darkbrown | Chocolate => ColourFamily::Brown,
        }
    }
}

impl ColourFamily {
    /// Families in draw order.
    pub const ALL: [ColourFamily; 4] = [
        ColourFamily::Ginger,
        ColourFamily::Black,
        ColourFamily::White,
        ColourFamily::Brown,
    ];

    /// Member colours of this family.
    pub fn members(self) -> &'static [PeltColour] {
        match self {
            ColourFamily::Ginger => &GINGER_COLOURS,
            ColourFamily::Black => &BLACK_COLOURS,
            ColourFamily::White => &WHITE_COLOURS,
            ColourFamily::Brown => &BROWN_COLOURS,
        }
    }

    /// Position of this family in the draw-order table.
    pub fn index(self) -> usize {
        match self {
            ColourFamily::Ginger => 0,
            ColourFamily::Black => 1,
            ColourFamily::White => 2,
            ColourFamily::Brown => 3,
        }
    }
}

/// Coat pattern. `Tortie` and `Calico` are the patchwork categories that
/// carry an extra base/overlay/accent triple on the finished record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum PeltPattern {
    Single,
    Singlestripe,
    TwoColour,
    Smoke,
    Tabby,
    Ticked,
    Mackerel,
    Classic,
    Sokoke,
    Agouti,
    Speckled,
    Rosette,
    Bengal,
    Marbled,
    Masked,
    Tortie,
    Calico,
}

/// Pattern category, the unit the base and inheritance weights act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum PatternCategory {
    Tabby,
    Spotted,
    Plain,
    Exotic,
    Tortie,
}

/// Tabby-category patterns.
pub static TABBY_PATTERNS: [PeltPattern; 6] = [
    PeltPattern::Tabby,
    PeltPattern::Ticked,
    PeltPattern::Mackerel,
    PeltPattern::Classic,
    PeltPattern::Sokoke,
    PeltPattern::Agouti,
];

/// Spotted-category patterns.
pub static SPOTTED_PATTERNS: [PeltPattern; 2] = [PeltPattern::Speckled, PeltPattern::Rosette];

/// Plain-category patterns.
pub static PLAIN_PATTERNS: [PeltPattern; 4] = [
    PeltPattern::Single,
    PeltPattern::Singlestripe,
    PeltPattern::TwoColour,
    PeltPattern::Smoke,
];

/// Exotic-category patterns.
pub static EXOTIC_PATTERNS: [PeltPattern; 3] = [
    PeltPattern::Bengal,
    PeltPattern::Marbled,
    PeltPattern::Masked,
];

/// Patchwork-category patterns.
pub static TORTIE_PATTERNS: [PeltPattern; 2] = [PeltPattern::Tortie, PeltPattern::Calico];

/// Pattern categories in draw order: tabby, spotted, plain, exotic, tortie.
pub static PATTERN_CATEGORIES: [&[PeltPattern]; 5] = [
    &TABBY_PATTERNS,
    &SPOTTED_PATTERNS,
    &PLAIN_PATTERNS,
    &EXOTIC_PATTERNS,
    &TORTIE_PATTERNS,
];

/// Patterns a tortie patch can use as its underlying base.
pub static TORTIE_BASES: [PeltPattern; 14] = [
    PeltPattern::Single,
    PeltPattern::Tabby,
    PeltPattern::Bengal,
    PeltPattern::Marbled,
    PeltPattern::Ticked,
    PeltPattern::Smoke,
    PeltPattern::Rosette,
    PeltPattern::Speckled,
    PeltPattern::Mackerel,
    PeltPattern::Classic,
    PeltPattern::Sokoke,
    PeltPattern::Agouti,
    PeltPattern::Singlestripe,
    PeltPattern::Masked,
];

/// Overlay pool forced when the tortie base is an effectively plain coat.
pub static RESTRICTED_OVERLAYS: [PeltPattern; 7] = [
    PeltPattern::Tabby,
    PeltPattern::Mackerel,
    PeltPattern::Classic,
    PeltPattern::Single,
    PeltPattern::Smoke,
    PeltPattern::Agouti,
    PeltPattern::Ticked,
];

impl PeltPattern {
    /// The category this pattern belongs to.
    pub fn category(self) -> PatternCategory {
        use PeltPattern::*;
        match self {
            Tabby | Ticked | Mackerel | Classic | Sokoke | Agouti => PatternCategory::Tabby,
            Speckled | Rosette => PatternCategory::Spotted,
            Single | Singlestripe | TwoColour | Smoke => PatternCategory::Plain,
            Bengal | Marbled | Masked => PatternCategory::Exotic,
            Tortie | Calico => PatternCategory::Tortie,
        }
    }
}

impl PatternCategory {
    /// Categories in draw order.
    pub const ALL: [PatternCategory; 5] = [
        PatternCategory::Tabby,
        PatternCategory::Spotted,
        PatternCategory::Plain,
        PatternCategory::Exotic,
        PatternCategory::Tortie,
    ];

    /// Position of this category in the draw-order table.
    pub fn index(self) -> usize {
        match self {
            PatternCategory::Tabby => 0,
            PatternCategory::Spotted => 1,
            PatternCategory::Plain => 2,
            PatternCategory::Exotic => 3,
            PatternCategory::Tortie => 4,
        }
    }
}

/// Eye colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum EyeColour {
    Yellow,
    Amber,
    Hazel,
    Palegreen,
    Green,
    Blue,
    Darkblue,
    Grey,
    Cyan,
    Emerald,
    Paleblue,
    Paleyellow,
    Gold,
    Heatherblue,
    Copper,
    Sage,
    Cobalt,
    Sunlitice,
    Greenyellow,
    Bronze,
    Silver,
}

/// Eye-colour family. Heterochromia never pairs two eyes from the same
/// family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum EyeFamily {
    Yellow,
    Blue,
    Green,
}

/// Yellow-family eyes.
pub static YELLOW_EYES: [EyeColour; 8] = [
    EyeColour::Yellow,
    EyeColour::Amber,
    EyeColour::Paleyellow,
    EyeColour::Gold,
    EyeColour::Copper,
    EyeColour::Greenyellow,
    EyeColour::Bronze,
    EyeColour::Silver,
];

/// Blue-family eyes.
pub static BLUE_EYES: [EyeColour; 8] = [
    EyeColour::Blue,
    EyeColour::Darkblue,
    EyeColour::Cyan,
    EyeColour::Paleblue,
    EyeColour::Heatherblue,
    EyeColour::Cobalt,
    EyeColour::Sunlitice,
    EyeColour::Grey,
];

/// Green-family eyes.
pub static GREEN_EYES: [EyeColour; 5] = [
    EyeColour::Palegreen,
    EyeColour::Green,
    EyeColour::Emerald,
    EyeColour::Sage,
    EyeColour::Hazel,
];

impl EyeColour {
    /// Every eye colour, in stable table order.
    pub const ALL: [EyeColour; 21] = [
        EyeColour::Yellow,
        EyeColour::Amber,
        EyeColour::Hazel,
        EyeColour::Palegreen,
        EyeColour::Green,
        EyeColour::Blue,
        EyeColour::Darkblue,
        EyeColour::Grey,
        EyeColour::Cyan,
        EyeColour::Emerald,
        EyeColour::Paleblue,
        EyeColour::Paleyellow,
        EyeColour::Gold,
        EyeColour::Heatherblue,
        EyeColour::Copper,
        EyeColour::Sage,
        EyeColour::Cobalt,
        EyeColour::Sunlitice,
        EyeColour::Greenyellow,
        EyeColour::Bronze,
        EyeColour::Silver,
    ];

    /// The family this eye colour belongs to.
    pub fn family(self) -> EyeFamily {
        use EyeColour::*;
        match self {
            Yellow | Amber | Paleyellow | Gold | Copper | Greenyellow | Bronze | Silver => {
                EyeFamily::Yellow
            }
            Blue | Darkblue | Cyan | Paleblue | Heatherblue | Cobalt | Sunlitice | Grey => {
                EyeFamily::Blue
            }
            Palegreen | Green | Emerald | Sage | Hazel => EyeFamily::Green,
        }
    }
}

impl EyeFamily {
    /// Member colours of this family.
    pub fn members(self) -> &'static [EyeColour] {
        match self {
            EyeFamily::Yellow => &YELLOW_EYES,
            EyeFamily::Blue => &BLUE_EYES,
            EyeFamily::Green => &GREEN_EYES,
        }
    }
}

/// Fur length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum PeltLength {
    Short,
    Medium,
    Long,
}

impl PeltLength {
    /// Lengths in draw order.
    pub const ALL: [PeltLength; 3] = [PeltLength::Short, PeltLength::Medium, PeltLength::Long];

    /// Position of this length in the draw-order table.
    pub fn index(self) -> usize {
        match self {
            PeltLength::Short => 0,
            PeltLength::Medium => 1,
            PeltLength::Long => 2,
        }
    }
}

/// White-patch severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum WhiteTier {
    Little,
    Middle,
    High,
    Mostly,
    Full,
}

/// Little-white patch names.
pub static LITTLE_WHITE: [&str; 31] = [
    "Little",
    "LightTuxedo",
    "Buzzardfang",
    "Tip",
    "Blaze",
    "Bib",
    "Vee",
    "Paws",
    "Belly",
    "Tailtip",
    "Toes",
    "Brokenblaze",
    "Liltwo",
    "Scourge",
    "Toestail",
    "Ravenpaw",
    "Honey",
    "Luna",
    "Extra",
    "Mustache",
    "Reverseheart",
    "Sparkle",
    "Rightear",
    "Leftear",
    "Estrella",
    "ReverseEye",
    "Backspot",
    "Eyebags",
    "Locket",
    "Blazemask",
    "Tears",
];

/// Middle-white patch names.
pub static MIDDLE_WHITE: [&str; 27] = [
    "Tuxedo",
    "Fancy",
    "Unders",
    "Damien",
    "Skunk",
    "Mitaine",
    "Squeaks",
    "Star",
    "Wings",
    "Diva",
    "Savannah",
    "Fadespots",
    "Beard",
    "Dapplepaw",
    "Topcover",
    "Woodpecker",
    "Miss",
    "Bowtie",
    "Vest",
    "Fadebelly",
    "Digit",
    "Fctwo",
    "Fcone",
    "Mia",
    "Rosina",
    "Princess",
    "Dougie",
];

/// High-white patch names.
pub static HIGH_WHITE: [&str; 35] = [
    "Any",
    "Anytwo",
    "Broken",
    "Freckles",
    "Ringtail",
    "HalfFace",
    "Pantstwo",
    "Goatee",
    "Prince",
    "Farofa",
    "Mister",
    "Pants",
    "Reversepants",
    "Halfwhite",
    "Appaloosa",
    "Piebald",
    "Curved",
    "Glass",
    "Maskmantle",
    "Mao",
    "Painted",
    "Shibainu",
    "Owl",
    "Bub",
    "Sparrow",
    "Trixie",
    "Sammy",
    "Front",
    "Blossomstep",
    "Bullseye",
    "Finn",
    "Scar",
    "Buster",
    "Hawkblaze",
    "Cake",
];

/// Mostly-white patch names.
pub static MOSTLY_WHITE: [&str; 23] = [
    "Van",
    "OneEar",
    "Lightsong",
    "Tail",
    "Heart",
    "Moorish",
    "Apron",
    "Capsaddle",
    "Chestspeck",
    "Blackstar",
    "Petal",
    "HeartTwo",
    "Pebbleshine",
    "Boots",
    "Cow",
    "Cowtwo",
    "Lovebug",
    "Shootingstar",
    "Eyespot",
    "Pebble",
    "Tailtwo",
    "Buddy",
    "Kropka",
];

/// Full-white patch names.
pub static FULL_WHITE: [&str; 1] = ["Fullwhite"];

/// Patch pools indexed by tier, in tier draw order.
pub static WHITE_TIER_POOLS: [&[&str]; 5] = [
    &LITTLE_WHITE,
    &MIDDLE_WHITE,
    &HIGH_WHITE,
    &MOSTLY_WHITE,
    &FULL_WHITE,
];

impl WhiteTier {
    /// Tiers in draw order.
    pub const ALL: [WhiteTier; 5] = [
        WhiteTier::Little,
        WhiteTier::Middle,
        WhiteTier::High,
        WhiteTier::Mostly,
        WhiteTier::Full,
    ];

    /// Patch names belonging to this tier.
    pub fn pool(self) -> &'static [&'static str] {
        match self {
            WhiteTier::Little => &LITTLE_WHITE,
            WhiteTier::Middle => &MIDDLE_WHITE,
            WhiteTier::High => &HIGH_WHITE,
            WhiteTier::Mostly => &MOSTLY_WHITE,
            WhiteTier::Full => &FULL_WHITE,
        }
    }

    /// Classify a patch name back to its tier.
    pub fn of(patch: &str) -> Option<WhiteTier> {
        WhiteTier::ALL
            .iter()
            .copied()
            .find(|tier| tier.pool().contains(&patch))
    }

    /// Whether a patch in this tier covers enough of the coat to override
    /// point markings.
    pub fn overrides_points(self) -> bool {
        matches!(self, WhiteTier::High | WhiteTier::Mostly | WhiteTier::Full)
    }
}

/// Point (extremity) marking names.
pub static POINT_MARKINGS: [&str; 5] = [
    "Colourpoint",
    "Ragdoll",
    "Sepiapoint",
    "Minkpoint",
    "Sealpoint",
];

/// Vitiligo variant names.
pub static VITILIGO: [&str; 8] = [
    "Vitiligo",
    "Vitiligotwo",
    "Moon",
    "Phantom",
    "Karpati",
    "Powder",
    "Bleached",
    "Smokey",
];

/// Tortie patch silhouette names.
pub static TORTIE_SHAPES: [&str; 43] = [
    "One",
    "Two",
    "Three",
    "Four",
    "Redtail",
    "Delilah",
    "Minimalone",
    "Minimaltwo",
    "Minimalthree",
    "Minimalfour",
    "Half",
    "Oreo",
    "Swoop",
    "Mottled",
    "Sidemask",
    "Eyedot",
    "Bandana",
    "Pacman",
    "Streamstrike",
    "Oriole",
    "Chimera",
    "Daub",
    "Ember",
    "Blanket",
    "Robin",
    "Brindle",
    "Paige",
    "Rosetail",
    "Safi",
    "Smudged",
    "Dapplenight",
    "Streak",
    "Mask",
    "Chest",
    "Armtail",
    "Smoke",
    "Grumpyface",
    "Brie",
    "Beloved",
    "Body",
    "Shiloh",
    "Freckled",
    "Heartbeat",
];

/// Skin tone names.
pub static SKIN_TONES: [&str; 18] = [
    "Black",
    "Pink",
    "Darkbrown",
    "Brown",
    "Lightbrown",
    "Dark",
    "Darkgrey",
    "Grey",
    "Darksalmon",
    "Salmon",
    "Peach",
    "Darkmarbled",
    "Marbled",
    "Lightmarbled",
    "Darkblue",
    "Blue",
    "Lightblue",
    "Red",
];

/// Ordinary battle/injury scar names.
pub static SCARS: [&str; 26] = [
    "One",
    "Two",
    "Three",
    "Tailscar",
    "Snout",
    "Cheek",
    "Side",
    "Throat",
    "Tailbase",
    "Belly",
    "Legbite",
    "Neckbite",
    "Face",
    "Manleg",
    "Brightheart",
    "Mantail",
    "Bridge",
    "Rightblind",
    "Leftblind",
    "Bothblind",
    "Beakcheek",
    "Beaklower",
    "Catbite",
    "Ratbite",
    "Quillchunk",
    "Quillscratch",
];

/// Missing-part and environmental-mishap scars, drawn as one pool.
pub static MISHAP_SCARS: [&str; 17] = [
    "Leftear",
    "Rightear",
    "Notail",
    "Halftail",
    "Nopaw",
    "Noleftear",
    "Norightear",
    "Noear",
    "Snake",
    "Toetrap",
    "Burnpaws",
    "Burntail",
    "Burnbelly",
    "Burnrump",
    "Frostface",
    "FrostTail",
    "Frostmitt",
];

/// Plant accessory names.
pub static PLANT_ACCESSORIES: [&str; 17] = [
    "Mapleleaf",
    "Holly",
    "Blueberries",
    "Forgetmenots",
    "Ryestalk",
    "Laurel",
    "Bluebells",
    "Nettle",
    "Poppy",
    "Lavender",
    "Herbs",
    "Petals",
    "Dryherbs",
    "Oakleaves",
    "Catmint",
    "Mapleseed",
    "Juniper",
];

/// Wild accessory names.
pub static WILD_ACCESSORIES: [&str; 5] = [
    "Redfeathers",
    "Bluefeathers",
    "Jayfeathers",
    "Mothwings",
    "Cicadawings",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_families_partition_all_colours() {
        for colour in PeltColour::ALL {
            let family = colour.family();
            assert!(family.members().contains(&colour));
            // No other family may claim it.
            for other in ColourFamily::ALL {
                if other != family {
                    assert!(!other.members().contains(&colour), "{colour:?} in {other:?}");
                }
            }
        }
        let total: usize = ColourFamily::ALL.iter().map(|f| f.members().len()).sum();
        assert_eq!(total, PeltColour::ALL.len());
    }

    #[test]
    fn pattern_categories_partition_all_patterns() {
        let total: usize = PATTERN_CATEGORIES.iter().map(|c| c.len()).sum();
        assert_eq!(total, 17);
        for (idx, group) in PATTERN_CATEGORIES.iter().enumerate() {
            for pattern in *group {
                assert_eq!(pattern.category().index(), idx);
            }
        }
    }

    #[test]
    fn eye_families_partition_all_eyes() {
        for eye in EyeColour::ALL {
            assert!(eye.family().members().contains(&eye));
        }
        assert_eq!(
            YELLOW_EYES.len() + BLUE_EYES.len() + GREEN_EYES.len(),
            EyeColour::ALL.len()
        );
    }

    #[test]
    fn white_tier_classification_is_total_over_the_pools() {
        for tier in WhiteTier::ALL {
            assert!(!tier.pool().is_empty());
            for patch in tier.pool() {
                assert_eq!(WhiteTier::of(patch), Some(tier), "{patch}");
            }
        }
        assert_eq!(WhiteTier::of("NotAPatch"), None);
    }

    #[test]
    fn tier_override_rule_matches_severity() {
        assert!(!WhiteTier::Little.overrides_points());
        assert!(!WhiteTier::Middle.overrides_points());
        assert!(WhiteTier::High.overrides_points());
        assert!(WhiteTier::Mostly.overrides_points());
        assert!(WhiteTier::Full.overrides_points());
    }

    #[test]
    fn name_pools_are_non_empty_and_duplicate_free() {
        fn check(pool: &[&str]) {
            assert!(!pool.is_empty());
            for (i, a) in pool.iter().enumerate() {
                assert!(!pool[i + 1..].contains(a), "duplicate {a}");
            }
        }
        check(&POINT_MARKINGS);
        check(&VITILIGO);
        check(&TORTIE_SHAPES);
        check(&SKIN_TONES);
        check(&SCARS);
        check(&MISHAP_SCARS);
        check(&PLANT_ACCESSORIES);
        check(&WILD_ACCESSORIES);
    }

    #[test]
    fn tortie_bases_exclude_patchwork_patterns() {
        assert!(!TORTIE_BASES.contains(&PeltPattern::Tortie));
        assert!(!TORTIE_BASES.contains(&PeltPattern::Calico));
        assert!(!TORTIE_BASES.contains(&PeltPattern::TwoColour));
        for overlay in RESTRICTED_OVERLAYS {
            assert!(TORTIE_BASES.contains(&overlay));
        }
    }
}
