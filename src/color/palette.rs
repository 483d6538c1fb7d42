//! Static color tables for game entities
//!
//! Maps character classes, elements and conditions to the colors
//! shown on the strip. Lookups are total: anything without an entry
//! renders as [`DEFAULT_CLASS_COLOR`].

use crate::color::{Rgb, Rgbw, rgbw};

/// Number of character class ids known to the game-state protocol
pub const CLASS_COUNT: usize = 21;

/// Color used for classes without a palette entry
pub const DEFAULT_CLASS_COLOR: Rgbw = rgbw(255, 255, 255, 0);

/// Character classes as numbered by the game-state protocol.
///
/// Several classes are only known by their box icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CharacterClass {
    Escort = 0,
    Objective = 1,
    Brute = 2,
    Cragheart = 3,
    Mindthief = 4,
    Scoundrel = 5,
    Spellweaver = 6,
    Tinkerer = 7,
    Diviner = 8,
    TwoMinis = 9,
    Lightning = 10,
    AngryFace = 11,
    Triangles = 12,
    Moon = 13,
    ChuluFace = 14,
    TripleArrow = 15,
    Saw = 16,
    MusicNote = 17,
    Circles = 18,
    Sun = 19,
    Value20 = 20,
}

const ALL_CLASSES: [CharacterClass; CLASS_COUNT] = [
    CharacterClass::Escort,
    CharacterClass::Objective,
    CharacterClass::Brute,
    CharacterClass::Cragheart,
    CharacterClass::Mindthief,
    CharacterClass::Scoundrel,
    CharacterClass::Spellweaver,
    CharacterClass::Tinkerer,
    CharacterClass::Diviner,
    CharacterClass::TwoMinis,
    CharacterClass::Lightning,
    CharacterClass::AngryFace,
    CharacterClass::Triangles,
    CharacterClass::Moon,
    CharacterClass::ChuluFace,
    CharacterClass::TripleArrow,
    CharacterClass::Saw,
    CharacterClass::MusicNote,
    CharacterClass::Circles,
    CharacterClass::Sun,
    CharacterClass::Value20,
];

impl CharacterClass {
    pub fn from_raw(value: u8) -> Option<Self> {
        ALL_CLASSES.get(usize::from(value)).copied()
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Escort => "Escort",
            Self::Objective => "Objective",
            Self::Brute => "Brute",
            Self::Cragheart => "Cragheart",
            Self::Mindthief => "Mindthief",
            Self::Scoundrel => "Scoundrel",
            Self::Spellweaver => "Spellweaver",
            Self::Tinkerer => "Tinkerer",
            Self::Diviner => "Diviner",
            Self::TwoMinis => "TwoMinis",
            Self::Lightning => "Lightning",
            Self::AngryFace => "AngryFace",
            Self::Triangles => "Triangles",
            Self::Moon => "Moon",
            Self::ChuluFace => "ChuluFace",
            Self::TripleArrow => "TripleArrow",
            Self::Saw => "Saw",
            Self::MusicNote => "MusicNote",
            Self::Circles => "Circles",
            Self::Sun => "Sun",
            Self::Value20 => "Value20",
        }
    }

    /// Palette entry for the class, if it has one
    pub const fn palette_color(self) -> Option<Rgbw> {
        Some(match self {
            Self::Brute => rgbw(78, 127, 193, 0),
            Self::Cragheart => rgbw(137, 149, 56, 0),
            Self::Mindthief => rgbw(100, 124, 157, 0),
            Self::Scoundrel => rgbw(165, 209, 102, 0),
            Self::Spellweaver => rgbw(181, 120, 179, 0),
            Self::Tinkerer => rgbw(197, 181, 141, 0),
            Self::TwoMinis => rgbw(173, 116, 92, 0),
            Self::Lightning => rgbw(209, 78, 78, 0),
            Self::AngryFace => rgbw(56, 195, 241, 0),
            Self::Triangles => rgbw(158, 158, 158, 0),
            Self::Moon => rgbw(158, 159, 205, 0),
            Self::ChuluFace => rgbw(116, 199, 187, 0),
            Self::TripleArrow => rgbw(217, 137, 38, 0),
            Self::Saw => rgbw(223, 221, 202, 0),
            Self::MusicNote => rgbw(223, 126, 122, 0),
            Self::Circles => rgbw(235, 111, 163, 0),
            Self::Sun => rgbw(243, 195, 57, 0),
            Self::Value20 => rgbw(255, 1, 1, 0),
            Self::Escort | Self::Objective | Self::Diviner => return None,
        })
    }

    /// Color of the class, falling back to white
    pub const fn color(self) -> Rgbw {
        match self.palette_color() {
            Some(color) => color,
            None => DEFAULT_CLASS_COLOR,
        }
    }
}

/// Color for a raw protocol class id
///
/// Ids outside the class table render as [`DEFAULT_CLASS_COLOR`].
pub fn class_color(raw: u8) -> Rgbw {
    CharacterClass::from_raw(raw).map_or(DEFAULT_CLASS_COLOR, CharacterClass::color)
}

/// Elemental infusions tracked on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    Fire,
    Ice,
    Air,
    Earth,
    Light,
    Dark,
}

impl Element {
    pub const fn color(self) -> Rgb {
        match self {
            Self::Fire => Rgb { r: 226, g: 66, b: 30 },
            Self::Ice => Rgb { r: 85, g: 200, b: 239 },
            Self::Air => Rgb { r: 152, g: 176, b: 181 },
            Self::Earth => Rgb { r: 124, g: 168, b: 42 },
            Self::Light => Rgb { r: 236, g: 166, b: 15 },
            Self::Dark => Rgb { r: 31, g: 50, b: 131 },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Ice => "ice",
            Self::Air => "air",
            Self::Earth => "earth",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Conditions that can be applied to a figure.
///
/// Not drawn by the current layouts; kept so a condition strip can use
/// the same palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Stun,
    Immobilize,
    Disarm,
    Wound,
    Muddle,
    Poison,
    Strengthen,
    Invisible,
    Regenerate,
}

impl Status {
    pub const fn color(self) -> Rgb {
        match self {
            Self::Stun => Rgb { r: 46, g: 64, b: 103 },
            Self::Immobilize => Rgb { r: 153, g: 40, b: 45 },
            Self::Disarm => Rgb { r: 98, g: 116, b: 122 },
            Self::Wound => Rgb { r: 230, g: 80, b: 29 },
            Self::Muddle => Rgb { r: 105, g: 78, b: 59 },
            Self::Poison => Rgb { r: 116, g: 124, b: 94 },
            Self::Strengthen => Rgb { r: 89, g: 150, b: 214 },
            Self::Invisible => Rgb { r: 25, g: 23, b: 21 },
            Self::Regenerate => Rgb { r: 200, g: 59, b: 150 },
        }
    }
}
