//! Game-state snapshot as delivered by the game-state client

use heapless::Vec;

use crate::color::{CharacterClass, Element};

/// Maximum number of actors a snapshot can carry
pub const MAX_ACTORS: usize = 32;

/// State of an elemental infusion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Intensity {
    #[default]
    Unused = 0,
    Full = 1,
    Waning = 2,
}

impl Intensity {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            0 => Self::Unused,
            1 => Self::Full,
            2 => Self::Waning,
            _ => return None,
        })
    }
}

/// A character controlled by someone at the table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    /// Raw class id from the protocol
    pub character_class: u8,
    pub hp: u16,
    pub hp_max: u16,
    /// Zero while the player has not declared initiative yet
    pub initiative: u8,
}

impl Player {
    /// Class of the player, if the id is known
    pub fn class(&self) -> Option<CharacterClass> {
        CharacterClass::from_raw(self.character_class)
    }

    pub const fn is_ready(&self) -> bool {
        self.initiative != 0
    }
}

/// Anything that occupies an initiative slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Actor {
    /// A figure currently backed by a player
    Player(Player),
    /// Monster groups and other figures nobody at the table controls
    Other,
}

impl Actor {
    pub const fn player(&self) -> Option<&Player> {
        match self {
            Self::Player(player) => Some(player),
            Self::Other => None,
        }
    }
}

/// Point-in-time snapshot of the board
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub actors: Vec<Actor, MAX_ACTORS>,
    pub fire: Intensity,
    pub ice: Intensity,
    pub air: Intensity,
    pub earth: Intensity,
    pub light: Intensity,
    pub dark: Intensity,
}

impl GameState {
    /// Intensity of the given element
    pub const fn intensity(&self, element: Element) -> Intensity {
        match element {
            Element::Fire => self.fire,
            Element::Ice => self.ice,
            Element::Air => self.air,
            Element::Earth => self.earth,
            Element::Light => self.light,
            Element::Dark => self.dark,
        }
    }

    /// Players in actor order
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.actors.iter().filter_map(Actor::player)
    }
}
