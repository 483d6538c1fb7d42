//! Seat assignment
//!
//! A class gets a seat the first time it shows up in a session and keeps
//! it until the session is reset. Seats are indices into the configured
//! seat offset table.

use heapless::LinearMap;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::CharacterClass;

/// Maximum number of classes remembered per session
pub const MAX_SEATED_CLASSES: usize = 32;

/// Fixed seats of the reference table. Unlisted classes sit at seat 1.
const TABLE_FIXED_ASSIGNMENTS: &[(CharacterClass, usize)] = &[
    (CharacterClass::AngryFace, 0),
    (CharacterClass::Triangles, 2),
    (CharacterClass::Sun, 3),
];

/// How a newly seen class is seated
///
/// Ids outside the class table sit at the fallback seat under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatingPolicy {
    /// Seats are handed out in the order classes appear.
    ///
    /// Once every seat is taken, further classes share `fallback`.
    FirstCome { fallback: usize },
    /// Listed classes sit at fixed seats, everyone else at `fallback`
    FixedByClass {
        assignments: &'static [(CharacterClass, usize)],
        fallback: usize,
    },
}

impl SeatingPolicy {
    pub const DEFAULT: Self = Self::FirstCome { fallback: 0 };

    pub const TABLE_FIXED: Self = Self::FixedByClass {
        assignments: TABLE_FIXED_ASSIGNMENTS,
        fallback: 1,
    };

    /// Seat used when no better seat is available
    pub const fn fallback(self) -> usize {
        match self {
            Self::FirstCome { fallback } | Self::FixedByClass { fallback, .. } => fallback,
        }
    }
}

impl Default for SeatingPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Seating state of one session
#[derive(Debug, Clone)]
pub struct Seating {
    policy: SeatingPolicy,
    seat_count: usize,
    positions: LinearMap<u8, usize, MAX_SEATED_CLASSES>,
    next_seat: usize,
}

impl Seating {
    /// Create an empty session for a table with `seat_count` seats
    pub const fn new(policy: SeatingPolicy, seat_count: usize) -> Self {
        Self {
            policy,
            seat_count,
            positions: LinearMap::new(),
            next_seat: 0,
        }
    }

    /// Seat for a raw class id, assigning one on first sight
    ///
    /// Ids outside the class table are never remembered and always get
    /// the policy's fallback seat.
    pub fn assign_or_recall(&mut self, class: u8) -> usize {
        if let Some(&seat) = self.positions.get(&class) {
            return seat;
        }
        let Some(known) = CharacterClass::from_raw(class) else {
            return self.policy.fallback();
        };

        let seat = self.pick_seat(known);
        if self.positions.insert(class, seat).is_err() {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Seating.assign_or_recall] seat map full, class {} not remembered",
                class
            );
            return seat;
        }
        #[cfg(feature = "esp32-log")]
        println!("[Seating.assign_or_recall] class {} seated at {}", class, seat);
        seat
    }

    /// Seat of a class, if it was already assigned
    pub fn seat_of(&self, class: u8) -> Option<usize> {
        self.positions.get(&class).copied()
    }

    /// Number of classes seated so far
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Forget every assignment and start a new session
    pub fn reset(&mut self) {
        self.positions.clear();
        self.next_seat = 0;
    }

    fn pick_seat(&mut self, class: CharacterClass) -> usize {
        let fallback = self.policy.fallback();
        // a full map cannot remember the class, so never hand out a fresh seat
        if self.positions.len() >= MAX_SEATED_CLASSES {
            return fallback;
        }
        match self.policy {
            SeatingPolicy::FirstCome { .. } => {
                if self.next_seat >= self.seat_count {
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "[Seating.pick_seat] no free seat for {}, using {}",
                        class.as_str(),
                        fallback
                    );
                    return fallback;
                }
                let seat = self.next_seat;
                self.next_seat += 1;
                seat
            }
            SeatingPolicy::FixedByClass { assignments, .. } => assignments
                .iter()
                .find(|(assigned, _)| *assigned == class)
                .map_or(fallback, |&(_, seat)| seat),
        }
    }
}
