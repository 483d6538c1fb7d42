//! Player status segment
//!
//! ```text
//! CCCC III . HHHHHHHHHHHHHH . III CCCC
//! ```
//!
//! Class color caps, initiative blocks, spacers and a health bar in the
//! middle. The bar fills from the left with the healthy color.

use core::iter::FusedIterator;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::LayoutConfig;
use crate::color::{Rgbw, class_color};
use crate::game_state::Player;

/// Number of lit health pixels for the given hit points.
///
/// `ceil(hp / hp_max * width)`, with `hp` clamped to `hp_max`. A zero
/// `hp_max` lights nothing.
pub fn health_lit_count(hp: u16, hp_max: u16, width: usize) -> usize {
    if hp_max == 0 {
        #[cfg(feature = "esp32-log")]
        println!("[health_lit_count] hp_max is zero (hp={}), bar left empty", hp);
        return 0;
    }
    let hp = usize::from(hp.min(hp_max));
    (hp * width).div_ceil(usize::from(hp_max))
}

/// Colors of a single player's segment
#[derive(Debug, Clone)]
pub struct PlayerSegment<'a> {
    layout: &'a LayoutConfig,
    class_color: Rgbw,
    initiative_color: Rgbw,
    lit: usize,
    position: usize,
}

impl<'a> PlayerSegment<'a> {
    pub fn new(layout: &'a LayoutConfig, player: &Player) -> Self {
        let initiative_color = if player.is_ready() {
            layout.colors.ready
        } else {
            layout.colors.waiting
        };
        Self {
            layout,
            class_color: class_color(player.character_class),
            initiative_color,
            lit: health_lit_count(player.hp, player.hp_max, layout.health_bar_width),
            position: 0,
        }
    }

    /// Number of healthy pixels in the bar
    pub const fn lit(&self) -> usize {
        self.lit
    }

    /// Color of the pixel at `index` within the segment
    pub fn color_at(&self, index: usize) -> Option<Rgbw> {
        let layout = self.layout;
        let colors = &layout.colors;
        let initiative = layout.initiative_block();

        let mut offset = index;
        let zones = [
            (layout.color_bar_width, Zone::Cap),
            (initiative, Zone::Initiative),
            (1, Zone::Spacer),
            (layout.health_bar_width, Zone::Health),
            (1, Zone::Spacer),
            (initiative, Zone::Initiative),
            (layout.color_bar_width, Zone::Cap),
        ];
        for (width, zone) in zones {
            if offset < width {
                return Some(match zone {
                    Zone::Cap => self.class_color,
                    Zone::Initiative => self.initiative_color,
                    Zone::Spacer => colors.spacer,
                    Zone::Health if offset < self.lit => colors.healthy,
                    Zone::Health => colors.damaged,
                });
            }
            offset -= width;
        }
        None
    }
}

#[derive(Clone, Copy)]
enum Zone {
    Cap,
    Initiative,
    Spacer,
    Health,
}

impl Iterator for PlayerSegment<'_> {
    type Item = Rgbw;

    fn next(&mut self) -> Option<Rgbw> {
        let color = self.color_at(self.position)?;
        self.position += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.layout.player_width().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PlayerSegment<'_> {}

impl FusedIterator for PlayerSegment<'_> {}
