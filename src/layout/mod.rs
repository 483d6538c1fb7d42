//! Segment layouts
//!
//! A segment is a contiguous run of pixels describing one thing on the
//! board: a player's status block or the elemental banner. Each layout
//! is a finite iterator of colors whose length depends only on the
//! [`LayoutConfig`], never on the game values being shown.
//!
//! Segments are `Clone`, so a render can be replayed from the start.

mod element;
mod player;

pub use element::{BannerSegment, ElementSegment};
pub use player::{PlayerSegment, health_lit_count};

use crate::color::{Element, OFF, Rgbw, rgbw};

/// Number of elements shown on the banner
pub const ELEMENT_COUNT: usize = 6;

/// Pixels drawn for one element, excluding the spacer
pub const ELEMENT_PIXELS: usize = 3;

/// Colors with a fixed meaning inside segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentColors {
    /// Initiative not declared yet
    pub waiting: Rgbw,
    /// Initiative declared
    pub ready: Rgbw,
    /// Remaining health
    pub healthy: Rgbw,
    /// Lost health
    pub damaged: Rgbw,
    /// Gap between sub-blocks
    pub spacer: Rgbw,
}

impl SegmentColors {
    pub const DEFAULT: Self = Self {
        waiting: rgbw(0, 0, 128, 0),
        ready: rgbw(0, 255, 0, 255),
        healthy: rgbw(0, 255, 0, 0),
        damaged: rgbw(255, 0, 0, 0),
        spacer: OFF,
    };
}

/// Widths and ordering of every segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Class color caps on both ends of a player segment
    pub color_bar_width: usize,
    /// Draw the initiative blocks next to the caps
    pub include_initiative: bool,
    pub initiative_width: usize,
    pub health_bar_width: usize,
    /// Follow each element with a spacer pixel
    pub element_spacer: bool,
    /// Order of elements on the banner, first to last pixel
    pub element_order: [Element; ELEMENT_COUNT],
    /// White channel levels framing the banner. Drawn as given before the
    /// elements and reversed after them.
    pub banner_fill: &'static [u8],
    pub colors: SegmentColors,
}

impl LayoutConfig {
    pub const DEFAULT: Self = Self {
        color_bar_width: 4,
        include_initiative: true,
        initiative_width: 3,
        health_bar_width: 14,
        element_spacer: true,
        element_order: [
            Element::Dark,
            Element::Light,
            Element::Earth,
            Element::Air,
            Element::Ice,
            Element::Fire,
        ],
        banner_fill: &[32, 64, 128, 255, 0],
        colors: SegmentColors::DEFAULT,
    };

    /// Effective initiative block width, zero when initiative is hidden
    pub const fn initiative_block(&self) -> usize {
        if self.include_initiative {
            self.initiative_width
        } else {
            0
        }
    }

    /// Check if any segment lights the white channel
    pub fn uses_white(&self) -> bool {
        let colors = &self.colors;
        let mut segment_colors = [colors.healthy, colors.damaged, colors.spacer]
            .into_iter()
            .chain(
                [colors.waiting, colors.ready]
                    .into_iter()
                    .filter(|_| self.include_initiative),
            );
        segment_colors.any(|color| color.a.0 != 0)
            || self.banner_fill.iter().any(|&level| level != 0)
    }

    /// Pixels in one player segment
    pub const fn player_width(&self) -> usize {
        // caps, initiative blocks and the two spacers around the health bar
        2 * self.color_bar_width + 2 * self.initiative_block() + 2 + self.health_bar_width
    }

    /// Pixels in one element segment
    pub const fn element_width(&self) -> usize {
        if self.element_spacer {
            ELEMENT_PIXELS + 1
        } else {
            ELEMENT_PIXELS
        }
    }

    /// Pixels in the whole banner, fill included
    pub const fn banner_width(&self) -> usize {
        2 * self.banner_fill.len() + ELEMENT_COUNT * self.element_width()
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
