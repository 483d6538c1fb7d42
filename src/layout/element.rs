//! Elemental indicators and the banner that groups them

use core::iter::FusedIterator;

use super::{ELEMENT_COUNT, ELEMENT_PIXELS, LayoutConfig};
use crate::color::{Element, OFF, Rgbw, white_only, widen};
use crate::game_state::{GameState, Intensity};

/// Pixel `index` of an element indicator.
///
/// Unused is dark, full lights all three pixels, waning lights the middle
/// one. Index three is the spacer.
fn element_pixel(element: Element, intensity: Intensity, index: usize, spacer: Rgbw) -> Rgbw {
    let color = widen(element.color());
    match (intensity, index) {
        (_, i) if i >= ELEMENT_PIXELS => spacer,
        (Intensity::Unused, _) => OFF,
        (Intensity::Full, _) => color,
        (Intensity::Waning, 1) => color,
        (Intensity::Waning, _) => OFF,
    }
}

/// Colors of one element indicator
#[derive(Debug, Clone)]
pub struct ElementSegment {
    element: Element,
    intensity: Intensity,
    spacer: Option<Rgbw>,
    position: usize,
}

impl ElementSegment {
    pub fn new(layout: &LayoutConfig, element: Element, intensity: Intensity) -> Self {
        Self {
            element,
            intensity,
            spacer: layout.element_spacer.then_some(layout.colors.spacer),
            position: 0,
        }
    }

    const fn width(&self) -> usize {
        if self.spacer.is_some() {
            ELEMENT_PIXELS + 1
        } else {
            ELEMENT_PIXELS
        }
    }
}

impl Iterator for ElementSegment {
    type Item = Rgbw;

    fn next(&mut self) -> Option<Rgbw> {
        if self.position >= self.width() {
            return None;
        }
        let color = element_pixel(
            self.element,
            self.intensity,
            self.position,
            self.spacer.unwrap_or(OFF),
        );
        self.position += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.width().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ElementSegment {}

impl FusedIterator for ElementSegment {}

/// The elemental banner: fill ramp, six indicators, mirrored fill ramp
#[derive(Debug, Clone)]
pub struct BannerSegment<'a> {
    layout: &'a LayoutConfig,
    intensities: [Intensity; ELEMENT_COUNT],
    position: usize,
}

impl<'a> BannerSegment<'a> {
    pub fn new(layout: &'a LayoutConfig, state: &GameState) -> Self {
        Self {
            layout,
            intensities: layout.element_order.map(|element| state.intensity(element)),
            position: 0,
        }
    }

    /// Color of the pixel at `index` within the banner
    pub fn color_at(&self, index: usize) -> Option<Rgbw> {
        let layout = self.layout;
        let fill = layout.banner_fill;
        if index < fill.len() {
            return Some(white_only(fill[index]));
        }

        let offset = index - fill.len();
        let element_width = layout.element_width();
        let body = ELEMENT_COUNT * element_width;
        if offset < body {
            let slot = offset / element_width;
            return Some(element_pixel(
                layout.element_order[slot],
                self.intensities[slot],
                offset % element_width,
                layout.colors.spacer,
            ));
        }

        let offset = offset - body;
        fill.len()
            .checked_sub(offset + 1)
            .map(|mirrored| white_only(fill[mirrored]))
    }
}

impl Iterator for BannerSegment<'_> {
    type Item = Rgbw;

    fn next(&mut self) -> Option<Rgbw> {
        let color = self.color_at(self.position)?;
        self.position += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.layout.banner_width().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BannerSegment<'_> {}

impl FusedIterator for BannerSegment<'_> {}
