//! In-memory strip
//!
//! Holds the pixel values of a strip without driving any hardware.
//! Useful for previews, for feeding a driver that wants a whole frame at
//! once, and for checking what a render produced.

use crate::StripDriver;
use crate::color::{OFF, Rgbw};

/// Frame buffer of `N` pixels implementing [`StripDriver`]
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgbw; N],
    shown: [Rgbw; N],
    shows: usize,
}

impl<const N: usize> PixelBuffer<N> {
    pub const fn new() -> Self {
        Self {
            pixels: [OFF; N],
            shown: [OFF; N],
            shows: 0,
        }
    }

    /// Pixels as written, including writes not shown yet
    pub const fn pixels(&self) -> &[Rgbw; N] {
        &self.pixels
    }

    /// Pixels as of the last [`StripDriver::show`]
    pub const fn shown(&self) -> &[Rgbw; N] {
        &self.shown
    }

    /// Number of times the buffer was flushed
    pub const fn shows(&self) -> usize {
        self.shows
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StripDriver for PixelBuffer<N> {
    fn set_pixel(&mut self, index: usize, color: Rgbw) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.shown = self.pixels;
        self.shows += 1;
    }
}
