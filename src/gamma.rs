//! Gamma correction
//!
//! LEDs respond linearly to PWM duty, eyes do not. Channel values are
//! remapped through a lookup table built once from the configured
//! exponent, right before a pixel is handed to the strip driver.

use crate::color::Rgbw;

/// Exponent used by the default table
pub const DEFAULT_GAMMA: f32 = 2.5;

/// Gamma correction settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaConfig {
    /// Apply the curve at all. When off, channels pass through untouched.
    pub enabled: bool,
    /// Curve exponent
    pub exponent: f32,
}

impl GammaConfig {
    pub const DEFAULT: Self = Self {
        enabled: true,
        exponent: DEFAULT_GAMMA,
    };

    pub const DISABLED: Self = Self {
        enabled: false,
        exponent: DEFAULT_GAMMA,
    };
}

impl Default for GammaConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Per-channel gamma lookup table
#[derive(Debug, Clone)]
pub struct GammaCorrector {
    table: [u8; 256],
}

impl GammaCorrector {
    /// Build a table for `round((c / 255) ^ exponent * 255)`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(exponent: f32) -> Self {
        let exponent = f64::from(exponent);
        let mut table = [0u8; 256];
        for (value, slot) in (0u8..=255).zip(table.iter_mut()) {
            let linear = f64::from(value) / 255.0;
            *slot = libm::round(libm::pow(linear, exponent) * 255.0).clamp(0.0, 255.0) as u8;
        }
        Self { table }
    }

    /// Identity table
    pub fn linear() -> Self {
        let mut table = [0u8; 256];
        for (value, slot) in (0u8..=255).zip(table.iter_mut()) {
            *slot = value;
        }
        Self { table }
    }

    pub fn from_config(config: GammaConfig) -> Self {
        if config.enabled {
            Self::new(config.exponent)
        } else {
            Self::linear()
        }
    }

    /// Correct a single channel value
    #[inline]
    pub fn correct(&self, value: u8) -> u8 {
        self.table[usize::from(value)]
    }

    /// Correct every channel of a pixel, white included
    #[inline]
    pub fn correct_color(&self, color: Rgbw) -> Rgbw {
        let mut corrected = color;
        corrected.r = self.correct(color.r);
        corrected.g = self.correct(color.g);
        corrected.b = self.correct(color.b);
        corrected.a.0 = self.correct(color.a.0);
        corrected
    }
}

impl Default for GammaCorrector {
    fn default() -> Self {
        Self::from_config(GammaConfig::DEFAULT)
    }
}
