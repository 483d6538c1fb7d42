//! Table configuration
//!
//! Everything about the physical table is fixed at startup: strip length,
//! where each seat's segment starts, where the banner goes and how wide
//! the segments are. [`TableConfig::validate`] rejects layouts that run
//! off the strip, paint over each other or need a white channel the strip
//! does not have.

use core::fmt;

use crate::bounds::SegmentBounds;
use crate::gamma::GammaConfig;
use crate::layout::LayoutConfig;
use crate::seating::SeatingPolicy;

/// Order in which the strip expects color channels on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Grb,
    Rgbw,
    Grbw,
}

impl ChannelOrder {
    pub const fn has_white(self) -> bool {
        matches!(self, Self::Rgbw | Self::Grbw)
    }
}

/// Hardware settings handed through to the strip driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripSettings {
    /// Number of pixels on the strip
    pub led_count: usize,
    /// Data pin, must support PWM
    pub pin: u8,
    /// Signal frequency
    pub frequency_hz: u32,
    pub dma_channel: u8,
    /// Global brightness (0-255)
    pub brightness: u8,
    /// Invert the signal, for NPN level shifters
    pub invert: bool,
    pub channel: u8,
    pub channel_order: ChannelOrder,
}

impl StripSettings {
    pub const DEFAULT: Self = Self {
        led_count: 298,
        pin: 12,
        frequency_hz: 800_000,
        dma_channel: 10,
        brightness: 16,
        invert: false,
        channel: 0,
        channel_order: ChannelOrder::Grbw,
    };
}

/// Segment named in a configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentId {
    Seat(usize),
    Banner,
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seat(seat) => write!(f, "seat {seat}"),
            Self::Banner => f.write_str("banner"),
        }
    }
}

/// Reasons a table configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A segment ends past the last pixel
    SegmentOutOfBounds {
        segment: SegmentId,
        start: usize,
        end: usize,
        led_count: usize,
    },
    /// Two segments share pixels
    SegmentOverlap { first: SegmentId, second: SegmentId },
    /// The seat table is empty
    NoSeats,
    /// The seating policy refers to a seat that does not exist
    UnknownSeat { seat: usize, seats: usize },
    /// Gamma is enabled with a non-positive or non-finite exponent
    InvalidGammaExponent,
    /// The layout lights the white channel but the strip has none
    MissingWhiteChannel { channel_order: ChannelOrder },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SegmentOutOfBounds {
                segment,
                start,
                end,
                led_count,
            } => write!(
                f,
                "{segment} spans pixels {start}..{end} but the strip has {led_count}"
            ),
            Self::SegmentOverlap { first, second } => {
                write!(f, "{first} overlaps {second}")
            }
            Self::NoSeats => f.write_str("no seats configured"),
            Self::UnknownSeat { seat, seats } => {
                write!(f, "seat {seat} referenced but only {seats} seats exist")
            }
            Self::InvalidGammaExponent => f.write_str("gamma exponent must be positive"),
            Self::MissingWhiteChannel { channel_order } => write!(
                f,
                "layout uses the white channel but the strip order is {channel_order:?}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Seat offsets of the reference table. The fifth seat is at the table end.
const DEFAULT_SEATS: &[usize] = &[8, 50, 155, 200, 105];

/// Complete description of a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    pub strip: StripSettings,
    /// First pixel of each seat's segment, indexed by seat
    pub seats: &'static [usize],
    /// First pixel of the elemental banner
    pub banner_start: usize,
    pub layout: LayoutConfig,
    pub seating: SeatingPolicy,
    pub gamma: GammaConfig,
}

impl TableConfig {
    pub const DEFAULT: Self = Self {
        strip: StripSettings::DEFAULT,
        seats: DEFAULT_SEATS,
        banner_start: 250,
        layout: LayoutConfig::DEFAULT,
        seating: SeatingPolicy::DEFAULT,
        gamma: GammaConfig::DEFAULT,
    };

    /// Pixel range of a seat's segment
    pub fn seat_bounds(&self, seat: usize) -> Option<SegmentBounds> {
        let start = *self.seats.get(seat)?;
        Some(SegmentBounds::new(start, self.layout.player_width()))
    }

    /// Pixel range of the elemental banner
    pub const fn banner_bounds(&self) -> SegmentBounds {
        SegmentBounds::new(self.banner_start, self.layout.banner_width())
    }

    /// Check the configuration against the strip
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seats.is_empty() {
            return Err(ConfigError::NoSeats);
        }
        if self.gamma.enabled
            && !(self.gamma.exponent.is_finite() && self.gamma.exponent > 0.0)
        {
            return Err(ConfigError::InvalidGammaExponent);
        }
        let channel_order = self.strip.channel_order;
        if !channel_order.has_white() && self.layout.uses_white() {
            return Err(ConfigError::MissingWhiteChannel { channel_order });
        }
        self.validate_seating()?;

        let led_count = self.strip.led_count;
        let segments = self.segment_count();
        for i in 0..segments {
            let (segment, bounds) = self.segment(i);
            if !bounds.fits(led_count) {
                return Err(ConfigError::SegmentOutOfBounds {
                    segment,
                    start: bounds.start,
                    end: bounds.end,
                    led_count,
                });
            }
            for j in (i + 1)..segments {
                let (other, other_bounds) = self.segment(j);
                if bounds.overlaps(other_bounds) {
                    return Err(ConfigError::SegmentOverlap {
                        first: segment,
                        second: other,
                    });
                }
            }
        }
        Ok(())
    }

    fn validate_seating(&self) -> Result<(), ConfigError> {
        let seats = self.seats.len();
        let check = |seat: usize| {
            if seat < seats {
                Ok(())
            } else {
                Err(ConfigError::UnknownSeat { seat, seats })
            }
        };
        check(self.seating.fallback())?;
        if let SeatingPolicy::FixedByClass { assignments, .. } = self.seating {
            for &(_, seat) in assignments {
                check(seat)?;
            }
        }
        Ok(())
    }

    /// Seats followed by the banner
    const fn segment_count(&self) -> usize {
        self.seats.len() + 1
    }

    fn segment(&self, index: usize) -> (SegmentId, SegmentBounds) {
        match self.seat_bounds(index) {
            Some(bounds) => (SegmentId::Seat(index), bounds),
            None => (SegmentId::Banner, self.banner_bounds()),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
