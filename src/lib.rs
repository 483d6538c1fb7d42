#![no_std]

pub mod bounds;
pub mod buffer;
pub mod color;
pub mod config;
pub mod feed;
pub mod game_state;
pub mod gamma;
pub mod layout;
pub mod renderer;
pub mod seating;

pub use buffer::PixelBuffer;
pub use config::{ChannelOrder, ConfigError, SegmentId, StripSettings, TableConfig};
pub use feed::{Publisher, Snapshot, SnapshotFeed, Subscriber, TryPublishError};
pub use game_state::{Actor, GameState, Intensity, MAX_ACTORS, Player};
pub use gamma::{GammaConfig, GammaCorrector};
pub use layout::{BannerSegment, ElementSegment, LayoutConfig, PlayerSegment, SegmentColors};
pub use renderer::{RenderStats, TableRenderer};
pub use seating::{Seating, SeatingPolicy};

pub use color::{CharacterClass, Element, Rgb, Rgbw, Status};

/// Abstract LED strip driver
///
/// Implement this trait to support different hardware platforms.
/// Writes are buffered by the driver until [`StripDriver::show`].
pub trait StripDriver {
    /// Set the color of the pixel at `index`
    fn set_pixel(&mut self, index: usize, color: Rgbw);

    /// Push all pending pixel writes to the strip
    fn show(&mut self);
}

/// Consumer of game-state snapshots
///
/// The game-state client calls this once per received message, never
/// with two messages in flight.
pub trait GameStateHandler {
    /// Handle the snapshot carried by message `sequence`
    fn on_game_state(&mut self, sequence: u32, state: &GameState);
}
