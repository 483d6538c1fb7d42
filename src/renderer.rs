#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgbw;
use crate::config::{ConfigError, TableConfig};
use crate::game_state::GameState;
use crate::gamma::GammaCorrector;
use crate::layout::{BannerSegment, PlayerSegment};
use crate::seating::Seating;
use crate::{GameStateHandler, StripDriver};

/// Summary of a single render pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Pixels handed to the driver
    pub pixels_written: usize,
    /// Player segments drawn
    pub players_rendered: usize,
    /// Actors without a player
    pub actors_skipped: usize,
}

/// Table renderer - turns game-state snapshots into strip writes
///
/// Owns the strip driver and the seating of the current session.
pub struct TableRenderer<D: StripDriver> {
    // External dependencies and configuration
    driver: D,
    config: TableConfig,

    // Internal state
    seating: Seating,
    last_sequence: Option<u32>,

    // Internal dependencies
    gamma: GammaCorrector,
}

impl<D: StripDriver> TableRenderer<D> {
    /// Create a renderer for a validated table configuration
    pub fn new(driver: D, config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            driver,
            seating: Seating::new(config.seating, config.seats.len()),
            gamma: GammaCorrector::from_config(config.gamma),
            last_sequence: None,
            config,
        })
    }

    /// Render one snapshot and flush the strip
    ///
    /// Draws the banner first, then every actor backed by a player at
    /// its seat, then calls [`StripDriver::show`] exactly once.
    pub fn render(&mut self, state: &GameState) -> RenderStats {
        let mut stats = RenderStats::default();
        let layout = &self.config.layout;

        stats.pixels_written += paint(
            &mut self.driver,
            &self.gamma,
            self.config.banner_start,
            BannerSegment::new(layout, state),
        );

        for actor in &state.actors {
            let Some(player) = actor.player() else {
                stats.actors_skipped += 1;
                continue;
            };
            let seat = self.seating.assign_or_recall(player.character_class);
            // seats handed out by the policy are checked by `TableConfig::validate`
            let Some(&start) = self.config.seats.get(seat) else {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[TableRenderer.render] seat {} has no offset, class {} skipped",
                    seat, player.character_class
                );
                continue;
            };
            stats.pixels_written += paint(
                &mut self.driver,
                &self.gamma,
                start,
                PlayerSegment::new(layout, player),
            );
            stats.players_rendered += 1;
        }

        self.driver.show();
        stats
    }

    /// Render a snapshot unless a newer one was rendered already
    ///
    /// Sequence numbers are compared with wraparound: a snapshot is newer
    /// when it is less than half the `u32` range ahead of the last one.
    /// Returns `None` when the snapshot was dropped.
    pub fn handle(&mut self, sequence: u32, state: &GameState) -> Option<RenderStats> {
        if self
            .last_sequence
            .is_some_and(|last| !is_newer(sequence, last))
        {
            #[cfg(feature = "esp32-log")]
            println!(
                "[TableRenderer.handle] dropping snapshot {} (last rendered {:?})",
                sequence, self.last_sequence
            );
            return None;
        }
        self.last_sequence = Some(sequence);
        Some(self.render(state))
    }

    /// Forget seats and message order, starting a new session
    pub fn reset_session(&mut self) {
        self.seating.reset();
        self.last_sequence = None;
    }

    pub const fn seating(&self) -> &Seating {
        &self.seating
    }

    pub const fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Sequence number of the last rendered snapshot
    pub const fn last_sequence(&self) -> Option<u32> {
        self.last_sequence
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }
}

impl<D: StripDriver> GameStateHandler for TableRenderer<D> {
    fn on_game_state(&mut self, sequence: u32, state: &GameState) {
        let _ = self.handle(sequence, state);
    }
}

/// Check if `sequence` follows `last`, allowing for counter wraparound
#[allow(clippy::cast_possible_wrap)]
const fn is_newer(sequence: u32, last: u32) -> bool {
    (sequence.wrapping_sub(last) as i32) > 0
}

/// Write a segment to consecutive pixels starting at `start`
fn paint<D: StripDriver>(
    driver: &mut D,
    gamma: &GammaCorrector,
    start: usize,
    colors: impl Iterator<Item = Rgbw>,
) -> usize {
    let mut written = 0;
    for (index, color) in (start..).zip(colors) {
        driver.set_pixel(index, gamma.correct_color(color));
        written += 1;
    }
    written
}
