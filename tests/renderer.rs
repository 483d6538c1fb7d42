mod tests {
    use myrtio_table_composer::color::{CharacterClass, OFF, Rgbw, rgbw, white_only};
    use myrtio_table_composer::config::{
        ChannelOrder, ConfigError, SegmentId, StripSettings, TableConfig,
    };
    use myrtio_table_composer::game_state::{Actor, GameState, Intensity, Player};
    use myrtio_table_composer::gamma::{GammaConfig, GammaCorrector};
    use myrtio_table_composer::layout::{LayoutConfig, SegmentColors};
    use myrtio_table_composer::seating::SeatingPolicy;
    use myrtio_table_composer::{GameStateHandler, PixelBuffer, StripDriver, TableRenderer};

    /// Driver that records every call
    #[derive(Default)]
    struct RecordingDriver {
        writes: Vec<(usize, Rgbw)>,
        shows: usize,
        writes_at_show: Vec<usize>,
    }

    impl StripDriver for RecordingDriver {
        fn set_pixel(&mut self, index: usize, color: Rgbw) {
            self.writes.push((index, color));
        }

        fn show(&mut self) {
            self.shows += 1;
            self.writes_at_show.push(self.writes.len());
        }
    }

    const LINEAR: TableConfig = TableConfig {
        gamma: GammaConfig::DISABLED,
        ..TableConfig::DEFAULT
    };

    fn player(class: CharacterClass, hp: u16, hp_max: u16, initiative: u8) -> Actor {
        Actor::Player(Player {
            character_class: class.raw(),
            hp,
            hp_max,
            initiative,
        })
    }

    fn state_with(actors: &[Actor]) -> GameState {
        let mut state = GameState::default();
        for actor in actors {
            state.actors.push(*actor).unwrap();
        }
        state
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(TableConfig::DEFAULT.validate(), Ok(()));
        assert!(TableRenderer::new(RecordingDriver::default(), TableConfig::DEFAULT).is_ok());
    }

    #[test]
    fn test_rejects_seat_past_strip_end() {
        let config = TableConfig {
            seats: &[8, 280],
            ..TableConfig::DEFAULT
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SegmentOutOfBounds {
                segment: SegmentId::Seat(1),
                start: 280,
                end: 310,
                led_count: 298,
            })
        );
        assert!(TableRenderer::new(RecordingDriver::default(), config).is_err());
    }

    #[test]
    fn test_rejects_overlapping_segments() {
        let config = TableConfig {
            seats: &[8, 30],
            ..TableConfig::DEFAULT
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SegmentOverlap {
                first: SegmentId::Seat(0),
                second: SegmentId::Seat(1),
            })
        );

        let config = TableConfig {
            seats: &[240],
            ..TableConfig::DEFAULT
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SegmentOverlap {
                first: SegmentId::Seat(0),
                second: SegmentId::Banner,
            })
        );
    }

    #[test]
    fn test_rejects_banner_past_strip_end() {
        let config = TableConfig {
            banner_start: 270,
            ..TableConfig::DEFAULT
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SegmentOutOfBounds {
                segment: SegmentId::Banner,
                start: 270,
                end: 304,
                led_count: 298,
            })
        );
    }

    #[test]
    fn test_rejects_bad_seating_and_gamma() {
        let config = TableConfig {
            seats: &[],
            ..TableConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::NoSeats));

        let config = TableConfig {
            seats: &[8, 50],
            seating: SeatingPolicy::TABLE_FIXED,
            ..TableConfig::DEFAULT
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnknownSeat { seat: 2, seats: 2 })
        );

        let config = TableConfig {
            gamma: GammaConfig {
                enabled: true,
                exponent: 0.0,
            },
            ..TableConfig::DEFAULT
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidGammaExponent));
    }

    #[test]
    fn test_rejects_white_layout_on_rgb_strip() {
        let rgb_strip = StripSettings {
            channel_order: ChannelOrder::Grb,
            ..StripSettings::DEFAULT
        };
        let config = TableConfig {
            strip: rgb_strip,
            ..TableConfig::DEFAULT
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingWhiteChannel {
                channel_order: ChannelOrder::Grb,
            })
        );

        // the banner ramp alone needs the white channel
        let config = TableConfig {
            strip: rgb_strip,
            layout: LayoutConfig {
                include_initiative: false,
                ..LayoutConfig::DEFAULT
            },
            ..TableConfig::DEFAULT
        };
        assert!(config.validate().is_err());

        let config = TableConfig {
            strip: rgb_strip,
            layout: LayoutConfig {
                banner_fill: &[],
                colors: SegmentColors {
                    ready: rgbw(0, 255, 0, 0),
                    ..SegmentColors::DEFAULT
                },
                ..LayoutConfig::DEFAULT
            },
            ..TableConfig::DEFAULT
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_brute_end_to_end() {
        let mut renderer = TableRenderer::new(RecordingDriver::default(), LINEAR).unwrap();
        let stats = renderer.render(&state_with(&[player(CharacterClass::Brute, 7, 14, 0)]));
        assert_eq!(stats.players_rendered, 1);
        assert_eq!(stats.pixels_written, 34 + 30);

        let driver = renderer.driver();
        assert_eq!(driver.shows, 1);
        assert_eq!(driver.writes_at_show, [driver.writes.len()]);

        // first come, first seat
        let segment: Vec<(usize, Rgbw)> = driver
            .writes
            .iter()
            .copied()
            .filter(|&(index, _)| (8..38).contains(&index))
            .collect();
        assert_eq!(segment.len(), 30);
        for (offset, &(index, _)) in segment.iter().enumerate() {
            assert_eq!(index, 8 + offset);
        }

        let colors = SegmentColors::DEFAULT;
        let brute = CharacterClass::Brute.color();
        let pixels: Vec<Rgbw> = segment.iter().map(|&(_, color)| color).collect();
        assert_eq!(&pixels[..4], &[brute; 4]);
        assert_eq!(&pixels[26..], &[brute; 4]);
        let health = &pixels[8..22];
        let lit = (7usize * 14).div_ceil(14);
        assert_eq!(health.iter().filter(|&&c| c == colors.healthy).count(), lit);
        assert_eq!(health.iter().filter(|&&c| c == colors.damaged).count(), 14 - lit);
        assert!(health[..lit].iter().all(|&c| c == colors.healthy));
    }

    #[test]
    fn test_banner_written_first_at_offset() {
        let mut renderer = TableRenderer::new(RecordingDriver::default(), LINEAR).unwrap();
        let state = GameState {
            ice: Intensity::Full,
            ..state_with(&[player(CharacterClass::Saw, 1, 1, 0)])
        };
        renderer.render(&state);

        let writes = &renderer.driver().writes;
        let banner: Vec<usize> = writes.iter().take(34).map(|&(index, _)| index).collect();
        assert_eq!(banner, (250..284).collect::<Vec<_>>());
        assert_eq!(writes[0], (250, white_only(32)));
        assert_eq!(writes[33], (283, white_only(32)));
    }

    #[test]
    fn test_gamma_applied_once_per_write() {
        let mut renderer =
            TableRenderer::new(RecordingDriver::default(), TableConfig::DEFAULT).unwrap();
        renderer.render(&state_with(&[player(CharacterClass::Brute, 14, 14, 0)]));

        let gamma = GammaCorrector::new(2.5);
        let expected = gamma.correct_color(CharacterClass::Brute.color());
        let writes = &renderer.driver().writes;
        let cap = writes.iter().find(|&&(index, _)| index == 8).unwrap().1;
        assert_eq!(cap, expected);
        let fill = writes.iter().find(|&&(index, _)| index == 250).unwrap().1;
        assert_eq!(fill, white_only(1));
    }

    #[test]
    fn test_actors_without_player_are_skipped() {
        let mut renderer = TableRenderer::new(RecordingDriver::default(), LINEAR).unwrap();
        let state = state_with(&[
            Actor::Other,
            player(CharacterClass::Tinkerer, 5, 8, 20),
            Actor::Other,
        ]);
        let stats = renderer.render(&state);
        assert_eq!(stats.actors_skipped, 2);
        assert_eq!(stats.players_rendered, 1);
        assert_eq!(renderer.driver().shows, 1);
    }

    #[test]
    fn test_every_player_lands_on_a_seat() {
        let unknown = Actor::Player(Player {
            character_class: 200,
            hp: 3,
            hp_max: 6,
            initiative: 0,
        });
        let classes = [
            CharacterClass::Brute,
            CharacterClass::Tinkerer,
            CharacterClass::Spellweaver,
            CharacterClass::Scoundrel,
            CharacterClass::Cragheart,
            CharacterClass::Mindthief,
            CharacterClass::Sun,
        ];
        let mut state = state_with(&[unknown]);
        for class in classes {
            state.actors.push(player(class, 4, 8, 0)).unwrap();
        }

        for seating in [SeatingPolicy::DEFAULT, SeatingPolicy::TABLE_FIXED] {
            let config = TableConfig { seating, ..LINEAR };
            let mut renderer = TableRenderer::new(RecordingDriver::default(), config).unwrap();
            let stats = renderer.render(&state);
            assert_eq!(stats.players_rendered, 8);
            assert_eq!(stats.pixels_written, 34 + 8 * 30);
        }
    }

    #[test]
    fn test_empty_state_still_flushes() {
        let mut renderer = TableRenderer::new(RecordingDriver::default(), LINEAR).unwrap();
        let stats = renderer.render(&GameState::default());
        assert_eq!(stats.pixels_written, 34);
        assert_eq!(renderer.driver().shows, 1);
    }

    #[test]
    fn test_seats_persist_across_renders() {
        let mut renderer = TableRenderer::new(PixelBuffer::<298>::new(), LINEAR).unwrap();
        let brute = player(CharacterClass::Brute, 10, 10, 0);
        let saw = player(CharacterClass::Saw, 10, 10, 0);

        renderer.render(&state_with(&[brute, saw]));
        // order flipped in the next snapshot, seats stay put
        renderer.render(&state_with(&[saw, brute]));

        let shown = renderer.driver().shown();
        assert_eq!(shown[8], CharacterClass::Brute.color());
        assert_eq!(shown[50], CharacterClass::Saw.color());
        assert_eq!(renderer.driver().shows(), 2);
        assert_eq!(renderer.seating().seat_of(CharacterClass::Brute.raw()), Some(0));
        assert_eq!(renderer.seating().seat_of(CharacterClass::Saw.raw()), Some(1));
    }

    #[test]
    fn test_fixed_seating_places_classes() {
        let config = TableConfig {
            seating: SeatingPolicy::TABLE_FIXED,
            ..LINEAR
        };
        let mut renderer = TableRenderer::new(PixelBuffer::<298>::new(), config).unwrap();
        renderer.render(&state_with(&[
            player(CharacterClass::Sun, 3, 6, 0),
            player(CharacterClass::Brute, 3, 6, 0),
        ]));
        let shown = renderer.driver().shown();
        // seat 3 starts at 200, fallback seat 1 at 50
        assert_eq!(shown[200], CharacterClass::Sun.color());
        assert_eq!(shown[50], CharacterClass::Brute.color());
        assert_eq!(shown[8], OFF);
    }

    #[test]
    fn test_stale_snapshots_are_dropped() {
        let mut renderer = TableRenderer::new(PixelBuffer::<298>::new(), LINEAR).unwrap();
        let state = state_with(&[player(CharacterClass::Moon, 2, 4, 0)]);

        assert!(renderer.handle(5, &state).is_some());
        assert!(renderer.handle(5, &state).is_none());
        assert!(renderer.handle(3, &state).is_none());
        renderer.on_game_state(6, &state);
        assert_eq!(renderer.last_sequence(), Some(6));
        assert_eq!(renderer.driver().shows(), 2);

        renderer.reset_session();
        assert_eq!(renderer.last_sequence(), None);
        assert!(renderer.seating().is_empty());
        assert!(renderer.handle(1, &state).is_some());
    }

    #[test]
    fn test_sequence_wraparound_is_newer() {
        let mut renderer = TableRenderer::new(PixelBuffer::<298>::new(), LINEAR).unwrap();
        let state = GameState::default();

        assert!(renderer.handle(u32::MAX - 1, &state).is_some());
        assert!(renderer.handle(u32::MAX, &state).is_some());
        assert!(renderer.handle(0, &state).is_some());
        assert!(renderer.handle(2, &state).is_some());
        assert!(renderer.handle(u32::MAX - 3, &state).is_none());
        assert_eq!(renderer.last_sequence(), Some(2));
        assert_eq!(renderer.driver().shows(), 4);
    }

    #[test]
    fn test_zero_hp_max_renders_empty_bar() {
        let mut renderer = TableRenderer::new(PixelBuffer::<298>::new(), LINEAR).unwrap();
        renderer.render(&state_with(&[player(CharacterClass::Brute, 3, 0, 0)]));
        let shown = renderer.driver().shown();
        let damaged = SegmentColors::DEFAULT.damaged;
        assert!(shown[16..30].iter().all(|&c| c == damaged));
    }
}
