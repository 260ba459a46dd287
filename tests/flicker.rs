mod tests {
    use embassy_time::{Duration, Instant};
    use motion_strip_controller::waveform::{CANDLE_WAVEFORM, phase_offset};
    use motion_strip_controller::{FlickerEngine, StripOutput};

    const CADENCE: Duration = Duration::from_millis(35);

    struct FrameLog {
        frames: Vec<Vec<u8>>,
    }

    impl FrameLog {
        fn new() -> Self {
            Self { frames: Vec::new() }
        }
    }

    impl StripOutput for FrameLog {
        fn write(&mut self, levels: &[u8]) {
            self.frames.push(levels.to_vec());
        }
    }

    #[test]
    fn test_first_update_emits_seeded_samples() {
        let mut engine: FlickerEngine<6> = FlickerEngine::new(CADENCE);
        let mut levels = [0u8; 6];
        let mut output = FrameLog::new();

        assert_eq!(engine.cursors(), &[0, 7, 14, 21, 28, 35]);
        assert!(engine.tick(Instant::from_millis(35), &mut levels, &mut output));

        let expected: Vec<u8> = [0, 7, 14, 21, 28, 35]
            .iter()
            .map(|&cursor| CANDLE_WAVEFORM[cursor])
            .collect();
        assert_eq!(output.frames, vec![expected.clone()]);
        assert_eq!(levels.to_vec(), expected);
        assert_eq!(engine.cursors(), &[1, 8, 15, 22, 29, 36]);
    }

    #[test]
    fn test_cadence_gate_blocks_early_updates() {
        let mut engine: FlickerEngine<6> = FlickerEngine::new(CADENCE);
        let mut levels = [0u8; 6];
        let mut output = FrameLog::new();

        assert!(!engine.tick(Instant::from_millis(0), &mut levels, &mut output));
        assert!(!engine.tick(Instant::from_millis(34), &mut levels, &mut output));
        assert!(output.frames.is_empty());
        assert_eq!(levels, [0u8; 6]);
        assert_eq!(engine.cursors(), &[0, 7, 14, 21, 28, 35]);

        assert!(engine.tick(Instant::from_millis(35), &mut levels, &mut output));
        assert_eq!(output.frames.len(), 1);

        // Gate re-arms relative to the last update.
        assert!(!engine.tick(Instant::from_millis(69), &mut levels, &mut output));
        assert!(engine.tick(Instant::from_millis(70), &mut levels, &mut output));
        assert_eq!(output.frames.len(), 2);
    }

    #[test]
    fn test_cursors_wrap_around_table_length() {
        let mut engine: FlickerEngine<6> = FlickerEngine::new(Duration::from_millis(1));
        let mut levels = [0u8; 6];
        let mut output = FrameLog::new();

        for ms in 1..=64u64 {
            assert!(engine.tick(Instant::from_millis(ms), &mut levels, &mut output));
        }
        assert_eq!(engine.cursors(), &[0, 7, 14, 21, 28, 35]);
    }

    #[test]
    fn test_distinct_seeds_never_collide() {
        let mut engine: FlickerEngine<6> = FlickerEngine::new(Duration::from_millis(1));
        let mut levels = [0u8; 6];
        let mut output = FrameLog::new();

        for ms in 1..=256u64 {
            engine.tick(Instant::from_millis(ms), &mut levels, &mut output);
            let cursors = engine.cursors();
            for a in 0..cursors.len() {
                for b in (a + 1)..cursors.len() {
                    assert_ne!(cursors[a], cursors[b]);
                }
            }
        }
    }

    #[test]
    fn test_emitted_levels_follow_the_table() {
        let mut engine: FlickerEngine<3> = FlickerEngine::new(Duration::from_millis(1));
        let mut levels = [0u8; 3];
        let mut output = FrameLog::new();

        for ms in 1..=130u64 {
            engine.tick(Instant::from_millis(ms), &mut levels, &mut output);
        }

        for (step, frame) in output.frames.iter().enumerate() {
            for (channel, &level) in frame.iter().enumerate() {
                let cursor = (phase_offset(channel) + step) % CANDLE_WAVEFORM.len();
                assert_eq!(level, CANDLE_WAVEFORM[cursor]);
            }
        }
    }
}
