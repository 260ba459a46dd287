//! Per-channel candle flicker animation
//!
//! Each channel owns an independent cursor into the waveform table. A
//! single cadence gate decides when all cursors advance together; the
//! per-channel phase offsets keep the emitted samples desynchronized.

use embassy_time::{Duration, Instant};

use crate::StripOutput;
use crate::waveform::{CANDLE_WAVEFORM, phase_offset};

/// Flicker animation over a fixed set of channels.
///
/// Never blocks: each [`tick`](Self::tick) does O(channel count) work and
/// returns immediately whether or not the cadence gate fired.
#[derive(Debug, Clone)]
pub struct FlickerEngine<const CHANNELS: usize> {
    cursors: [usize; CHANNELS],
    cadence: Duration,
    last_update: Instant,
}

impl<const CHANNELS: usize> FlickerEngine<CHANNELS> {
    /// Create an engine with phase-offset seeded cursors.
    pub const fn new(cadence: Duration) -> Self {
        let mut cursors = [0; CHANNELS];
        let mut channel = 0;
        while channel < CHANNELS {
            cursors[channel] = phase_offset(channel);
            channel += 1;
        }
        Self {
            cursors,
            cadence,
            last_update: Instant::from_millis(0),
        }
    }

    /// Advance the animation if the cadence interval has elapsed.
    ///
    /// When the gate fires: every channel's level is set to the sample at
    /// its cursor, each cursor steps forward with wraparound, and the frame
    /// is written once. Returns whether the gate fired.
    pub fn tick<O: StripOutput>(
        &mut self,
        now: Instant,
        levels: &mut [u8; CHANNELS],
        output: &mut O,
    ) -> bool {
        if now.duration_since(self.last_update) < self.cadence {
            return false;
        }
        self.last_update = now;

        for (level, cursor) in levels.iter_mut().zip(self.cursors.iter_mut()) {
            *level = CANDLE_WAVEFORM[*cursor];
            *cursor += 1;
            if *cursor >= CANDLE_WAVEFORM.len() {
                *cursor = 0;
            }
        }
        output.write(levels);
        true
    }

    /// Current cursor positions
    pub const fn cursors(&self) -> &[usize; CHANNELS] {
        &self.cursors
    }
}
