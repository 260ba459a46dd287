//! Blocking brightness ramps
//!
//! Both primitives monopolize the calling context for their full duration.
//! No inputs are sampled mid-ramp and there is no way to abort one; a
//! started ramp always runs to completion.

use crate::config::FadeTimings;
use crate::{Clock, StripOutput};

/// Sweep order for the directional power-on ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDirection {
    /// Ascending channel order
    LeftToRight,
    /// Descending channel order
    RightToLeft,
}

impl SweepDirection {
    /// Channel index at a given sweep position.
    const fn channel_at(self, position: usize, count: usize) -> usize {
        match self {
            Self::LeftToRight => position,
            Self::RightToLeft => count - 1 - position,
        }
    }
}

/// Blocking ramp primitives over a strip of dimmable channels.
#[derive(Debug, Clone, Copy)]
pub struct FadeDriver {
    timings: FadeTimings,
}

impl FadeDriver {
    pub const fn new(timings: FadeTimings) -> Self {
        Self { timings }
    }

    /// Sweep the channels up one at a time in the given order.
    ///
    /// Each channel steps from 0 to 255 inclusive, one unit per step delay;
    /// the next channel starts only once the current one is at maximum.
    /// Blocks for channel count x 256 x step delay.
    pub fn ramp_in<O: StripOutput, C: Clock>(
        &self,
        direction: SweepDirection,
        levels: &mut [u8],
        output: &mut O,
        clock: &mut C,
    ) {
        let count = levels.len();
        for position in 0..count {
            let channel = direction.channel_at(position, count);
            for step in 0..=u8::MAX {
                levels[channel] = step;
                output.write(levels);
                clock.delay(self.timings.ramp_in_step);
            }
        }
    }

    /// Dim every channel together from 255 down to 0 inclusive.
    ///
    /// One frame write plus one step delay per shared level. Blocks for
    /// 256 x step delay.
    pub fn ramp_out<O: StripOutput, C: Clock>(
        &self,
        levels: &mut [u8],
        output: &mut O,
        clock: &mut C,
    ) {
        for step in (0..=u8::MAX).rev() {
            for level in levels.iter_mut() {
                *level = step;
            }
            output.write(levels);
            clock.delay(self.timings.ramp_out_step);
        }
    }
}
