//! Build-time configuration for the strip controller.

use embassy_time::Duration;

const DEFAULT_HOLD_MS: u64 = 10_000;
const DEFAULT_RAMP_IN_STEP_MS: u64 = 3;
const DEFAULT_RAMP_OUT_STEP_MS: u64 = 5;
const DEFAULT_DARKNESS_THRESHOLD: u16 = 200;
const DEFAULT_FLICKER_CADENCE_MS: u64 = 35;

/// Step delays for the blocking brightness ramps
#[derive(Debug, Clone, Copy)]
pub struct FadeTimings {
    /// Delay between brightness steps during the power-on sweep
    pub ramp_in_step: Duration,
    /// Delay between brightness steps during the fade-out
    pub ramp_out_step: Duration,
}

impl Default for FadeTimings {
    fn default() -> Self {
        Self {
            ramp_in_step: Duration::from_millis(DEFAULT_RAMP_IN_STEP_MS),
            ramp_out_step: Duration::from_millis(DEFAULT_RAMP_OUT_STEP_MS),
        }
    }
}

/// Configuration for the strip controller
///
/// Fixed at construction; nothing here is runtime-mutable.
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// How long the strip stays lit without a qualifying trigger
    pub hold_duration: Duration,
    /// Ambient reading at or above which power-on is permitted
    pub darkness_threshold: u16,
    /// Interval between flicker updates
    pub flicker_cadence: Duration,
    /// Ramp step delays
    pub fade: FadeTimings,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            hold_duration: Duration::from_millis(DEFAULT_HOLD_MS),
            darkness_threshold: DEFAULT_DARKNESS_THRESHOLD,
            flicker_cadence: Duration::from_millis(DEFAULT_FLICKER_CADENCE_MS),
            fade: FadeTimings::default(),
        }
    }
}
