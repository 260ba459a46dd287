//! Lighting state machine
//!
//! Owns every piece of mutable state: the current lighting state, the hold
//! timer, the per-channel levels and the flicker engine. The host calls
//! [`StripController::tick`] once per loop pass; all timing decisions are
//! elapsed-time comparisons, so the call cadence is arbitrary. The exception
//! is the two ramp states, where the call itself blocks for the ramp
//! duration.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::StripConfig;
use crate::fade::{FadeDriver, SweepDirection};
use crate::flicker::FlickerEngine;
use crate::{Clock, SensorInput, StripOutput};

/// Lighting behavior states. Exactly one is active at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingState {
    /// Dark, waiting for a qualifying trigger
    Off,
    /// Power-on sweep in ascending channel order
    RampLeftToRight,
    /// Power-on sweep in descending channel order
    RampRightToLeft,
    /// Fully lit, candle flicker active, hold timer running
    Hold,
    /// Joint fade of the whole strip back to dark
    RampDown,
}

/// Strip controller - the main orchestrator
///
/// Reads the sensors, decides transitions, and drives either the fade
/// driver (transient sweeps) or the flicker engine (steady-on state).
pub struct StripController<const CHANNELS: usize> {
    state: LightingState,
    levels: [u8; CHANNELS],
    /// Most recent qualifying trigger; meaningful only in `Hold`
    last_trigger: Instant,
    hold_duration: Duration,
    darkness_threshold: u16,
    flicker: FlickerEngine<CHANNELS>,
    fade: FadeDriver,
}

impl<const CHANNELS: usize> StripController<CHANNELS> {
    /// Create a controller in the `Off` state with phase-seeded flicker
    /// cursors.
    ///
    /// Pin setup belongs to the host's [`StripOutput`] and [`SensorInput`]
    /// implementations and must be done before the first [`tick`](Self::tick).
    pub const fn new(config: &StripConfig) -> Self {
        Self {
            state: LightingState::Off,
            levels: [0; CHANNELS],
            last_trigger: Instant::from_millis(0),
            hold_duration: config.hold_duration,
            darkness_threshold: config.darkness_threshold,
            flicker: FlickerEngine::new(config.flicker_cadence),
            fade: FadeDriver::new(config.fade),
        }
    }

    /// Execute one pass of the state machine.
    pub fn tick<O, S, C>(&mut self, output: &mut O, sensors: &mut S, clock: &mut C)
    where
        O: StripOutput,
        S: SensorInput,
        C: Clock,
    {
        // Sampled every pass; only the Off decision consumes it. The light
        // level is never re-checked once a sweep has started.
        let ambient = sensors.ambient_light();

        match self.state {
            LightingState::Off => {
                // Left check first: on simultaneous triggers the left
                // sweep wins.
                if sensors.motion_left() && ambient >= self.darkness_threshold {
                    self.enter(LightingState::RampLeftToRight);
                } else if sensors.motion_right() && ambient >= self.darkness_threshold {
                    self.enter(LightingState::RampRightToLeft);
                } else {
                    // Safety clamp: stale levels never persist while off.
                    self.levels = [0; CHANNELS];
                    output.write(&self.levels);
                }
            }
            LightingState::RampLeftToRight => {
                self.fade.ramp_in(
                    SweepDirection::LeftToRight,
                    &mut self.levels,
                    output,
                    clock,
                );
                self.last_trigger = clock.now();
                self.enter(LightingState::Hold);
            }
            LightingState::RampRightToLeft => {
                self.fade.ramp_in(
                    SweepDirection::RightToLeft,
                    &mut self.levels,
                    output,
                    clock,
                );
                self.last_trigger = clock.now();
                self.enter(LightingState::Hold);
            }
            LightingState::Hold => {
                self.flicker.tick(clock.now(), &mut self.levels, output);

                if sensors.motion_left() || sensors.motion_right() {
                    // Renewed activity extends the hold indefinitely.
                    self.last_trigger = clock.now();
                } else if clock.now().duration_since(self.last_trigger) >= self.hold_duration {
                    self.enter(LightingState::RampDown);
                }
            }
            LightingState::RampDown => {
                self.fade.ramp_out(&mut self.levels, output, clock);
                self.enter(LightingState::Off);
            }
        }
    }

    fn enter(&mut self, next: LightingState) {
        #[cfg(feature = "esp32-log")]
        println!("[StripController] {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Current lighting state
    pub const fn state(&self) -> LightingState {
        self.state
    }

    /// Current per-channel brightness levels
    pub const fn levels(&self) -> &[u8; CHANNELS] {
        &self.levels
    }

    /// Current flicker cursor positions
    pub const fn flicker_cursors(&self) -> &[usize; CHANNELS] {
        self.flicker.cursors()
    }
}
