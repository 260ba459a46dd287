#![no_std]

pub mod config;
pub mod controller;
pub mod fade;
pub mod flicker;
pub mod waveform;

pub use config::{FadeTimings, StripConfig};
pub use controller::{LightingState, StripController};
pub use fade::{FadeDriver, SweepDirection};
pub use flicker::FlickerEngine;
pub use waveform::{CANDLE_WAVEFORM, PHASE_STRIDE, phase_offset};

pub use embassy_time::{Duration, Instant};

/// Abstract strip output trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait StripOutput {
    /// Write one brightness level per channel to the strip
    fn write(&mut self, levels: &[u8]);
}

/// Fresh reads of the two motion sensors and the ambient-light sensor.
///
/// Readings are trusted raw samples; no debouncing or fault states.
pub trait SensorInput {
    /// Whether the left motion sensor currently reads triggered
    fn motion_left(&mut self) -> bool;

    /// Whether the right motion sensor currently reads triggered
    fn motion_right(&mut self) -> bool;

    /// Raw ambient light sample
    fn ambient_light(&mut self) -> u16;
}

/// Time source and blocking sleep for the controller.
///
/// Every elapsed-time decision goes through `now`; the blocking ramps
/// suspend the calling context with `delay`.
pub trait Clock {
    /// Current time
    fn now(&self) -> Instant;

    /// Suspend the calling context for `duration`
    fn delay(&mut self, duration: Duration);
}
