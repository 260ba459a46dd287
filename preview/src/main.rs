//! Desktop preview app for the motion strip controller
//!
//! Simulates the strip in a window. Two momentary buttons stand in for the
//! motion sensors and a slider for the ambient light sensor. The controller
//! runs on a dedicated thread because the power-on/off sweeps genuinely
//! block; the UI only observes the shared channel levels.

use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration as StdDuration, Instant as StdInstant};

use eframe::egui::{self};
use embassy_time::{Duration, Instant};
use motion_strip_controller::{
    Clock, FadeTimings, LightingState, SensorInput, StripConfig, StripController, StripOutput,
};

/// Number of simulated channels
const CHANNELS: usize = 6;

/// Size of each channel rectangle in pixels
const CHANNEL_SIZE: f32 = 48.0;

/// Gap between channels
const CHANNEL_GAP: f32 = 6.0;

/// Faster-than-production step delays so the sweeps stay snappy on screen
const PREVIEW_FADE_TIMINGS: FadeTimings = FadeTimings {
    ramp_in_step: Duration::from_millis(1),
    ramp_out_step: Duration::from_millis(2),
};

/// Shortened hold so the fade-out shows up without waiting ten seconds
const PREVIEW_HOLD_MS: u64 = 5_000;

/// Default ambient slider position (above the darkness threshold)
const DEFAULT_AMBIENT: u16 = 512;

/// Sensor state shared between the UI and the control thread
struct SharedSensors {
    left: AtomicBool,
    right: AtomicBool,
    ambient: AtomicU16,
}

/// Strip state published by the control thread
struct SharedStrip {
    levels: Mutex<[u8; CHANNELS]>,
    state: Mutex<LightingState>,
}

struct UiSensors(Arc<SharedSensors>);

impl SensorInput for UiSensors {
    fn motion_left(&mut self) -> bool {
        self.0.left.load(Ordering::Relaxed)
    }

    fn motion_right(&mut self) -> bool {
        self.0.right.load(Ordering::Relaxed)
    }

    fn ambient_light(&mut self) -> u16 {
        self.0.ambient.load(Ordering::Relaxed)
    }
}

struct UiStrip(Arc<SharedStrip>);

impl StripOutput for UiStrip {
    fn write(&mut self, levels: &[u8]) {
        let mut shared = self.0.levels.lock().unwrap();
        shared.copy_from_slice(levels);
    }
}

/// Wall-clock time source with a real sleeping delay
struct WallClock {
    origin: StdInstant,
}

impl Clock for WallClock {
    fn now(&self) -> Instant {
        let millis = u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX);
        Instant::from_millis(millis)
    }

    fn delay(&mut self, duration: Duration) {
        thread::sleep(StdDuration::from_millis(duration.as_millis()));
    }
}

/// Run the controller on its own thread; ramps block only this thread.
fn spawn_control_thread(sensors: Arc<SharedSensors>, strip: Arc<SharedStrip>) {
    thread::spawn(move || {
        let config = StripConfig {
            hold_duration: Duration::from_millis(PREVIEW_HOLD_MS),
            fade: PREVIEW_FADE_TIMINGS,
            ..StripConfig::default()
        };
        let mut controller: StripController<CHANNELS> = StripController::new(&config);
        let mut output = UiStrip(strip.clone());
        let mut inputs = UiSensors(sensors);
        let mut clock = WallClock {
            origin: StdInstant::now(),
        };

        loop {
            controller.tick(&mut output, &mut inputs, &mut clock);
            *strip.state.lock().unwrap() = controller.state();
            thread::sleep(StdDuration::from_millis(1));
        }
    });
}

fn main() -> eframe::Result<()> {
    let sensors = Arc::new(SharedSensors {
        left: AtomicBool::new(false),
        right: AtomicBool::new(false),
        ambient: AtomicU16::new(DEFAULT_AMBIENT),
    });
    let strip = Arc::new(SharedStrip {
        levels: Mutex::new([0; CHANNELS]),
        state: Mutex::new(LightingState::Off),
    });

    spawn_control_thread(sensors.clone(), strip.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 240.0])
            .with_title("Motion Strip Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "motion-strip-preview",
        options,
        Box::new(|_cc| {
            Ok(Box::new(PreviewApp {
                sensors,
                strip,
                ambient: DEFAULT_AMBIENT,
            }))
        }),
    )
}

struct PreviewApp {
    sensors: Arc<SharedSensors>,
    strip: Arc<SharedStrip>,
    /// Ambient slider position (0 = bright room, 1023 = pitch dark)
    ambient: u16,
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The control thread animates on its own; repaint continuously.
        ctx.request_repaint();

        let levels = *self.strip.levels.lock().unwrap();
        let state = *self.strip.state.lock().unwrap();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Held buttons read as continuously triggered sensors.
                let left = ui.button("⬅ Left motion").is_pointer_button_down_on();
                let right = ui.button("Right motion ➡").is_pointer_button_down_on();
                self.sensors.left.store(left, Ordering::Relaxed);
                self.sensors.right.store(right, Ordering::Relaxed);

                ui.add_space(16.0);
                ui.label(format!("State: {state:?}"));
            });

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Ambient:");
                ui.add(egui::Slider::new(&mut self.ambient, 0..=1023));
                self.sensors.ambient.store(self.ambient, Ordering::Relaxed);
            });

            ui.add_space(16.0);

            let width = CHANNELS as f32 * (CHANNEL_SIZE + CHANNEL_GAP);
            let (response, painter) =
                ui.allocate_painter(egui::vec2(width, CHANNEL_SIZE), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, &level) in levels.iter().enumerate() {
                let x = origin.x + i as f32 * (CHANNEL_SIZE + CHANNEL_GAP);
                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, origin.y),
                    egui::vec2(CHANNEL_SIZE, CHANNEL_SIZE),
                );
                painter.rect_filled(rect, 4.0, warm_white(level));
            }
        });
    }
}

/// Candle-tinted color for a brightness level
fn warm_white(level: u8) -> egui::Color32 {
    #[allow(clippy::cast_possible_truncation)]
    let g = ((u16::from(level) * 158) >> 8) as u8;
    #[allow(clippy::cast_possible_truncation)]
    let b = ((u16::from(level) * 59) >> 8) as u8;
    egui::Color32::from_rgb(level, g, b)
}
