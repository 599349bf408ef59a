// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations

//! Brew Temperature Monitor Simulator.
//!
//! Runs the display firmware against a desktop window instead of the real
//! 128x128 grayscale OLED. The thermistor is replaced by a synthetic brew
//! curve and the DotStar status LED by a virtual LED that reports its color
//! transitions on stdout.
//!
//! # Controls (Simulator Mode)
//!
//! | Key | Action |
//! |-----|--------|
//! | `F` | Toggle a simulated sensor fault on/off |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

use std::thread;
use std::time::{Duration, Instant};

use brew_monitor::colors::BLACK;
use brew_monitor::config::{FAULT_TEMP_C, SCREEN_HEIGHT, SCREEN_WIDTH};
use brew_monitor::indicator::{StatusIndicator, update_indicator};
use brew_monitor::mapper::DisplayRange;
use brew_monitor::render::draw_screen;
use brew_monitor::sampling::{SamplingLoop, TemperatureProbe};
use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

/// Synthetic probe: a slow sine between cold tap water and a rolling boil,
/// so the graph sweeps through both band edges. The fault toggle replaces
/// readings with the sentinel, exactly as a broken thermistor would.
struct SimulatedProbe {
    t: f32,
    faulted: bool,
}

impl SimulatedProbe {
    const fn new() -> Self {
        Self { t: 0.0, faulted: false }
    }
}

impl TemperatureProbe for SimulatedProbe {
    fn read_celsius(&mut self) -> f32 {
        self.t += 0.002;
        if self.faulted {
            return FAULT_TEMP_C;
        }
        let normalized = self.t.sin().mul_add(0.5, 0.5);
        60.0 + normalized * 55.0
    }
}

/// Virtual DotStar: holds the commanded state and reports color transitions.
/// Brightness pulses continuously, so only color changes are worth printing.
struct VirtualLed {
    color: (u8, u8, u8),
    brightness: u8,
    reported: Option<(u8, u8, u8)>,
}

impl VirtualLed {
    const fn new() -> Self {
        Self {
            color: (0, 0, 0),
            brightness: 0,
            reported: None,
        }
    }
}

impl StatusIndicator for VirtualLed {
    fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.color = (r, g, b);
    }

    fn set_brightness(&mut self, value: u8) {
        self.brightness = value;
    }

    fn show(&mut self) {
        if self.reported != Some(self.color) {
            let (r, g, b) = self.color;
            println!("led: #{r:02x}{g:02x}{b:02x} @ {}", self.brightness);
            self.reported = Some(self.color);
        }
    }
}

fn main() {
    let mut display: SimulatorDisplay<Gray4> =
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let mut window = Window::new("Brew Temp Monitor", &output_settings);

    let mut sampler = SamplingLoop::new();
    let mut probe = SimulatedProbe::new();
    let mut led = VirtualLed::new();
    let started = Instant::now();

    println!("probe initialized");

    display.clear(BLACK).ok();
    window.update(&display);

    'run: loop {
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'run,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent toggle spam when holding keys
                    if repeat {
                        continue;
                    }
                    if keycode == Keycode::F {
                        probe.faulted = !probe.faulted;
                        println!(
                            "probe fault {}",
                            if probe.faulted { "injected" } else { "cleared" }
                        );
                    }
                }
                _ => {}
            }
        }

        let now_ms = started.elapsed().as_millis() as u32;

        // One render per completed burst
        if sampler.poll(now_ms, &mut probe).is_some() {
            display.clear(BLACK).ok();
            draw_screen(&mut display, sampler.history(), sampler.smoothed(), now_ms);
            window.update(&display);
        }

        // The LED pulse runs every iteration, independent of render cadence
        let range = DisplayRange::from_buffer(sampler.history());
        update_indicator(&mut led, sampler.history().last(), &range, now_ms);

        thread::sleep(Duration::from_millis(2));
    }
}
