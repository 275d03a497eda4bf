//! Desktop preview app for macropad-rgb
//!
//! Simulates the 4x4 macropad: grid keys and the encoder feed events
//! through the event channel, in-memory ports stand in for the LED
//! strip, the EEPROM, and the deferred scheduler, and synthetic time
//! makes the debounced flush observable.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use macropad_rgb::{
    Bindings, ConfigStore, DeferTimer, Duration, Event, EventChannel, EventSender, Hsv, KeyCode,
    LED_COUNT, LedDriver, Rgb, RgbController, RgbState, hsv2rgb,
};

/// Event channel size
const EVENT_CHANNEL_SIZE: usize = 16;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 22.0;

/// Gap between LEDs
const LED_GAP: f32 = 4.0;

/// Grid key labels in reading order; key N sends HID usage 0x04 + N.
const KEY_LABELS: [&str; 16] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P",
];

/// Static event channel for communication between UI and controller
static EVENTS_CHANNEL: EventChannel<EVENT_CHANNEL_SIZE> =
    EventChannel::<EVENT_CHANNEL_SIZE>::new();

/// Simulated LED strip, shared between the controller and the painter.
#[derive(Clone)]
struct SimStrip(Rc<RefCell<[Rgb; LED_COUNT as usize]>>);

impl SimStrip {
    fn new() -> Self {
        Self(Rc::new(RefCell::new(
            [Rgb { r: 0, g: 0, b: 0 }; LED_COUNT as usize],
        )))
    }

    fn snapshot(&self) -> [Rgb; LED_COUNT as usize] {
        *self.0.borrow()
    }
}

impl LedDriver for SimStrip {
    fn set_hsv(&mut self, index: u8, color: Hsv) {
        self.0.borrow_mut()[index as usize] = hsv2rgb(color);
    }

    fn set_off(&mut self, index: u8) {
        self.0.borrow_mut()[index as usize] = Rgb { r: 0, g: 0, b: 0 };
    }
}

/// Simulated EEPROM word with a write counter.
#[derive(Clone)]
struct SimEeprom(Rc<RefCell<Eeprom>>);

struct Eeprom {
    word: u32,
    writes: u32,
}

impl SimEeprom {
    fn new(word: u32) -> Self {
        Self(Rc::new(RefCell::new(Eeprom { word, writes: 0 })))
    }
}

impl ConfigStore for SimEeprom {
    fn load(&mut self) -> u32 {
        self.0.borrow().word
    }

    fn save(&mut self, raw: u32) {
        let mut eeprom = self.0.borrow_mut();
        eeprom.word = raw;
        eeprom.writes += 1;
    }
}

/// Simulated deferred scheduler driven by synthetic time.
#[derive(Clone)]
struct SimScheduler(Rc<RefCell<Scheduler>>);

struct Scheduler {
    now_ms: u64,
    deadline: Option<u64>,
    next_token: u32,
}

impl SimScheduler {
    fn new() -> Self {
        Self(Rc::new(RefCell::new(Scheduler {
            now_ms: 0,
            deadline: None,
            next_token: 0,
        })))
    }

    /// Advance time; returns `true` when the scheduled callback is due.
    fn tick(&self, delta_ms: u64) -> bool {
        let mut scheduler = self.0.borrow_mut();
        scheduler.now_ms += delta_ms;
        if let Some(deadline) = scheduler.deadline {
            if deadline <= scheduler.now_ms {
                scheduler.deadline = None;
                return true;
            }
        }
        false
    }

    /// Milliseconds until the pending callback, if any.
    fn remaining(&self) -> Option<u64> {
        let scheduler = self.0.borrow();
        scheduler
            .deadline
            .map(|d| d.saturating_sub(scheduler.now_ms))
    }
}

impl DeferTimer for SimScheduler {
    type Token = u32;

    fn schedule(&mut self, delay: Duration) -> u32 {
        let mut scheduler = self.0.borrow_mut();
        scheduler.next_token += 1;
        scheduler.deadline = Some(scheduler.now_ms + delay.as_millis());
        scheduler.next_token
    }

    fn extend(&mut self, _token: u32, delay: Duration) {
        let mut scheduler = self.0.borrow_mut();
        scheduler.deadline = Some(scheduler.now_ms + delay.as_millis());
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 440.0])
            .with_title("Macropad RGB Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "macropad-rgb-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// The controller instance under simulation
    controller: RgbController<'static, SimStrip, SimEeprom, SimScheduler, EVENT_CHANNEL_SIZE>,
    /// Event sender for UI input
    sender: EventSender<'static, EVENT_CHANNEL_SIZE>,

    // Shared port handles, read back for display
    strip: SimStrip,
    eeprom: SimEeprom,
    scheduler: SimScheduler,

    /// Wall-clock reference for delta time
    last_frame: StdInstant,
}

impl PreviewApp {
    fn new() -> Self {
        let strip = SimStrip::new();
        let eeprom = SimEeprom::new(RgbState::default().raw());
        let scheduler = SimScheduler::new();

        let mut controller = RgbController::new(
            EVENTS_CHANNEL.receiver(),
            strip.clone(),
            eeprom.clone(),
            scheduler.clone(),
            Bindings::default(),
        );
        controller.init();

        Self {
            controller,
            sender: EVENTS_CHANNEL.sender(),
            strip,
            eeprom,
            scheduler,
            last_frame: StdInstant::now(),
        }
    }

    /// Send a press/release pair for one grid key.
    fn tap_key(&self, index: usize) {
        #[allow(clippy::cast_possible_truncation)]
        let code = KeyCode(0x04 + index as u16);
        let _ = self.sender.send(Event::Key {
            code,
            pressed: true,
        });
        let _ = self.sender.send(Event::Key {
            code,
            pressed: false,
        });
    }

    /// Send one encoder detent.
    fn turn_encoder(&self, clockwise: bool) {
        let _ = self.sender.send(Event::Encoder {
            index: 0,
            clockwise,
        });
    }

    /// Advance synthetic time and fire the deferred flush when due.
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        #[allow(clippy::cast_possible_truncation)]
        let delta_ms = delta.as_millis() as u64;
        if self.scheduler.tick(delta_ms) {
            self.controller.flush_timer_fired();
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.controller.process_pending();

        // Keep ticking so the debounce countdown stays live
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <KeyGrid>
                ui.vertical(|ui| {
                    for row in 0..4 {
                        ui.horizontal(|ui| {
                            for col in 0..4 {
                                let index = row * 4 + col;
                                if ui.button(KEY_LABELS[index]).clicked() {
                                    self.tap_key(index);
                                }
                            }
                        });
                    }
                });
                // </KeyGrid>

                ui.add_space(24.0);

                // <EncoderAndReset>
                ui.vertical(|ui| {
                    ui.label("Encoder:");
                    ui.horizontal(|ui| {
                        if ui.button("- dim").clicked() {
                            self.turn_encoder(false);
                        }
                        if ui.button("+ bright").clicked() {
                            self.turn_encoder(true);
                        }
                    });

                    ui.add_space(8.0);

                    if ui.button("EEPROM reset").clicked() {
                        self.controller.reset();
                    }
                });
                // </EncoderAndReset>
            });

            ui.add_space(16.0);

            // === LED Strip ===
            let leds = self.strip.snapshot();
            let led_pitch = LED_SIZE + LED_GAP;
            #[allow(clippy::cast_precision_loss)]
            let width = leds.len() as f32 * led_pitch;
            let (response, painter) =
                ui.allocate_painter(egui::vec2(width, LED_SIZE), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in leds.iter().enumerate() {
                let x = origin.x + i as f32 * led_pitch;
                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, origin.y),
                    egui::vec2(LED_SIZE, LED_SIZE),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }

            ui.add_space(16.0);

            // === Status ===
            let state = self.controller.state();
            ui.label(format!(
                "State: {:#010x}  (theme {:?}, brightness {})",
                state.raw(),
                state.color_setting(),
                state.brightness()
            ));
            let eeprom = self.eeprom.0.borrow();
            ui.label(format!(
                "Persisted: {:#010x}  ({} writes)",
                eeprom.word, eeprom.writes
            ));
            match self.scheduler.remaining() {
                Some(remaining) => {
                    ui.label(format!("Flush in: {remaining} ms"));
                }
                None => {
                    ui.label("Flush: idle");
                }
            }
        });
    }
}
