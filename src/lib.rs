#![no_std]

pub mod bindings;
pub mod channel;
pub mod controller;
pub mod event;
pub mod persist;
pub mod render;
pub mod state;
pub mod theme;

pub use bindings::{Action, Bindings, MACROPAD_BINDINGS};
pub use channel::{EventChannel, EventReceiver, EventSender};
pub use controller::RgbController;
pub use event::{Event, KeyCode};
pub use persist::{DelayedWrite, WRITE_DELAY};
pub use state::{BRIGHTNESS_DEFAULT, BRIGHTNESS_STEP, FIRST_TOGGLEABLE_LED, LED_COUNT, RgbState};
pub use theme::ColorSetting;

pub use embassy_time::Duration;
pub use smart_leds::hsv::{Hsv, hsv2rgb};

/// RGB triple as handed to hardware drivers and previews.
pub type Rgb = smart_leds::RGB8;

/// Abstract per-LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait LedDriver {
    /// Set one LED to an HSV color.
    fn set_hsv(&mut self, index: u8, color: Hsv);

    /// Switch one LED fully off.
    fn set_off(&mut self, index: u8);
}

/// Non-volatile storage for the packed state word.
///
/// The word is persisted verbatim; the store never interprets it.
pub trait ConfigStore {
    /// Read the persisted word.
    fn load(&mut self) -> u32;

    /// Persist the word.
    fn save(&mut self, raw: u32);
}

/// One-shot deferred execution provided by the host scheduler.
///
/// The host arranges for [`RgbController::flush_timer_fired`] to run when
/// a scheduled delay elapses.
pub trait DeferTimer {
    /// Handle identifying a scheduled callback.
    type Token: Copy;

    /// Arrange for the callback to run once after `delay`.
    fn schedule(&mut self, delay: Duration) -> Self::Token;

    /// Push an already-scheduled callback back to `delay` from now.
    fn extend(&mut self, token: Self::Token, delay: Duration);
}
