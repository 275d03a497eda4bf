//! Rendering engine
//!
//! Projects the state word onto the LED strip. Every call produces the
//! complete image; LEDs without a set flag are explicitly switched off so
//! stale colors cannot survive a state change.

use smart_leds::hsv::Hsv;

use crate::LedDriver;
use crate::state::{LED_COUNT, RgbState};

/// Render the full LED image for `state` through `driver`.
pub fn illuminate_all<D: LedDriver>(state: RgbState, driver: &mut D) {
    let color = state.color_setting().hsv(state.brightness());
    for index in 0..LED_COUNT {
        illuminate_led(state, index, color, driver);
    }
}

/// Drive a single LED from the state word.
///
/// Indices outside the strip are silently ignored.
pub fn illuminate_led<D: LedDriver>(state: RgbState, index: u8, color: Hsv, driver: &mut D) {
    if index >= LED_COUNT {
        return;
    }

    if state.flag(index) {
        driver.set_hsv(index, color);
    } else {
        driver.set_off(index);
    }
}
