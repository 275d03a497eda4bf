//! Key-to-action bindings
//!
//! Maps designated key codes to customization actions. The stock macropad
//! assignment covers all sixteen keys of the 4x4 grid; hosts with a
//! different layout supply their own table.

use crate::event::KeyCode;
use crate::state::FIRST_TOGGLEABLE_LED;
use crate::theme::ColorSetting;

/// One customization transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Select the active color theme.
    SelectTheme(ColorSetting),
    /// Flip the toggle for one LED.
    ToggleLed(u8),
    /// Step brightness up by one increment.
    BrightnessUp,
    /// Step brightness down by one increment.
    BrightnessDown,
}

// HID keyboard usages for the sixteen grid keys.
const KC_A: KeyCode = KeyCode(0x04);
const KC_B: KeyCode = KeyCode(0x05);
const KC_C: KeyCode = KeyCode(0x06);
const KC_D: KeyCode = KeyCode(0x07);
const KC_E: KeyCode = KeyCode(0x08);
const KC_F: KeyCode = KeyCode(0x09);
const KC_G: KeyCode = KeyCode(0x0A);
const KC_H: KeyCode = KeyCode(0x0B);
const KC_I: KeyCode = KeyCode(0x0C);
const KC_J: KeyCode = KeyCode(0x0D);
const KC_K: KeyCode = KeyCode(0x0E);
const KC_L: KeyCode = KeyCode(0x0F);
const KC_M: KeyCode = KeyCode(0x10);
const KC_N: KeyCode = KeyCode(0x11);
const KC_O: KeyCode = KeyCode(0x12);
const KC_P: KeyCode = KeyCode(0x13);

/// Stock assignment for the 4x4 macropad.
///
/// The top row selects themes; the remaining twelve keys toggle LEDs
/// 3..=14 in reading order.
pub const MACROPAD_BINDINGS: [(KeyCode, Action); 16] = [
    (KC_A, Action::SelectTheme(ColorSetting::Her)),
    (KC_B, Action::SelectTheme(ColorSetting::Love)),
    (KC_C, Action::SelectTheme(ColorSetting::Me)),
    (KC_D, Action::SelectTheme(ColorSetting::Default)),
    (KC_E, Action::ToggleLed(FIRST_TOGGLEABLE_LED)),
    (KC_F, Action::ToggleLed(FIRST_TOGGLEABLE_LED + 1)),
    (KC_G, Action::ToggleLed(FIRST_TOGGLEABLE_LED + 2)),
    (KC_H, Action::ToggleLed(FIRST_TOGGLEABLE_LED + 3)),
    (KC_I, Action::ToggleLed(FIRST_TOGGLEABLE_LED + 4)),
    (KC_J, Action::ToggleLed(FIRST_TOGGLEABLE_LED + 5)),
    (KC_K, Action::ToggleLed(FIRST_TOGGLEABLE_LED + 6)),
    (KC_L, Action::ToggleLed(FIRST_TOGGLEABLE_LED + 7)),
    (KC_M, Action::ToggleLed(FIRST_TOGGLEABLE_LED + 8)),
    (KC_N, Action::ToggleLed(FIRST_TOGGLEABLE_LED + 9)),
    (KC_O, Action::ToggleLed(FIRST_TOGGLEABLE_LED + 10)),
    (KC_P, Action::ToggleLed(FIRST_TOGGLEABLE_LED + 11)),
];

/// Key-code to action lookup table.
#[derive(Clone, Copy, Debug)]
pub struct Bindings<'a> {
    entries: &'a [(KeyCode, Action)],
}

impl<'a> Bindings<'a> {
    /// Wrap a host-supplied table.
    pub const fn new(entries: &'a [(KeyCode, Action)]) -> Self {
        Self { entries }
    }

    /// The action bound to `code`, if any.
    pub fn action_for(&self, code: KeyCode) -> Option<Action> {
        self.entries
            .iter()
            .find(|(bound, _)| *bound == code)
            .map(|(_, action)| *action)
    }
}

impl Default for Bindings<'static> {
    /// The stock macropad table.
    fn default() -> Self {
        Self::new(&MACROPAD_BINDINGS)
    }
}
