//! Color themes
//!
//! Fixed mapping from the stored color setting to an HSV color.
//! Hue and saturation come from the table; value is supplied from the
//! live brightness at render time.

use smart_leds::hsv::Hsv;

const HUE_ME: u8 = 170;
const HUE_LOVE: u8 = 0;
const HUE_HER: u8 = 85;
const HUE_DEFAULT: u8 = 19;

/// Themes are always fully saturated.
const THEME_SATURATION: u8 = 255;

/// Selectable color themes.
///
/// The discriminants are the 2-bit encoding inside the state word and
/// must not be reordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorSetting {
    Me = 0,
    Love = 1,
    Her = 2,
    Default = 3,
}

impl ColorSetting {
    /// Decode from the 2-bit field of the state word.
    pub const fn from_raw(value: u8) -> Self {
        match value & 0b11 {
            0 => Self::Me,
            1 => Self::Love,
            2 => Self::Her,
            _ => Self::Default,
        }
    }

    /// Encode into the 2-bit field of the state word.
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Theme color at the given brightness.
    pub const fn hsv(self, value: u8) -> Hsv {
        Hsv {
            hue: self.hue(),
            sat: THEME_SATURATION,
            val: value,
        }
    }

    const fn hue(self) -> u8 {
        match self {
            Self::Me => HUE_ME,
            Self::Love => HUE_LOVE,
            Self::Her => HUE_HER,
            Self::Default => HUE_DEFAULT,
        }
    }
}
