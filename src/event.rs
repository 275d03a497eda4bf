//! Input events delivered by the host firmware.

/// A key identifier as reported by the host's matrix scan.
///
/// Values follow HID keyboard usages. Only codes present in the active
/// binding table are interpreted; everything else passes through
/// untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyCode(pub u16);

/// Discrete input event dispatched by the host event loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A key went down or up.
    Key {
        /// Which key.
        code: KeyCode,
        /// `true` on press, `false` on release.
        pressed: bool,
    },
    /// A rotary encoder moved one detent.
    Encoder {
        /// Which encoder.
        index: u8,
        /// Direction of the turn.
        clockwise: bool,
    },
}
