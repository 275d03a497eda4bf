//! Customization controller
//!
//! The object the host firmware registers into its event loop. Owns the
//! in-memory state word and the hardware ports, translates input events
//! into state transitions, re-renders after every transition, and keeps
//! the persisted copy current through the debounced write.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bindings::{Action, Bindings};
use crate::channel::EventReceiver;
use crate::event::Event;
use crate::persist::DelayedWrite;
use crate::render::illuminate_all;
use crate::state::RgbState;
use crate::{ConfigStore, DeferTimer, LedDriver};

/// Index of the rotary encoder wired to brightness.
const BRIGHTNESS_ENCODER: u8 = 0;

/// RGB customization layer - the main orchestrator
pub struct RgbController<'a, D, S, T, const EVENT_CHANNEL_SIZE: usize>
where
    D: LedDriver,
    S: ConfigStore,
    T: DeferTimer,
{
    // External dependencies and configuration
    events: EventReceiver<'a, EVENT_CHANNEL_SIZE>,
    driver: D,
    store: S,
    timer: T,
    bindings: Bindings<'a>,

    // Internal state
    state: RgbState,
    delayed_write: DelayedWrite<T::Token>,
}

impl<'a, D, S, T, const EVENT_CHANNEL_SIZE: usize>
    RgbController<'a, D, S, T, EVENT_CHANNEL_SIZE>
where
    D: LedDriver,
    S: ConfigStore,
    T: DeferTimer,
{
    /// Create a controller over the host's ports.
    ///
    /// The state starts at power-on defaults; call [`Self::init`] once
    /// the store is ready to pick up the persisted word.
    pub fn new(
        events: EventReceiver<'a, EVENT_CHANNEL_SIZE>,
        driver: D,
        store: S,
        timer: T,
        bindings: Bindings<'a>,
    ) -> Self {
        Self {
            events,
            driver,
            store,
            timer,
            bindings,
            state: RgbState::default(),
            delayed_write: DelayedWrite::new(),
        }
    }

    /// Load the persisted word and bring the strip in line with it.
    pub fn init(&mut self) {
        self.state = RgbState::from_raw(self.store.load());
        #[cfg(feature = "esp32-log")]
        println!("[RgbController.init] loaded state {:#010x}", self.state.raw());
        illuminate_all(self.state, &mut self.driver);
    }

    /// Reinstate power-on defaults, persisting them immediately.
    ///
    /// This is the settings-reset path; the debounce is bypassed so a
    /// reset survives an immediate power cycle.
    pub fn reset(&mut self) {
        self.state = RgbState::default();
        self.store.save(self.state.raw());
        illuminate_all(self.state, &mut self.driver);
    }

    /// Current in-memory state word.
    pub const fn state(&self) -> RgbState {
        self.state
    }

    /// Drain queued events from the channel (non-blocking).
    pub fn process_pending(&mut self) {
        while let Some(event) = self.events.receive() {
            self.handle_event(event);
        }
    }

    /// Handle one input event.
    ///
    /// Returns whether the event was fully consumed. Always `false`: the
    /// host should continue its own processing (HID reports, media keys)
    /// regardless of what happened here.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key { pressed: false, .. } => {}
            Event::Key { code, pressed: true } => {
                if let Some(action) = self.bindings.action_for(code) {
                    self.apply(action);
                }
            }
            Event::Encoder { index, clockwise } => {
                if index == BRIGHTNESS_ENCODER {
                    self.apply(if clockwise {
                        Action::BrightnessUp
                    } else {
                        Action::BrightnessDown
                    });
                }
            }
        }

        false
    }

    /// Entry point for the deferred write callback.
    ///
    /// A fire that races an already-completed flush is a no-op.
    pub fn flush_timer_fired(&mut self) {
        self.delayed_write.fire(self.state.raw(), &mut self.store);
    }

    /// Apply one transition, then re-render and request persistence.
    fn apply(&mut self, action: Action) {
        match action {
            Action::SelectTheme(setting) => self.state.set_color_setting(setting),
            Action::ToggleLed(index) => self.state.toggle_flag(index),
            Action::BrightnessUp => self.state.increase_brightness(),
            Action::BrightnessDown => self.state.decrease_brightness(),
        }

        illuminate_all(self.state, &mut self.driver);
        self.delayed_write.request(&mut self.timer);
    }
}
