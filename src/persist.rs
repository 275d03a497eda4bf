//! Debounced write-back of the state word
//!
//! Flash wear from rapid input (fast encoder spins, toggle mashing) is
//! bounded by collapsing each burst of mutations into a single write that
//! lands once input has been quiet for [`WRITE_DELAY`].

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{ConfigStore, DeferTimer};

/// Quiet period required before the state word is persisted.
pub const WRITE_DELAY: Duration = Duration::from_millis(2000);

/// Single-slot debounce for the persisted state word.
///
/// Holds at most one pending timer token. A request while a write is
/// already pending extends the existing deadline instead of queueing a
/// second write.
#[derive(Debug)]
pub struct DelayedWrite<K: Copy> {
    pending: Option<K>,
}

impl<K: Copy> DelayedWrite<K> {
    /// Create the machine in its idle state.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Whether a write is currently scheduled.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Request a write once the quiet period elapses.
    ///
    /// Schedules the deferred callback on the first request since the
    /// last flush and pushes the deadline back on every following one.
    pub fn request<T: DeferTimer<Token = K>>(&mut self, timer: &mut T) {
        match self.pending {
            None => self.pending = Some(timer.schedule(WRITE_DELAY)),
            Some(token) => timer.extend(token, WRITE_DELAY),
        }
    }

    /// Complete the pending write with the current word.
    ///
    /// Returns `true` if a write was performed. A fire with nothing
    /// pending is a stale callback and does nothing.
    pub fn fire<S: ConfigStore>(&mut self, raw: u32, store: &mut S) -> bool {
        if self.pending.take().is_none() {
            return false;
        }

        #[cfg(feature = "esp32-log")]
        println!("[DelayedWrite.fire] persisting state {:#010x}", raw);
        store.save(raw);
        true
    }
}

impl<K: Copy> Default for DelayedWrite<K> {
    fn default() -> Self {
        Self::new()
    }
}
