//! Bounded input-event queue for `no_std` environments.
//!
//! Hands events from interrupt context (matrix scan, encoder ISR) to the
//! main loop. Built on `critical-section` and `heapless::Deque`, so the
//! two sides may live in different execution contexts.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::event::Event;

/// Error returned when pushing into a full queue.
///
/// Carries the rejected event back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub Event);

/// A bounded, interrupt-safe queue of input events.
pub struct EventChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Event, SIZE>>>,
}

impl<const SIZE: usize> EventChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> EventSender<'_, SIZE> {
        EventSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { channel: self }
    }

    fn push(&self, event: Event) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(QueueFull)
        })
    }

    fn pop(&self) -> Option<Event> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for EventChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender half of an [`EventChannel`].
///
/// Cheap to copy into interrupt handlers.
#[derive(Clone, Copy)]
pub struct EventSender<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventSender<'_, SIZE> {
    /// Enqueue an event.
    ///
    /// Returns `Err(QueueFull(event))` if the queue is full.
    pub fn send(&self, event: Event) -> Result<(), QueueFull> {
        self.channel.push(event)
    }
}

/// Receiver half of an [`EventChannel`].
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventReceiver<'_, SIZE> {
    /// Dequeue the oldest event, if any.
    pub fn receive(&self) -> Option<Event> {
        self.channel.pop()
    }
}
