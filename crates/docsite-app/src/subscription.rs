//! Long-lived listeners that turn browser events into actions.
//!
//! The platform pushes [`BrowserEvent`]s into an [`EventSender`]; the host
//! owns the matching [`EventReceiver`] inside its [`Subscriptions`] and
//! polls it. Scroll events are batched per animation frame so a burst of
//! them costs one dispatch, while history navigation is dispatched as soon as
//! it is polled.

use std::sync::mpsc;

use crate::action::{Action, ScrollPayload};

/// An event raised by the browser.
#[derive(Clone, Debug, PartialEq)]
pub enum BrowserEvent {
    /// The window scrolled to a new vertical offset.
    Scroll { y: f64 },
    /// Back/forward navigation landed on `url`.
    PopState { url: String },
}

/// Create a connected sender/receiver pair.
pub fn event_channel() -> (EventSender, EventReceiver) {
    let (tx, rx) = mpsc::channel();
    (EventSender { tx }, EventReceiver { rx })
}

/// Sending half, held by whatever listens to the real browser.
#[derive(Clone, Debug)]
pub struct EventSender {
    tx: mpsc::Sender<BrowserEvent>,
}

impl EventSender {
    /// Deliver an event.
    ///
    /// Returns `false` once the subscriptions have been stopped.
    pub fn send(&self, event: BrowserEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Receiving half, owned by the host.
#[derive(Debug)]
pub struct EventReceiver {
    rx: mpsc::Receiver<BrowserEvent>,
}

impl EventReceiver {
    /// Take the next pending event without blocking.
    #[must_use]
    pub fn try_recv(&self) -> Option<BrowserEvent> {
        self.rx.try_recv().ok()
    }
}

/// A browser-level listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subscription {
    /// `scroll` on the window.
    WindowScroll,
    /// `popstate` on the window.
    HistoryPopState,
}

impl Subscription {
    /// Every listener the application starts on mount.
    pub const ALL: [Subscription; 2] = [Subscription::WindowScroll, Subscription::HistoryPopState];

    /// Whether this listener handles `event`.
    pub fn accepts(self, event: &BrowserEvent) -> bool {
        matches!(
            (self, event),
            (Self::WindowScroll, BrowserEvent::Scroll { .. })
                | (Self::HistoryPopState, BrowserEvent::PopState { .. })
        )
    }
}

/// Coalesces scroll events between two animation frames.
#[derive(Debug, Default)]
pub struct ScrollBatcher {
    pending: Option<f64>,
}

impl ScrollBatcher {
    /// Record an offset; only the latest one survives until the next flush.
    pub fn record(&mut self, y: f64) {
        self.pending = Some(y);
    }

    /// Whether a scroll is waiting for the next frame.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the batched scroll as a single action.
    pub fn flush(&mut self) -> Option<Action> {
        self.pending
            .take()
            .map(|y| Action::WindowScroll(ScrollPayload { y }))
    }
}

/// The running set of listeners.
#[derive(Debug)]
pub struct Subscriptions {
    active: Vec<Subscription>,
    receiver: Option<EventReceiver>,
    scroll: ScrollBatcher,
}

impl Subscriptions {
    /// Start every listener in [`Subscription::ALL`] on `receiver`.
    pub fn start(receiver: EventReceiver) -> Self {
        Self {
            active: Subscription::ALL.to_vec(),
            receiver: Some(receiver),
            scroll: ScrollBatcher::default(),
        }
    }

    /// Whether the listeners are still running.
    pub fn is_active(&self) -> bool {
        self.receiver.is_some()
    }

    /// Drain pending events.
    ///
    /// Returns actions that must be dispatched now. Scroll events are held
    /// back until [`frame`](Self::frame).
    pub fn poll(&mut self) -> Vec<Action> {
        let Some(receiver) = &self.receiver else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        while let Some(event) = receiver.try_recv() {
            if !self.active.iter().any(|sub| sub.accepts(&event)) {
                continue;
            }
            match event {
                BrowserEvent::Scroll { y } => self.scroll.record(y),
                BrowserEvent::PopState { url } => actions.push(Action::ParseUrl(url)),
            }
        }
        actions
    }

    /// Animation-frame tick: release the batched scroll, if any.
    pub fn frame(&mut self) -> Option<Action> {
        self.scroll.flush()
    }

    /// Stop listening. Senders see a closed channel from now on.
    pub fn stop(&mut self) {
        self.active.clear();
        self.receiver = None;
        self.scroll = ScrollBatcher::default();
    }
}
