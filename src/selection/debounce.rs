//! Click buffering for double-click detection.
//!
//! [`ClickDebouncer`] is a bounded accumulator with a single cancellable
//! timer. The first buffered click of a group arms the timer for `window`;
//! later clicks before the deadline join the same group. A click at or after
//! the deadline (the host polled late) opens a new group and re-arms the
//! timer, and the earlier group stays buffered ahead of it. Each armed timer
//! carries a fresh [`TimerToken`], so a fire for a cancelled, superseded or
//! already consumed timer is recognised as stale and ignored.

use qtty::{Quantity, Second};

/// Point in time of a click, on any monotonic clock the host chooses.
pub type Timestamp = Quantity<Second>;

/// Default double-click window (300 ms).
pub const DOUBLE_CLICK_WINDOW: f64 = 0.3;

/// A raw pick on one option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub time: Timestamp,
    pub value: u32,
}

impl ClickEvent {
    pub fn new(time: Timestamp, value: u32) -> Self {
        Self { time, value }
    }

    pub fn at_seconds(seconds: f64, value: u32) -> Self {
        Self::new(Quantity::new(seconds), value)
    }
}

/// Identity of one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// The timer a host must run: call back with `token` once `deadline` passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTimer {
    pub token: TimerToken,
    pub deadline: Timestamp,
}

/// What a buffered group of clicks means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Toggle one value.
    Simple(u32),
    /// Two different values clicked in quick succession; both are toggled.
    Pair(u32, u32),
    /// The same value clicked twice in quick succession.
    Periodicity(u32),
}

/// Buffer of clicks awaiting classification.
#[derive(Debug, Clone)]
pub struct ClickDebouncer {
    window: Timestamp,
    buffer: Vec<ClickEvent>,
    pending: Option<PendingTimer>,
    next_token: u64,
}

impl ClickDebouncer {
    pub fn new(window: Timestamp) -> Self {
        Self {
            window,
            buffer: Vec::with_capacity(2),
            pending: None,
            next_token: 0,
        }
    }

    pub fn window(&self) -> Timestamp {
        self.window
    }

    /// The armed timer, if any.
    pub fn pending(&self) -> Option<PendingTimer> {
        self.pending
    }

    pub fn buffered(&self) -> &[ClickEvent] {
        &self.buffer
    }

    /// Buffers `event` and returns the timer the host must run.
    ///
    /// Only the first click of a group arms a timer; later clicks before its
    /// deadline return the already armed one, so at most one timer exists at
    /// a time.
    pub fn push(&mut self, event: ClickEvent) -> PendingTimer {
        self.buffer.push(event);
        match self.pending {
            Some(timer) if event.time.value() < timer.deadline.value() => timer,
            _ => {
                let timer = PendingTimer {
                    token: TimerToken(self.next_token),
                    deadline: event.time + self.window,
                };
                self.next_token += 1;
                self.pending = Some(timer);
                timer
            }
        }
    }

    /// Disarms the timer and drops buffered clicks.
    pub fn cancel(&mut self) -> Option<PendingTimer> {
        self.buffer.clear();
        self.pending.take()
    }

    /// Consumes the buffer if `token` names the armed timer.
    pub fn take(&mut self, token: TimerToken) -> Option<Vec<ClickEvent>> {
        match self.pending {
            Some(timer) if timer.token == token => {
                self.pending = None;
                Some(std::mem::take(&mut self.buffer))
            }
            _ => None,
        }
    }

    /// Token of the armed timer if its deadline is at or before `now`.
    pub fn due(&self, now: Timestamp) -> Option<TimerToken> {
        self.pending
            .filter(|timer| timer.deadline.value() <= now.value())
            .map(|timer| timer.token)
    }
}

/// Classifies buffered clicks, in arrival order.
///
/// The buffer is cut into groups the way [`ClickDebouncer::push`] arms
/// timers: a group holds the clicks less than `window` after its first one.
/// A lone click is a [`Gesture::Simple`]. Otherwise the last two clicks of
/// the group form one gesture, [`Gesture::Periodicity`] on the same value
/// and [`Gesture::Pair`] otherwise, and earlier clicks of that group are
/// superseded.
pub fn classify(events: &[ClickEvent], window: Timestamp) -> Vec<Gesture> {
    let mut gestures = Vec::new();
    let mut start = 0;
    for end in 1..=events.len() {
        let closes = events
            .get(end)
            .map_or(true, |next| (next.time - events[start].time).value() >= window.value());
        if closes {
            gestures.extend(group_gesture(&events[start..end]));
            start = end;
        }
    }
    gestures
}

fn group_gesture(group: &[ClickEvent]) -> Option<Gesture> {
    match group {
        [] => None,
        [only] => Some(Gesture::Simple(only.value)),
        [.., prev, last] if prev.value == last.value => Some(Gesture::Periodicity(last.value)),
        [.., prev, last] => Some(Gesture::Pair(prev.value, last.value)),
    }
}
