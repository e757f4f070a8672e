//! Turns raw picks into selection transitions.
//!
//! The engine never owns the selection. Each call receives the consumer's
//! current [`SelectionSet`] and, when the pick can be resolved, returns the
//! proposed next one. The only state kept between calls is the click buffer
//! and its timer (see [`ClickDebouncer`]).
//!
//! With periodicity enabled a pick is buffered and resolved when its timer
//! fires, either through [`SelectionEngine::fire`] (host-owned timers) or
//! [`SelectionEngine::poll`] (hosts that poll each frame).

use tracing::{debug, trace, warn};

use crate::config::FieldConfig;
use crate::error::Result;
use crate::widget::options;
use crate::{generate_id, Id};

use super::click::{simple_click, toggle_double_click};
use super::debounce::{classify, ClickDebouncer, ClickEvent, Gesture, PendingTimer, TimerToken, Timestamp};
use super::set::SelectionSet;

/// Result of feeding one pick to the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    /// The pick was resolved immediately; this is the new selection.
    Applied(SelectionSet),
    /// The pick is buffered; run this timer and call back with its token.
    Pending(PendingTimer),
    /// Nothing changes: the field is read-only or disabled, clearing is not
    /// allowed, or the widget reported no toggle.
    Ignored,
}

/// Selection state machine of one field instance.
///
/// Dropping the engine cancels its pending timer.
#[derive(Debug)]
pub struct SelectionEngine {
    id: Id,
    config: FieldConfig,
    debouncer: ClickDebouncer,
    /// Number of offered options, after `option_filter`.
    available: usize,
}

impl SelectionEngine {
    pub fn new(config: FieldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            id: generate_id(),
            debouncer: ClickDebouncer::new(config.double_click_window),
            available: options(&config)?.len(),
            config,
        })
    }

    /// Identifier of this field instance, used in log events.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The armed timer, if a pick awaits classification.
    pub fn pending(&self) -> Option<PendingTimer> {
        self.debouncer.pending()
    }

    fn accepts_picks(&self) -> bool {
        !self.config.read_only && !self.config.disabled
    }

    /// Feeds a pick of `value` made at `at`.
    ///
    /// `None` is the widget's clear control: the selection is emptied at once
    /// and any buffered pick is dropped. It is ignored when the configuration
    /// does not allow clearing (see [`FieldConfig::allows_clear`]).
    ///
    /// # Errors
    ///
    /// [`CronFieldError::ValueOutOfRange`](crate::CronFieldError::ValueOutOfRange)
    /// if `value` is outside the domain. Nothing is buffered in that case.
    pub fn select(
        &mut self,
        value: Option<u32>,
        at: Timestamp,
        current: &SelectionSet,
    ) -> Result<PickOutcome> {
        if !self.accepts_picks() {
            return Ok(PickOutcome::Ignored);
        }

        let Some(value) = value else {
            if !self.config.allows_clear() {
                return Ok(PickOutcome::Ignored);
            }
            self.cancel();
            debug!(field = %self.id, unit = %self.config.unit.kind(), "selection cleared");
            return Ok(PickOutcome::Applied(SelectionSet::new()));
        };

        self.config.unit.check(value)?;

        if !self.config.periodicity_on_double_click {
            let next = simple_click(current, &[value], &self.config.unit, self.config.mode)?;
            return Ok(PickOutcome::Applied(next));
        }

        let timer = self.debouncer.push(ClickEvent::new(at, value));
        trace!(
            field = %self.id,
            value,
            buffered = self.debouncer.buffered().len(),
            deadline = timer.deadline.value(),
            "click buffered"
        );
        Ok(PickOutcome::Pending(timer))
    }

    /// Feeds the selected values reported by a multi-select widget.
    ///
    /// The widget reports the whole list after each toggle; the engine picks
    /// out the toggled value and routes it through [`select`](Self::select),
    /// so additions and removals both go through double-click detection.
    /// A report that adds or removes nothing is [`PickOutcome::Ignored`].
    pub fn on_option_click(
        &mut self,
        selected: &[u32],
        at: Timestamp,
        current: &SelectionSet,
    ) -> Result<PickOutcome> {
        let toggled = if selected.len() > current.len() {
            selected.iter().rev().copied().find(|v| !current.contains(*v))
        } else {
            current.iter().copied().find(|v| !selected.contains(v))
        };
        match toggled {
            Some(value) => self.select(Some(value), at, current),
            None => {
                trace!(field = %self.id, ?selected, "option report without a toggle");
                Ok(PickOutcome::Ignored)
            }
        }
    }

    /// Classifies the buffered clicks if `token` names the armed timer.
    ///
    /// Returns `Ok(None)` for a stale token (cancelled or already fired).
    pub fn fire(&mut self, token: TimerToken, current: &SelectionSet) -> Result<Option<SelectionSet>> {
        let Some(events) = self.debouncer.take(token) else {
            warn!(field = %self.id, ?token, "ignoring stale click timer");
            return Ok(None);
        };

        let mut next = current.clone();
        for gesture in classify(&events, self.debouncer.window()) {
            next = self.apply(gesture, &next)?;
        }
        Ok(Some(next))
    }

    /// Fires the armed timer if its deadline is at or before `now`.
    pub fn poll(&mut self, now: Timestamp, current: &SelectionSet) -> Result<Option<SelectionSet>> {
        match self.debouncer.due(now) {
            Some(token) => self.fire(token, current),
            None => Ok(None),
        }
    }

    /// Disarms the pending timer and drops buffered clicks.
    pub fn cancel(&mut self) -> Option<PendingTimer> {
        let cancelled = self.debouncer.cancel();
        if let Some(timer) = cancelled {
            debug!(field = %self.id, token = ?timer.token, "click timer cancelled");
        }
        cancelled
    }

    fn apply(&self, gesture: Gesture, current: &SelectionSet) -> Result<SelectionSet> {
        let unit = &self.config.unit;
        match gesture {
            Gesture::Simple(value) => {
                debug!(field = %self.id, unit = %unit.kind(), value, "simple toggle");
                simple_click(current, &[value], unit, self.config.mode)
            }
            Gesture::Pair(first, second) => {
                debug!(field = %self.id, unit = %unit.kind(), first, second, "pair toggle");
                simple_click(current, &[first, second], unit, self.config.mode)
            }
            Gesture::Periodicity(value) => {
                debug!(field = %self.id, unit = %unit.kind(), value, "periodicity toggle");
                toggle_double_click(current, value, unit, self.available)
            }
        }
    }
}

impl Drop for SelectionEngine {
    fn drop(&mut self) {
        self.cancel();
    }
}
