//! Selection state: the canonical value set, pick transitions, and the
//! double-click engine that drives them.

mod click;
mod debounce;
mod engine;
mod set;

pub use click::{simple_click, toggle_double_click, SelectMode};
pub use debounce::{
    classify, ClickDebouncer, ClickEvent, Gesture, PendingTimer, TimerToken, Timestamp,
    DOUBLE_CLICK_WINDOW,
};
pub use engine::{PickOutcome, SelectionEngine};
pub use set::SelectionSet;
