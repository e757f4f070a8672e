//! cron-field - value selection for one field of a schedule expression
//!
//! Keeps a set of picked integers (minutes, hours, days, months, week days)
//! in sync with the field's cron syntax: single values, comma lists, ranges
//! and step patterns such as `*/5`. The crate provides the codec between the
//! two forms and the click engine that turns raw picks, including
//! double-clicks meaning "every Nth value", into selection changes.

pub mod codec;
pub mod config;
pub mod error;
pub mod selection;
pub mod unit;
pub mod widget;

pub use codec::{field_string, parse_field, RenderOptions, Segment};
pub use config::FieldConfig;
pub use error::{CronFieldError, Result};
pub use selection::{PickOutcome, SelectMode, SelectionEngine, SelectionSet};
pub use unit::{UnitKind, UnitSpec};

/// Identifier type used for field instances.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
