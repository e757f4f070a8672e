//! Bidirectional codec between a selection and its field string.
//!
//! ```
//! use cron_field::codec::{field_string, parse_field, RenderOptions};
//! use cron_field::{SelectionSet, UnitSpec};
//!
//! let minutes = UnitSpec::minutes();
//! let every_five: SelectionSet = (0..60).step_by(5).collect();
//!
//! let text = field_string(&every_five, &minutes, &RenderOptions::default()).unwrap();
//! assert_eq!(text, "*/5");
//!
//! let human = field_string(&every_five, &minutes, &RenderOptions::default().humanized()).unwrap();
//! assert_eq!(human, "every 5");
//!
//! let back = parse_field(&text, &minutes, &RenderOptions::default()).unwrap();
//! assert_eq!(back, every_five);
//! ```

mod format;
mod parser;
mod segment;
mod serializer;
mod text;

pub use format::{label, ClockFormat, RenderOptions, DEFAULT_EVERY_TEXT};
pub use parser::{parse, MIN_RANGE_LEN, MIN_STEP_LEN};
pub use segment::{expand, is_canonical, Segment};
pub use serializer::serialize;
pub use text::parse_field;

use crate::error::Result;
use crate::selection::SelectionSet;
use crate::unit::UnitSpec;

/// Parses `selection` into segments and serializes them.
pub fn field_string(
    selection: &SelectionSet,
    unit: &UnitSpec,
    options: &RenderOptions,
) -> Result<String> {
    let segments = parse(selection, unit)?;
    serialize(&segments, unit, options)
}
