//! Rendering of segments as a field string.

use crate::error::Result;
use crate::unit::UnitSpec;

use super::format::{label, RenderOptions};
use super::segment::{is_canonical, Segment};

/// Joins `segments` into the canonical field string.
///
/// - `Wildcard` → `*`
/// - `Value` → its label
/// - `Range` → `a-b`, numeric when alternative labels would be used
/// - `Step` → `*/d` from the domain minimum, plain `o/d` otherwise; with
///   `humanize`, a step from the minimum reads `"<every_text> d"` unless
///   `every_text` is blank
///
/// `segments` must be canonical (see [`is_canonical`]); this is only
/// asserted in debug builds.
///
/// # Errors
///
/// [`CronFieldError::ValueOutOfRange`](crate::CronFieldError::ValueOutOfRange)
/// if a segment names a value outside the domain.
pub fn serialize(segments: &[Segment], unit: &UnitSpec, options: &RenderOptions) -> Result<String> {
    debug_assert!(
        is_canonical(segments, unit),
        "serialize called with non-canonical segments: {segments:?}"
    );

    let mut parts = Vec::with_capacity(segments.len());
    for segment in segments {
        parts.push(segment_to_string(segment, unit, options)?);
    }
    Ok(parts.join(","))
}

fn segment_to_string(segment: &Segment, unit: &UnitSpec, options: &RenderOptions) -> Result<String> {
    match *segment {
        Segment::Wildcard => Ok("*".to_string()),
        Segment::Value { value } => label(value, unit, options),
        Segment::Range { start, end } => {
            let numeric = options.numeric();
            Ok(format!(
                "{}-{}",
                label(start, unit, &numeric)?,
                label(end, unit, &numeric)?
            ))
        }
        Segment::Step { offset, step } => {
            unit.check(offset)?;
            let every_text = options.every_text.trim();
            if offset == unit.min() {
                if options.humanize && !every_text.is_empty() {
                    Ok(format!("{every_text} {step}"))
                } else {
                    Ok(format!("*/{step}"))
                }
            } else {
                Ok(format!("{offset}/{step}"))
            }
        }
    }
}
