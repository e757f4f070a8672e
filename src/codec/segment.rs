//! Syntactic segments of a field string.

use std::iter;

use crate::selection::SelectionSet;
use crate::unit::UnitSpec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One comma-separated piece of a field string.
///
/// | Segment | Text      | Covers                                   |
/// |---------|-----------|------------------------------------------|
/// | `Wildcard` | `*`    | the whole domain                         |
/// | `Value`    | `v`    | `v`                                      |
/// | `Range`    | `a-b`  | `a..=b`, with `a < b`                    |
/// | `Step`     | `*/d`, `o/d` | `o, o+d, o+2d, …` up to the domain max |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Segment {
    Wildcard,
    Value { value: u32 },
    Range { start: u32, end: u32 },
    Step { offset: u32, step: u32 },
}

impl Segment {
    pub const fn value(value: u32) -> Self {
        Segment::Value { value }
    }

    pub const fn range(start: u32, end: u32) -> Self {
        Segment::Range { start, end }
    }

    pub const fn step(offset: u32, step: u32) -> Self {
        Segment::Step { offset, step }
    }

    /// Smallest value covered by this segment.
    pub fn first(&self, unit: &UnitSpec) -> u32 {
        match *self {
            Segment::Wildcard => unit.min(),
            Segment::Value { value } => value,
            Segment::Range { start, .. } => start,
            Segment::Step { offset, .. } => offset,
        }
    }

    /// Largest value covered by this segment.
    pub fn last(&self, unit: &UnitSpec) -> u32 {
        match *self {
            Segment::Wildcard => unit.max(),
            Segment::Value { value } => value,
            Segment::Range { end, .. } => end,
            Segment::Step { offset, step } => {
                if step == 0 || offset > unit.max() {
                    offset
                } else {
                    offset + (unit.max() - offset) / step * step
                }
            }
        }
    }

    /// Iterates over the covered values in ascending order.
    pub fn values<'a>(&self, unit: &'a UnitSpec) -> Box<dyn Iterator<Item = u32> + 'a> {
        match *self {
            Segment::Wildcard => Box::new(unit.values()),
            Segment::Value { value } => Box::new(iter::once(value)),
            Segment::Range { start, end } => Box::new(start..=end),
            Segment::Step { offset, step } => {
                let step = step.max(1) as usize;
                Box::new((offset..=unit.max().max(offset)).step_by(step))
            }
        }
    }

    fn is_well_formed(&self, unit: &UnitSpec) -> bool {
        match *self {
            Segment::Wildcard => true,
            Segment::Value { value } => unit.contains(value),
            Segment::Range { start, end } => {
                start < end && unit.contains(start) && unit.contains(end)
            }
            Segment::Step { offset, step } => step >= 2 && unit.contains(offset),
        }
    }
}

/// Returns true if `segments` is canonical for `unit`: every segment is well
/// formed, a wildcard stands alone, and segments are sorted with no overlap
/// (previous last < next first).
pub fn is_canonical(segments: &[Segment], unit: &UnitSpec) -> bool {
    if segments.len() > 1 && segments.contains(&Segment::Wildcard) {
        return false;
    }
    segments.iter().all(|s| s.is_well_formed(unit))
        && segments
            .windows(2)
            .all(|w| w[0].last(unit) < w[1].first(unit))
}

/// Expands segments back into the selection they describe.
///
/// A wildcard expands to the empty (normalized) selection.
pub fn expand(segments: &[Segment], unit: &UnitSpec) -> SelectionSet {
    segments
        .iter()
        .flat_map(|s| s.values(unit))
        .collect::<SelectionSet>()
        .normalized(unit)
}
