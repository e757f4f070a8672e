//! Selection transitions for single picks and periodicity picks.

use crate::error::Result;
use crate::unit::UnitSpec;

use super::set::SelectionSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many values one field may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SelectMode {
    /// A pick replaces the whole selection.
    Single,
    #[default]
    Multiple,
}

/// Toggles each of `picks` against `current`.
///
/// In [`SelectMode::Multiple`] a picked value is removed if it was selected
/// and inserted otherwise. In [`SelectMode::Single`] the selection becomes
/// the last pick alone. A result covering the whole domain is normalized to
/// the empty selection.
///
/// # Errors
///
/// [`CronFieldError::ValueOutOfRange`](crate::CronFieldError::ValueOutOfRange)
/// for any pick outside the domain; `current` is left untouched.
pub fn simple_click(
    current: &SelectionSet,
    picks: &[u32],
    unit: &UnitSpec,
    mode: SelectMode,
) -> Result<SelectionSet> {
    for &pick in picks {
        unit.check(pick)?;
    }

    let next = match mode {
        SelectMode::Single => picks
            .last()
            .map(|&v| SelectionSet::from([v]))
            .unwrap_or_else(|| current.clone()),
        SelectMode::Multiple => {
            let mut next = current.clone();
            for &pick in picks {
                if current.contains(pick) {
                    next.remove(pick);
                } else {
                    next.insert(pick);
                }
            }
            next
        }
    };

    Ok(next.normalized(unit))
}

/// Selects every multiple of `value` in the domain, or clears.
///
/// The selection is cleared instead when `value` is `0` or `1` (no useful
/// period), when the multiples cover all `available` options, or when they
/// are exactly the current selection, so a repeated double-click toggles the
/// pattern off.
///
/// # Errors
///
/// [`CronFieldError::ValueOutOfRange`](crate::CronFieldError::ValueOutOfRange)
/// if `value` is outside the domain.
pub fn toggle_double_click(
    current: &SelectionSet,
    value: u32,
    unit: &UnitSpec,
    available: usize,
) -> Result<SelectionSet> {
    unit.check(value)?;

    if value <= 1 {
        return Ok(SelectionSet::new());
    }

    let candidate =
        SelectionSet::from_sorted_unchecked(unit.values().filter(|i| i % value == 0).collect());

    if candidate.len() == available || candidate == *current {
        Ok(SelectionSet::new())
    } else {
        Ok(candidate.normalized(unit))
    }
}
