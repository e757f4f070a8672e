//! Numeric domains of the schedule fields.
//!
//! A [`UnitSpec`] describes the values one field can take: the contiguous
//! range `[min, min + total - 1]`, plus optional alternative labels used when
//! values are humanized (month and week day names).

use std::fmt;

use crate::error::{CronFieldError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field kind, which drives kind-specific formatting (clock formats, names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum UnitKind {
    Minutes,
    Hours,
    MonthDays,
    Months,
    WeekDays,
}

impl UnitKind {
    /// Returns all field kinds in expression order.
    pub fn all() -> [UnitKind; 5] {
        [
            UnitKind::Minutes,
            UnitKind::Hours,
            UnitKind::MonthDays,
            UnitKind::Months,
            UnitKind::WeekDays,
        ]
    }

    /// Returns the standard domain for this kind.
    pub fn spec(&self) -> UnitSpec {
        match self {
            UnitKind::Minutes => UnitSpec::minutes(),
            UnitKind::Hours => UnitSpec::hours(),
            UnitKind::MonthDays => UnitSpec::month_days(),
            UnitKind::Months => UnitSpec::months(),
            UnitKind::WeekDays => UnitSpec::week_days(),
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Minutes => write!(f, "minutes"),
            UnitKind::Hours => write!(f, "hours"),
            UnitKind::MonthDays => write!(f, "month-days"),
            UnitKind::Months => write!(f, "months"),
            UnitKind::WeekDays => write!(f, "week-days"),
        }
    }
}

const MONTH_LABELS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const WEEK_DAY_LABELS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Numeric domain of one field.
///
/// Invariants, checked on construction:
/// - `total > 0`
/// - `min + total - 1` fits in `u32`
/// - when present, `alt_labels.len() == total`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawUnitSpec"))]
pub struct UnitSpec {
    kind: UnitKind,
    min: u32,
    total: u32,
    alt_labels: Option<Vec<String>>,
}

impl UnitSpec {
    /// Creates a domain of `total` values starting at `min`.
    pub fn new(kind: UnitKind, min: u32, total: u32) -> Result<Self> {
        if total == 0 {
            return Err(CronFieldError::InvalidUnitSpec(format!(
                "{kind} must contain at least one value"
            )));
        }
        if min.checked_add(total - 1).is_none() {
            return Err(CronFieldError::InvalidUnitSpec(format!(
                "{kind} domain starting at {min} overflows with {total} values"
            )));
        }
        Ok(Self {
            kind,
            min,
            total,
            alt_labels: None,
        })
    }

    /// Attaches one alternative label per domain value.
    pub fn with_alt_labels<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != self.total as usize {
            return Err(CronFieldError::InvalidUnitSpec(format!(
                "{} expects {} labels, got {}",
                self.kind,
                self.total,
                labels.len()
            )));
        }
        self.alt_labels = Some(labels);
        Ok(self)
    }

    fn preset(kind: UnitKind, min: u32, total: u32, labels: Option<&[&str]>) -> Self {
        Self {
            kind,
            min,
            total,
            alt_labels: labels.map(|l| l.iter().map(|s| s.to_string()).collect()),
        }
    }

    pub fn minutes() -> Self {
        Self::preset(UnitKind::Minutes, 0, 60, None)
    }

    pub fn hours() -> Self {
        Self::preset(UnitKind::Hours, 0, 24, None)
    }

    pub fn month_days() -> Self {
        Self::preset(UnitKind::MonthDays, 1, 31, None)
    }

    pub fn months() -> Self {
        Self::preset(UnitKind::Months, 1, 12, Some(&MONTH_LABELS[..]))
    }

    pub fn week_days() -> Self {
        Self::preset(UnitKind::WeekDays, 0, 7, Some(&WEEK_DAY_LABELS[..]))
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    /// Largest value of the domain (inclusive).
    pub fn max(&self) -> u32 {
        self.min + self.total - 1
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn alt_labels(&self) -> Option<&[String]> {
        self.alt_labels.as_deref()
    }

    /// Returns true if `value` lies in `[min, max]`.
    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max()
    }

    /// Returns `value` unchanged if it is in the domain.
    pub fn check(&self, value: u32) -> Result<u32> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(CronFieldError::ValueOutOfRange {
                value,
                kind: self.kind,
                min: self.min,
                max: self.max(),
            })
        }
    }

    /// Iterates over every domain value in ascending order.
    pub fn values(&self) -> impl Iterator<Item = u32> {
        self.min..=self.max()
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawUnitSpec {
    kind: UnitKind,
    min: u32,
    total: u32,
    #[serde(default)]
    alt_labels: Option<Vec<String>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawUnitSpec> for UnitSpec {
    type Error = CronFieldError;

    fn try_from(raw: RawUnitSpec) -> Result<Self> {
        let spec = UnitSpec::new(raw.kind, raw.min, raw.total)?;
        match raw.alt_labels {
            Some(labels) => spec.with_alt_labels(labels),
            None => Ok(spec),
        }
    }
}
