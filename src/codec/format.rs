//! Rendering of a single field value as a label.

use crate::error::{CronFieldError, Result};
use crate::unit::{UnitKind, UnitSpec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Phrase used for humanized step patterns when no locale is supplied.
pub const DEFAULT_EVERY_TEXT: &str = "every";

/// Clock convention for hour (and minute) fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ClockFormat {
    #[default]
    None,
    /// `0` → `12AM`, `13` → `1PM`.
    TwelveHour,
    /// Hours and minutes are always two digits wide.
    TwentyFourHour,
}

/// Pure formatting inputs shared by the formatter and the serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Use alternative labels (month / week day names) and the step phrase.
    pub humanize: bool,
    /// Zero-pad numeric labels to the width of the domain maximum.
    pub leading_zero: bool,
    pub clock_format: ClockFormat,
    /// Locale phrase for step patterns, e.g. `"every"` in `"every 5"`.
    pub every_text: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            humanize: false,
            leading_zero: false,
            clock_format: ClockFormat::None,
            every_text: DEFAULT_EVERY_TEXT.to_string(),
        }
    }
}

impl RenderOptions {
    pub fn humanized(mut self) -> Self {
        self.humanize = true;
        self
    }

    pub fn with_leading_zero(mut self) -> Self {
        self.leading_zero = true;
        self
    }

    pub fn with_clock_format(mut self, clock_format: ClockFormat) -> Self {
        self.clock_format = clock_format;
        self
    }

    pub fn with_every_text(mut self, every_text: impl Into<String>) -> Self {
        self.every_text = every_text.into();
        self
    }

    /// Copy of these options with humanization disabled.
    pub(crate) fn numeric(&self) -> Self {
        Self {
            humanize: false,
            ..self.clone()
        }
    }
}

/// Renders `value` as it appears in an option list or a field string.
///
/// Alternative labels win when `humanize` is set and the unit carries them.
/// Otherwise the value is printed as a number, zero-padded when
/// `leading_zero` is set (or for hours and minutes under the 24-hour clock),
/// and hour values become `h AM/PM` under the 12-hour clock.
///
/// # Errors
///
/// [`CronFieldError::ValueOutOfRange`] if `value` is outside the unit domain.
pub fn label(value: u32, unit: &UnitSpec, options: &RenderOptions) -> Result<String> {
    unit.check(value)?;

    if options.humanize {
        if let Some(labels) = unit.alt_labels() {
            let index = (value - unit.min()) as usize;
            return labels
                .get(index)
                .cloned()
                .ok_or(CronFieldError::LabelIndexOutOfRange {
                    index,
                    len: labels.len(),
                });
        }
    }

    let width = digits(unit.max());

    if unit.kind() == UnitKind::Hours && options.clock_format == ClockFormat::TwelveHour {
        let suffix = if value >= 12 { "PM" } else { "AM" };
        let hour = match value % 12 {
            0 => 12,
            h => h,
        };
        return Ok(if options.leading_zero {
            format!("{hour:0width$}{suffix}")
        } else {
            format!("{hour}{suffix}")
        });
    }

    let twenty_four = options.clock_format == ClockFormat::TwentyFourHour
        && matches!(unit.kind(), UnitKind::Hours | UnitKind::Minutes);

    if options.leading_zero || twenty_four {
        Ok(format!("{value:0width$}"))
    } else {
        Ok(value.to_string())
    }
}

fn digits(mut n: u32) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> RenderOptions {
        RenderOptions::default()
    }

    #[test]
    fn plain_numeric_label() {
        assert_eq!(label(7, &UnitSpec::minutes(), &opts()).unwrap(), "7");
    }

    #[test]
    fn leading_zero_pads_to_domain_width() {
        let o = opts().with_leading_zero();
        assert_eq!(label(7, &UnitSpec::minutes(), &o).unwrap(), "07");
        assert_eq!(label(42, &UnitSpec::minutes(), &o).unwrap(), "42");
        // Week days never exceed one digit.
        assert_eq!(label(3, &UnitSpec::week_days(), &o).unwrap(), "3");
    }

    #[test]
    fn humanized_months_use_alt_labels() {
        let o = opts().humanized();
        assert_eq!(label(1, &UnitSpec::months(), &o).unwrap(), "JAN");
        assert_eq!(label(12, &UnitSpec::months(), &o).unwrap(), "DEC");
        assert_eq!(label(0, &UnitSpec::week_days(), &o).unwrap(), "SUN");
    }

    #[test]
    fn months_are_numeric_without_humanize() {
        assert_eq!(label(3, &UnitSpec::months(), &opts()).unwrap(), "3");
    }

    #[test]
    fn humanize_without_alt_labels_is_numeric() {
        let o = opts().humanized();
        assert_eq!(label(15, &UnitSpec::minutes(), &o).unwrap(), "15");
    }

    #[test]
    fn twelve_hour_clock() {
        let o = opts().with_clock_format(ClockFormat::TwelveHour);
        let hours = UnitSpec::hours();
        assert_eq!(label(0, &hours, &o).unwrap(), "12AM");
        assert_eq!(label(1, &hours, &o).unwrap(), "1AM");
        assert_eq!(label(12, &hours, &o).unwrap(), "12PM");
        assert_eq!(label(23, &hours, &o).unwrap(), "11PM");
        let padded = o.with_leading_zero();
        assert_eq!(label(5, &hours, &padded).unwrap(), "05AM");
    }

    #[test]
    fn twelve_hour_clock_leaves_minutes_alone() {
        let o = opts().with_clock_format(ClockFormat::TwelveHour);
        assert_eq!(label(5, &UnitSpec::minutes(), &o).unwrap(), "5");
    }

    #[test]
    fn twenty_four_hour_clock_pads() {
        let o = opts().with_clock_format(ClockFormat::TwentyFourHour);
        assert_eq!(label(5, &UnitSpec::hours(), &o).unwrap(), "05");
        assert_eq!(label(5, &UnitSpec::minutes(), &o).unwrap(), "05");
        assert_eq!(label(5, &UnitSpec::month_days(), &o).unwrap(), "5");
    }

    #[test]
    fn out_of_domain_value_fails() {
        let err = label(13, &UnitSpec::months(), &opts()).unwrap_err();
        assert!(matches!(err, CronFieldError::ValueOutOfRange { value: 13, .. }));
        assert!(label(0, &UnitSpec::months(), &opts().humanized()).is_err());
    }

    #[test]
    fn digit_count() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(59), 2);
        assert_eq!(digits(100), 3);
    }
}
