use thiserror::Error;

use crate::unit::UnitKind;

/// Errors raised by the field codec and the selection engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CronFieldError {
    #[error("Value {value} out of range for {kind} (expected {min}..={max})")]
    ValueOutOfRange {
        value: u32,
        kind: UnitKind,
        min: u32,
        max: u32,
    },

    #[error("Invalid unit spec: {0}")]
    InvalidUnitSpec(String),

    #[error("Invalid field configuration: {0}")]
    InvalidConfig(String),

    #[error("Label index {index} out of range for {len} labels")]
    LabelIndexOutOfRange { index: usize, len: usize },

    #[error("Cannot parse \"{input}\": {reason}")]
    Syntax { input: String, reason: String },

    #[error("Invalid step: {0}")]
    InvalidStep(String),

    #[error("Invalid range: {start}-{end}")]
    InvalidRange { start: u32, end: u32 },
}

pub type Result<T> = std::result::Result<T, CronFieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_out_of_range_display() {
        let e = CronFieldError::ValueOutOfRange {
            value: 13,
            kind: UnitKind::Months,
            min: 1,
            max: 12,
        };
        assert_eq!(
            e.to_string(),
            "Value 13 out of range for months (expected 1..=12)"
        );
    }

    #[test]
    fn invalid_unit_spec_display() {
        let e = CronFieldError::InvalidUnitSpec("total must be > 0".to_string());
        assert_eq!(e.to_string(), "Invalid unit spec: total must be > 0");
    }

    #[test]
    fn syntax_display() {
        let e = CronFieldError::Syntax {
            input: "1-".to_string(),
            reason: "missing range end".to_string(),
        };
        assert_eq!(e.to_string(), "Cannot parse \"1-\": missing range end");
    }

    #[test]
    fn invalid_range_display() {
        let e = CronFieldError::InvalidRange { start: 9, end: 3 };
        assert_eq!(e.to_string(), "Invalid range: 9-3");
    }

    #[test]
    fn error_equality() {
        assert_eq!(
            CronFieldError::InvalidStep("0".into()),
            CronFieldError::InvalidStep("0".into())
        );
        assert_ne!(
            CronFieldError::InvalidStep("0".into()),
            CronFieldError::InvalidUnitSpec("0".into())
        );
    }
}
