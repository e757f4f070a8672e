//! Configuration of one field instance.

use qtty::Quantity;

use crate::codec::RenderOptions;
use crate::error::{CronFieldError, Result};
use crate::selection::{SelectMode, Timestamp, DOUBLE_CLICK_WINDOW};
use crate::unit::UnitSpec;
use crate::widget::{FieldWidget, SelectOption};

/// Everything the codec and the selection engine read about a field.
///
/// Built from a unit with [`FieldConfig::new`] and adjusted with the
/// `with_*` methods.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    pub unit: UnitSpec,
    pub render: RenderOptions,
    pub mode: SelectMode,

    // --- Interaction ---
    /// Interpret a fast repeated click as "every Nth value".
    pub periodicity_on_double_click: bool,
    /// Ignore every pick, including clears.
    pub read_only: bool,
    pub disabled: bool,
    /// Show a clear control and accept clears. Defaults to `!read_only` when
    /// unset.
    pub allow_clear: Option<bool>,
    /// Maximum gap between the two clicks of a double-click.
    pub double_click_window: Timestamp,

    // --- Presentation ---
    /// Text of the tag when nothing is selected.
    pub placeholder: Option<String>,
    /// Keeps only the options for which this returns true.
    pub option_filter: Option<fn(&SelectOption) -> bool>,
}

impl FieldConfig {
    pub fn new(unit: UnitSpec) -> Self {
        Self {
            unit,
            render: RenderOptions::default(),
            mode: SelectMode::Multiple,
            periodicity_on_double_click: true,
            read_only: false,
            disabled: false,
            allow_clear: None,
            double_click_window: Quantity::new(DOUBLE_CLICK_WINDOW),
            placeholder: None,
            option_filter: None,
        }
    }

    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    pub fn with_mode(mut self, mode: SelectMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_periodicity_on_double_click(mut self, enabled: bool) -> Self {
        self.periodicity_on_double_click = enabled;
        self
    }

    pub fn as_read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_double_click_window(mut self, window: Timestamp) -> Self {
        self.double_click_window = window;
        self
    }

    pub fn with_option_filter(mut self, filter: fn(&SelectOption) -> bool) -> Self {
        self.option_filter = Some(filter);
        self
    }

    pub fn allows_clear(&self) -> bool {
        self.allow_clear.unwrap_or(!self.read_only)
    }

    /// Widget variant this configuration renders as.
    pub fn widget(&self) -> FieldWidget {
        FieldWidget::for_config(self)
    }

    /// Checks settings the types cannot express.
    pub fn validate(&self) -> Result<()> {
        let window = self.double_click_window.value();
        if !(window.is_finite() && window > 0.0) {
            return Err(CronFieldError::InvalidConfig(format!(
                "double-click window must be a positive duration, got {window}s"
            )));
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::new(UnitSpec::minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = FieldConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(cfg.periodicity_on_double_click);
        assert_eq!(cfg.mode, SelectMode::Multiple);
        assert!((cfg.double_click_window.value() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn allow_clear_follows_read_only() {
        assert!(FieldConfig::default().allows_clear());
        assert!(!FieldConfig::default().as_read_only().allows_clear());
        let mut forced = FieldConfig::default().as_read_only();
        forced.allow_clear = Some(true);
        assert!(forced.allows_clear());
    }

    #[test]
    fn non_positive_window_is_rejected() {
        let cfg = FieldConfig::default().with_double_click_window(Quantity::new(0.0));
        assert!(cfg.validate().is_err());
        let cfg = FieldConfig::default().with_double_click_window(Quantity::new(f64::NAN));
        assert!(cfg.validate().is_err());
    }
}
