//! What a select widget needs to display a field.
//!
//! Two widget shapes share the same codec and engine: a [`FieldWidget::Dropdown`]
//! holding at most one value, and a [`FieldWidget::MultiSelect`] that shows
//! the selection as one tag carrying the field string.

use crate::codec::{field_string, label};
use crate::config::FieldConfig;
use crate::error::Result;
use crate::selection::{SelectMode, SelectionSet};

/// One entry of the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: u32,
    pub label: String,
}

/// Option list for `config`: every domain value with its label, minus the
/// values rejected by `option_filter`.
pub fn options(config: &FieldConfig) -> Result<Vec<SelectOption>> {
    let mut out = Vec::with_capacity(config.unit.total() as usize);
    for value in config.unit.values() {
        let option = SelectOption {
            value,
            label: label(value, &config.unit, &config.render)?,
        };
        if config.option_filter.map_or(true, |keep| keep(&option)) {
            out.push(option);
        }
    }
    Ok(out)
}

/// Widget shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldWidget {
    /// Single value, no double-click handling.
    Dropdown,
    /// Any number of values, rendered as one tag.
    MultiSelect,
}

impl FieldWidget {
    /// Single mode uses a dropdown unless periodicity picks are enabled,
    /// which need the multi-select to report repeated clicks.
    pub fn for_config(config: &FieldConfig) -> Self {
        if config.mode == SelectMode::Single && !config.periodicity_on_double_click {
            FieldWidget::Dropdown
        } else {
            FieldWidget::MultiSelect
        }
    }

    /// Values the widget marks as selected.
    pub fn displayed_values(&self, selection: &SelectionSet) -> Vec<u32> {
        match self {
            FieldWidget::Dropdown => selection.first().copied().into_iter().collect(),
            FieldWidget::MultiSelect => selection.to_vec(),
        }
    }
}

/// Text of the tag shown for `selection`.
///
/// An empty selection shows the placeholder (or nothing). Otherwise the tag
/// is the field string, where a step from the domain minimum always reads
/// `"<every_text> N"` even without `humanize`.
pub fn render_tag(selection: &SelectionSet, config: &FieldConfig) -> Result<String> {
    if selection.is_empty() {
        return Ok(config.placeholder.clone().unwrap_or_default());
    }

    let text = field_string(selection, &config.unit, &config.render)?;
    match text.strip_prefix("*/") {
        Some(step) if !step.is_empty() && step.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(format!("{} {step}", config.render.every_text))
        }
        _ => Ok(text),
    }
}
