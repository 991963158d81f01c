//! Form field value objects

use crate::format::{mask_individual, mask_organizational, mask_phone};

/// Display mask applied to typed text before it is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    /// CPF, `000.000.000-00`
    Individual,
    /// CNPJ, `00.000.000/0000-00`
    Organizational,
    /// Brazilian phone number with area code
    Phone,
}

impl Mask {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Mask::Individual => mask_individual(raw),
            Mask::Organizational => mask_organizational(raw),
            Mask::Phone => mask_phone(raw),
        }
    }
}

/// One option of a single-choice field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Stable value, as the original form submits it
    pub value: &'static str,
    /// Human-readable label
    pub label: &'static str,
}

impl ChoiceOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    /// Option whose value doubles as its label
    pub const fn plain(value: &'static str) -> Self {
        Self {
            value,
            label: value,
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Choice {
        options: &'static [ChoiceOption],
        selected: Option<usize>,
    },
    /// Checkbox group aligned positionally with `labels`
    Checklist {
        labels: &'static [&'static str],
        checked: Vec<bool>,
    },
}

impl FieldValue {
    /// True when `other` can stand in for this value without leaving the field's schema
    ///
    /// Choices must carry the same option list and an in-range selection;
    /// checklists the same labels with one entry per label.
    pub fn accepts(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Text(_), FieldValue::Text(_))
            | (FieldValue::Flag(_), FieldValue::Flag(_)) => true,
            (
                FieldValue::Choice { options, .. },
                FieldValue::Choice {
                    options: offered,
                    selected,
                },
            ) => options == offered && selected.map_or(true, |index| index < options.len()),
            (
                FieldValue::Checklist { labels, .. },
                FieldValue::Checklist {
                    labels: offered,
                    checked,
                },
            ) => labels == offered && checked.len() == labels.len(),
            _ => false,
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    pub mask: Option<Mask>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            mask: None,
        }
    }

    /// Create a text field whose input goes through `mask`
    pub fn masked(name: &'static str, label: &'static str, mask: Mask) -> Self {
        Self {
            mask: Some(mask),
            ..Self::text(name, label)
        }
    }

    /// Create an unchecked flag (single checkbox)
    pub fn flag(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Flag(false),
            mask: None,
        }
    }

    /// Create a single-choice field with nothing selected
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [ChoiceOption],
    ) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            mask: None,
        }
    }

    /// Create a checkbox group with every entry unchecked
    pub fn checklist(
        name: &'static str,
        label: &'static str,
        labels: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Checklist {
                labels,
                checked: vec![false; labels.len()],
            },
            mask: None,
        }
    }

    /// Get the text value (returns empty string for other kinds)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the text value, or `fallback` when it is blank
    pub fn text_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let text = self.as_text();
        if text.trim().is_empty() {
            fallback
        } else {
            text
        }
    }

    /// Get the flag value (returns false for other kinds)
    pub fn as_flag(&self) -> bool {
        matches!(self.value, FieldValue::Flag(true))
    }

    /// Currently selected option of a choice field
    pub fn selected(&self) -> Option<&'static ChoiceOption> {
        match &self.value {
            FieldValue::Choice {
                options,
                selected: Some(index),
            } => {
                let options: &'static [ChoiceOption] = *options;
                options.get(*index)
            }
            _ => None,
        }
    }

    /// Checked entries of a checklist (empty for other kinds)
    pub fn checked(&self) -> &[bool] {
        match &self.value {
            FieldValue::Checklist { checked, .. } => checked,
            _ => &[],
        }
    }

    /// Labels of the checked entries, formatted as `• a\n• b`
    pub fn checked_bullets(&self) -> Option<String> {
        let FieldValue::Checklist { labels, checked } = &self.value else {
            return None;
        };
        let picked: Vec<&str> = labels
            .iter()
            .zip(checked)
            .filter(|(_, on)| **on)
            .map(|(label, _)| *label)
            .collect();
        if picked.is_empty() {
            None
        } else {
            Some(format!("• {}", picked.join("\n• ")))
        }
    }

    /// Store typed text, applying the field mask. Returns false for non-text fields.
    pub fn set_text(&mut self, raw: &str) -> bool {
        let masked = match self.mask {
            Some(mask) => mask.apply(raw),
            None => raw.to_string(),
        };
        match &mut self.value {
            FieldValue::Text(s) => {
                *s = masked;
                true
            }
            _ => false,
        }
    }

    /// Set the flag value. Returns false for non-flag fields.
    pub fn set_flag(&mut self, on: bool) -> bool {
        match &mut self.value {
            FieldValue::Flag(value) => {
                *value = on;
                true
            }
            _ => false,
        }
    }

    /// Select option `index`. Returns false when out of range or not a choice field.
    pub fn select(&mut self, index: usize) -> bool {
        match &mut self.value {
            FieldValue::Choice { options, selected } if index < options.len() => {
                *selected = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Move the selection to the next (or previous) option, wrapping around
    pub fn cycle(&mut self, forward: bool) -> bool {
        let FieldValue::Choice { options, selected } = &self.value else {
            return false;
        };
        let count = options.len();
        if count == 0 {
            return false;
        }
        let next = match (*selected, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(0), false) => count - 1,
            (Some(i), false) => i - 1,
        };
        self.select(next)
    }

    /// Flip checklist entry `index`. Returns false when out of range or not a checklist.
    pub fn toggle_item(&mut self, index: usize) -> bool {
        match &mut self.value {
            FieldValue::Checklist { checked, .. } => match checked.get_mut(index) {
                Some(entry) => {
                    *entry = !*entry;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Replace the whole value. Returns false when it does not fit the field.
    pub fn replace(&mut self, value: FieldValue) -> bool {
        if !self.value.accepts(&value) {
            return false;
        }
        self.value = match (self.mask, value) {
            (Some(mask), FieldValue::Text(raw)) => FieldValue::Text(mask.apply(&raw)),
            (_, value) => value,
        };
        true
    }

    /// Append a typed character to a text field
    pub fn push_char(&mut self, c: char) -> bool {
        let mut next = self.as_text().to_string();
        next.push(c);
        self.set_text(&next)
    }

    /// Remove the last character from a text field. Returns false when there is none.
    pub fn pop_char(&mut self) -> bool {
        let mut next = self.as_text().to_string();
        next.pop().is_some() && self.set_text(&next)
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "[x]".to_string(),
            FieldValue::Flag(false) => "[ ]".to_string(),
            FieldValue::Choice { .. } => self
                .selected()
                .map(|option| format!("◀ {} ▶", option.label))
                .unwrap_or_else(|| "◀ Selecione ▶".to_string()),
            FieldValue::Checklist { checked, .. } => {
                let count = checked.iter().filter(|on| **on).count();
                format!("{count}/{} selecionados", checked.len())
            }
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.value, FieldValue::Text(_))
    }
}
