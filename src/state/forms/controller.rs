//! Index-based access to a form engine for the view layer

use super::engine::{FormEngine, SubmissionState};
use super::field::{FieldValue, FormField};
use super::schema::FormSchema;
use crate::relay::{RelayError, Submission};

/// A form engine seen through field positions instead of typed keys
///
/// The UI walks fields by index; this trait lets it drive any schema the
/// same way without knowing the key type.
pub trait FormController {
    fn title(&self) -> &'static str;

    fn confirmation(&self) -> &'static str;

    fn submit_label(&self) -> &'static str;

    fn field_count(&self) -> usize;

    fn field_at(&self, index: usize) -> Option<&FormField>;

    fn error_at(&self, index: usize) -> Option<&str>;

    fn status(&self) -> SubmissionState;

    /// Append a character to the text field at `index`
    fn input_char(&mut self, index: usize, c: char);

    /// Remove the last character of the text field at `index`
    fn backspace(&mut self, index: usize);

    fn cycle_option(&mut self, index: usize, forward: bool);

    /// Flip the flag at `index`, or entry `item` when it is a checklist
    fn toggle(&mut self, index: usize, item: usize);

    /// Position of the first field carrying an error
    fn first_error_index(&self) -> Option<usize>;

    fn begin_submit(&mut self) -> Option<Submission>;

    fn finish_submit(&mut self, result: Result<(), RelayError>);
}

impl<S: FormSchema> FormEngine<S> {
    fn key_at(index: usize) -> Option<S::Key> {
        S::keys().get(index).copied()
    }
}

impl<S: FormSchema> FormController for FormEngine<S> {
    fn title(&self) -> &'static str {
        S::TITLE
    }

    fn confirmation(&self) -> &'static str {
        S::CONFIRMATION
    }

    fn submit_label(&self) -> &'static str {
        S::SUBMIT_LABEL
    }

    fn field_count(&self) -> usize {
        S::keys().len()
    }

    fn field_at(&self, index: usize) -> Option<&FormField> {
        Self::key_at(index).map(|key| self.record().field(key))
    }

    fn error_at(&self, index: usize) -> Option<&str> {
        Self::key_at(index).and_then(|key| self.errors().get(key))
    }

    fn status(&self) -> SubmissionState {
        FormEngine::status(self)
    }

    fn input_char(&mut self, index: usize, c: char) {
        if let Some(key) = Self::key_at(index) {
            self.push_char(key, c);
        }
    }

    fn backspace(&mut self, index: usize) {
        if let Some(key) = Self::key_at(index) {
            self.pop_char(key);
        }
    }

    fn cycle_option(&mut self, index: usize, forward: bool) {
        if let Some(key) = Self::key_at(index) {
            FormEngine::cycle_option(self, key, forward);
        }
    }

    fn toggle(&mut self, index: usize, item: usize) {
        let Some(key) = Self::key_at(index) else {
            return;
        };
        let value = &self.record().field(key).value;
        let is_flag = matches!(value, FieldValue::Flag(_));
        let is_checklist = matches!(value, FieldValue::Checklist { .. });
        if is_flag {
            self.toggle_flag(key);
        } else if is_checklist {
            self.toggle_array_field(key, item);
        }
    }

    fn first_error_index(&self) -> Option<usize> {
        S::keys()
            .iter()
            .position(|key| self.errors().contains(*key))
    }

    fn begin_submit(&mut self) -> Option<Submission> {
        FormEngine::begin_submit(self)
    }

    fn finish_submit(&mut self, result: Result<(), RelayError>) {
        FormEngine::finish_submit(self, result)
    }
}
