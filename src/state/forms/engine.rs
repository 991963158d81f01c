//! Form state engine
//!
//! Owns one typed record, its field errors and the submission lifecycle.
//! All mutations go through the engine so a stale error disappears as soon
//! as the field it belongs to changes.

use super::field::{FieldValue, FormField};
use super::schema::{FormSchema, Rule};
use crate::relay::{RelayClientTrait, RelayError, Submission};
use std::collections::BTreeMap;

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Editing,
    /// Rules are running; only observable from inside `begin_submit`
    Validating,
    /// The single relay request is in flight
    Submitting,
    /// Terminal; the form is inert and shows its confirmation
    Submitted,
}

impl SubmissionState {
    /// Whether the form still accepts input
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// Error messages keyed by field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<K: Ord>(BTreeMap<K, String>);

impl<K: Ord> Default for FieldErrors<K> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<K: Ord + Copy> FieldErrors<K> {
    pub fn get(&self, key: K) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: K) -> bool {
        self.0.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(dead_code)]
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.0.keys().copied()
    }

    /// Record `message` unless the key already failed an earlier rule
    fn insert(&mut self, key: K, message: &str) {
        self.0.entry(key).or_insert_with(|| message.to_string());
    }

    fn remove(&mut self, key: K) -> bool {
        self.0.remove(&key).is_some()
    }
}

/// Controller for a single form instance
#[derive(Debug, Clone)]
pub struct FormEngine<S: FormSchema> {
    record: S,
    errors: FieldErrors<S::Key>,
    status: SubmissionState,
    rules: Vec<Rule<S::Key>>,
}

impl<S: FormSchema> Default for FormEngine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FormSchema> FormEngine<S> {
    /// Create an engine over an empty record with the schema's default rules
    pub fn new() -> Self {
        Self::with_rules(S::rules())
    }

    /// Create an engine over an empty record with a caller-supplied rule set
    pub fn with_rules(rules: Vec<Rule<S::Key>>) -> Self {
        Self {
            record: S::default(),
            errors: FieldErrors::default(),
            status: SubmissionState::Editing,
            rules,
        }
    }

    pub fn record(&self) -> &S {
        &self.record
    }

    pub fn errors(&self) -> &FieldErrors<S::Key> {
        &self.errors
    }

    pub fn status(&self) -> SubmissionState {
        self.status
    }

    #[allow(dead_code)]
    pub fn rules(&self) -> &[Rule<S::Key>] {
        &self.rules
    }

    /// Replace the value at `key`. A value that does not fit the field is ignored.
    #[allow(dead_code)] // the UI edits through the per-kind operations below
    pub fn update_field(&mut self, key: S::Key, value: FieldValue) {
        self.edit(key, "update_field", |field| field.replace(value));
    }

    /// Store typed text, masked according to the field definition
    #[allow(dead_code)]
    pub fn update_text(&mut self, key: S::Key, raw: &str) {
        self.edit(key, "update_text", |field| field.set_text(raw));
    }

    #[allow(dead_code)]
    pub fn set_flag(&mut self, key: S::Key, on: bool) {
        self.edit(key, "set_flag", |field| field.set_flag(on));
    }

    pub fn toggle_flag(&mut self, key: S::Key) {
        self.edit(key, "toggle_flag", |field| {
            let on = field.as_flag();
            field.set_flag(!on)
        });
    }

    #[allow(dead_code)]
    pub fn select_option(&mut self, key: S::Key, index: usize) {
        self.edit(key, "select_option", |field| field.select(index));
    }

    pub fn cycle_option(&mut self, key: S::Key, forward: bool) {
        self.edit(key, "cycle_option", |field| field.cycle(forward));
    }

    /// Append a typed character to the text at `key`, re-applying its mask
    pub fn push_char(&mut self, key: S::Key, c: char) {
        self.edit(key, "push_char", |field| field.push_char(c));
    }

    /// Drop the last character of the text at `key`; an empty field is left alone
    pub fn pop_char(&mut self, key: S::Key) {
        self.edit(key, "pop_char", |field| field.pop_char());
    }

    /// Flip entry `index` of the checklist at `key`; out of range is a no-op
    pub fn toggle_array_field(&mut self, key: S::Key, index: usize) {
        self.edit(key, "toggle_array_field", |field| field.toggle_item(index));
    }

    /// Apply `change` to the field at `key` and drop its error when it took effect
    fn edit<F>(&mut self, key: S::Key, operation: &str, change: F)
    where
        F: FnOnce(&mut FormField) -> bool,
    {
        if !self.status.is_editable() {
            tracing::debug!(?key, operation, status = ?self.status, "Form is not editable");
            return;
        }
        if change(self.record.field_mut(key)) {
            self.errors.remove(key);
        } else {
            tracing::debug!(?key, operation, "Update does not apply to field, ignored");
        }
    }

    /// Run `rules` against the current record without touching engine state
    pub fn validate(&self, rules: &[Rule<S::Key>]) -> FieldErrors<S::Key> {
        let mut errors = FieldErrors::default();
        for rule in rules {
            if !rule.passes(&self.record) {
                errors.insert(rule.field, rule.message);
            }
        }
        errors
    }

    /// Validate and, when clean, move to `Submitting` and build the payload
    ///
    /// Returns `None` when validation fails (errors are stored) or when the
    /// form is not in `Editing`, so at most one submission is ever in flight.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if !self.status.is_editable() {
            tracing::debug!(status = ?self.status, "Submit ignored");
            return None;
        }

        self.status = SubmissionState::Validating;
        let errors = self.validate(&self.rules);
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), subject = S::SUBJECT, "Validation failed");
            self.errors = errors;
            self.status = SubmissionState::Editing;
            return None;
        }

        self.errors = FieldErrors::default();
        self.status = SubmissionState::Submitting;
        let submission = self.record.submission();
        tracing::info!(
            submission_id = %submission.id(),
            subject = S::SUBJECT,
            "Submitting form"
        );
        Some(submission)
    }

    /// Settle the in-flight submission; every outcome ends in `Submitted`
    pub fn finish_submit(&mut self, result: Result<(), RelayError>) {
        if self.status != SubmissionState::Submitting {
            tracing::debug!(status = ?self.status, "No submission in flight");
            return;
        }
        match result {
            Ok(()) => tracing::info!(subject = S::SUBJECT, "Submission delivered"),
            Err(err) => {
                tracing::warn!(subject = S::SUBJECT, error = %err, "Submission not confirmed by relay")
            }
        }
        self.status = SubmissionState::Submitted;
    }

    /// Validate, then perform the single relay request when the record is clean
    ///
    /// The app splits this into `begin_submit` and `finish_submit` so it can
    /// draw the in-flight state between the two.
    #[allow(dead_code)]
    pub async fn submit<R>(&mut self, relay: &R) -> SubmissionState
    where
        R: RelayClientTrait + ?Sized,
    {
        if let Some(submission) = self.begin_submit() {
            let result = relay.send(&submission).await;
            self.finish_submit(result);
        }
        self.status
    }
}
