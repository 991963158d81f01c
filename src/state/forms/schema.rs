//! Form schemas and validation rules

use super::field::FormField;
use crate::format::{is_valid_email, is_valid_individual_id, is_valid_organizational_id};
use crate::relay::Submission;
use std::fmt::Debug;

/// A strongly-typed form record
///
/// Each schema is a struct with one `FormField` per key, so every key is
/// present from creation to submission.
pub trait FormSchema: Default {
    /// Field names, one variant per field
    type Key: Copy + Ord + Debug + 'static;

    /// Heading shown above the form
    const TITLE: &'static str;
    /// Relay `_subject` distinguishing this form
    const SUBJECT: &'static str;
    /// Message shown once the form is submitted
    const CONFIRMATION: &'static str;
    /// Caption of the submit button
    const SUBMIT_LABEL: &'static str;

    /// All keys, in display order
    fn keys() -> &'static [Self::Key];

    fn field(&self, key: Self::Key) -> &FormField;

    fn field_mut(&mut self, key: Self::Key) -> &mut FormField;

    /// Default rule set checked on submit
    fn rules() -> Vec<Rule<Self::Key>>;

    /// Flat label → value payload for the relay
    fn payload(&self) -> Vec<(String, String)>;

    fn submission(&self) -> Submission {
        Submission::new(Self::SUBJECT, self.payload())
    }
}

/// Predicate applied to one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check<K> {
    /// Text is not blank
    Filled,
    /// A choice option is selected
    Chosen,
    /// Text looks like an e-mail address
    Email,
    /// Text is a valid CPF
    IndividualId,
    /// Text is a valid CNPJ
    OrganizationalId,
    /// Flag is set
    Accepted,
    /// Every checklist entry is checked
    AllChecked,
    /// Text is not blank when `field` has the option `value` selected
    FilledWhen { field: K, value: &'static str },
}

/// A validation rule: the field it reports on, its check and the message shown on failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<K> {
    pub field: K,
    pub check: Check<K>,
    pub message: &'static str,
}

impl<K: Copy> Rule<K> {
    pub const fn new(field: K, check: Check<K>, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }

    /// Evaluate the rule against `record`
    pub fn passes<S: FormSchema<Key = K>>(&self, record: &S) -> bool {
        let field = record.field(self.field);
        match self.check {
            Check::Filled => !field.as_text().trim().is_empty(),
            Check::Chosen => field.selected().is_some(),
            Check::Email => is_valid_email(field.as_text()),
            Check::IndividualId => is_valid_individual_id(field.as_text()),
            Check::OrganizationalId => is_valid_organizational_id(field.as_text()),
            Check::Accepted => field.as_flag(),
            Check::AllChecked => field.checked().iter().all(|on| *on),
            Check::FilledWhen {
                field: other,
                value,
            } => {
                let triggered = record
                    .field(other)
                    .selected()
                    .is_some_and(|option| option.value == value);
                !triggered || !field.as_text().trim().is_empty()
            }
        }
    }
}
