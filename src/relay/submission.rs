//! Transport payload sent to the form relay

use serde::ser::{Serialize, SerializeMap, Serializer};
use uuid::Uuid;

/// Relay template that renders the submission as a table
pub const TABLE_TEMPLATE: &str = "table";

/// A flattened form submission: two relay meta fields plus label → value pairs
///
/// Fields keep the order in which the form lists them.
#[derive(Debug, Clone)]
pub struct Submission {
    id: Uuid,
    subject: String,
    template: String,
    fields: Vec<(String, String)>,
}

impl Submission {
    pub fn new(subject: impl Into<String>, fields: Vec<(String, String)>) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            template: TABLE_TEMPLATE.to_string(),
            fields,
        }
    }

    /// Local id used to correlate log lines; never sent
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value submitted under `label`
    #[allow(dead_code)]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

impl Serialize for Submission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 2))?;
        map.serialize_entry("_subject", &self.subject)?;
        map.serialize_entry("_template", &self.template)?;
        for (label, value) in &self.fields {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}
