//! Inbound form-submission model
//!
//! The form service posts either a submission:
//!
//! ```json
//! { "fields": [ { "label": "Name", "values": [ { "label": "Ada" } ] } ] }
//! ```
//!
//! or, once, when the webhook is registered, a handshake:
//!
//! ```json
//! { "message": "Heyflow Webhook API successfully initialized" }
//! ```
//!
//! Parsing is explicit rather than derived so that every optional part of the
//! payload has a spelled-out default.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("field {index} is malformed: {reason}")]
    MalformedField { index: usize, reason: &'static str },
}

/// One form field, reduced to its first value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: String,
    pub value: String,
}

/// Typed view of the webhook body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookBody {
    /// Empty when `fields` is absent or not a list
    pub fields: Vec<FormField>,
    /// `None` when absent or not a string
    pub message: Option<String>,
}

impl WebhookBody {
    pub fn from_value(body: &Value) -> Result<Self, SubmissionError> {
        let fields = match body.get("fields") {
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| parse_field(index, entry))
                .collect::<Result<Vec<_>, _>>()?,
            _ => Vec::new(),
        };

        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self { fields, message })
    }

    /// True when the body is the form service's initialization ping
    pub fn is_handshake(&self, handshake_message: &str) -> bool {
        self.message
            .as_deref()
            .is_some_and(|message| message.contains(handshake_message))
    }
}

fn parse_field(index: usize, entry: &Value) -> Result<FormField, SubmissionError> {
    let malformed = |reason| SubmissionError::MalformedField { index, reason };

    let label = entry
        .get("label")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("missing label"))?;

    let value = entry
        .get("values")
        .and_then(Value::as_array)
        .and_then(|values| values.first())
        .ok_or_else(|| malformed("missing values"))?
        .get("label")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("first value has no label"))?;

    Ok(FormField {
        label: label.to_string(),
        value: value.to_string(),
    })
}

/// Field label (lowercased) to value, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    entries: Vec<(String, String)>,
}

impl Submission {
    pub fn from_fields(fields: &[FormField]) -> Self {
        let mut submission = Self::default();
        for field in fields {
            submission.insert(field.label.to_lowercase(), field.value.clone());
        }
        submission
    }

    /// Later values overwrite earlier ones but keep their position
    fn insert(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_valid(&self) -> bool {
        self.get("name").is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl TryFrom<&Value> for Submission {
    type Error = SubmissionError;

    fn try_from(body: &Value) -> Result<Self, Self::Error> {
        let body = WebhookBody::from_value(body)?;
        Ok(Self::from_fields(&body.fields))
    }
}
