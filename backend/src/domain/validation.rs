//! Rule-based validation of untyped form submissions.
//!
//! Validators read a raw JSON object through [`FormReader`], which evaluates
//! every rule eagerly and collects one message per failing field. Callers
//! therefore receive the complete set of field errors rather than the first.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use super::records::RecordId;

/// Untyped submission body as posted by a form.
pub type RawForm = Map<String, Value>;

/// Aggregate validation failure keyed by wire field name.
///
/// # Examples
/// ```
/// use quotation_backend::domain::ValidationErrors;
///
/// let mut errors = ValidationErrors::default();
/// errors.insert("name", "Name is required");
/// assert_eq!(errors.get("name"), Some("Name is required"));
/// assert_eq!(errors.to_string(), "1 field(s) failed validation");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// Build a failure naming a single field.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(field, message);
        errors
    }

    /// Record a failure for `field`. The first message recorded for a field wins.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether no field has failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing field names in lexical order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Merge `other` into `self`, keeping existing messages on collisions.
    pub fn extend(&mut self, other: ValidationErrors) {
        for (field, message) in other.0 {
            self.insert(field, message);
        }
    }
}

enum Text {
    Absent,
    Present(String),
    WrongType,
}

/// Eager field reader accumulating failures across all rules.
///
/// Each accessor returns `None` when its rule failed (or the field is an
/// absent optional) and records the failure; [`FormReader::finish`] turns the
/// collected outcome into a typed record or the full error set.
pub struct FormReader<'a> {
    input: &'a RawForm,
    errors: ValidationErrors,
}

impl<'a> FormReader<'a> {
    /// Start reading `input`.
    pub fn new(input: &'a RawForm) -> Self {
        Self {
            input,
            errors: ValidationErrors::default(),
        }
    }

    fn text(&self, field: &str) -> Text {
        match self.input.get(field) {
            None | Some(Value::Null) => Text::Absent,
            Some(Value::String(raw)) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Text::Absent
                } else {
                    Text::Present(trimmed.to_owned())
                }
            }
            Some(_) => Text::WrongType,
        }
    }

    /// Record a failure that no accessor covers, such as a cross-field rule.
    pub fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field, message);
    }

    /// Trimmed, non-empty string.
    pub fn required_text(&mut self, field: &str, label: &str) -> Option<String> {
        match self.text(field) {
            Text::Present(value) => Some(value),
            Text::Absent => {
                self.reject(field, format!("{label} is required"));
                None
            }
            Text::WrongType => {
                self.reject(field, format!("{label} must be text"));
                None
            }
        }
    }

    /// Trimmed string that may be absent; blank input counts as absent.
    pub fn optional_text(&mut self, field: &str, label: &str) -> Option<String> {
        match self.text(field) {
            Text::Present(value) => Some(value),
            Text::Absent => None,
            Text::WrongType => {
                self.reject(field, format!("{label} must be text"));
                None
            }
        }
    }

    /// Required string drawn from a fixed set of choices.
    pub fn one_of(&mut self, field: &str, label: &str, allowed: &[&str]) -> Option<String> {
        let value = self.required_text(field, label)?;
        if allowed.contains(&value.as_str()) {
            Some(value)
        } else {
            self.reject(
                field,
                format!("{label} must be one of {}", allowed.join(", ")),
            );
            None
        }
    }

    /// Finite, non-negative amount given as a JSON number or numeric string.
    pub fn required_amount(&mut self, field: &str, label: &str) -> Option<f64> {
        let parsed = match self.input.get(field) {
            None | Some(Value::Null) => {
                self.reject(field, format!("{label} is required"));
                return None;
            }
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(raw)) if raw.trim().is_empty() => {
                self.reject(field, format!("{label} is required"));
                return None;
            }
            Some(Value::String(raw)) => raw.trim().parse::<f64>().ok(),
            Some(_) => None,
        };

        match parsed {
            Some(amount) if amount.is_finite() && amount >= 0.0 => Some(amount),
            Some(amount) if amount.is_finite() => {
                self.reject(field, format!("{label} must not be negative"));
                None
            }
            _ => {
                self.reject(field, format!("{label} must be a number"));
                None
            }
        }
    }

    /// Required record identifier.
    pub fn required_id(&mut self, field: &str, label: &str) -> Option<RecordId> {
        let raw = self.required_text(field, label)?;
        match raw.parse::<RecordId>() {
            Ok(id) => Some(id),
            Err(_) => {
                self.reject(field, format!("{label} must be a valid identifier"));
                None
            }
        }
    }

    /// List of record identifiers; absence reads as an empty list and
    /// duplicates collapse onto their first occurrence.
    pub fn id_list(&mut self, field: &str, label: &str) -> Option<Vec<RecordId>> {
        let items = match self.input.get(field) {
            None | Some(Value::Null) => return Some(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(_) => {
                self.reject(field, format!("{label} must be a list"));
                return None;
            }
        };

        let mut ids = Vec::with_capacity(items.len());
        for item in items {
            let parsed = item.as_str().and_then(|raw| raw.trim().parse::<RecordId>().ok());
            match parsed {
                Some(id) if !ids.contains(&id) => ids.push(id),
                Some(_) => {}
                None => {
                    self.reject(field, format!("{label} must contain valid identifiers"));
                    return None;
                }
            }
        }
        Some(ids)
    }

    /// Finish reading: `Ok` only when no rule failed and the record was built.
    pub fn finish<T>(self, record: Option<T>) -> Result<T, ValidationErrors> {
        match record {
            Some(record) if self.errors.is_empty() => Ok(record),
            _ => Err(self.errors),
        }
    }
}
