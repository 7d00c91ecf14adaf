//! Dynamic form builder: a bounded list of text fields with add/remove,
//! positional renumbering, non-empty validation and submission.
//!
//! Field ids are monotonic and stable; display names and labels derive from
//! position, so removing a field renumbers everything after it without
//! touching ids.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by the form builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// The field cap was reached
    #[error("maximum of {max} fields reached")]
    FieldLimit {
        /// The cap that was hit
        max: usize,
    },

    /// The form would drop below its minimum field count
    #[error("at least {min} field must remain")]
    FieldFloor {
        /// The floor that was hit
        min: usize,
    },

    /// No field carries the given id
    #[error("no field with id {id}")]
    UnknownField {
        /// The id that was requested
        id: u64,
    },

    /// Submission was attempted with blank fields
    #[error("{count} field(s) still empty")]
    EmptyFields {
        /// How many fields failed validation
        count: usize,
    },
}

/// One text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    id: u64,
    value: String,
}

impl FormField {
    /// The field's stable id
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The field's raw value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True when the value trims to nothing
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// A successful submission: the renumbered field names paired with their raw
/// values, in form order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSubmission {
    /// `(name, value)` pairs, e.g. `("field_1", "Alice")`
    pub entries: Vec<(String, String)>,
    /// When the submission happened (Unix epoch millis)
    pub submitted_at: u64,
}

/// The form builder state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBuilder {
    fields: Vec<FormField>,
    next_id: u64,
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormBuilder {
    /// A form never shrinks below this many fields
    pub const MIN_FIELDS: usize = 1;
    /// A form never grows beyond this many fields
    pub const MAX_FIELDS: usize = 10;

    /// Creates a form with a single empty field
    #[must_use]
    pub fn new() -> Self {
        let mut form = Self {
            fields: Vec::new(),
            next_id: 0,
        };
        form.push_field();
        form
    }

    fn push_field(&mut self) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.fields.push(FormField {
            id,
            value: String::new(),
        });
        id
    }

    /// Appends an empty field, returning its id
    pub fn add_field(&mut self) -> Result<u64, FormError> {
        if self.fields.len() >= Self::MAX_FIELDS {
            return Err(FormError::FieldLimit {
                max: Self::MAX_FIELDS,
            });
        }
        Ok(self.push_field())
    }

    /// Removes the field with the given id; fields after it renumber
    pub fn remove_field(&mut self, id: u64) -> Result<(), FormError> {
        if self.fields.len() <= Self::MIN_FIELDS {
            return Err(FormError::FieldFloor {
                min: Self::MIN_FIELDS,
            });
        }
        let index = self
            .fields
            .iter()
            .position(|field| field.id == id)
            .ok_or(FormError::UnknownField { id })?;
        self.fields.remove(index);
        Ok(())
    }

    /// Replaces a field's value
    pub fn set_value(&mut self, id: u64, value: impl Into<String>) -> Result<(), FormError> {
        self.field_mut(id)?.value = value.into();
        Ok(())
    }

    /// Appends one character to a field's value
    pub fn push_char(&mut self, id: u64, c: char) -> Result<(), FormError> {
        self.field_mut(id)?.value.push(c);
        Ok(())
    }

    /// Drops the last character of a field's value
    pub fn pop_char(&mut self, id: u64) -> Result<(), FormError> {
        self.field_mut(id)?.value.pop();
        Ok(())
    }

    fn field_mut(&mut self, id: u64) -> Result<&mut FormField, FormError> {
        self.fields
            .iter_mut()
            .find(|field| field.id == id)
            .ok_or(FormError::UnknownField { id })
    }

    /// A field's raw value
    #[must_use]
    pub fn value(&self, id: u64) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(FormField::value)
    }

    /// The fields in form order
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// The fields paired with their positional names (`field_1`, `field_2`,
    /// ...), which is where renumbering after a removal shows up
    pub fn named_fields(&self) -> impl Iterator<Item = (String, &FormField)> {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, field)| (format!("field_{}", index + 1), field))
    }

    /// Number of fields currently on the form
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Whether another field fits
    #[must_use]
    pub fn can_add(&self) -> bool {
        self.fields.len() < Self::MAX_FIELDS
    }

    /// Whether a field may be removed
    #[must_use]
    pub fn can_remove(&self) -> bool {
        self.fields.len() > Self::MIN_FIELDS
    }

    /// How many fields are blank
    #[must_use]
    pub fn empty_field_count(&self) -> usize {
        self.fields.iter().filter(|field| field.is_blank()).count()
    }

    /// True when every field validates
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.empty_field_count() == 0
    }

    /// Validates and submits the form.
    ///
    /// On success the values are collected into a [`FormSubmission`] and
    /// cleared; the field structure survives.
    pub fn submit(&mut self) -> Result<FormSubmission, FormError> {
        let count = self.empty_field_count();
        if count > 0 {
            return Err(FormError::EmptyFields { count });
        }
        let entries: Vec<(String, String)> = self
            .named_fields()
            .map(|(name, field)| (name, field.value.clone()))
            .collect();
        for field in &mut self.fields {
            field.value.clear();
        }
        tracing::info!(fields = entries.len(), "form submitted");
        Ok(FormSubmission {
            entries,
            submitted_at: current_timestamp(),
        })
    }

    /// Returns the form to a single empty field with the id counter rewound;
    /// indistinguishable from a fresh builder
    pub fn reset(&mut self) {
        self.fields.clear();
        self.next_id = 0;
        self.push_field();
    }
}

/// Returns the current timestamp in milliseconds
fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
