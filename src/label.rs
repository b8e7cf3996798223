//! Label data model, construction from CSV rows, and required-field checks.
//!
//! A [`Label`] is built from exactly six positional fields. Construction and
//! validation are separate steps: a label with an empty required field can
//! exist in memory, and it is up to the caller to keep it off the output.

use std::fmt;

use thiserror::Error;

pub const LABEL_FIELD_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelField {
    Names,
    Line1,
    Line2,
    City,
    State,
    Zip,
}

impl LabelField {
    /// Column order in the input file.
    pub const ALL: [LabelField; LABEL_FIELD_COUNT] = [
        LabelField::Names,
        LabelField::Line1,
        LabelField::Line2,
        LabelField::City,
        LabelField::State,
        LabelField::Zip,
    ];

    /// Fields that must be non-empty, in the order they are checked.
    pub const REQUIRED: [LabelField; 5] = [
        LabelField::Names,
        LabelField::Line1,
        LabelField::City,
        LabelField::State,
        LabelField::Zip,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LabelField::Names => "Names",
            LabelField::Line1 => "Line1",
            LabelField::Line2 => "Line2",
            LabelField::City => "City",
            LabelField::State => "State",
            LabelField::Zip => "Zip",
        }
    }
}

impl fmt::Display for LabelField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },
    #[error("{0} field is empty")]
    EmptyField(LabelField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub names: String,
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Label {
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, LabelError> {
        match fields {
            [names, line1, line2, city, state, zip] => Ok(Self {
                names: names.as_ref().to_string(),
                line1: line1.as_ref().to_string(),
                line2: line2.as_ref().to_string(),
                city: city.as_ref().to_string(),
                state: state.as_ref().to_string(),
                zip: zip.as_ref().to_string(),
            }),
            _ => Err(LabelError::FieldCount {
                expected: LABEL_FIELD_COUNT,
                actual: fields.len(),
            }),
        }
    }

    pub fn field(&self, field: LabelField) -> &str {
        match field {
            LabelField::Names => &self.names,
            LabelField::Line1 => &self.line1,
            LabelField::Line2 => &self.line2,
            LabelField::City => &self.city,
            LabelField::State => &self.state,
            LabelField::Zip => &self.zip,
        }
    }

    /// Fails on the first empty required field. `line2` is never checked.
    pub fn validate(&self) -> Result<(), LabelError> {
        match LabelField::REQUIRED
            .into_iter()
            .find(|field| self.field(*field).is_empty())
        {
            Some(field) => Err(LabelError::EmptyField(field)),
            None => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl TryFrom<Vec<String>> for Label {
    type Error = LabelError;

    fn try_from(fields: Vec<String>) -> Result<Self, Self::Error> {
        let actual = fields.len();
        let [names, line1, line2, city, state, zip]: [String; LABEL_FIELD_COUNT] = fields
            .try_into()
            .map_err(|_| LabelError::FieldCount {
                expected: LABEL_FIELD_COUNT,
                actual,
            })?;
        Ok(Self {
            names,
            line1,
            line2,
            city,
            state,
            zip,
        })
    }
}
