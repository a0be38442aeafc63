use chrono::{NaiveDate, Utc};
use std::collections::HashMap;

use crate::models::employee::{EmployeePatch, Gender, NewEmployee, STATES};

pub const GENDER_OPTIONS: [&str; 2] = ["Male", "Female"];

/// Widget family a field renders as. Option lists double as the set of
/// accepted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Radio(&'static [&'static str]),
    Date,
    Select(&'static [&'static str]),
    Checkbox,
}

/// One form field: the same definition drives rendering and validation.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: Option<&'static str>,
    pub min_len: Option<(usize, &'static str)>,
    pub one_of: Option<&'static str>,
    pub not_future: Option<&'static str>,
    pub placeholder: Option<&'static str>,
}

pub const EMPLOYEE_FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "fullName",
        label: "Full Name",
        kind: FieldKind::Text,
        required: Some("Full name is required"),
        min_len: Some((3, "Full name must be at least 3 characters")),
        one_of: None,
        not_future: None,
        placeholder: Some("Enter full name"),
    },
    FieldSpec {
        name: "gender",
        label: "Gender",
        kind: FieldKind::Radio(&GENDER_OPTIONS),
        required: Some("Gender is required"),
        min_len: None,
        one_of: Some("Gender must be Male or Female"),
        not_future: None,
        placeholder: None,
    },
    FieldSpec {
        name: "dob",
        label: "Date of Birth",
        kind: FieldKind::Date,
        required: Some("Date of birth is required"),
        min_len: None,
        one_of: None,
        not_future: Some("Date of birth cannot be in the future"),
        placeholder: None,
    },
    FieldSpec {
        name: "state",
        label: "State",
        kind: FieldKind::Select(&STATES),
        required: Some("State is required"),
        min_len: None,
        one_of: Some("Please select a valid state"),
        not_future: None,
        placeholder: Some("Select a state"),
    },
    FieldSpec {
        name: "isActive",
        label: "Active Employee",
        kind: FieldKind::Checkbox,
        required: None,
        min_len: None,
        one_of: None,
        not_future: None,
        placeholder: None,
    },
];

pub type FormValues = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Runs every rule in the field table against the submitted values. At most
/// one error per field, in table order.
pub fn validate(fields: &[FieldSpec], values: &FormValues) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for spec in fields {
        let raw = values.get(spec.name).map(|v| v.trim()).unwrap_or("");
        if raw.is_empty() {
            if let Some(message) = spec.required {
                errors.push(FieldError::new(spec.name, message));
            }
            continue;
        }
        if let Some((min, message)) = spec.min_len {
            if raw.chars().count() < min {
                errors.push(FieldError::new(spec.name, message));
                continue;
            }
        }
        match spec.kind {
            FieldKind::Radio(options) | FieldKind::Select(options) => {
                if !options.contains(&raw) {
                    if let Some(message) = spec.one_of {
                        errors.push(FieldError::new(spec.name, message));
                    }
                }
            }
            FieldKind::Date => match raw.parse::<NaiveDate>() {
                Ok(date) => {
                    if let Some(message) = spec.not_future {
                        if date > Utc::now().date_naive() {
                            errors.push(FieldError::new(spec.name, message));
                        }
                    }
                }
                Err(_) => {
                    if let Some(message) = spec.required {
                        errors.push(FieldError::new(spec.name, message));
                    }
                }
            },
            FieldKind::Text | FieldKind::Checkbox => {}
        }
    }
    errors
}

/// Typed view of a validated submission, minus the image which travels as a
/// separate upload part.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub full_name: String,
    pub gender: Gender,
    pub dob: NaiveDate,
    pub state: String,
    pub is_active: bool,
}

impl EmployeeDraft {
    /// Only meaningful after `validate` passed; returns `None` when a value
    /// does not parse, which a validated submission never hits.
    pub fn from_values(values: &FormValues) -> Option<Self> {
        let full_name = values.get("fullName")?.trim().to_string();
        let gender = values.get("gender")?.parse::<Gender>().ok()?;
        let dob = values.get("dob")?.parse::<NaiveDate>().ok()?;
        let state = values.get("state")?.clone();
        let is_active = values.contains_key("isActive");
        Some(EmployeeDraft {
            full_name,
            gender,
            dob,
            state,
            is_active,
        })
    }

    pub fn into_new(self, profile_image: String) -> NewEmployee {
        NewEmployee {
            profile_image,
            full_name: self.full_name,
            gender: self.gender,
            dob: self.dob,
            state: self.state,
            is_active: self.is_active,
        }
    }

    pub fn into_patch(self, profile_image: Option<String>) -> EmployeePatch {
        EmployeePatch {
            profile_image,
            full_name: Some(self.full_name),
            gender: Some(self.gender),
            dob: Some(self.dob),
            state: Some(self.state),
            is_active: Some(self.is_active),
        }
    }
}
