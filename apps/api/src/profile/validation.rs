use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::models::profile::{FieldKind, FormField, ProfileForm, SectionId};

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]+$").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    pub section: SectionId,
    pub field: String,
    pub message: String,
}

/// Validates a single form control.
///
/// FAIL conditions:
/// - required and blank
/// - `email` value not shaped like `local@domain.tld`
/// - `url` value not an absolute URL
/// - `tel` value with anything but digits, spaces, `-`, `(`, `)` and a leading `+`
///
/// Format checks only apply to non-blank values.
pub fn validate_field(field: &FormField) -> Result<(), String> {
    let value = field.value.trim();

    if value.is_empty() {
        if field.required {
            return Err("This field is required".to_string());
        }
        return Ok(());
    }

    match field.kind {
        FieldKind::Email if !EMAIL.is_match(value) => {
            Err("Please enter a valid email address".to_string())
        }
        FieldKind::Url if Url::parse(value).is_err() => Err("Please enter a valid URL".to_string()),
        FieldKind::Tel if !PHONE.is_match(value) => {
            Err("Please enter a valid phone number".to_string())
        }
        _ => Ok(()),
    }
}

/// Validates every field of every section, collecting all failures.
pub fn validate_form(form: &ProfileForm) -> Vec<FieldError> {
    form.sections
        .iter()
        .flat_map(|(&section, section_form)| {
            section_form.fields.iter().filter_map(move |field| {
                validate_field(field).err().map(|message| FieldError {
                    section,
                    field: field.name.clone(),
                    message,
                })
            })
        })
        .collect()
}
