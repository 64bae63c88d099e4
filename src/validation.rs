use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} is required.")]
    Required { label: &'static str },
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Name must be at least 2 characters long.")]
    NameTooShort,
    #[error("Message must be at least 10 characters long.")]
    MessageTooShort,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea,
}

impl InputKind {
    pub fn html_type(self) -> &'static str {
        match self {
            InputKind::Text | InputKind::TextArea => "text",
            InputKind::Email => "email",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
}

pub const NAME_FIELD: FieldSpec = FieldSpec {
    name: "name",
    label: "Name",
    kind: InputKind::Text,
    required: true,
};

pub const EMAIL_FIELD: FieldSpec = FieldSpec {
    name: "email",
    label: "Email",
    kind: InputKind::Email,
    required: true,
};

pub const SUBJECT_FIELD: FieldSpec = FieldSpec {
    name: "subject",
    label: "Subject",
    kind: InputKind::Text,
    required: false,
};

pub const MESSAGE_FIELD: FieldSpec = FieldSpec {
    name: "message",
    label: "Message",
    kind: InputKind::TextArea,
    required: true,
};

pub const CONTACT_FIELDS: [FieldSpec; 4] = [NAME_FIELD, EMAIL_FIELD, SUBJECT_FIELD, MESSAGE_FIELD];

/// Outcome of validating a single field, as rendered next to the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldValidation {
    pub is_valid: bool,
    pub message: Option<String>,
}

impl From<&Result<(), ValidationError>> for FieldValidation {
    fn from(result: &Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                is_valid: true,
                message: None,
            },
            Err(err) => Self {
                is_valid: false,
                message: Some(err.to_string()),
            },
        }
    }
}

/// Checks run in order and the first failure wins: required, email, name, message.
pub fn validate_field(spec: &FieldSpec, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();
    if spec.required && value.is_empty() {
        return Err(ValidationError::Required { label: spec.label });
    }
    if value.is_empty() {
        return Ok(());
    }
    if spec.kind == InputKind::Email {
        if !EMAIL_PATTERN.is_match(value) {
            return Err(ValidationError::InvalidEmail);
        }
        return Ok(());
    }
    let chars = value.chars().count();
    if spec.name == NAME_FIELD.name && chars < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }
    if spec.name == MESSAGE_FIELD.name && chars < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort);
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            "subject" => &self.subject,
            "message" => &self.message,
            _ => "",
        }
    }

    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "subject" => self.subject = value,
            "message" => self.message = value,
            _ => tracing::debug!("ignoring unknown contact field {field}"),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-field results for every required field; nothing short-circuits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValidation {
    pub results: Vec<(&'static str, Result<(), ValidationError>)>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = (&'static str, &ValidationError)> + '_ {
        self.results
            .iter()
            .filter_map(|(name, result)| result.as_ref().err().map(|err| (*name, err)))
    }
}

pub fn validate_form(fields: &[FieldSpec], form: &ContactForm) -> FormValidation {
    let results = fields
        .iter()
        .filter(|spec| spec.required)
        .map(|spec| (spec.name, validate_field(spec, form.value(spec.name))))
        .collect();
    FormValidation { results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn messages(validation: &FormValidation) -> Vec<(&'static str, String)> {
        validation
            .errors()
            .map(|(name, err)| (name, err.to_string()))
            .collect()
    }

    #[test]
    fn optional_plain_fields_always_pass() {
        for value in ["", " ", "x", "anything at all", "@@@"] {
            assert_eq!(validate_field(&SUBJECT_FIELD, value), Ok(()));
        }
    }

    #[test]
    fn required_check_short_circuits() {
        assert_eq!(
            validate_field(&EMAIL_FIELD, "   "),
            Err(ValidationError::Required { label: "Email" })
        );
        assert_eq!(
            validate_field(&NAME_FIELD, "").unwrap_err().to_string(),
            "Name is required."
        );
    }

    #[test]
    fn email_pattern() {
        assert_eq!(validate_field(&EMAIL_FIELD, " ada@example.com "), Ok(()));
        for bad in ["bad", "a@b", "a b@c.d", "@example.com", "ada@@example.com"] {
            assert_eq!(
                validate_field(&EMAIL_FIELD, bad),
                Err(ValidationError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn optional_email_may_be_blank() {
        let spec = FieldSpec {
            required: false,
            ..EMAIL_FIELD
        };
        assert_eq!(validate_field(&spec, ""), Ok(()));
        assert_eq!(validate_field(&spec, "nope"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn name_and_message_lengths_use_trimmed_chars() {
        assert_eq!(validate_field(&NAME_FIELD, " A "), Err(ValidationError::NameTooShort));
        assert_eq!(validate_field(&NAME_FIELD, "Jo"), Ok(()));
        assert_eq!(validate_field(&NAME_FIELD, "Ée"), Ok(()));
        assert_eq!(
            validate_field(&MESSAGE_FIELD, "  short   "),
            Err(ValidationError::MessageTooShort)
        );
        assert_eq!(validate_field(&MESSAGE_FIELD, "0123456789"), Ok(()));
    }

    #[test]
    fn field_validation_view() {
        let view = FieldValidation::from(&validate_field(&NAME_FIELD, "A"));
        assert!(!view.is_valid);
        assert_eq!(
            view.message.as_deref(),
            Some("Name must be at least 2 characters long.")
        );
        let view = FieldValidation::from(&validate_field(&NAME_FIELD, "Ada"));
        assert_eq!(
            view,
            FieldValidation {
                is_valid: true,
                message: None
            }
        );
    }

    #[test]
    fn invalid_form_reports_every_field() {
        let form = ContactForm {
            name: "A".into(),
            email: "bad".into(),
            subject: String::new(),
            message: "short".into(),
        };
        let validation = validate_form(&CONTACT_FIELDS, &form);
        assert!(!validation.is_valid());
        assert_eq!(
            messages(&validation),
            vec![
                ("name", "Name must be at least 2 characters long.".to_string()),
                ("email", "Please enter a valid email address.".to_string()),
                ("message", "Message must be at least 10 characters long.".to_string()),
            ]
        );
    }

    #[test]
    fn valid_form_passes_and_skips_optional_fields() {
        let form = ContactForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            subject: String::new(),
            message: "This message is definitely long enough.".into(),
        };
        let validation = validate_form(&CONTACT_FIELDS, &form);
        assert!(validation.is_valid());
        assert_eq!(validation.results.len(), 3);
    }

    #[test]
    fn form_set_and_reset() {
        let mut form = ContactForm::default();
        form.set("email", "x@y.z".into());
        form.set("unknown", "ignored".into());
        assert_eq!(form.value("email"), "x@y.z");
        assert_eq!(form.value("unknown"), "");
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
