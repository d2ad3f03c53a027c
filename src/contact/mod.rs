//! Contact form: field values, validation, and the submission lifecycle.
//!
//! Validation failures are reported as user-facing notifications and block
//! submission; nothing is sent until every required field is present and
//! the email has a `local@domain.tld` shape.

pub mod flow;
pub mod notify;
pub mod submit;

pub use flow::ContactFlow;
pub use notify::{Notification, NotificationCenter, NotificationKind};
pub use submit::{LogSubmitter, SubmitError, Submission, SubmissionStatus, Submitter, FAILED_MESSAGE, SENT_MESSAGE};

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Required fields, in the order they are reported.
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// Current form contents, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated, trimmed message ready to hand to a [`Submitter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Missing(Vec<Field>),
    InvalidEmail,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Missing(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
                write!(f, "Please fill in: {}", names.join(", "))
            }
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email address"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Required fields first, then email shape.
    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        let missing: Vec<Field> = Field::REQUIRED
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::Missing(missing));
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let subject = self.subject.trim();
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: self.message.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// `local@domain.tld`: one `@`, no whitespace, and a dot in the domain
/// with text on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}
