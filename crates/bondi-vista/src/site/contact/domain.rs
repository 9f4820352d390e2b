use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    /// Form control name used by the rendered page.
    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Email Address",
            ContactField::Phone => "Phone Number",
            ContactField::Message => "Your Message or Enquiry",
        }
    }

    /// Value as the browser submits it: email controls drop surrounding whitespace.
    pub fn sanitize(self, raw: &str) -> &str {
        match self {
            ContactField::Email => raw.trim(),
            ContactField::Name | ContactField::Phone | ContactField::Message => raw,
        }
    }

    /// Whether the page refuses to submit while this field is empty.
    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Phone)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contact form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.as_str() == raw)
            .ok_or_else(|| UnknownField(raw.to_string()))
    }
}

/// In-progress enquiry. Every field is always a string; empty is the reset value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactFormState {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (ContactField, &str)> + '_ {
        ContactField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, value)| value.is_empty())
    }
}

/// Replace one field, leaving the other three untouched.
pub fn apply(
    mut state: ContactFormState,
    field: ContactField,
    value: impl Into<String>,
) -> ContactFormState {
    *state.slot_mut(field) = value.into();
    state
}
