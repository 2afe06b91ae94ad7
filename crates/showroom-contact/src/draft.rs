//! The contact form draft and its validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category tag attached to a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    #[default]
    General,
    Tiles,
    Marble,
    Bathroom,
    Hardware,
    Bulk,
}

impl InquiryType {
    /// All inquiry types in the order the form lists them.
    pub const ALL: [InquiryType; 6] = [
        InquiryType::General,
        InquiryType::Tiles,
        InquiryType::Marble,
        InquiryType::Bathroom,
        InquiryType::Hardware,
        InquiryType::Bulk,
    ];

    /// Wire value, as sent to the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Tiles => "tiles",
            InquiryType::Marble => "marble",
            InquiryType::Bathroom => "bathroom",
            InquiryType::Hardware => "hardware",
            InquiryType::Bulk => "bulk",
        }
    }

    /// Option label shown in the form.
    pub fn label(self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Tiles => "Tiles",
            InquiryType::Marble => "Marble & Granite",
            InquiryType::Bathroom => "Bathroom & Sanitary",
            InquiryType::Hardware => "Hardware",
            InquiryType::Bulk => "Bulk Order",
        }
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned for an inquiry type outside the fixed six.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown inquiry type: {0}")]
pub struct UnknownInquiryType(pub String);

impl FromStr for InquiryType {
    type Err = UnknownInquiryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownInquiryType(s.to_string()))
    }
}

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
    InquiryType,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::Message,
        Field::InquiryType,
    ];

    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Phone)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Message => "message",
            Field::InquiryType => "inquiry_type",
        })
    }
}

/// Local validation failure. No request is made when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<Field>),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The values currently typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub inquiry_type: InquiryType,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one field edit.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), UnknownInquiryType> {
        match field {
            Field::Name => self.name = value.to_string(),
            Field::Phone => self.phone = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Message => self.message = value.to_string(),
            Field::InquiryType => self.inquiry_type = value.parse()?,
        }
        Ok(())
    }

    /// Current value of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
            Field::InquiryType => self.inquiry_type.as_str(),
        }
    }

    /// Whether every field is back at its initial value.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Check the required fields and produce the request body.
    ///
    /// A field holding only whitespace counts as empty.
    pub fn validate(&self) -> Result<ContactSubmission, ValidationError> {
        let missing: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(ContactSubmission {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            inquiry_type: self.inquiry_type,
        })
    }
}

/// The JSON body posted to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub inquiry_type: InquiryType,
}
