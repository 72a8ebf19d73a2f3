use std::{collections::BTreeMap, fmt, str::FromStr};

use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::email_address::EmailAddress;

/// Raw contact-form data as submitted by a visitor. Untrusted; fields the
/// client omitted are represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

#[nutype(
    validate(len_char_min = 2, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct InquiryFirstName(String);

#[nutype(
    validate(len_char_min = 2, len_char_max = 256),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct InquiryLastName(String);

#[nutype(
    validate(len_char_min = 8, len_char_max = 32),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct InquiryPhone(String);

#[nutype(
    validate(len_char_min = 10, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct InquiryMessage(String);

/// The services offered on the website. The form's select is restricted to
/// this set and the server enforces the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceCategory {
    #[serde(rename = "Pintura en general")]
    GeneralPainting,
    #[serde(rename = "Durlock y cielorrasos")]
    DrywallAndCeilings,
    #[serde(rename = "Electricidad")]
    Electrical,
    #[serde(rename = "Plomería")]
    Plumbing,
    #[serde(rename = "Mantenimiento de edificios")]
    BuildingMaintenance,
    #[serde(rename = "Albañilería")]
    Masonry,
    #[serde(rename = "Otro")]
    Other,
}

impl ServiceCategory {
    pub const ALL: [Self; 7] = [
        Self::GeneralPainting,
        Self::DrywallAndCeilings,
        Self::Electrical,
        Self::Plumbing,
        Self::BuildingMaintenance,
        Self::Masonry,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GeneralPainting => "Pintura en general",
            Self::DrywallAndCeilings => "Durlock y cielorrasos",
            Self::Electrical => "Electricidad",
            Self::Plumbing => "Plomería",
            Self::BuildingMaintenance => "Mantenimiento de edificios",
            Self::Masonry => "Albañilería",
            Self::Other => "Otro",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownServiceCategory;

impl FromStr for ServiceCategory {
    type Err = UnknownServiceCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(UnknownServiceCategory)
    }
}

/// The six form fields, in form order. Serialized using the wire names of the
/// original form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InquiryField {
    #[serde(rename = "nombre")]
    FirstName,
    #[serde(rename = "apellido")]
    LastName,
    #[serde(rename = "telefono")]
    Phone,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "servicio")]
    Service,
    #[serde(rename = "mensaje")]
    Message,
}

impl InquiryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "nombre",
            Self::LastName => "apellido",
            Self::Phone => "telefono",
            Self::Email => "email",
            Self::Service => "servicio",
            Self::Message => "mensaje",
        }
    }

    /// The user-facing message reported when this field fails its rule.
    pub fn validation_message(&self) -> &'static str {
        match self {
            Self::FirstName => "El nombre es requerido",
            Self::LastName => "El apellido es requerido",
            Self::Phone => "Ingrese un teléfono válido",
            Self::Email => "Ingrese un email válido",
            Self::Service => "Seleccione un servicio",
            Self::Message => "El mensaje debe tener al menos 10 caracteres",
        }
    }
}

impl fmt::Display for InquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation messages keyed by field. Only failing fields appear as keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<InquiryField, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: InquiryField, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: InquiryField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn get(&self, field: InquiryField) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (InquiryField, &[String])> {
        self.0.iter().map(|(field, messages)| (*field, messages.as_slice()))
    }
}

/// A contact inquiry whose fields all passed their rules. Only produced by
/// [`InquiryInput::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInquiry {
    pub first_name: InquiryFirstName,
    pub last_name: InquiryLastName,
    pub phone: InquiryPhone,
    pub email: EmailAddress,
    pub service: ServiceCategory,
    pub message: InquiryMessage,
}

impl InquiryInput {
    /// Check all six field rules. Rules are evaluated independently so the
    /// result names every failing field, not just the first one.
    pub fn validate(&self) -> Result<ValidatedInquiry, FieldErrors> {
        let mut errors = FieldErrors::default();

        let first_name = check(
            &mut errors,
            InquiryField::FirstName,
            InquiryFirstName::try_from(self.first_name.clone()),
        );
        let last_name = check(
            &mut errors,
            InquiryField::LastName,
            InquiryLastName::try_from(self.last_name.clone()),
        );
        let phone = check(
            &mut errors,
            InquiryField::Phone,
            InquiryPhone::try_from(self.phone.clone()),
        );
        let email = check(
            &mut errors,
            InquiryField::Email,
            self.email.parse::<EmailAddress>(),
        );
        let service = check(
            &mut errors,
            InquiryField::Service,
            self.service.parse::<ServiceCategory>(),
        );
        let message = check(
            &mut errors,
            InquiryField::Message,
            InquiryMessage::try_from(self.message.clone()),
        );

        match (first_name, last_name, phone, email, service, message) {
            (Some(first_name), Some(last_name), Some(phone), Some(email), Some(service), Some(message)) => {
                Ok(ValidatedInquiry {
                    first_name,
                    last_name,
                    phone,
                    email,
                    service,
                    message,
                })
            }
            _ => Err(errors),
        }
    }
}

fn check<T, E>(errors: &mut FieldErrors, field: InquiryField, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(field, field.validation_message());
            None
        }
    }
}
