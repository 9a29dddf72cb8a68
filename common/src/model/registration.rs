//! Registration form models.
//!
//! Each form is a flat mapping of named string fields that serializes to the
//! JSON object the registration API expects. The `FIELDS` table drives the
//! rendered form (label, input kind, required flag, placeholder) so the
//! frontend can render either form with one component.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),
}

/// How a field is entered. Shape checks (`email`, `tel`) and required-ness
/// are left to the browser's native constraint validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select {
        prompt: &'static str,
        options: &'static [&'static str],
    },
    TextArea {
        rows: u32,
    },
}

impl FieldKind {
    /// The `type` attribute for `<input>` based kinds.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Tel => Some("tel"),
            FieldKind::Select { .. } | FieldKind::TextArea { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

/// A registration form posted as one JSON document to a fixed endpoint.
pub trait RegistrationForm: Serialize + Default + Clone + PartialEq + 'static {
    /// Endpoint path relative to the API base URL.
    const ENDPOINT: &'static str;

    /// Fields in display order.
    const FIELDS: &'static [FieldSpec];

    /// Shown when the request never produced a usable response.
    const CONNECTIVITY_MESSAGE: &'static str;

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// Sets one field, leaving every other field untouched.
    fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        match self.field_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(FormError::UnknownField(name.to_string())),
        }
    }

    /// Clears every field back to an empty string.
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn is_empty(&self) -> bool {
        Self::FIELDS
            .iter()
            .all(|spec| self.field(spec.name).is_none_or(str::is_empty))
    }
}

macro_rules! field_accessors {
    ($($name:ident),+ $(,)?) => {
        fn field(&self, name: &str) -> Option<&str> {
            match name {
                $(stringify!($name) => Some(self.$name.as_str()),)+
                _ => None,
            }
        }

        fn field_mut(&mut self, name: &str) -> Option<&mut String> {
            match name {
                $(stringify!($name) => Some(&mut self.$name),)+
                _ => None,
            }
        }
    };
}

pub const SUCCESS_MESSAGE: &str = "Registration submitted successfully! We will contact you soon.";

const EXHIBITOR_SECTORS: &[&str] = &[
    "Hardware & Tools",
    "Toys",
    "Chemical",
    "Electronics & Components",
    "Auto Parts",
    "Construction Material",
    "Agriculture & Equipment's",
    "Plastic & Packaging",
    "Sports",
    "Food & Beverage",
    "Pharma",
    "Surgical Devices",
    "Gifting & Stationary",
    "Furniture",
    "Kitchen Wear",
    "Spices",
    "Footwear",
    "Home Décor",
];

const VISITOR_INTERESTS: &[&str] = &[
    "Hardware & Tools",
    "Toys",
    "Chemical",
    "Electronics & Components",
    "Auto Parts",
    "Construction Material",
    "Food & Beverage",
    "Pharma",
    "Surgical Devices",
    "Furniture",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitorRegistration {
    pub company_name: String,
    pub contact_person_name: String,
    pub designation: String,
    pub email_address: String,
    pub contact_number: String,
    pub product_service: String,
    pub company_address: String,
}

impl RegistrationForm for ExhibitorRegistration {
    const ENDPOINT: &'static str = "/api/exhibitor-registrations/";

    const CONNECTIVITY_MESSAGE: &'static str =
        "Failed to submit registration. Please check if the server is running and try again.";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "company_name",
            label: "Company Name",
            kind: FieldKind::Text,
            required: true,
            placeholder: "Enter your company name",
        },
        FieldSpec {
            name: "contact_person_name",
            label: "Contact Person Name",
            kind: FieldKind::Text,
            required: true,
            placeholder: "Enter contact person name",
        },
        FieldSpec {
            name: "designation",
            label: "Designation",
            kind: FieldKind::Text,
            required: true,
            placeholder: "Enter designation",
        },
        FieldSpec {
            name: "email_address",
            label: "Email Address",
            kind: FieldKind::Email,
            required: true,
            placeholder: "Enter email address",
        },
        FieldSpec {
            name: "contact_number",
            label: "Contact Number",
            kind: FieldKind::Tel,
            required: true,
            placeholder: "Enter contact number",
        },
        FieldSpec {
            name: "product_service",
            label: "Product/Service",
            kind: FieldKind::Select {
                prompt: "Select your industry sector",
                options: EXHIBITOR_SECTORS,
            },
            required: true,
            placeholder: "",
        },
        FieldSpec {
            name: "company_address",
            label: "Company Address",
            kind: FieldKind::TextArea { rows: 4 },
            required: true,
            placeholder: "Enter complete company address",
        },
    ];

    field_accessors!(
        company_name,
        contact_person_name,
        designation,
        email_address,
        contact_number,
        product_service,
        company_address,
    );
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRegistration {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub industry_interest: String,
}

impl RegistrationForm for VisitorRegistration {
    const ENDPOINT: &'static str = "/api/visitor-registrations/";

    const CONNECTIVITY_MESSAGE: &'static str =
        "Failed to submit registration. Please ensure the backend is running.";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "first_name",
            label: "First Name",
            kind: FieldKind::Text,
            required: true,
            placeholder: "Enter first name",
        },
        FieldSpec {
            name: "last_name",
            label: "Last Name",
            kind: FieldKind::Text,
            required: true,
            placeholder: "Enter last name",
        },
        FieldSpec {
            name: "company_name",
            label: "Company Name",
            kind: FieldKind::Text,
            required: false,
            placeholder: "Enter company name",
        },
        FieldSpec {
            name: "email_address",
            label: "Email Address",
            kind: FieldKind::Email,
            required: true,
            placeholder: "Enter email address",
        },
        FieldSpec {
            name: "phone_number",
            label: "Phone Number",
            kind: FieldKind::Tel,
            required: true,
            placeholder: "Enter phone number",
        },
        FieldSpec {
            name: "industry_interest",
            label: "Industry Interest",
            kind: FieldKind::Select {
                prompt: "Select an industry",
                options: VISITOR_INTERESTS,
            },
            required: true,
            placeholder: "",
        },
    ];

    field_accessors!(
        first_name,
        last_name,
        company_name,
        email_address,
        phone_number,
        industry_interest,
    );
}
