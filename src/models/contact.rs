//! Modelo de ContactRequest
//!
//! Datos del lead capturados en el formulario de cotización. Se crean
//! vacíos al abrir el flujo y se descartan al cerrarlo.

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::utils::validation::{validate_consent, validate_not_empty};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub consent: bool,
}

/// Actualización parcial, campo por campo
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub comments: Option<String>,
    pub consent: Option<bool>,
}

impl ContactRequest {
    pub fn apply(&mut self, update: ContactUpdate) {
        if let Some(value) = update.first_name {
            self.first_name = value;
        }
        if let Some(value) = update.last_name {
            self.last_name = value;
        }
        if let Some(value) = update.email {
            self.email = value;
        }
        if let Some(value) = update.phone {
            self.phone = value;
        }
        if let Some(value) = update.comments {
            self.comments = value;
        }
        if let Some(value) = update.consent {
            self.consent = value;
        }
    }

    /// Todos los errores que impiden el envío, por campo
    pub fn validate_for_submission(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ];
        for (field, value) in required {
            if let Err(error) = validate_not_empty(value) {
                errors.add(field, error);
            }
        }
        if let Err(error) = validate_consent(self.consent) {
            errors.add("consent", error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.validate_for_submission().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactRequest {
        ContactRequest {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            comments: String::new(),
            consent: true,
        }
    }

    #[test]
    fn test_complete_contact_passes() {
        assert!(filled().is_complete());
    }

    #[test]
    fn test_each_required_field_blocks_submission() {
        let mutations: [fn(&mut ContactRequest); 5] = [
            |c| c.first_name.clear(),
            |c| c.last_name = "  ".to_string(),
            |c| c.email.clear(),
            |c| c.phone.clear(),
            |c| c.consent = false,
        ];
        for mutate in mutations {
            let mut contact = filled();
            mutate(&mut contact);
            assert!(!contact.is_complete(), "{:?}", contact);
        }
    }

    #[test]
    fn test_errors_name_every_missing_field() {
        let errors = ContactRequest::default().validate_for_submission().unwrap_err();
        let fields = errors.field_errors();
        for field in ["firstName", "lastName", "email", "phone", "consent"] {
            assert!(fields.contains_key(field), "missing {}", field);
        }
        assert!(!fields.contains_key("comments"));
    }

    #[test]
    fn test_apply_only_touches_given_fields() {
        let mut contact = filled();
        contact.apply(ContactUpdate {
            email: Some("jane@example.com".to_string()),
            consent: Some(false),
            ..Default::default()
        });
        assert_eq!(contact.email, "jane@example.com");
        assert!(!contact.consent);
        assert_eq!(contact.first_name, "John");
    }
}
