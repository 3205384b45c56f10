//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de los datos
//! de contacto del formulario de cotización.

use validator::ValidationError;

/// Validar que un string no esté vacío (solo espacios cuenta como vacío)
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que el cliente aceptó ser contactado
pub fn validate_consent(consent: bool) -> Result<(), ValidationError> {
    if !consent {
        let mut error = ValidationError::new("consent_required");
        error.message = Some("Consent to be contacted is required".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("John").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
        assert_eq!(validate_not_empty("\t").unwrap_err().code, "not_empty");
    }

    #[test]
    fn test_validate_consent() {
        assert!(validate_consent(true).is_ok());
        assert_eq!(validate_consent(false).unwrap_err().code, "consent_required");
    }
}
