//! Validation gate for the lead form
//!
//! `validate` is pure and must succeed before any network call is made.

use super::field::{Configuration, FormFields, VisitTiming, PHONE_LENGTH};
use serde::Serialize;
use thiserror::Error;

/// Why a set of form fields cannot be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField,
    #[error("Phone number must be 10 digits.")]
    InvalidPhone,
}

/// Normalized snapshot of a valid form, as sent to the persistence backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub name: String,
    pub config: Configuration,
    pub visit_timing: VisitTiming,
    pub phone: String,
}

/// Check the four fields and produce a submittable [`Lead`]
pub fn validate(fields: &FormFields) -> Result<Lead, ValidationError> {
    let name = fields.name.trim();
    let (Some(config), Some(visit_timing)) = (fields.config, fields.visit_timing) else {
        return Err(ValidationError::MissingField);
    };
    if name.is_empty() || fields.phone.is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_phone(&fields.phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(Lead {
        name: name.to_string(),
        config,
        visit_timing,
        phone: fields.phone.clone(),
    })
}

/// Exactly ten ASCII digits
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().count() == PHONE_LENGTH && phone.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete_fields() -> FormFields {
        FormFields {
            name: "A".to_string(),
            config: Some(Configuration::OneBhk),
            visit_timing: Some(VisitTiming::ThisWeekend),
            phone: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_complete_fields_produce_lead() {
        let lead = validate(&complete_fields()).unwrap();
        assert_eq!(
            lead,
            Lead {
                name: "A".to_string(),
                config: Configuration::OneBhk,
                visit_timing: VisitTiming::ThisWeekend,
                phone: "9876543210".to_string(),
            }
        );
    }

    #[test]
    fn test_name_is_trimmed() {
        let mut fields = complete_fields();
        fields.name = "  Asha Rao ".to_string();
        assert_eq!(validate(&fields).unwrap().name, "Asha Rao");
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        let cases: [fn(&mut FormFields); 5] = [
            |f| f.name.clear(),
            |f| f.name = "   ".to_string(),
            |f| f.config = None,
            |f| f.visit_timing = None,
            |f| f.phone.clear(),
        ];
        for clear in cases {
            let mut fields = complete_fields();
            clear(&mut fields);
            assert_eq!(validate(&fields), Err(ValidationError::MissingField));
        }
    }

    #[test]
    fn test_empty_form_is_missing_field() {
        assert_eq!(
            validate(&FormFields::default()),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn test_bad_phones_are_rejected() {
        for phone in [
            "987654321",
            "98765432100",
            "98765t3210",
            "+987654321",
            "98765 4321",
            "９８７６５４３２１０",
        ] {
            let mut fields = complete_fields();
            fields.phone = phone.to_string();
            assert_eq!(
                validate(&fields),
                Err(ValidationError::InvalidPhone),
                "phone {phone:?}"
            );
        }
    }

    #[test]
    fn test_missing_field_wins_over_invalid_phone() {
        let mut fields = complete_fields();
        fields.phone = "12".to_string();
        fields.config = None;
        assert_eq!(validate(&fields), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_lead_wire_shape() {
        let lead = validate(&complete_fields()).unwrap();
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "A",
                "config": "1BHK",
                "visitTiming": "This Weekend",
                "phone": "9876543210",
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "All fields are required."
        );
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Phone number must be 10 digits."
        );
    }
}
