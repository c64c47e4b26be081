use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

/// First message per field, ready for inline display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<String> {
        self.0.get(field).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                let first = errs.first()?;
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                Some((field.to_string(), message))
            })
            .collect();
        Self(fields)
    }
}

/// Runs the derived rules; `Err` carries per-field messages.
pub fn check<T: Validate>(value: &T) -> Result<(), FieldErrors> {
    value.validate().map_err(|errors| FieldErrors::from(&errors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 2, message = "too short"))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[test]
    fn collects_first_message_per_field() {
        let errors = check(&Sample {
            name: "a".into(),
            email: "nope".into(),
        })
        .unwrap_err();
        assert_eq!(errors.get("name").as_deref(), Some("too short"));
        assert_eq!(errors.get("email").as_deref(), Some("email"));
    }

    #[test]
    fn valid_values_pass() {
        assert!(check(&Sample {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        })
        .is_ok());
    }
}
