use crate::{
    api::RegisterPayload,
    session::Role,
    utils::validation::{self, FieldErrors},
};
use validator::Validate;

pub const MAX_AVATAR_BYTES: f64 = 2.0 * 1024.0 * 1024.0;

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
    pub role: Role,
    pub phone: String,
    pub address: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::User,
            phone: String::new(),
            address: String::new(),
        }
    }
}

impl RegisterForm {
    pub fn to_payload(&self) -> Result<RegisterPayload, FieldErrors> {
        let trimmed = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
        };
        validation::check(&trimmed)?;
        Ok(RegisterPayload {
            name: trimmed.name,
            email: trimmed.email,
            password: trimmed.password,
            role: trimmed.role,
            phone: trimmed.phone,
            address: trimmed.address,
        })
    }
}

/// Rejects anything that is not an image or is over the size limit.
pub fn check_avatar(mime_type: &str, size: f64) -> Result<(), String> {
    if !mime_type.starts_with("image/") {
        return Err("Only image files are allowed".into());
    }
    if size > MAX_AVATAR_BYTES {
        return Err("Image must be 2 MB or smaller".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegisterForm {
        RegisterForm {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            phone: "555-0100".into(),
            address: "12 Analytical Row".into(),
            ..RegisterForm::default()
        }
    }

    #[test]
    fn short_password_is_rejected() {
        let errors = RegisterForm {
            password: "ab".into(),
            ..filled()
        }
        .to_payload()
        .unwrap_err();
        assert_eq!(
            errors.get("password").as_deref(),
            Some("Password must be at least 4 characters")
        );
        assert!(errors.get("name").is_none());
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let errors = RegisterForm::default().to_payload().unwrap_err();
        assert!(errors.get("name").is_some());
        assert_eq!(errors.get("email").as_deref(), Some("Invalid email address"));
        assert!(errors.get("password").is_some());
    }

    #[test]
    fn valid_form_defaults_to_user_role() {
        let payload = filled().to_payload().unwrap();
        assert_eq!(payload.role, Role::User);
        assert_eq!(payload.name, "Ada Lovelace");
    }

    #[test]
    fn avatar_must_be_a_small_image() {
        assert!(check_avatar("image/png", 1024.0).is_ok());
        assert_eq!(
            check_avatar("application/pdf", 1024.0).unwrap_err(),
            "Only image files are allowed"
        );
        assert_eq!(
            check_avatar("image/jpeg", MAX_AVATAR_BYTES + 1.0).unwrap_err(),
            "Image must be 2 MB or smaller"
        );
    }
}
