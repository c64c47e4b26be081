#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::User;
    use crate::session::Role;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};

    /// Unsigned token carrying `claims` as its payload.
    pub fn token_for(claims: Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
        format!("{}.{}.signature", header, payload)
    }

    pub fn admin_claims_json() -> Value {
        json!({
            "id": "u-admin",
            "name": "Admin User",
            "email": "admin@example.com",
            "role": "admin"
        })
    }

    pub fn user_claims_json() -> Value {
        json!({
            "id": "u-regular",
            "name": "Regular User",
            "email": "user@example.com",
            "role": "user"
        })
    }

    pub fn sample_user(id: &str, role: Role, verified: bool) -> User {
        let joined = Utc.with_ymd_and_hms(2025, 1, 5, 9, 30, 0).unwrap();
        User {
            id: id.into(),
            name: format!("Member {}", id),
            email: format!("{}@example.com", id),
            phone: Some("555-0100".into()),
            address: None,
            role,
            is_verified: verified,
            profile_image: None,
            created_at: joined,
            updated_at: joined,
        }
    }

    pub fn user_wire_json(user: &User) -> Value {
        serde_json::to_value(user).unwrap()
    }
}
