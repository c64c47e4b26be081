use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Dashboard each role lands on from the home page and sidebar.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::User => "/user/dashboard",
            Role::Admin => "/admin/dashboard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity fields carried in the access token payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub id: String,
    pub name: String,
    pub email: String,
    /// `None` when the payload has no role or one this UI does not know.
    pub role: Option<Role>,
}

#[derive(Deserialize)]
struct RawClaims {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    object_id: Option<String>,
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

impl From<RawClaims> for SessionClaims {
    fn from(raw: RawClaims) -> Self {
        Self {
            id: raw.id.or(raw.object_id).or(raw.sub).unwrap_or_default(),
            name: raw.name.unwrap_or_default(),
            email: raw.email.unwrap_or_default(),
            role: raw.role.as_deref().and_then(Role::parse),
        }
    }
}

/// Resolves the claims for an optional cookie value.
///
/// An absent or blank token is "no session". A token that is present but
/// cannot be decoded is an error, never an anonymous session.
pub fn resolve(token: Option<&str>) -> Result<Option<SessionClaims>, SessionError> {
    match token.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => decode_claims(value).map(Some),
    }
}

pub fn decode_claims(token: &str) -> Result<SessionClaims, SessionError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(SessionError::MissingPayload)?;

    // Accept padded and standard-alphabet payloads as well as strict base64url.
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|e| SessionError::InvalidEncoding(e.to_string()))?;
    let raw: RawClaims = serde_json::from_slice(&bytes)
        .map_err(|e| SessionError::InvalidClaims(e.to_string()))?;
    Ok(raw.into())
}
