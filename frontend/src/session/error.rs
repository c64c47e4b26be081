use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session token has no payload segment")]
    MissingPayload,
    #[error("session token payload is not valid base64url: {0}")]
    InvalidEncoding(String),
    #[error("session token payload is not a claims object: {0}")]
    InvalidClaims(String),
}
