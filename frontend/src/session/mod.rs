//! Session/identity resolution from the `accessToken` cookie value.
//!
//! Decoding only reads the token's payload segment. Signature and expiry are
//! never checked here, so the resulting claims are a display hint for routing
//! and UI gating; the backend re-validates the raw token on every API call.

mod claims;
mod error;

pub use claims::{decode_claims, resolve, Role, SessionClaims};
pub use error::SessionError;
