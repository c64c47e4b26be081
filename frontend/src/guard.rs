//! Route guard decision shared by the client gate and the server middleware.

use crate::session::{Role, SessionClaims};

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

/// Paths only meaningful without a session.
pub const AUTH_ROUTES: &[&str] = &["/login", "/register"];

const GUARDED_PREFIXES: &[&str] = &["/admin", "/user"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

impl GuardDecision {
    /// Location to send the browser to, if any.
    pub fn target(&self) -> Option<&'static str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin => Some(LOGIN_PATH),
            GuardDecision::RedirectToHome => Some(HOME_PATH),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

pub fn role_prefixes(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => &["/admin"],
        Role::User => &["/user"],
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// `true` when `path` is `prefix` itself or lives underneath it.
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    let path = normalize(path);
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

pub fn is_auth_route(path: &str) -> bool {
    let path = normalize(path);
    AUTH_ROUTES.iter().any(|route| *route == path)
}

/// Whether the guard runs at all for `path`.
pub fn applies_to(path: &str) -> bool {
    is_auth_route(path)
        || GUARDED_PREFIXES
            .iter()
            .any(|prefix| matches_prefix(path, prefix))
}

pub fn evaluate(path: &str, claims: Option<&SessionClaims>) -> GuardDecision {
    let Some(claims) = claims else {
        return if is_auth_route(path) {
            GuardDecision::Allow
        } else {
            GuardDecision::RedirectToLogin
        };
    };

    if is_auth_route(path) {
        return GuardDecision::RedirectToHome;
    }

    let permitted = claims
        .role
        .map(|role| {
            role_prefixes(role)
                .iter()
                .any(|prefix| matches_prefix(path, prefix))
        })
        .unwrap_or(false);

    if permitted {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToHome
    }
}
