use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RouteGuard, toast::ToastHost},
    pages::{
        AdminDashboardPage, HomePage, LoginPage, ManageUsersPage, RegisterPage, UserDashboardPage,
    },
    state::{notify::Notifier, session::SessionProvider},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/admin/dashboard",
    "/admin/manage_user",
    "/user/dashboard",
];

/// Routes rendered inside `RouteGuard`.
pub const GUARDED_ROUTE_PATHS: &[&str] = &[
    "/login",
    "/register",
    "/admin/dashboard",
    "/admin/manage_user",
    "/user/dashboard",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_context(Notifier::new());
    provide_meta_context();
    view! {
        <Title text="RoleDash"/>
        <SessionProvider>
            <ToastHost />
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=GuardedLogin/>
                    <Route path="/register" view=GuardedRegister/>
                    <Route path="/admin/dashboard" view=GuardedAdminDashboard/>
                    <Route path="/admin/manage_user" view=GuardedManageUsers/>
                    <Route path="/user/dashboard" view=GuardedUserDashboard/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn GuardedLogin() -> impl IntoView {
    view! { <RouteGuard path="/login"><LoginPage/></RouteGuard> }
}

#[component]
fn GuardedRegister() -> impl IntoView {
    view! { <RouteGuard path="/register"><RegisterPage/></RouteGuard> }
}

#[component]
fn GuardedAdminDashboard() -> impl IntoView {
    view! { <RouteGuard path="/admin/dashboard"><AdminDashboardPage/></RouteGuard> }
}

#[component]
fn GuardedManageUsers() -> impl IntoView {
    view! { <RouteGuard path="/admin/manage_user"><ManageUsersPage/></RouteGuard> }
}

#[component]
fn GuardedUserDashboard() -> impl IntoView {
    view! { <RouteGuard path="/user/dashboard"><UserDashboardPage/></RouteGuard> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::applies_to;
    use std::collections::HashSet;

    #[test]
    fn route_paths_include_both_dashboards() {
        assert!(ROUTE_PATHS.contains(&"/admin/dashboard"));
        assert!(ROUTE_PATHS.contains(&"/user/dashboard"));
    }

    #[test]
    fn guarded_routes_are_exactly_the_ones_the_guard_covers() {
        for path in ROUTE_PATHS {
            assert_eq!(
                GUARDED_ROUTE_PATHS.contains(path),
                applies_to(path),
                "guard coverage mismatch for {}",
                path
            );
        }
        for path in PUBLIC_ROUTE_PATHS {
            assert!(!applies_to(path));
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
