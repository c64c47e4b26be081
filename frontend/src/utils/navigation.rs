//! Full-page navigation through `window.location`.

/// Sends the browser to `path`, replacing the current page.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::error!("failed to navigate to {}", path);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("redirect to {} requested outside the browser", path);
    }
}

/// Value of `name` in the current query string.
pub fn query_param(name: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
        params.get(name).filter(|value| !value.is_empty())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = name;
        None
    }
}

/// Where to go after login or registration: a local `redirectPath` or home.
pub fn post_auth_target(redirect_path: Option<String>) -> String {
    redirect_path
        .filter(|path| is_local_path(path))
        .unwrap_or_else(|| "/".to_string())
}

/// Browsers read `\` as `/`, so `/\host` is protocol-relative too.
fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_auth_target_accepts_only_local_paths() {
        assert_eq!(post_auth_target(None), "/");
        assert_eq!(post_auth_target(Some("/user/dashboard".into())), "/user/dashboard");
        assert_eq!(post_auth_target(Some("https://evil.example".into())), "/");
        assert_eq!(post_auth_target(Some("//evil.example".into())), "/");
    }

    #[test]
    fn post_auth_target_rejects_backslash_hosts() {
        assert_eq!(post_auth_target(Some("/\\evil.example".into())), "/");
        assert_eq!(post_auth_target(Some("/user\\..\\evil".into())), "/");
        assert_eq!(post_auth_target(Some("/\t/evil.example".into())), "/");
    }
}
