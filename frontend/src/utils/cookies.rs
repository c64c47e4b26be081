use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

pub const ACCESS_COOKIE_NAME: &str = "accessToken";
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";
pub const COOKIE_PATH: &str = "/";

const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b',')
    .add(b';')
    .add(b'\\');

/// Where the session tokens live between page loads.
pub trait SessionStore {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str);
    fn remove(&self, name: &str);

    fn access_token(&self) -> Option<String> {
        self.get(ACCESS_COOKIE_NAME).filter(|token| !token.is_empty())
    }
}

pub fn build_session_cookie(name: &str, value: &str, max_age: Option<Duration>) -> String {
    let mut cookie = format!(
        "{}={}; Path={}; SameSite=Lax",
        name,
        utf8_percent_encode(value, COOKIE_VALUE),
        COOKIE_PATH
    );
    if let Some(max_age) = max_age {
        cookie.push_str(&format!("; Max-Age={}", max_age.as_secs()));
    }
    cookie
}

pub fn build_clear_cookie(name: &str) -> String {
    format!("{}=; Path={}; Max-Age=0; SameSite=Lax", name, COOKIE_PATH)
}

/// Finds `name` in a `Cookie` header (or `document.cookie`) and decodes its value.
pub fn extract_cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key.trim() != name {
            return None;
        }
        Some(
            percent_decode_str(value.trim())
                .decode_utf8_lossy()
                .into_owned(),
        )
    })
}

/// In-memory store used off the browser and in tests.
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store.set(ACCESS_COOKIE_NAME, &token.into());
        store
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, name: &str) -> Option<String> {
        self.values.borrow().get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn remove(&self, name: &str) {
        self.values.borrow_mut().remove(name);
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    /// `document.cookie` backed store.
    #[derive(Clone, Copy, Default)]
    pub struct CookieJar;

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }

    impl SessionStore for CookieJar {
        fn get(&self, name: &str) -> Option<String> {
            let raw = document()?.cookie().ok()?;
            extract_cookie_value(&raw, name)
        }

        fn set(&self, name: &str, value: &str) {
            if let Some(doc) = document() {
                if doc
                    .set_cookie(&build_session_cookie(name, value, None))
                    .is_err()
                {
                    log::warn!("failed to write cookie {}", name);
                }
            }
        }

        fn remove(&self, name: &str) {
            if let Some(doc) = document() {
                let _ = doc.set_cookie(&build_clear_cookie(name));
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::CookieJar;

/// Store for the current platform: cookies in the browser, memory elsewhere.
pub fn default_store() -> Rc<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(CookieJar)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryStore::new())
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn cookie_jar_round_trips_through_document_cookie() {
        let jar = CookieJar;
        jar.set(ACCESS_COOKIE_NAME, "a.b.c");
        assert_eq!(jar.access_token().as_deref(), Some("a.b.c"));

        jar.remove(ACCESS_COOKIE_NAME);
        assert!(jar.access_token().is_none());
    }

    #[wasm_bindgen_test]
    fn removing_access_token_keeps_refresh_token() {
        let jar = CookieJar;
        jar.set(ACCESS_COOKIE_NAME, "a.b.c");
        jar.set(REFRESH_COOKIE_NAME, "r1");

        jar.remove(ACCESS_COOKIE_NAME);
        assert_eq!(jar.get(REFRESH_COOKIE_NAME).as_deref(), Some("r1"));
        jar.remove(REFRESH_COOKIE_NAME);
    }
}
