use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    fn read_global(object: &str, keys: &[&str]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &object.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&any, &(*key).into())
                .ok()
                .and_then(|value| value.as_string())
                .filter(|value| !value.is_empty())
        })
    }

    /// `window.__ROLEDASH_ENV = { API_BASE_URL }`, then `window.__ROLEDASH_CONFIG`.
    pub fn snapshot() -> Option<String> {
        read_global("__ROLEDASH_ENV", &["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__ROLEDASH_CONFIG", &["api_base_url", "API_BASE_URL"]))
    }

    pub fn publish(cfg: &RuntimeConfig) {
        let (Some(url), Some(window)) = (cfg.api_base_url.as_ref(), web_sys::window()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&obj, &"api_base_url".into(), &JsValue::from_str(url));
        let _ = js_sys::Reflect::set(&window, &"__ROLEDASH_CONFIG".into(), &obj);
    }

    pub async fn fetch() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            log::warn!("config.json returned {}", resp.status());
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

/// Backend base URL, resolved once and cached for the page lifetime.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(existing) = globals::snapshot() {
            return cache_base_url(&existing);
        }
        if let Some(cfg) = globals::fetch().await {
            globals::publish(&cfg);
            if let Some(url) = cfg.api_base_url {
                return cache_base_url(&url);
            }
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("api base url: {}", url);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn falls_back_to_default_base_url_off_browser() {
        assert_eq!(await_api_base_url().await, DEFAULT_API_BASE_URL);
        assert_eq!(API_BASE_URL.get().map(String::as_str), Some(DEFAULT_API_BASE_URL));
    }

    #[test]
    fn runtime_config_reads_optional_url() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://api.example.com/v1"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://api.example.com/v1"));
        let empty: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.api_base_url.is_none());
    }
}
