//! Deployment configuration for the FAME frontend.
//!
//! Rust callers read [`BACKEND_URL`] and [`GITHUB_REPO_URL`] directly. Hosts
//! with an export mechanism get the same values under the keys `BackendURL`
//! and `GitHubRepoURL` through [`export_into`]. With the `frontend` feature the
//! crate also builds into a wasm module that publishes both values to the
//! page.

use url::Url;

mod envs;
mod error;
mod exports;

pub use envs::*;
pub use error::ConfigError;
pub use exports::{export_into, exported, ExportRegistry};

#[cfg(feature = "frontend")]
pub mod bindings {
    use super::*;
    use js_sys::{Object, Reflect};
    use tracing_subscriber::{layer::SubscriberExt, Registry};
    use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};
    use wasm_bindgen::prelude::*;

    impl ExportRegistry for Object {
        fn register(&mut self, key: &'static str, value: &'static str) {
            match Reflect::set(self, &JsValue::from_str(key), &JsValue::from_str(value)) {
                Ok(true) => {}
                Ok(false) => tracing::warn!(key, "export target refused the property"),
                Err(e) => tracing::warn!(key, error = ?e, "failed to set export"),
            }
        }
    }

    /// Routes `tracing` events to the browser console. Keeps whatever
    /// subscriber is already installed.
    fn init_logging() {
        let config = WASMLayerConfigBuilder::new()
            .set_report_logs_in_timings(false)
            .set_max_level(tracing::Level::INFO)
            .build();
        let subscriber = Registry::default().with(WASMLayer::new(config));
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }

    /// Runs when the module is instantiated. Makes `BackendURL` and
    /// `GitHubRepoURL` visible on `globalThis` for scripts that never import
    /// the module.
    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        init_logging();

        if let Err(e) = validate() {
            tracing::warn!(error = %e, "frontend config looks wrong");
        }

        let mut global = js_sys::global();
        export_into(Some(&mut global));
    }

    #[wasm_bindgen(js_name = BackendURL)]
    pub fn backend_url() -> String {
        BACKEND_URL.to_owned()
    }

    #[wasm_bindgen(js_name = GitHubRepoURL)]
    pub fn github_repo_url() -> String {
        GITHUB_REPO_URL.to_owned()
    }

    /// `{ BackendURL, GitHubRepoURL }` as a fresh object.
    #[wasm_bindgen]
    pub fn config() -> Object {
        let mut obj = Object::new();
        export_into(Some(&mut obj));
        obj
    }

    #[wasm_bindgen(js_name = validateConfig)]
    pub fn validate_config() -> Result<(), JsValue> {
        validate().map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    #[wasm_bindgen(js_name = backendEndpoint)]
    pub fn backend_endpoint_js(path: &str) -> Result<String, JsValue> {
        backend_endpoint(path)
            .map(String::from)
            .map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

}

/// Parses `value` and checks that it is an absolute `http` or `https` URL
/// with a host.
pub fn check_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Empty { name });
    }
    let url = Url::parse(value).map_err(|source| ConfigError::Invalid {
        name,
        value: value.to_owned(),
        source,
    })?;

    let has_host = url.host_str().is_some_and(|host| !host.is_empty());
    if !matches!(url.scheme(), "http" | "https") || !has_host {
        return Err(ConfigError::NotAbsolute {
            name,
            value: value.to_owned(),
        });
    }

    Ok(url)
}

/// Validates both configured URLs.
pub fn validate() -> Result<(), ConfigError> {
    check_url(BACKEND_URL_KEY, BACKEND_URL)?;
    check_url(GITHUB_REPO_URL_KEY, GITHUB_REPO_URL)?;
    Ok(())
}

/// Builds a backend request URL, e.g. `backend_endpoint("api/plans")`.
///
/// `path` is resolved against the backend root with its leading slashes
/// dropped, so `"/api"` and `"api"` agree and `""` yields the root itself.
/// Queries and fragments resolve the usual way (`"?q=1"` gives `<root>/?q=1`).
/// A path that resolves to another origin is rejected.
pub fn backend_endpoint(path: &str) -> Result<Url, ConfigError> {
    let mut base = check_url(BACKEND_URL_KEY, BACKEND_URL)?;
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }

    let url = base
        .join(path.trim_start_matches('/'))
        .map_err(|source| ConfigError::Invalid {
            name: "path",
            value: path.to_owned(),
            source,
        })?;
    if url.origin() != base.origin() {
        return Err(ConfigError::ForeignEndpoint {
            path: path.to_owned(),
        });
    }

    Ok(url)
}
