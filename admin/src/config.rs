//! Backend origin resolution for the admin console.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host binary reads `ADMIN_BACKEND_URL` at start and renders it into the
//! page shell as `<meta name="backend-url">`. The hydrated client reads the tag
//! back once and provides a [`BackendConfig`] through Leptos context, so every
//! API call joins its path onto the same origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Origin used when nothing was injected.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Name of the meta tag carrying the backend origin.
pub const META_NAME: &str = "backend-url";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BACKEND_URL.to_owned() }
    }
}

impl BackendConfig {
    /// Build from a raw origin. Blank input falls back to the default and
    /// trailing slashes are dropped.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { base_url: trimmed.to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/admin/exams/list`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Read the origin injected into the page shell.
    ///
    /// Falls back to the default on the server or when the tag is missing.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(&format!("meta[name=\"{META_NAME}\"]")).ok().flatten())
                .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
                .map(|meta| meta.content());
            match content {
                Some(raw) => Self::new(&raw),
                None => {
                    log::warn!("no {META_NAME} meta tag; using {DEFAULT_BACKEND_URL}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
