//! Site error type

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid site config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("invalid portfolio content: {0}")]
    Content(#[source] serde_json::Error),

    #[error("missing element #{0}")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
