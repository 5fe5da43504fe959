use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("no element with id '{0}'")]
    MissingElement(String),
    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("unknown initial pattern '{0}'")]
    UnknownPattern(String),
    #[error(transparent)]
    Engine(#[from] sim_core::EngineError),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
