//! Per-request template context.

use serde::Serialize;
use serde_json::{Map, Value};

use super::engine::ViewError;

/// Ephemeral mapping from names to rendering values.
///
/// Built per request and consumed by [`super::ViewEngine::render`]; the
/// layout wrapper later adds the rendered view under the reserved `body`
/// key.
///
/// # Examples
/// ```
/// use annuaire::render::PageContext;
///
/// let ctx = PageContext::new("Yell")
///     .with("message", "hello world")
///     .expect("string values always serialise");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContext {
    values: Map<String, Value>,
}

impl PageContext {
    /// Start a context carrying the page title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let mut values = Map::new();
        values.insert("title".to_owned(), Value::String(title.into()));
        Self { values }
    }

    /// Start a context with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a named value to the context.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Context`] when the value cannot be serialised to
    /// JSON.
    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Result<Self, ViewError> {
        let key = key.into();
        let value = serde_json::to_value(value)
            .map_err(|err| ViewError::context(&key, err.to_string()))?;
        self.values.insert(key, value);
        Ok(self)
    }

    /// Whether the context carries a value under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub(crate) fn into_map(self) -> Map<String, Value> {
        self.values
    }
}
