//! HTTP middleware.

pub mod expose_templates;

pub use expose_templates::{ExposeTemplates, SharedTemplates};
