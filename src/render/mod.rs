//! Server-side view rendering on top of the Handlebars registry.
//!
//! [`ViewEngine`] owns a single compiled-template registry shared by every
//! request. Renders resolve a view name and a [`PageContext`] into HTML,
//! wrapping the result in a layout. Per-render behaviour (layout choice,
//! helper overrides, inline partials) travels in an explicit
//! [`RenderOptions`] value rather than an ad hoc option bag.

pub mod context;
pub mod engine;
pub mod helpers;
pub mod options;

pub use self::context::PageContext;
pub use self::engine::{
    SharedTemplate, TemplateSourceOptions, ViewConfig, ViewEngine, ViewError,
};
pub use self::options::{LayoutChoice, RenderOptions};
