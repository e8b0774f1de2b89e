//! Per-render configuration.

use handlebars::HelperDef;

/// Which layout wraps a rendered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LayoutChoice {
    /// The engine's configured default layout.
    #[default]
    Default,
    /// A named layout resolved under the layouts directory.
    Named(String),
    /// No layout; the rendered view is the whole response body.
    None,
}

/// Explicit per-render overrides for a single [`super::ViewEngine::render`]
/// call.
///
/// Recognised fields are enumerated here: the layout choice, helper-table
/// overrides, and inline partial sources. Overrides apply to a scoped clone
/// of the registry, so the engine's default helper table is never mutated.
#[derive(Default)]
pub struct RenderOptions {
    pub(crate) layout: LayoutChoice,
    pub(crate) helpers: Vec<(String, Box<dyn HelperDef + Send + Sync>)>,
    pub(crate) partials: Vec<(String, String)>,
}

impl RenderOptions {
    /// Options with the default layout and no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the view in the named layout instead of the default.
    #[must_use]
    pub fn with_layout(mut self, name: impl Into<String>) -> Self {
        self.layout = LayoutChoice::Named(name.into());
        self
    }

    /// Render the view bare, without any layout.
    #[must_use]
    pub fn without_layout(mut self) -> Self {
        self.layout = LayoutChoice::None;
        self
    }

    /// Override a named helper for this render only.
    #[must_use]
    pub fn with_helper(
        mut self,
        name: impl Into<String>,
        helper: Box<dyn HelperDef + Send + Sync>,
    ) -> Self {
        self.helpers.push((name.into(), helper));
        self
    }

    /// Register a partial compiled from a literal template string for this
    /// render only.
    #[must_use]
    pub fn with_partial(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.partials.push((name.into(), source.into()));
        self
    }

    pub(crate) fn has_overrides(&self) -> bool {
        !self.helpers.is_empty() || !self.partials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::helpers::exclaim;
    use rstest::rstest;

    #[rstest]
    fn default_options_carry_no_overrides() {
        let options = RenderOptions::new();
        assert_eq!(options.layout, LayoutChoice::Default);
        assert!(!options.has_overrides());
    }

    #[rstest]
    fn layout_builders_select_variants() {
        assert_eq!(
            RenderOptions::new().with_layout("shared-templates").layout,
            LayoutChoice::Named("shared-templates".into())
        );
        assert_eq!(RenderOptions::new().without_layout().layout, LayoutChoice::None);
    }

    #[rstest]
    fn helper_and_partial_overrides_are_recorded() {
        let options = RenderOptions::new()
            .with_helper("yell", Box::new(exclaim))
            .with_partial("echo", "<p>ECHO: {{message}}</p>");
        assert!(options.has_overrides());
        assert_eq!(options.helpers.len(), 1);
        assert_eq!(
            options.partials,
            vec![("echo".to_owned(), "<p>ECHO: {{message}}</p>".to_owned())]
        );
    }
}
