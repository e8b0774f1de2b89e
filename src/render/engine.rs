//! The view engine: registry construction, layout wrapping, and shared
//! template collection.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use handlebars::template::Template;
use handlebars::{DirectorySourceOptions, Handlebars};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::context::PageContext;
use super::helpers;
use super::options::{LayoutChoice, RenderOptions};

/// Template file extension, including the leading dot.
const TEMPLATE_EXTENSION: &str = ".hbs";

/// Errors raised while compiling or rendering templates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A template failed to compile or register.
    #[error("template compilation failed: {message}")]
    Template { message: String },
    /// Rendering a registered template failed.
    #[error("render failed: {message}")]
    Render { message: String },
    /// A template directory could not be read.
    #[error("template directory read failed: {message}")]
    Directory { message: String },
    /// A context value could not be serialised.
    #[error("context value `{key}` is not serialisable: {message}")]
    Context { key: String, message: String },
}

impl ViewError {
    /// Helper for compilation failures.
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Helper for render failures.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Helper for directory read failures.
    pub fn directory(message: impl Into<String>) -> Self {
        Self::Directory {
            message: message.into(),
        }
    }

    /// Helper for context serialisation failures.
    pub fn context(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Context {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl From<handlebars::TemplateError> for ViewError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::template(err.to_string())
    }
}

impl From<handlebars::RenderError> for ViewError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::render(err.to_string())
    }
}

/// Configuration for [`ViewEngine`].
///
/// # Example
///
/// ```ignore
/// let config = ViewConfig::new("views", "shared/templates")
///     .with_default_layout("main")
///     .with_cache(false);
/// ```
#[derive(Debug, Clone)]
pub struct ViewConfig {
    views_dir: PathBuf,
    shared_dir: PathBuf,
    default_layout: String,
    cache: bool,
}

impl ViewConfig {
    /// Create a configuration over the given view and shared-template
    /// directories.
    ///
    /// Defaults: layout `main`, template caching enabled.
    pub fn new(views_dir: impl Into<PathBuf>, shared_dir: impl Into<PathBuf>) -> Self {
        Self {
            views_dir: views_dir.into(),
            shared_dir: shared_dir.into(),
            default_layout: "main".to_owned(),
            cache: true,
        }
    }

    /// Set the layout used when a render does not override it.
    #[must_use]
    pub fn with_default_layout(mut self, layout: impl Into<String>) -> Self {
        self.default_layout = layout.into();
        self
    }

    /// Toggle template caching. When disabled, templates are re-read from
    /// disk on every render and shared-template fetches bypass their cache.
    #[must_use]
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    /// The configured shared-template directory.
    #[must_use]
    pub fn shared_dir(&self) -> &Path {
        &self.shared_dir
    }
}

/// Options for collecting templates from a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSourceOptions {
    /// Run each source through the Handlebars compiler so syntax errors
    /// surface at fetch time.
    pub precompiled: bool,
    /// Reuse a previously collected set instead of re-reading the directory.
    pub cache: bool,
}

/// A named template exposed for reuse by client-side code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedTemplate {
    /// Template name with the extension stripped.
    pub name: String,
    /// Raw template source.
    pub template: String,
}

/// Compiles and caches view templates, resolving a view name plus a context
/// into HTML.
///
/// One engine is constructed at process start and shared across requests;
/// the registry and the shared-template cache are both safe for concurrent
/// reads.
pub struct ViewEngine {
    registry: Handlebars<'static>,
    config: ViewConfig,
    shared_cache: RwLock<HashMap<PathBuf, Arc<Vec<SharedTemplate>>>>,
}

impl ViewEngine {
    /// Build the engine: register default helpers and every template found
    /// under the view and shared directories.
    ///
    /// Layouts are expected under `layouts/` inside the view directory and
    /// resolve as `layouts/<name>`. Shared templates double as server-side
    /// partials.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Template`] when a directory cannot be read or a
    /// template fails to compile. A broken view directory is a startup
    /// failure, not something to limp past.
    pub fn new(config: ViewConfig) -> Result<Self, ViewError> {
        let mut registry = Handlebars::new();
        registry.set_dev_mode(!config.cache);
        helpers::register_defaults(&mut registry);
        registry.register_templates_directory(&config.views_dir, directory_options())?;
        registry.register_templates_directory(&config.shared_dir, directory_options())?;
        Ok(Self {
            registry,
            config,
            shared_cache: RwLock::new(HashMap::new()),
        })
    }

    /// Render `view` with `context`, wrapped in the selected layout.
    ///
    /// The rendered view is exposed to the layout as `{{{body}}}` alongside
    /// the rest of the context. Helper and partial overrides in `options`
    /// apply to a scoped clone of the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Render`] when the view or layout is missing or
    /// fails to render, [`ViewError::Template`] when an inline partial fails
    /// to compile.
    pub fn render(
        &self,
        view: &str,
        context: PageContext,
        options: RenderOptions,
    ) -> Result<String, ViewError> {
        let has_overrides = options.has_overrides();
        let RenderOptions {
            layout,
            helpers: helper_overrides,
            partials,
        } = options;

        let scoped;
        let registry = if !has_overrides {
            &self.registry
        } else {
            let mut overridden = self.registry.clone();
            for (name, helper) in helper_overrides {
                overridden.register_helper(&name, helper);
            }
            for (name, source) in partials {
                overridden.register_template_string(&name, &source)?;
            }
            scoped = overridden;
            &scoped
        };

        let mut data = context.into_map();
        let body = registry.render(view, &Value::Object(data.clone()))?;

        let layout_name = match layout {
            LayoutChoice::Default => Some(self.config.default_layout.clone()),
            LayoutChoice::Named(name) => Some(name),
            LayoutChoice::None => None,
        };
        match layout_name {
            Some(name) => {
                data.insert("body".to_owned(), Value::String(body));
                Ok(registry.render(&format!("layouts/{name}"), &Value::Object(data))?)
            }
            None => Ok(body),
        }
    }

    /// Collect the named templates found directly under `directory`.
    ///
    /// Names are extension-stripped and sorted. With `precompiled` set, each
    /// source is parsed by the Handlebars compiler so a broken template
    /// fails the fetch instead of the client. With `cache` set, a previously
    /// collected set for the same directory is reused.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Directory`] when the directory cannot be read
    /// and [`ViewError::Template`] when precompilation fails.
    pub fn templates_in(
        &self,
        directory: &Path,
        options: TemplateSourceOptions,
    ) -> Result<Vec<SharedTemplate>, ViewError> {
        if options.cache {
            let cache = self
                .shared_cache
                .read()
                .map_err(|_| ViewError::directory("shared template cache poisoned"))?;
            if let Some(cached) = cache.get(directory) {
                return Ok(cached.as_ref().clone());
            }
        }

        let templates = collect_templates(directory, options.precompiled)?;

        if options.cache {
            let mut cache = self
                .shared_cache
                .write()
                .map_err(|_| ViewError::directory("shared template cache poisoned"))?;
            cache.insert(directory.to_owned(), Arc::new(templates.clone()));
        }
        Ok(templates)
    }

    /// Collect the configured shared-template set, precompiled, honouring
    /// the engine's cache flag.
    ///
    /// # Errors
    ///
    /// Propagates the failures of [`ViewEngine::templates_in`].
    pub fn shared_templates(&self) -> Result<Vec<SharedTemplate>, ViewError> {
        let shared_dir = self.config.shared_dir.clone();
        self.templates_in(
            &shared_dir,
            TemplateSourceOptions {
                precompiled: true,
                cache: self.config.cache,
            },
        )
    }
}

fn directory_options() -> DirectorySourceOptions {
    let mut options = DirectorySourceOptions::default();
    options.tpl_extension = TEMPLATE_EXTENSION.to_owned();
    options
}

fn collect_templates(directory: &Path, precompiled: bool) -> Result<Vec<SharedTemplate>, ViewError> {
    let entries = fs::read_dir(directory)
        .map_err(|err| ViewError::directory(format!("{}: {err}", directory.display())))?;

    let mut templates = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|err| ViewError::directory(format!("{}: {err}", directory.display())))?;
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(name) = file_name.strip_suffix(TEMPLATE_EXTENSION) else {
            continue;
        };
        if !path.is_file() {
            continue;
        }
        let source = fs::read_to_string(&path)
            .map_err(|err| ViewError::directory(format!("{}: {err}", path.display())))?;
        if precompiled {
            Template::compile(&source)
                .map_err(|err| ViewError::template(format!("{file_name}: {err}")))?;
        }
        templates.push(SharedTemplate {
            name: name.to_owned(),
            template: source,
        });
    }
    templates.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(templates)
}
