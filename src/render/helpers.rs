//! Default template helpers.
//!
//! `yell` is registered globally at engine construction; `exclaim` exists so
//! routes can override `yell` for a single render without touching the
//! global helper table.

use handlebars::{Handlebars, handlebars_helper};

handlebars_helper!(yell: |message: String| message.to_uppercase());

handlebars_helper!(exclaim: |message: String| format!("{message}!!!"));

/// Register the default helper table on a fresh registry.
pub fn register_defaults(registry: &mut Handlebars<'_>) {
    registry.register_helper("yell", Box::new(yell));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn render_inline(registry: &Handlebars<'_>, template: &str) -> String {
        registry
            .render_template(template, &serde_json::json!({ "message": "hello world" }))
            .expect("inline template renders")
    }

    #[rstest]
    fn yell_uppercases_its_argument() {
        let mut registry = Handlebars::new();
        register_defaults(&mut registry);
        assert_eq!(render_inline(&registry, "{{yell message}}"), "HELLO WORLD");
    }

    #[rstest]
    fn exclaim_appends_emphasis() {
        let mut registry = Handlebars::new();
        registry.register_helper("yell", Box::new(exclaim));
        assert_eq!(render_inline(&registry, "{{yell message}}"), "hello world!!!");
    }
}
