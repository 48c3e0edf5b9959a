//! Template engine abstraction.
//!
//! Declaration templates are small — usually one selector block with a
//! `{{ value }}` substitution — but they are compiled once at build time and
//! rendered many times, so the backend sits behind the [`TemplateEngine`]
//! trait. The default implementation is [`MiniJinjaEngine`].

use minijinja::{AutoEscape, Environment, Value};

use crate::error::EmitError;

/// A template engine that can compile named templates and render them
/// with data.
///
/// Implementations must be deterministic: the same template and data always
/// produce byte-identical output.
pub trait TemplateEngine: Send + Sync {
    /// Compiles and caches a named template.
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), EmitError>;

    /// Renders a previously added template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, EmitError>;

    /// Checks whether a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// Auto-escaping is disabled: fragment templates produce CSS and script
/// text, not HTML, and substituted values have already been through their
/// setting's sanitizer.
///
/// # Example
///
/// ```rust
/// use veneer_emit::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let mut engine = MiniJinjaEngine::new();
/// engine
///     .add_template("cart", ".cart-contents:before { color: {{ value }}; }")
///     .unwrap();
/// let css = engine.render_named("cart", &json!({"value": "#ff0000"})).unwrap();
/// assert_eq!(css, ".cart-contents:before { color: #ff0000; }");
/// ```
#[derive(Debug)]
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), EmitError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, EmitError> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(tmpl.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}
