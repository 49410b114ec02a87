//! Template engine for code generation.

use crate::error::{CodegenError, Result};
use handlebars::{handlebars_helper, Handlebars};
use serde::Serialize;
use tokenforge_core::naming::{camel_case, kebab_case, pascal_case, snake_case, upper_snake_case};

handlebars_helper!(kebab: |s: str| kebab_case(s));
handlebars_helper!(snake: |s: str| snake_case(s));
handlebars_helper!(upper_snake: |s: str| upper_snake_case(s));
handlebars_helper!(camel: |s: str| camel_case(s));
handlebars_helper!(pascal: |s: str| pascal_case(s));

/// Template engine using Handlebars.
///
/// Output is source code, so HTML escaping is disabled and missing fields
/// are errors instead of empty strings.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        Self::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Casing helpers, named after the functions in `tokenforge_core::naming`.
    fn register_helpers(handlebars: &mut Handlebars) {
        handlebars.register_helper("kebab_case", Box::new(kebab));
        handlebars.register_helper("snake_case", Box::new(snake));
        handlebars.register_helper("upper_snake_case", Box::new(upper_snake));
        handlebars.register_helper("camel_case", Box::new(camel));
        handlebars.register_helper("pascal_case", Box::new(pascal));
    }
}

impl Default for TemplateEngine<'_> {
    fn default() -> Self {
        Self::new()
    }
}
