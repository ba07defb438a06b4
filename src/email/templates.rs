use serde::Serialize;
use tera::{Context, Tera};

use super::error::RenderError;

/// Renders message bodies from named tera templates.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
  tera: Tera,
}

impl TemplateEngine {
  pub fn from_glob(pattern: &str) -> Result<Self, RenderError> {
    Ok(TemplateEngine {
      tera: Tera::new(pattern)?,
    })
  }

  pub fn empty() -> Self {
    TemplateEngine { tera: Tera::default() }
  }

  pub fn from_raw(templates: &[(&str, &str)]) -> Result<Self, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(templates.iter().copied())?;
    Ok(TemplateEngine { tera })
  }

  /// `context` has to serialize to a map, e.g. a struct or a `serde_json` object.
  pub fn render<C: Serialize>(&self, template_name: &str, context: &C) -> Result<String, RenderError> {
    let context = Context::from_serialize(context)?;
    Ok(self.tera.render(template_name, &context)?)
  }

  pub fn template_names(&self) -> Vec<&str> {
    self.tera.get_template_names().collect()
  }
}
