use std::{env, sync::Arc};

use crate::email::{EmailService, SmtpConfig, SmtpMailTransport, TemplateEngine};

const DEFAULT_TEMPLATES_GLOB: &str = "templates/**/*.html";

pub fn load_templates() -> TemplateEngine {
  let pattern = env::var("EMAIL_TEMPLATES_DIR").unwrap_or_else(|_| DEFAULT_TEMPLATES_GLOB.to_string());

  match TemplateEngine::from_glob(&pattern) {
    Ok(templates) => templates,
    Err(e) => {
      tracing::warn!("Could not load email templates from {}: {}", pattern, e);
      TemplateEngine::empty()
    }
  }
}

pub async fn init_email_service() -> anyhow::Result<EmailService> {
  let smtp_config = SmtpConfig::from_env()?;
  let transport = SmtpMailTransport::new(&smtp_config)?;
  let templates = load_templates();

  tracing::info!(
    "Email service ready on {}:{} with {} template(s)",
    smtp_config.host,
    smtp_config.port,
    templates.template_names().len()
  );

  Ok(EmailService::new(Arc::new(transport), smtp_config.sender()).with_templates(templates))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_load_templates_with_unmatched_glob_is_empty() {
    env::set_var("EMAIL_TEMPLATES_DIR", "/nonexistent-koko-templates/**/*.html");

    let templates = load_templates();
    assert!(templates.template_names().is_empty());

    env::remove_var("EMAIL_TEMPLATES_DIR");
  }

  #[tokio::test]
  #[serial]
  async fn test_init_email_service_fails_without_sender() {
    env::remove_var("SMTP_FROM_EMAIL");
    env::set_var("SMTP_USERNAME", "user");
    env::set_var("SMTP_PASSWORD", "secret");

    assert!(init_email_service().await.is_err());

    env::remove_var("SMTP_USERNAME");
    env::remove_var("SMTP_PASSWORD");
  }
}
