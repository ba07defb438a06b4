use std::env;

use anyhow::{Context, Result};
use lettre::{address::AddressError, message::Mailbox, Address};
use serde::Deserialize;

use super::recipients::Recipients;

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
  pub from_name: Option<String>,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
      from_name: None,
    }
  }
}

impl SmtpConfig {
  pub fn from_env() -> Result<Self> {
    let defaults = SmtpConfig::default();

    Ok(SmtpConfig {
      host: env::var("SMTP_HOST").unwrap_or(defaults.host),
      port: env::var("SMTP_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(defaults.port),
      username: env::var("SMTP_USERNAME").unwrap_or_default(),
      password: env::var("SMTP_PASSWORD").unwrap_or_default(),
      from_email: env::var("SMTP_FROM_EMAIL").context("SMTP_FROM_EMAIL not set")?,
      from_name: env::var("SMTP_FROM_NAME").ok(),
    })
  }

  pub fn sender(&self) -> SenderIdentity {
    SenderIdentity::new(self.from_email.clone(), self.from_name.clone())
  }
}

/// Who a message is sent as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderIdentity {
  pub address: String,
  pub name: Option<String>,
}

impl SenderIdentity {
  pub fn new(address: impl Into<String>, name: Option<String>) -> Self {
    SenderIdentity {
      address: address.into(),
      name,
    }
  }

  fn display_name(&self) -> Option<&str> {
    self.name.as_deref().map(str::trim).filter(|name| !name.is_empty())
  }

  /// Human-readable `From` value: `Name <address>`, or the bare address
  /// when no display name is set. Not used to build the header itself.
  pub fn from_header(&self) -> String {
    match self.display_name() {
      Some(name) => format!("{} <{}>", name, self.address),
      None => self.address.clone(),
    }
  }

  /// Mailbox for the `From` header; lettre quotes the name as needed.
  pub fn mailbox(&self) -> Result<Mailbox, AddressError> {
    let address: Address = self.address.parse()?;
    Ok(Mailbox::new(self.display_name().map(str::to_string), address))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientRole {
  To,
  Bcc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
  Html,
  PlainText,
}

#[derive(Debug, Clone)]
pub struct EmailMessage {
  pub subject: String,
  pub body: String,
  pub recipients: Recipients,
  pub role: RecipientRole,
  pub content: ContentKind,
  pub from: SenderIdentity,
}

impl EmailMessage {
  pub fn new(
    recipients: Recipients,
    role: RecipientRole,
    subject: String,
    body: String,
    content: ContentKind,
    from: SenderIdentity,
  ) -> Self {
    EmailMessage {
      subject,
      body,
      recipients,
      role,
      content,
      from,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  fn clear_smtp_env() {
    for key in [
      "SMTP_HOST",
      "SMTP_PORT",
      "SMTP_USERNAME",
      "SMTP_PASSWORD",
      "SMTP_FROM_EMAIL",
      "SMTP_FROM_NAME",
    ] {
      env::remove_var(key);
    }
  }

  #[test]
  fn test_sender_without_name_is_bare_address() {
    let sender = SenderIdentity::new("noreply@example.com", None);
    assert_eq!(sender.from_header(), "noreply@example.com");

    let sender = SenderIdentity::new("noreply@example.com", Some("".to_string()));
    assert_eq!(sender.from_header(), "noreply@example.com");
  }

  #[test]
  fn test_sender_with_name() {
    let sender = SenderIdentity::new("noreply@example.com", Some("Koko".to_string()));
    assert_eq!(sender.from_header(), "Koko <noreply@example.com>");
  }

  #[test]
  fn test_sender_mailbox_keeps_special_characters_in_name() {
    let sender = SenderIdentity::new("noreply@example.com", Some("Koko, Inc.".to_string()));

    let mailbox = sender.mailbox().unwrap();
    assert_eq!(mailbox.name.as_deref(), Some("Koko, Inc."));
    assert_eq!(mailbox.email.to_string(), "noreply@example.com");
  }

  #[test]
  fn test_sender_mailbox_without_name() {
    let sender = SenderIdentity::new("noreply@example.com", Some("  ".to_string()));
    assert_eq!(sender.mailbox().unwrap().name, None);
  }

  #[test]
  fn test_sender_mailbox_invalid_address() {
    assert!(SenderIdentity::new("not-an-address", None).mailbox().is_err());
  }

  #[test]
  fn test_default_config_sender_is_configured_address() {
    let config = SmtpConfig {
      from_email: "test@example.com".to_string(),
      ..SmtpConfig::default()
    };
    assert_eq!(config.sender().from_header(), "test@example.com");
  }

  #[test]
  #[serial]
  fn test_from_env_reads_values() {
    clear_smtp_env();
    env::set_var("SMTP_HOST", "mailhog");
    env::set_var("SMTP_PORT", "1025");
    env::set_var("SMTP_USERNAME", "user");
    env::set_var("SMTP_PASSWORD", "secret");
    env::set_var("SMTP_FROM_EMAIL", "noreply@example.com");

    let config = SmtpConfig::from_env().unwrap();
    assert_eq!(config.host, "mailhog");
    assert_eq!(config.port, 1025);
    assert_eq!(config.username, "user");
    assert_eq!(config.from_email, "noreply@example.com");
    assert_eq!(config.from_name, None);

    clear_smtp_env();
  }

  #[test]
  #[serial]
  fn test_from_env_defaults_host_and_port() {
    clear_smtp_env();
    env::set_var("SMTP_PORT", "not-a-port");
    env::set_var("SMTP_USERNAME", "user");
    env::set_var("SMTP_PASSWORD", "secret");
    env::set_var("SMTP_FROM_EMAIL", "noreply@example.com");

    let config = SmtpConfig::from_env().unwrap();
    assert_eq!(config.host, "smtp.gmail.com");
    assert_eq!(config.port, 587);

    clear_smtp_env();
  }

  #[test]
  #[serial]
  fn test_from_env_allows_missing_credentials() {
    clear_smtp_env();
    env::set_var("SMTP_HOST", "localhost");
    env::set_var("SMTP_FROM_EMAIL", "noreply@example.com");

    let config = SmtpConfig::from_env().unwrap();
    assert_eq!(config.username, "");
    assert_eq!(config.password, "");

    clear_smtp_env();
  }

  #[test]
  #[serial]
  fn test_from_env_requires_sender_address() {
    clear_smtp_env();
    env::set_var("SMTP_USERNAME", "user");
    env::set_var("SMTP_PASSWORD", "secret");

    let err = SmtpConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("SMTP_FROM_EMAIL"));

    clear_smtp_env();
  }
}
