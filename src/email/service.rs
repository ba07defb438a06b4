use std::sync::Arc;

use serde::Serialize;

use super::{
  error::RenderError,
  outcome::SendOutcome,
  recipients::Recipients,
  templates::TemplateEngine,
  transport::MailTransport,
  types::{ContentKind, EmailMessage, RecipientRole, SenderIdentity},
};

#[derive(Clone)]
pub struct EmailService {
  transport: Arc<dyn MailTransport>,
  templates: Option<TemplateEngine>,
  sender: SenderIdentity,
}

impl std::fmt::Debug for EmailService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EmailService")
      .field("transport", &"<dyn MailTransport>")
      .field("templates", &self.templates)
      .field("sender", &self.sender)
      .finish()
  }
}

impl EmailService {
  pub fn new(transport: Arc<dyn MailTransport>, sender: SenderIdentity) -> Self {
    EmailService {
      transport,
      templates: None,
      sender,
    }
  }

  pub fn with_templates(mut self, templates: TemplateEngine) -> Self {
    self.templates = Some(templates);
    self
  }

  pub fn sender(&self) -> &SenderIdentity {
    &self.sender
  }

  /// Hands `message` to the transport and folds any failure into the outcome.
  pub async fn message_handler(&self, message: &EmailMessage) -> SendOutcome {
    if message.recipients.is_empty() {
      tracing::debug!("No recipients for \"{}\", nothing to send", message.subject);
      return SendOutcome::success();
    }

    match self.transport.send(message).await {
      Ok(()) => {
        tracing::info!(
          "Email \"{}\" sent to {} recipient(s)",
          message.subject,
          message.recipients.len()
        );
        SendOutcome::success()
      }
      Err(e) => {
        tracing::error!("Failed to send email \"{}\" ({}): {}", message.subject, e.kind(), e);
        SendOutcome::failure(e)
      }
    }
  }

  /// Renders `template_path` with `context` and sends it as HTML to every
  /// recipient in `To`. Rendering failures are returned as `Err` and never
  /// reach the outcome.
  pub async fn send_html_message<C: Serialize>(
    &self,
    recipients: impl Into<Recipients>,
    title: &str,
    template_path: &str,
    context: &C,
  ) -> Result<SendOutcome, RenderError> {
    let templates = self.templates.as_ref().ok_or(RenderError::NoTemplateEngine)?;
    let html = templates.render(template_path, context)?;

    Ok(self.send_raw_html_message(recipients, title, &html).await)
  }

  pub async fn send_raw_html_message(&self, recipients: impl Into<Recipients>, title: &str, html: &str) -> SendOutcome {
    let message = self.build(recipients.into(), RecipientRole::To, title, html, ContentKind::Html);
    self.message_handler(&message).await
  }

  /// Sends a plain-text message with every recipient in `Bcc`.
  pub async fn send_text_message(&self, recipients: impl Into<Recipients>, title: &str, text: &str) -> SendOutcome {
    let message = self.build(recipients.into(), RecipientRole::Bcc, title, text, ContentKind::PlainText);
    self.message_handler(&message).await
  }

  fn build(
    &self,
    recipients: Recipients,
    role: RecipientRole,
    title: &str,
    body: &str,
    content: ContentKind,
  ) -> EmailMessage {
    EmailMessage::new(
      recipients,
      role,
      title.to_string(),
      body.to_string(),
      content,
      self.sender.clone(),
    )
  }
}
