use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use super::{
  error::SendError,
  types::{ContentKind, EmailMessage, RecipientRole, SmtpConfig},
};

#[async_trait]
pub trait MailTransport: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> Result<(), SendError>;
}

pub struct SmtpMailTransport {
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
  pub fn new(smtp_config: &SmtpConfig) -> Result<Self, SendError> {
    let mut builder = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
    };

    builder = builder.port(smtp_config.port);

    if !smtp_config.username.is_empty() {
      let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());
      builder = builder.credentials(creds);
    }

    Ok(SmtpMailTransport {
      transporter: builder.build(),
    })
  }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
  async fn send(&self, message: &EmailMessage) -> Result<(), SendError> {
    let email = build_message(message)?;
    self.transporter.send(email).await?;
    Ok(())
  }
}

pub fn build_message(message: &EmailMessage) -> Result<Message, SendError> {
  let mut builder = Message::builder()
    .from(message.from.mailbox()?)
    .subject(&message.subject);

  for recipient in &message.recipients {
    let mailbox: Mailbox = recipient.parse()?;
    builder = match message.role {
      RecipientRole::To => builder.to(mailbox),
      RecipientRole::Bcc => builder.bcc(mailbox),
    };
  }

  let content_type = match message.content {
    ContentKind::Html => ContentType::TEXT_HTML,
    ContentKind::PlainText => ContentType::TEXT_PLAIN,
  };

  Ok(builder.header(content_type).body(message.body.clone())?)
}
