//! Email sending functionality module
//!
//! Messages are built from a template or plain text, handed to a
//! [`MailTransport`] (SMTP through lettre by default) and the result is
//! reported as a [`SendOutcome`].

mod error;
mod outcome;
mod recipients;
mod service;
mod templates;
mod transport;
mod types;

pub use error::{RenderError, SendError};
pub use outcome::SendOutcome;
pub use recipients::Recipients;
pub use service::EmailService;
pub use templates::TemplateEngine;
pub use transport::{build_message, MailTransport, SmtpMailTransport};
pub use types::{ContentKind, EmailMessage, RecipientRole, SenderIdentity, SmtpConfig};
