use std::error::Error;

/// Failure raised while handing a message to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendError {
  /// No response from the server: network, TLS or timeout.
  Connection(String),
  Authentication(String),
  RejectedRecipient(String),
  /// Address or message content that cannot be turned into a mail.
  InvalidMessage(String),
  Transport(String),
}

impl SendError {
  pub fn message(&self) -> &str {
    match self {
      SendError::Connection(msg)
      | SendError::Authentication(msg)
      | SendError::RejectedRecipient(msg)
      | SendError::InvalidMessage(msg)
      | SendError::Transport(msg) => msg,
    }
  }

  pub fn kind(&self) -> &'static str {
    match self {
      SendError::Connection(_) => "connection",
      SendError::Authentication(_) => "authentication",
      SendError::RejectedRecipient(_) => "rejected_recipient",
      SendError::InvalidMessage(_) => "invalid_message",
      SendError::Transport(_) => "transport",
    }
  }

  /// Sorts an SMTP reply code into a category.
  pub fn from_smtp_code(code: Option<&str>, message: String) -> Self {
    match code {
      None => SendError::Connection(message),
      Some("530" | "534" | "535") => SendError::Authentication(message),
      Some("550" | "551" | "552" | "553") => SendError::RejectedRecipient(message),
      Some(_) => SendError::Transport(message),
    }
  }
}

impl Error for SendError {}

impl std::fmt::Display for SendError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.message())
  }
}

impl From<lettre::address::AddressError> for SendError {
  fn from(err: lettre::address::AddressError) -> Self {
    SendError::InvalidMessage(err.to_string())
  }
}

impl From<lettre::error::Error> for SendError {
  fn from(err: lettre::error::Error) -> Self {
    SendError::InvalidMessage(err.to_string())
  }
}

impl From<lettre::transport::smtp::Error> for SendError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    let code = err.status().map(|code| code.to_string());
    SendError::from_smtp_code(code.as_deref(), err.to_string())
  }
}

/// Failure while rendering a template into a message body.
#[derive(Debug)]
pub enum RenderError {
  NoTemplateEngine,
  Template(tera::Error),
}

impl Error for RenderError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      RenderError::NoTemplateEngine => None,
      RenderError::Template(err) => Some(err),
    }
  }
}

impl std::fmt::Display for RenderError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RenderError::NoTemplateEngine => write!(f, "Render Error: no template engine configured"),
      RenderError::Template(err) => {
        write!(f, "Render Error: {}", err)?;
        let mut source = err.source();
        while let Some(cause) = source {
          write!(f, ": {}", cause)?;
          source = cause.source();
        }
        Ok(())
      }
    }
  }
}

impl From<tera::Error> for RenderError {
  fn from(err: tera::Error) -> Self {
    RenderError::Template(err)
  }
}
