use super::error::SendError;

/// Result of handing one message to the transport.
///
/// `error_message()` is always empty when `status()` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
  result: Result<(), SendError>,
}

impl SendOutcome {
  pub fn success() -> Self {
    SendOutcome { result: Ok(()) }
  }

  pub fn failure(error: SendError) -> Self {
    SendOutcome { result: Err(error) }
  }

  pub fn status(&self) -> bool {
    self.result.is_ok()
  }

  pub fn error_message(&self) -> String {
    match &self.result {
      Ok(()) => String::new(),
      Err(err) => err.message().to_string(),
    }
  }

  pub fn error(&self) -> Option<&SendError> {
    self.result.as_ref().err()
  }

  pub fn into_pair(self) -> (bool, String) {
    let status = self.status();
    (status, self.error_message())
  }
}
