pub mod email;
pub mod utils;

pub use email::{EmailService, RenderError, SendError, SendOutcome};
