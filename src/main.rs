use anyhow::{bail, Context};
use dotenvy::dotenv;

use koko_messenger::email::{Recipients, SendOutcome};
use koko_messenger::utils::init_email_service;

const USAGE: &str = "usage:
  koko-messenger text <to[,to...]> <subject> <body>
  koko-messenger html <to[,to...]> <subject> <template> [context-json]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let args: Vec<String> = std::env::args().skip(1).collect();
  let outcome = run(&args).await?;

  let (status, error_message) = outcome.into_pair();
  if !status {
    bail!("Email was not sent: {}", error_message);
  }

  println!("Email sent successfully");
  Ok(())
}

#[derive(Debug, PartialEq)]
enum Command {
  Text {
    to: Recipients,
    subject: String,
    body: String,
  },
  Html {
    to: Recipients,
    subject: String,
    template: String,
    context: serde_json::Value,
  },
}

fn parse_command(args: &[String]) -> anyhow::Result<Command> {
  match args {
    [mode, to, subject, body] if mode == "text" => Ok(Command::Text {
      to: parse_recipients(to),
      subject: subject.clone(),
      body: body.clone(),
    }),
    [mode, to, subject, template, rest @ ..] if mode == "html" && rest.len() <= 1 => {
      let context = match rest.first() {
        Some(raw) => serde_json::from_str(raw).context("context must be a JSON object")?,
        None => serde_json::json!({}),
      };

      Ok(Command::Html {
        to: parse_recipients(to),
        subject: subject.clone(),
        template: template.clone(),
        context,
      })
    }
    _ => bail!(USAGE),
  }
}

async fn run(args: &[String]) -> anyhow::Result<SendOutcome> {
  let command = parse_command(args)?;
  let email_service = init_email_service().await?;

  match command {
    Command::Text { to, subject, body } => Ok(email_service.send_text_message(to, &subject, &body).await),
    Command::Html {
      to,
      subject,
      template,
      context,
    } => Ok(
      email_service
        .send_html_message(to, &subject, &template, &context)
        .await?,
    ),
  }
}

fn parse_recipients(raw: &str) -> Recipients {
  raw
    .split(',')
    .map(str::trim)
    .filter(|address| !address.is_empty())
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn args(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|a| a.to_string()).collect()
  }

  #[test]
  fn test_parse_text_command() {
    let command = parse_command(&args(&["text", "a@x.com, b@x.com", "Hi", "body"])).unwrap();
    assert_eq!(
      command,
      Command::Text {
        to: Recipients::from(vec!["a@x.com", "b@x.com"]),
        subject: "Hi".to_string(),
        body: "body".to_string(),
      }
    );
  }

  #[test]
  fn test_parse_html_command_with_context() {
    let command = parse_command(&args(&["html", "a@x.com", "Hi", "emails/t.html", r#"{"text":"hello"}"#])).unwrap();
    match command {
      Command::Html { template, context, .. } => {
        assert_eq!(template, "emails/t.html");
        assert_eq!(context, serde_json::json!({ "text": "hello" }));
      }
      other => panic!("unexpected command {:?}", other),
    }
  }

  #[test]
  fn test_missing_body_is_usage_error() {
    let err = parse_command(&args(&["text", "a@x.com", "Hi"])).unwrap_err();
    assert_eq!(err.to_string(), USAGE);
  }

  #[test]
  fn test_unknown_mode_is_usage_error() {
    let err = parse_command(&args(&["fax", "a@x.com", "Hi", "body"])).unwrap_err();
    assert_eq!(err.to_string(), USAGE);
  }

  #[test]
  fn test_invalid_context_json() {
    let err = parse_command(&args(&["html", "a@x.com", "Hi", "emails/t.html", "{"])).unwrap_err();
    assert!(err.to_string().contains("JSON"));
  }

  #[tokio::test]
  async fn test_run_rejects_bad_usage_before_loading_config() {
    let err = run(&args(&["text", "a@x.com", "Hi"])).await.unwrap_err();
    assert_eq!(err.to_string(), USAGE);
  }
}
