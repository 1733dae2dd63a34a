//! Deletion confirmation email, sent through the Resend API.
//!
//! Best-effort: the account is already gone by the time this runs, so a mail
//! failure is logged by the caller and never fails the deletion.

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

const RESEND_API_URL: &str = "https://api.resend.com/emails";
const FROM: &str = "Gifta <noreply@gifta.com>";
const SUBJECT: &str = "Account eliminato con successo";

/// Italian copy, matching the product's forced-Italian UI.
const BODY_HTML: &str = r#"<!DOCTYPE html>
<html>
  <body style="font-family: system-ui, sans-serif; padding: 40px 20px;">
    <h2>Account eliminato con successo</h2>
    <p>
      Abbiamo eliminato con successo il tuo account. Ci dispiace vederti
      andare via. Speriamo di rivederti presto!
    </p>
  </body>
</html>"#;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("mail API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
}

#[derive(Clone)]
pub struct Mailer {
    client: Client,
    api_key: String,
}

impl Mailer {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    pub async fn send_deletion_confirmation(&self, to: &str) -> Result<(), MailError> {
        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(&self.api_key)
            .json(&SendEmailRequest {
                from: FROM,
                to,
                subject: SUBJECT,
                html: BODY_HTML,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MailError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}
