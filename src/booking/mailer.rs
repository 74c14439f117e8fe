//! Mail relay
//!
//! `Mailer` is the seam between booking intake and delivery. `SmtpMailer`
//! relays through an authenticated SMTP server with a fixed timeout.

use std::time::Duration;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use uuid::Uuid;

use super::email::OutgoingEmail;

/// Environment variable holding the SMTP user
pub const EMAIL_USER_VAR: &str = "EMAIL_USER";
/// Environment variable holding the SMTP password
pub const EMAIL_PASSWORD_VAR: &str = "EMAIL_PASSWORD";

/// SMTP connect and command timeout
pub const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors sending mail
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Delivers composed emails
pub trait Mailer: Send + Sync {
    /// Send one email, returning its message id
    fn send<'a>(&'a self, email: &'a OutgoingEmail) -> BoxFuture<'a, Result<String, MailError>>;
}

/// SMTP login
#[derive(Clone, PartialEq, Eq)]
pub struct MailCredentials {
    pub user: String,
    pub password: String,
}

impl MailCredentials {
    /// Read `EMAIL_USER` / `EMAIL_PASSWORD`; `None` unless both are set
    pub fn from_env() -> Option<Self> {
        Self::from_values(
            std::env::var(EMAIL_USER_VAR).ok(),
            std::env::var(EMAIL_PASSWORD_VAR).ok(),
        )
    }

    pub fn from_values(user: Option<String>, password: Option<String>) -> Option<Self> {
        match (user, password) {
            (Some(user), Some(password)) if !user.is_empty() && !password.is_empty() => {
                Some(Self { user, password })
            }
            _ => None,
        }
    }
}

impl std::fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailCredentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authenticated SMTP relay
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    /// Domain used for generated message ids
    id_domain: String,
}

impl SmtpMailer {
    /// Port 465 uses implicit TLS; any other port upgrades with STARTTLS
    pub fn new(host: &str, port: u16, credentials: MailCredentials) -> Result<Self, MailError> {
        let builder = if port == 465 {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
        };
        let transport = builder
            .port(port)
            .credentials(Credentials::new(credentials.user, credentials.password))
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        Ok(Self {
            transport,
            id_domain: "virtualtryonplatform.com".to_string(),
        })
    }

    fn build_message(&self, email: &OutgoingEmail) -> Result<(String, Message), MailError> {
        let message_id = format!("<{}@{}>", Uuid::new_v4(), self.id_domain);
        let message = Message::builder()
            .from(email.from.parse::<Mailbox>()?)
            .to(email.to.parse::<Mailbox>()?)
            .subject(email.subject.as_str())
            .message_id(Some(message_id.clone()))
            .header(ContentType::TEXT_HTML)
            .body(email.html.clone())?;
        Ok((message_id, message))
    }
}

impl Mailer for SmtpMailer {
    fn send<'a>(&'a self, email: &'a OutgoingEmail) -> BoxFuture<'a, Result<String, MailError>> {
        async move {
            let (message_id, message) = self.build_message(email)?;
            let response = self.transport.send(message).await?;
            tracing::debug!(code = %response.code(), "SMTP relay accepted message");
            Ok(message_id)
        }
        .boxed()
    }
}
