//! Outbound mail relay
//!
//! The `Mailer` trait is the seam between the password-reset flow and the
//! SMTP transport, so services can run against a logging fallback when no
//! relay is configured.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, instrument};

use imob_common::SmtpConfig;

/// Mail relay errors
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("invalid mail address: {0}")]
    Address(String),

    #[error("mail transport error: {0}")]
    Transport(String),
}

/// Outbound mail relay port
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a password-reset code to the given address
    async fn send_password_reset_code(&self, to: &str, code: &str) -> Result<(), MailerError>;
}

/// SMTP implementation over lettre (STARTTLS + credentials)
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Create a new SMTP mailer from configuration
    ///
    /// # Errors
    /// Returns an error when the relay host or sender address is invalid
    pub fn new(config: &SmtpConfig) -> Result<Self, MailerError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| MailerError::Transport(e.to_string()))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let from = config
            .from
            .parse()
            .map_err(|_| MailerError::Address(config.from.clone()))?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[instrument(skip(self, code))]
    async fn send_password_reset_code(&self, to: &str, code: &str) -> Result<(), MailerError> {
        let recipient: Mailbox = to.parse().map_err(|_| MailerError::Address(to.to_string()))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject("Redefinição de Senha")
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Olá,\n\nRecebemos uma solicitação para redefinir sua senha.\n\
                 Seu código de redefinição é: {code}\n\
                 Ele expira em 1 hora.\n\n\
                 Se você não solicitou esta redefinição, ignore este e-mail.\n"
            ))
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        info!(%to, "Password reset code delivered");
        Ok(())
    }
}

/// Logging fallback used when no SMTP relay is configured
///
/// The reset code is still generated and stored; it is only surfaced in the
/// server log, matching the development workflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_password_reset_code(&self, to: &str, code: &str) -> Result<(), MailerError> {
        info!(%to, %code, "SMTP relay not configured; reset code logged only");
        Ok(())
    }
}
