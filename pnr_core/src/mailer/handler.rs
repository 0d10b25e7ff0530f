use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::MonitorResult;
use crate::helpers::config::MonitorConfig;

/// Outbound mail service: one authenticated SMTP session per send.
#[derive(Debug)]
pub struct Mailer {
    relay: String,
    credentials: Credentials,
    sender: Mailbox,
    recipients: Vec<Mailbox>,
}

impl Mailer {
    /// Parse sender and recipients once up front; a bad address is a typed
    /// `Address` error at construction instead of a mid-run send failure.
    pub fn new(config: &MonitorConfig) -> MonitorResult<Self> {
        let sender: Mailbox = config.sender_address.parse()?;
        let recipients = config
            .recipients
            .iter()
            .map(|addr| addr.parse())
            .collect::<Result<Vec<Mailbox>, _>>()?;

        Ok(Self {
            relay: config.smtp_relay.clone(),
            credentials: Credentials::new(
                config.sender_address.clone(),
                config.sender_app_password.clone(),
            ),
            sender,
            recipients,
        })
    }

    /// Send one plain-text message to the whole recipient list.
    ///
    /// Each call opens a fresh transport: STARTTLS upgrade on the submission
    /// port, then LOGIN with the sender credentials. Sessions are not reused
    /// across the up-to-two sends in a run.
    pub async fn send(&self, subject: &str, body: &str) -> MonitorResult<()> {
        let mut builder = Message::builder().from(self.sender.clone()).subject(subject);
        for recipient in &self.recipients {
            builder = builder.to(recipient.clone());
        }
        let message = builder
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.relay)?
            .credentials(self.credentials.clone())
            .build();

        log::debug!(
            "Sending \"{}\" to {} recipients via {}",
            subject,
            self.recipients.len(),
            self.relay
        );
        transport.send(message).await?;

        Ok(())
    }
}
