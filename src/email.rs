//! Delivery of contact messages to the site owner

use anyhow::Context;
use askama::Template;
use async_trait::async_trait;
use lettre::{
    Address, Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use portfolio_contact::ContactMessage;
use tracing::info;

use crate::config::EmailConfig;

/// Receives messages accepted by the contact endpoint
#[async_trait]
pub trait Inbox: Send + Sync {
    async fn receive(&self, message: &ContactMessage) -> anyhow::Result<()>;
}

/// Writes messages to the log when no mail server is configured
#[derive(Clone, Default)]
pub struct LogInbox;

#[async_trait]
impl Inbox for LogInbox {
    async fn receive(&self, message: &ContactMessage) -> anyhow::Result<()> {
        info!(
            name = %message.name,
            email = %message.email,
            message = %message.message,
            "Contact message received (email disabled)"
        );

        Ok(())
    }
}

#[derive(Template)]
#[template(path = "emails/contact.txt")]
struct ContactEmailTemplate<'a> {
    message: &'a ContactMessage,
}

/// Relays messages over SMTP, with reply-to set to the visitor
#[derive(Clone)]
pub struct SmtpInbox {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpInbox {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "Email inbox initialized with authentication and TLS"
            );
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());
            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config
                .from_address
                .parse()
                .context("Failed to parse from address")?,
            to: config
                .inbox_address
                .parse()
                .context("Failed to parse inbox address")?,
        })
    }

    fn build(&self, message: &ContactMessage) -> anyhow::Result<Message> {
        let sender: Address = message
            .email
            .parse()
            .context("Failed to parse sender address")?;

        let body = ContactEmailTemplate { message }
            .render()
            .context("Failed to render contact email")?;

        Message::builder()
            .from(self.from.clone())
            .reply_to(Mailbox::new(Some(message.name.clone()), sender))
            .to(self.to.clone())
            .subject(format!("Portfolio contact from {}", message.name))
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .context("Failed to build contact email")
    }
}

#[async_trait]
impl Inbox for SmtpInbox {
    async fn receive(&self, message: &ContactMessage) -> anyhow::Result<()> {
        let email = self.build(message)?;
        let mailer = self.mailer.clone();

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await?
            .context("Failed to send contact email")?;

        info!(email = %message.email, "Contact message relayed");

        Ok(())
    }
}
