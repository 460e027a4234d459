use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tracing::info;

use crate::config::server_config::SmtpSettings;
use crate::models::inquiry::Inquiry;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("invalid mailbox: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp transport failed: {0}")]
    Transport(String),
}

/// Where validated inquiries end up.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InquirySink: Send + Sync {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<(), DeliveryError>;
}

/// Records inquiries in the log when no mail server is configured.
pub struct LogSink;

#[async_trait]
impl InquirySink for LogSink {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<(), DeliveryError> {
        info!(
            id = %inquiry.id,
            name = %inquiry.name,
            email = %inquiry.email,
            service = inquiry.service.as_deref().unwrap_or("-"),
            language = %inquiry.language,
            "Contact inquiry received (no SMTP configured):\n{}",
            render_body(inquiry)
        );
        Ok(())
    }
}

pub struct SmtpSink {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    inbox: Mailbox,
}

impl SmtpSink {
    pub fn new(settings: &SmtpSettings, inbox: &str) -> Result<Self, DeliveryError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: settings.from.parse()?,
            inbox: inbox.parse()?,
        })
    }

    fn build_message(&self, inquiry: &Inquiry) -> Result<Message, DeliveryError> {
        let reply_to: Mailbox = inquiry.email.parse()?;
        let message = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.inbox.clone())
            .subject(subject_line(inquiry))
            .header(ContentType::TEXT_PLAIN)
            .body(render_body(inquiry))?;
        Ok(message)
    }
}

#[async_trait]
impl InquirySink for SmtpSink {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<(), DeliveryError> {
        let message = self.build_message(inquiry)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;
        info!("Inquiry {} forwarded to {}", inquiry.id, self.inbox);
        Ok(())
    }
}

fn subject_line(inquiry: &Inquiry) -> String {
    match &inquiry.company {
        Some(company) => format!("Website inquiry from {} ({})", inquiry.name, company),
        None => format!("Website inquiry from {}", inquiry.name),
    }
}

pub fn render_body(inquiry: &Inquiry) -> String {
    let mut body = format!(
        "Inquiry {}\nReceived: {}\n\nName: {}\nEmail: {}\n",
        inquiry.id,
        inquiry.received_at.format("%Y-%m-%d %H:%M UTC"),
        inquiry.name,
        inquiry.email,
    );
    for (label, value) in [
        ("Phone", &inquiry.phone),
        ("Company", &inquiry.company),
        ("Service", &inquiry.service),
    ] {
        if let Some(value) = value {
            body.push_str(&format!("{}: {}\n", label, value));
        }
    }
    body.push_str(&format!("Language: {}\n\n{}\n", inquiry.language, inquiry.message));
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::inquiry::sample_request;

    #[test]
    fn body_lists_only_provided_fields() {
        let mut request = sample_request();
        request.company = None;
        let inquiry = request.validate().unwrap();

        let body = render_body(&inquiry);
        assert!(body.contains("Name: Layla Haddad"));
        assert!(body.contains("Phone: +966 11 234 5678"));
        assert!(body.contains("Service: cctv"));
        assert!(!body.contains("Company:"));
        assert!(body.ends_with("We need a CCTV upgrade for two warehouses.\n"));
    }

    #[test]
    fn subject_mentions_company_when_present() {
        let inquiry = sample_request().validate().unwrap();
        assert_eq!(
            subject_line(&inquiry),
            "Website inquiry from Layla Haddad (Riyadh Logistics)"
        );
    }

    #[tokio::test]
    async fn log_sink_always_succeeds() {
        let inquiry = sample_request().validate().unwrap();
        assert!(LogSink.deliver(&inquiry).await.is_ok());
    }

    #[tokio::test]
    async fn smtp_sink_builds_message_with_reply_to() {
        let settings = SmtpSettings {
            host: "smtp.example.com".into(),
            username: "mailer@alphacs.sa".into(),
            password: "secret".into(),
            from: "Alpha Core Website <mailer@alphacs.sa>".into(),
        };
        let sink = SmtpSink::new(&settings, "info@alphacs.sa").unwrap();
        let inquiry = sample_request().validate().unwrap();

        let raw = String::from_utf8(sink.build_message(&inquiry).unwrap().formatted()).unwrap();
        let reply_to = raw
            .lines()
            .find(|line| line.starts_with("Reply-To:"))
            .unwrap();
        assert!(reply_to.contains("layla@example.sa"));
        assert!(raw.contains("info@alphacs.sa"));
    }

    #[tokio::test]
    async fn bad_inbox_is_rejected() {
        let settings = SmtpSettings {
            host: "smtp.example.com".into(),
            username: "mailer@alphacs.sa".into(),
            password: "secret".into(),
            from: "mailer@alphacs.sa".into(),
        };
        assert!(matches!(
            SmtpSink::new(&settings, "not an address"),
            Err(DeliveryError::Address(_))
        ));
    }
}
