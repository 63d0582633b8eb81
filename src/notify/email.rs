use anyhow::Context;
use askama::Template;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Notifier, NotifyOutcome};
use crate::config::EmailConfig;
use crate::leads::dto::Lead;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("email request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("email provider returned {status}: {message}")]
    Provider { status: u16, message: String },
    #[error("email body rendering failed: {0}")]
    Render(#[from] askama::Error),
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: String,
    html: String,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
}

/// Sends new-lead emails through the Resend HTTP API.
pub struct ResendNotifier {
    client: reqwest::Client,
    config: EmailConfig,
}

impl ResendNotifier {
    pub fn new(config: EmailConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("build email http client")?;
        Ok(Self { client, config })
    }

    async fn send(&self, api_key: &str, lead: &Lead) -> Result<String, NotifyError> {
        let body = SendEmailRequest {
            from: &self.config.from,
            to: [&self.config.to],
            subject: subject_for(lead),
            html: render_lead_html(lead)?,
        };
        let resp = self
            .client
            .post(format!("{}/emails", self.config.api_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderErrorBody>(&text)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or(text);
            return Err(NotifyError::Provider {
                status: status.as_u16(),
                message,
            });
        }
        Ok(resp.json::<SendEmailResponse>().await?.id)
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn notify_new_lead(&self, lead: &Lead) -> NotifyOutcome {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if self.config.enabled => key,
            _ => {
                return NotifyOutcome::Skipped {
                    reason: "Email disabled".into(),
                }
            }
        };
        match self.send(api_key, lead).await {
            Ok(id) => NotifyOutcome::Sent { id },
            Err(e) => NotifyOutcome::Failed { message: e.to_string() },
        }
    }
}

pub fn subject_for(lead: &Lead) -> String {
    format!("HQ.D | New {} Inquiry from {}", lead.event_type, lead.name)
}

const NOT_SPECIFIED: &str = "Not specified";

/// Staff email for one lead. Every interpolated value is HTML-escaped.
#[derive(Template)]
#[template(path = "lead_email.html")]
struct LeadEmailTemplate<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    event_type: &'a str,
    event_date: &'a str,
    city_venue: String,
    guests: &'a str,
    duration: &'a str,
    bar_type: &'a str,
    theme: &'a str,
    budget: &'a str,
    setup_interest: Option<&'a str>,
    message: Option<&'a str>,
}

impl<'a> LeadEmailTemplate<'a> {
    fn new(lead: &'a Lead) -> Self {
        let or_unspecified = |v: &'a Option<String>| v.as_deref().unwrap_or(NOT_SPECIFIED);
        let city_venue = [lead.city.as_deref(), lead.venue.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            name: &lead.name,
            email: &lead.email,
            phone: &lead.phone,
            event_type: &lead.event_type,
            event_date: or_unspecified(&lead.event_date),
            city_venue,
            guests: or_unspecified(&lead.guest_count),
            duration: or_unspecified(&lead.duration),
            bar_type: &lead.bar_type,
            theme: or_unspecified(&lead.theme),
            budget: or_unspecified(&lead.budget_range),
            setup_interest: lead.setup_interest.as_deref(),
            message: lead.message.as_deref(),
        }
    }
}

pub fn render_lead_html(lead: &Lead) -> Result<String, askama::Error> {
    LeadEmailTemplate::new(lead).render()
}
