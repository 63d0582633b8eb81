use lazy_static::lazy_static;
use regex::Regex;
use time::OffsetDateTime;
use tracing::{info, warn};

use super::dto::{Lead, LeadCreate, LEADS_LIMIT};
use super::repo;
use crate::error::ApiError;
use crate::notify::NotificationDispatcher;
use crate::store::DocumentStore;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        // Domain: two or more dot-separated labels, no empty or hyphen-edged label.
        static ref EMAIL_RE: Regex = Regex::new(
            r"^[^@\s]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$"
        )
        .unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Trims the required fields and checks them.
pub fn validate(mut input: LeadCreate) -> Result<LeadCreate, ApiError> {
    for (field, value) in [
        ("name", &mut input.name),
        ("email", &mut input.email),
        ("phone", &mut input.phone),
        ("event_type", &mut input.event_type),
    ] {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ApiError::Validation(format!("{field} is required")));
        }
        if trimmed.len() != value.len() {
            *value = trimmed.to_string();
        }
    }

    if !is_valid_email(&input.email) {
        return Err(ApiError::Validation("Invalid email".into()));
    }
    Ok(input)
}

/// Validates, stores and acknowledges a lead. The staff notification is
/// queued only after the write succeeded and is never awaited here.
pub async fn submit_lead(
    store: &dyn DocumentStore,
    notifications: &NotificationDispatcher,
    input: LeadCreate,
) -> Result<Lead, ApiError> {
    let input = validate(input).inspect_err(|e| warn!(error = %e, "lead rejected"))?;
    let lead = Lead::from_create(input, OffsetDateTime::now_utc());

    repo::insert_lead(store, &lead).await?;
    info!(lead_id = %lead.id, event_type = %lead.event_type, "lead stored");

    notifications.dispatch(lead.clone());
    Ok(lead)
}

pub async fn list_leads(store: &dyn DocumentStore) -> Result<Vec<Lead>, ApiError> {
    Ok(repo::list_recent(store, LEADS_LIMIT).await?)
}
