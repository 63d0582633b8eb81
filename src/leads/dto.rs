use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

pub const LEADS_LIMIT: usize = 100;

fn default_bar_type() -> String {
    "both".into()
}

fn default_source() -> String {
    "website".into()
}

fn default_status() -> String {
    "new".into()
}

/// Inquiry body posted by the contact form.
#[derive(Debug, Default, Deserialize)]
pub struct LeadCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub guest_count: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub bar_type: Option<String>, // cocktail, mocktail, both
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub setup_interest: Option<String>, // slug from a "get this setup" button
}

/// Persisted inquiry. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub guest_count: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default = "default_bar_type")]
    pub bar_type: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub setup_interest: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Lead {
    /// Assigns identity, origin and status. `created_at` is taken as given.
    pub fn from_create(input: LeadCreate, created_at: OffsetDateTime) -> Self {
        let bar_type = input
            .bar_type
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(default_bar_type);
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            event_type: input.event_type,
            event_date: input.event_date,
            city: input.city,
            venue: input.venue,
            guest_count: input.guest_count,
            duration: input.duration,
            bar_type,
            theme: input.theme,
            budget_range: input.budget_range,
            message: input.message,
            setup_interest: input.setup_interest,
            source: default_source(),
            status: default_status(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn from_create_fills_server_fields() {
        let at = datetime!(2025-03-01 18:30:00 UTC);
        let lead = Lead::from_create(
            LeadCreate {
                name: "Test User".into(),
                email: "test@test.com".into(),
                phone: "9999999999".into(),
                event_type: "Wedding".into(),
                ..LeadCreate::default()
            },
            at,
        );
        assert_eq!(lead.bar_type, "both");
        assert_eq!(lead.source, "website");
        assert_eq!(lead.status, "new");
        assert_eq!(lead.created_at, at);
    }

    #[test]
    fn client_cannot_set_source_or_status() {
        let input: LeadCreate = serde_json::from_value(json!({
            "name": "A", "email": "a@b.co", "phone": "1", "event_type": "Corporate",
            "bar_type": "mocktail", "source": "partner", "status": "won", "id": "fixed"
        }))
        .unwrap();
        let lead = Lead::from_create(input, OffsetDateTime::now_utc());
        assert_eq!(lead.bar_type, "mocktail");
        assert_eq!(lead.source, "website");
        assert_eq!(lead.status, "new");
        assert_ne!(lead.id.to_string(), "fixed");
    }

    #[test]
    fn created_at_is_rfc3339_on_the_wire() {
        let lead = Lead::from_create(LeadCreate::default(), datetime!(2025-03-01 18:30:00 UTC));
        let doc = serde_json::to_value(&lead).unwrap();
        assert_eq!(doc["created_at"], "2025-03-01T18:30:00Z");
        assert_eq!(doc["event_date"], serde_json::Value::Null);

        let back: Lead = serde_json::from_value(doc).unwrap();
        assert_eq!(back, lead);
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        let err = serde_json::from_value::<LeadCreate>(json!({"name": "A", "email": "a@b.co"}));
        assert!(err.is_err());
    }
}
