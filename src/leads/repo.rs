use tracing::warn;

use super::dto::Lead;
use crate::store::{Collection, DocumentStore, Query, SortDirection, SortKey, StoreError, StoreResult};

/// Insert a lead as one document.
pub async fn insert_lead(store: &dyn DocumentStore, lead: &Lead) -> StoreResult<()> {
    let doc = serde_json::to_value(lead).map_err(|e| StoreError::InvalidDocument(e.to_string()))?;
    store.insert(Collection::Leads, doc).await
}

/// Newest leads first.
pub async fn list_recent(store: &dyn DocumentStore, limit: usize) -> StoreResult<Vec<Lead>> {
    let query = Query::new(limit).sort(SortKey::Timestamp("created_at"), SortDirection::Desc);
    let docs = store.find(Collection::Leads, &query).await?;
    Ok(docs
        .into_iter()
        .filter_map(|doc| match serde_json::from_value::<Lead>(doc) {
            Ok(lead) => Some(lead),
            Err(e) => {
                warn!(error = %e, "skipping undecodable lead");
                None
            }
        })
        .collect())
}
