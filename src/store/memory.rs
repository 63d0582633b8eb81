use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use super::{Collection, DocumentStore, Predicate, Query, SortDirection, SortKey, StoreError, StoreResult};

/// In-process store for local runs and tests. Nothing survives a restart;
/// insertion order is the native order.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-loaded with documents.
    pub async fn seeded(docs: impl IntoIterator<Item = (Collection, Value)>) -> Self {
        let store = Self::new();
        {
            let mut guard = store.collections.write().await;
            for (collection, doc) in docs {
                guard.entry(collection).or_default().push(doc);
            }
        }
        store
    }
}

fn matches(doc: &Value, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Eq { field, value } => doc.get(*field) == Some(value),
        Predicate::Contains { field, value } => match doc.get(*field) {
            Some(Value::Array(items)) => items.iter().any(|v| v.as_str() == Some(value.as_str())),
            Some(Value::String(s)) => s == value,
            _ => false,
        },
    }
}

fn compare(a: &Value, b: &Value, key: SortKey) -> Ordering {
    match key {
        SortKey::Numeric(field) => {
            let num = |v: &Value| v.get(field).and_then(Value::as_f64);
            num(a).partial_cmp(&num(b)).unwrap_or(Ordering::Equal)
        }
        SortKey::Timestamp(field) => {
            let ts = |v: &Value| {
                v.get(field)
                    .and_then(Value::as_str)
                    .and_then(|s| OffsetDateTime::parse(s, &Rfc3339).ok())
            };
            ts(a).cmp(&ts(b))
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: Collection, query: &Query) -> StoreResult<Vec<Value>> {
        let guard = self.collections.read().await;
        let mut hits: Vec<Value> = guard
            .get(&collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| query.predicates.iter().all(|p| matches(doc, p)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        drop(guard);

        if let Some(sort) = query.sort {
            hits.sort_by(|a, b| {
                let ord = compare(a, b, sort.key);
                match sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        hits.truncate(query.limit);
        Ok(hits)
    }

    async fn insert(&self, collection: Collection, document: Value) -> StoreResult<()> {
        if !document.is_object() {
            return Err(StoreError::InvalidDocument(format!(
                "{} documents must be JSON objects",
                collection.name()
            )));
        }
        self.collections
            .write()
            .await
            .entry(collection)
            .or_default()
            .push(document);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn drinks() -> MemoryStore {
        MemoryStore::seeded([
            (Collection::Menus, json!({"id": "a", "type": "cocktail", "flavor_profile": ["citrus"], "molecular": true})),
            (Collection::Menus, json!({"id": "b", "type": "mocktail", "flavor_profile": ["sweet", "citrus"], "molecular": true})),
            (Collection::Menus, json!({"id": "c", "type": "mocktail", "flavor_profile": ["sweet"], "molecular": false})),
        ])
        .await
    }

    fn ids(docs: &[Value]) -> Vec<&str> {
        docs.iter().filter_map(|d| d["id"].as_str()).collect()
    }

    #[tokio::test]
    async fn predicates_are_anded() {
        let store = drinks().await;
        let q = Query::new(100).eq("type", "mocktail").eq("molecular", true);
        let hits = store.find(Collection::Menus, &q).await.unwrap();
        assert_eq!(ids(&hits), vec!["b"]);
    }

    #[tokio::test]
    async fn contains_checks_array_membership() {
        let store = drinks().await;
        let q = Query::new(100).contains("flavor_profile", "citrus");
        let hits = store.find(Collection::Menus, &q).await.unwrap();
        assert_eq!(ids(&hits), vec!["a", "b"]);

        let q = Query::new(100).contains("type", "cocktail");
        let hits = store.find(Collection::Menus, &q).await.unwrap();
        assert_eq!(ids(&hits), vec!["a"]);
    }

    #[tokio::test]
    async fn limit_caps_results_and_other_collections_are_isolated() {
        let store = drinks().await;
        let hits = store.find(Collection::Menus, &Query::new(2)).await.unwrap();
        assert_eq!(hits.len(), 2);
        let none = store.find(Collection::Setups, &Query::new(50)).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn sorts_numeric_and_timestamp_keys() {
        let store = MemoryStore::seeded([
            (Collection::Faqs, json!({"id": "2", "order": 2})),
            (Collection::Faqs, json!({"id": "10", "order": 10})),
            (Collection::Faqs, json!({"id": "1", "order": 1})),
            (Collection::Leads, json!({"id": "old", "created_at": "2025-01-01T10:00:00Z"})),
            (Collection::Leads, json!({"id": "new", "created_at": "2025-01-01T10:00:00.5Z"})),
        ])
        .await;

        let q = Query::new(50).sort(SortKey::Numeric("order"), SortDirection::Asc);
        let faqs = store.find(Collection::Faqs, &q).await.unwrap();
        assert_eq!(ids(&faqs), vec!["1", "2", "10"]);

        let q = Query::new(100).sort(SortKey::Timestamp("created_at"), SortDirection::Desc);
        let leads = store.find(Collection::Leads, &q).await.unwrap();
        assert_eq!(ids(&leads), vec!["new", "old"]);
    }

    #[tokio::test]
    async fn insert_rejects_non_objects() {
        let store = MemoryStore::new();
        let err = store.insert(Collection::Leads, json!([1, 2])).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidDocument(_)));

        store.insert(Collection::Leads, json!({"id": "x"})).await.unwrap();
        let found = store
            .find_one(Collection::Leads, &Query::new(100).eq("id", "x"))
            .await
            .unwrap();
        assert!(found.is_some());
    }
}
