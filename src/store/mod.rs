use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

/// Named document collections held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Leads,
    Setups,
    Menus,
    Testimonials,
    Gallery,
    Packages,
    Faqs,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Leads => "leads",
            Collection::Setups => "setups",
            Collection::Menus => "menus",
            Collection::Testimonials => "testimonials",
            Collection::Gallery => "gallery",
            Collection::Packages => "packages",
            Collection::Faqs => "faqs",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Field equals the given JSON value.
    Eq { field: &'static str, value: Value },
    /// Field is an array holding `value`, or a scalar equal to it.
    Contains { field: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// How a sort field is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Numeric(&'static str),
    Timestamp(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// AND of predicates, optional ordering and a hard result cap.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub predicates: Vec<Predicate>,
    pub sort: Option<Sort>,
    pub limit: usize,
}

impl Query {
    pub fn new(limit: usize) -> Self {
        Self {
            predicates: Vec::new(),
            sort: None,
            limit,
        }
    }

    pub fn eq(mut self, field: &'static str, value: impl Into<Value>) -> Self {
        self.predicates.push(Predicate::Eq {
            field,
            value: value.into(),
        });
        self
    }

    pub fn contains(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.predicates.push(Predicate::Contains {
            field,
            value: value.into(),
        });
        self
    }

    pub fn sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort = Some(Sort { key, direction });
        self
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn find(&self, collection: Collection, query: &Query) -> StoreResult<Vec<Value>>;

    async fn find_one(&self, collection: Collection, query: &Query) -> StoreResult<Option<Value>> {
        let mut single = query.clone();
        single.limit = 1;
        Ok(self.find(collection, &single).await?.into_iter().next())
    }

    /// Stores one document as a single write.
    async fn insert(&self, collection: Collection, document: Value) -> StoreResult<()>;

    /// Releases connections on shutdown.
    async fn close(&self) {}
}
