use crate::config::AppConfig;
use crate::notify::{NotificationDispatcher, Notifier, ResendNotifier};
use crate::store::{DocumentStore, MemoryStore, PgDocumentStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn DocumentStore>,
    pub notifications: NotificationDispatcher,
}

impl AppState {
    /// Connects the store (running migrations on Postgres) and builds the
    /// notifier. Without `DATABASE_URL` the in-process store is used.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let config = Arc::new(config);

        let store = match config.database_url.as_deref() {
            Some(url) => {
                let pg = PgDocumentStore::connect(url, &config.db_name).await?;
                pg.migrate().await?;
                tracing::info!(store = %config.db_name, "document store: postgres");
                Arc::new(pg) as Arc<dyn DocumentStore>
            }
            None => {
                tracing::warn!("DATABASE_URL not set; using in-memory store, nothing will persist");
                Arc::new(MemoryStore::new()) as Arc<dyn DocumentStore>
            }
        };

        let notifier = Arc::new(ResendNotifier::new(config.email.clone())?) as Arc<dyn Notifier>;
        if !config.email.is_active() {
            tracing::info!("lead emails disabled");
        }
        let notifications = NotificationDispatcher::new(notifier, config.email.timeout());

        Ok(Self::from_parts(config, store, notifications))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        store: Arc<dyn DocumentStore>,
        notifications: NotificationDispatcher,
    ) -> Self {
        Self {
            config,
            store,
            notifications,
        }
    }

    #[cfg(test)]
    pub fn fake(store: Arc<dyn DocumentStore>, notifier: Arc<dyn Notifier>) -> Self {
        let config = AppConfig::from_lookup(|_| None).expect("default config");
        let notifications = NotificationDispatcher::new(notifier, std::time::Duration::from_secs(1));
        Self::from_parts(Arc::new(config), store, notifications)
    }
}
