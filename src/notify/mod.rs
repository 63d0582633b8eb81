use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::leads::dto::Lead;

pub mod email;

pub use email::ResendNotifier;

/// Result of one notification attempt. Failures are values, not errors:
/// nothing here is allowed to reach the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent { id: String },
    Skipped { reason: String },
    Failed { message: String },
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify_new_lead(&self, lead: &Lead) -> NotifyOutcome;
}

/// Runs lead notifications in the background, detached from the request.
#[derive(Clone)]
pub struct NotificationDispatcher {
    notifier: Arc<dyn Notifier>,
    timeout: Duration,
    tasks: Arc<Mutex<JoinSet<()>>>,
}

impl NotificationDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>, timeout: Duration) -> Self {
        Self {
            notifier,
            timeout,
            tasks: Arc::new(Mutex::new(JoinSet::new())),
        }
    }

    /// Fire and forget. The outcome is only logged.
    pub fn dispatch(&self, lead: Lead) {
        let notifier = Arc::clone(&self.notifier);
        let timeout = self.timeout;
        let job = async move {
            let lead_id = lead.id;
            match tokio::time::timeout(timeout, notifier.notify_new_lead(&lead)).await {
                Ok(NotifyOutcome::Sent { id }) => {
                    info!(%lead_id, email_id = %id, "lead notification sent");
                }
                Ok(NotifyOutcome::Skipped { reason }) => {
                    info!(%lead_id, name = %lead.name, email = %lead.email, %reason, "lead notification skipped");
                }
                Ok(NotifyOutcome::Failed { message }) => {
                    error!(%lead_id, error = %message, "lead notification failed");
                }
                Err(_) => {
                    error!(%lead_id, timeout_secs = timeout.as_secs(), "lead notification timed out");
                }
            }
        };

        let mut tasks = self.tasks.lock().unwrap_or_else(|p| p.into_inner());
        while tasks.try_join_next().is_some() {}
        tasks.spawn(job);
    }

    pub fn in_flight(&self) -> usize {
        let mut tasks = self.tasks.lock().unwrap_or_else(|p| p.into_inner());
        while tasks.try_join_next().is_some() {}
        tasks.len()
    }

    /// Waits up to `grace` for in-flight notifications, then aborts the rest.
    pub async fn shutdown(&self, grace: Duration) {
        let mut tasks = {
            let mut guard = self.tasks.lock().unwrap_or_else(|p| p.into_inner());
            std::mem::take(&mut *guard)
        };
        if tasks.is_empty() {
            return;
        }

        info!(pending = tasks.len(), "waiting for lead notifications");
        let drained = tokio::time::timeout(grace, async {
            while tasks.join_next().await.is_some() {}
        })
        .await;
        if drained.is_err() {
            warn!(abandoned = tasks.len(), "abandoning lead notifications on shutdown");
            tasks.abort_all();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{RecordingNotifier, StuckNotifier};
    use super::*;
    use crate::leads::dto::LeadCreate;
    use time::OffsetDateTime;
    use tokio::sync::mpsc;

    fn lead() -> Lead {
        Lead::from_create(
            LeadCreate {
                name: "Asha".into(),
                email: "asha@example.com".into(),
                phone: "9999999999".into(),
                event_type: "Wedding".into(),
                ..LeadCreate::default()
            },
            OffsetDateTime::now_utc(),
        )
    }

    #[tokio::test]
    async fn dispatch_runs_notifier_in_background() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notifier = Arc::new(RecordingNotifier {
            outcome: NotifyOutcome::Sent { id: "em_1".into() },
            seen: tx,
        });
        let dispatcher = NotificationDispatcher::new(notifier, Duration::from_secs(1));
        let lead = lead();
        let id = lead.id;

        dispatcher.dispatch(lead);
        let seen = tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("notifier called")
            .expect("channel open");
        assert_eq!(seen, id);

        dispatcher.shutdown(Duration::from_secs(1)).await;
        assert_eq!(dispatcher.in_flight(), 0);
    }

    #[tokio::test]
    async fn timed_out_notification_finishes_its_task() {
        let dispatcher = NotificationDispatcher::new(Arc::new(StuckNotifier), Duration::from_millis(20));
        dispatcher.dispatch(lead());
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(dispatcher.in_flight(), 0);
    }

    #[tokio::test]
    async fn shutdown_abandons_stuck_notifications() {
        let dispatcher = NotificationDispatcher::new(Arc::new(StuckNotifier), Duration::from_secs(3600));
        dispatcher.dispatch(lead());
        dispatcher.dispatch(lead());
        assert_eq!(dispatcher.in_flight(), 2);

        let started = std::time::Instant::now();
        dispatcher.shutdown(Duration::from_millis(50)).await;
        assert!(started.elapsed() < Duration::from_secs(2));
        assert_eq!(dispatcher.in_flight(), 0);
    }
}
