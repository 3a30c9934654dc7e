//! The admin moderation queue.
//!
//! One queue instance per entity kind. Loading fetches the full collection
//! and partitions it locally; approve/reject mutate remote state and then
//! reconcile through an authoritative reload, so the cached snapshot can
//! never diverge from the backend after a successful mutation. Failures
//! leave the previous snapshot in place.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use alumnet_core::moderation::{Moderated, QueuePartition};

use crate::gateway::{ClientError, QueueGateway};
use crate::notice::Notice;

/// Per-kind moderation queue controller.
pub struct ModerationQueue<T, G> {
    gateway: Arc<G>,
    snapshot: QueuePartition<T>,
}

impl<T, G> ModerationQueue<T, G>
where
    T: Moderated + Clone,
    G: QueueGateway<T>,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            snapshot: QueuePartition {
                pending: Vec::new(),
                verified: Vec::new(),
            },
        }
    }

    /// Records awaiting an admin decision.
    pub fn pending(&self) -> &[T] {
        &self.snapshot.pending
    }

    /// Records already approved.
    pub fn verified(&self) -> &[T] {
        &self.snapshot.verified
    }

    /// Surface one record for inspection. Pure lookup, no side effects.
    pub fn open_details(&self, id: Uuid) -> Option<&T> {
        self.snapshot.find(id)
    }

    /// Fetch the full collection and re-partition it.
    ///
    /// On failure the previous snapshot stays in place; no retry is
    /// attempted.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.gateway.list().await {
            Ok(records) => {
                self.snapshot = QueuePartition::partition(records);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load moderation queue");
                Err(err)
            }
        }
    }

    /// Approve a record: `Pending -> Verified`.
    ///
    /// The mutation is confirmed by reloading the collection, never by
    /// patching the cached arrays.
    pub async fn approve(&mut self, id: Uuid) -> Result<Notice, ClientError> {
        self.gateway.approve(id).await?;
        self.load().await?;
        Ok(Notice::new("Verified", "The record is now live."))
    }

    /// Reject a record: `Pending -> Deleted`. Destructive and irreversible.
    pub async fn reject(&mut self, id: Uuid) -> Result<Notice, ClientError> {
        self.gateway.remove(id).await?;
        self.load().await?;
        Ok(Notice::new("Rejected", "The record has been removed."))
    }

    /// Re-fetch on a fixed interval, the only approximation of real-time
    /// updates. Load failures are logged and polling continues.
    pub async fn poll(&mut self, period: Duration, mut on_refresh: impl FnMut(&QueuePartition<T>)) {
        let mut ticker = tokio::time::interval(period);
        // First tick fires immediately; skip it so callers decide when the
        // initial load happens.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if self.load().await.is_ok() {
                on_refresh(&self.snapshot);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::Utc;

    use alumnet_shared::dto::{DeleteResult, JobDoc, UpdateResult};

    fn job_doc(title: &str, verified: bool) -> JobDoc {
        JobDoc {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            company: "Acme".to_owned(),
            location: "Remote".to_owned(),
            job_type: "Full-time".to_owned(),
            description: "desc".to_owned(),
            apply_link: None,
            attachment: None,
            posted_by: "Jane".to_owned(),
            is_verified: verified,
            comments: Vec::new(),
            date_posted: Utc::now(),
        }
    }

    /// In-memory stand-in for the REST surface.
    struct FakeGateway {
        store: Mutex<Vec<JobDoc>>,
        fail_next: Mutex<bool>,
    }

    impl FakeGateway {
        fn new(records: Vec<JobDoc>) -> Arc<Self> {
            Arc::new(Self {
                store: Mutex::new(records),
                fail_next: Mutex::new(false),
            })
        }

        fn fail_next(&self) {
            *self.fail_next.lock().unwrap() = true;
        }

        fn take_failure(&self) -> bool {
            std::mem::take(&mut *self.fail_next.lock().unwrap())
        }
    }

    #[async_trait]
    impl QueueGateway<JobDoc> for FakeGateway {
        async fn list(&self) -> Result<Vec<JobDoc>, ClientError> {
            if self.take_failure() {
                return Err(ClientError::Transport("connection refused".to_owned()));
            }
            Ok(self.store.lock().unwrap().clone())
        }

        async fn approve(&self, id: Uuid) -> Result<UpdateResult, ClientError> {
            if self.take_failure() {
                return Err(ClientError::Transport("connection refused".to_owned()));
            }
            let mut store = self.store.lock().unwrap();
            let job = store
                .iter_mut()
                .find(|j| j.id == id)
                .ok_or(ClientError::NotFound)?;
            let modified = u64::from(!job.is_verified);
            job.is_verified = true;
            Ok(UpdateResult::new(1, modified))
        }

        async fn remove(&self, id: Uuid) -> Result<DeleteResult, ClientError> {
            if self.take_failure() {
                return Err(ClientError::Transport("connection refused".to_owned()));
            }
            let mut store = self.store.lock().unwrap();
            let before = store.len();
            store.retain(|j| j.id != id);
            if store.len() == before {
                return Err(ClientError::NotFound);
            }
            Ok(DeleteResult {
                message: "job deleted successfully".to_owned(),
                deleted_count: 1,
            })
        }
    }

    #[tokio::test]
    async fn load_partitions_pending_and_verified() {
        let gateway = FakeGateway::new(vec![
            job_doc("a", false),
            job_doc("b", true),
            job_doc("c", false),
        ]);
        let mut queue = ModerationQueue::new(gateway);

        queue.load().await.unwrap();

        assert_eq!(queue.pending().len(), 2);
        assert_eq!(queue.verified().len(), 1);
    }

    #[tokio::test]
    async fn approve_moves_record_and_survives_reload() {
        let pending = job_doc("a", false);
        let id = pending.id;
        let gateway = FakeGateway::new(vec![pending]);
        let mut queue = ModerationQueue::new(Arc::clone(&gateway));
        queue.load().await.unwrap();

        let notice = queue.approve(id).await.unwrap();
        assert_eq!(notice.title, "Verified");
        assert!(queue.pending().is_empty());
        assert_eq!(queue.verified().len(), 1);

        // Never reappears in pending on subsequent reloads.
        queue.load().await.unwrap();
        assert!(queue.pending().is_empty());
        assert_eq!(queue.verified().len(), 1);
    }

    #[tokio::test]
    async fn reject_removes_record_permanently() {
        let pending = job_doc("a", false);
        let id = pending.id;
        let gateway = FakeGateway::new(vec![pending, job_doc("b", true)]);
        let mut queue = ModerationQueue::new(Arc::clone(&gateway));
        queue.load().await.unwrap();

        queue.reject(id).await.unwrap();
        assert!(queue.open_details(id).is_none());

        queue.load().await.unwrap();
        assert!(queue.open_details(id).is_none());
        assert_eq!(queue.verified().len(), 1);
    }

    #[tokio::test]
    async fn failed_approve_leaves_snapshot_untouched() {
        let pending = job_doc("a", false);
        let id = pending.id;
        let gateway = FakeGateway::new(vec![pending]);
        let mut queue = ModerationQueue::new(Arc::clone(&gateway));
        queue.load().await.unwrap();

        gateway.fail_next();
        let err = queue.approve(id).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));

        // Still pending locally, and the failure produced no remote change.
        assert_eq!(queue.pending().len(), 1);
        assert!(queue.verified().is_empty());
        queue.load().await.unwrap();
        assert_eq!(queue.pending().len(), 1);
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_snapshot() {
        let gateway = FakeGateway::new(vec![job_doc("a", false)]);
        let mut queue = ModerationQueue::new(Arc::clone(&gateway));
        queue.load().await.unwrap();

        gateway.fail_next();
        assert!(queue.load().await.is_err());
        assert_eq!(queue.pending().len(), 1);
    }

    #[tokio::test]
    async fn open_details_is_pure() {
        let pending = job_doc("a", false);
        let id = pending.id;
        let gateway = FakeGateway::new(vec![pending]);
        let mut queue = ModerationQueue::new(gateway);
        queue.load().await.unwrap();

        let details = queue.open_details(id).unwrap();
        assert_eq!(details.title, "a");
        assert_eq!(queue.pending().len(), 1);
        assert!(queue.open_details(Uuid::new_v4()).is_none());
    }
}
