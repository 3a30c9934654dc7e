//! Moderation primitives shared by every entity kind.
//!
//! Each record carries exactly one verification state at any time. The only
//! transitions are `Pending -> Verified` (approve) and `Pending -> Deleted`
//! (reject); both targets are terminal and there is no un-verify.

use uuid::Uuid;

/// A record subject to admin moderation.
pub trait Moderated {
    fn id(&self) -> Uuid;

    fn is_verified(&self) -> bool;

    /// Force the verified state. Prefer [`Moderated::approve`], which keeps
    /// the transition one-way and reports whether anything changed.
    fn mark_verified(&mut self);

    /// Approve the record. Returns `false` when the record was already
    /// verified, so callers can report a driver-style modified count of zero
    /// instead of re-writing the row.
    fn approve(&mut self) -> bool {
        if self.is_verified() {
            false
        } else {
            self.mark_verified();
            true
        }
    }
}

/// A full collection split into pending and verified sets.
///
/// The split is a strict partition: every record lands in exactly one of the
/// two sets, determined solely by its verified flag.
#[derive(Debug, Clone, Default)]
pub struct QueuePartition<T> {
    pub pending: Vec<T>,
    pub verified: Vec<T>,
}

impl<T: Moderated> QueuePartition<T> {
    /// Partition a freshly fetched collection.
    pub fn partition(records: impl IntoIterator<Item = T>) -> Self {
        let (verified, pending) = records.into_iter().partition(|r| r.is_verified());
        Self { pending, verified }
    }

    /// Look up a record in either set. Pure; used to surface details for
    /// inspection without any side effect.
    pub fn find(&self, id: Uuid) -> Option<&T> {
        self.pending
            .iter()
            .chain(self.verified.iter())
            .find(|r| r.id() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.find(id).is_some()
    }

    /// Total number of records across both sets.
    pub fn len(&self) -> usize {
        self.pending.len() + self.verified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.verified.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Record {
        id: Uuid,
        verified: bool,
    }

    impl Record {
        fn new(verified: bool) -> Self {
            Self {
                id: Uuid::new_v4(),
                verified,
            }
        }
    }

    impl Moderated for Record {
        fn id(&self) -> Uuid {
            self.id
        }

        fn is_verified(&self) -> bool {
            self.verified
        }

        fn mark_verified(&mut self) {
            self.verified = true;
        }
    }

    #[test]
    fn partition_is_strict() {
        let records = vec![
            Record::new(false),
            Record::new(true),
            Record::new(false),
            Record::new(true),
            Record::new(true),
        ];
        let ids: Vec<Uuid> = records.iter().map(|r| r.id).collect();

        let queue = QueuePartition::partition(records);

        assert_eq!(queue.pending.len(), 2);
        assert_eq!(queue.verified.len(), 3);
        assert_eq!(queue.len(), 5);

        // Every record is in exactly one set.
        for id in ids {
            let in_pending = queue.pending.iter().any(|r| r.id == id);
            let in_verified = queue.verified.iter().any(|r| r.id == id);
            assert!(in_pending ^ in_verified);
        }
        assert!(queue.pending.iter().all(|r| !r.verified));
        assert!(queue.verified.iter().all(|r| r.verified));
    }

    #[test]
    fn approve_is_idempotent() {
        let mut record = Record::new(false);
        assert!(record.approve());
        assert!(record.verified);
        // Second approval is a no-op.
        assert!(!record.approve());
        assert!(record.verified);
    }

    #[test]
    fn find_looks_in_both_sets() {
        let pending = Record::new(false);
        let verified = Record::new(true);
        let (pending_id, verified_id) = (pending.id, verified.id);

        let queue = QueuePartition::partition(vec![pending, verified]);

        assert!(queue.find(pending_id).is_some());
        assert!(queue.find(verified_id).is_some());
        assert!(queue.find(Uuid::new_v4()).is_none());
    }

    #[test]
    fn empty_partition() {
        let queue = QueuePartition::<Record>::partition(Vec::new());
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }
}
