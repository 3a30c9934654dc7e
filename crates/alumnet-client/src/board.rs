//! Public board views for job and event postings.
//!
//! Boards consume the same fetch-all endpoints as the moderation queue but
//! only surface verified records. Comment submission is the one mutation
//! that patches the cached copy instead of reloading: the submitted comment
//! object is mirrored locally once the server reports at least one modified
//! document.

use std::sync::Arc;

use uuid::Uuid;

use alumnet_core::moderation::Moderated;
use alumnet_shared::dto::{CommentDoc, CommentRequest, EventDoc, JobDoc};

use crate::gateway::{BoardGateway, ClientError};

/// A record that carries an append-only comment list.
pub trait Commentable {
    fn push_comment(&mut self, comment: CommentDoc);
}

impl Commentable for JobDoc {
    fn push_comment(&mut self, comment: CommentDoc) {
        self.comments.push(comment);
    }
}

impl Commentable for EventDoc {
    fn push_comment(&mut self, comment: CommentDoc) {
        self.comments.push(comment);
    }
}

/// Public listing of one posting kind.
pub struct Board<T, G> {
    gateway: Arc<G>,
    records: Vec<T>,
}

impl<T, G> Board<T, G>
where
    T: Moderated + Commentable + Clone,
    G: BoardGateway<T>,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            records: Vec::new(),
        }
    }

    /// Fetch the full collection. The previous cache survives a failure.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        match self.gateway.list().await {
            Ok(records) => {
                self.records = records;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load board");
                Err(err)
            }
        }
    }

    /// Verified records only; pending postings never appear on the board.
    pub fn visible(&self) -> Vec<&T> {
        self.records.iter().filter(|r| r.is_verified()).collect()
    }

    pub fn find(&self, id: Uuid) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Submit a comment and mirror it locally.
    ///
    /// The mirrored object is exactly what was sent: id and timestamp are
    /// fixed before the request so the local copy and the stored document
    /// agree without a reload. The append only happens when the server
    /// reports a modified count of at least one.
    pub async fn submit_comment(
        &mut self,
        id: Uuid,
        comment: CommentDoc,
    ) -> Result<(), ClientError> {
        let request = CommentRequest {
            id: Some(comment.id),
            text: comment.text.clone(),
            author_name: comment.author_name.clone(),
            author_avatar: comment.author_avatar.clone(),
            posted_at: Some(comment.posted_at),
        };

        let result = self.gateway.append_comment(id, request).await?;
        if result.modified_count >= 1 {
            if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
                record.push_comment(comment);
            }
        }
        Ok(())
    }
}
