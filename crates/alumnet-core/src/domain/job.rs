use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Comment;
use crate::moderation::Moderated;

/// Job posting entity. Created by a verified alumni, hidden from the public
/// board until an admin approves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub description: String,
    pub apply_link: Option<String>,
    pub attachment: Option<String>,
    pub posted_by: String,
    pub verified: bool,
    pub comments: Vec<Comment>,
    pub date_posted: DateTime<Utc>,
}

impl JobPosting {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        company: String,
        location: String,
        job_type: String,
        description: String,
        apply_link: Option<String>,
        attachment: Option<String>,
        posted_by: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            company,
            location,
            job_type,
            description,
            apply_link,
            attachment,
            posted_by,
            verified: false,
            comments: Vec::new(),
            date_posted: Utc::now(),
        }
    }

    /// Append a comment, preserving submission order.
    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

impl Moderated for JobPosting {
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
