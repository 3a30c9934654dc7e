use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment on a job or event posting.
///
/// Comment lists are append-only: individual comments are never edited or
/// removed once pushed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub author_name: String,
    pub author_email: String,
    pub author_avatar: Option<String>,
    pub posted_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        text: String,
        author_name: String,
        author_email: String,
        author_avatar: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            author_name,
            author_email,
            author_avatar,
            posted_at: Utc::now(),
        }
    }
}
