use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Comment;
use crate::moderation::Moderated;

/// Event posting entity. Same lifecycle as a job posting: pending until an
/// admin approves, destroyed on rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPosting {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    /// Wall-clock time as entered by the poster, e.g. "18:30".
    pub time: String,
    pub location: String,
    pub event_type: String,
    pub description: String,
    pub rsvp_link: Option<String>,
    pub attachment: Option<String>,
    pub posted_by: String,
    pub verified: bool,
    pub comments: Vec<Comment>,
    pub date_posted: DateTime<Utc>,
}

impl EventPosting {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        date: NaiveDate,
        time: String,
        location: String,
        event_type: String,
        description: String,
        rsvp_link: Option<String>,
        attachment: Option<String>,
        posted_by: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            date,
            time,
            location,
            event_type,
            description,
            rsvp_link,
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

impl Moderated for EventPosting {
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
