//! Data Transfer Objects - request/response types for the API.
//!
//! Response documents mirror the legacy wire format: camelCase fields and
//! MongoDB-driver-style mutation results (`insertedId`, `matchedCount`,
//! `modifiedCount`, `deletedCount`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use alumnet_core::domain::{Account, Comment, EventPosting, JobPosting, ProfileUpdate, Role};
use alumnet_core::moderation::Moderated;

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Request to register a new alumni account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub roll_no: String,
    pub series: String,
    pub section: String,
    pub department: String,
    pub passing_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Request to login. Alumni logins additionally present their roll number;
/// admin logins leave it out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll_no: Option<String>,
}

/// Response containing the issued bearer token and the account document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub account: AccountDoc,
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// Public account document. The password hash is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDoc {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub roll_no: String,
    pub series: String,
    pub section: String,
    pub department: String,
    pub passing_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountDoc {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            role: account.role,
            roll_no: account.roll_no,
            series: account.series,
            section: account.section,
            department: account.department,
            passing_year: account.passing_year,
            contact_no: account.contact_no,
            address: account.address,
            current_job: account.current_job,
            current_company: account.current_company,
            skills: account.skills,
            bio: account.bio,
            github: account.github,
            linkedin: account.linkedin,
            profile_photo: account.profile_photo,
            cover_photo: account.cover_photo,
            is_verified: account.verified,
            created_at: account.created_at,
        }
    }
}

impl Moderated for AccountDoc {
    fn id(&self) -> Uuid {
        self.id
    }

    fn is_verified(&self) -> bool {
        self.is_verified
    }

    fn mark_verified(&mut self) {
        self.is_verified = true;
    }
}

/// Owner profile update. Absent fields are left untouched; identity, role,
/// credentials and the verified flag are not part of this document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo: Option<String>,
}

impl From<UpdateAccountRequest> for ProfileUpdate {
    fn from(req: UpdateAccountRequest) -> Self {
        Self {
            name: req.name,
            contact_no: req.contact_no,
            address: req.address,
            current_job: req.current_job,
            current_company: req.current_company,
            skills: req.skills,
            bio: req.bio,
            github: req.github,
            linkedin: req.linkedin,
            profile_photo: req.profile_photo,
            cover_photo: req.cover_photo,
        }
    }
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// Comment document as stored and returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDoc {
    pub id: Uuid,
    pub text: String,
    pub author_name: String,
    pub author_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    pub posted_at: DateTime<Utc>,
}

impl From<Comment> for CommentDoc {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            text: comment.text,
            author_name: comment.author_name,
            author_email: comment.author_email,
            author_avatar: comment.author_avatar,
            posted_at: comment.posted_at,
        }
    }
}

impl From<CommentDoc> for Comment {
    fn from(doc: CommentDoc) -> Self {
        Self {
            id: doc.id,
            text: doc.text,
            author_name: doc.author_name,
            author_email: doc.author_email,
            author_avatar: doc.author_avatar,
            posted_at: doc.posted_at,
        }
    }
}

/// Comment submission. The submitting client generates the id and timestamp
/// so it can mirror the exact appended object locally; the author's email is
/// taken from the authenticated identity, never from the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub text: String,
    pub author_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Job postings
// ---------------------------------------------------------------------------

/// Job posting document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDoc {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    pub posted_by: String,
    pub is_verified: bool,
    #[serde(default)]
    pub comments: Vec<CommentDoc>,
    pub date_posted: DateTime<Utc>,
}

impl From<JobPosting> for JobDoc {
    fn from(job: JobPosting) -> Self {
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            location: job.location,
            job_type: job.job_type,
            description: job.description,
            apply_link: job.apply_link,
            attachment: job.attachment,
            posted_by: job.posted_by,
            is_verified: job.verified,
            comments: job.comments.into_iter().map(Into::into).collect(),
            date_posted: job.date_posted,
        }
    }
}

impl Moderated for JobDoc {
    fn id(&self) -> Uuid {
        self.id
    }

    fn is_verified(&self) -> bool {
        self.is_verified
    }

    fn mark_verified(&mut self) {
        self.is_verified = true;
    }
}

/// Request to create a job posting. The server assigns the id, stamps the
/// posting date, denormalizes the poster name and forces `isVerified=false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

// ---------------------------------------------------------------------------
// Event postings
// ---------------------------------------------------------------------------

/// Event posting document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDoc {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    pub posted_by: String,
    pub is_verified: bool,
    #[serde(default)]
    pub comments: Vec<CommentDoc>,
    pub date_posted: DateTime<Utc>,
}

impl From<EventPosting> for EventDoc {
    fn from(event: EventPosting) -> Self {
        Self {
            id: event.id,
            name: event.name,
            date: event.date,
            time: event.time,
            location: event.location,
            event_type: event.event_type,
            description: event.description,
            rsvp_link: event.rsvp_link,
            attachment: event.attachment,
            posted_by: event.posted_by,
            is_verified: event.verified,
            comments: event.comments.into_iter().map(Into::into).collect(),
            date_posted: event.date_posted,
        }
    }
}

impl Moderated for EventDoc {
    fn id(&self) -> Uuid {
        self.id
    }

    fn is_verified(&self) -> bool {
        self.is_verified
    }

    fn mark_verified(&mut self) {
        self.is_verified = true;
    }
}

/// Request to create an event posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rsvp_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

// ---------------------------------------------------------------------------
// Driver-style mutation results
// ---------------------------------------------------------------------------

/// Result of a create, mirroring the driver's insert acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResult {
    pub inserted_id: Uuid,
}

/// Result of an update/approve/comment mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateResult {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            message: None,
            matched_count,
            modified_count,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Result of a delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub message: String,
    pub deleted_count: u64,
}

// ---------------------------------------------------------------------------
// Admin dashboard
// ---------------------------------------------------------------------------

/// Pending/verified counts per entity kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_accounts: u64,
    pub pending_accounts: u64,
    pub verified_accounts: u64,
    pub total_jobs: u64,
    pub pending_jobs: u64,
    pub verified_jobs: u64,
    pub total_events: u64,
    pub pending_events: u64,
    pub verified_events: u64,
}
