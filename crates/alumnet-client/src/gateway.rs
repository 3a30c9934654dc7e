//! Transport seam between the client core and the REST surface.
//!
//! The moderation queue, boards and session are written against the small
//! gateway traits below so their logic can be exercised without a network;
//! [`HttpGateway`] is the production implementation over reqwest.

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use alumnet_shared::ErrorResponse;
use alumnet_shared::dto::{
    AccountDoc, AuthResponse, CommentRequest, CreateEventRequest, CreateJobRequest, CreateResult,
    DeleteResult, EventDoc, JobDoc, LoginRequest, RegisterRequest, UpdateAccountRequest,
    UpdateResult,
};

/// Errors surfaced by client operations.
///
/// A `Transport` error means the request never completed; an `Api` error
/// carries the server's problem-details explanation. In both cases the
/// caller's cached state is left untouched.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("{0}")]
    Api(String),

    #[error("record not found")]
    NotFound,

    #[error("not logged in")]
    NotLoggedIn,
}

/// Per-kind view of the moderation endpoints.
#[async_trait]
pub trait QueueGateway<T>: Send + Sync {
    /// Fetch the full collection; the caller partitions it locally.
    async fn list(&self) -> Result<Vec<T>, ClientError>;

    /// Set the record's verified flag.
    async fn approve(&self, id: Uuid) -> Result<UpdateResult, ClientError>;

    /// Destructively delete the record.
    async fn remove(&self, id: Uuid) -> Result<DeleteResult, ClientError>;
}

/// Per-kind view of the public board endpoints.
#[async_trait]
pub trait BoardGateway<T>: Send + Sync {
    /// Fetch the full collection; the caller filters to verified records.
    async fn list(&self) -> Result<Vec<T>, ClientError>;

    /// Append one comment to the record.
    async fn append_comment(
        &self,
        id: Uuid,
        comment: CommentRequest,
    ) -> Result<UpdateResult, ClientError>;
}

/// Credential endpoints plus bearer-token plumbing for the session.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn register(&self, req: RegisterRequest) -> Result<AccountDoc, ClientError>;

    async fn login(&self, req: LoginRequest) -> Result<AuthResponse, ClientError>;

    /// Install (or clear) the bearer token attached to subsequent requests.
    fn set_token(&self, token: Option<String>);
}

/// HTTP implementation of the gateways over reqwest.
pub struct HttpGateway {
    base_url: String,
    http: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: reqwest::Client::new(),
            token: RwLock::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self.token.read().ok().and_then(|t| t.clone());
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let response = self
            .with_auth(builder)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()));
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        // Non-OK: surface the problem-details explanation when present.
        match response.json::<ErrorResponse>().await {
            Ok(body) => Err(ClientError::Api(body.detail.unwrap_or(body.title))),
            Err(_) => Err(ClientError::Api(format!("request failed: {status}"))),
        }
    }

    // -- raw endpoint wrappers -------------------------------------------

    pub async fn list_users(&self) -> Result<Vec<AccountDoc>, ClientError> {
        self.send(self.http.get(self.url("/users"))).await
    }

    /// Fetch one account; `id` may be a UUID or an email address.
    pub async fn fetch_user(&self, id: &str) -> Result<AccountDoc, ClientError> {
        self.send(self.http.get(self.url(&format!("/user/{id}"))))
            .await
    }

    pub async fn update_user(
        &self,
        id: &str,
        update: &UpdateAccountRequest,
    ) -> Result<UpdateResult, ClientError> {
        self.send(
            self.http
                .patch(self.url(&format!("/user/{id}")))
                .json(update),
        )
        .await
    }

    pub async fn verify_user(&self, id: Uuid) -> Result<UpdateResult, ClientError> {
        self.send(self.http.patch(self.url(&format!("/userVerify/{id}"))))
            .await
    }

    pub async fn remove_user(&self, id: Uuid) -> Result<DeleteResult, ClientError> {
        self.send(self.http.delete(self.url(&format!("/userRemove/{id}"))))
            .await
    }

    pub async fn list_jobs(&self) -> Result<Vec<JobDoc>, ClientError> {
        self.send(self.http.get(self.url("/jobs"))).await
    }

    pub async fn create_job(&self, req: &CreateJobRequest) -> Result<CreateResult, ClientError> {
        self.send(self.http.post(self.url("/jobs")).json(req)).await
    }

    pub async fn approve_job(&self, id: Uuid) -> Result<UpdateResult, ClientError> {
        self.send(self.http.patch(self.url(&format!("/jobApprove/{id}"))))
            .await
    }

    pub async fn comment_job(
        &self,
        id: Uuid,
        comment: &CommentRequest,
    ) -> Result<UpdateResult, ClientError> {
        self.send(
            self.http
                .patch(self.url(&format!("/jobComment/{id}")))
                .json(comment),
        )
        .await
    }

    pub async fn remove_job(&self, id: Uuid) -> Result<DeleteResult, ClientError> {
        self.send(self.http.delete(self.url(&format!("/jobRemove/{id}"))))
            .await
    }

    pub async fn list_events(&self) -> Result<Vec<EventDoc>, ClientError> {
        self.send(self.http.get(self.url("/events"))).await
    }

    pub async fn create_event(
        &self,
        req: &CreateEventRequest,
    ) -> Result<CreateResult, ClientError> {
        self.send(self.http.post(self.url("/events")).json(req))
            .await
    }

    pub async fn approve_event(&self, id: Uuid) -> Result<UpdateResult, ClientError> {
        self.send(self.http.patch(self.url(&format!("/eventApprove/{id}"))))
            .await
    }

    pub async fn comment_event(
        &self,
        id: Uuid,
        comment: &CommentRequest,
    ) -> Result<UpdateResult, ClientError> {
        self.send(
            self.http
                .patch(self.url(&format!("/eventComment/{id}")))
                .json(comment),
        )
        .await
    }

    pub async fn remove_event(&self, id: Uuid) -> Result<DeleteResult, ClientError> {
        self.send(self.http.delete(self.url(&format!("/eventRemove/{id}"))))
            .await
    }
}

#[async_trait]
impl QueueGateway<AccountDoc> for HttpGateway {
    async fn list(&self) -> Result<Vec<AccountDoc>, ClientError> {
        self.list_users().await
    }

    async fn approve(&self, id: Uuid) -> Result<UpdateResult, ClientError> {
        self.verify_user(id).await
    }

    async fn remove(&self, id: Uuid) -> Result<DeleteResult, ClientError> {
        self.remove_user(id).await
    }
}

#[async_trait]
impl QueueGateway<JobDoc> for HttpGateway {
    async fn list(&self) -> Result<Vec<JobDoc>, ClientError> {
        self.list_jobs().await
    }

    async fn approve(&self, id: Uuid) -> Result<UpdateResult, ClientError> {
        self.approve_job(id).await
    }

    async fn remove(&self, id: Uuid) -> Result<DeleteResult, ClientError> {
        self.remove_job(id).await
    }
}

#[async_trait]
impl QueueGateway<EventDoc> for HttpGateway {
    async fn list(&self) -> Result<Vec<EventDoc>, ClientError> {
        self.list_events().await
    }

    async fn approve(&self, id: Uuid) -> Result<UpdateResult, ClientError> {
        self.approve_event(id).await
    }

    async fn remove(&self, id: Uuid) -> Result<DeleteResult, ClientError> {
        self.remove_event(id).await
    }
}

#[async_trait]
impl BoardGateway<JobDoc> for HttpGateway {
    async fn list(&self) -> Result<Vec<JobDoc>, ClientError> {
        self.list_jobs().await
    }

    async fn append_comment(
        &self,
        id: Uuid,
        comment: CommentRequest,
    ) -> Result<UpdateResult, ClientError> {
        self.comment_job(id, &comment).await
    }
}

#[async_trait]
impl BoardGateway<EventDoc> for HttpGateway {
    async fn list(&self) -> Result<Vec<EventDoc>, ClientError> {
        self.list_events().await
    }

    async fn append_comment(
        &self,
        id: Uuid,
        comment: CommentRequest,
    ) -> Result<UpdateResult, ClientError> {
        self.comment_event(id, &comment).await
    }
}

#[async_trait]
impl AuthGateway for HttpGateway {
    async fn register(&self, req: RegisterRequest) -> Result<AccountDoc, ClientError> {
        self.send(self.http.post(self.url("/api/auth/register")).json(&req))
            .await
    }

    async fn login(&self, req: LoginRequest) -> Result<AuthResponse, ClientError> {
        self.send(self.http.post(self.url("/api/auth/login")).json(&req))
            .await
    }

    fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }
}
