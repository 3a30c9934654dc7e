//! # Alumnet Client
//!
//! Client-side core of the alumni network: typed wrappers over the REST
//! surface, the admin moderation queue, the public board views and the
//! persisted session.
//!
//! All mutating flows follow the same synchronization contract: issue the
//! request, surface an error and leave cached state untouched on failure,
//! and reconcile through an authoritative reload on success. The one
//! exception is the comment append, which mirrors the submitted comment
//! locally once the server reports a modified count of at least one.

pub mod board;
pub mod gateway;
pub mod notice;
pub mod queue;
pub mod session;

pub use board::{Board, Commentable};
pub use gateway::{AuthGateway, BoardGateway, ClientError, HttpGateway, QueueGateway};
pub use notice::Notice;
pub use queue::ModerationQueue;
pub use session::{Session, SessionManager};
