//! # Alumnet Shared
//!
//! Wire-level types shared between the server and the client crate.
//! The legacy collection surface serializes with camelCase field names
//! (`isVerified`, `rollNo`, `modifiedCount`) for compatibility with the
//! documented REST interface.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
