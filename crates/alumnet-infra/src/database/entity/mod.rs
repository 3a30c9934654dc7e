//! SeaORM entities. Comment lists live in a JSON column; the store is
//! treated as an opaque document store, no cross-entity joins.

pub mod account;
pub mod event_posting;
pub mod job_posting;
