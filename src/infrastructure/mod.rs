//! Infrastructure layer: database repositories and session storage.

pub mod persistence;
pub mod session;
