//! Infrastructure layer: concrete storage implementations.
//!
//! Holds the implementations of the repository traits declared in
//! [`crate::domain::repositories`]. The service is purely in-memory; nothing
//! here performs I/O.

pub mod memory;
