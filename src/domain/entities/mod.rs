//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL with its click analytics
//! - [`Visit`] - One recorded redirect occurrence
//!
//! Creation inputs follow the "new type" pattern ([`NewLink`],
//! [`VisitContext`]): plain structs carrying only caller-supplied data, from
//! which the store materializes the entity.

pub mod link;
pub mod visit;

pub use link::{Link, NewLink};
pub use visit::{DIRECT_REFERRER, Visit, VisitContext};
