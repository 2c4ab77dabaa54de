//! `forgeerp-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the shared error model, strongly-typed identifiers and the acting user.

pub mod error;
pub mod id;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use id::{SalesDocumentId, UserId};
pub use user::User;
