//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user record, its identifier and the request payload shape live here.

pub mod constants;
pub mod error;
pub mod id;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use id::{IdGenerator, RandomIds};
pub use user::{User, UserId, UserPayload};
