//! `billpad-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO beyond reading the
//! clock and the thread RNG inside [`SystemIdentity`]).

pub mod entity;
pub mod error;
pub mod id;
pub mod identity;
pub mod value_object;

pub use entity::Entity;
pub use error::DomainError;
pub use id::{InvoiceNumber, LineItemId};
pub use identity::{IdentitySource, SequentialIdentity, SystemIdentity};
pub use value_object::ValueObject;
