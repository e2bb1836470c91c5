//! # dyadic-core
//!
//! Core traits for the dyadic double-dispatch registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! crates that define dispatchable hierarchies without pulling in the
//! registry implementations from `dyadic-std`.
//!
//! # Vocabulary
//!
//! ## Identity ([`TypeIdentity`], [`TypeKey`])
//!
//! Every operand taking part in dispatch reports the key of its most-derived
//! type through a virtual accessor. A `dyn Shape` where `Shape: TypeIdentity`
//! answers with the key of the concrete struct behind the pointer, never with
//! the key of `dyn Shape` itself.
//!
//! ## Pairs ([`TypePair`], [`Orientation`])
//!
//! Implementations are stored under an ordered pair of keys. A lookup resolves
//! to a stored pair together with the orientation in which the operands must
//! be handed to the stored callable.
//!
//! ## Dispatch ([`Multimethod`])
//!
//! The seam implemented by every registry: query, dispatch, and dispatch with
//! a default fallback.
//!
//! # Error Types
//!
//! - [`DyadicError`] - Top-level error type
//! - [`DispatchError`] - Lookup and invocation errors
//! - [`RegistryError`] - Registration errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod identity;
mod multimethod;
mod pair;
mod type_key;

// Re-exports
pub use error::{DispatchError, DyadicError, RegistryError};
pub use identity::TypeIdentity;
pub use multimethod::Multimethod;
pub use pair::{Orientation, TypePair};
pub use type_key::TypeKey;
