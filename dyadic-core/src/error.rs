//! Error types for dyadic.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DyadicError`] - Top-level error type for all dyadic operations
//! - [`DispatchError`] - Errors during lookup and invocation
//! - [`RegistryError`] - Errors during registration

use crate::{pair::TypePair, type_key::TypeKey};
use thiserror::Error;

/// Top-level error type for all dyadic operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DyadicError {
    /// An error occurred during dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// An error occurred during registration.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Errors that can occur during dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No stored pair serves the operands, accounting for commutativity.
    ///
    /// The keys are reported in call order.
    #[error("no implementation registered for ({first}, {second})")]
    NoImplementation {
        /// Key of the first operand as passed by the caller.
        first: TypeKey,
        /// Key of the second operand as passed by the caller.
        second: TypeKey,
    },

    /// A typed handler received an operand that reports the key it was
    /// registered for but does not downcast to that type.
    ///
    /// Points at a `TypeIdentity` impl whose `type_key` and `as_any` disagree.
    #[error("operand claims to be `{expected}` but does not downcast to it")]
    TypeMismatch {
        /// The type the operand claimed and the handler was registered for.
        expected: TypeKey,
    },
}

impl DispatchError {
    /// Whether this is the no-implementation case.
    pub fn is_no_implementation(&self) -> bool {
        matches!(self, DispatchError::NoImplementation { .. })
    }
}

/// Errors that can occur during registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The ordered pair already has an implementation.
    #[error("implementation already registered for ({first}, {second})")]
    DuplicatePair {
        /// Key of the first operand.
        first: TypeKey,
        /// Key of the second operand.
        second: TypeKey,
    },
}

impl From<TypePair> for RegistryError {
    fn from(pair: TypePair) -> Self {
        RegistryError::DuplicatePair {
            first: pair.first,
            second: pair.second,
        }
    }
}
