//! # dyadic-std
//!
//! Registry implementations for the dyadic double-dispatch framework.
//!
//! This crate provides:
//! - **Owned registry**: [`DispatchRegistry`], a pair-keyed table of handlers
//! - **Construction**: [`RegistryBuilder`] with an optional strict duplicate check
//! - **Shared registry**: [`SharedRegistry`], a cloneable handle for registration
//!   and dispatch from several threads
//! - **Testing utilities**: [`testing::CallRecorder`]
//!
//! [`DispatchRegistry`]: registry::DispatchRegistry
//! [`RegistryBuilder`]: registry::RegistryBuilder
//! [`SharedRegistry`]: registry::SharedRegistry

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use dyadic_core;

// Modules
pub mod registry;
pub mod testing;
