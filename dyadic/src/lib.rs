//! # dyadic - Runtime Double Dispatch
//!
//! `dyadic` selects one of several implementations of a binary operation by
//! the runtime types of both operands, the classic double-dispatch problem.
//! The operand hierarchy only has to report its concrete type; it never has
//! to know which operations are defined over it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dyadic::prelude::*;
//!
//! trait Shape: TypeIdentity {}
//!
//! #[derive(TypeIdentity)]
//! struct Rectangle;
//! #[derive(TypeIdentity)]
//! struct Triangle;
//!
//! impl Shape for Rectangle {}
//! impl Shape for Triangle {}
//!
//! fn rect_tri(r: &Rectangle, t: &Triangle) -> bool { ... }
//!
//! let mut intersects = CommutativeRegistry::<dyn Shape, bool>::new();
//! intersects.register_typed(rect_tri);
//!
//! let shapes: Vec<Box<dyn Shape>> = vec![Box::new(Triangle), Box::new(Rectangle)];
//!
//! // Calls rect_tri(rectangle, triangle).
//! let hit = intersects.dispatch(&*shapes[0], &*shapes[1])?;
//! ```
//!
//! ## Missing Implementations
//!
//! [`DispatchRegistry::dispatch`] fails with
//! [`DispatchError::NoImplementation`] when no stored pair serves the
//! operands. [`DispatchRegistry::dispatch_or_default`] returns `R::default()`
//! instead, and [`DispatchRegistry::has_implementation`] answers the question
//! without invoking anything.
//!
//! ## Features
//!
//! - `macros`: `#[derive(TypeIdentity)]` and [`dispatch_table!`]
//! - `tracing`: registration and lookup events through `tracing`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Errors
pub use dyadic_core::{DispatchError, DyadicError, RegistryError};

// Dispatch seam
pub use dyadic_core::Multimethod;

// Identity
pub use dyadic_core::{TypeIdentity, TypeKey};

// Pairs
pub use dyadic_core::{Orientation, TypePair};

// Registries
pub use dyadic_std::registry::{
    CommutativeRegistry, DispatchRegistry, OrderedRegistry, RegistryBuilder, SharedRegistry,
};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use dyadic_std::testing::*;
}

/// Prelude module - common imports for dyadic.
///
/// # Usage
///
/// ```rust,ignore
/// use dyadic::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        CommutativeRegistry, DispatchError, DispatchRegistry, Multimethod, OrderedRegistry,
        RegistryBuilder, SharedRegistry, TypeIdentity, TypeKey,
    };

    #[cfg(feature = "macros")]
    pub use crate::dispatch_table;
}

#[cfg(feature = "macros")]
pub use dyadic_macros::{TypeIdentity, dispatch_table};
