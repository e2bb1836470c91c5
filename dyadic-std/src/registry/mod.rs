//! # Registry Implementations
//!
//! This module provides the pair-keyed registries:
//!
//! - **Owned**: [`DispatchRegistry`], populated through `&mut self` and
//!   queried through `&self`.
//! - **Shared**: [`SharedRegistry`], a cloneable handle guarded by a
//!   reader-writer lock.
//!
//! # Choosing a Registry
//!
//! | Registry | Use Case | Locking |
//! |----------|----------|---------|
//! | `DispatchRegistry` | Table filled at startup, then read | None, borrow rules |
//! | `SharedRegistry` | Registration while other threads dispatch | `RwLock` per call |
//!
//! # Commutativity
//!
//! Both registries take a `const COMMUTATIVE: bool` parameter. A commutative
//! registry serves a call `(y, x)` from an implementation stored for `(x, y)`
//! and passes the operands as `(x, y)`. Nothing is stored for `(y, x)`.

mod builder;
mod shared;
mod table;

pub use builder::RegistryBuilder;
pub use shared::SharedRegistry;
pub use table::{CommutativeRegistry, DispatchRegistry, OrderedRegistry};

use dyadic_core::{DispatchError, TypeIdentity, TypeKey};
use std::sync::Arc;

/// A registered implementation with its operand types erased to the base.
pub(crate) type ErasedHandler<B, R> =
    Arc<dyn Fn(&B, &B) -> Result<R, DispatchError> + Send + Sync + 'static>;

/// Wrap a handler over the base type.
pub(crate) fn erase<B, R, F>(handler: F) -> ErasedHandler<B, R>
where
    B: ?Sized + 'static,
    R: 'static,
    F: Fn(&B, &B) -> R + Send + Sync + 'static,
{
    Arc::new(move |first: &B, second: &B| -> Result<R, DispatchError> {
        Ok(handler(first, second))
    })
}

/// Wrap a handler over concrete operand types.
///
/// The operands are downcast before the call; an operand whose `as_any` does
/// not agree with its `type_key` yields [`DispatchError::TypeMismatch`].
pub(crate) fn erase_typed<B, R, X, Y, F>(handler: F) -> ErasedHandler<B, R>
where
    B: ?Sized + TypeIdentity + 'static,
    R: 'static,
    X: 'static,
    Y: 'static,
    F: Fn(&X, &Y) -> R + Send + Sync + 'static,
{
    Arc::new(move |first: &B, second: &B| -> Result<R, DispatchError> {
        let first = downcast::<B, X>(first)?;
        let second = downcast::<B, Y>(second)?;
        Ok(handler(first, second))
    })
}

fn downcast<B, T>(operand: &B) -> Result<&T, DispatchError>
where
    B: ?Sized + TypeIdentity,
    T: 'static,
{
    operand
        .as_any()
        .downcast_ref::<T>()
        .ok_or(DispatchError::TypeMismatch {
            expected: TypeKey::of::<T>(),
        })
}
