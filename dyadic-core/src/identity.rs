//! # Identity Capability (TypeIdentity)
//!
//! The single capability a hierarchy needs in order to take part in dispatch:
//! given a live instance, report the key of its concrete runtime type.
//!
//! Make it a supertrait of the hierarchy's base trait:
//!
//! ```rust,ignore
//! trait Shape: TypeIdentity {}
//!
//! #[derive(TypeIdentity)]
//! struct Rectangle;
//! impl Shape for Rectangle {}
//! ```
//!
//! Calls through `&dyn Shape` then go through the vtable and answer with the
//! key of `Rectangle`.

use crate::type_key::TypeKey;
use std::{any::Any, rc::Rc, sync::Arc};

/// Reports the most-derived type of a value.
///
/// Implementations for concrete types must return `TypeKey::of::<Self>()`
/// from [`type_key`](Self::type_key) and `self` from
/// [`as_any`](Self::as_any); typed handlers rely on both agreeing.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `TypeIdentity`",
    label = "missing `TypeIdentity` implementation",
    note = "Derive it with `#[derive(TypeIdentity)]` or return `TypeKey::of::<Self>()` by hand."
)]
pub trait TypeIdentity {
    /// The key of the concrete type behind `self`.
    fn type_key(&self) -> TypeKey;

    /// `self` as [`Any`], for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;
}

// Smart pointers answer for their pointee so that `Box<dyn Shape>` never
// reports the key of the box.
impl<T: TypeIdentity + ?Sized> TypeIdentity for Box<T> {
    fn type_key(&self) -> TypeKey {
        (**self).type_key()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }
}

impl<T: TypeIdentity + ?Sized> TypeIdentity for Rc<T> {
    fn type_key(&self) -> TypeKey {
        (**self).type_key()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }
}

impl<T: TypeIdentity + ?Sized> TypeIdentity for Arc<T> {
    fn type_key(&self) -> TypeKey {
        (**self).type_key()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }
}
