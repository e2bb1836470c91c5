//! Thread-safe registry handle.
//!
//! Registration takes the write lock; queries and dispatch take the read
//! lock. The handler is cloned out of the table and the lock released before
//! it runs, so a handler may dispatch through the same handle.

use super::table::DispatchRegistry;
use dyadic_core::{
    DispatchError, Multimethod, Orientation, RegistryError, TypeIdentity, TypeKey, TypePair,
};
use parking_lot::RwLock;
use std::{fmt, sync::Arc};

/// A cloneable handle to a [`DispatchRegistry`] shared between threads.
///
/// Clones refer to the same table.
pub struct SharedRegistry<B: ?Sized, R, const COMMUTATIVE: bool> {
    inner: Arc<RwLock<DispatchRegistry<B, R, COMMUTATIVE>>>,
}

impl<B: ?Sized, R, const COMMUTATIVE: bool> SharedRegistry<B, R, COMMUTATIVE> {
    /// Create a handle to an empty registry.
    pub fn new() -> Self {
        Self::from(DispatchRegistry::new())
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Whether the exact ordered pair is stored.
    pub fn contains(&self, first: TypeKey, second: TypeKey) -> bool {
        self.inner.read().contains(first, second)
    }

    /// A point-in-time copy of the table. Later registrations through this
    /// handle do not affect the copy.
    pub fn snapshot(&self) -> DispatchRegistry<B, R, COMMUTATIVE> {
        self.inner.read().clone()
    }
}

impl<B, R, const COMMUTATIVE: bool> SharedRegistry<B, R, COMMUTATIVE>
where
    B: ?Sized + TypeIdentity + 'static,
    R: 'static,
{
    /// Store `handler` for `(first, second)`, replacing any existing handler.
    pub fn register<F>(&self, first: TypeKey, second: TypeKey, handler: F)
    where
        F: Fn(&B, &B) -> R + Send + Sync + 'static,
    {
        self.inner.write().register(first, second, handler);
    }

    /// Store `handler` for `(first, second)` unless the pair already has one.
    pub fn try_register<F>(
        &self,
        first: TypeKey,
        second: TypeKey,
        handler: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(&B, &B) -> R + Send + Sync + 'static,
    {
        self.inner.write().try_register(first, second, handler)
    }

    /// Store a handler written against the concrete operand types.
    pub fn register_typed<X, Y, F>(&self, handler: F)
    where
        X: TypeIdentity + 'static,
        Y: TypeIdentity + 'static,
        F: Fn(&X, &Y) -> R + Send + Sync + 'static,
    {
        self.inner.write().register_typed(handler);
    }

    /// Find the stored pair serving `(first, second)`.
    pub fn resolve(&self, first: &B, second: &B) -> Option<(TypePair, Orientation)> {
        self.inner.read().resolve(first, second)
    }

    /// Whether an implementation serves `(first, second)`.
    pub fn has_implementation(&self, first: &B, second: &B) -> bool {
        self.resolve(first, second).is_some()
    }

    /// Invoke the implementation serving `(first, second)`.
    ///
    /// Same lookup as [`DispatchRegistry::dispatch`].
    pub fn dispatch(&self, first: &B, second: &B) -> Result<R, DispatchError> {
        let (first_key, second_key) = (first.type_key(), second.type_key());
        let found = self
            .inner
            .read()
            .lookup(first_key, second_key)
            .map(|(_, orientation, handler)| (orientation, Arc::clone(handler)));

        match found {
            Some((orientation, handler)) => {
                let (first, second) = orientation.arrange(first, second);
                handler(first, second)
            }
            None => Err(DispatchError::NoImplementation {
                first: first_key,
                second: second_key,
            }),
        }
    }

    /// Invoke the implementation serving `(first, second)`, or return
    /// `R::default()` when none does.
    ///
    /// # Panics
    ///
    /// See [`Multimethod::dispatch_or_default`].
    pub fn dispatch_or_default(&self, first: &B, second: &B) -> R
    where
        R: Default,
    {
        Multimethod::dispatch_or_default(self, first, second)
    }
}

impl<B, R, const COMMUTATIVE: bool> Multimethod<B> for SharedRegistry<B, R, COMMUTATIVE>
where
    B: ?Sized + TypeIdentity + 'static,
    R: 'static,
{
    type Output = R;

    fn has_implementation(&self, first: &B, second: &B) -> bool {
        SharedRegistry::has_implementation(self, first, second)
    }

    fn dispatch(&self, first: &B, second: &B) -> Result<R, DispatchError> {
        SharedRegistry::dispatch(self, first, second)
    }
}

impl<B: ?Sized, R, const COMMUTATIVE: bool> From<DispatchRegistry<B, R, COMMUTATIVE>>
    for SharedRegistry<B, R, COMMUTATIVE>
{
    fn from(registry: DispatchRegistry<B, R, COMMUTATIVE>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}

impl<B: ?Sized, R, const COMMUTATIVE: bool> Default for SharedRegistry<B, R, COMMUTATIVE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ?Sized, R, const COMMUTATIVE: bool> Clone for SharedRegistry<B, R, COMMUTATIVE> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<B: ?Sized, R, const COMMUTATIVE: bool> fmt::Debug for SharedRegistry<B, R, COMMUTATIVE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedRegistry")
            .field(&*self.inner.read())
            .finish()
    }
}
