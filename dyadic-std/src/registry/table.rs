//! Owned pair-keyed dispatch table.

use super::{ErasedHandler, erase, erase_typed};
use dyadic_core::{
    DispatchError, Multimethod, Orientation, RegistryError, TypeIdentity, TypeKey, TypePair,
};
use std::{collections::HashMap, fmt};

/// A registry that selects an implementation by the runtime types of two
/// operands.
///
/// - `B` is the base every operand is viewed through, usually a trait object
///   such as `dyn Shape` where `Shape: TypeIdentity`.
/// - `R` is the value every implementation returns.
/// - `COMMUTATIVE` lets an implementation stored for `(X, Y)` also serve calls
///   made as `(Y, X)`. The operands are then exchanged so the implementation
///   still receives an `X` first.
///
/// # Overwrite Policy
///
/// [`register`](Self::register) replaces whatever was stored for the exact
/// same ordered pair: the last registration wins. Use
/// [`try_register`](Self::try_register) or a strict
/// [`RegistryBuilder`](super::RegistryBuilder) to reject duplicates instead.
/// With commutativity on, `(X, Y)` and `(Y, X)` are still distinct stored
/// pairs and a call in either order prefers the pair that matches it exactly.
///
/// # Example
///
/// ```rust,ignore
/// let mut intersects = CommutativeRegistry::<dyn Shape, bool>::new();
/// intersects.register_typed(|r: &Rectangle, t: &Triangle| rect_tri(r, t));
///
/// // Served by the (Rectangle, Triangle) entry with operands exchanged.
/// intersects.dispatch(&triangle, &rectangle)?;
/// ```
pub struct DispatchRegistry<B: ?Sized, R, const COMMUTATIVE: bool> {
    table: HashMap<TypePair, ErasedHandler<B, R>>,
}

/// A registry whose implementations serve both operand orders.
pub type CommutativeRegistry<B, R> = DispatchRegistry<B, R, true>;

/// A registry whose implementations serve only the order they were stored for.
pub type OrderedRegistry<B, R> = DispatchRegistry<B, R, false>;

impl<B: ?Sized, R, const COMMUTATIVE: bool> DispatchRegistry<B, R, COMMUTATIVE> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Whether implementations serve both operand orders.
    pub const fn is_commutative(&self) -> bool {
        COMMUTATIVE
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether the exact ordered pair is stored. Commutativity is not applied.
    pub fn contains(&self, first: TypeKey, second: TypeKey) -> bool {
        self.table.contains_key(&TypePair::new(first, second))
    }

    /// The stored pairs, in no particular order.
    pub fn pairs(&self) -> impl Iterator<Item = TypePair> + '_ {
        self.table.keys().copied()
    }

    /// Find the stored pair serving operands keyed `(first, second)`.
    ///
    /// The exact pair always wins over the swapped one.
    pub fn resolve_keys(
        &self,
        first: TypeKey,
        second: TypeKey,
    ) -> Option<(TypePair, Orientation)> {
        self.lookup(first, second)
            .map(|(pair, orientation, _)| (pair, orientation))
    }

    pub(crate) fn lookup(
        &self,
        first: TypeKey,
        second: TypeKey,
    ) -> Option<(TypePair, Orientation, &ErasedHandler<B, R>)> {
        let direct = TypePair::new(first, second);
        let found = match self.table.get(&direct) {
            Some(handler) => Some((direct, Orientation::Direct, handler)),
            None if COMMUTATIVE => {
                let swapped = direct.swapped();
                self.table
                    .get(&swapped)
                    .map(|handler| (swapped, Orientation::Swapped, handler))
            }
            None => None,
        };

        #[cfg(feature = "tracing")]
        {
            match &found {
                Some((pair, orientation, _)) => {
                    tracing::trace!(%pair, ?orientation, "resolved implementation");
                }
                None => {
                    tracing::debug!(%first, %second, "no implementation registered");
                }
            }
        }

        found
    }

    fn insert(&mut self, pair: TypePair, handler: ErasedHandler<B, R>) {
        let _replaced = self.table.insert(pair, handler);

        #[cfg(feature = "tracing")]
        {
            if _replaced.is_some() {
                tracing::warn!(%pair, "replacing registered implementation");
            } else {
                tracing::trace!(%pair, "registered implementation");
            }
        }
    }
}

impl<B, R, const COMMUTATIVE: bool> DispatchRegistry<B, R, COMMUTATIVE>
where
    B: ?Sized + TypeIdentity + 'static,
    R: 'static,
{
    /// Store `handler` for operands keyed `(first, second)`.
    ///
    /// Self-pairs are allowed. An existing handler for the same ordered pair
    /// is replaced.
    pub fn register<F>(&mut self, first: TypeKey, second: TypeKey, handler: F)
    where
        F: Fn(&B, &B) -> R + Send + Sync + 'static,
    {
        self.insert(TypePair::new(first, second), erase(handler));
    }

    /// Store `handler` for `(first, second)` unless the ordered pair already
    /// has one, in which case the registry is left unchanged.
    pub fn try_register<F>(
        &mut self,
        first: TypeKey,
        second: TypeKey,
        handler: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(&B, &B) -> R + Send + Sync + 'static,
    {
        let pair = TypePair::new(first, second);
        if self.table.contains_key(&pair) {
            return Err(pair.into());
        }
        self.insert(pair, erase(handler));
        Ok(())
    }

    /// Store a handler written against the concrete operand types.
    ///
    /// The pair is keyed `(TypeKey::of::<X>(), TypeKey::of::<Y>())` and the
    /// handler receives `&X` and `&Y`. Replaces an existing handler like
    /// [`register`](Self::register).
    pub fn register_typed<X, Y, F>(&mut self, handler: F)
    where
        X: TypeIdentity + 'static,
        Y: TypeIdentity + 'static,
        F: Fn(&X, &Y) -> R + Send + Sync + 'static,
    {
        let pair = TypePair::new(TypeKey::of::<X>(), TypeKey::of::<Y>());
        self.insert(pair, erase_typed::<B, R, X, Y, F>(handler));
    }

    /// Find the stored pair serving `(first, second)` and the orientation the
    /// operands would be passed in.
    pub fn resolve(&self, first: &B, second: &B) -> Option<(TypePair, Orientation)> {
        self.resolve_keys(first.type_key(), second.type_key())
    }

    /// Whether an implementation serves `(first, second)`.
    ///
    /// Never invokes a handler.
    pub fn has_implementation(&self, first: &B, second: &B) -> bool {
        self.resolve(first, second).is_some()
    }

    /// Invoke the implementation serving `(first, second)`.
    ///
    /// 1. A handler stored for the exact pair is called as `handler(first, second)`.
    /// 2. Otherwise, in a commutative registry, a handler stored for the
    ///    swapped pair is called as `handler(second, first)`.
    /// 3. Otherwise the call fails with [`DispatchError::NoImplementation`].
    ///
    /// Whatever the handler returns is passed through untouched.
    pub fn dispatch(&self, first: &B, second: &B) -> Result<R, DispatchError> {
        let (first_key, second_key) = (first.type_key(), second.type_key());
        match self.lookup(first_key, second_key) {
            Some((_, orientation, handler)) => {
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

impl<B, R, const COMMUTATIVE: bool> Multimethod<B> for DispatchRegistry<B, R, COMMUTATIVE>
where
    B: ?Sized + TypeIdentity + 'static,
    R: 'static,
{
    type Output = R;

    fn has_implementation(&self, first: &B, second: &B) -> bool {
        DispatchRegistry::has_implementation(self, first, second)
    }

    fn dispatch(&self, first: &B, second: &B) -> Result<R, DispatchError> {
        DispatchRegistry::dispatch(self, first, second)
    }
}

impl<B: ?Sized, R, const COMMUTATIVE: bool> Default for DispatchRegistry<B, R, COMMUTATIVE> {
    fn default() -> Self {
        Self::new()
    }
}

// Handlers are shared, so cloning copies the table and not the closures.
impl<B: ?Sized, R, const COMMUTATIVE: bool> Clone for DispatchRegistry<B, R, COMMUTATIVE> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<B: ?Sized, R, const COMMUTATIVE: bool> fmt::Debug for DispatchRegistry<B, R, COMMUTATIVE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<_> = self.pairs().collect();
        pairs.sort();
        f.debug_struct("DispatchRegistry")
            .field("commutative", &COMMUTATIVE)
            .field("pairs", &pairs)
            .finish()
    }
}
