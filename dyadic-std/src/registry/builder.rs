//! Builder for constructing a [`DispatchRegistry`].

use super::table::DispatchRegistry;
use dyadic_core::{RegistryError, TypeIdentity, TypeKey, TypePair};

/// Builder for constructing a [`DispatchRegistry`].
///
/// By default later registrations for the same ordered pair replace earlier
/// ones, exactly like [`DispatchRegistry::register`]. Call
/// [`reject_duplicates`](Self::reject_duplicates) to make
/// [`build`](Self::build) fail on the first duplicate instead.
///
/// # Example
///
/// ```rust,ignore
/// let intersects = RegistryBuilder::<dyn Shape, bool, true>::new()
///     .reject_duplicates()
///     .register_typed(|a: &Rectangle, b: &Rectangle| rect_rect(a, b))
///     .register_typed(|r: &Rectangle, t: &Triangle| rect_tri(r, t))
///     .build()?;
/// ```
pub struct RegistryBuilder<B: ?Sized, R, const COMMUTATIVE: bool> {
    registry: DispatchRegistry<B, R, COMMUTATIVE>,
    strict: bool,
    duplicate: Option<TypePair>,
}

impl<B: ?Sized, R, const COMMUTATIVE: bool> Default for RegistryBuilder<B, R, COMMUTATIVE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: ?Sized, R, const COMMUTATIVE: bool> RegistryBuilder<B, R, COMMUTATIVE> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            registry: DispatchRegistry::new(),
            strict: false,
            duplicate: None,
        }
    }

    /// Fail the build when an ordered pair is registered twice.
    pub fn reject_duplicates(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Whether this registration may proceed. Records the first duplicate
    /// seen in strict mode.
    fn admit(&mut self, pair: TypePair) -> bool {
        if self.strict && self.registry.contains(pair.first, pair.second) {
            self.duplicate.get_or_insert(pair);
            return false;
        }
        true
    }
}

impl<B, R, const COMMUTATIVE: bool> RegistryBuilder<B, R, COMMUTATIVE>
where
    B: ?Sized + TypeIdentity + 'static,
    R: 'static,
{
    /// Register a handler for operands keyed `(first, second)`.
    pub fn register<F>(mut self, first: TypeKey, second: TypeKey, handler: F) -> Self
    where
        F: Fn(&B, &B) -> R + Send + Sync + 'static,
    {
        if self.admit(TypePair::new(first, second)) {
            self.registry.register(first, second, handler);
        }
        self
    }

    /// Register a handler written against the concrete operand types.
    pub fn register_typed<X, Y, F>(mut self, handler: F) -> Self
    where
        X: TypeIdentity + 'static,
        Y: TypeIdentity + 'static,
        F: Fn(&X, &Y) -> R + Send + Sync + 'static,
    {
        if self.admit(TypePair::new(TypeKey::of::<X>(), TypeKey::of::<Y>())) {
            self.registry.register_typed(handler);
        }
        self
    }

    /// Build the registry.
    pub fn build(self) -> Result<DispatchRegistry<B, R, COMMUTATIVE>, RegistryError> {
        match self.duplicate {
            Some(pair) => Err(pair.into()),
            None => Ok(self.registry),
        }
    }
}
