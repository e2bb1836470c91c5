//! # Dispatch Seam (Multimethod)
//!
//! A multimethod is a function whose implementation is chosen by the runtime
//! types of more than one argument. This trait is the seam every registry in
//! `dyadic-std` implements, so client code can accept either an owned
//! registry or a shared handle.
//!
//! # Contract
//!
//! - [`has_implementation`](Multimethod::has_implementation) returns `true`
//!   exactly when [`dispatch`](Multimethod::dispatch) would invoke a callable.
//! - A callable always receives its operands in the order it was registered
//!   to expect, whatever order the caller used.
//! - Whatever the callable returns is passed back untouched.

use crate::{error::DispatchError, identity::TypeIdentity};

/// A binary operation selected by the dynamic types of both operands.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot dispatch over operands of type `{B}`",
    label = "missing `Multimethod<{B}>` implementation",
    note = "Registries in `dyadic-std` implement `Multimethod` for their base type."
)]
pub trait Multimethod<B: ?Sized + TypeIdentity> {
    /// The value every registered implementation returns.
    type Output;

    /// Whether an implementation serves `(first, second)`.
    fn has_implementation(&self, first: &B, second: &B) -> bool;

    /// Invoke the implementation serving `(first, second)`.
    ///
    /// Fails with [`DispatchError::NoImplementation`] when none does.
    fn dispatch(&self, first: &B, second: &B) -> Result<Self::Output, DispatchError>;

    /// Invoke the implementation serving `(first, second)`, or return
    /// `Output::default()` when none does.
    ///
    /// A default result is indistinguishable from a computed one that happens
    /// to equal it; call [`has_implementation`](Self::has_implementation)
    /// first when that matters.
    ///
    /// # Panics
    ///
    /// Panics on [`DispatchError::TypeMismatch`]: an implementation was found,
    /// so the default would contradict `has_implementation`. The mismatch
    /// means an operand's [`TypeIdentity`] impl reports a key its `as_any`
    /// does not downcast to.
    fn dispatch_or_default(&self, first: &B, second: &B) -> Self::Output
    where
        Self::Output: Default,
    {
        match self.dispatch(first, second) {
            Ok(output) => output,
            Err(DispatchError::NoImplementation { .. }) => Self::Output::default(),
            Err(err) => panic!("inconsistent `TypeIdentity` implementation: {err}"),
        }
    }
}
