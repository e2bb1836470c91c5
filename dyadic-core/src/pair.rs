//! Ordered key pairs and lookup orientation.

use crate::type_key::TypeKey;
use std::fmt;

/// An ordered pair of type keys.
///
/// The order is the argument order the stored callable expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypePair {
    /// Key of the first operand.
    pub first: TypeKey,
    /// Key of the second operand.
    pub second: TypeKey,
}

impl TypePair {
    /// Create a pair from two keys.
    pub const fn new(first: TypeKey, second: TypeKey) -> Self {
        Self { first, second }
    }

    /// The pair with its keys exchanged.
    pub const fn swapped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Whether both keys are the same type.
    pub fn is_self_pair(&self) -> bool {
        self.first == self.second
    }
}

impl From<(TypeKey, TypeKey)> for TypePair {
    fn from((first, second): (TypeKey, TypeKey)) -> Self {
        Self::new(first, second)
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// How the operands of a call line up with the stored pair that serves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The operands are passed in call order.
    Direct,
    /// The operands are exchanged before the call. Only produced by
    /// commutative registries.
    Swapped,
}

impl Orientation {
    /// Put `(first, second)` into the order the stored callable expects.
    pub fn arrange<T>(self, first: T, second: T) -> (T, T) {
        match self {
            Orientation::Direct => (first, second),
            Orientation::Swapped => (second, first),
        }
    }
}
