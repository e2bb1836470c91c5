//! Shared fixtures for integration tests.

#![allow(dead_code)]

use dyadic::{TypeIdentity, TypeKey};
use std::any::Any;

/// Base of the test hierarchy.
pub trait Shape: TypeIdentity + Send + Sync {
    /// Distinguishes instances of the same type.
    fn id(&self) -> u32;
}

macro_rules! shape {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub id: u32,
        }

        impl TypeIdentity for $name {
            fn type_key(&self) -> TypeKey {
                TypeKey::of::<Self>()
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        impl Shape for $name {
            fn id(&self) -> u32 {
                self.id
            }
        }
    };
}

shape!(Rectangle);
shape!(Triangle);
shape!(Circle);

pub fn rect() -> TypeKey {
    TypeKey::of::<Rectangle>()
}

pub fn tri() -> TypeKey {
    TypeKey::of::<Triangle>()
}

pub fn circle() -> TypeKey {
    TypeKey::of::<Circle>()
}

/// Handler that reports the operand order it saw as `(type, id)` pairs.
pub fn describe(first: &dyn Shape, second: &dyn Shape) -> String {
    format!(
        "{}#{} {}#{}",
        short_name(first.type_key()),
        first.id(),
        short_name(second.type_key()),
        second.id()
    )
}

fn short_name(key: TypeKey) -> &'static str {
    key.name().rsplit("::").next().unwrap_or(key.name())
}
