//! Testing utilities for dyadic.
//!
//! This module provides utilities to make testing registries and the
//! handlers stored in them easier.
//!
//! # Features
//!
//! - [`CallRecorder`]: Builds handlers that record which handler ran and the
//!   keys of the operands it received, in the order it received them

use dyadic_core::{TypeIdentity, TypeKey};
use std::sync::{Arc, Mutex};

// ============================================================================
// Recorded Call
// ============================================================================

/// One handler invocation observed by a [`CallRecorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedCall {
    /// Name given to the handler when it was created.
    pub handler: &'static str,
    /// Key of the operand the handler received first.
    pub first: TypeKey,
    /// Key of the operand the handler received second.
    pub second: TypeKey,
}

impl RecordedCall {
    /// Create a record, mostly for comparing against in assertions.
    pub fn new(handler: &'static str, first: TypeKey, second: TypeKey) -> Self {
        Self {
            handler,
            first,
            second,
        }
    }
}

// ============================================================================
// Call Recorder
// ============================================================================

/// Builds handlers that record their invocations.
///
/// Clones share the same record.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = CallRecorder::new();
/// let mut registry = CommutativeRegistry::<dyn Shape, bool>::new();
/// registry.register(rect, tri, recorder.handler("rect_tri", true));
///
/// registry.dispatch(&triangle, &rectangle)?;
///
/// assert_eq!(
///     recorder.calls(),
///     vec![RecordedCall::new("rect_tri", rect, tri)]
/// );
/// ```
#[derive(Debug, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl CallRecorder {
    /// Create a recorder with no calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler named `name` that records each call and returns a clone of
    /// `output`.
    pub fn handler<B, R>(
        &self,
        name: &'static str,
        output: R,
    ) -> impl Fn(&B, &B) -> R + Send + Sync + 'static + use<B, R>
    where
        B: ?Sized + TypeIdentity + 'static,
        R: Clone + Send + Sync + 'static,
    {
        let calls = self.calls.clone();
        move |first: &B, second: &B| {
            calls.lock().unwrap().push(RecordedCall {
                handler: name,
                first: first.type_key(),
                second: second.type_key(),
            });
            output.clone()
        }
    }

    /// Get a clone of the recorded calls, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The most recent call.
    pub fn last(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().copied()
    }

    /// Get the number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Number of calls made to the handler named `name`.
    pub fn count_of(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.handler == name)
            .count()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Clone for CallRecorder {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}
