//! Dispatch tests against a small shape hierarchy.

use dyadic::{
    CommutativeRegistry, DispatchError, DyadicError, Orientation, OrderedRegistry,
    RegistryBuilder, RegistryError, TypePair,
    testing::{CallRecorder, RecordedCall},
};

mod common;
use common::{Circle, Rectangle, Shape, Triangle, circle, describe, rect, tri};

#[test]
fn test_exact_pair_lookup() {
    let mut registry = OrderedRegistry::<dyn Shape, String>::new();
    registry.register(rect(), tri(), |a, b| describe(a, b));

    let r = Rectangle { id: 1 };
    let t = Triangle { id: 2 };

    assert_eq!(registry.dispatch(&r, &t).unwrap(), "Rectangle#1 Triangle#2");
}

#[test]
fn test_commutative_lookup_passes_registered_order() {
    let mut registry = CommutativeRegistry::<dyn Shape, String>::new();
    registry.register(rect(), tri(), |a, b| describe(a, b));

    let r = Rectangle { id: 1 };
    let t = Triangle { id: 2 };

    assert!(registry.has_implementation(&t, &r));
    assert_eq!(registry.dispatch(&t, &r).unwrap(), "Rectangle#1 Triangle#2");
}

#[test]
fn test_ordered_registry_rejects_swapped_order() {
    let mut registry = OrderedRegistry::<dyn Shape, String>::new();
    registry.register(rect(), tri(), |a, b| describe(a, b));

    let r = Rectangle { id: 1 };
    let t = Triangle { id: 2 };

    assert!(!registry.has_implementation(&t, &r));
    let err = registry.dispatch(&t, &r).unwrap_err();
    assert_eq!(
        err,
        DispatchError::NoImplementation {
            first: tri(),
            second: rect(),
        }
    );
    assert!(err.to_string().contains("Triangle"));
}

#[test]
fn test_self_pair_keeps_instance_order() {
    let mut registry = CommutativeRegistry::<dyn Shape, String>::new();
    registry.register(rect(), rect(), |a, b| describe(a, b));

    let first = Rectangle { id: 7 };
    let second = Rectangle { id: 8 };

    assert_eq!(
        registry.dispatch(&first, &second).unwrap(),
        "Rectangle#7 Rectangle#8"
    );
    assert_eq!(
        registry.dispatch(&second, &first).unwrap(),
        "Rectangle#8 Rectangle#7"
    );
}

#[test]
fn test_overwrite_invokes_latest_only() {
    let recorder = CallRecorder::new();
    let mut registry = OrderedRegistry::<dyn Shape, bool>::new();
    registry.register(rect(), tri(), recorder.handler::<dyn Shape, _>("first", false));
    registry.register(rect(), tri(), recorder.handler::<dyn Shape, _>("second", true));

    assert!(registry.dispatch(&Rectangle { id: 1 }, &Triangle { id: 2 }).unwrap());
    assert_eq!(recorder.count_of("first"), 0);
    assert_eq!(recorder.count_of("second"), 1);
}

#[test]
fn test_intersection_scenario() {
    let recorder = CallRecorder::new();
    let mut intersects = CommutativeRegistry::<dyn Shape, bool>::new();
    intersects.register(rect(), rect(), recorder.handler::<dyn Shape, _>("rect_rect", true));
    intersects.register(rect(), tri(), recorder.handler::<dyn Shape, _>("rect_tri", true));

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Triangle { id: 1 }),
        Box::new(Rectangle { id: 2 }),
    ];

    assert!(intersects.has_implementation(&*shapes[0], &*shapes[1]));
    assert!(intersects.dispatch(&*shapes[0], &*shapes[1]).unwrap());

    assert_eq!(
        recorder.calls(),
        vec![RecordedCall::new("rect_tri", rect(), tri())]
    );
    assert_eq!(
        intersects.resolve(&*shapes[0], &*shapes[1]),
        Some((TypePair::new(rect(), tri()), Orientation::Swapped))
    );
}

#[test]
fn test_query_agrees_with_dispatch_for_all_pairs() {
    let mut registry = CommutativeRegistry::<dyn Shape, ()>::new();
    registry.register(rect(), rect(), |_, _| ());
    registry.register(rect(), tri(), |_, _| ());
    registry.register(circle(), tri(), |_, _| ());

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle { id: 0 }),
        Box::new(Triangle { id: 0 }),
        Box::new(Circle { id: 0 }),
    ];

    for first in &shapes {
        for second in &shapes {
            let query = registry.has_implementation(&**first, &**second);
            let outcome = registry.dispatch(&**first, &**second);
            assert_eq!(query, outcome.is_ok());
            if !query {
                assert!(outcome.unwrap_err().is_no_implementation());
            }
        }
    }
}

#[test]
fn test_default_fallback_is_explicit() {
    let mut registry = OrderedRegistry::<dyn Shape, bool>::new();
    registry.register(circle(), circle(), |_, _| false);

    let c = Circle { id: 1 };
    let r = Rectangle { id: 2 };

    // Both answers are `false`; only the query tells them apart.
    assert!(!registry.dispatch_or_default(&c, &c));
    assert!(!registry.dispatch_or_default(&c, &r));
    assert!(registry.has_implementation(&c, &c));
    assert!(!registry.has_implementation(&c, &r));
}

#[test]
fn test_typed_handlers() {
    let mut registry = CommutativeRegistry::<dyn Shape, u32>::new();
    registry.register_typed(|r: &Rectangle, t: &Triangle| r.id * 10 + t.id);

    assert_eq!(
        registry
            .dispatch(&Triangle { id: 3 }, &Rectangle { id: 4 })
            .unwrap(),
        43
    );
}

#[test]
fn test_builder() {
    let registry = RegistryBuilder::<dyn Shape, &'static str, true>::new()
        .register_typed(|_: &Rectangle, _: &Rectangle| "rect_rect")
        .register_typed(|_: &Rectangle, _: &Triangle| "rect_tri")
        .build()
        .unwrap();

    assert_eq!(
        registry
            .dispatch(&Triangle { id: 0 }, &Rectangle { id: 0 })
            .unwrap(),
        "rect_tri"
    );

    let strict = RegistryBuilder::<dyn Shape, &'static str, true>::new()
        .reject_duplicates()
        .register_typed(|_: &Rectangle, _: &Triangle| "a")
        .register_typed(|_: &Rectangle, _: &Triangle| "b")
        .build();
    assert_eq!(
        strict.unwrap_err(),
        RegistryError::DuplicatePair {
            first: rect(),
            second: tri(),
        }
    );
}

#[test]
fn test_errors_convert_to_dyadic_error() -> Result<(), DyadicError> {
    type Operand = dyn Shape + 'static;

    fn intersects(first: &Operand, second: &Operand) -> Result<bool, DyadicError> {
        let registry = RegistryBuilder::<dyn Shape, bool, true>::new()
            .reject_duplicates()
            .register_typed(|_: &Rectangle, _: &Triangle| true)
            .build()?;
        Ok(registry.dispatch(first, second)?)
    }

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Triangle { id: 1 }),
        Box::new(Rectangle { id: 2 }),
        Box::new(Circle { id: 3 }),
    ];

    assert!(intersects(&*shapes[0], &*shapes[1])?);

    let err = intersects(&*shapes[2], &*shapes[1]).unwrap_err();
    assert_eq!(
        err,
        DyadicError::Dispatch(DispatchError::NoImplementation {
            first: circle(),
            second: rect(),
        })
    );
    assert!(err.to_string().starts_with("dispatch error:"));
    Ok(())
}
