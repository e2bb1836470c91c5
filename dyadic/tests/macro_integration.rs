//! Integration tests for dyadic macros.

#![cfg(feature = "macros")]

use dyadic::{TypeIdentity, TypeKey, dispatch_table};

trait Shape: TypeIdentity {}

#[derive(TypeIdentity)]
struct Rectangle {
    width: u32,
}

#[derive(TypeIdentity)]
struct Triangle {
    base: u32,
}

#[derive(TypeIdentity)]
struct Wrapper<T> {
    inner: T,
}

impl Shape for Rectangle {}
impl Shape for Triangle {}
impl<T: 'static> Shape for Wrapper<T> {}

fn rect_rect(a: &Rectangle, b: &Rectangle) -> u32 {
    a.width + b.width
}

fn rect_tri(r: &Rectangle, t: &Triangle) -> u32 {
    r.width * 100 + t.base
}

#[test]
fn test_derive_reports_concrete_type() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle { width: 1 }),
        Box::new(Triangle { base: 2 }),
        Box::new(Wrapper { inner: 3u8 }),
    ];

    assert_eq!(shapes[0].type_key(), TypeKey::of::<Rectangle>());
    assert_eq!(shapes[1].type_key(), TypeKey::of::<Triangle>());
    assert_eq!(shapes[2].type_key(), TypeKey::of::<Wrapper<u8>>());
    assert_ne!(shapes[2].type_key(), TypeKey::of::<Wrapper<u16>>());
    assert!(shapes[1].as_any().downcast_ref::<Triangle>().is_some());

    let Some(wrapper) = shapes[2].as_any().downcast_ref::<Wrapper<u8>>() else {
        panic!("expected Wrapper<u8>");
    };
    assert_eq!(wrapper.inner, 3);
}

#[test]
fn test_dispatch_table_commutative() {
    let table = dispatch_table! {
        dyn Shape => u32, commutative;
        (Rectangle, Rectangle) => rect_rect,
        (Rectangle, Triangle) => rect_tri,
    };

    assert!(table.is_commutative());
    assert_eq!(table.len(), 2);

    let r = Rectangle { width: 4 };
    let t = Triangle { base: 5 };
    assert_eq!(table.dispatch(&t, &r).unwrap(), 405);
    assert_eq!(table.dispatch(&r, &Rectangle { width: 6 }).unwrap(), 10);
}

#[test]
fn test_dispatch_table_ordered_by_default() {
    let table = dispatch_table! {
        dyn Shape => u32;
        (Rectangle, Triangle) => |r: &Rectangle, t: &Triangle| r.width + t.base,
    };

    assert!(!table.is_commutative());
    let r = Rectangle { width: 1 };
    let t = Triangle { base: 1 };
    assert_eq!(table.dispatch(&r, &t).unwrap(), 2);
    assert!(!table.has_implementation(&t, &r));
}
