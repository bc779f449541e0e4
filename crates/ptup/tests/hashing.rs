use ahash::RandomState;
use hashbrown::{HashMap, HashSet};
use ptup::{Obj, PTuple4Obj, PTuple4Str, PTuple4f, PTuple4i, Tuple4f, Tuple4i};

fn fast_hasher() -> RandomState {
    RandomState::with_seeds(0, 0, 0, 0)
}

#[test]
fn equal_tuples_collapse_in_a_set() {
    let mut set = HashSet::with_hasher(fast_hasher());
    set.insert(PTuple4i::new(1, 2, 3, 4));
    set.insert(PTuple4i::new(1, 2, 3, 4));
    set.insert(PTuple4i::splat(1));
    assert_eq!(set.len(), 2);
    assert!(set.contains(&PTuple4i::from([1, 2, 3, 4])));
}

#[test]
fn frozen_and_mutable_hash_alike() {
    let s = fast_hasher();
    let frozen = PTuple4f::new(1.1, 2.2, 3.3, 4.4);
    let mutable = Tuple4f::new(1.1, 2.2, 3.3, 4.4);
    assert_eq!(frozen, mutable);
    assert_eq!(s.hash_one(&frozen), s.hash_one(&mutable));

    let nan = PTuple4f::splat(f32::NAN);
    assert_eq!(s.hash_one(&nan), s.hash_one(&nan.clone()));
}

#[test]
fn strings_as_map_keys() {
    let mut map = HashMap::with_hasher(fast_hasher());
    map.insert(
        PTuple4Str::new("a".into(), "b".into(), "c".into(), "d".into()),
        1,
    );
    let probe = PTuple4Str::new(
        String::from("a").into(),
        String::from("b").into(),
        String::from("c").into(),
        String::from("d").into(),
    );
    assert_eq!(map.get(&probe), Some(&1));
}

#[test]
fn object_tuples_as_map_keys() {
    let mut map = HashMap::with_hasher(fast_hasher());
    map.insert(
        PTuple4Obj::new(1i32.into(), "arg2".into(), 3.3f64.into(), 'd'.into()),
        "first",
    );
    map.insert(
        PTuple4Obj::new(1i64.into(), "arg2".into(), 3.3f64.into(), 'd'.into()),
        "second",
    );
    assert_eq!(map.len(), 2);

    let probe = PTuple4Obj::new(Obj::from(1i32), "arg2".into(), 3.3f64.into(), 'd'.into());
    assert_eq!(map.get(&probe), Some(&"first"));
}

#[test]
fn mutable_tuples_hash_by_current_components() {
    let s = fast_hasher();
    let mut m = Tuple4i::splat(0);
    let before = s.hash_one(&m);
    m.set_y(1);
    assert_ne!(m, Tuple4i::splat(0));
    assert_eq!(s.hash_one(&m), s.hash_one(&PTuple4i::new(0, 1, 0, 0)));
    assert_eq!(before, s.hash_one(&PTuple4i::splat(0)));
}
