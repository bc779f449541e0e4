//! The four-accessor capability shared by frozen and mutable tuples.

use std::hash::Hasher;

use ptup_core::{Appendable, Component, Kind};

/// Anything exposing four same-kind components named x, y, z and w.
pub trait Tuple4<T> {
    fn x(&self) -> &T;
    fn y(&self) -> &T;
    fn z(&self) -> &T;
    fn w(&self) -> &T;
}

impl<T> Tuple4<T> for [T; 4] {
    fn x(&self) -> &T {
        &self[0]
    }
    fn y(&self) -> &T {
        &self[1]
    }
    fn z(&self) -> &T {
        &self[2]
    }
    fn w(&self) -> &T {
        &self[3]
    }
}

/// Component-wise equality in x, y, z, w order, stopping at the first mismatch.
pub fn tuple_eq<T, A, B>(a: &A, b: &B) -> bool
where
    T: Component,
    A: Tuple4<T> + ?Sized,
    B: Tuple4<T> + ?Sized,
{
    a.x().same(b.x()) && a.y().same(b.y()) && a.z().same(b.z()) && a.w().same(b.w())
}

pub fn tuple_hash<T, A, H>(t: &A, state: &mut H)
where
    T: Component,
    A: Tuple4<T> + ?Sized,
    H: Hasher,
{
    t.x().hash_into(state);
    t.y().hash_into(state);
    t.z().hash_into(state);
    t.w().hash_into(state);
}

/// Renders `<prefix><tag>(x=.., y=.., z=.., w=..)`.
pub(crate) fn append_tuple<T, A>(out: &mut String, prefix: &str, t: &A)
where
    T: Kind,
    A: Tuple4<T> + ?Sized,
{
    out.append_str(prefix);
    out.append_str(T::TAG);
    out.append_str("(x=");
    t.x().append_to(out);
    out.append_str(", y=");
    t.y().append_to(out);
    out.append_str(", z=");
    t.z().append_to(out);
    out.append_str(", w=");
    t.w().append_to(out);
    out.append_char(')');
}
