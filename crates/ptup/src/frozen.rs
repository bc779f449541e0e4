//! Immutable 4-tuple.
//!
//! A `PTuple4` is fully initialized by one of its constructors and never
//! changes afterwards. Equality is structural: a frozen tuple equals any
//! [`MTuple4`] of the same kind holding the same components.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use ptup_core::errors::messages::{ABSENT_COMPONENT, ABSENT_SOURCE, WRONG_ARITY};
use ptup_core::{Component, Kind, Obj, TupleError, TupleResult};

use crate::mutable::MTuple4;
use crate::tuple::{Tuple4, append_tuple, tuple_eq, tuple_hash};

pub(crate) const FROZEN_PREFIX: &str = "ptup4";

#[derive(Clone, Debug)]
pub struct PTuple4<T> {
    x: T,
    y: T,
    z: T,
    w: T,
}

fn required<T>(value: Option<T>, name: &str) -> TupleResult<T> {
    value.ok_or_else(|| {
        log::debug!("rejecting tuple construction: {} {}", name, ABSENT_COMPONENT);
        TupleError::invalid_argument(format!("{} {}", name, ABSENT_COMPONENT))
    })
}

impl<T: Kind> PTuple4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Broadcasts one value to all four components.
    pub fn splat(v: T) -> Self {
        Self::new(v.clone(), v.clone(), v.clone(), v)
    }

    /// Copies the components of any four-component source.
    pub fn from_tuple<S: Tuple4<T> + ?Sized>(src: &S) -> Self {
        Self::new(src.x().clone(), src.y().clone(), src.z().clone(), src.w().clone())
    }

    pub fn try_from_source<S: Tuple4<T> + ?Sized>(src: Option<&S>) -> TupleResult<Self> {
        match src {
            Some(src) => Ok(Self::from_tuple(src)),
            None => {
                log::debug!("rejecting tuple construction: {}", ABSENT_SOURCE);
                Err(TupleError::invalid_argument(ABSENT_SOURCE))
            }
        }
    }

    /// Builds from four optional components; the first absent one is reported.
    pub fn try_from_options(
        x: Option<T>,
        y: Option<T>,
        z: Option<T>,
        w: Option<T>,
    ) -> TupleResult<Self> {
        Ok(Self::new(
            required(x, "x")?,
            required(y, "y")?,
            required(z, "z")?,
            required(w, "w")?,
        ))
    }

    pub fn try_from_slice(values: &[T]) -> TupleResult<Self> {
        match values {
            [x, y, z, w] => Ok(Self::new(x.clone(), y.clone(), z.clone(), w.clone())),
            _ => {
                log::debug!(
                    "rejecting tuple construction: {} (got {})",
                    WRONG_ARITY,
                    values.len()
                );
                Err(TupleError::invalid_argument(format!(
                    "{}, got {}",
                    WRONG_ARITY,
                    values.len()
                )))
            }
        }
    }

    #[inline]
    pub fn x(&self) -> &T {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &T {
        &self.y
    }

    #[inline]
    pub fn z(&self) -> &T {
        &self.z
    }

    #[inline]
    pub fn w(&self) -> &T {
        &self.w
    }

    pub fn to_array(&self) -> [T; 4] {
        [self.x.clone(), self.y.clone(), self.z.clone(), self.w.clone()]
    }

    pub fn thaw(&self) -> MTuple4<T> {
        MTuple4::from_tuple(self)
    }

    /// Dynamic equality. False for `None` and for anything that is not a
    /// frozen or mutable tuple of the same kind.
    pub fn eq_any(&self, other: Option<&dyn Any>) -> bool {
        let Some(other) = other else {
            return false;
        };
        if let Some(frozen) = other.downcast_ref::<PTuple4<T>>() {
            tuple_eq(self, frozen)
        } else if let Some(mutable) = other.downcast_ref::<MTuple4<T>>() {
            tuple_eq(self, mutable)
        } else {
            false
        }
    }
}

impl<T: Kind> Tuple4<T> for PTuple4<T> {
    fn x(&self) -> &T {
        &self.x
    }
    fn y(&self) -> &T {
        &self.y
    }
    fn z(&self) -> &T {
        &self.z
    }
    fn w(&self) -> &T {
        &self.w
    }
}

impl<T: Kind> PartialEq for PTuple4<T> {
    fn eq(&self, other: &Self) -> bool {
        tuple_eq(self, other)
    }
}

impl<T: Kind> PartialEq<MTuple4<T>> for PTuple4<T> {
    fn eq(&self, other: &MTuple4<T>) -> bool {
        tuple_eq(self, other)
    }
}

impl<T: Kind> Eq for PTuple4<T> {}

impl<T: Kind> Hash for PTuple4<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        tuple_hash(self, state);
    }
}

impl<T: Kind> fmt::Display for PTuple4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(32);
        append_tuple(&mut out, FROZEN_PREFIX, self);
        f.write_str(&out)
    }
}

// Lets a frozen tuple sit inside an object tuple.
impl<T: Kind> Component for PTuple4<T> {
    fn same(&self, other: &Self) -> bool {
        tuple_eq(self, other)
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        tuple_hash(self, state);
    }

    fn append_to(&self, out: &mut String) {
        append_tuple(out, FROZEN_PREFIX, self);
    }
}

impl<T: Kind> From<[T; 4]> for PTuple4<T> {
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: Kind> From<PTuple4<T>> for [T; 4] {
    fn from(t: PTuple4<T>) -> Self {
        [t.x, t.y, t.z, t.w]
    }
}

impl<T: Kind> From<&MTuple4<T>> for PTuple4<T> {
    fn from(t: &MTuple4<T>) -> Self {
        Self::from_tuple(t)
    }
}

impl<T: Kind> From<PTuple4<T>> for Obj {
    fn from(t: PTuple4<T>) -> Self {
        Obj::new(t)
    }
}
