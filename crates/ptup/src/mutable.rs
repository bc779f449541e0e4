//! Mutable counterpart of [`PTuple4`].

use std::fmt;
use std::hash::{Hash, Hasher};

use ptup_core::Kind;

use crate::frozen::PTuple4;
use crate::tuple::{Tuple4, append_tuple, tuple_eq, tuple_hash};

const MUTABLE_PREFIX: &str = "tup4";

#[derive(Clone, Debug)]
pub struct MTuple4<T> {
    x: T,
    y: T,
    z: T,
    w: T,
}

impl<T: Kind> MTuple4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn splat(v: T) -> Self {
        Self::new(v.clone(), v.clone(), v.clone(), v)
    }

    pub fn from_tuple<S: Tuple4<T> + ?Sized>(src: &S) -> Self {
        Self::new(src.x().clone(), src.y().clone(), src.z().clone(), src.w().clone())
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

    pub fn set_x(&mut self, x: T) -> &mut Self {
        self.x = x;
        self
    }

    pub fn set_y(&mut self, y: T) -> &mut Self {
        self.y = y;
        self
    }

    pub fn set_z(&mut self, z: T) -> &mut Self {
        self.z = z;
        self
    }

    pub fn set_w(&mut self, w: T) -> &mut Self {
        self.w = w;
        self
    }

    pub fn set(&mut self, x: T, y: T, z: T, w: T) -> &mut Self {
        *self = Self::new(x, y, z, w);
        self
    }

    /// Snapshot of the current components as an immutable tuple.
    pub fn freeze(&self) -> PTuple4<T> {
        PTuple4::from_tuple(self)
    }
}

impl<T: Kind> Tuple4<T> for MTuple4<T> {
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

impl<T: Kind> PartialEq for MTuple4<T> {
    fn eq(&self, other: &Self) -> bool {
        tuple_eq(self, other)
    }
}

impl<T: Kind> PartialEq<PTuple4<T>> for MTuple4<T> {
    fn eq(&self, other: &PTuple4<T>) -> bool {
        tuple_eq(self, other)
    }
}

impl<T: Kind> Eq for MTuple4<T> {}

// Same hash as the frozen tuple with equal components.
impl<T: Kind> Hash for MTuple4<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        tuple_hash(self, state);
    }
}

impl<T: Kind> fmt::Display for MTuple4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(32);
        append_tuple(&mut out, MUTABLE_PREFIX, self);
        f.write_str(&out)
    }
}

impl<T: Kind> From<[T; 4]> for MTuple4<T> {
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: Kind> From<PTuple4<T>> for MTuple4<T> {
    fn from(t: PTuple4<T>) -> Self {
        let [x, y, z, w]: [T; 4] = t.into();
        Self::new(x, y, z, w)
    }
}
