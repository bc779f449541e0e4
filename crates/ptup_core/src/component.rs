//! Component kinds.
//!
//! Every value stored in a tuple implements [`Component`]. The six kinds that
//! can parameterize a tuple additionally implement [`Kind`], which supplies the
//! short tag used in the tuple's display form.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::appendable::Appendable;

/// Value-level behavior shared by every tuple component.
pub trait Component: Clone + fmt::Debug + Send + Sync + 'static {
    /// Native equality of the kind. Must be reflexive and agree with `hash_into`.
    fn same(&self, other: &Self) -> bool;

    fn hash_into<H: Hasher>(&self, state: &mut H);

    /// Appends the natural display form of the value.
    fn append_to(&self, out: &mut String);
}

/// A component kind that can parameterize a tuple.
pub trait Kind: Component {
    /// Suffix after `ptup4` in the display form, e.g. `i` for `ptup4i`.
    const TAG: &'static str;
}

macro_rules! int_component {
    ($($ty:ty),*) => {
        $(
            impl Component for $ty {
                #[inline]
                fn same(&self, other: &Self) -> bool {
                    self == other
                }
                #[inline]
                fn hash_into<H: Hasher>(&self, state: &mut H) {
                    self.hash(state);
                }
                fn append_to(&self, out: &mut String) {
                    out.append_i64(*self as i64);
                }
            }
        )*
    };
}

int_component!(u8, i16, i32, i64);

// Floats compare by bit pattern with every NaN collapsed to the canonical
// one, so NaN components stay reflexive and equality matches the hash.
macro_rules! canonical_bits {
    ($v:expr, $ty:ty) => {{
        let v: $ty = $v;
        if v.is_nan() { <$ty>::NAN.to_bits() } else { v.to_bits() }
    }};
}

macro_rules! float_component {
    ($($ty:ty => $append:ident),*) => {
        $(
            impl Component for $ty {
                #[inline]
                fn same(&self, other: &Self) -> bool {
                    canonical_bits!(*self, $ty) == canonical_bits!(*other, $ty)
                }
                #[inline]
                fn hash_into<H: Hasher>(&self, state: &mut H) {
                    canonical_bits!(*self, $ty).hash(state);
                }
                fn append_to(&self, out: &mut String) {
                    out.$append(*self);
                }
            }
        )*
    };
}

float_component!(f32 => append_f32, f64 => append_f64);

impl Component for char {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        self == other
    }
    #[inline]
    fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
    fn append_to(&self, out: &mut String) {
        out.append_char(*self);
    }
}

impl Component for bool {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        self == other
    }
    #[inline]
    fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
    fn append_to(&self, out: &mut String) {
        out.append_bool(*self);
    }
}

macro_rules! str_component {
    ($($ty:ty),*) => {
        $(
            impl Component for $ty {
                #[inline]
                fn same(&self, other: &Self) -> bool {
                    let (a, b): (&str, &str) = (self.as_ref(), other.as_ref());
                    a == b
                }
                #[inline]
                fn hash_into<H: Hasher>(&self, state: &mut H) {
                    let s: &str = self.as_ref();
                    s.hash(state);
                }
                fn append_to(&self, out: &mut String) {
                    out.append_str(self.as_ref());
                }
            }
        )*
    };
}

str_component!(Arc<str>, String, &'static str);

impl Kind for char {
    const TAG: &'static str = "c";
}

impl Kind for f32 {
    const TAG: &'static str = "f";
}

impl Kind for i32 {
    const TAG: &'static str = "i";
}

impl Kind for i16 {
    const TAG: &'static str = "s";
}

impl Kind for Arc<str> {
    const TAG: &'static str = "str";
}
