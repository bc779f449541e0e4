//! Immutable 4-tuple value types.
//!
//! One generic tuple, [`PTuple4`], instantiated per component kind (char,
//! float, int, short, string and type-erased object), plus its mutable
//! counterpart [`MTuple4`]. Both expose the [`Tuple4`] accessors and compare
//! equal whenever their components do.

mod frozen;
mod kinds;
mod mutable;
mod tuple;

pub use frozen::PTuple4;
pub use kinds::{
    PTuple4Obj, PTuple4Str, PTuple4c, PTuple4f, PTuple4i, PTuple4s, Tuple4Obj, Tuple4Str,
    Tuple4c, Tuple4f, Tuple4i, Tuple4s,
};
pub use mutable::MTuple4;
pub use tuple::{Tuple4, tuple_eq, tuple_hash};

// Re-exports from ptup_core
pub use ptup_core::errors;
pub use ptup_core::{AnyComponent, Component, Kind, Obj, TupleError, TupleResult};
