//! Core types for ptup tuples.
//!
//! This crate contains the component kinds that are independent of any tuple shape:
//! - `Component` - Equality, hashing and display shared by every component value
//! - `Kind` - A component that can parameterize a tuple, carrying its type tag
//! - `Obj` - Type-erased object component for heterogeneous tuples
//! - `Appendable` - Text sink used to render components
//! - `TupleError` - The single construction error

pub mod appendable;
pub mod component;
pub mod errors;
pub mod obj;

pub use appendable::Appendable;
pub use component::{Component, Kind};
pub use errors::{TupleError, TupleResult};
pub use obj::{AnyComponent, Obj};
