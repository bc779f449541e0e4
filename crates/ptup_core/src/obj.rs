//! Type-erased object component.
//!
//! `Obj` lets a single tuple hold components of different concrete types.
//! Comparison defers to the payload's own equality, and payloads of different
//! concrete types are never equal.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::component::{Component, Kind};

/// Object-safe view of a [`Component`].
pub trait AnyComponent: fmt::Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
    fn dyn_eq(&self, other: &dyn AnyComponent) -> bool;
    fn dyn_hash(&self, state: &mut dyn Hasher);
    fn dyn_append(&self, out: &mut String);
}

impl<T: Component> AnyComponent for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn AnyComponent) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self.same(other))
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        self.hash_into(&mut state);
    }

    fn dyn_append(&self, out: &mut String) {
        self.append_to(out);
    }
}

/// Shared handle to a component of any supported type.
///
/// Cloning shares the payload; it is never deep-copied. String payloads are
/// always stored as `Arc<str>`, and wrapping an `Obj` returns the same handle.
#[derive(Clone)]
pub struct Obj(Arc<dyn AnyComponent>);

impl Obj {
    pub fn new<V: Component>(value: V) -> Self {
        let any: &dyn Any = &value;
        if let Some(obj) = any.downcast_ref::<Obj>() {
            return obj.clone();
        }
        if let Some(s) = any.downcast_ref::<String>() {
            return Obj(Arc::new(Arc::<str>::from(s.as_str())));
        }
        if let Some(s) = any.downcast_ref::<&'static str>() {
            return Obj(Arc::new(Arc::<str>::from(*s)));
        }
        Obj(Arc::new(value))
    }

    #[inline]
    fn payload(&self) -> &dyn AnyComponent {
        &*self.0
    }

    pub fn downcast_ref<V: Component>(&self) -> Option<&V> {
        self.payload().as_any().downcast_ref::<V>()
    }

    pub fn is<V: Component>(&self) -> bool {
        self.payload().as_any().is::<V>()
    }

    /// True when both handles point at the same payload allocation.
    pub fn ptr_eq(&self, other: &Obj) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Component for Obj {
    #[inline]
    fn same(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.payload().dyn_eq(other.payload())
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.payload().dyn_hash(state);
    }

    fn append_to(&self, out: &mut String) {
        self.payload().dyn_append(out);
    }
}

impl Kind for Obj {
    const TAG: &'static str = "obj";
}

impl PartialEq for Obj {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Obj {}

impl Hash for Obj {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_into(state);
    }
}

impl fmt::Debug for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Obj").field(&self.payload()).finish()
    }
}

impl fmt::Display for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.append_to(&mut out);
        f.write_str(&out)
    }
}

macro_rules! obj_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Obj {
                fn from(value: $ty) -> Self {
                    Obj::new(value)
                }
            }
        )*
    };
}

obj_from!(bool, u8, i16, i32, i64, f32, f64, char, String, &'static str, Arc<str>);
