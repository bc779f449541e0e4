//! Per-kind instantiations.

use std::sync::Arc;

use ptup_core::Obj;

use crate::frozen::PTuple4;
use crate::mutable::MTuple4;

pub type PTuple4c = PTuple4<char>;
pub type PTuple4f = PTuple4<f32>;
pub type PTuple4i = PTuple4<i32>;
pub type PTuple4s = PTuple4<i16>;
pub type PTuple4Str = PTuple4<Arc<str>>;
pub type PTuple4Obj = PTuple4<Obj>;

pub type Tuple4c = MTuple4<char>;
pub type Tuple4f = MTuple4<f32>;
pub type Tuple4i = MTuple4<i32>;
pub type Tuple4s = MTuple4<i16>;
pub type Tuple4Str = MTuple4<Arc<str>>;
pub type Tuple4Obj = MTuple4<Obj>;
