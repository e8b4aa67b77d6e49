//! The visitor protocol.
//!
//! A class file is read by handing a [`ClassVisitor`](class::ClassVisitor) to
//! the reader; the reader drives it in a fixed order and hands out
//! sub-visitors for nested structures. Any `visit_*` returning
//! `Result<Option<_>>` may decline by returning `Ok(None)`, which makes the
//! reader skip the corresponding part of the input; the matching `finish_*`
//! is only called when a sub-visitor was handed out.
//!
//! `()` implements every visitor trait and accepts everything silently.

pub mod annotation;
pub mod attribute;
pub mod class;
pub mod code;
pub mod field;
pub mod method;

mod adapters;
mod implementations;

pub use adapters::{ClassAdapter, CodeAdapter, FieldAdapter, MethodAdapter};
