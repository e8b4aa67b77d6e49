//! An event driven reader for JVM class files.
//!
//! [`read_class`] walks a class file in one pass and calls into a
//! [`ClassVisitor`][visitor::class::ClassVisitor], which can hand out
//! sub-visitors for fields, methods, method bodies and annotations, or
//! decline any of them to have the reader skip that part of the file.
//! The constant pool is only scanned for entry boundaries up front; entries
//! are decoded when an instruction or attribute references them.
//!
//! ```no_run
//! use coffer::{read_class, ReaderFlags};
//!
//! # fn example(bytes: &[u8]) -> anyhow::Result<()> {
//! // () accepts everything and does nothing, which makes this a
//! // structural validation of the whole class file.
//! read_class(bytes, ReaderFlags::empty(), ())?;
//! # Ok(())
//! # }
//! ```

use anyhow::Result;

pub mod class_constants;
pub mod tree;
pub mod visitor;

mod class_reader;
mod cursor;
mod jstring;

pub use class_reader::{ClassReader, ReaderFlags};
pub use class_reader::pool::ConstantPool;

use visitor::class::ClassVisitor;

/// Reads a class file, driving the visitor, and hands the visitor back.
pub fn read_class<V: ClassVisitor>(data: &[u8], flags: ReaderFlags, mut visitor: V) -> Result<V> {
	ClassReader::new(data)?.accept(flags, &mut visitor)?;
	Ok(visitor)
}
