use anyhow::Result;
use java_string::JavaString;

use crate::class_reader::pool::ConstantPool;

/// Decides what to do with an attribute the reader doesn't know.
///
/// The reader calls [`read`][UnknownAttributeVisitor::read] with the raw
/// attribute contents and the constant pool of the class, so implementations
/// can decode attributes of their own. [`Attribute`](crate::tree::Attribute)
/// implements this by keeping the bytes, `()` by dropping them.
pub trait UnknownAttributeVisitor
where
	Self: Sized,
{
	fn read(name: JavaString, bytes: Vec<u8>, pool: &ConstantPool) -> Result<Self>;
}
