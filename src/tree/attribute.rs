use anyhow::Result;
use java_string::JavaString;

use crate::class_reader::pool::ConstantPool;
use crate::visitor::attribute::UnknownAttributeVisitor;

/// An attribute the reader has no structural knowledge of, kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	pub name: JavaString,
	pub bytes: Vec<u8>,
}

impl UnknownAttributeVisitor for Attribute {
	fn read(name: JavaString, bytes: Vec<u8>, _pool: &ConstantPool) -> Result<Attribute> {
		Ok(Attribute { name, bytes })
	}
}
