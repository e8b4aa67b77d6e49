//! Decoding of `element_value` structures, the values inside annotations.
//!
//! Every decode function has a skip twin that walks the same bytes without
//! touching the constant pool, used when a visitor declines a subtree.

use anyhow::{bail, Result};
use java_string::JavaString;

use crate::class_reader::pool::ConstantPool;
use crate::cursor::Cursor;
use crate::tree::annotation::{Object, PrimitiveArray};
use crate::visitor::annotation::{AnnotationsVisitor, ElementValueVisitor, ElementValuesVisitor};

/// Reads the contents of a `Runtime(In)visibleAnnotations` attribute.
pub(crate) fn read_annotations_attribute<A: AnnotationsVisitor>(r: &mut Cursor, pool: &ConstantPool, visitor: &mut A) -> Result<()> {
	for _ in 0..r.read_u16()? {
		let type_descriptor = pool.get_utf8(r.read_u16()?)?;
		match visitor.visit_annotation(type_descriptor)? {
			Some(mut element_values_visitor) => {
				read_element_values_named(r, pool, &mut element_values_visitor)?;
				visitor.finish_annotation(element_values_visitor)?;
			},
			None => skip_element_values_named(r)?,
		}
	}
	Ok(())
}

pub(crate) fn read_element_values_named<A: ElementValuesVisitor>(r: &mut Cursor, pool: &ConstantPool, visitor: &mut A) -> Result<()> {
	for _ in 0..r.read_u16()? {
		let name = pool.get_utf8(r.read_u16()?)?;
		read_element_value_named(r, pool, visitor, name)?;
	}
	Ok(())
}

fn read_element_value_named<A: ElementValuesVisitor>(r: &mut Cursor, pool: &ConstantPool, visitor: &mut A, name: JavaString) -> Result<()> {
	match r.read_u8()? {
		b'B' => visitor.visit(name, Object::Byte(pool.get_integer_as_byte(r.read_u16()?)?)),
		b'C' => visitor.visit(name, Object::Char(pool.get_integer_as_char(r.read_u16()?)?)),
		b'D' => visitor.visit(name, Object::Double(pool.get_double(r.read_u16()?)?)),
		b'F' => visitor.visit(name, Object::Float(pool.get_float(r.read_u16()?)?)),
		b'I' => visitor.visit(name, Object::Integer(pool.get_integer(r.read_u16()?)?)),
		b'J' => visitor.visit(name, Object::Long(pool.get_long(r.read_u16()?)?)),
		b'S' => visitor.visit(name, Object::Short(pool.get_integer_as_short(r.read_u16()?)?)),
		b'Z' => visitor.visit(name, Object::Boolean(pool.get_integer_as_boolean(r.read_u16()?)?)),
		b's' => visitor.visit(name, Object::String(pool.get_utf8(r.read_u16()?)?)),
		b'e' => {
			let type_descriptor = pool.get_utf8(r.read_u16()?)?;
			let const_name = pool.get_utf8(r.read_u16()?)?;
			visitor.visit_enum(name, type_descriptor, const_name)
		},
		b'c' => visitor.visit_class(name, pool.get_utf8(r.read_u16()?)?),
		b'@' => {
			let type_descriptor = pool.get_utf8(r.read_u16()?)?;
			match visitor.visit_annotation(name, type_descriptor)? {
				Some(mut annotation_visitor) => {
					read_element_values_named(r, pool, &mut annotation_visitor)?;
					visitor.finish_annotation(annotation_visitor)
				},
				None => skip_element_values_named(r),
			}
		},
		b'[' => {
			let count = r.read_u16()?;
			if count > 0 && is_primitive_tag(r.peek_u8()?) {
				visitor.visit_primitive_array(name, read_primitive_array(r, pool, count)?)
			} else {
				match visitor.visit_array(name)? {
					Some(mut array_visitor) => {
						for _ in 0..count {
							read_element_value_unnamed(r, pool, &mut array_visitor)?;
						}
						visitor.finish_array(array_visitor)
					},
					None => {
						for _ in 0..count {
							skip_element_value(r)?;
						}
						Ok(())
					},
				}
			}
		},
		tag => bail!("unknown element value tag {tag}"),
	}
}

pub(crate) fn read_element_value_unnamed<A: ElementValueVisitor>(r: &mut Cursor, pool: &ConstantPool, visitor: &mut A) -> Result<()> {
	match r.read_u8()? {
		b'B' => visitor.visit(Object::Byte(pool.get_integer_as_byte(r.read_u16()?)?)),
		b'C' => visitor.visit(Object::Char(pool.get_integer_as_char(r.read_u16()?)?)),
		b'D' => visitor.visit(Object::Double(pool.get_double(r.read_u16()?)?)),
		b'F' => visitor.visit(Object::Float(pool.get_float(r.read_u16()?)?)),
		b'I' => visitor.visit(Object::Integer(pool.get_integer(r.read_u16()?)?)),
		b'J' => visitor.visit(Object::Long(pool.get_long(r.read_u16()?)?)),
		b'S' => visitor.visit(Object::Short(pool.get_integer_as_short(r.read_u16()?)?)),
		b'Z' => visitor.visit(Object::Boolean(pool.get_integer_as_boolean(r.read_u16()?)?)),
		b's' => visitor.visit(Object::String(pool.get_utf8(r.read_u16()?)?)),
		b'e' => {
			let type_descriptor = pool.get_utf8(r.read_u16()?)?;
			let const_name = pool.get_utf8(r.read_u16()?)?;
			visitor.visit_enum(type_descriptor, const_name)
		},
		b'c' => visitor.visit_class(pool.get_utf8(r.read_u16()?)?),
		b'@' => {
			let type_descriptor = pool.get_utf8(r.read_u16()?)?;
			match visitor.visit_annotation(type_descriptor)? {
				Some(mut annotation_visitor) => {
					read_element_values_named(r, pool, &mut annotation_visitor)?;
					visitor.finish_annotation(annotation_visitor)
				},
				None => skip_element_values_named(r),
			}
		},
		b'[' => {
			let count = r.read_u16()?;
			if count > 0 && is_primitive_tag(r.peek_u8()?) {
				visitor.visit_primitive_array(read_primitive_array(r, pool, count)?)
			} else {
				match visitor.visit_array()? {
					Some(mut array_visitor) => {
						for _ in 0..count {
							read_element_value_unnamed(r, pool, &mut array_visitor)?;
						}
						visitor.finish_array(array_visitor)
					},
					None => {
						for _ in 0..count {
							skip_element_value(r)?;
						}
						Ok(())
					},
				}
			}
		},
		tag => bail!("unknown element value tag {tag}"),
	}
}

fn is_primitive_tag(tag: u8) -> bool {
	matches!(tag, b'B' | b'C' | b'D' | b'F' | b'I' | b'J' | b'S' | b'Z')
}

fn read_elements<T>(r: &mut Cursor, count: u16, expected: u8,
		get: impl Fn(u16) -> Result<T>) -> Result<Vec<T>> {
	let mut values = Vec::with_capacity(count as usize);
	for _ in 0..count {
		let tag = r.read_u8()?;
		if tag != expected {
			bail!("array element tag {tag} does not match the first element tag {expected}");
		}
		values.push(get(r.read_u16()?)?);
	}
	Ok(values)
}

/// Reads an array of `count >= 1` elements whose first tag is primitive. All
/// elements must share that tag.
fn read_primitive_array(r: &mut Cursor, pool: &ConstantPool, count: u16) -> Result<PrimitiveArray> {
	Ok(match r.peek_u8()? {
		b'B' => PrimitiveArray::Byte(read_elements(r, count, b'B', |index| pool.get_integer_as_byte(index))?),
		b'C' => PrimitiveArray::Char(read_elements(r, count, b'C', |index| pool.get_integer_as_char(index))?),
		b'D' => PrimitiveArray::Double(read_elements(r, count, b'D', |index| pool.get_double(index))?),
		b'F' => PrimitiveArray::Float(read_elements(r, count, b'F', |index| pool.get_float(index))?),
		b'I' => PrimitiveArray::Integer(read_elements(r, count, b'I', |index| pool.get_integer(index))?),
		b'J' => PrimitiveArray::Long(read_elements(r, count, b'J', |index| pool.get_long(index))?),
		b'S' => PrimitiveArray::Short(read_elements(r, count, b'S', |index| pool.get_integer_as_short(index))?),
		b'Z' => PrimitiveArray::Boolean(read_elements(r, count, b'Z', |index| pool.get_integer_as_boolean(index))?),
		tag => bail!("element value tag {tag} is not primitive"),
	})
}

pub(crate) fn skip_element_values_named(r: &mut Cursor) -> Result<()> {
	for _ in 0..r.read_u16()? {
		let _name = r.read_u16()?;
		skip_element_value(r)?;
	}
	Ok(())
}

pub(crate) fn skip_element_value(r: &mut Cursor) -> Result<()> {
	match r.read_u8()? {
		b'B' | b'C' | b'D' | b'F' | b'I' | b'J' | b'S' | b'Z' | b's' | b'c' => r.skip(2),
		b'e' => r.skip(4),
		b'@' => {
			let _type_descriptor = r.read_u16()?;
			skip_element_values_named(r)
		},
		b'[' => {
			for _ in 0..r.read_u16()? {
				skip_element_value(r)?;
			}
			Ok(())
		},
		tag => bail!("unknown element value tag {tag}"),
	}
}
