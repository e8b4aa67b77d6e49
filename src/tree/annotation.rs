//! Values appearing inside annotations.

use java_string::JavaString;

/// A primitive or string element value.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
	Byte(i8),
	Boolean(bool),
	Char(u16),
	Short(i16),
	Integer(i32),
	Long(i64),
	Float(f32),
	Double(f64),
	String(JavaString),
}

/// An array element value whose elements are all of one primitive kind.
///
/// Such arrays are delivered as a single value instead of one call per
/// element.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveArray {
	Byte(Vec<i8>),
	Boolean(Vec<bool>),
	Char(Vec<u16>),
	Short(Vec<i16>),
	Integer(Vec<i32>),
	Long(Vec<i64>),
	Float(Vec<f32>),
	Double(Vec<f64>),
}
