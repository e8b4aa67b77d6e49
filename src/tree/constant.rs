//! Loadable constants, as used by `ldc` and bootstrap method arguments.

use java_string::JavaString;

/// A symbolic reference to a field or method of a class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberRef {
	/// The internal name of the class holding the member.
	pub class: JavaString,
	pub name: JavaString,
	pub descriptor: JavaString,
}

/// A method handle, the resolved form of a `CONSTANT_MethodHandle_info` entry.
///
/// The `bool` on `InvokeStatic` and `InvokeSpecial` records whether the
/// referenced member lives on an interface.
#[derive(Debug, Clone, PartialEq)]
pub enum Handle {
	GetField(MemberRef),
	GetStatic(MemberRef),
	PutField(MemberRef),
	PutStatic(MemberRef),
	InvokeVirtual(MemberRef),
	InvokeStatic(MemberRef, bool),
	InvokeSpecial(MemberRef, bool),
	NewInvokeSpecial(MemberRef),
	InvokeInterface(MemberRef),
}

/// A `CONSTANT_Dynamic_info` entry with its bootstrap method resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDynamic {
	pub name: JavaString,
	pub descriptor: JavaString,
	pub handle: Handle,
	pub arguments: Vec<Constant>,
}

/// A `CONSTANT_InvokeDynamic_info` entry with its bootstrap method resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct InvokeDynamic {
	pub name: JavaString,
	pub descriptor: JavaString,
	pub handle: Handle,
	pub arguments: Vec<Constant>,
}

/// A loadable constant pool entry.
///
/// `Class` and `MethodType` carry the internal class name and the method
/// descriptor respectively.
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
	Integer(i32),
	Float(f32),
	Long(i64),
	Double(f64),
	String(JavaString),
	Class(JavaString),
	MethodType(JavaString),
	MethodHandle(Handle),
	Dynamic(ConstantDynamic),
}
