use bitflags::bitflags;
use java_string::JavaString;

bitflags! {
	/// The `access_flags` of a method.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct MethodAccess: u16 {
		const PUBLIC = 0x0001;
		const PRIVATE = 0x0002;
		const PROTECTED = 0x0004;
		const STATIC = 0x0008;
		const FINAL = 0x0010;
		const SYNCHRONIZED = 0x0020;
		const BRIDGE = 0x0040;
		const VARARGS = 0x0080;
		const NATIVE = 0x0100;
		const ABSTRACT = 0x0400;
		const STRICT = 0x0800;
		const SYNTHETIC = 0x1000;
	}
}

bitflags! {
	/// The `access_flags` of a `MethodParameters` entry.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct ParameterAccess: u16 {
		const FINAL = 0x0010;
		const SYNTHETIC = 0x1000;
		const MANDATED = 0x8000;
	}
}

/// One entry of the `MethodParameters` attribute. The name may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParameter {
	pub name: Option<JavaString>,
	pub access: ParameterAccess,
}
