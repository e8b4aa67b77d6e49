use bitflags::bitflags;
use java_string::JavaString;

bitflags! {
	/// The `access_flags` of a class.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct ClassAccess: u16 {
		const PUBLIC = 0x0001;
		const FINAL = 0x0010;
		const SUPER = 0x0020;
		const INTERFACE = 0x0200;
		const ABSTRACT = 0x0400;
		const SYNTHETIC = 0x1000;
		const ANNOTATION = 0x2000;
		const ENUM = 0x4000;
		const MODULE = 0x8000;
	}
}

bitflags! {
	/// The `inner_class_access_flags` of an `InnerClasses` entry.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct InnerClassAccess: u16 {
		const PUBLIC = 0x0001;
		const PRIVATE = 0x0002;
		const PROTECTED = 0x0004;
		const STATIC = 0x0008;
		const FINAL = 0x0010;
		const INTERFACE = 0x0200;
		const ABSTRACT = 0x0400;
		const SYNTHETIC = 0x1000;
		const ANNOTATION = 0x2000;
		const ENUM = 0x4000;
	}
}

/// One entry of the `InnerClasses` attribute.
///
/// `outer_class` is `None` for local and anonymous classes, `inner_name` is
/// `None` for anonymous classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerClass {
	pub inner_class: JavaString,
	pub outer_class: Option<JavaString>,
	pub inner_name: Option<JavaString>,
	pub access: InnerClassAccess,
}

/// The `EnclosingMethod` attribute of a local or anonymous class.
///
/// `method` is `None` when the class is not enclosed in a method or
/// constructor, such as a class appearing in a field initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosingMethod {
	pub class: JavaString,
	pub method: Option<(JavaString, JavaString)>,
}
