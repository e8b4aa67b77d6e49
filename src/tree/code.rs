//! The data types of a method body.

use java_string::JavaString;

/// A position in a method body.
///
/// Labels are created by the reader while scanning a method body. Two labels
/// with the same id refer to the same position; the bytecode offset itself is
/// never exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label {
	pub id: u16,
}

/// A range in a method body, from `start` (inclusive) to `end` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelRange {
	pub start: Label,
	pub end: Label,
}

/// One entry of the exception table of a `Code` attribute.
///
/// `catch_type` is `None` for a catch-all handler, as produced by `finally`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionHandler {
	pub start: Label,
	pub end: Label,
	pub handler: Label,
	pub catch_type: Option<JavaString>,
}

/// A local variable, merged from the `LocalVariableTable` and
/// `LocalVariableTypeTable` attributes.
///
/// Entries of both tables that share a start position and slot index are
/// combined into one value carrying both the descriptor and the generic
/// signature. An entry appearing in only one table leaves the other field
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalVariable {
	pub range: LabelRange,
	pub name: JavaString,
	pub descriptor: Option<JavaString>,
	pub signature: Option<JavaString>,
	pub index: u16,
}

/// A verification type in a stack map frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationType {
	Top,
	Integer,
	Float,
	Double,
	Long,
	Null,
	UninitializedThis,
	/// The internal name of the class.
	Object(JavaString),
	/// The position of the `new` instruction that created the value.
	Uninitialized(Label),
}

/// A stack map frame, attached to the position of its preceding label.
///
/// With frame expansion enabled only the `Full` variant is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackMapFrame {
	Same,
	SameLocals1StackItem {
		stack: VerificationType,
	},
	Chop {
		k: u8,
	},
	Append {
		locals: Vec<VerificationType>,
	},
	Full {
		locals: Vec<VerificationType>,
		stack: Vec<VerificationType>,
	},
}
