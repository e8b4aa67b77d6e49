use anyhow::Result;
use java_string::JavaString;

use crate::tree::class::{ClassAccess, EnclosingMethod, InnerClass};
use crate::tree::field::FieldAccess;
use crate::tree::method::MethodAccess;
use crate::tree::version::Version;
use crate::visitor::annotation::AnnotationsVisitor;
use crate::visitor::attribute::UnknownAttributeVisitor;
use crate::visitor::field::FieldVisitor;
use crate::visitor::method::MethodVisitor;

/// Visits a class file.
///
/// The reader calls the methods in a fixed order, independent of where the
/// attributes sit in the file: first
/// [`visit_header`][ClassVisitor::visit_header], then class-level attributes,
/// then every field, then every method, then
/// [`visit_end`][ClassVisitor::visit_end].
pub trait ClassVisitor
where
	Self: Sized,
	Self::AnnotationsVisitor: AnnotationsVisitor,
	Self::FieldVisitor: FieldVisitor,
	Self::MethodVisitor: MethodVisitor,
	Self::UnknownAttribute: UnknownAttributeVisitor,
{
	type AnnotationsVisitor;
	type FieldVisitor;
	type MethodVisitor;
	type UnknownAttribute;

	/// Visits the fixed-size start of the class: version, access flags, the
	/// internal names of this class, its superclass (`None` only for
	/// `java/lang/Object`) and its direct interfaces.
	fn visit_header(&mut self, version: Version, access: ClassAccess, this_class: JavaString,
		super_class: Option<JavaString>, interfaces: Vec<JavaString>) -> Result<()>;

	fn visit_signature(&mut self, signature: JavaString) -> Result<()>;

	/// Visits the `SourceFile` and `SourceDebugExtension` attributes. Only
	/// called when at least one of them is present.
	fn visit_source(&mut self, source_file: Option<JavaString>, debug_extension: Option<JavaString>) -> Result<()>;

	fn visit_outer_class(&mut self, enclosing_method: EnclosingMethod) -> Result<()>;

	fn visit_deprecated_and_synthetic_attribute(&mut self, deprecated: bool, synthetic: bool) -> Result<()>;

	/// Visits a `Runtime(In)visibleAnnotations` attribute. Returning
	/// `Ok(None)` skips it.
	fn visit_annotations(&mut self, visible: bool) -> Result<Option<Self::AnnotationsVisitor>>;
	fn finish_annotations(&mut self, annotations_visitor: Self::AnnotationsVisitor) -> Result<()>;

	fn visit_unknown_attribute(&mut self, unknown_attribute: Self::UnknownAttribute) -> Result<()>;

	fn visit_nest_host(&mut self, nest_host: JavaString) -> Result<()>;
	fn visit_nest_members(&mut self, nest_members: Vec<JavaString>) -> Result<()>;
	fn visit_permitted_subclasses(&mut self, permitted_subclasses: Vec<JavaString>) -> Result<()>;
	fn visit_inner_classes(&mut self, inner_classes: Vec<InnerClass>) -> Result<()>;

	/// Visits one field. Returning `Ok(None)` skips its attributes.
	fn visit_field(&mut self, access: FieldAccess, name: JavaString, descriptor: JavaString)
		-> Result<Option<Self::FieldVisitor>>;
	fn finish_field(&mut self, field_visitor: Self::FieldVisitor) -> Result<()>;

	/// Visits one method. Returning `Ok(None)` skips its attributes,
	/// including any method body.
	fn visit_method(&mut self, access: MethodAccess, name: JavaString, descriptor: JavaString)
		-> Result<Option<Self::MethodVisitor>>;
	fn finish_method(&mut self, method_visitor: Self::MethodVisitor) -> Result<()>;

	fn visit_end(&mut self) -> Result<()>;
}
