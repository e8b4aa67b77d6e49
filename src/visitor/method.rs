use anyhow::Result;
use java_string::JavaString;

use crate::tree::method::MethodParameter;
use crate::visitor::annotation::{AnnotationsVisitor, ElementValueVisitor};
use crate::visitor::attribute::UnknownAttributeVisitor;
use crate::visitor::code::CodeVisitor;

/// Visits the attributes of one method.
pub trait MethodVisitor
where
	Self: Sized,
	Self::AnnotationsVisitor: AnnotationsVisitor,
	Self::AnnotationDefaultVisitor: ElementValueVisitor,
	Self::CodeVisitor: CodeVisitor,
	Self::UnknownAttribute: UnknownAttributeVisitor,
{
	type AnnotationsVisitor;
	type AnnotationDefaultVisitor;
	type CodeVisitor;
	type UnknownAttribute;

	/// Visits the `Code` attribute. Returning `Ok(None)` skips the method
	/// body.
	fn visit_code(&mut self) -> Result<Option<Self::CodeVisitor>>;
	fn finish_code(&mut self, code_visitor: Self::CodeVisitor) -> Result<()>;

	/// Visits the checked exceptions from the `Exceptions` attribute, as
	/// internal class names.
	fn visit_exceptions(&mut self, exceptions: Vec<JavaString>) -> Result<()>;
	fn visit_signature(&mut self, signature: JavaString) -> Result<()>;
	fn visit_parameters(&mut self, parameters: Vec<MethodParameter>) -> Result<()>;

	/// Visits the `AnnotationDefault` attribute of an annotation interface
	/// method. Returning `Ok(None)` skips the default value.
	fn visit_annotation_default(&mut self) -> Result<Option<Self::AnnotationDefaultVisitor>>;
	fn finish_annotation_default(&mut self, element_value_visitor: Self::AnnotationDefaultVisitor) -> Result<()>;

	/// Visits a `Runtime(In)visibleAnnotations` attribute. Returning
	/// `Ok(None)` skips it.
	fn visit_annotations(&mut self, visible: bool) -> Result<Option<Self::AnnotationsVisitor>>;
	fn finish_annotations(&mut self, annotations_visitor: Self::AnnotationsVisitor) -> Result<()>;

	fn visit_unknown_attribute(&mut self, unknown_attribute: Self::UnknownAttribute) -> Result<()>;

	fn visit_deprecated_and_synthetic_attribute(&mut self, deprecated: bool, synthetic: bool) -> Result<()>;

	fn visit_end(&mut self) -> Result<()>;
}
