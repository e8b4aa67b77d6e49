use anyhow::Result;
use java_string::JavaString;

use crate::tree::field::ConstantValue;
use crate::visitor::annotation::AnnotationsVisitor;
use crate::visitor::attribute::UnknownAttributeVisitor;

/// Visits the attributes of one field.
pub trait FieldVisitor
where
	Self: Sized,
	Self::AnnotationsVisitor: AnnotationsVisitor,
	Self::UnknownAttribute: UnknownAttributeVisitor,
{
	type AnnotationsVisitor;
	type UnknownAttribute;

	fn visit_constant_value(&mut self, constant_value: ConstantValue) -> Result<()>;
	fn visit_signature(&mut self, signature: JavaString) -> Result<()>;

	/// Visits a `Runtime(In)visibleAnnotations` attribute. Returning
	/// `Ok(None)` skips it.
	fn visit_annotations(&mut self, visible: bool) -> Result<Option<Self::AnnotationsVisitor>>;
	fn finish_annotations(&mut self, annotations_visitor: Self::AnnotationsVisitor) -> Result<()>;

	fn visit_unknown_attribute(&mut self, unknown_attribute: Self::UnknownAttribute) -> Result<()>;

	fn visit_deprecated_and_synthetic_attribute(&mut self, deprecated: bool, synthetic: bool) -> Result<()>;

	fn visit_end(&mut self) -> Result<()>;
}
