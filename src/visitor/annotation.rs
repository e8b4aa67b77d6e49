use anyhow::Result;
use java_string::JavaString;

use crate::tree::annotation::{Object, PrimitiveArray};

/// Visits the annotations of one `Runtime(In)visibleAnnotations` attribute.
pub trait AnnotationsVisitor
where
	Self: Sized,
	Self::ElementValuesVisitor: ElementValuesVisitor,
{
	type ElementValuesVisitor;

	/// Visits one annotation. Returning `Ok(None)` skips its element values.
	fn visit_annotation(&mut self, type_descriptor: JavaString)
		-> Result<Option<Self::ElementValuesVisitor>>;
	fn finish_annotation(&mut self, element_values_visitor: Self::ElementValuesVisitor) -> Result<()>;
}

/// Visits named element values, as found directly inside an annotation.
pub trait ElementValuesVisitor
where
	Self: Sized,
	Self::AnnotationVisitor: ElementValuesVisitor,
	Self::ArrayVisitor: ElementValueVisitor,
{
	type AnnotationVisitor;
	type ArrayVisitor;

	fn visit(&mut self, name: JavaString, value: Object) -> Result<()>;
	fn visit_enum(&mut self, name: JavaString, type_descriptor: JavaString, const_name: JavaString) -> Result<()>;
	fn visit_class(&mut self, name: JavaString, class_descriptor: JavaString) -> Result<()>;

	/// Visits an array whose elements are all of one primitive kind, as a
	/// single value.
	fn visit_primitive_array(&mut self, name: JavaString, values: PrimitiveArray) -> Result<()>;

	fn visit_annotation(&mut self, name: JavaString, type_descriptor: JavaString)
		-> Result<Option<Self::AnnotationVisitor>>;
	fn finish_annotation(&mut self, annotation_visitor: Self::AnnotationVisitor) -> Result<()>;

	fn visit_array(&mut self, name: JavaString) -> Result<Option<Self::ArrayVisitor>>;
	fn finish_array(&mut self, array_visitor: Self::ArrayVisitor) -> Result<()>;
}

/// Visits unnamed element values, as found in arrays and in the
/// `AnnotationDefault` attribute.
pub trait ElementValueVisitor
where
	Self: Sized,
	Self::AnnotationVisitor: ElementValuesVisitor,
	Self::ArrayVisitor: ElementValueVisitor,
{
	type AnnotationVisitor;
	type ArrayVisitor;

	fn visit(&mut self, value: Object) -> Result<()>;
	fn visit_enum(&mut self, type_descriptor: JavaString, const_name: JavaString) -> Result<()>;
	fn visit_class(&mut self, class_descriptor: JavaString) -> Result<()>;

	/// Visits an array whose elements are all of one primitive kind, as a
	/// single value.
	fn visit_primitive_array(&mut self, values: PrimitiveArray) -> Result<()>;

	fn visit_annotation(&mut self, type_descriptor: JavaString)
		-> Result<Option<Self::AnnotationVisitor>>;
	fn finish_annotation(&mut self, annotation_visitor: Self::AnnotationVisitor) -> Result<()>;

	fn visit_array(&mut self) -> Result<Option<Self::ArrayVisitor>>;
	fn finish_array(&mut self, array_visitor: Self::ArrayVisitor) -> Result<()>;
}
