//! The unit type accepts everything and ignores it. It never declines, so
//! every code path of the reader is exercised.

use anyhow::Result;
use java_string::JavaString;

use crate::class_reader::pool::ConstantPool;
use crate::tree::annotation::{Object, PrimitiveArray};
use crate::tree::class::{ClassAccess, EnclosingMethod, InnerClass};
use crate::tree::code::{ExceptionHandler, Label, LocalVariable, StackMapFrame};
use crate::tree::constant::{Constant, InvokeDynamic, MemberRef};
use crate::tree::field::{ConstantValue, FieldAccess};
use crate::tree::method::{MethodAccess, MethodParameter};
use crate::tree::version::Version;
use crate::visitor::annotation::{AnnotationsVisitor, ElementValueVisitor, ElementValuesVisitor};
use crate::visitor::attribute::UnknownAttributeVisitor;
use crate::visitor::class::ClassVisitor;
use crate::visitor::code::CodeVisitor;
use crate::visitor::field::FieldVisitor;
use crate::visitor::method::MethodVisitor;

impl UnknownAttributeVisitor for () {
	fn read(_name: JavaString, _bytes: Vec<u8>, _pool: &ConstantPool) -> Result<()> {
		Ok(())
	}
}

impl ClassVisitor for () {
	type AnnotationsVisitor = ();
	type FieldVisitor = ();
	type MethodVisitor = ();
	type UnknownAttribute = ();

	fn visit_header(&mut self, _version: Version, _access: ClassAccess, _this_class: JavaString,
			_super_class: Option<JavaString>, _interfaces: Vec<JavaString>) -> Result<()> {
		Ok(())
	}
	fn visit_signature(&mut self, _signature: JavaString) -> Result<()> {
		Ok(())
	}
	fn visit_source(&mut self, _source_file: Option<JavaString>, _debug_extension: Option<JavaString>) -> Result<()> {
		Ok(())
	}
	fn visit_outer_class(&mut self, _enclosing_method: EnclosingMethod) -> Result<()> {
		Ok(())
	}
	fn visit_deprecated_and_synthetic_attribute(&mut self, _deprecated: bool, _synthetic: bool) -> Result<()> {
		Ok(())
	}
	fn visit_annotations(&mut self, _visible: bool) -> Result<Option<()>> {
		Ok(Some(()))
	}
	fn finish_annotations(&mut self, _annotations_visitor: ()) -> Result<()> {
		Ok(())
	}
	fn visit_unknown_attribute(&mut self, _unknown_attribute: ()) -> Result<()> {
		Ok(())
	}
	fn visit_nest_host(&mut self, _nest_host: JavaString) -> Result<()> {
		Ok(())
	}
	fn visit_nest_members(&mut self, _nest_members: Vec<JavaString>) -> Result<()> {
		Ok(())
	}
	fn visit_permitted_subclasses(&mut self, _permitted_subclasses: Vec<JavaString>) -> Result<()> {
		Ok(())
	}
	fn visit_inner_classes(&mut self, _inner_classes: Vec<InnerClass>) -> Result<()> {
		Ok(())
	}
	fn visit_field(&mut self, _access: FieldAccess, _name: JavaString, _descriptor: JavaString) -> Result<Option<()>> {
		Ok(Some(()))
	}
	fn finish_field(&mut self, _field_visitor: ()) -> Result<()> {
		Ok(())
	}
	fn visit_method(&mut self, _access: MethodAccess, _name: JavaString, _descriptor: JavaString) -> Result<Option<()>> {
		Ok(Some(()))
	}
	fn finish_method(&mut self, _method_visitor: ()) -> Result<()> {
		Ok(())
	}
	fn visit_end(&mut self) -> Result<()> {
		Ok(())
	}
}

impl FieldVisitor for () {
	type AnnotationsVisitor = ();
	type UnknownAttribute = ();

	fn visit_constant_value(&mut self, _constant_value: ConstantValue) -> Result<()> {
		Ok(())
	}
	fn visit_signature(&mut self, _signature: JavaString) -> Result<()> {
		Ok(())
	}
	fn visit_annotations(&mut self, _visible: bool) -> Result<Option<()>> {
		Ok(Some(()))
	}
	fn finish_annotations(&mut self, _annotations_visitor: ()) -> Result<()> {
		Ok(())
	}
	fn visit_unknown_attribute(&mut self, _unknown_attribute: ()) -> Result<()> {
		Ok(())
	}
	fn visit_deprecated_and_synthetic_attribute(&mut self, _deprecated: bool, _synthetic: bool) -> Result<()> {
		Ok(())
	}
	fn visit_end(&mut self) -> Result<()> {
		Ok(())
	}
}

impl MethodVisitor for () {
	type AnnotationsVisitor = ();
	type AnnotationDefaultVisitor = ();
	type CodeVisitor = ();
	type UnknownAttribute = ();

	fn visit_code(&mut self) -> Result<Option<()>> {
		Ok(Some(()))
	}
	fn finish_code(&mut self, _code_visitor: ()) -> Result<()> {
		Ok(())
	}
	fn visit_exceptions(&mut self, _exceptions: Vec<JavaString>) -> Result<()> {
		Ok(())
	}
	fn visit_signature(&mut self, _signature: JavaString) -> Result<()> {
		Ok(())
	}
	fn visit_parameters(&mut self, _parameters: Vec<MethodParameter>) -> Result<()> {
		Ok(())
	}
	fn visit_annotation_default(&mut self) -> Result<Option<()>> {
		Ok(Some(()))
	}
	fn finish_annotation_default(&mut self, _element_value_visitor: ()) -> Result<()> {
		Ok(())
	}
	fn visit_annotations(&mut self, _visible: bool) -> Result<Option<()>> {
		Ok(Some(()))
	}
	fn finish_annotations(&mut self, _annotations_visitor: ()) -> Result<()> {
		Ok(())
	}
	fn visit_unknown_attribute(&mut self, _unknown_attribute: ()) -> Result<()> {
		Ok(())
	}
	fn visit_deprecated_and_synthetic_attribute(&mut self, _deprecated: bool, _synthetic: bool) -> Result<()> {
		Ok(())
	}
	fn visit_end(&mut self) -> Result<()> {
		Ok(())
	}
}

impl CodeVisitor for () {
	type UnknownAttribute = ();

	fn visit_label(&mut self, _label: Label) -> Result<()> {
		Ok(())
	}
	fn visit_line_number(&mut self, _line: u16, _start: Label) -> Result<()> {
		Ok(())
	}
	fn visit_frame(&mut self, _frame: StackMapFrame) -> Result<()> {
		Ok(())
	}
	fn visit_insn(&mut self, _opcode: u8) -> Result<()> {
		Ok(())
	}
	fn visit_int_insn(&mut self, _opcode: u8, _operand: i32) -> Result<()> {
		Ok(())
	}
	fn visit_var_insn(&mut self, _opcode: u8, _var_index: u16) -> Result<()> {
		Ok(())
	}
	fn visit_iinc_insn(&mut self, _var_index: u16, _increment: i16) -> Result<()> {
		Ok(())
	}
	fn visit_type_insn(&mut self, _opcode: u8, _class: JavaString) -> Result<()> {
		Ok(())
	}
	fn visit_field_insn(&mut self, _opcode: u8, _member: MemberRef) -> Result<()> {
		Ok(())
	}
	fn visit_method_insn(&mut self, _opcode: u8, _member: MemberRef, _interface: bool) -> Result<()> {
		Ok(())
	}
	fn visit_invoke_dynamic_insn(&mut self, _invoke_dynamic: InvokeDynamic) -> Result<()> {
		Ok(())
	}
	fn visit_jump_insn(&mut self, _opcode: u8, _target: Label) -> Result<()> {
		Ok(())
	}
	fn visit_ldc_insn(&mut self, _constant: Constant) -> Result<()> {
		Ok(())
	}
	fn visit_table_switch_insn(&mut self, _default: Label, _low: i32, _high: i32, _targets: Vec<Label>) -> Result<()> {
		Ok(())
	}
	fn visit_lookup_switch_insn(&mut self, _default: Label, _pairs: Vec<(i32, Label)>) -> Result<()> {
		Ok(())
	}
	fn visit_multi_a_new_array_insn(&mut self, _class: JavaString, _dimensions: u8) -> Result<()> {
		Ok(())
	}
	fn visit_exception_handler(&mut self, _handler: ExceptionHandler) -> Result<()> {
		Ok(())
	}
	fn visit_local_variable(&mut self, _local_variable: LocalVariable) -> Result<()> {
		Ok(())
	}
	fn visit_unknown_attribute(&mut self, _unknown_attribute: ()) -> Result<()> {
		Ok(())
	}
	fn visit_maxs(&mut self, _max_stack: u16, _max_locals: u16) -> Result<()> {
		Ok(())
	}
	fn visit_end(&mut self) -> Result<()> {
		Ok(())
	}
}

impl AnnotationsVisitor for () {
	type ElementValuesVisitor = ();

	fn visit_annotation(&mut self, _type_descriptor: JavaString) -> Result<Option<()>> {
		Ok(Some(()))
	}
	fn finish_annotation(&mut self, _element_values_visitor: ()) -> Result<()> {
		Ok(())
	}
}

impl ElementValuesVisitor for () {
	type AnnotationVisitor = ();
	type ArrayVisitor = ();

	fn visit(&mut self, _name: JavaString, _value: Object) -> Result<()> {
		Ok(())
	}
	fn visit_enum(&mut self, _name: JavaString, _type_descriptor: JavaString, _const_name: JavaString) -> Result<()> {
		Ok(())
	}
	fn visit_class(&mut self, _name: JavaString, _class_descriptor: JavaString) -> Result<()> {
		Ok(())
	}
	fn visit_primitive_array(&mut self, _name: JavaString, _values: PrimitiveArray) -> Result<()> {
		Ok(())
	}
	fn visit_annotation(&mut self, _name: JavaString, _type_descriptor: JavaString) -> Result<Option<()>> {
		Ok(Some(()))
	}
	fn finish_annotation(&mut self, _annotation_visitor: ()) -> Result<()> {
		Ok(())
	}
	fn visit_array(&mut self, _name: JavaString) -> Result<Option<()>> {
		Ok(Some(()))
	}
	fn finish_array(&mut self, _array_visitor: ()) -> Result<()> {
		Ok(())
	}
}

impl ElementValueVisitor for () {
	type AnnotationVisitor = ();
	type ArrayVisitor = ();

	fn visit(&mut self, _value: Object) -> Result<()> {
		Ok(())
	}
	fn visit_enum(&mut self, _type_descriptor: JavaString, _const_name: JavaString) -> Result<()> {
		Ok(())
	}
	fn visit_class(&mut self, _class_descriptor: JavaString) -> Result<()> {
		Ok(())
	}
	fn visit_primitive_array(&mut self, _values: PrimitiveArray) -> Result<()> {
		Ok(())
	}
	fn visit_annotation(&mut self, _type_descriptor: JavaString) -> Result<Option<()>> {
		Ok(Some(()))
	}
	fn finish_annotation(&mut self, _annotation_visitor: ()) -> Result<()> {
		Ok(())
	}
	fn visit_array(&mut self) -> Result<Option<()>> {
		Ok(Some(()))
	}
	fn finish_array(&mut self, _array_visitor: ()) -> Result<()> {
		Ok(())
	}
}
