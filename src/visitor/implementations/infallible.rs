//! `Infallible` is a sub-visitor that can never be handed out. Use it as the
//! associated type of any `visit_*` that always declines.

// TODO: also impl this for the never type !, once that's stable
use std::convert::Infallible;
use anyhow::Result;
use java_string::JavaString;

use crate::tree::annotation::{Object, PrimitiveArray};
use crate::tree::code::{ExceptionHandler, Label, LocalVariable, StackMapFrame};
use crate::tree::constant::{Constant, InvokeDynamic, MemberRef};
use crate::tree::field::ConstantValue;
use crate::tree::method::MethodParameter;
use crate::visitor::annotation::{AnnotationsVisitor, ElementValueVisitor, ElementValuesVisitor};
use crate::visitor::code::CodeVisitor;
use crate::visitor::field::FieldVisitor;
use crate::visitor::method::MethodVisitor;

impl FieldVisitor for Infallible {
	type AnnotationsVisitor = Infallible;
	type UnknownAttribute = ();

	fn visit_constant_value(&mut self, _constant_value: ConstantValue) -> Result<()> {
		unreachable!()
	}
	fn visit_signature(&mut self, _signature: JavaString) -> Result<()> {
		unreachable!()
	}
	fn visit_annotations(&mut self, _visible: bool) -> Result<Option<Infallible>> {
		unreachable!()
	}
	fn finish_annotations(&mut self, _annotations_visitor: Infallible) -> Result<()> {
		unreachable!()
	}
	fn visit_unknown_attribute(&mut self, _unknown_attribute: ()) -> Result<()> {
		unreachable!()
	}
	fn visit_deprecated_and_synthetic_attribute(&mut self, _deprecated: bool, _synthetic: bool) -> Result<()> {
		unreachable!()
	}
	fn visit_end(&mut self) -> Result<()> {
		unreachable!()
	}
}

impl MethodVisitor for Infallible {
	type AnnotationsVisitor = Infallible;
	type AnnotationDefaultVisitor = Infallible;
	type CodeVisitor = Infallible;
	type UnknownAttribute = ();

	fn visit_code(&mut self) -> Result<Option<Infallible>> {
		unreachable!()
	}
	fn finish_code(&mut self, _code_visitor: Infallible) -> Result<()> {
		unreachable!()
	}
	fn visit_exceptions(&mut self, _exceptions: Vec<JavaString>) -> Result<()> {
		unreachable!()
	}
	fn visit_signature(&mut self, _signature: JavaString) -> Result<()> {
		unreachable!()
	}
	fn visit_parameters(&mut self, _parameters: Vec<MethodParameter>) -> Result<()> {
		unreachable!()
	}
	fn visit_annotation_default(&mut self) -> Result<Option<Infallible>> {
		unreachable!()
	}
	fn finish_annotation_default(&mut self, _element_value_visitor: Infallible) -> Result<()> {
		unreachable!()
	}
	fn visit_annotations(&mut self, _visible: bool) -> Result<Option<Infallible>> {
		unreachable!()
	}
	fn finish_annotations(&mut self, _annotations_visitor: Infallible) -> Result<()> {
		unreachable!()
	}
	fn visit_unknown_attribute(&mut self, _unknown_attribute: ()) -> Result<()> {
		unreachable!()
	}
	fn visit_deprecated_and_synthetic_attribute(&mut self, _deprecated: bool, _synthetic: bool) -> Result<()> {
		unreachable!()
	}
	fn visit_end(&mut self) -> Result<()> {
		unreachable!()
	}
}

impl CodeVisitor for Infallible {
	type UnknownAttribute = ();

	fn visit_label(&mut self, _label: Label) -> Result<()> {
		unreachable!()
	}
	fn visit_line_number(&mut self, _line: u16, _start: Label) -> Result<()> {
		unreachable!()
	}
	fn visit_frame(&mut self, _frame: StackMapFrame) -> Result<()> {
		unreachable!()
	}
	fn visit_insn(&mut self, _opcode: u8) -> Result<()> {
		unreachable!()
	}
	fn visit_int_insn(&mut self, _opcode: u8, _operand: i32) -> Result<()> {
		unreachable!()
	}
	fn visit_var_insn(&mut self, _opcode: u8, _var_index: u16) -> Result<()> {
		unreachable!()
	}
	fn visit_iinc_insn(&mut self, _var_index: u16, _increment: i16) -> Result<()> {
		unreachable!()
	}
	fn visit_type_insn(&mut self, _opcode: u8, _class: JavaString) -> Result<()> {
		unreachable!()
	}
	fn visit_field_insn(&mut self, _opcode: u8, _member: MemberRef) -> Result<()> {
		unreachable!()
	}
	fn visit_method_insn(&mut self, _opcode: u8, _member: MemberRef, _interface: bool) -> Result<()> {
		unreachable!()
	}
	fn visit_invoke_dynamic_insn(&mut self, _invoke_dynamic: InvokeDynamic) -> Result<()> {
		unreachable!()
	}
	fn visit_jump_insn(&mut self, _opcode: u8, _target: Label) -> Result<()> {
		unreachable!()
	}
	fn visit_ldc_insn(&mut self, _constant: Constant) -> Result<()> {
		unreachable!()
	}
	fn visit_table_switch_insn(&mut self, _default: Label, _low: i32, _high: i32, _targets: Vec<Label>) -> Result<()> {
		unreachable!()
	}
	fn visit_lookup_switch_insn(&mut self, _default: Label, _pairs: Vec<(i32, Label)>) -> Result<()> {
		unreachable!()
	}
	fn visit_multi_a_new_array_insn(&mut self, _class: JavaString, _dimensions: u8) -> Result<()> {
		unreachable!()
	}
	fn visit_exception_handler(&mut self, _handler: ExceptionHandler) -> Result<()> {
		unreachable!()
	}
	fn visit_local_variable(&mut self, _local_variable: LocalVariable) -> Result<()> {
		unreachable!()
	}
	fn visit_unknown_attribute(&mut self, _unknown_attribute: ()) -> Result<()> {
		unreachable!()
	}
	fn visit_maxs(&mut self, _max_stack: u16, _max_locals: u16) -> Result<()> {
		unreachable!()
	}
	fn visit_end(&mut self) -> Result<()> {
		unreachable!()
	}
}

impl AnnotationsVisitor for Infallible {
	type ElementValuesVisitor = Infallible;

	fn visit_annotation(&mut self, _type_descriptor: JavaString) -> Result<Option<Infallible>> {
		unreachable!()
	}
	fn finish_annotation(&mut self, _element_values_visitor: Infallible) -> Result<()> {
		unreachable!()
	}
}

impl ElementValuesVisitor for Infallible {
	type AnnotationVisitor = Infallible;
	type ArrayVisitor = Infallible;

	fn visit(&mut self, _name: JavaString, _value: Object) -> Result<()> {
		unreachable!()
	}
	fn visit_enum(&mut self, _name: JavaString, _type_descriptor: JavaString, _const_name: JavaString) -> Result<()> {
		unreachable!()
	}
	fn visit_class(&mut self, _name: JavaString, _class_descriptor: JavaString) -> Result<()> {
		unreachable!()
	}
	fn visit_primitive_array(&mut self, _name: JavaString, _values: PrimitiveArray) -> Result<()> {
		unreachable!()
	}
	fn visit_annotation(&mut self, _name: JavaString, _type_descriptor: JavaString) -> Result<Option<Infallible>> {
		unreachable!()
	}
	fn finish_annotation(&mut self, _annotation_visitor: Infallible) -> Result<()> {
		unreachable!()
	}
	fn visit_array(&mut self, _name: JavaString) -> Result<Option<Infallible>> {
		unreachable!()
	}
	fn finish_array(&mut self, _array_visitor: Infallible) -> Result<()> {
		unreachable!()
	}
}

impl ElementValueVisitor for Infallible {
	type AnnotationVisitor = Infallible;
	type ArrayVisitor = Infallible;

	fn visit(&mut self, _value: Object) -> Result<()> {
		unreachable!()
	}
	fn visit_enum(&mut self, _type_descriptor: JavaString, _const_name: JavaString) -> Result<()> {
		unreachable!()
	}
	fn visit_class(&mut self, _class_descriptor: JavaString) -> Result<()> {
		unreachable!()
	}
	fn visit_primitive_array(&mut self, _values: PrimitiveArray) -> Result<()> {
		unreachable!()
	}
	fn visit_annotation(&mut self, _type_descriptor: JavaString) -> Result<Option<Infallible>> {
		unreachable!()
	}
	fn finish_annotation(&mut self, _annotation_visitor: Infallible) -> Result<()> {
		unreachable!()
	}
	fn visit_array(&mut self) -> Result<Option<Infallible>> {
		unreachable!()
	}
	fn finish_array(&mut self, _array_visitor: Infallible) -> Result<()> {
		unreachable!()
	}
}
