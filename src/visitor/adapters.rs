//! Pass-through visitors that forward every call to a delegate.
//!
//! These exist to be embedded in visitors that want to intercept a handful of
//! calls and hand everything else on unchanged, forming a transformation
//! pipeline ending in some collecting visitor.

use anyhow::Result;
use java_string::JavaString;

use crate::tree::class::{ClassAccess, EnclosingMethod, InnerClass};
use crate::tree::code::{ExceptionHandler, Label, LocalVariable, StackMapFrame};
use crate::tree::constant::{Constant, InvokeDynamic, MemberRef};
use crate::tree::field::{ConstantValue, FieldAccess};
use crate::tree::method::{MethodAccess, MethodParameter};
use crate::tree::version::Version;
use crate::visitor::class::ClassVisitor;
use crate::visitor::code::CodeVisitor;
use crate::visitor::field::FieldVisitor;
use crate::visitor::method::MethodVisitor;

pub struct ClassAdapter<V> {
	pub delegate: V,
}

impl<V> ClassAdapter<V> {
	pub fn new(delegate: V) -> ClassAdapter<V> {
		ClassAdapter { delegate }
	}
}

impl<V: ClassVisitor> ClassVisitor for ClassAdapter<V> {
	type AnnotationsVisitor = V::AnnotationsVisitor;
	type FieldVisitor = V::FieldVisitor;
	type MethodVisitor = V::MethodVisitor;
	type UnknownAttribute = V::UnknownAttribute;

	fn visit_header(&mut self, version: Version, access: ClassAccess, this_class: JavaString,
			super_class: Option<JavaString>, interfaces: Vec<JavaString>) -> Result<()> {
		self.delegate.visit_header(version, access, this_class, super_class, interfaces)
	}
	fn visit_signature(&mut self, signature: JavaString) -> Result<()> {
		self.delegate.visit_signature(signature)
	}
	fn visit_source(&mut self, source_file: Option<JavaString>, debug_extension: Option<JavaString>) -> Result<()> {
		self.delegate.visit_source(source_file, debug_extension)
	}
	fn visit_outer_class(&mut self, enclosing_method: EnclosingMethod) -> Result<()> {
		self.delegate.visit_outer_class(enclosing_method)
	}
	fn visit_deprecated_and_synthetic_attribute(&mut self, deprecated: bool, synthetic: bool) -> Result<()> {
		self.delegate.visit_deprecated_and_synthetic_attribute(deprecated, synthetic)
	}
	fn visit_annotations(&mut self, visible: bool) -> Result<Option<Self::AnnotationsVisitor>> {
		self.delegate.visit_annotations(visible)
	}
	fn finish_annotations(&mut self, annotations_visitor: Self::AnnotationsVisitor) -> Result<()> {
		self.delegate.finish_annotations(annotations_visitor)
	}
	fn visit_unknown_attribute(&mut self, unknown_attribute: Self::UnknownAttribute) -> Result<()> {
		self.delegate.visit_unknown_attribute(unknown_attribute)
	}
	fn visit_nest_host(&mut self, nest_host: JavaString) -> Result<()> {
		self.delegate.visit_nest_host(nest_host)
	}
	fn visit_nest_members(&mut self, nest_members: Vec<JavaString>) -> Result<()> {
		self.delegate.visit_nest_members(nest_members)
	}
	fn visit_permitted_subclasses(&mut self, permitted_subclasses: Vec<JavaString>) -> Result<()> {
		self.delegate.visit_permitted_subclasses(permitted_subclasses)
	}
	fn visit_inner_classes(&mut self, inner_classes: Vec<InnerClass>) -> Result<()> {
		self.delegate.visit_inner_classes(inner_classes)
	}
	fn visit_field(&mut self, access: FieldAccess, name: JavaString, descriptor: JavaString)
			-> Result<Option<Self::FieldVisitor>> {
		self.delegate.visit_field(access, name, descriptor)
	}
	fn finish_field(&mut self, field_visitor: Self::FieldVisitor) -> Result<()> {
		self.delegate.finish_field(field_visitor)
	}
	fn visit_method(&mut self, access: MethodAccess, name: JavaString, descriptor: JavaString)
			-> Result<Option<Self::MethodVisitor>> {
		self.delegate.visit_method(access, name, descriptor)
	}
	fn finish_method(&mut self, method_visitor: Self::MethodVisitor) -> Result<()> {
		self.delegate.finish_method(method_visitor)
	}
	fn visit_end(&mut self) -> Result<()> {
		self.delegate.visit_end()
	}
}

pub struct FieldAdapter<V> {
	pub delegate: V,
}

impl<V> FieldAdapter<V> {
	pub fn new(delegate: V) -> FieldAdapter<V> {
		FieldAdapter { delegate }
	}
}

impl<V: FieldVisitor> FieldVisitor for FieldAdapter<V> {
	type AnnotationsVisitor = V::AnnotationsVisitor;
	type UnknownAttribute = V::UnknownAttribute;

	fn visit_constant_value(&mut self, constant_value: ConstantValue) -> Result<()> {
		self.delegate.visit_constant_value(constant_value)
	}
	fn visit_signature(&mut self, signature: JavaString) -> Result<()> {
		self.delegate.visit_signature(signature)
	}
	fn visit_annotations(&mut self, visible: bool) -> Result<Option<Self::AnnotationsVisitor>> {
		self.delegate.visit_annotations(visible)
	}
	fn finish_annotations(&mut self, annotations_visitor: Self::AnnotationsVisitor) -> Result<()> {
		self.delegate.finish_annotations(annotations_visitor)
	}
	fn visit_unknown_attribute(&mut self, unknown_attribute: Self::UnknownAttribute) -> Result<()> {
		self.delegate.visit_unknown_attribute(unknown_attribute)
	}
	fn visit_deprecated_and_synthetic_attribute(&mut self, deprecated: bool, synthetic: bool) -> Result<()> {
		self.delegate.visit_deprecated_and_synthetic_attribute(deprecated, synthetic)
	}
	fn visit_end(&mut self) -> Result<()> {
		self.delegate.visit_end()
	}
}

pub struct MethodAdapter<V> {
	pub delegate: V,
}

impl<V> MethodAdapter<V> {
	pub fn new(delegate: V) -> MethodAdapter<V> {
		MethodAdapter { delegate }
	}
}

impl<V: MethodVisitor> MethodVisitor for MethodAdapter<V> {
	type AnnotationsVisitor = V::AnnotationsVisitor;
	type AnnotationDefaultVisitor = V::AnnotationDefaultVisitor;
	type CodeVisitor = V::CodeVisitor;
	type UnknownAttribute = V::UnknownAttribute;

	fn visit_code(&mut self) -> Result<Option<Self::CodeVisitor>> {
		self.delegate.visit_code()
	}
	fn finish_code(&mut self, code_visitor: Self::CodeVisitor) -> Result<()> {
		self.delegate.finish_code(code_visitor)
	}
	fn visit_exceptions(&mut self, exceptions: Vec<JavaString>) -> Result<()> {
		self.delegate.visit_exceptions(exceptions)
	}
	fn visit_signature(&mut self, signature: JavaString) -> Result<()> {
		self.delegate.visit_signature(signature)
	}
	fn visit_parameters(&mut self, parameters: Vec<MethodParameter>) -> Result<()> {
		self.delegate.visit_parameters(parameters)
	}
	fn visit_annotation_default(&mut self) -> Result<Option<Self::AnnotationDefaultVisitor>> {
		self.delegate.visit_annotation_default()
	}
	fn finish_annotation_default(&mut self, element_value_visitor: Self::AnnotationDefaultVisitor) -> Result<()> {
		self.delegate.finish_annotation_default(element_value_visitor)
	}
	fn visit_annotations(&mut self, visible: bool) -> Result<Option<Self::AnnotationsVisitor>> {
		self.delegate.visit_annotations(visible)
	}
	fn finish_annotations(&mut self, annotations_visitor: Self::AnnotationsVisitor) -> Result<()> {
		self.delegate.finish_annotations(annotations_visitor)
	}
	fn visit_unknown_attribute(&mut self, unknown_attribute: Self::UnknownAttribute) -> Result<()> {
		self.delegate.visit_unknown_attribute(unknown_attribute)
	}
	fn visit_deprecated_and_synthetic_attribute(&mut self, deprecated: bool, synthetic: bool) -> Result<()> {
		self.delegate.visit_deprecated_and_synthetic_attribute(deprecated, synthetic)
	}
	fn visit_end(&mut self) -> Result<()> {
		self.delegate.visit_end()
	}
}

pub struct CodeAdapter<V> {
	pub delegate: V,
}

impl<V> CodeAdapter<V> {
	pub fn new(delegate: V) -> CodeAdapter<V> {
		CodeAdapter { delegate }
	}
}

impl<V: CodeVisitor> CodeVisitor for CodeAdapter<V> {
	type UnknownAttribute = V::UnknownAttribute;

	fn visit_label(&mut self, label: Label) -> Result<()> {
		self.delegate.visit_label(label)
	}
	fn visit_line_number(&mut self, line: u16, start: Label) -> Result<()> {
		self.delegate.visit_line_number(line, start)
	}
	fn visit_frame(&mut self, frame: StackMapFrame) -> Result<()> {
		self.delegate.visit_frame(frame)
	}
	fn visit_insn(&mut self, opcode: u8) -> Result<()> {
		self.delegate.visit_insn(opcode)
	}
	fn visit_int_insn(&mut self, opcode: u8, operand: i32) -> Result<()> {
		self.delegate.visit_int_insn(opcode, operand)
	}
	fn visit_var_insn(&mut self, opcode: u8, var_index: u16) -> Result<()> {
		self.delegate.visit_var_insn(opcode, var_index)
	}
	fn visit_iinc_insn(&mut self, var_index: u16, increment: i16) -> Result<()> {
		self.delegate.visit_iinc_insn(var_index, increment)
	}
	fn visit_type_insn(&mut self, opcode: u8, class: JavaString) -> Result<()> {
		self.delegate.visit_type_insn(opcode, class)
	}
	fn visit_field_insn(&mut self, opcode: u8, member: MemberRef) -> Result<()> {
		self.delegate.visit_field_insn(opcode, member)
	}
	fn visit_method_insn(&mut self, opcode: u8, member: MemberRef, interface: bool) -> Result<()> {
		self.delegate.visit_method_insn(opcode, member, interface)
	}
	fn visit_invoke_dynamic_insn(&mut self, invoke_dynamic: InvokeDynamic) -> Result<()> {
		self.delegate.visit_invoke_dynamic_insn(invoke_dynamic)
	}
	fn visit_jump_insn(&mut self, opcode: u8, target: Label) -> Result<()> {
		self.delegate.visit_jump_insn(opcode, target)
	}
	fn visit_ldc_insn(&mut self, constant: Constant) -> Result<()> {
		self.delegate.visit_ldc_insn(constant)
	}
	fn visit_table_switch_insn(&mut self, default: Label, low: i32, high: i32, targets: Vec<Label>) -> Result<()> {
		self.delegate.visit_table_switch_insn(default, low, high, targets)
	}
	fn visit_lookup_switch_insn(&mut self, default: Label, pairs: Vec<(i32, Label)>) -> Result<()> {
		self.delegate.visit_lookup_switch_insn(default, pairs)
	}
	fn visit_multi_a_new_array_insn(&mut self, class: JavaString, dimensions: u8) -> Result<()> {
		self.delegate.visit_multi_a_new_array_insn(class, dimensions)
	}
	fn visit_exception_handler(&mut self, handler: ExceptionHandler) -> Result<()> {
		self.delegate.visit_exception_handler(handler)
	}
	fn visit_local_variable(&mut self, local_variable: LocalVariable) -> Result<()> {
		self.delegate.visit_local_variable(local_variable)
	}
	fn visit_unknown_attribute(&mut self, unknown_attribute: Self::UnknownAttribute) -> Result<()> {
		self.delegate.visit_unknown_attribute(unknown_attribute)
	}
	fn visit_maxs(&mut self, max_stack: u16, max_locals: u16) -> Result<()> {
		self.delegate.visit_maxs(max_stack, max_locals)
	}
	fn visit_end(&mut self) -> Result<()> {
		self.delegate.visit_end()
	}
}
