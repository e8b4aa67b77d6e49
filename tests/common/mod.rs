//! A small assembler for class files and a visitor that records every call,
//! shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;
use java_string::JavaString;

use coffer::tree::annotation::{Object, PrimitiveArray};
use coffer::tree::Attribute;
use coffer::tree::class::{ClassAccess, EnclosingMethod, InnerClass};
use coffer::tree::code::{ExceptionHandler, Label, LocalVariable, StackMapFrame};
use coffer::tree::constant::{Constant, InvokeDynamic, MemberRef};
use coffer::tree::field::{ConstantValue, FieldAccess};
use coffer::tree::method::{MethodAccess, MethodParameter};
use coffer::tree::Version;
use coffer::visitor::annotation::{AnnotationsVisitor, ElementValueVisitor, ElementValuesVisitor};
use coffer::visitor::class::ClassVisitor;
use coffer::visitor::code::CodeVisitor;
use coffer::visitor::field::FieldVisitor;
use coffer::visitor::method::MethodVisitor;

/// Assembles a class file byte for byte, deduplicating constant pool entries.
pub struct ClassFileBuilder {
	entries: Vec<Vec<u8>>,
	dedup: HashMap<Vec<u8>, u16>,
	/// One more than `entries.len()` accounts for, per `Long`/`Double` entry.
	extra_slots: u16,
	access: u16,
	this_class: u16,
	super_class: u16,
	interfaces: Vec<u16>,
	fields: Vec<Vec<u8>>,
	methods: Vec<Vec<u8>>,
	attributes: Vec<Vec<u8>>,
}

impl ClassFileBuilder {
	pub fn new() -> ClassFileBuilder {
		let mut builder = ClassFileBuilder {
			entries: Vec::new(),
			dedup: HashMap::new(),
			extra_slots: 0,
			access: 0x0021, // public super
			this_class: 0,
			super_class: 0,
			interfaces: Vec::new(),
			fields: Vec::new(),
			methods: Vec::new(),
			attributes: Vec::new(),
		};
		builder.this_class = builder.class("a/Main");
		builder.super_class = builder.class("java/lang/Object");
		builder
	}

	fn entry(&mut self, bytes: Vec<u8>, wide: bool) -> u16 {
		if let Some(&index) = self.dedup.get(&bytes) {
			return index;
		}
		let index = 1 + self.entries.len() as u16 + self.extra_slots;
		self.dedup.insert(bytes.clone(), index);
		self.entries.push(bytes);
		if wide {
			self.extra_slots += 1;
		}
		index
	}

	/// Adds a hand-built entry, tag byte included. For entry kinds the typed
	/// helpers below do not cover, and for deliberately broken entries.
	pub fn raw(&mut self, bytes: Vec<u8>, wide: bool) -> u16 {
		self.entry(bytes, wide)
	}

	pub fn utf8(&mut self, value: &str) -> u16 {
		let mut bytes = vec![1];
		bytes.extend((value.len() as u16).to_be_bytes());
		bytes.extend(value.as_bytes());
		self.entry(bytes, false)
	}

	pub fn integer(&mut self, value: i32) -> u16 {
		let mut bytes = vec![3];
		bytes.extend(value.to_be_bytes());
		self.entry(bytes, false)
	}

	pub fn float(&mut self, value: f32) -> u16 {
		let mut bytes = vec![4];
		bytes.extend(value.to_be_bytes());
		self.entry(bytes, false)
	}

	pub fn long(&mut self, value: i64) -> u16 {
		let mut bytes = vec![5];
		bytes.extend(value.to_be_bytes());
		self.entry(bytes, true)
	}

	pub fn double(&mut self, value: f64) -> u16 {
		let mut bytes = vec![6];
		bytes.extend(value.to_be_bytes());
		self.entry(bytes, true)
	}

	pub fn class(&mut self, name: &str) -> u16 {
		let name = self.utf8(name);
		let mut bytes = vec![7];
		bytes.extend(name.to_be_bytes());
		self.entry(bytes, false)
	}

	pub fn string(&mut self, value: &str) -> u16 {
		let value = self.utf8(value);
		let mut bytes = vec![8];
		bytes.extend(value.to_be_bytes());
		self.entry(bytes, false)
	}

	pub fn name_and_type(&mut self, name: &str, descriptor: &str) -> u16 {
		let name = self.utf8(name);
		let descriptor = self.utf8(descriptor);
		let mut bytes = vec![12];
		bytes.extend(name.to_be_bytes());
		bytes.extend(descriptor.to_be_bytes());
		self.entry(bytes, false)
	}

	fn member_ref(&mut self, tag: u8, class: &str, name: &str, descriptor: &str) -> u16 {
		let class = self.class(class);
		let name_and_type = self.name_and_type(name, descriptor);
		let mut bytes = vec![tag];
		bytes.extend(class.to_be_bytes());
		bytes.extend(name_and_type.to_be_bytes());
		self.entry(bytes, false)
	}

	pub fn field_ref(&mut self, class: &str, name: &str, descriptor: &str) -> u16 {
		self.member_ref(9, class, name, descriptor)
	}

	pub fn method_ref(&mut self, class: &str, name: &str, descriptor: &str) -> u16 {
		self.member_ref(10, class, name, descriptor)
	}

	pub fn interface_method_ref(&mut self, class: &str, name: &str, descriptor: &str) -> u16 {
		self.member_ref(11, class, name, descriptor)
	}

	pub fn set_this_class(&mut self, name: &str) {
		self.this_class = self.class(name);
	}

	pub fn interface(&mut self, name: &str) {
		let index = self.class(name);
		self.interfaces.push(index);
	}

	/// Wraps an attribute body with its name index and length.
	pub fn attr(&mut self, name: &str, body: Vec<u8>) -> Vec<u8> {
		let name = self.utf8(name);
		let mut bytes = Vec::with_capacity(6 + body.len());
		bytes.extend(name.to_be_bytes());
		bytes.extend((body.len() as u32).to_be_bytes());
		bytes.extend(body);
		bytes
	}

	pub fn class_attr(&mut self, name: &str, body: Vec<u8>) {
		let attr = self.attr(name, body);
		self.attributes.push(attr);
	}

	pub fn field(&mut self, access: u16, name: &str, descriptor: &str, attributes: Vec<Vec<u8>>) {
		let member = self.member(access, name, descriptor, attributes);
		self.fields.push(member);
	}

	pub fn method(&mut self, access: u16, name: &str, descriptor: &str, attributes: Vec<Vec<u8>>) {
		let member = self.member(access, name, descriptor, attributes);
		self.methods.push(member);
	}

	fn member(&mut self, access: u16, name: &str, descriptor: &str, attributes: Vec<Vec<u8>>) -> Vec<u8> {
		let name = self.utf8(name);
		let descriptor = self.utf8(descriptor);
		let mut bytes = Vec::new();
		bytes.extend(access.to_be_bytes());
		bytes.extend(name.to_be_bytes());
		bytes.extend(descriptor.to_be_bytes());
		bytes.extend((attributes.len() as u16).to_be_bytes());
		for attribute in attributes {
			bytes.extend(attribute);
		}
		bytes
	}

	/// The body of a `Code` attribute; wrap it with
	/// [`attr`][ClassFileBuilder::attr].
	pub fn code_body(
		&mut self,
		max_stack: u16,
		max_locals: u16,
		bytecode: &[u8],
		exception_table: &[(u16, u16, u16, u16)],
		attributes: Vec<Vec<u8>>,
	) -> Vec<u8> {
		let mut bytes = Vec::new();
		bytes.extend(max_stack.to_be_bytes());
		bytes.extend(max_locals.to_be_bytes());
		bytes.extend((bytecode.len() as u32).to_be_bytes());
		bytes.extend(bytecode);
		bytes.extend((exception_table.len() as u16).to_be_bytes());
		for &(start_pc, end_pc, handler_pc, catch_type) in exception_table {
			bytes.extend(start_pc.to_be_bytes());
			bytes.extend(end_pc.to_be_bytes());
			bytes.extend(handler_pc.to_be_bytes());
			bytes.extend(catch_type.to_be_bytes());
		}
		bytes.extend((attributes.len() as u16).to_be_bytes());
		for attribute in attributes {
			bytes.extend(attribute);
		}
		bytes
	}

	pub fn build(self) -> Vec<u8> {
		let mut bytes = Vec::new();
		bytes.extend(0xcafebabe_u32.to_be_bytes());
		bytes.extend(0_u16.to_be_bytes()); // minor
		bytes.extend(52_u16.to_be_bytes()); // major, Java 8

		bytes.extend((1 + self.entries.len() as u16 + self.extra_slots).to_be_bytes());
		for entry in &self.entries {
			bytes.extend(entry);
		}

		bytes.extend(self.access.to_be_bytes());
		bytes.extend(self.this_class.to_be_bytes());
		bytes.extend(self.super_class.to_be_bytes());
		bytes.extend((self.interfaces.len() as u16).to_be_bytes());
		for interface in &self.interfaces {
			bytes.extend(interface.to_be_bytes());
		}

		bytes.extend((self.fields.len() as u16).to_be_bytes());
		for field in &self.fields {
			bytes.extend(field);
		}
		bytes.extend((self.methods.len() as u16).to_be_bytes());
		for method in &self.methods {
			bytes.extend(method);
		}

		bytes.extend((self.attributes.len() as u16).to_be_bytes());
		for attribute in &self.attributes {
			bytes.extend(attribute);
		}

		bytes
	}
}

/// Records every visitor call as one line, so tests can assert on the whole
/// call sequence. Sub-visitors are clones sharing the same log.
#[derive(Clone)]
pub struct Recorder {
	log: Rc<RefCell<Vec<String>>>,
	pub accept_fields: bool,
	pub accept_methods: bool,
	pub accept_code: bool,
	pub accept_annotations: bool,
	pub accept_nested_annotations: bool,
}

impl Recorder {
	pub fn new() -> Recorder {
		Recorder {
			log: Rc::new(RefCell::new(Vec::new())),
			accept_fields: true,
			accept_methods: true,
			accept_code: true,
			accept_annotations: true,
			accept_nested_annotations: true,
		}
	}

	fn push(&self, event: String) {
		self.log.borrow_mut().push(event);
	}

	pub fn events(&self) -> Vec<String> {
		self.log.borrow().clone()
	}
}

impl ClassVisitor for Recorder {
	type AnnotationsVisitor = Recorder;
	type FieldVisitor = Recorder;
	type MethodVisitor = Recorder;
	type UnknownAttribute = Attribute;

	fn visit_header(&mut self, version: Version, _access: ClassAccess, this_class: JavaString,
			super_class: Option<JavaString>, interfaces: Vec<JavaString>) -> Result<()> {
		self.push(format!("header v{} {this_class:?} super {super_class:?} interfaces {interfaces:?}", version.major));
		Ok(())
	}

	fn visit_signature(&mut self, signature: JavaString) -> Result<()> {
		self.push(format!("class signature {signature:?}"));
		Ok(())
	}

	fn visit_source(&mut self, source_file: Option<JavaString>, debug_extension: Option<JavaString>) -> Result<()> {
		self.push(format!("source {source_file:?} {debug_extension:?}"));
		Ok(())
	}

	fn visit_outer_class(&mut self, enclosing_method: EnclosingMethod) -> Result<()> {
		self.push(format!("outer class {:?} method {:?}", enclosing_method.class, enclosing_method.method));
		Ok(())
	}

	fn visit_deprecated_and_synthetic_attribute(&mut self, deprecated: bool, synthetic: bool) -> Result<()> {
		self.push(format!("class deprecated {deprecated} synthetic {synthetic}"));
		Ok(())
	}

	fn visit_annotations(&mut self, visible: bool) -> Result<Option<Recorder>> {
		if self.accept_annotations {
			self.push(format!("class annotations visible {visible}"));
			Ok(Some(self.clone()))
		} else {
			self.push(format!("class annotations visible {visible} declined"));
			Ok(None)
		}
	}

	fn finish_annotations(&mut self, _annotations_visitor: Recorder) -> Result<()> {
		self.push("finish class annotations".to_owned());
		Ok(())
	}

	fn visit_unknown_attribute(&mut self, unknown_attribute: Attribute) -> Result<()> {
		self.push(format!("class unknown {:?} ({} bytes)", unknown_attribute.name, unknown_attribute.bytes.len()));
		Ok(())
	}

	fn visit_nest_host(&mut self, nest_host: JavaString) -> Result<()> {
		self.push(format!("nest host {nest_host:?}"));
		Ok(())
	}

	fn visit_nest_members(&mut self, nest_members: Vec<JavaString>) -> Result<()> {
		self.push(format!("nest members {nest_members:?}"));
		Ok(())
	}

	fn visit_permitted_subclasses(&mut self, permitted_subclasses: Vec<JavaString>) -> Result<()> {
		self.push(format!("permitted subclasses {permitted_subclasses:?}"));
		Ok(())
	}

	fn visit_inner_classes(&mut self, inner_classes: Vec<InnerClass>) -> Result<()> {
		let names: Vec<_> = inner_classes.iter().map(|entry| entry.inner_class.clone()).collect();
		self.push(format!("inner classes {names:?}"));
		Ok(())
	}

	fn visit_field(&mut self, _access: FieldAccess, name: JavaString, descriptor: JavaString)
			-> Result<Option<Recorder>> {
		if self.accept_fields {
			self.push(format!("field {name:?} {descriptor:?}"));
			Ok(Some(self.clone()))
		} else {
			self.push(format!("field {name:?} {descriptor:?} declined"));
			Ok(None)
		}
	}

	fn finish_field(&mut self, _field_visitor: Recorder) -> Result<()> {
		self.push("finish field".to_owned());
		Ok(())
	}

	fn visit_method(&mut self, _access: MethodAccess, name: JavaString, descriptor: JavaString)
			-> Result<Option<Recorder>> {
		if self.accept_methods {
			self.push(format!("method {name:?} {descriptor:?}"));
			Ok(Some(self.clone()))
		} else {
			self.push(format!("method {name:?} {descriptor:?} declined"));
			Ok(None)
		}
	}

	fn finish_method(&mut self, _method_visitor: Recorder) -> Result<()> {
		self.push("finish method".to_owned());
		Ok(())
	}

	fn visit_end(&mut self) -> Result<()> {
		self.push("class end".to_owned());
		Ok(())
	}
}

impl FieldVisitor for Recorder {
	type AnnotationsVisitor = Recorder;
	type UnknownAttribute = Attribute;

	fn visit_constant_value(&mut self, constant_value: ConstantValue) -> Result<()> {
		self.push(format!("constant value {constant_value:?}"));
		Ok(())
	}

	fn visit_signature(&mut self, signature: JavaString) -> Result<()> {
		self.push(format!("field signature {signature:?}"));
		Ok(())
	}

	fn visit_annotations(&mut self, visible: bool) -> Result<Option<Recorder>> {
		if self.accept_annotations {
			self.push(format!("field annotations visible {visible}"));
			Ok(Some(self.clone()))
		} else {
			self.push(format!("field annotations visible {visible} declined"));
			Ok(None)
		}
	}

	fn finish_annotations(&mut self, _annotations_visitor: Recorder) -> Result<()> {
		self.push("finish field annotations".to_owned());
		Ok(())
	}

	fn visit_unknown_attribute(&mut self, unknown_attribute: Attribute) -> Result<()> {
		self.push(format!("field unknown {:?} ({} bytes)", unknown_attribute.name, unknown_attribute.bytes.len()));
		Ok(())
	}

	fn visit_deprecated_and_synthetic_attribute(&mut self, deprecated: bool, synthetic: bool) -> Result<()> {
		self.push(format!("field deprecated {deprecated} synthetic {synthetic}"));
		Ok(())
	}

	fn visit_end(&mut self) -> Result<()> {
		self.push("field end".to_owned());
		Ok(())
	}
}

impl MethodVisitor for Recorder {
	type AnnotationsVisitor = Recorder;
	type AnnotationDefaultVisitor = Recorder;
	type CodeVisitor = Recorder;
	type UnknownAttribute = Attribute;

	fn visit_code(&mut self) -> Result<Option<Recorder>> {
		if self.accept_code {
			self.push("code".to_owned());
			Ok(Some(self.clone()))
		} else {
			self.push("code declined".to_owned());
			Ok(None)
		}
	}

	fn finish_code(&mut self, _code_visitor: Recorder) -> Result<()> {
		self.push("finish code".to_owned());
		Ok(())
	}

	fn visit_exceptions(&mut self, exceptions: Vec<JavaString>) -> Result<()> {
		self.push(format!("throws {exceptions:?}"));
		Ok(())
	}

	fn visit_signature(&mut self, signature: JavaString) -> Result<()> {
		self.push(format!("method signature {signature:?}"));
		Ok(())
	}

	fn visit_parameters(&mut self, parameters: Vec<MethodParameter>) -> Result<()> {
		let names: Vec<_> = parameters.into_iter().map(|parameter| parameter.name).collect();
		self.push(format!("parameters {names:?}"));
		Ok(())
	}

	fn visit_annotation_default(&mut self) -> Result<Option<Recorder>> {
		self.push("annotation default".to_owned());
		Ok(Some(self.clone()))
	}

	fn finish_annotation_default(&mut self, _element_value_visitor: Recorder) -> Result<()> {
		self.push("finish annotation default".to_owned());
		Ok(())
	}

	fn visit_annotations(&mut self, visible: bool) -> Result<Option<Recorder>> {
		if self.accept_annotations {
			self.push(format!("method annotations visible {visible}"));
			Ok(Some(self.clone()))
		} else {
			self.push(format!("method annotations visible {visible} declined"));
			Ok(None)
		}
	}

	fn finish_annotations(&mut self, _annotations_visitor: Recorder) -> Result<()> {
		self.push("finish method annotations".to_owned());
		Ok(())
	}

	fn visit_unknown_attribute(&mut self, unknown_attribute: Attribute) -> Result<()> {
		self.push(format!("method unknown {:?} ({} bytes)", unknown_attribute.name, unknown_attribute.bytes.len()));
		Ok(())
	}

	fn visit_deprecated_and_synthetic_attribute(&mut self, deprecated: bool, synthetic: bool) -> Result<()> {
		self.push(format!("method deprecated {deprecated} synthetic {synthetic}"));
		Ok(())
	}

	fn visit_end(&mut self) -> Result<()> {
		self.push("method end".to_owned());
		Ok(())
	}
}

impl CodeVisitor for Recorder {
	type UnknownAttribute = Attribute;

	fn visit_label(&mut self, label: Label) -> Result<()> {
		self.push(format!("label {}", label.id));
		Ok(())
	}

	fn visit_line_number(&mut self, line: u16, start: Label) -> Result<()> {
		self.push(format!("line {line} at {}", start.id));
		Ok(())
	}

	fn visit_frame(&mut self, frame: StackMapFrame) -> Result<()> {
		self.push(format!("frame {frame:?}"));
		Ok(())
	}

	fn visit_insn(&mut self, opcode: u8) -> Result<()> {
		self.push(format!("insn {opcode:#04x}"));
		Ok(())
	}

	fn visit_int_insn(&mut self, opcode: u8, operand: i32) -> Result<()> {
		self.push(format!("int insn {opcode:#04x} {operand}"));
		Ok(())
	}

	fn visit_var_insn(&mut self, opcode: u8, var_index: u16) -> Result<()> {
		self.push(format!("var insn {opcode:#04x} {var_index}"));
		Ok(())
	}

	fn visit_iinc_insn(&mut self, var_index: u16, increment: i16) -> Result<()> {
		self.push(format!("iinc {var_index} by {increment}"));
		Ok(())
	}

	fn visit_type_insn(&mut self, opcode: u8, class: JavaString) -> Result<()> {
		self.push(format!("type insn {opcode:#04x} {class:?}"));
		Ok(())
	}

	fn visit_field_insn(&mut self, opcode: u8, member: MemberRef) -> Result<()> {
		self.push(format!("field insn {opcode:#04x} {:?}.{:?}", member.class, member.name));
		Ok(())
	}

	fn visit_method_insn(&mut self, opcode: u8, member: MemberRef, interface: bool) -> Result<()> {
		self.push(format!("method insn {opcode:#04x} {:?}.{:?} interface {interface}", member.class, member.name));
		Ok(())
	}

	fn visit_invoke_dynamic_insn(&mut self, invoke_dynamic: InvokeDynamic) -> Result<()> {
		self.push(format!("invokedynamic {:?} {:?}", invoke_dynamic.name, invoke_dynamic.descriptor));
		Ok(())
	}

	fn visit_jump_insn(&mut self, opcode: u8, target: Label) -> Result<()> {
		self.push(format!("jump {opcode:#04x} to {}", target.id));
		Ok(())
	}

	fn visit_ldc_insn(&mut self, constant: Constant) -> Result<()> {
		self.push(format!("ldc {constant:?}"));
		Ok(())
	}

	fn visit_table_switch_insn(&mut self, default: Label, low: i32, high: i32, targets: Vec<Label>) -> Result<()> {
		let targets: Vec<_> = targets.iter().map(|label| label.id).collect();
		self.push(format!("tableswitch {low}..={high} default {} targets {targets:?}", default.id));
		Ok(())
	}

	fn visit_lookup_switch_insn(&mut self, default: Label, pairs: Vec<(i32, Label)>) -> Result<()> {
		let pairs: Vec<_> = pairs.iter().map(|&(key, label)| (key, label.id)).collect();
		self.push(format!("lookupswitch default {} pairs {pairs:?}", default.id));
		Ok(())
	}

	fn visit_multi_a_new_array_insn(&mut self, class: JavaString, dimensions: u8) -> Result<()> {
		self.push(format!("multianewarray {class:?} dim {dimensions}"));
		Ok(())
	}

	fn visit_exception_handler(&mut self, handler: ExceptionHandler) -> Result<()> {
		self.push(format!("handler {}..{} at {} catch {:?}",
			handler.start.id, handler.end.id, handler.handler.id, handler.catch_type));
		Ok(())
	}

	fn visit_local_variable(&mut self, local_variable: LocalVariable) -> Result<()> {
		self.push(format!("local {:?} {:?} sig {:?} index {}",
			local_variable.name, local_variable.descriptor, local_variable.signature, local_variable.index));
		Ok(())
	}

	fn visit_unknown_attribute(&mut self, unknown_attribute: Attribute) -> Result<()> {
		self.push(format!("code unknown {:?} ({} bytes)", unknown_attribute.name, unknown_attribute.bytes.len()));
		Ok(())
	}

	fn visit_maxs(&mut self, max_stack: u16, max_locals: u16) -> Result<()> {
		self.push(format!("maxs {max_stack} {max_locals}"));
		Ok(())
	}

	fn visit_end(&mut self) -> Result<()> {
		self.push("code end".to_owned());
		Ok(())
	}
}

impl AnnotationsVisitor for Recorder {
	type ElementValuesVisitor = Recorder;

	fn visit_annotation(&mut self, type_descriptor: JavaString) -> Result<Option<Recorder>> {
		self.push(format!("annotation {type_descriptor:?}"));
		Ok(Some(self.clone()))
	}

	fn finish_annotation(&mut self, _element_values_visitor: Recorder) -> Result<()> {
		self.push("finish annotation".to_owned());
		Ok(())
	}
}

impl ElementValuesVisitor for Recorder {
	type AnnotationVisitor = Recorder;
	type ArrayVisitor = Recorder;

	fn visit(&mut self, name: JavaString, value: Object) -> Result<()> {
		self.push(format!("element {name:?} {value:?}"));
		Ok(())
	}

	fn visit_enum(&mut self, name: JavaString, type_descriptor: JavaString, const_name: JavaString) -> Result<()> {
		self.push(format!("element {name:?} enum {type_descriptor:?} {const_name:?}"));
		Ok(())
	}

	fn visit_class(&mut self, name: JavaString, class_descriptor: JavaString) -> Result<()> {
		self.push(format!("element {name:?} class {class_descriptor:?}"));
		Ok(())
	}

	fn visit_primitive_array(&mut self, name: JavaString, values: PrimitiveArray) -> Result<()> {
		self.push(format!("element {name:?} primitive array {values:?}"));
		Ok(())
	}

	fn visit_annotation(&mut self, name: JavaString, type_descriptor: JavaString) -> Result<Option<Recorder>> {
		if self.accept_nested_annotations {
			self.push(format!("element {name:?} annotation {type_descriptor:?}"));
			Ok(Some(self.clone()))
		} else {
			self.push(format!("element {name:?} annotation {type_descriptor:?} declined"));
			Ok(None)
		}
	}

	fn finish_annotation(&mut self, _annotation_visitor: Recorder) -> Result<()> {
		self.push("finish nested annotation".to_owned());
		Ok(())
	}

	fn visit_array(&mut self, name: JavaString) -> Result<Option<Recorder>> {
		self.push(format!("element {name:?} array"));
		Ok(Some(self.clone()))
	}

	fn finish_array(&mut self, _array_visitor: Recorder) -> Result<()> {
		self.push("finish array".to_owned());
		Ok(())
	}
}

impl ElementValueVisitor for Recorder {
	type AnnotationVisitor = Recorder;
	type ArrayVisitor = Recorder;

	fn visit(&mut self, value: Object) -> Result<()> {
		self.push(format!("value {value:?}"));
		Ok(())
	}

	fn visit_enum(&mut self, type_descriptor: JavaString, const_name: JavaString) -> Result<()> {
		self.push(format!("value enum {type_descriptor:?} {const_name:?}"));
		Ok(())
	}

	fn visit_class(&mut self, class_descriptor: JavaString) -> Result<()> {
		self.push(format!("value class {class_descriptor:?}"));
		Ok(())
	}

	fn visit_primitive_array(&mut self, values: PrimitiveArray) -> Result<()> {
		self.push(format!("value primitive array {values:?}"));
		Ok(())
	}

	fn visit_annotation(&mut self, type_descriptor: JavaString) -> Result<Option<Recorder>> {
		self.push(format!("value annotation {type_descriptor:?}"));
		Ok(Some(self.clone()))
	}

	fn finish_annotation(&mut self, _annotation_visitor: Recorder) -> Result<()> {
		self.push("finish nested annotation".to_owned());
		Ok(())
	}

	fn visit_array(&mut self) -> Result<Option<Recorder>> {
		self.push("value array".to_owned());
		Ok(Some(self.clone()))
	}

	fn finish_array(&mut self, _array_visitor: Recorder) -> Result<()> {
		self.push("finish array".to_owned());
		Ok(())
	}
}
