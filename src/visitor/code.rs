use anyhow::Result;
use java_string::JavaString;

use crate::tree::code::{ExceptionHandler, Label, LocalVariable, StackMapFrame};
use crate::tree::constant::{Constant, InvokeDynamic, MemberRef};
use crate::visitor::attribute::UnknownAttributeVisitor;

/// Visits the contents of one `Code` attribute.
///
/// Calls come in a fixed order: for each instruction, first the label of that
/// position (if any position marker points there), then line numbers, then a
/// stack map frame, then the instruction itself; after the last instruction a
/// trailing label may follow, then exception handlers, local variables,
/// unknown attributes, [`visit_maxs`][CodeVisitor::visit_maxs] and finally
/// [`visit_end`][CodeVisitor::visit_end].
///
/// Instructions come normalized: `aload_0` and friends arrive as
/// [`visit_var_insn`][CodeVisitor::visit_var_insn] with the base opcode,
/// `wide` variants arrive as their plain form with the widened operand, and
/// `goto_w`/`jsr_w` arrive as `goto`/`jsr`.
pub trait CodeVisitor
where
	Self: Sized,
	Self::UnknownAttribute: UnknownAttributeVisitor,
{
	type UnknownAttribute;

	fn visit_label(&mut self, label: Label) -> Result<()>;
	fn visit_line_number(&mut self, line: u16, start: Label) -> Result<()>;
	fn visit_frame(&mut self, frame: StackMapFrame) -> Result<()>;

	/// Visits an instruction without operands.
	fn visit_insn(&mut self, opcode: u8) -> Result<()>;
	/// Visits `bipush`, `sipush` or `newarray`.
	fn visit_int_insn(&mut self, opcode: u8, operand: i32) -> Result<()>;
	/// Visits a load, store or `ret` instruction.
	fn visit_var_insn(&mut self, opcode: u8, var_index: u16) -> Result<()>;
	fn visit_iinc_insn(&mut self, var_index: u16, increment: i16) -> Result<()>;
	/// Visits `new`, `anewarray`, `checkcast` or `instanceof`.
	fn visit_type_insn(&mut self, opcode: u8, class: JavaString) -> Result<()>;
	fn visit_field_insn(&mut self, opcode: u8, member: MemberRef) -> Result<()>;
	fn visit_method_insn(&mut self, opcode: u8, member: MemberRef, interface: bool) -> Result<()>;
	fn visit_invoke_dynamic_insn(&mut self, invoke_dynamic: InvokeDynamic) -> Result<()>;
	fn visit_jump_insn(&mut self, opcode: u8, target: Label) -> Result<()>;
	fn visit_ldc_insn(&mut self, constant: Constant) -> Result<()>;
	fn visit_table_switch_insn(&mut self, default: Label, low: i32, high: i32, targets: Vec<Label>) -> Result<()>;
	fn visit_lookup_switch_insn(&mut self, default: Label, pairs: Vec<(i32, Label)>) -> Result<()>;
	fn visit_multi_a_new_array_insn(&mut self, class: JavaString, dimensions: u8) -> Result<()>;

	fn visit_exception_handler(&mut self, handler: ExceptionHandler) -> Result<()>;
	fn visit_local_variable(&mut self, local_variable: LocalVariable) -> Result<()>;
	fn visit_unknown_attribute(&mut self, unknown_attribute: Self::UnknownAttribute) -> Result<()>;

	fn visit_maxs(&mut self, max_stack: u16, max_locals: u16) -> Result<()>;

	fn visit_end(&mut self) -> Result<()>;
}
