//! Reading of the `Code` attribute.
//!
//! The bytecode is walked twice. The first pass validates every opcode and
//! creates labels for branch targets; together with the labels from the
//! exception table, the debug tables and the stack map table, all labels
//! exist before the second pass emits instructions, so branches can point
//! forwards. The second pass decodes operands against the constant pool and
//! drives the visitor.

use anyhow::{anyhow, bail, Context, Result};
use java_string::{JavaStr, JavaString};

use crate::class_constants::{atype, attribute, opcode};
use crate::class_reader::ReaderFlags;
use crate::class_reader::frames;
use crate::class_reader::frames::FrameDecoder;
use crate::class_reader::labels::Labels;
use crate::class_reader::pool::{BootstrapMethodRead, ConstantPool};
use crate::cursor::Cursor;
use crate::tree::code::{ExceptionHandler, LabelRange, LocalVariable};
use crate::tree::method::MethodAccess;
use crate::visitor::attribute::UnknownAttributeVisitor;
use crate::visitor::code::CodeVisitor;

/// The method a `Code` attribute belongs to, for deriving the implicit first
/// stack map frame.
pub(crate) struct MethodContext<'a> {
	pub(crate) class_name: &'a JavaStr,
	pub(crate) access: MethodAccess,
	pub(crate) name: &'a JavaStr,
	pub(crate) descriptor: &'a JavaStr,
}

fn branch_target(opcode_pos: u16, branch: i32) -> Result<u16> {
	let target = (opcode_pos as i64) + (branch as i64);
	u16::try_from(target)
		.map_err(|_| anyhow!("branch target {target} is outside the bytecode"))
}

fn branch_target_i16(r: &mut Cursor, opcode_pos: u16) -> Result<u16> {
	let branch = r.read_i16()? as i32;
	branch_target(opcode_pos, branch)
}

fn branch_target_i32(r: &mut Cursor, opcode_pos: u16) -> Result<u16> {
	let branch = r.read_i32()?;
	branch_target(opcode_pos, branch)
}

/// The first pass: checks that every opcode is known and its operands are in
/// bounds, and creates a label per branch target.
fn discover_branch_targets(bytecode: &[u8], labels: &mut Labels) -> Result<()> {
	let mut r = Cursor::new(bytecode);
	while r.remaining() > 0 {
		let opcode_pos = r.pos() as u16;
		let opcode = r.read_u8()?;
		match opcode {
			opcode::NOP..=opcode::DCONST_1 |
			opcode::ILOAD_0..=opcode::SALOAD |
			opcode::ISTORE_0..=opcode::LXOR |
			opcode::I2L..=opcode::DCMPG |
			opcode::IRETURN..=opcode::RETURN |
			opcode::ARRAYLENGTH |
			opcode::ATHROW |
			opcode::MONITORENTER |
			opcode::MONITOREXIT => {},

			opcode::BIPUSH |
			opcode::LDC |
			opcode::ILOAD..=opcode::ALOAD |
			opcode::ISTORE..=opcode::ASTORE |
			opcode::RET |
			opcode::NEWARRAY => r.skip(1)?,

			opcode::SIPUSH |
			opcode::LDC_W |
			opcode::LDC2_W |
			opcode::IINC |
			opcode::GETSTATIC..=opcode::INVOKESTATIC |
			opcode::NEW |
			opcode::ANEWARRAY |
			opcode::CHECKCAST |
			opcode::INSTANCEOF => r.skip(2)?,

			opcode::MULTIANEWARRAY => r.skip(3)?,

			opcode::INVOKEINTERFACE |
			opcode::INVOKEDYNAMIC => r.skip(4)?,

			opcode::IFEQ..=opcode::JSR |
			opcode::IFNULL |
			opcode::IFNONNULL => {
				let target = branch_target_i16(&mut r, opcode_pos)?;
				labels.get_or_create(target)?;
			},

			opcode::GOTO_W | opcode::JSR_W => {
				let target = branch_target_i32(&mut r, opcode_pos)?;
				labels.get_or_create(target)?;
			},

			opcode::TABLESWITCH => {
				r.align_to_4_byte_boundary()?;
				labels.get_or_create(branch_target_i32(&mut r, opcode_pos)?)?;
				let low = r.read_i32()?;
				let high = r.read_i32()?;
				if low > high {
					bail!("tableswitch at {opcode_pos} has low {low} above high {high}");
				}
				for _ in 0..=(high as i64 - low as i64) {
					labels.get_or_create(branch_target_i32(&mut r, opcode_pos)?)?;
				}
			},

			opcode::LOOKUPSWITCH => {
				r.align_to_4_byte_boundary()?;
				labels.get_or_create(branch_target_i32(&mut r, opcode_pos)?)?;
				let npairs = r.read_i32()?;
				if npairs < 0 {
					bail!("lookupswitch at {opcode_pos} has negative pair count {npairs}");
				}
				for _ in 0..npairs {
					let _key = r.read_i32()?;
					labels.get_or_create(branch_target_i32(&mut r, opcode_pos)?)?;
				}
			},

			opcode::WIDE => {
				match r.read_u8()? {
					opcode::ILOAD..=opcode::ALOAD |
					opcode::ISTORE..=opcode::ASTORE |
					opcode::RET => r.skip(2)?,
					opcode::IINC => r.skip(4)?,
					inner => bail!("opcode {inner:#04x} at {opcode_pos} cannot be widened"),
				}
			},

			opcode => bail!("unknown opcode {opcode:#04x} at bytecode position {opcode_pos}"),
		}
	}
	Ok(())
}

struct RawVariable {
	range: LabelRange,
	start_pc: u16,
	index: u16,
	name: JavaString,
	/// The descriptor or the generic signature, depending on the table.
	value: JavaString,
}

fn read_variable_table(r: &mut Cursor, pool: &ConstantPool, labels: &mut Labels) -> Result<Vec<RawVariable>> {
	r.read_vec(Cursor::read_u16_as_usize, |r| {
		let start_pc = r.read_u16()?;
		let length = r.read_u16()?;
		let name = pool.get_utf8(r.read_u16()?)?;
		let value = pool.get_utf8(r.read_u16()?)?;
		let index = r.read_u16()?;
		let range = labels.get_or_create_range(start_pc, length)?;
		Ok(RawVariable { range, start_pc, index, name, value })
	})
}

pub(crate) fn read_code<'a, C: CodeVisitor>(
	r: &mut Cursor<'a>,
	pool: &ConstantPool,
	flags: ReaderFlags,
	bootstrap_methods: &Option<Vec<BootstrapMethodRead>>,
	context: MethodContext<'_>,
	visitor: &mut C,
) -> Result<()> {
	let max_stack = r.read_u16()?;
	let max_locals = r.read_u16()?;

	let code_length = r.read_u32_as_usize()?;
	if code_length == 0 || code_length > u16::MAX as usize {
		bail!("code length {code_length} is out of range, must be in 1..=65535");
	}
	let bytecode = r.read_slice(code_length)?;
	let code_length = code_length as u16;

	let mut labels = Labels::new(code_length);
	discover_branch_targets(bytecode, &mut labels)?;

	let exceptions = r.read_vec(Cursor::read_u16_as_usize, |r| {
		let start = labels.get_or_create(r.read_u16()?)?;
		let end = labels.get_or_create_exclusive(r.read_u16()?)?;
		let handler = labels.get_or_create(r.read_u16()?)?;
		let catch_type = pool.get_optional(r.read_u16()?, ConstantPool::get_class_name)?;
		Ok(ExceptionHandler { start, end, handler, catch_type })
	})?;

	let mut stack_map_table: Option<(u16, Cursor<'a>)> = None;
	let mut lvt = Vec::new();
	let mut lvtt = Vec::new();
	let mut unknown_attributes = Vec::new();

	let attributes_count = r.read_u16()?;
	for _ in 0..attributes_count {
		let name = pool.get_utf8_ref(r.read_u16()?)?;
		let length = r.read_u32_as_usize()?;
		let mut body = *r;
		r.skip(length)?;

		match name {
			name if name == attribute::STACK_MAP_TABLE => {
				if !flags.contains(ReaderFlags::SKIP_FRAMES) {
					if stack_map_table.is_some() {
						bail!("duplicate StackMapTable attribute");
					}
					let number_of_entries = body.read_u16()?;
					stack_map_table = Some((number_of_entries, body));
				}
			},
			name if name == attribute::LINE_NUMBER_TABLE => {
				if !flags.contains(ReaderFlags::SKIP_DEBUG) {
					// multiple tables are legal, their entries just accumulate
					for _ in 0..body.read_u16()? {
						let start_pc = body.read_u16()?;
						let line = body.read_u16()?;
						labels.attach_line(start_pc, line)?;
					}
				}
			},
			name if name == attribute::LOCAL_VARIABLE_TABLE => {
				if !flags.contains(ReaderFlags::SKIP_DEBUG) {
					lvt.extend(read_variable_table(&mut body, pool, &mut labels)?);
				}
			},
			name if name == attribute::LOCAL_VARIABLE_TYPE_TABLE => {
				if !flags.contains(ReaderFlags::SKIP_DEBUG) {
					lvtt.extend(read_variable_table(&mut body, pool, &mut labels)?);
				}
			},
			name => {
				unknown_attributes.push((name.to_owned(), body.read_slice(length)?.to_vec()));
			},
		}
	}

	let mut frame_decoder = match stack_map_table {
		Some((number_of_entries, cursor)) => {
			let mut discovery = cursor;
			frames::discover_frame_labels(&mut discovery, number_of_entries, &mut labels)?;

			let implicit_locals = if flags.contains(ReaderFlags::EXPAND_FRAMES) {
				frames::implicit_locals(context.access, context.class_name, context.name, context.descriptor)?
			} else {
				Vec::new()
			};
			Some(FrameDecoder::new(cursor, number_of_entries, flags.contains(ReaderFlags::EXPAND_FRAMES), implicit_locals))
		},
		None => None,
	};

	// second pass
	let mut r2 = Cursor::new(bytecode);
	let mut visited_labels: u16 = 0;
	while r2.remaining() > 0 {
		let opcode_pos = r2.pos() as u16;

		if let Some(slot) = labels.slot(opcode_pos) {
			visitor.visit_label(slot.label)?;
			for &line in &slot.lines {
				visitor.visit_line_number(line, slot.label)?;
			}
			visited_labels += 1;
		}

		if let Some(decoder) = frame_decoder.as_mut() {
			match decoder.next_offset()? {
				Some(offset) if offset == opcode_pos => {
					let frame = decoder.read_frame(pool, &mut labels)?;
					visitor.visit_frame(frame)?;
				},
				Some(offset) if offset < opcode_pos => {
					bail!("stack map frame offset {offset} does not sit on an instruction boundary");
				},
				_ => {},
			}
		}

		let opcode = r2.read_u8()?;
		match opcode {
			opcode::NOP..=opcode::DCONST_1 |
			opcode::IALOAD..=opcode::SALOAD |
			opcode::IASTORE..=opcode::SASTORE |
			opcode::POP..=opcode::SWAP |
			opcode::IADD..=opcode::LXOR |
			opcode::I2L..=opcode::DCMPG |
			opcode::IRETURN..=opcode::RETURN |
			opcode::ARRAYLENGTH |
			opcode::ATHROW |
			opcode::MONITORENTER |
			opcode::MONITOREXIT => visitor.visit_insn(opcode)?,

			opcode::BIPUSH => visitor.visit_int_insn(opcode, r2.read_i8()? as i32)?,
			opcode::SIPUSH => visitor.visit_int_insn(opcode, r2.read_i16()? as i32)?,
			opcode::NEWARRAY => {
				let array_type = r2.read_u8()?;
				if !(atype::BOOLEAN..=atype::LONG).contains(&array_type) {
					bail!("unknown array type {array_type} at bytecode position {opcode_pos}");
				}
				visitor.visit_int_insn(opcode, array_type as i32)?
			},

			opcode::LDC =>
				visitor.visit_ldc_insn(pool.get_loadable(r2.read_u8()? as u16, bootstrap_methods)?)?,
			opcode::LDC_W | opcode::LDC2_W =>
				visitor.visit_ldc_insn(pool.get_loadable(r2.read_u16()?, bootstrap_methods)?)?,

			opcode::ILOAD..=opcode::ALOAD |
			opcode::ISTORE..=opcode::ASTORE |
			opcode::RET => visitor.visit_var_insn(opcode, r2.read_u8()? as u16)?,

			// the short forms carry their index in the opcode
			opcode::ILOAD_0..=opcode::ALOAD_3 => {
				let shifted = opcode - opcode::ILOAD_0;
				visitor.visit_var_insn(opcode::ILOAD + (shifted >> 2), (shifted & 0b11) as u16)?
			},
			opcode::ISTORE_0..=opcode::ASTORE_3 => {
				let shifted = opcode - opcode::ISTORE_0;
				visitor.visit_var_insn(opcode::ISTORE + (shifted >> 2), (shifted & 0b11) as u16)?
			},

			opcode::IINC => visitor.visit_iinc_insn(r2.read_u8()? as u16, r2.read_i8()? as i16)?,

			opcode::IFEQ..=opcode::JSR |
			opcode::IFNULL |
			opcode::IFNONNULL => {
				let target = branch_target_i16(&mut r2, opcode_pos)?;
				visitor.visit_jump_insn(opcode, labels.get_or_create(target)?)?
			},
			opcode::GOTO_W => {
				let target = branch_target_i32(&mut r2, opcode_pos)?;
				visitor.visit_jump_insn(opcode::GOTO, labels.get_or_create(target)?)?
			},
			opcode::JSR_W => {
				let target = branch_target_i32(&mut r2, opcode_pos)?;
				visitor.visit_jump_insn(opcode::JSR, labels.get_or_create(target)?)?
			},

			opcode::TABLESWITCH => {
				r2.align_to_4_byte_boundary()?;
				let default = labels.get_or_create(branch_target_i32(&mut r2, opcode_pos)?)?;
				let low = r2.read_i32()?;
				let high = r2.read_i32()?;
				let count = high as i64 - low as i64 + 1;
				let mut targets = Vec::with_capacity(count.min(1024) as usize);
				for _ in 0..count {
					targets.push(labels.get_or_create(branch_target_i32(&mut r2, opcode_pos)?)?);
				}
				visitor.visit_table_switch_insn(default, low, high, targets)?
			},
			opcode::LOOKUPSWITCH => {
				r2.align_to_4_byte_boundary()?;
				let default = labels.get_or_create(branch_target_i32(&mut r2, opcode_pos)?)?;
				let npairs = r2.read_i32()?;
				let mut pairs = Vec::with_capacity(npairs.min(1024) as usize);
				for _ in 0..npairs {
					let key = r2.read_i32()?;
					let target = labels.get_or_create(branch_target_i32(&mut r2, opcode_pos)?)?;
					pairs.push((key, target));
				}
				visitor.visit_lookup_switch_insn(default, pairs)?
			},

			opcode::GETSTATIC..=opcode::PUTFIELD =>
				visitor.visit_field_insn(opcode, pool.get_field_ref(r2.read_u16()?)?)?,
			opcode::INVOKEVIRTUAL =>
				visitor.visit_method_insn(opcode, pool.get_method_ref(r2.read_u16()?)?, false)?,
			opcode::INVOKESPECIAL | opcode::INVOKESTATIC => {
				let (member, interface) = pool.get_method_ref_or_interface_method_ref(r2.read_u16()?)?;
				visitor.visit_method_insn(opcode, member, interface)?
			},
			opcode::INVOKEINTERFACE => {
				let member = pool.get_interface_method_ref(r2.read_u16()?)?;
				let _count = r2.read_u8()?;
				let _zero = r2.read_u8()?;
				visitor.visit_method_insn(opcode, member, true)?
			},
			opcode::INVOKEDYNAMIC => {
				let invoke_dynamic = pool.get_invoke_dynamic(r2.read_u16()?, bootstrap_methods)?;
				let _zero = r2.read_u16()?;
				visitor.visit_invoke_dynamic_insn(invoke_dynamic)?
			},

			opcode::NEW | opcode::ANEWARRAY | opcode::CHECKCAST | opcode::INSTANCEOF =>
				visitor.visit_type_insn(opcode, pool.get_class_name(r2.read_u16()?)?)?,

			opcode::WIDE => {
				match r2.read_u8()? {
					inner @ (opcode::ILOAD..=opcode::ALOAD |
					opcode::ISTORE..=opcode::ASTORE |
					opcode::RET) => visitor.visit_var_insn(inner, r2.read_u16()?)?,
					opcode::IINC => visitor.visit_iinc_insn(r2.read_u16()?, r2.read_i16()?)?,
					inner => bail!("opcode {inner:#04x} at {opcode_pos} cannot be widened"),
				}
			},

			opcode::MULTIANEWARRAY => {
				let class = pool.get_class_name(r2.read_u16()?)?;
				let dimensions = r2.read_u8()?;
				visitor.visit_multi_a_new_array_insn(class, dimensions)?
			},

			opcode => bail!("unknown opcode {opcode:#04x} at bytecode position {opcode_pos}"),
		}
	}

	if let Some(slot) = labels.slot(code_length) {
		visitor.visit_label(slot.label)?;
		for &line in &slot.lines {
			visitor.visit_line_number(line, slot.label)?;
		}
		visited_labels += 1;
	}

	if visited_labels != labels.count() {
		bail!("{} labels do not sit on an instruction boundary", labels.count() - visited_labels);
	}
	if let Some(decoder) = &frame_decoder {
		if decoder.remaining() > 0 {
			bail!("the StackMapTable has {} frames past the last instruction", decoder.remaining());
		}
	}

	for exception in exceptions {
		visitor.visit_exception_handler(exception)?;
	}

	let mut lvtt_matched = vec![false; lvtt.len()];
	for variable in lvt {
		let mut signature = None;
		for (i, typed) in lvtt.iter().enumerate() {
			if typed.start_pc == variable.start_pc && typed.index == variable.index {
				lvtt_matched[i] = true;
				signature = Some(typed.value.clone());
				break;
			}
		}
		visitor.visit_local_variable(LocalVariable {
			range: variable.range,
			name: variable.name,
			descriptor: Some(variable.value),
			signature,
			index: variable.index,
		})?;
	}
	// type table entries without a descriptor twin are still delivered
	for (typed, matched) in lvtt.into_iter().zip(lvtt_matched) {
		if !matched {
			visitor.visit_local_variable(LocalVariable {
				range: typed.range,
				name: typed.name,
				descriptor: None,
				signature: Some(typed.value),
				index: typed.index,
			})?;
		}
	}

	for (name, bytes) in unknown_attributes.into_iter().rev() {
		let unknown_attribute = C::UnknownAttribute::read(name, bytes, pool)
			.context("failed to read unknown code attribute")?;
		visitor.visit_unknown_attribute(unknown_attribute)?;
	}

	visitor.visit_maxs(max_stack, max_locals)?;

	visitor.visit_end()?;

	Ok(())
}
