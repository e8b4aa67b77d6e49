//! Decoding of the `StackMapTable` attribute.
//!
//! Frame offsets are stored as deltas: the first frame sits at its delta,
//! every later frame at `previous + delta + 1`. The extra one exists because
//! two frames can never share an offset, so a delta of zero still moves
//! forward.

use anyhow::{anyhow, bail, Context, Result};
use java_string::JavaStr;

use crate::class_constants::{frame, verification_type};
use crate::class_reader::labels::Labels;
use crate::class_reader::pool::ConstantPool;
use crate::cursor::Cursor;
use crate::tree::code::{StackMapFrame, VerificationType};
use crate::tree::method::MethodAccess;

fn read_offset_delta(r: &mut Cursor, frame_type: u8) -> Result<u16> {
	Ok(match frame_type {
		..=frame::SAME_MAX => frame_type as u16,
		frame::SAME_LOCALS_1_STACK_ITEM_MIN..=frame::SAME_LOCALS_1_STACK_ITEM_MAX =>
			(frame_type - frame::SAME_LOCALS_1_STACK_ITEM_MIN) as u16,
		frame::RESERVED_MIN..=frame::RESERVED_MAX =>
			bail!("unknown stack map frame type {frame_type}"),
		_ => r.read_u16()?,
	})
}

fn advance_offset(previous: Option<u16>, delta: u16) -> Result<u16> {
	match previous {
		None => Ok(delta),
		Some(previous) => previous.checked_add(delta)
			.and_then(|offset| offset.checked_add(1))
			.context("stack map frame offset overflows the bytecode range"),
	}
}

fn read_verification_type(r: &mut Cursor, pool: &ConstantPool, labels: &mut Labels) -> Result<VerificationType> {
	Ok(match r.read_u8()? {
		verification_type::TOP => VerificationType::Top,
		verification_type::INTEGER => VerificationType::Integer,
		verification_type::FLOAT => VerificationType::Float,
		verification_type::DOUBLE => VerificationType::Double,
		verification_type::LONG => VerificationType::Long,
		verification_type::NULL => VerificationType::Null,
		verification_type::UNINITIALIZED_THIS => VerificationType::UninitializedThis,
		verification_type::OBJECT => VerificationType::Object(pool.get_class_name(r.read_u16()?)?),
		verification_type::UNINITIALIZED => VerificationType::Uninitialized(labels.get_or_create(r.read_u16()?)?),
		tag => bail!("unknown verification type tag {tag}"),
	})
}

fn discover_verification_type(r: &mut Cursor, labels: &mut Labels) -> Result<()> {
	match r.read_u8()? {
		verification_type::TOP..=verification_type::UNINITIALIZED_THIS => Ok(()),
		verification_type::OBJECT => r.skip(2),
		verification_type::UNINITIALIZED => {
			labels.get_or_create(r.read_u16()?)?;
			Ok(())
		},
		tag => bail!("unknown verification type tag {tag}"),
	}
}

/// Walks the whole table once before any instruction is emitted, creating
/// labels at every frame offset and at every `Uninitialized` target, so that
/// those labels exist by the time the frame is due.
pub(crate) fn discover_frame_labels(r: &mut Cursor, number_of_entries: u16, labels: &mut Labels) -> Result<()> {
	let mut previous = None;
	for i in 0..number_of_entries {
		let frame_type = r.read_u8()?;
		let delta = read_offset_delta(r, frame_type)
			.with_context(|| anyhow!("in stack map frame {i}"))?;
		let offset = advance_offset(previous, delta)?;
		previous = Some(offset);
		labels.get_or_create(offset)
			.with_context(|| anyhow!("in stack map frame {i}"))?;

		match frame_type {
			frame::SAME_LOCALS_1_STACK_ITEM_MIN..=frame::SAME_LOCALS_1_STACK_ITEM_MAX |
			frame::SAME_LOCALS_1_STACK_ITEM_EXTENDED => {
				discover_verification_type(r, labels)?;
			},
			frame::APPEND_MIN..=frame::APPEND_MAX => {
				for _ in 0..(frame_type - frame::SAME_EXTENDED) {
					discover_verification_type(r, labels)?;
				}
			},
			frame::FULL => {
				for _ in 0..r.read_u16()? {
					discover_verification_type(r, labels)?;
				}
				for _ in 0..r.read_u16()? {
					discover_verification_type(r, labels)?;
				}
			},
			_ => {},
		}
	}
	Ok(())
}

/// The locals in effect at the start of a method, derived from its descriptor.
///
/// Within the constructor of a class, `this` starts out uninitialized.
pub(crate) fn implicit_locals(access: MethodAccess, class_name: &JavaStr, method_name: &JavaStr, descriptor: &JavaStr)
		-> Result<Vec<VerificationType>> {
	let mut locals = Vec::new();
	if !access.contains(MethodAccess::STATIC) {
		locals.push(if method_name == "<init>" {
			VerificationType::UninitializedThis
		} else {
			VerificationType::Object(class_name.to_owned())
		});
	}

	let bytes = descriptor.as_bytes();
	if bytes.first() != Some(&b'(') {
		bail!("malformed method descriptor {descriptor:?}");
	}
	let mut i = 1;
	while i < bytes.len() && bytes[i] != b')' {
		let start = i;
		while i < bytes.len() && bytes[i] == b'[' {
			i += 1;
		}
		let element = *bytes.get(i)
			.with_context(|| anyhow!("malformed method descriptor {descriptor:?}"))?;
		match element {
			b'B' | b'C' | b'I' | b'S' | b'Z' | b'F' | b'J' | b'D' => i += 1,
			b'L' => {
				while i < bytes.len() && bytes[i] != b';' {
					i += 1;
				}
				if i == bytes.len() {
					bail!("malformed method descriptor {descriptor:?}");
				}
				i += 1;
			},
			_ => bail!("malformed method descriptor {descriptor:?}"),
		}

		locals.push(if bytes[start] == b'[' {
			// arrays keep their full descriptor as the class name
			VerificationType::Object(crate::jstring::from_slice_to_string(&bytes[start..i])?)
		} else if element == b'L' {
			// a bare class type, without the L and ;
			VerificationType::Object(crate::jstring::from_slice_to_string(&bytes[start + 1..i - 1])?)
		} else {
			match element {
				b'B' | b'C' | b'I' | b'S' | b'Z' => VerificationType::Integer,
				b'F' => VerificationType::Float,
				b'J' => VerificationType::Long,
				_ => VerificationType::Double,
			}
		});
	}
	if bytes.get(i) != Some(&b')') {
		bail!("malformed method descriptor {descriptor:?}");
	}
	Ok(locals)
}

struct Pending {
	offset: u16,
	frame_type: u8,
}

/// Decodes stack map frames one at a time, in step with the instruction
/// emission: [`next_offset`][FrameDecoder::next_offset] peeks at where the
/// next frame is due without consuming its body, and
/// [`read_frame`][FrameDecoder::read_frame] then decodes it.
///
/// With `expand` set, a running copy of the locals and stack is kept, seeded
/// from the implicit first frame of the method, and every frame is delivered
/// as [`StackMapFrame::Full`].
pub(crate) struct FrameDecoder<'a> {
	cursor: Cursor<'a>,
	remaining: u16,
	pending: Option<Pending>,
	previous_offset: Option<u16>,
	expand: bool,
	locals: Vec<VerificationType>,
	stack: Vec<VerificationType>,
}

impl<'a> FrameDecoder<'a> {
	pub(crate) fn new(cursor: Cursor<'a>, number_of_entries: u16, expand: bool, implicit_locals: Vec<VerificationType>) -> FrameDecoder<'a> {
		FrameDecoder {
			cursor,
			remaining: number_of_entries,
			pending: None,
			previous_offset: None,
			expand,
			locals: implicit_locals,
			stack: Vec::new(),
		}
	}

	pub(crate) fn remaining(&self) -> u16 {
		self.remaining
	}

	/// The bytecode offset the next frame belongs to, or `None` once the
	/// table is exhausted. Reads at most the frame header; calling this
	/// repeatedly is fine.
	pub(crate) fn next_offset(&mut self) -> Result<Option<u16>> {
		if self.pending.is_none() && self.remaining > 0 {
			let frame_type = self.cursor.read_u8()?;
			let delta = read_offset_delta(&mut self.cursor, frame_type)?;
			let offset = advance_offset(self.previous_offset, delta)?;
			self.pending = Some(Pending { offset, frame_type });
		}
		Ok(self.pending.as_ref().map(|pending| pending.offset))
	}

	/// Decodes the frame announced by the last
	/// [`next_offset`][FrameDecoder::next_offset] call.
	pub(crate) fn read_frame(&mut self, pool: &ConstantPool, labels: &mut Labels) -> Result<StackMapFrame> {
		let Pending { offset, frame_type } = self.pending.take()
			.context("no stack map frame is pending")?;
		self.previous_offset = Some(offset);
		self.remaining -= 1;

		let r = &mut self.cursor;
		let compressed = match frame_type {
			..=frame::SAME_MAX | frame::SAME_EXTENDED => StackMapFrame::Same,
			frame::SAME_LOCALS_1_STACK_ITEM_MIN..=frame::SAME_LOCALS_1_STACK_ITEM_MAX |
			frame::SAME_LOCALS_1_STACK_ITEM_EXTENDED => StackMapFrame::SameLocals1StackItem {
				stack: read_verification_type(r, pool, labels)?,
			},
			frame::CHOP_MIN..=frame::CHOP_MAX => StackMapFrame::Chop {
				k: frame::SAME_EXTENDED - frame_type,
			},
			frame::APPEND_MIN..=frame::APPEND_MAX => {
				let count = frame_type - frame::SAME_EXTENDED;
				let mut locals = Vec::with_capacity(count as usize);
				for _ in 0..count {
					locals.push(read_verification_type(r, pool, labels)?);
				}
				StackMapFrame::Append { locals }
			},
			frame::FULL => {
				let locals_count = r.read_u16()?;
				let mut locals = Vec::with_capacity(locals_count.min(1024) as usize);
				for _ in 0..locals_count {
					locals.push(read_verification_type(r, pool, labels)?);
				}
				let stack_count = r.read_u16()?;
				let mut stack = Vec::with_capacity(stack_count.min(1024) as usize);
				for _ in 0..stack_count {
					stack.push(read_verification_type(r, pool, labels)?);
				}
				StackMapFrame::Full { locals, stack }
			},
			// next_offset rejected these before a frame could become pending
			frame::RESERVED_MIN..=frame::RESERVED_MAX =>
				bail!("unknown stack map frame type {frame_type}"),
		};

		if self.expand {
			self.apply(compressed)?;
			Ok(StackMapFrame::Full {
				locals: self.locals.clone(),
				stack: self.stack.clone(),
			})
		} else {
			Ok(compressed)
		}
	}

	fn apply(&mut self, frame: StackMapFrame) -> Result<()> {
		match frame {
			StackMapFrame::Same => self.stack.clear(),
			StackMapFrame::SameLocals1StackItem { stack } => {
				self.stack.clear();
				self.stack.push(stack);
			},
			StackMapFrame::Chop { k } => {
				let len = self.locals.len().checked_sub(k as usize)
					.context("chop frame removes more locals than exist")?;
				self.locals.truncate(len);
				self.stack.clear();
			},
			StackMapFrame::Append { locals } => {
				self.locals.extend(locals);
				self.stack.clear();
			},
			StackMapFrame::Full { locals, stack } => {
				self.locals = locals;
				self.stack = stack;
			},
		}
		Ok(())
	}
}
