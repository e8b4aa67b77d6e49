use anyhow::{bail, Context, Result};

use crate::tree::code::{Label, LabelRange};

/// Everything the reader knows about one bytecode position.
pub(crate) struct Slot {
	pub(crate) label: Label,
	/// Lines of the `LineNumberTable` starting here.
	pub(crate) lines: Vec<u16>,
}

/// The labels of one method body, indexed by bytecode offset.
///
/// There is at most one label per offset; ids are handed out in creation
/// order. The slot at `code_length` exists for exclusive range ends, nothing
/// may point past it.
pub(crate) struct Labels {
	code_length: u16,
	slots: Vec<Option<Slot>>,
	count: u16,
}

impl Labels {
	pub(crate) fn new(code_length: u16) -> Labels {
		let mut slots = Vec::new();
		slots.resize_with(code_length as usize + 1, || None);
		Labels { code_length, slots, count: 0 }
	}

	fn slot_mut(&mut self, pc: u16) -> &mut Slot {
		let slot = &mut self.slots[pc as usize];
		match slot {
			Some(slot) => slot,
			None => {
				let label = Label { id: self.count };
				self.count += 1;
				slot.insert(Slot { label, lines: Vec::new() })
			},
		}
	}

	fn check(&self, pc: u16, exclusive: bool) -> Result<()> {
		let limit = self.code_length as usize + usize::from(exclusive);
		if pc as usize >= limit {
			bail!("bytecode position {pc} is out of range, the code is {} bytes long", self.code_length);
		}
		Ok(())
	}

	/// Creates or reuses the label at `pc`, for branch targets, exception
	/// table bounds, stack map frames, line numbers and `Uninitialized`
	/// verification types.
	pub(crate) fn get_or_create(&mut self, pc: u16) -> Result<Label> {
		self.check(pc, false)?;
		Ok(self.slot_mut(pc).label)
	}

	/// Like [`get_or_create`][Labels::get_or_create], but `pc == code_length`
	/// is allowed. Exception table ends and variable ranges are exclusive.
	pub(crate) fn get_or_create_exclusive(&mut self, pc: u16) -> Result<Label> {
		self.check(pc, true)?;
		Ok(self.slot_mut(pc).label)
	}

	/// The range `start_pc .. start_pc + length` of an exception handler
	/// protected region or a local variable.
	pub(crate) fn get_or_create_range(&mut self, start_pc: u16, length: u16) -> Result<LabelRange> {
		let end = (start_pc as u32) + (length as u32);
		let end = u16::try_from(end)
			.ok()
			.filter(|&end| end <= self.code_length)
			.with_context(|| format!("range end {end} is out of range, the code is {} bytes long", self.code_length))?;
		let start = self.get_or_create(start_pc)?;
		let end = self.get_or_create_exclusive(end)?;
		Ok(LabelRange { start, end })
	}

	/// Attaches a `LineNumberTable` entry to the label at `pc`, creating it
	/// if needed.
	pub(crate) fn attach_line(&mut self, pc: u16, line: u16) -> Result<()> {
		self.check(pc, false)?;
		self.slot_mut(pc).lines.push(line);
		Ok(())
	}

	pub(crate) fn slot(&self, pc: u16) -> Option<&Slot> {
		self.slots.get(pc as usize).and_then(Option::as_ref)
	}

	/// How many labels exist.
	pub(crate) fn count(&self) -> u16 {
		self.count
	}
}
