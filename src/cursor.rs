use anyhow::{anyhow, Context, Result};

/// A cheap, copyable read position into a class file.
///
/// All multi-byte reads are big-endian, as everything in a class file is.
/// Reads past the end of the underlying slice fail with the offset at which
/// data ran out; the cursor is not advanced on failure.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	pub(crate) fn new(data: &'a [u8]) -> Cursor<'a> {
		Cursor { data, pos: 0 }
	}

	pub(crate) fn at(data: &'a [u8], pos: usize) -> Cursor<'a> {
		Cursor { data, pos }
	}

	pub(crate) fn data(&self) -> &'a [u8] {
		self.data
	}

	pub(crate) fn pos(&self) -> usize {
		self.pos
	}

	pub(crate) fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	fn take(&mut self, n: usize) -> Result<&'a [u8]> {
		let end = self.pos.checked_add(n)
			.with_context(|| anyhow!("offset overflow while reading {n} bytes at offset {}", self.pos))?;
		let slice = self.data.get(self.pos..end)
			.with_context(|| anyhow!("unexpected end of data: wanted {n} bytes at offset {}, but only {} remain", self.pos, self.remaining()))?;
		self.pos = end;
		Ok(slice)
	}

	pub(crate) fn read_slice(&mut self, n: usize) -> Result<&'a [u8]> {
		self.take(n)
	}

	pub(crate) fn skip(&mut self, n: usize) -> Result<()> {
		self.take(n).map(|_| ())
	}

	fn read_n<const N: usize>(&mut self) -> Result<[u8; N]> {
		let slice = self.take(N)?;
		let mut buf = [0u8; N];
		buf.copy_from_slice(slice);
		Ok(buf)
	}

	pub(crate) fn read_u8(&mut self) -> Result<u8> {
		Ok(u8::from_be_bytes(self.read_n()?))
	}

	pub(crate) fn read_i8(&mut self) -> Result<i8> {
		Ok(i8::from_be_bytes(self.read_n()?))
	}

	pub(crate) fn read_u16(&mut self) -> Result<u16> {
		Ok(u16::from_be_bytes(self.read_n()?))
	}

	pub(crate) fn read_i16(&mut self) -> Result<i16> {
		Ok(i16::from_be_bytes(self.read_n()?))
	}

	pub(crate) fn read_u32(&mut self) -> Result<u32> {
		Ok(u32::from_be_bytes(self.read_n()?))
	}

	pub(crate) fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_be_bytes(self.read_n()?))
	}

	pub(crate) fn read_u64(&mut self) -> Result<u64> {
		Ok(u64::from_be_bytes(self.read_n()?))
	}

	pub(crate) fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_be_bytes(self.read_n()?))
	}

	pub(crate) fn read_u8_as_usize(&mut self) -> Result<usize> {
		Ok(self.read_u8()? as usize)
	}

	pub(crate) fn read_u16_as_usize(&mut self) -> Result<usize> {
		Ok(self.read_u16()? as usize)
	}

	pub(crate) fn read_u32_as_usize(&mut self) -> Result<usize> {
		Ok(self.read_u32()? as usize)
	}

	pub(crate) fn peek_u8(&self) -> Result<u8> {
		self.data.get(self.pos).copied()
			.with_context(|| anyhow!("unexpected end of data: wanted 1 byte at offset {}", self.pos))
	}

	/// Skips the padding bytes a `tableswitch`/`lookupswitch` inserts so that
	/// its operands start at a four byte boundary. Only meaningful on a cursor
	/// whose position zero is the start of the bytecode.
	pub(crate) fn align_to_4_byte_boundary(&mut self) -> Result<()> {
		let padding = (4 - (self.pos % 4)) % 4;
		self.skip(padding)
	}

	/// Reads a length-prefixed sequence, such as the interfaces of a class or
	/// the entries of an exception table.
	pub(crate) fn read_vec<T, S, E>(&mut self, get_size: S, mut get_element: E) -> Result<Vec<T>>
	where
		S: FnOnce(&mut Self) -> Result<usize>,
		E: FnMut(&mut Self) -> Result<T>,
	{
		let size = get_size(self)?;
		let mut vec = Vec::with_capacity(size.min(1024));
		for _ in 0..size {
			vec.push(get_element(self)?);
		}
		Ok(vec)
	}
}
