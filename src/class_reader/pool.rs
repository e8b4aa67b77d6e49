use std::cell::OnceCell;

use anyhow::{anyhow, bail, Context, Result};
use java_string::{JavaStr, JavaString};

use crate::class_constants::pool;
use crate::class_constants::pool::method_handle_reference;
use crate::cursor::Cursor;
use crate::jstring;
use crate::tree::constant::{Constant, ConstantDynamic, Handle, InvokeDynamic, MemberRef};
use crate::tree::field::ConstantValue;

pub(crate) trait PoolContext<T> {
	fn pool_context(self, index: u16) -> Result<T>;
}

impl<T> PoolContext<T> for Result<T> {
	fn pool_context(self, index: u16) -> Result<T> {
		self.with_context(|| anyhow!("in constant pool entry {index}"))
	}
}

#[derive(Debug, Clone, Copy)]
struct Entry {
	tag: u8,
	/// The offset of the entry contents, one past the tag byte.
	offset: u32,
}

/// The constant pool of a class file.
///
/// The initial scan only records the tag and offset of every entry; entry
/// contents are decoded on each use, except for `Utf8` entries, whose decoded
/// strings are memoized. A structurally broken entry therefore only surfaces
/// as an error once something asks for it.
///
/// Indices are 1-based and `Long`/`Double` entries occupy two slots, with the
/// second slot unaddressable, exactly as in the file.
pub struct ConstantPool<'a> {
	data: &'a [u8],
	entries: Vec<Entry>,
	utf8: Vec<OnceCell<JavaString>>,
	end: usize,
}

impl<'a> ConstantPool<'a> {
	/// Scans the constant pool, leaving `cursor` at the first byte after it.
	pub(crate) fn parse(cursor: &mut Cursor<'a>) -> Result<ConstantPool<'a>> {
		let count = cursor.read_u16_as_usize()?;
		if count == 0 {
			bail!("constant pool count must be at least 1");
		}

		let mut entries = vec![Entry { tag: 0, offset: 0 }];
		while entries.len() < count {
			let index = entries.len() as u16;
			let tag = cursor.read_u8()?;
			let offset = u32::try_from(cursor.pos())
				.with_context(|| anyhow!("constant pool entry {index} starts past 4 GiB"))?;

			match tag {
				pool::UTF8 => {
					let length = cursor.read_u16_as_usize()?;
					cursor.skip(length)
				},
				pool::INTEGER | pool::FLOAT => cursor.skip(4),
				pool::LONG | pool::DOUBLE => cursor.skip(8),
				pool::CLASS | pool::STRING | pool::METHOD_TYPE | pool::MODULE | pool::PACKAGE => cursor.skip(2),
				pool::FIELD_REF | pool::METHOD_REF | pool::INTERFACE_METHOD_REF |
				pool::NAME_AND_TYPE | pool::DYNAMIC | pool::INVOKE_DYNAMIC => cursor.skip(4),
				pool::METHOD_HANDLE => cursor.skip(3),
				tag => bail!("unknown constant pool tag {tag} for entry {index}"),
			}.pool_context(index)?;

			entries.push(Entry { tag, offset });
			if tag == pool::LONG || tag == pool::DOUBLE {
				// the second slot of an 8 byte constant is unaddressable
				entries.push(Entry { tag: 0, offset: 0 });
			}
		}
		if entries.len() != count {
			bail!("constant pool ends in the middle of a Long or Double entry");
		}

		let utf8 = std::iter::repeat_with(OnceCell::new).take(entries.len()).collect();

		Ok(ConstantPool {
			data: cursor.data(),
			entries,
			utf8,
			end: cursor.pos(),
		})
	}

	/// The number of slots, including the reserved slot zero and the
	/// unaddressable upper halves of `Long`/`Double` entries. Valid indices
	/// are `1..entry_count()`, minus those upper halves.
	pub fn entry_count(&self) -> u16 {
		self.entries.len() as u16
	}

	/// The tag byte and raw contents of an entry, sized according to its tag.
	/// For `Utf8` entries the contents include the length prefix.
	///
	/// This is the escape hatch for writing pool entries back out unchanged.
	pub fn raw_entry(&self, index: u16) -> Result<(u8, &'a [u8])> {
		let entry = self.entry(index)?;
		let mut r = Cursor::at(self.data, entry.offset as usize);
		let size = match entry.tag {
			pool::UTF8 => 2 + r.read_u16_as_usize().pool_context(index)?,
			pool::INTEGER | pool::FLOAT => 4,
			pool::LONG | pool::DOUBLE => 8,
			pool::CLASS | pool::STRING | pool::METHOD_TYPE | pool::MODULE | pool::PACKAGE => 2,
			pool::FIELD_REF | pool::METHOD_REF | pool::INTERFACE_METHOD_REF |
			pool::NAME_AND_TYPE | pool::DYNAMIC | pool::INVOKE_DYNAMIC => 4,
			pool::METHOD_HANDLE => 3,
			tag => bail!("unknown constant pool tag {tag} for entry {index}"),
		};
		let bytes = Cursor::at(self.data, entry.offset as usize).read_slice(size).pool_context(index)?;
		Ok((entry.tag, bytes))
	}

	/// The offset of the first byte after the constant pool.
	pub(crate) fn end_offset(&self) -> usize {
		self.end
	}

	fn entry(&self, index: u16) -> Result<Entry> {
		let entry = self.entries.get(index as usize)
			.with_context(|| anyhow!("constant pool entry {index} is out of range, the pool has {} slots", self.entries.len()))?;
		if entry.tag == 0 {
			bail!("constant pool entry {index} is not addressable");
		}
		Ok(*entry)
	}

	/// A cursor over the contents of the entry at `index`, after checking its
	/// tag.
	fn expect(&self, index: u16, tag: u8) -> Result<Cursor<'a>> {
		let entry = self.entry(index)?;
		if entry.tag != tag {
			bail!("constant pool entry {index} has tag {}, expected {tag}", entry.tag);
		}
		Ok(Cursor::at(self.data, entry.offset as usize))
	}

	pub(crate) fn get_utf8_ref(&self, index: u16) -> Result<&JavaStr> {
		let mut r = self.expect(index, pool::UTF8)?;
		let cell = &self.utf8[index as usize];
		if let Some(string) = cell.get() {
			return Ok(string);
		}
		let length = r.read_u16_as_usize().pool_context(index)?;
		let bytes = r.read_slice(length).pool_context(index)?;
		let string = jstring::from_slice_to_string(bytes).pool_context(index)?;
		Ok(cell.get_or_init(|| string))
	}

	pub(crate) fn get_utf8(&self, index: u16) -> Result<JavaString> {
		Ok(self.get_utf8_ref(index)?.to_owned())
	}

	/// Resolves an index that may be zero, meaning absent.
	pub(crate) fn get_optional<T>(&self, index: u16, getter: impl FnOnce(&Self, u16) -> Result<T>) -> Result<Option<T>> {
		if index == 0 {
			Ok(None)
		} else {
			getter(self, index).map(Some)
		}
	}

	pub(crate) fn get_class_name(&self, index: u16) -> Result<JavaString> {
		let mut r = self.expect(index, pool::CLASS)?;
		let name_index = r.read_u16().pool_context(index)?;
		self.get_utf8(name_index)
	}

	pub(crate) fn get_name_and_type(&self, index: u16) -> Result<(JavaString, JavaString)> {
		let mut r = self.expect(index, pool::NAME_AND_TYPE)?;
		let name = self.get_utf8(r.read_u16().pool_context(index)?)?;
		let descriptor = self.get_utf8(r.read_u16().pool_context(index)?)?;
		Ok((name, descriptor))
	}

	fn get_member_ref(&self, index: u16, tag: u8) -> Result<MemberRef> {
		let mut r = self.expect(index, tag)?;
		let class = self.get_class_name(r.read_u16().pool_context(index)?)?;
		let (name, descriptor) = self.get_name_and_type(r.read_u16().pool_context(index)?)?;
		Ok(MemberRef { class, name, descriptor })
	}

	pub(crate) fn get_field_ref(&self, index: u16) -> Result<MemberRef> {
		self.get_member_ref(index, pool::FIELD_REF)
	}

	pub(crate) fn get_method_ref(&self, index: u16) -> Result<MemberRef> {
		self.get_member_ref(index, pool::METHOD_REF)
	}

	pub(crate) fn get_interface_method_ref(&self, index: u16) -> Result<MemberRef> {
		self.get_member_ref(index, pool::INTERFACE_METHOD_REF)
	}

	/// Gets a method reference that may live on a class or an interface. The
	/// `bool` is `true` for the interface case.
	pub(crate) fn get_method_ref_or_interface_method_ref(&self, index: u16) -> Result<(MemberRef, bool)> {
		let entry = self.entry(index)?;
		match entry.tag {
			pool::METHOD_REF => Ok((self.get_method_ref(index)?, false)),
			pool::INTERFACE_METHOD_REF => Ok((self.get_interface_method_ref(index)?, true)),
			tag => bail!("constant pool entry {index} has tag {tag}, expected Methodref or InterfaceMethodref"),
		}
	}

	pub(crate) fn get_integer(&self, index: u16) -> Result<i32> {
		let mut r = self.expect(index, pool::INTEGER)?;
		r.read_i32().pool_context(index)
	}

	pub(crate) fn get_float(&self, index: u16) -> Result<f32> {
		let mut r = self.expect(index, pool::FLOAT)?;
		Ok(f32::from_bits(r.read_u32().pool_context(index)?))
	}

	pub(crate) fn get_long(&self, index: u16) -> Result<i64> {
		let mut r = self.expect(index, pool::LONG)?;
		r.read_i64().pool_context(index)
	}

	pub(crate) fn get_double(&self, index: u16) -> Result<f64> {
		let mut r = self.expect(index, pool::DOUBLE)?;
		Ok(f64::from_bits(r.read_u64().pool_context(index)?))
	}

	pub(crate) fn get_integer_as_byte(&self, index: u16) -> Result<i8> {
		i8::try_from(self.get_integer(index)?)
			.with_context(|| anyhow!("constant pool entry {index} is out of range for a byte"))
	}

	pub(crate) fn get_integer_as_char(&self, index: u16) -> Result<u16> {
		u16::try_from(self.get_integer(index)?)
			.with_context(|| anyhow!("constant pool entry {index} is out of range for a char"))
	}

	pub(crate) fn get_integer_as_short(&self, index: u16) -> Result<i16> {
		i16::try_from(self.get_integer(index)?)
			.with_context(|| anyhow!("constant pool entry {index} is out of range for a short"))
	}

	pub(crate) fn get_integer_as_boolean(&self, index: u16) -> Result<bool> {
		match self.get_integer(index)? {
			0 => Ok(false),
			1 => Ok(true),
			value => bail!("constant pool entry {index} holds {value}, which is not a boolean"),
		}
	}

	pub(crate) fn get_string(&self, index: u16) -> Result<JavaString> {
		let mut r = self.expect(index, pool::STRING)?;
		self.get_utf8(r.read_u16().pool_context(index)?)
	}

	/// The value of a `ConstantValue` attribute.
	pub(crate) fn get_constant_value(&self, index: u16) -> Result<ConstantValue> {
		let entry = self.entry(index)?;
		match entry.tag {
			pool::INTEGER => Ok(ConstantValue::Integer(self.get_integer(index)?)),
			pool::FLOAT => Ok(ConstantValue::Float(self.get_float(index)?)),
			pool::LONG => Ok(ConstantValue::Long(self.get_long(index)?)),
			pool::DOUBLE => Ok(ConstantValue::Double(self.get_double(index)?)),
			pool::STRING => Ok(ConstantValue::String(self.get_string(index)?)),
			tag => bail!("constant pool entry {index} has tag {tag}, which cannot be a ConstantValue"),
		}
	}

	pub(crate) fn get_method_handle(&self, index: u16) -> Result<Handle> {
		let mut r = self.expect(index, pool::METHOD_HANDLE)?;
		let kind = r.read_u8().pool_context(index)?;
		let reference = r.read_u16().pool_context(index)?;
		Ok(match kind {
			method_handle_reference::GET_FIELD => Handle::GetField(self.get_field_ref(reference)?),
			method_handle_reference::GET_STATIC => Handle::GetStatic(self.get_field_ref(reference)?),
			method_handle_reference::PUT_FIELD => Handle::PutField(self.get_field_ref(reference)?),
			method_handle_reference::PUT_STATIC => Handle::PutStatic(self.get_field_ref(reference)?),
			method_handle_reference::INVOKE_VIRTUAL => Handle::InvokeVirtual(self.get_method_ref(reference)?),
			method_handle_reference::INVOKE_STATIC => {
				let (member, interface) = self.get_method_ref_or_interface_method_ref(reference)?;
				Handle::InvokeStatic(member, interface)
			},
			method_handle_reference::INVOKE_SPECIAL => {
				let (member, interface) = self.get_method_ref_or_interface_method_ref(reference)?;
				Handle::InvokeSpecial(member, interface)
			},
			method_handle_reference::NEW_INVOKE_SPECIAL => Handle::NewInvokeSpecial(self.get_method_ref(reference)?),
			method_handle_reference::INVOKE_INTERFACE => Handle::InvokeInterface(self.get_interface_method_ref(reference)?),
			kind => bail!("constant pool entry {index} has unknown method handle kind {kind}"),
		})
	}

	/// `in_flight` holds the indices of the dynamic entries currently being
	/// resolved further up the call stack; a bootstrap method argument
	/// referencing one of them would recurse forever.
	fn get_dynamic(&self, index: u16, tag: u8, bootstrap_methods: &Option<Vec<BootstrapMethodRead>>, in_flight: &mut Vec<u16>)
			-> Result<(JavaString, JavaString, Handle, Vec<Constant>)> {
		if in_flight.contains(&index) {
			bail!("constant pool entry {index} is an argument of its own bootstrap method");
		}
		in_flight.push(index);

		let mut r = self.expect(index, tag)?;
		let bootstrap_index = r.read_u16_as_usize().pool_context(index)?;
		let (name, descriptor) = self.get_name_and_type(r.read_u16().pool_context(index)?)?;

		let methods = bootstrap_methods.as_ref()
			.context("class has dynamic constant pool entries but no BootstrapMethods attribute")?;
		let bootstrap_method = methods.get(bootstrap_index)
			.with_context(|| anyhow!("constant pool entry {index} references bootstrap method {bootstrap_index}, the class only has {}", methods.len()))?;

		let arguments = bootstrap_method.arguments.iter()
			.map(|&argument| self.get_loadable_tracked(argument, bootstrap_methods, in_flight))
			.collect::<Result<Vec<_>>>()
			.pool_context(index)?;

		in_flight.pop();
		Ok((name, descriptor, bootstrap_method.handle.clone(), arguments))
	}

	pub(crate) fn get_invoke_dynamic(&self, index: u16, bootstrap_methods: &Option<Vec<BootstrapMethodRead>>) -> Result<InvokeDynamic> {
		let (name, descriptor, handle, arguments) = self.get_dynamic(index, pool::INVOKE_DYNAMIC, bootstrap_methods, &mut Vec::new())?;
		Ok(InvokeDynamic { name, descriptor, handle, arguments })
	}

	/// A constant as loaded by `ldc` and friends.
	pub(crate) fn get_loadable(&self, index: u16, bootstrap_methods: &Option<Vec<BootstrapMethodRead>>) -> Result<Constant> {
		self.get_loadable_tracked(index, bootstrap_methods, &mut Vec::new())
	}

	fn get_loadable_tracked(&self, index: u16, bootstrap_methods: &Option<Vec<BootstrapMethodRead>>, in_flight: &mut Vec<u16>) -> Result<Constant> {
		let entry = self.entry(index)?;
		match entry.tag {
			pool::INTEGER => Ok(Constant::Integer(self.get_integer(index)?)),
			pool::FLOAT => Ok(Constant::Float(self.get_float(index)?)),
			pool::LONG => Ok(Constant::Long(self.get_long(index)?)),
			pool::DOUBLE => Ok(Constant::Double(self.get_double(index)?)),
			pool::STRING => Ok(Constant::String(self.get_string(index)?)),
			pool::CLASS => Ok(Constant::Class(self.get_class_name(index)?)),
			pool::METHOD_TYPE => {
				let mut r = self.expect(index, pool::METHOD_TYPE)?;
				Ok(Constant::MethodType(self.get_utf8(r.read_u16().pool_context(index)?)?))
			},
			pool::METHOD_HANDLE => Ok(Constant::MethodHandle(self.get_method_handle(index)?)),
			pool::DYNAMIC => {
				let (name, descriptor, handle, arguments) = self.get_dynamic(index, pool::DYNAMIC, bootstrap_methods, in_flight)?;
				Ok(Constant::Dynamic(ConstantDynamic { name, descriptor, handle, arguments }))
			},
			tag => bail!("constant pool entry {index} has tag {tag}, which is not loadable"),
		}
	}
}

/// One entry of the `BootstrapMethods` attribute. The arguments stay
/// unresolved pool indices until a dynamic entry referencing them is asked
/// for.
#[derive(Debug, Clone)]
pub(crate) struct BootstrapMethodRead {
	pub(crate) handle: Handle,
	pub(crate) arguments: Vec<u16>,
}

#[cfg(test)]
mod testing {
	use super::*;
	use pretty_assertions::assert_eq;

	/// `count` is the slot count, one more than the number of addressable
	/// single-slot entries.
	fn pool(count: u16, entries: &[u8]) -> Vec<u8> {
		let mut data = count.to_be_bytes().to_vec();
		data.extend_from_slice(entries);
		data
	}

	fn parse(data: &[u8]) -> Result<ConstantPool> {
		let mut cursor = Cursor::new(data);
		ConstantPool::parse(&mut cursor)
	}

	#[test]
	fn utf8_and_class() -> Result<()> {
		let data = pool(3, &[
			1, 0, 3, b'F', b'o', b'o', // 1: Utf8 "Foo"
			7, 0, 1, // 2: Class -> 1
		]);
		let pool = parse(&data)?;
		assert_eq!(pool.get_utf8(1)?, JavaString::from("Foo"));
		assert_eq!(pool.get_class_name(2)?, JavaString::from("Foo"));
		// a second lookup serves the memoized string
		assert_eq!(pool.get_utf8(1)?, JavaString::from("Foo"));
		Ok(())
	}

	#[test]
	fn long_occupies_two_slots() -> Result<()> {
		let data = pool(4, &[
			5, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, // 1: Long 0x1_0000_0000
			3, 0x00, 0x00, 0x00, 0x2a, // 3: Integer 42
		]);
		let pool = parse(&data)?;
		assert_eq!(pool.get_long(1)?, 0x1_0000_0000);
		assert_eq!(pool.get_integer(3)?, 42);
		assert!(pool.get_long(2).is_err(), "the second slot of a Long must not be addressable");
		Ok(())
	}

	#[test]
	fn unknown_tag_fails_the_scan() {
		let data = pool(2, &[99, 0, 0]);
		assert!(parse(&data).is_err());
	}

	#[test]
	fn broken_utf8_only_fails_when_used() -> Result<()> {
		let data = pool(3, &[
			1, 0, 1, 0xff, // 1: Utf8, invalid contents
			3, 0x00, 0x00, 0x00, 0x07, // 2: Integer 7
		]);
		let pool = parse(&data)?;
		assert_eq!(pool.get_integer(2)?, 7);
		assert!(pool.get_utf8(1).is_err());
		Ok(())
	}

	#[test]
	fn wrong_tag_is_reported() -> Result<()> {
		let data = pool(2, &[3, 0, 0, 0, 1]);
		let pool = parse(&data)?;
		assert!(pool.get_utf8(1).is_err());
		assert!(pool.get_class_name(1).is_err());
		Ok(())
	}

	#[test]
	fn raw_entry_spans_the_whole_entry() -> Result<()> {
		let data = pool(3, &[
			1, 0, 2, b'h', b'i', // 1: Utf8 "hi"
			8, 0, 1, // 2: String -> 1
		]);
		let pool = parse(&data)?;
		assert_eq!(pool.raw_entry(1)?, (1, &[0, 2, b'h', b'i'][..]));
		assert_eq!(pool.raw_entry(2)?, (8, &[0, 1][..]));
		Ok(())
	}

	#[test]
	fn index_zero_is_reserved() -> Result<()> {
		let data = pool(2, &[3, 0, 0, 0, 1]);
		let pool = parse(&data)?;
		assert!(pool.get_integer(0).is_err());
		assert_eq!(pool.get_optional(0, ConstantPool::get_utf8)?, None);
		Ok(())
	}

	#[test]
	fn dynamic_constant_referencing_itself_is_rejected() -> Result<()> {
		let data = pool(5, &[
			17, 0, 0, 0, 2, // 1: Dynamic, bootstrap method 0 -> 2
			12, 0, 3, 0, 4, // 2: NameAndType -> 3, 4
			1, 0, 1, b'x', // 3: Utf8 "x"
			1, 0, 1, b'I', // 4: Utf8 "I"
		]);
		let pool = parse(&data)?;
		let bootstrap_methods = Some(vec![BootstrapMethodRead {
			handle: Handle::InvokeStatic(MemberRef {
				class: JavaString::from("a/Bootstrap"),
				name: JavaString::from("make"),
				descriptor: JavaString::from("()I"),
			}, false),
			arguments: vec![1], // entry 1 is its own bootstrap argument
		}]);
		let Err(error) = pool.get_loadable(1, &bootstrap_methods) else {
			bail!("resolving a self referential dynamic constant must fail");
		};
		let report = format!("{error:#}");
		assert!(report.contains("its own bootstrap method"), "{report}");
		Ok(())
	}
}
