use anyhow::{anyhow, bail, Context, Result};
use bitflags::bitflags;
use java_string::JavaStr;
use log::trace;

use crate::class_constants::{self, attribute};
use crate::class_reader::code::MethodContext;
use crate::class_reader::pool::{BootstrapMethodRead, ConstantPool};
use crate::cursor::Cursor;
use crate::jstring;
use crate::tree::class::{ClassAccess, EnclosingMethod, InnerClass, InnerClassAccess};
use crate::tree::field::FieldAccess;
use crate::tree::method::{MethodAccess, MethodParameter, ParameterAccess};
use crate::tree::version::Version;
use crate::visitor::annotation::AnnotationsVisitor;
use crate::visitor::attribute::UnknownAttributeVisitor;
use crate::visitor::class::ClassVisitor;
use crate::visitor::field::FieldVisitor;
use crate::visitor::method::MethodVisitor;

pub(crate) mod annotations;
pub(crate) mod code;
pub(crate) mod frames;
pub(crate) mod labels;
pub(crate) mod pool; // needs to be pub(crate) because of the UnknownAttributeVisitor

bitflags! {
	/// Controls how much of a class file the reader decodes.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct ReaderFlags: u8 {
		/// Skip the `Code` attribute of every method.
		const SKIP_CODE = 0x01;
		/// Skip the debugging attributes: `SourceFile`,
		/// `SourceDebugExtension`, `LineNumberTable`, `LocalVariableTable`
		/// and `LocalVariableTypeTable`.
		const SKIP_DEBUG = 0x02;
		/// Skip the `StackMapTable` attribute of every method body.
		const SKIP_FRAMES = 0x04;
		/// Deliver every stack map frame in its full form, with the
		/// complete locals and stack computed from the preceding frames.
		const EXPAND_FRAMES = 0x08;
	}
}

/// Skips the `attributes_count` and `attributes` items of a class, field or
/// method whose attributes the visitor declined.
fn skip_attributes(r: &mut Cursor) -> Result<()> {
	let attributes_count = r.read_u16()?;
	for _ in 0..attributes_count {
		let _attribute_name_index = r.read_u16()?;
		let attribute_length = r.read_u32_as_usize()?;
		r.skip(attribute_length)?;
	}
	Ok(())
}

/// A parsed class file header plus a constant pool, ready to be walked.
///
/// Construction only scans the constant pool for entry boundaries; entries
/// are decoded when something asks for them, either through
/// [`pool`][ClassReader::pool] or during [`accept`][ClassReader::accept].
pub struct ClassReader<'a> {
	data: &'a [u8],
	version: Version,
	pool: ConstantPool<'a>,
}

impl<'a> ClassReader<'a> {
	pub fn new(data: &'a [u8]) -> Result<ClassReader<'a>> {
		let mut r = Cursor::new(data);

		let magic = r.read_u32()?;
		if magic != class_constants::MAGIC {
			bail!("wrong magic: got {magic:#x}, expected 0xCAFEBABE");
		}

		let minor = r.read_u16()?;
		let major = r.read_u16()?;
		let version = Version { major, minor };

		let pool = ConstantPool::parse(&mut r)?;

		Ok(ClassReader { data, version, pool })
	}

	pub fn version(&self) -> Version {
		self.version
	}

	pub fn pool(&self) -> &ConstantPool<'a> {
		&self.pool
	}

	/// Walks the class file, driving the visitor.
	///
	/// The visitor methods are called in a fixed order regardless of where
	/// the attributes sit in the file; see [`ClassVisitor`] for that order.
	pub fn accept<V: ClassVisitor>(&self, flags: ReaderFlags, visitor: &mut V) -> Result<()> {
		let pool = &self.pool;
		let mut r = Cursor::at(self.data, pool.end_offset());

		let access = ClassAccess::from_bits_retain(r.read_u16()?);
		let this_class = pool.get_class_name(r.read_u16()?)?;
		let super_class = pool.get_optional(r.read_u16()?, ConstantPool::get_class_name)?;
		let interfaces = r.read_vec(
			Cursor::read_u16_as_usize,
			|r| pool.get_class_name(r.read_u16()?),
		)?;

		trace!("reading class {this_class:?}");

		// The class attributes sit behind the fields and methods, but the
		// BootstrapMethods attribute must be known before any `ldc` or
		// `ConstantValue` resolves a loadable entry. So the members are
		// skipped first and read again once the class attributes are done.
		let members_start = r;
		for _ in 0..2 {
			// fields and methods share their layout
			for _ in 0..r.read_u16()? {
				r.skip(2 + 2 + 2)?;
				skip_attributes(&mut r)?;
			}
		}

		visitor.visit_header(self.version, access, this_class.clone(), super_class, interfaces)?;

		let mut signature = None;
		let mut source_file = None;
		let mut source_debug_extension = None;
		let mut enclosing_method = None;
		let (mut is_deprecated, mut is_synthetic) = (false, false);
		let mut annotations: Vec<(bool, Cursor<'a>)> = Vec::new();
		let mut unknown_attributes = Vec::new();
		let mut nest_host = None;
		let mut nest_members = None;
		let mut permitted_subclasses = None;
		let mut inner_classes = None;
		let mut bootstrap_methods: Option<Vec<BootstrapMethodRead>> = None;

		let attributes_count = r.read_u16()?;
		for _ in 0..attributes_count {
			let name = pool.get_utf8_ref(r.read_u16()?)?;
			let length = r.read_u32_as_usize()?;
			let mut body = r;
			r.skip(length)?;

			match name {
				name if name == attribute::DEPRECATED => is_deprecated = true,
				name if name == attribute::SYNTHETIC => is_synthetic = true,
				name if name == attribute::SIGNATURE => {
					signature = Some(pool.get_utf8(body.read_u16()?)?);
				},
				name if name == attribute::SOURCE_FILE => {
					if !flags.contains(ReaderFlags::SKIP_DEBUG) {
						source_file = Some(pool.get_utf8(body.read_u16()?)?);
					}
				},
				name if name == attribute::SOURCE_DEBUG_EXTENSION => {
					if !flags.contains(ReaderFlags::SKIP_DEBUG) {
						source_debug_extension = Some(jstring::from_slice_to_string(body.read_slice(length)?)?);
					}
				},
				name if name == attribute::ENCLOSING_METHOD => {
					let class = pool.get_class_name(body.read_u16()?)?;
					let method = pool.get_optional(body.read_u16()?, ConstantPool::get_name_and_type)?;
					enclosing_method = Some(EnclosingMethod { class, method });
				},
				name if name == attribute::RUNTIME_VISIBLE_ANNOTATIONS => annotations.push((true, body)),
				name if name == attribute::RUNTIME_INVISIBLE_ANNOTATIONS => annotations.push((false, body)),
				name if name == attribute::NEST_HOST => {
					nest_host = Some(pool.get_class_name(body.read_u16()?)?);
				},
				name if name == attribute::NEST_MEMBERS => {
					nest_members = Some(body.read_vec(
						Cursor::read_u16_as_usize,
						|r| pool.get_class_name(r.read_u16()?),
					)?);
				},
				name if name == attribute::PERMITTED_SUBCLASSES => {
					permitted_subclasses = Some(body.read_vec(
						Cursor::read_u16_as_usize,
						|r| pool.get_class_name(r.read_u16()?),
					)?);
				},
				name if name == attribute::INNER_CLASSES => {
					inner_classes = Some(body.read_vec(
						Cursor::read_u16_as_usize,
						|r| Ok(InnerClass {
							inner_class: pool.get_class_name(r.read_u16()?)?,
							outer_class: pool.get_optional(r.read_u16()?, ConstantPool::get_class_name)?,
							inner_name: pool.get_optional(r.read_u16()?, ConstantPool::get_utf8)?,
							access: InnerClassAccess::from_bits_retain(r.read_u16()?),
						}),
					)?);
				},
				name if name == attribute::BOOTSTRAP_METHODS => {
					if bootstrap_methods.is_some() {
						bail!("only one BootstrapMethods attribute is allowed");
					}
					bootstrap_methods = Some(body.read_vec(
						Cursor::read_u16_as_usize,
						|r| Ok(BootstrapMethodRead {
							handle: pool.get_method_handle(r.read_u16()?)?,
							arguments: r.read_vec(Cursor::read_u16_as_usize, Cursor::read_u16)?,
						}),
					)?);
				},
				name => {
					unknown_attributes.push((name.to_owned(), body.read_slice(length)?.to_vec()));
				},
			}
		}

		if let Some(signature) = signature {
			visitor.visit_signature(signature)?;
		}
		if source_file.is_some() || source_debug_extension.is_some() {
			visitor.visit_source(source_file, source_debug_extension)?;
		}
		if let Some(enclosing_method) = enclosing_method {
			visitor.visit_outer_class(enclosing_method)?;
		}

		visitor.visit_deprecated_and_synthetic_attribute(is_deprecated, is_synthetic)?;

		read_annotation_batches(&annotations, pool, visitor, ClassVisitor::visit_annotations, ClassVisitor::finish_annotations)?;

		for (name, bytes) in unknown_attributes.into_iter().rev() {
			let unknown_attribute = V::UnknownAttribute::read(name, bytes, pool)
				.context("failed to read unknown class attribute")?;
			visitor.visit_unknown_attribute(unknown_attribute)?;
		}

		if let Some(nest_host) = nest_host {
			visitor.visit_nest_host(nest_host)?;
		}
		if let Some(nest_members) = nest_members {
			visitor.visit_nest_members(nest_members)?;
		}
		if let Some(permitted_subclasses) = permitted_subclasses {
			visitor.visit_permitted_subclasses(permitted_subclasses)?;
		}
		if let Some(inner_classes) = inner_classes {
			visitor.visit_inner_classes(inner_classes)?;
		}

		let mut r = members_start;
		let fields_count = r.read_u16()?;
		for _ in 0..fields_count {
			read_field(&mut r, pool, visitor)
				.with_context(|| anyhow!("failed to read field of class {this_class:?}"))?;
		}
		let methods_count = r.read_u16()?;
		for _ in 0..methods_count {
			read_method(&mut r, pool, flags, &bootstrap_methods, &this_class, visitor)
				.with_context(|| anyhow!("failed to read method of class {this_class:?}"))?;
		}

		visitor.visit_end()?;

		Ok(())
	}
}

/// Drives the annotation sub-visitor over each recorded
/// `Runtime(In)visibleAnnotations` body, visible attributes first.
fn read_annotation_batches<V, A>(
	batches: &[(bool, Cursor)],
	pool: &ConstantPool,
	visitor: &mut V,
	visit: impl Fn(&mut V, bool) -> Result<Option<A>>,
	finish: impl Fn(&mut V, A) -> Result<()>,
) -> Result<()>
where
	A: AnnotationsVisitor,
{
	for wanted in [true, false] {
		for &(visible, body) in batches {
			if visible != wanted {
				continue;
			}
			if let Some(mut annotations_visitor) = visit(visitor, visible)? {
				let mut body = body;
				annotations::read_annotations_attribute(&mut body, pool, &mut annotations_visitor)?;
				finish(visitor, annotations_visitor)?;
			}
		}
	}
	Ok(())
}

fn read_field<C: ClassVisitor>(r: &mut Cursor, pool: &ConstantPool, visitor: &mut C) -> Result<()> {
	let access = FieldAccess::from_bits_retain(r.read_u16()?);
	let name = pool.get_utf8(r.read_u16()?)?;
	let descriptor = pool.get_utf8(r.read_u16()?)?;

	match visitor.visit_field(access, name, descriptor)? {
		Some(mut field_visitor) => {
			read_field_attributes(r, pool, &mut field_visitor)?;
			visitor.finish_field(field_visitor)
		},
		None => skip_attributes(r),
	}
}

fn read_field_attributes<F: FieldVisitor>(r: &mut Cursor, pool: &ConstantPool, visitor: &mut F) -> Result<()> {
	let mut constant_value = None;
	let mut signature = None;
	let (mut is_deprecated, mut is_synthetic) = (false, false);
	let mut annotations = Vec::new();
	let mut unknown_attributes = Vec::new();

	let attributes_count = r.read_u16()?;
	for _ in 0..attributes_count {
		let name = pool.get_utf8_ref(r.read_u16()?)?;
		let length = r.read_u32_as_usize()?;
		let mut body = *r;
		r.skip(length)?;

		match name {
			name if name == attribute::DEPRECATED => is_deprecated = true,
			name if name == attribute::SYNTHETIC => is_synthetic = true,
			name if name == attribute::CONSTANT_VALUE => {
				constant_value = Some(pool.get_constant_value(body.read_u16()?)?);
			},
			name if name == attribute::SIGNATURE => {
				signature = Some(pool.get_utf8(body.read_u16()?)?);
			},
			name if name == attribute::RUNTIME_VISIBLE_ANNOTATIONS => annotations.push((true, body)),
			name if name == attribute::RUNTIME_INVISIBLE_ANNOTATIONS => annotations.push((false, body)),
			name => {
				unknown_attributes.push((name.to_owned(), body.read_slice(length)?.to_vec()));
			},
		}
	}

	if let Some(constant_value) = constant_value {
		visitor.visit_constant_value(constant_value)?;
	}
	if let Some(signature) = signature {
		visitor.visit_signature(signature)?;
	}

	read_annotation_batches(&annotations, pool, visitor, FieldVisitor::visit_annotations, FieldVisitor::finish_annotations)?;

	for (name, bytes) in unknown_attributes.into_iter().rev() {
		let unknown_attribute = F::UnknownAttribute::read(name, bytes, pool)
			.context("failed to read unknown field attribute")?;
		visitor.visit_unknown_attribute(unknown_attribute)?;
	}

	visitor.visit_deprecated_and_synthetic_attribute(is_deprecated, is_synthetic)?;

	visitor.visit_end()
}

fn read_method<'a, C: ClassVisitor>(
	r: &mut Cursor<'a>,
	pool: &ConstantPool,
	flags: ReaderFlags,
	bootstrap_methods: &Option<Vec<BootstrapMethodRead>>,
	class_name: &JavaStr,
	visitor: &mut C,
) -> Result<()> {
	let access = MethodAccess::from_bits_retain(r.read_u16()?);
	let name = pool.get_utf8(r.read_u16()?)?;
	let descriptor = pool.get_utf8(r.read_u16()?)?;

	match visitor.visit_method(access, name.clone(), descriptor.clone())? {
		Some(mut method_visitor) => {
			let context = MethodContext {
				class_name,
				access,
				name: &name,
				descriptor: &descriptor,
			};
			read_method_attributes(r, pool, flags, bootstrap_methods, context, &mut method_visitor)
				.with_context(|| anyhow!("failed to read method {name:?} {descriptor:?}"))?;
			visitor.finish_method(method_visitor)
		},
		None => skip_attributes(r),
	}
}

fn read_method_attributes<'a, M: MethodVisitor>(
	r: &mut Cursor<'a>,
	pool: &ConstantPool,
	flags: ReaderFlags,
	bootstrap_methods: &Option<Vec<BootstrapMethodRead>>,
	context: MethodContext<'_>,
	visitor: &mut M,
) -> Result<()> {
	let mut code: Option<Cursor<'a>> = None;
	let mut exceptions = None;
	let mut signature = None;
	let mut annotation_default: Option<Cursor<'a>> = None;
	let mut method_parameters = None;
	let (mut is_deprecated, mut is_synthetic) = (false, false);
	let mut annotations = Vec::new();
	let mut unknown_attributes = Vec::new();

	let attributes_count = r.read_u16()?;
	for _ in 0..attributes_count {
		let name = pool.get_utf8_ref(r.read_u16()?)?;
		let length = r.read_u32_as_usize()?;
		let mut body = *r;
		r.skip(length)?;

		match name {
			name if name == attribute::DEPRECATED => is_deprecated = true,
			name if name == attribute::SYNTHETIC => is_synthetic = true,
			name if name == attribute::CODE => {
				if !flags.contains(ReaderFlags::SKIP_CODE) {
					if code.is_some() {
						bail!("only one Code attribute is allowed");
					}
					code = Some(body);
				}
			},
			name if name == attribute::EXCEPTIONS => {
				exceptions = Some(body.read_vec(
					Cursor::read_u16_as_usize,
					|r| pool.get_class_name(r.read_u16()?),
				)?);
			},
			name if name == attribute::SIGNATURE => {
				signature = Some(pool.get_utf8(body.read_u16()?)?);
			},
			name if name == attribute::ANNOTATION_DEFAULT => annotation_default = Some(body),
			name if name == attribute::METHOD_PARAMETERS => {
				method_parameters = Some(body.read_vec(
					Cursor::read_u8_as_usize,
					|r| Ok(MethodParameter {
						name: pool.get_optional(r.read_u16()?, ConstantPool::get_utf8)?,
						access: ParameterAccess::from_bits_retain(r.read_u16()?),
					}),
				)?);
			},
			name if name == attribute::RUNTIME_VISIBLE_ANNOTATIONS => annotations.push((true, body)),
			name if name == attribute::RUNTIME_INVISIBLE_ANNOTATIONS => annotations.push((false, body)),
			name => {
				unknown_attributes.push((name.to_owned(), body.read_slice(length)?.to_vec()));
			},
		}
	}

	if let Some(mut body) = code {
		if let Some(mut code_visitor) = visitor.visit_code()? {
			code::read_code(&mut body, pool, flags, bootstrap_methods, context, &mut code_visitor)?;
			visitor.finish_code(code_visitor)?;
		}
	}

	if let Some(exceptions) = exceptions {
		visitor.visit_exceptions(exceptions)?;
	}
	if let Some(signature) = signature {
		visitor.visit_signature(signature)?;
	}
	if let Some(mut body) = annotation_default {
		if let Some(mut element_value_visitor) = visitor.visit_annotation_default()? {
			annotations::read_element_value_unnamed(&mut body, pool, &mut element_value_visitor)?;
			visitor.finish_annotation_default(element_value_visitor)?;
		}
	}
	if let Some(method_parameters) = method_parameters {
		visitor.visit_parameters(method_parameters)?;
	}

	read_annotation_batches(&annotations, pool, visitor, MethodVisitor::visit_annotations, MethodVisitor::finish_annotations)?;

	for (name, bytes) in unknown_attributes.into_iter().rev() {
		let unknown_attribute = M::UnknownAttribute::read(name, bytes, pool)
			.context("failed to read unknown method attribute")?;
		visitor.visit_unknown_attribute(unknown_attribute)?;
	}

	visitor.visit_deprecated_and_synthetic_attribute(is_deprecated, is_synthetic)?;

	visitor.visit_end()
}
