//! Constants from the class file format.

pub const MAGIC: u32 = 0xCAFE_BABE;

/// Constant pool tags.
pub mod pool {
	pub const UTF8: u8 = 1;
	pub const INTEGER: u8 = 3;
	pub const FLOAT: u8 = 4;
	pub const LONG: u8 = 5;
	pub const DOUBLE: u8 = 6;
	pub const CLASS: u8 = 7;
	pub const STRING: u8 = 8;
	pub const FIELD_REF: u8 = 9;
	pub const METHOD_REF: u8 = 10;
	pub const INTERFACE_METHOD_REF: u8 = 11;
	pub const NAME_AND_TYPE: u8 = 12;
	pub const METHOD_HANDLE: u8 = 15;
	pub const METHOD_TYPE: u8 = 16;
	pub const DYNAMIC: u8 = 17;
	pub const INVOKE_DYNAMIC: u8 = 18;
	pub const MODULE: u8 = 19;
	pub const PACKAGE: u8 = 20;

	/// The `reference_kind` of a `CONSTANT_MethodHandle_info` entry.
	pub mod method_handle_reference {
		pub const GET_FIELD: u8 = 1;
		pub const GET_STATIC: u8 = 2;
		pub const PUT_FIELD: u8 = 3;
		pub const PUT_STATIC: u8 = 4;
		pub const INVOKE_VIRTUAL: u8 = 5;
		pub const INVOKE_STATIC: u8 = 6;
		pub const INVOKE_SPECIAL: u8 = 7;
		pub const NEW_INVOKE_SPECIAL: u8 = 8;
		pub const INVOKE_INTERFACE: u8 = 9;
	}
}

/// Predefined attribute names.
pub mod attribute {
	use java_string::JavaStr;

	pub const CONSTANT_VALUE: &JavaStr = JavaStr::from_str("ConstantValue");
	pub const CODE: &JavaStr = JavaStr::from_str("Code");
	pub const STACK_MAP_TABLE: &JavaStr = JavaStr::from_str("StackMapTable");
	pub const EXCEPTIONS: &JavaStr = JavaStr::from_str("Exceptions");
	pub const INNER_CLASSES: &JavaStr = JavaStr::from_str("InnerClasses");
	pub const ENCLOSING_METHOD: &JavaStr = JavaStr::from_str("EnclosingMethod");
	pub const SYNTHETIC: &JavaStr = JavaStr::from_str("Synthetic");
	pub const SIGNATURE: &JavaStr = JavaStr::from_str("Signature");
	pub const SOURCE_FILE: &JavaStr = JavaStr::from_str("SourceFile");
	pub const SOURCE_DEBUG_EXTENSION: &JavaStr = JavaStr::from_str("SourceDebugExtension");
	pub const LINE_NUMBER_TABLE: &JavaStr = JavaStr::from_str("LineNumberTable");
	pub const LOCAL_VARIABLE_TABLE: &JavaStr = JavaStr::from_str("LocalVariableTable");
	pub const LOCAL_VARIABLE_TYPE_TABLE: &JavaStr = JavaStr::from_str("LocalVariableTypeTable");
	pub const DEPRECATED: &JavaStr = JavaStr::from_str("Deprecated");
	pub const RUNTIME_VISIBLE_ANNOTATIONS: &JavaStr = JavaStr::from_str("RuntimeVisibleAnnotations");
	pub const RUNTIME_INVISIBLE_ANNOTATIONS: &JavaStr = JavaStr::from_str("RuntimeInvisibleAnnotations");
	pub const ANNOTATION_DEFAULT: &JavaStr = JavaStr::from_str("AnnotationDefault");
	pub const BOOTSTRAP_METHODS: &JavaStr = JavaStr::from_str("BootstrapMethods");
	pub const METHOD_PARAMETERS: &JavaStr = JavaStr::from_str("MethodParameters");
	pub const NEST_HOST: &JavaStr = JavaStr::from_str("NestHost");
	pub const NEST_MEMBERS: &JavaStr = JavaStr::from_str("NestMembers");
	pub const PERMITTED_SUBCLASSES: &JavaStr = JavaStr::from_str("PermittedSubclasses");
}

/// The `atype` operand of a `newarray` instruction.
pub mod atype {
	pub const BOOLEAN: u8 = 4;
	pub const CHAR: u8 = 5;
	pub const FLOAT: u8 = 6;
	pub const DOUBLE: u8 = 7;
	pub const BYTE: u8 = 8;
	pub const SHORT: u8 = 9;
	pub const INT: u8 = 10;
	pub const LONG: u8 = 11;
}

/// Stack map frame type bytes.
pub mod frame {
	pub const SAME_MAX: u8 = 63;
	pub const SAME_LOCALS_1_STACK_ITEM_MIN: u8 = 64;
	pub const SAME_LOCALS_1_STACK_ITEM_MAX: u8 = 127;
	pub const RESERVED_MIN: u8 = 128;
	pub const RESERVED_MAX: u8 = 246;
	pub const SAME_LOCALS_1_STACK_ITEM_EXTENDED: u8 = 247;
	pub const CHOP_MIN: u8 = 248;
	pub const CHOP_MAX: u8 = 250;
	pub const SAME_EXTENDED: u8 = 251;
	pub const APPEND_MIN: u8 = 252;
	pub const APPEND_MAX: u8 = 254;
	pub const FULL: u8 = 255;
}

/// Verification type tags inside stack map frames.
pub mod verification_type {
	pub const TOP: u8 = 0;
	pub const INTEGER: u8 = 1;
	pub const FLOAT: u8 = 2;
	pub const DOUBLE: u8 = 3;
	pub const LONG: u8 = 4;
	pub const NULL: u8 = 5;
	pub const UNINITIALIZED_THIS: u8 = 6;
	pub const OBJECT: u8 = 7;
	pub const UNINITIALIZED: u8 = 8;
}

/// Bytecode opcodes.
pub mod opcode {
	pub const NOP: u8 = 0x00;
	pub const ACONST_NULL: u8 = 0x01;
	pub const ICONST_M1: u8 = 0x02;
	pub const ICONST_0: u8 = 0x03;
	pub const ICONST_1: u8 = 0x04;
	pub const ICONST_2: u8 = 0x05;
	pub const ICONST_3: u8 = 0x06;
	pub const ICONST_4: u8 = 0x07;
	pub const ICONST_5: u8 = 0x08;
	pub const LCONST_0: u8 = 0x09;
	pub const LCONST_1: u8 = 0x0a;
	pub const FCONST_0: u8 = 0x0b;
	pub const FCONST_1: u8 = 0x0c;
	pub const FCONST_2: u8 = 0x0d;
	pub const DCONST_0: u8 = 0x0e;
	pub const DCONST_1: u8 = 0x0f;
	pub const BIPUSH: u8 = 0x10;
	pub const SIPUSH: u8 = 0x11;
	pub const LDC: u8 = 0x12;
	pub const LDC_W: u8 = 0x13;
	pub const LDC2_W: u8 = 0x14;
	pub const ILOAD: u8 = 0x15;
	pub const LLOAD: u8 = 0x16;
	pub const FLOAD: u8 = 0x17;
	pub const DLOAD: u8 = 0x18;
	pub const ALOAD: u8 = 0x19;
	pub const ILOAD_0: u8 = 0x1a;
	pub const ILOAD_1: u8 = 0x1b;
	pub const ILOAD_2: u8 = 0x1c;
	pub const ILOAD_3: u8 = 0x1d;
	pub const LLOAD_0: u8 = 0x1e;
	pub const ALOAD_0: u8 = 0x2a;
	pub const ALOAD_3: u8 = 0x2d;
	pub const IALOAD: u8 = 0x2e;
	pub const SALOAD: u8 = 0x35;
	pub const ISTORE: u8 = 0x36;
	pub const LSTORE: u8 = 0x37;
	pub const FSTORE: u8 = 0x38;
	pub const DSTORE: u8 = 0x39;
	pub const ASTORE: u8 = 0x3a;
	pub const ISTORE_0: u8 = 0x3b;
	pub const ASTORE_3: u8 = 0x4e;
	pub const IASTORE: u8 = 0x4f;
	pub const SASTORE: u8 = 0x56;
	pub const POP: u8 = 0x57;
	pub const SWAP: u8 = 0x5f;
	pub const IADD: u8 = 0x60;
	pub const LXOR: u8 = 0x83;
	pub const IINC: u8 = 0x84;
	pub const I2L: u8 = 0x85;
	pub const DCMPG: u8 = 0x98;
	pub const IFEQ: u8 = 0x99;
	pub const IFNE: u8 = 0x9a;
	pub const IFLT: u8 = 0x9b;
	pub const IFGE: u8 = 0x9c;
	pub const IFGT: u8 = 0x9d;
	pub const IFLE: u8 = 0x9e;
	pub const IF_ICMPEQ: u8 = 0x9f;
	pub const IF_ICMPNE: u8 = 0xa0;
	pub const IF_ICMPLT: u8 = 0xa1;
	pub const IF_ICMPGE: u8 = 0xa2;
	pub const IF_ICMPGT: u8 = 0xa3;
	pub const IF_ICMPLE: u8 = 0xa4;
	pub const IF_ACMPEQ: u8 = 0xa5;
	pub const IF_ACMPNE: u8 = 0xa6;
	pub const GOTO: u8 = 0xa7;
	pub const JSR: u8 = 0xa8;
	pub const RET: u8 = 0xa9;
	pub const TABLESWITCH: u8 = 0xaa;
	pub const LOOKUPSWITCH: u8 = 0xab;
	pub const IRETURN: u8 = 0xac;
	pub const LRETURN: u8 = 0xad;
	pub const FRETURN: u8 = 0xae;
	pub const DRETURN: u8 = 0xaf;
	pub const ARETURN: u8 = 0xb0;
	pub const RETURN: u8 = 0xb1;
	pub const GETSTATIC: u8 = 0xb2;
	pub const PUTSTATIC: u8 = 0xb3;
	pub const GETFIELD: u8 = 0xb4;
	pub const PUTFIELD: u8 = 0xb5;
	pub const INVOKEVIRTUAL: u8 = 0xb6;
	pub const INVOKESPECIAL: u8 = 0xb7;
	pub const INVOKESTATIC: u8 = 0xb8;
	pub const INVOKEINTERFACE: u8 = 0xb9;
	pub const INVOKEDYNAMIC: u8 = 0xba;
	pub const NEW: u8 = 0xbb;
	pub const NEWARRAY: u8 = 0xbc;
	pub const ANEWARRAY: u8 = 0xbd;
	pub const ARRAYLENGTH: u8 = 0xbe;
	pub const ATHROW: u8 = 0xbf;
	pub const CHECKCAST: u8 = 0xc0;
	pub const INSTANCEOF: u8 = 0xc1;
	pub const MONITORENTER: u8 = 0xc2;
	pub const MONITOREXIT: u8 = 0xc3;
	pub const WIDE: u8 = 0xc4;
	pub const MULTIANEWARRAY: u8 = 0xc5;
	pub const IFNULL: u8 = 0xc6;
	pub const IFNONNULL: u8 = 0xc7;
	pub const GOTO_W: u8 = 0xc8;
	pub const JSR_W: u8 = 0xc9;
}
