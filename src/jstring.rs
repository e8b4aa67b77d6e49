//! Conversions between the modified UTF-8 stored in class files and
//! [`JavaString`]s. Class file strings may contain unpaired surrogates and
//! encode U+0000 as two bytes, so [`String`] cannot hold them losslessly.

use anyhow::{anyhow, bail, Context, Result};
use java_string::JavaString;

pub(crate) fn from_slice_to_string(slice: &[u8]) -> Result<JavaString> {
	from_vec_to_string(slice.to_vec())
}

pub(crate) fn from_vec_to_string(vec: Vec<u8>) -> Result<JavaString> {
	// modified utf8 encodes U+0000 as 0xc0 0x80, a bare NUL byte is invalid
	if let Some(position) = vec.iter().position(|&byte| byte == 0) {
		bail!("plain NUL byte at position {position} in modified utf8");
	}
	JavaString::from_modified_utf8(vec)
		.with_context(|| anyhow!("invalid modified utf8"))
}
