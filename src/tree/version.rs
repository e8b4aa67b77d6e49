/// A class file version, such as `52.0` for Java 8.
///
/// Versions order by major version first, so `45.3 < 46.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
	pub major: u16,
	pub minor: u16,
}

impl Version {
	pub fn new(major: u16, minor: u16) -> Version {
		Version { major, minor }
	}
}
