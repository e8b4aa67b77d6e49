//! The data types handed to visitors.

pub mod annotation;
pub mod class;
pub mod code;
pub mod constant;
pub mod field;
pub mod method;
pub mod version;

mod attribute;

pub use attribute::Attribute;
pub use version::Version;
