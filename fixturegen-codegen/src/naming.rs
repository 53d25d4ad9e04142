//! Index-to-name mapping for generated declarations.
//!
//! All functions are pure: the same index always yields the same name.

/// Offset added to a class loop index to form its type name index.
///
/// Interfaces carry an `I` prefix on top of this, so interface and class
/// names never collide.
pub const CLASS_INDEX_OFFSET: usize = 1000;

/// Returns the type name for `index`, zero-padded to four digits.
#[must_use]
pub fn type_name(index: usize) -> String {
    format!("Type{index:04}")
}

/// Returns the interface name for interface `index`.
#[must_use]
pub fn interface_name(index: usize) -> String {
    format!("I{}", type_name(index))
}

/// Returns the type name for class loop index `index`.
#[must_use]
pub fn class_name(index: usize) -> String {
    type_name(index + CLASS_INDEX_OFFSET)
}

/// Returns the field name for field `index` within a type.
#[must_use]
pub fn field_name(index: usize) -> String {
    format!("field{index}")
}

/// Returns the method name for method `index` within a type.
#[must_use]
pub fn method_name(index: usize) -> String {
    format!("Method{index}")
}
