//! Field and method derivation.

use crate::ir::{FieldDecl, FieldType, MethodDecl, ParameterShape, ReturnType, Visibility};
use crate::naming::{CLASS_INDEX_OFFSET, field_name, method_name, type_name};

/// Fields per type: `MIN_FIELDS + index % 4`.
pub const MIN_FIELDS: usize = 2;
/// Methods per type: `MIN_METHODS + index % 4`.
pub const MIN_METHODS: usize = 3;
/// Lower bound of the back-reference modulus.
const MIN_REFERENCE_SPAN: usize = 10;

/// Generator for the members of one type.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberGenerator;

impl MemberGenerator {
    /// Creates a new member generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Number of fields declared by type `type_index`, in `2..=5`.
    #[must_use]
    pub const fn field_count(type_index: usize) -> usize {
        MIN_FIELDS + type_index % 4
    }

    /// Number of methods declared by type `type_index`, in `3..=6`.
    #[must_use]
    pub const fn method_count(type_index: usize) -> usize {
        MIN_METHODS + type_index % 4
    }

    /// Derives the fields of type `type_index`.
    #[must_use]
    pub fn fields(&self, type_index: usize) -> Vec<FieldDecl> {
        (0..Self::field_count(type_index))
            .map(|i| self.field(type_index, i))
            .collect()
    }

    /// Derives the methods of type `type_index`.
    #[must_use]
    pub fn methods(&self, type_index: usize) -> Vec<MethodDecl> {
        (0..Self::method_count(type_index))
            .map(|i| self.method(i))
            .collect()
    }

    fn field(&self, type_index: usize, i: usize) -> FieldDecl {
        let visibility = match i % 3 {
            0 => Visibility::Private,
            1 => Visibility::Protected,
            _ => Visibility::Public,
        };

        let field_type = match i % 5 {
            0 => FieldType::Text,
            1 => FieldType::Integer,
            2 => FieldType::TextList,
            3 => {
                let index = back_reference(type_index, i);
                FieldType::TypeRef {
                    index,
                    name: type_name(index),
                }
            }
            _ => FieldType::Object,
        };

        FieldDecl {
            index: i,
            name: field_name(i),
            visibility,
            is_static: i % 8 == 0,
            is_readonly: i % 6 == 0,
            field_type,
        }
    }

    fn method(&self, i: usize) -> MethodDecl {
        let visibility = match i % 4 {
            0 => Visibility::Public,
            1 => Visibility::Protected,
            2 => Visibility::Internal,
            _ => Visibility::Private,
        };

        let return_type = match i % 4 {
            0 => ReturnType::Void,
            1 => ReturnType::Text,
            2 => ReturnType::Integer,
            _ => ReturnType::Object,
        };

        let parameters = match i % 3 {
            0 => ParameterShape::Text,
            1 => ParameterShape::IntegerAndObject,
            _ => ParameterShape::Empty,
        };

        let is_static = i % 10 == 0;

        MethodDecl {
            index: i,
            name: method_name(i),
            visibility,
            is_static,
            is_virtual: i % 7 == 0 && !is_static,
            return_type,
            parameters,
        }
    }
}

/// Name index of the type referenced by field `i` of type `type_index`.
///
/// May point at a class that is declared later, or not at all when the
/// fixture has fewer than ten classes.
#[must_use]
pub const fn back_reference(type_index: usize, i: usize) -> usize {
    let span = if type_index > MIN_REFERENCE_SPAN {
        type_index
    } else {
        MIN_REFERENCE_SPAN
    };
    (type_index + i) % span + CLASS_INDEX_OFFSET
}
