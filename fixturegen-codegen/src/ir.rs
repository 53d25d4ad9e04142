//! Declaration records for a generated program.
//!
//! The generators derive these records from type indices; the [`crate::csharp`]
//! module renders them to source text. Keeping the two apart lets callers
//! inspect the structure of a fixture without parsing the text.

use fixturegen_core::TypeSplit;
use std::collections::BTreeSet;

/// Declared accessibility of a type or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Visible everywhere.
    Public,
    /// Visible to the type and its subclasses.
    Protected,
    /// Visible within the compiled module.
    Internal,
    /// Visible within the type only.
    Private,
}

impl Visibility {
    /// Returns the source keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Private => "private",
        }
    }
}

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// `string`.
    Text,
    /// `int`.
    Integer,
    /// `List<string>`.
    TextList,
    /// Reference to another generated class, by name only.
    TypeRef {
        /// Name index of the referenced type (already offset).
        index: usize,
        /// Name of the referenced type.
        name: String,
    },
    /// `object`.
    Object,
}

impl FieldType {
    /// Returns the type as written in source.
    #[must_use]
    pub fn as_source(&self) -> &str {
        match self {
            Self::Text => "string",
            Self::Integer => "int",
            Self::TextList => "List<string>",
            Self::TypeRef { name, .. } => name,
            Self::Object => "object",
        }
    }
}

/// Return type of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnType {
    /// `void`.
    Void,
    /// `string`.
    Text,
    /// `int`.
    Integer,
    /// `object`.
    Object,
}

impl ReturnType {
    /// Returns the type as written in source.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Text => "string",
            Self::Integer => "int",
            Self::Object => "object",
        }
    }

    /// Returns the literal returned by a generated body, `None` for `void`.
    #[must_use]
    pub const fn default_value(self) -> Option<&'static str> {
        match self {
            Self::Void => None,
            Self::Text => Some("\"default\""),
            Self::Integer => Some("0"),
            Self::Object => Some("null"),
        }
    }
}

/// Parameter list shape of a generated method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterShape {
    /// `string param{i}`.
    Text,
    /// `int value{i}, object data{i}`.
    IntegerAndObject,
    /// No parameters.
    Empty,
}

impl ParameterShape {
    /// Number of declared parameters.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Text => 1,
            Self::IntegerAndObject => 2,
            Self::Empty => 0,
        }
    }
}

/// A generated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Position within the owning type.
    pub index: usize,
    /// Field name without the leading underscore.
    pub name: String,
    /// Declared accessibility.
    pub visibility: Visibility,
    /// `static` modifier.
    pub is_static: bool,
    /// `readonly` modifier.
    pub is_readonly: bool,
    /// Declared type.
    pub field_type: FieldType,
}

/// A generated method with a trivial body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Position within the owning type.
    pub index: usize,
    /// Method name.
    pub name: String,
    /// Declared accessibility.
    pub visibility: Visibility,
    /// `static` modifier.
    pub is_static: bool,
    /// `virtual` modifier, never combined with `static`.
    pub is_virtual: bool,
    /// Return type.
    pub return_type: ReturnType,
    /// Parameter list shape.
    pub parameters: ParameterShape,
}

/// One abstract member every generated interface declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractMember {
    /// Member name.
    pub name: &'static str,
    /// Return type; the member takes no arguments.
    pub return_type: ReturnType,
}

/// The fixed contract shared by all generated interfaces.
pub const INTERFACE_CONTRACT: [ContractMember; 2] = [
    ContractMember {
        name: "Execute",
        return_type: ReturnType::Void,
    },
    ContractMember {
        name: "GetName",
        return_type: ReturnType::Text,
    },
];

/// A generated interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    /// Interface loop index.
    pub index: usize,
    /// Interface name.
    pub name: String,
    /// Declared accessibility.
    pub visibility: Visibility,
}

impl InterfaceDecl {
    /// Members declared by the interface, all without bodies.
    #[must_use]
    pub const fn members(&self) -> &'static [ContractMember] {
        &INTERFACE_CONTRACT
    }
}

/// Inheritance modifier of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassModifier {
    /// `abstract`.
    Abstract,
    /// `sealed`.
    Sealed,
}

impl ClassModifier {
    /// Returns the source keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Sealed => "sealed",
        }
    }
}

/// Interface implemented by a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRef {
    /// Interface loop index.
    pub index: usize,
    /// Interface name.
    pub name: String,
}

/// A generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    /// Class loop index (the name index is offset).
    pub index: usize,
    /// Class name.
    pub name: String,
    /// Declared accessibility.
    pub visibility: Visibility,
    /// `abstract` or `sealed`, never both.
    pub modifier: Option<ClassModifier>,
    /// Implemented interface, if any.
    pub implements: Option<InterfaceRef>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDecl>,
    /// Methods in declaration order.
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    /// Returns true if the class is abstract.
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.modifier == Some(ClassModifier::Abstract)
    }

    /// Returns true if the class is sealed.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.modifier == Some(ClassModifier::Sealed)
    }

    /// Members emitted to satisfy the implemented interface.
    ///
    /// These always get concrete bodies, abstract class or not.
    #[must_use]
    pub fn contract_members(&self) -> &'static [ContractMember] {
        match self.implements {
            Some(_) => &INTERFACE_CONTRACT,
            None => &[],
        }
    }

    /// Total number of members in the class body.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.fields.len() + self.methods.len() + self.contract_members().len()
    }

    /// Iterates over the names of other types this class refers to by field.
    pub fn referenced_types(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().filter_map(|field| match &field.field_type {
            FieldType::TypeRef { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }
}

/// Fully derived program for one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramIr {
    /// Namespace of the compilation unit.
    pub namespace: String,
    /// Interface/class split.
    pub split: TypeSplit,
    /// Interfaces in ascending index order.
    pub interfaces: Vec<InterfaceDecl>,
    /// Classes in ascending index order.
    pub classes: Vec<ClassDecl>,
}

impl ProgramIr {
    /// Names of all declared types.
    #[must_use]
    pub fn declared_names(&self) -> BTreeSet<&str> {
        self.interfaces
            .iter()
            .map(|decl| decl.name.as_str())
            .chain(self.classes.iter().map(|decl| decl.name.as_str()))
            .collect()
    }

    /// Field type references that name a type not declared in this unit.
    ///
    /// Back-references are derived from `max(10, index)`, so programs with
    /// fewer than ten classes can point past the last declared class. Such a
    /// unit does not compile.
    #[must_use]
    pub fn unresolved_references(&self) -> BTreeSet<&str> {
        let declared = self.declared_names();
        self.classes
            .iter()
            .flat_map(ClassDecl::referenced_types)
            .filter(|name| !declared.contains(name))
            .collect()
    }
}
