//! Interface and class derivation.

use crate::ir::{ClassDecl, ClassModifier, InterfaceDecl, InterfaceRef, Visibility};
use crate::members::MemberGenerator;
use crate::naming::{class_name, interface_name};
use fixturegen_core::GenerationParameters;

/// Generator for interface and class declarations.
pub struct TypeGenerator<'a> {
    params: &'a GenerationParameters,
    members: MemberGenerator,
}

impl<'a> TypeGenerator<'a> {
    /// Creates a new type generator.
    #[must_use]
    pub fn new(params: &'a GenerationParameters) -> Self {
        Self {
            params,
            members: MemberGenerator::new(),
        }
    }

    /// Derives interface `index`.
    #[must_use]
    pub fn interface(&self, index: usize) -> InterfaceDecl {
        let visibility = if index % 3 == 0 {
            Visibility::Public
        } else {
            Visibility::Internal
        };

        InterfaceDecl {
            index,
            name: interface_name(index),
            visibility,
        }
    }

    /// Derives class `index` in a fixture declaring `interface_count` interfaces.
    #[must_use]
    pub fn class(&self, index: usize, interface_count: usize) -> ClassDecl {
        let visibility = if index % 4 == 0 {
            Visibility::Public
        } else {
            Visibility::Internal
        };

        let modifier = if self.params.is_abstract(index) {
            Some(ClassModifier::Abstract)
        } else if self.params.is_sealed(index) {
            Some(ClassModifier::Sealed)
        } else {
            None
        };

        let implements = self
            .params
            .implemented_interface(index, interface_count)
            .map(|target| InterfaceRef {
                index: target,
                name: interface_name(target),
            });

        ClassDecl {
            index,
            name: class_name(index),
            visibility,
            modifier,
            implements,
            fields: self.members.fields(index),
            methods: self.members.methods(index),
        }
    }
}
