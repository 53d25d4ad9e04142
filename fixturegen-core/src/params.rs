//! Structural distribution parameters.
//!
//! Every structural property of a generated program is derived from a type
//! index modulo one of these frequencies, so the same parameters and type
//! count always produce the same program.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Builds a `NonZeroUsize` in const context.
pub(crate) const fn non_zero(value: usize) -> NonZeroUsize {
    match NonZeroUsize::new(value) {
        Some(value) => value,
        None => panic!("value must be non-zero"),
    }
}

/// Parameters governing how types are distributed within a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationParameters {
    /// Types per interface: `interface_count = max(1, type_count / interface_percentage)`.
    pub interface_percentage: NonZeroUsize,
    /// Class `i` is abstract when `i % abstract_class_frequency == 0`.
    pub abstract_class_frequency: NonZeroUsize,
    /// Class `i` is sealed when `i % sealed_class_frequency == 0` and it is not abstract.
    pub sealed_class_frequency: NonZeroUsize,
    /// Class `i` implements an interface when `i % interface_implementation_frequency == 0`.
    pub interface_implementation_frequency: NonZeroUsize,
}

impl GenerationParameters {
    /// Default types-per-interface divisor.
    pub const DEFAULT_INTERFACE_PERCENTAGE: NonZeroUsize = non_zero(10);
    /// Default abstract class frequency.
    pub const DEFAULT_ABSTRACT_CLASS_FREQUENCY: NonZeroUsize = non_zero(15);
    /// Default sealed class frequency.
    pub const DEFAULT_SEALED_CLASS_FREQUENCY: NonZeroUsize = non_zero(20);
    /// Default interface implementation frequency.
    pub const DEFAULT_INTERFACE_IMPLEMENTATION_FREQUENCY: NonZeroUsize = non_zero(5);

    /// Creates parameters with the default distribution.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interface_percentage: Self::DEFAULT_INTERFACE_PERCENTAGE,
            abstract_class_frequency: Self::DEFAULT_ABSTRACT_CLASS_FREQUENCY,
            sealed_class_frequency: Self::DEFAULT_SEALED_CLASS_FREQUENCY,
            interface_implementation_frequency: Self::DEFAULT_INTERFACE_IMPLEMENTATION_FREQUENCY,
        }
    }

    /// Sets the types-per-interface divisor.
    #[must_use]
    pub const fn with_interface_percentage(mut self, value: NonZeroUsize) -> Self {
        self.interface_percentage = value;
        self
    }

    /// Sets the abstract class frequency.
    #[must_use]
    pub const fn with_abstract_class_frequency(mut self, value: NonZeroUsize) -> Self {
        self.abstract_class_frequency = value;
        self
    }

    /// Sets the sealed class frequency.
    #[must_use]
    pub const fn with_sealed_class_frequency(mut self, value: NonZeroUsize) -> Self {
        self.sealed_class_frequency = value;
        self
    }

    /// Sets the interface implementation frequency.
    #[must_use]
    pub const fn with_interface_implementation_frequency(mut self, value: NonZeroUsize) -> Self {
        self.interface_implementation_frequency = value;
        self
    }

    /// Splits a total type count into interfaces and classes.
    #[must_use]
    pub const fn split(&self, type_count: NonZeroUsize) -> TypeSplit {
        let total = type_count.get();
        let by_ratio = total / self.interface_percentage.get();
        let interface_count = if by_ratio > 1 { by_ratio } else { 1 };
        TypeSplit {
            interface_count,
            class_count: total - interface_count,
        }
    }

    /// Returns true if class `index` is declared abstract.
    #[must_use]
    pub const fn is_abstract(&self, index: usize) -> bool {
        index % self.abstract_class_frequency.get() == 0
    }

    /// Returns true if class `index` is declared sealed.
    ///
    /// Abstract wins over sealed, so the two are never both true.
    #[must_use]
    pub const fn is_sealed(&self, index: usize) -> bool {
        index % self.sealed_class_frequency.get() == 0 && !self.is_abstract(index)
    }

    /// Returns the interface implemented by class `index`, if any.
    #[must_use]
    pub const fn implemented_interface(&self, index: usize, interface_count: usize) -> Option<usize> {
        if interface_count > 0 && index % self.interface_implementation_frequency.get() == 0 {
            Some(index % interface_count)
        } else {
            None
        }
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self::new()
    }
}

/// Interface/class split for one fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeSplit {
    /// Number of interfaces, always at least one.
    pub interface_count: usize,
    /// Number of classes.
    pub class_count: usize,
}

impl TypeSplit {
    /// Total number of declared types.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.interface_count + self.class_count
    }
}
