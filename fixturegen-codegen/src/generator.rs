//! Whole-program generation.

use crate::csharp::CSharpEmitter;
use crate::ir::ProgramIr;
use crate::types::TypeGenerator;
use fixturegen_core::GenerationParameters;
use std::num::NonZeroUsize;

/// Generator for complete fixture programs.
///
/// Generation is a pure function of the name, the type count and the
/// parameters; it can run concurrently for distinct fixtures.
pub struct Generator<'a> {
    params: &'a GenerationParameters,
}

impl<'a> Generator<'a> {
    /// Creates a new program generator.
    #[must_use]
    pub fn new(params: &'a GenerationParameters) -> Self {
        Self { params }
    }

    /// Derives the declarations of a program with `type_count` types.
    ///
    /// Interfaces come first in ascending index order, then classes.
    #[must_use]
    pub fn program(&self, name: &str, type_count: NonZeroUsize) -> ProgramIr {
        let split = self.params.split(type_count);
        let types = TypeGenerator::new(self.params);

        let interfaces = (0..split.interface_count)
            .map(|index| types.interface(index))
            .collect();
        let classes = (0..split.class_count)
            .map(|index| types.class(index, split.interface_count))
            .collect();

        ProgramIr {
            namespace: name.to_string(),
            split,
            interfaces,
            classes,
        }
    }

    /// Generates the source text of a program with `type_count` types.
    #[must_use]
    pub fn generate(&self, name: &str, type_count: NonZeroUsize) -> String {
        let ir = self.program(name, type_count);
        let source = CSharpEmitter::new(&ir).emit();
        tracing::debug!(
            namespace = name,
            interfaces = ir.split.interface_count,
            classes = ir.split.class_count,
            bytes = source.len(),
            "generated program"
        );
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_program_small_split() {
        let params = GenerationParameters::default();
        let ir = Generator::new(&params).program("TestAssembly.Small", count(50));

        assert_eq!(ir.split.interface_count, 5);
        assert_eq!(ir.split.class_count, 45);
        assert_eq!(ir.interfaces.len(), 5);
        assert_eq!(ir.classes.len(), 45);
        assert_eq!(ir.interfaces[4].name, "IType0004");
        assert_eq!(ir.classes[44].name, "Type1044");
    }

    #[test]
    fn test_program_names_are_unique() {
        let params = GenerationParameters::default();
        let ir = Generator::new(&params).program("TestAssembly.Large", count(2000));
        let names = ir.declared_names();
        assert_eq!(names.len(), 2000);
    }

    #[test]
    fn test_single_type_program() {
        let params = GenerationParameters::default();
        let generator = Generator::new(&params);
        let ir = generator.program("One", count(1));
        assert_eq!(ir.interfaces.len(), 1);
        assert!(ir.classes.is_empty());

        let source = generator.generate("One", count(1));
        assert_eq!(source.matches(" interface ").count(), 1);
        assert!(!source.contains(" class "));
    }

    #[test]
    fn test_canonical_programs_resolve_all_references() {
        let params = GenerationParameters::default();
        let generator = Generator::new(&params);
        for type_count in [50, 500, 2000] {
            let ir = generator.program("Fixture", count(type_count));
            assert!(ir.unresolved_references().is_empty());
        }
    }

    #[test]
    fn test_tiny_programs_report_dangling_references() {
        let params = GenerationParameters::default();
        let ir = Generator::new(&params).program("Tiny", count(5));
        assert_eq!(ir.split.class_count, 4);
        // classes 2 and 3 have a field 3, pointing at (2 + 3) % 10 and (3 + 3) % 10
        let dangling: Vec<&str> = ir.unresolved_references().into_iter().collect();
        assert_eq!(dangling, vec!["Type1005", "Type1006"]);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let params = GenerationParameters::default();
        let generator = Generator::new(&params);
        let first = generator.generate("TestAssembly.Medium", count(500));
        let second = generator.generate("TestAssembly.Medium", count(500));
        assert_eq!(first, second);
    }
}
