//! C# source rendering.

pub mod members;
pub mod types;

use crate::ir::ProgramIr;

/// Namespaces imported at the top of every generated unit.
pub const USINGS: [&str; 2] = ["System", "System.Collections.Generic"];

/// Rough number of bytes rendered per declared type.
const BYTES_PER_TYPE: usize = 200;

/// Renders a [`ProgramIr`] as a single C# compilation unit.
pub struct CSharpEmitter<'a> {
    ir: &'a ProgramIr,
}

impl<'a> CSharpEmitter<'a> {
    /// Creates a new emitter for the given program.
    #[must_use]
    pub fn new(ir: &'a ProgramIr) -> Self {
        Self { ir }
    }

    /// Renders the whole compilation unit.
    #[must_use]
    pub fn emit(&self) -> String {
        let mut output = String::with_capacity(self.ir.split.total() * BYTES_PER_TYPE);

        for namespace in USINGS {
            output.push_str(&format!("using {namespace};\n"));
        }
        output.push('\n');

        output.push_str(&format!("namespace {};\n\n", self.ir.namespace));

        for interface in &self.ir.interfaces {
            types::write_interface(&mut output, interface);
        }

        for class in &self.ir.classes {
            types::write_class(&mut output, class);
        }

        output
    }
}
