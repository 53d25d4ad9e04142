//! Interface and class rendering.

use super::members::{write_contract_impl, write_fields, write_methods};
use crate::ir::{ClassDecl, InterfaceDecl};

/// Writes an interface declaration followed by a blank line.
pub fn write_interface(output: &mut String, decl: &InterfaceDecl) {
    output.push_str(&format!(
        "{} interface {}\n",
        decl.visibility.keyword(),
        decl.name
    ));
    output.push_str("{\n");
    for member in decl.members() {
        output.push_str(&format!(
            "    {} {}();\n",
            member.return_type.keyword(),
            member.name
        ));
    }
    output.push_str("}\n\n");
}

/// Writes a class declaration followed by a blank line.
///
/// Body order is fields, methods, then the interface contract members.
pub fn write_class(output: &mut String, decl: &ClassDecl) {
    output.push_str(decl.visibility.keyword());
    output.push(' ');
    if let Some(modifier) = decl.modifier {
        output.push_str(modifier.keyword());
        output.push(' ');
    }
    output.push_str("class ");
    output.push_str(&decl.name);
    if let Some(interface) = &decl.implements {
        output.push_str(" : ");
        output.push_str(&interface.name);
    }
    output.push('\n');
    output.push_str("{\n");

    write_fields(output, &decl.fields);
    write_methods(output, &decl.methods);
    write_contract_impl(output, decl);

    output.push_str("}\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeGenerator;
    use fixturegen_core::GenerationParameters;

    #[test]
    fn test_write_interface() {
        let params = GenerationParameters::default();
        let decl = TypeGenerator::new(&params).interface(1);
        let mut output = String::new();
        write_interface(&mut output, &decl);

        assert_eq!(
            output,
            "internal interface IType0001\n{\n    void Execute();\n    string GetName();\n}\n\n"
        );
    }

    #[test]
    fn test_write_abstract_class_with_contract() {
        let params = GenerationParameters::default();
        let decl = TypeGenerator::new(&params).class(0, 5);
        let mut output = String::new();
        write_class(&mut output, &decl);

        let expected = "\
public abstract class Type1000 : IType0000
{
    private static readonly string _field0;
    protected int _field1;

    public static void Method0(string param0)
    {
    }

    protected string Method1(int value1, object data1)
    {
        return \"default\";
    }

    internal int Method2()
    {
        return 0;
    }

    public void Execute() { }
    public string GetName() => \"Type1000\";

}

";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_write_sealed_class_without_contract() {
        let params = GenerationParameters::default();
        let decl = TypeGenerator::new(&params).class(41, 5);
        let mut output = String::new();
        write_class(&mut output, &decl);

        assert!(output.starts_with("internal class Type1041\n{\n"));
        assert!(!output.contains("Execute"));
        assert!(output.ends_with("    }\n\n}\n\n"));

        let sealed = TypeGenerator::new(&params).class(20, 5);
        let mut output = String::new();
        write_class(&mut output, &sealed);
        assert!(output.starts_with("public sealed class Type1020 : IType0000\n"));
    }
}
