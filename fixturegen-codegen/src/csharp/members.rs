//! Field and method rendering.

use crate::ir::{ClassDecl, FieldDecl, MethodDecl, ParameterShape, ReturnType};

/// Writes the field block, terminated by a blank line.
pub fn write_fields(output: &mut String, fields: &[FieldDecl]) {
    for field in fields {
        output.push_str("    ");
        output.push_str(field.visibility.keyword());
        output.push(' ');
        if field.is_static {
            output.push_str("static ");
        }
        if field.is_readonly {
            output.push_str("readonly ");
        }
        output.push_str(&format!(
            "{} _{};\n",
            field.field_type.as_source(),
            field.name
        ));
    }
    output.push('\n');
}

/// Writes each method with a trivial body, each followed by a blank line.
pub fn write_methods(output: &mut String, methods: &[MethodDecl]) {
    for method in methods {
        output.push_str("    ");
        output.push_str(method.visibility.keyword());
        output.push(' ');
        if method.is_static {
            output.push_str("static ");
        }
        if method.is_virtual {
            output.push_str("virtual ");
        }
        output.push_str(&format!(
            "{} {}({})\n",
            method.return_type.keyword(),
            method.name,
            parameter_list(method.parameters, method.index)
        ));
        output.push_str("    {\n");
        if let Some(value) = method.return_type.default_value() {
            output.push_str(&format!("        return {value};\n"));
        }
        output.push_str("    }\n\n");
    }
}

/// Writes concrete bodies for the interface contract, if the class has one.
pub fn write_contract_impl(output: &mut String, class: &ClassDecl) {
    let contract = class.contract_members();
    if contract.is_empty() {
        return;
    }

    for member in contract {
        match member.return_type {
            ReturnType::Void => {
                output.push_str(&format!("    public void {}() {{ }}\n", member.name));
            }
            ReturnType::Text => {
                output.push_str(&format!(
                    "    public string {}() => \"{}\";\n",
                    member.name, class.name
                ));
            }
            other => {
                output.push_str(&format!(
                    "    public {} {}() => {};\n",
                    other.keyword(),
                    member.name,
                    other.default_value().unwrap_or("default")
                ));
            }
        }
    }
    output.push('\n');
}

fn parameter_list(shape: ParameterShape, index: usize) -> String {
    match shape {
        ParameterShape::Text => format!("string param{index}"),
        ParameterShape::IntegerAndObject => format!("int value{index}, object data{index}"),
        ParameterShape::Empty => String::new(),
    }
}
