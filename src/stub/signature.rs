//! Public method signatures and their stub renderings

use std::collections::BTreeSet;

use super::format::format_type;
use super::names::type_names;
use crate::ast::{join_modifiers, ClassDecl, MethodDecl, Parameter};
use crate::error::{Error, Result};

/// Public methods of the class in declaration order.
///
/// A public generic method is refused: the stub template has no slot for
/// method type parameters, and dropping them leaves `T` unresolved.
fn public_methods(class: &ClassDecl) -> Result<Vec<&MethodDecl>> {
    let mut methods = Vec::new();
    for method in class.methods.iter().filter(|m| m.is_public()) {
        if !method.type_params.is_empty() {
            return Err(Error::unsupported_feature(format!(
                "type parameters <{}> on public method '{}'",
                method.type_params.join(", "),
                method.name
            )));
        }
        methods.push(method);
    }
    Ok(methods)
}

/// Simple names of every type used by a public method's parameters or
/// return type
pub fn needed_types(class: &ClassDecl) -> Result<BTreeSet<String>> {
    let mut types = BTreeSet::new();
    for method in public_methods(class)? {
        for parameter in &method.parameters {
            types.extend(type_names(Some(&parameter.type_node))?);
        }
        types.extend(type_names(method.return_type.as_ref())?);
    }
    Ok(types)
}

/// One stub line per public method, in declaration order
pub fn method_stubs(class: &ClassDecl) -> Result<Vec<String>> {
    public_methods(class)?.into_iter().map(format_method).collect()
}

/// `<modifiers> <return type> <name> (<params>) { return <value>; }`
pub fn format_method(method: &MethodDecl) -> Result<String> {
    let params = method
        .parameters
        .iter()
        .map(format_parameter)
        .collect::<Result<Vec<_>>>()?;
    let return_type = format_type(method.return_type.as_ref())?;
    let return_value = default_return_value(&return_type);

    Ok(format!(
        "{} {} {} ({}) {{ return {}; }}",
        join_modifiers(&method.modifiers),
        return_type,
        method.name,
        params.join(", "),
        return_value
    ))
}

fn format_parameter(parameter: &Parameter) -> Result<String> {
    let type_name = format_type(Some(&parameter.type_node))?;
    if parameter.varargs {
        Ok(format!("{}... {}", type_name, parameter.name))
    } else {
        Ok(format!("{} {}", type_name, parameter.name))
    }
}

/// Placeholder return value for a rendered return type.
///
/// `char` is left out of the numeric list on purpose and gets `null`, so
/// stubs stay identical to what the Python generator produced.
pub fn default_return_value(return_type: &str) -> &'static str {
    match return_type {
        "byte" | "short" | "int" | "long" | "float" | "double" => "0",
        "boolean" => "false",
        "void" => "",
        _ => "null",
    }
}
