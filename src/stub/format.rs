//! Rendering type nodes back to Java source

use super::unsupported_type_node;
use crate::ast::TypeNode;
use crate::error::Result;

/// Render a (possibly absent) type node as Java source.
///
/// Generic arguments are joined by a bare `,`, so `Map<String, Integer>`
/// in the input comes out as `Map<String,Integer>`.
pub fn format_type(node: Option<&TypeNode>) -> Result<String> {
    match node {
        None => Ok("void".to_string()),
        Some(node) => format_node(node),
    }
}

fn format_node(node: &TypeNode) -> Result<String> {
    match node {
        TypeNode::Basic(basic) => Ok(with_dimensions(basic.name.clone(), basic.dimensions)),
        TypeNode::Reference(reference) => {
            let mut out = reference.name.clone();
            if !reference.arguments.is_empty() {
                let arguments = reference
                    .arguments
                    .iter()
                    .map(format_node)
                    .collect::<Result<Vec<_>>>()?;
                out.push('<');
                out.push_str(&arguments.join(","));
                out.push('>');
            }
            Ok(with_dimensions(out, reference.dimensions))
        }
        TypeNode::Argument(argument) => format_node(&argument.inner),
        TypeNode::Wildcard(_) | TypeNode::Nested(_) => Err(unsupported_type_node(node)),
    }
}

fn with_dimensions(mut rendered: String, dimensions: usize) -> String {
    for _ in 0..dimensions {
        rendered.push_str("[]");
    }
    rendered
}
