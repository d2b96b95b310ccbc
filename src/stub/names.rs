//! Simple type names referenced by a type node

use super::unsupported_type_node;
use crate::ast::TypeNode;
use crate::error::Result;

/// Collect the simple type names a (possibly absent) type node refers to.
///
/// `None` stands for `void` and names nothing. A reference type yields its own
/// name followed by the names of its type arguments, depth first, in
/// declaration order. Duplicates are kept; callers that need a set collapse
/// them.
pub fn type_names(node: Option<&TypeNode>) -> Result<Vec<String>> {
    let mut names = Vec::new();
    if let Some(node) = node {
        collect_names(node, &mut names)?;
    }
    Ok(names)
}

fn collect_names(node: &TypeNode, names: &mut Vec<String>) -> Result<()> {
    match node {
        TypeNode::Reference(reference) => {
            names.push(reference.name.clone());
            for argument in &reference.arguments {
                collect_names(argument, names)?;
            }
            Ok(())
        }
        TypeNode::Argument(argument) => collect_names(&argument.inner, names),
        TypeNode::Basic(basic) => {
            names.push(basic.name.clone());
            Ok(())
        }
        TypeNode::Wildcard(_) | TypeNode::Nested(_) => Err(unsupported_type_node(node)),
    }
}
