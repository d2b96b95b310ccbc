use super::{AstNode, Span};
use std::fmt;

// Package and Import Declarations
#[derive(Debug, Clone)]
pub struct PackageDecl {
    pub name: String,
    pub span: Span,
}

impl AstNode for PackageDecl {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Debug, Clone)]
pub struct ImportDecl {
    /// Dot-separated path without the trailing `.*` of a wildcard import
    pub name: String,
    pub is_static: bool,
    pub is_wildcard: bool,
    pub span: Span,
}

impl ImportDecl {
    /// Last path segment, i.e. the simple type name an import binds
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

impl AstNode for ImportDecl {
    fn span(&self) -> Span {
        self.span
    }
}

// Type Declarations
#[derive(Debug, Clone)]
pub enum TypeDecl {
    Class(ClassDecl),
    Interface(TypeHeader),
    Enum(TypeHeader),
    Record(TypeHeader),
    Annotation(TypeHeader),
}

impl TypeDecl {
    pub fn name(&self) -> &str {
        match self {
            TypeDecl::Class(c) => &c.name,
            TypeDecl::Interface(h)
            | TypeDecl::Enum(h)
            | TypeDecl::Record(h)
            | TypeDecl::Annotation(h) => &h.name,
        }
    }

    /// Declaration keyword as written in source
    pub fn kind(&self) -> &'static str {
        match self {
            TypeDecl::Class(_) => "class",
            TypeDecl::Interface(_) => "interface",
            TypeDecl::Enum(_) => "enum",
            TypeDecl::Record(_) => "record",
            TypeDecl::Annotation(_) => "@interface",
        }
    }
}

impl AstNode for TypeDecl {
    fn span(&self) -> Span {
        match self {
            TypeDecl::Class(c) => c.span(),
            TypeDecl::Interface(h)
            | TypeDecl::Enum(h)
            | TypeDecl::Record(h)
            | TypeDecl::Annotation(h) => h.span,
        }
    }
}

/// Header of a top-level type whose body the generator does not look into
#[derive(Debug, Clone)]
pub struct TypeHeader {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    /// Names of declared type parameters (`class Foo<T>` -> `["T"]`)
    pub type_params: Vec<String>,
    pub methods: Vec<MethodDecl>,
    pub span: Span,
}

impl AstNode for ClassDecl {
    fn span(&self) -> Span {
        self.span
    }
}

// Modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Native,
    Synchronized,
    Transient,
    Volatile,
    Strictfp,
    // Java 8: default interface method
    Default,
}

impl Modifier {
    /// Java keyword for this modifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Native => "native",
            Modifier::Synchronized => "synchronized",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Strictfp => "strictfp",
            Modifier::Default => "default",
        }
    }
}

/// Join modifiers with single spaces, in declaration order
pub fn join_modifiers(modifiers: &[Modifier]) -> String {
    modifiers.iter().map(Modifier::as_str).collect::<Vec<_>>().join(" ")
}

// Methods
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub modifiers: Vec<Modifier>,
    /// Names of method-level type parameters (`<T> T get()` -> `["T"]`)
    pub type_params: Vec<String>,
    /// `None` for `void`
    pub return_type: Option<TypeNode>,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub span: Span,
}

impl MethodDecl {
    pub fn is_public(&self) -> bool {
        self.modifiers.contains(&Modifier::Public)
    }
}

impl AstNode for MethodDecl {
    fn span(&self) -> Span {
        self.span
    }
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub type_node: TypeNode,
    pub name: String,
    pub varargs: bool,
    pub span: Span,
}

impl AstNode for Parameter {
    fn span(&self) -> Span {
        self.span
    }
}

// Type nodes
#[derive(Debug, Clone)]
pub enum TypeNode {
    /// Class or interface type, possibly generic: `List<String>`
    Reference(ReferenceType),
    /// One entry of a generic argument list
    Argument(TypeArgument),
    /// Primitive type: `int`, `boolean`, ...
    Basic(BasicType),
    /// `?`, `? extends T`, `? super T`
    Wildcard(WildcardType),
    /// Dotted type reference: `Map.Entry<K, V>`, `java.util.List`
    Nested(NestedType),
}

impl TypeNode {
    /// Append array dimensions written after a declarator (`String args[]`)
    pub fn add_dimensions(&mut self, extra: usize) {
        match self {
            TypeNode::Reference(t) => t.dimensions += extra,
            TypeNode::Basic(t) => t.dimensions += extra,
            TypeNode::Nested(t) => t.dimensions += extra,
            TypeNode::Argument(t) => t.inner.add_dimensions(extra),
            TypeNode::Wildcard(_) => {}
        }
    }

    /// Short description of the node's shape for diagnostics
    pub fn shape(&self) -> &'static str {
        match self {
            TypeNode::Reference(_) => "reference type",
            TypeNode::Argument(_) => "type argument",
            TypeNode::Basic(_) => "basic type",
            TypeNode::Wildcard(_) => "wildcard type argument",
            TypeNode::Nested(_) => "nested type reference",
        }
    }
}

impl AstNode for TypeNode {
    fn span(&self) -> Span {
        match self {
            TypeNode::Reference(t) => t.span,
            TypeNode::Argument(t) => t.span,
            TypeNode::Basic(t) => t.span,
            TypeNode::Wildcard(t) => t.span,
            TypeNode::Nested(t) => t.span,
        }
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::Reference(t) => write!(f, "{}", t),
            TypeNode::Argument(t) => write!(f, "{}", t.inner),
            TypeNode::Basic(t) => {
                write!(f, "{}", t.name)?;
                write_dims(f, t.dimensions)
            }
            TypeNode::Wildcard(t) => match &t.bound {
                Some((BoundKind::Extends, bound)) => write!(f, "? extends {}", bound),
                Some((BoundKind::Super, bound)) => write!(f, "? super {}", bound),
                None => write!(f, "?"),
            },
            TypeNode::Nested(t) => {
                for (i, segment) in t.segments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", segment)?;
                }
                write_dims(f, t.dimensions)
            }
        }
    }
}

fn write_dims(f: &mut fmt::Formatter<'_>, dimensions: usize) -> fmt::Result {
    for _ in 0..dimensions {
        write!(f, "[]")?;
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct ReferenceType {
    pub name: String,
    /// Each entry is a `TypeNode::Argument` or a `TypeNode::Wildcard`
    pub arguments: Vec<TypeNode>,
    pub dimensions: usize,
    pub span: Span,
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        write_dims(f, self.dimensions)
    }
}

#[derive(Debug, Clone)]
pub struct TypeArgument {
    pub inner: Box<TypeNode>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct BasicType {
    pub name: String,
    pub dimensions: usize,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WildcardType {
    pub bound: Option<(BoundKind, Box<TypeNode>)>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind { Extends, Super }

#[derive(Debug, Clone)]
pub struct NestedType {
    /// Dot-separated segments, outermost first
    pub segments: Vec<ReferenceType>,
    pub dimensions: usize,
    pub span: Span,
}
