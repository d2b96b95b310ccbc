//! Parser implementation for Java declarations
//!
//! A recursive descent parser over the token stream that builds the
//! declaration-level [`CompilationUnit`]. Anything below a member signature
//! (method and initializer bodies, field initializers, the bodies of nested
//! and non-class types) is skipped by balanced-delimiter scanning.

use super::error::{ParseError, ParseResult};
use super::lexer::{Lexer, LexicalToken, Token};
use crate::ast::*;

/// Parser for Java source
pub struct Parser {
    tokens: Vec<LexicalToken>,
    current: usize,
    /// `>` still owed after a `>>` or `>>>` token closed nested type arguments
    pending_gt: usize,
}

impl Parser {
    /// Create a new parser from source code
    pub fn new(source: &str) -> ParseResult<Self> {
        let tokens = Lexer::new(source).tokenize()?;

        Ok(Self {
            tokens,
            current: 0,
            pending_gt: 0,
        })
    }

    /// Parse the source code into a compilation unit
    pub fn parse(mut self) -> ParseResult<CompilationUnit> {
        let start = self.current_location();

        // Package annotations live in package-info.java; a class file may
        // still start with the annotations of its first type.
        let package_decl = if self.lookahead_is_package() {
            self.skip_annotations()?;
            Some(self.parse_package_decl()?)
        } else {
            None
        };

        let mut imports = Vec::new();
        loop {
            if self.match_token(&Token::Semicolon) {
                continue;
            }
            if !self.check(&Token::Import) {
                break;
            }
            imports.push(self.parse_import_decl()?);
        }

        let mut type_decls = Vec::new();
        while !self.is_at_end() {
            if self.match_token(&Token::Semicolon) {
                continue;
            }
            type_decls.push(self.parse_type_decl()?);
        }

        let end = self.previous_location();

        Ok(CompilationUnit {
            package_decl,
            imports,
            type_decls,
            span: Span::new(start, end),
        })
    }

    // Helper methods
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn peek(&self) -> Option<&LexicalToken> {
        self.tokens.get(self.current)
    }

    fn peek_token_type(&self, idx: usize) -> Option<&Token> {
        self.tokens.get(idx).map(|t| t.token_type())
    }

    /// Owned copy of the current token kind, for matches that then advance
    fn peek_kind(&self) -> Option<Token> {
        self.peek_token_type(self.current).cloned()
    }

    fn check(&self, token_type: &Token) -> bool {
        self.peek_token_type(self.current) == Some(token_type)
    }

    fn check_contextual(&self, idx: usize, keyword: &str) -> bool {
        self.tokens
            .get(idx)
            .map_or(false, |t| t.is(&Token::Identifier) && t.lexeme() == keyword)
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    fn match_token(&mut self, token_type: &Token) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn current_location(&self) -> Location {
        match self.peek() {
            Some(token) => token.location(),
            None => self.previous_location(),
        }
    }

    fn previous_location(&self) -> Location {
        self.current
            .checked_sub(1)
            .and_then(|idx| self.tokens.get(idx))
            .map_or_else(Location::start, |t| t.location())
    }

    fn span_from(&self, start: Location) -> Span {
        Span::new(start, self.previous_location())
    }

    /// Error describing what was found at the current position
    fn error_here(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::unexpected_token(expected, token.lexeme(), token.location()),
            None => ParseError::unexpected_end_of_input(expected, self.previous_location()),
        }
    }

    fn consume(&mut self, token_type: &Token, expected: &str) -> ParseResult<()> {
        if self.check(token_type) {
            self.advance();
            Ok(())
        } else {
            Err(self.error_here(expected))
        }
    }

    fn parse_identifier(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some(token) if token.is(&Token::Identifier) => {
                let name = token.lexeme().to_string();
                self.advance();
                Ok(name)
            }
            _ => Err(self.error_here("identifier")),
        }
    }

    fn parse_qualified_name(&mut self) -> ParseResult<String> {
        let mut parts = vec![self.parse_identifier()?];

        while self.check(&Token::Dot) && self.peek_token_type(self.current + 1) == Some(&Token::Identifier) {
            self.advance();
            parts.push(self.parse_identifier()?);
        }

        Ok(parts.join("."))
    }

    // Package declaration parsing
    fn lookahead_is_package(&self) -> bool {
        let mut i = self.current;
        while self.peek_token_type(i) == Some(&Token::At) && self.peek_token_type(i + 1) != Some(&Token::Interface) {
            i += 1;
            while matches!(self.peek_token_type(i), Some(Token::Identifier) | Some(Token::Dot)) {
                i += 1;
            }
            if self.peek_token_type(i) == Some(&Token::LParen) {
                let mut depth = 0usize;
                loop {
                    match self.peek_token_type(i) {
                        Some(Token::LParen) => depth += 1,
                        Some(Token::RParen) => depth -= 1,
                        Some(_) => {}
                        None => return false,
                    }
                    i += 1;
                    if depth == 0 {
                        break;
                    }
                }
            }
        }
        self.peek_token_type(i) == Some(&Token::Package)
    }

    fn parse_package_decl(&mut self) -> ParseResult<PackageDecl> {
        let start = self.current_location();

        self.consume(&Token::Package, "'package'")?;
        let name = self.parse_qualified_name()?;
        self.consume(&Token::Semicolon, "';' after package name")?;

        Ok(PackageDecl { name, span: self.span_from(start) })
    }

    // Import declaration parsing
    fn parse_import_decl(&mut self) -> ParseResult<ImportDecl> {
        let start = self.current_location();

        self.consume(&Token::Import, "'import'")?;
        let is_static = self.match_token(&Token::Static);

        // Qualified name, leaving a trailing `.*` for the wildcard check
        let name = self.parse_qualified_name()?;
        let mut is_wildcard = false;
        if self.match_token(&Token::Dot) {
            self.consume(&Token::Star, "'*' after '.' in import")?;
            is_wildcard = true;
        }

        self.consume(&Token::Semicolon, "';' after import")?;

        Ok(ImportDecl {
            name,
            is_static,
            is_wildcard,
            span: self.span_from(start),
        })
    }

    // Type declaration parsing
    fn parse_type_decl(&mut self) -> ParseResult<TypeDecl> {
        let start = self.current_location();
        let modifiers = self.parse_modifiers()?;

        if self.check(&Token::Class) {
            return Ok(TypeDecl::Class(self.parse_class_decl(modifiers, start)?));
        }

        match self.parse_skipped_type(modifiers, start)? {
            Some(decl) => Ok(decl),
            None => Err(self.error_here("type declaration")),
        }
    }

    /// Consume an interface, enum, record or annotation type, keeping only
    /// its header. Returns `None` when no such declaration starts here.
    fn parse_skipped_type(&mut self, modifiers: Vec<Modifier>, start: Location) -> ParseResult<Option<TypeDecl>> {
        let wrap: fn(TypeHeader) -> TypeDecl = match self.peek_kind() {
            Some(Token::Class) => |h| TypeDecl::Class(ClassDecl {
                modifiers: h.modifiers,
                name: h.name,
                type_params: Vec::new(),
                methods: Vec::new(),
                span: h.span,
            }),
            Some(Token::Interface) => TypeDecl::Interface,
            Some(Token::Enum) => TypeDecl::Enum,
            Some(Token::At) if self.peek_token_type(self.current + 1) == Some(&Token::Interface) => {
                self.advance();
                TypeDecl::Annotation
            }
            Some(Token::Identifier)
                if self.check_contextual(self.current, "record")
                    && self.peek_token_type(self.current + 1) == Some(&Token::Identifier) =>
            {
                TypeDecl::Record
            }
            _ => return Ok(None),
        };
        self.advance();

        let name = self.parse_identifier()?;
        self.skip_to_body()?;
        self.skip_balanced(&Token::LBrace, &Token::RBrace)?;

        let header = TypeHeader { modifiers, name, span: self.span_from(start) };
        Ok(Some(wrap(header)))
    }

    // Class declaration parsing
    fn parse_class_decl(&mut self, modifiers: Vec<Modifier>, start: Location) -> ParseResult<ClassDecl> {
        self.consume(&Token::Class, "'class'")?;

        let name = self.parse_identifier()?;

        let type_params = if self.check(&Token::Lt) {
            self.parse_type_parameters()?
        } else {
            Vec::new()
        };

        // extends / implements / permits carry nothing a stub keeps
        self.skip_to_body()?;

        self.consume(&Token::LBrace, "'{' after class declaration")?;

        let mut methods = Vec::new();
        while !self.check(&Token::RBrace) {
            if self.is_at_end() {
                return Err(self.error_here("'}' after class body"));
            }
            if self.match_token(&Token::Semicolon) {
                continue;
            }
            if let Some(method) = self.parse_class_member()? {
                methods.push(method);
            }
        }

        self.consume(&Token::RBrace, "'}' after class body")?;

        Ok(ClassDecl {
            modifiers,
            name,
            type_params,
            methods,
            span: self.span_from(start),
        })
    }

    /// Parse one class body member, returning it only if it is a method
    fn parse_class_member(&mut self) -> ParseResult<Option<MethodDecl>> {
        let start = self.current_location();
        let modifiers = self.parse_modifiers()?;

        // Instance or static initializer
        if self.check(&Token::LBrace) {
            self.skip_balanced(&Token::LBrace, &Token::RBrace)?;
            return Ok(None);
        }

        // Nested types are consumed whole
        if self.parse_skipped_type(modifiers.clone(), start)?.is_some() {
            return Ok(None);
        }

        let type_params = if self.check(&Token::Lt) {
            self.parse_type_parameters()?
        } else {
            Vec::new()
        };

        // Constructor: Identifier followed by '('
        if self.check(&Token::Identifier) && self.peek_token_type(self.current + 1) == Some(&Token::LParen) {
            self.advance();
            self.skip_balanced(&Token::LParen, &Token::RParen)?;
            self.skip_member_body()?;
            return Ok(None);
        }

        let mut return_type = if self.match_token(&Token::Void) {
            None
        } else {
            Some(self.parse_type()?)
        };

        let name = self.parse_identifier()?;

        if !self.check(&Token::LParen) {
            // Field, possibly with several declarators and an initializer
            self.skip_field_rest()?;
            return Ok(None);
        }

        let parameters = self.parse_parameters()?;

        // Legacy array syntax: `int values()[]`
        let extra_dims = self.parse_dims()?;
        if extra_dims > 0 {
            match return_type.as_mut() {
                Some(node) => node.add_dimensions(extra_dims),
                None => {
                    return Err(ParseError::invalid_syntax(
                        "array dimensions on a void method",
                        self.previous_location(),
                    ))
                }
            }
        }

        self.skip_member_body()?;

        Ok(Some(MethodDecl {
            modifiers,
            type_params,
            return_type,
            name,
            parameters,
            span: self.span_from(start),
        }))
    }

    // Helper parsing methods
    fn parse_modifiers(&mut self) -> ParseResult<Vec<Modifier>> {
        let mut modifiers = Vec::new();

        loop {
            self.skip_annotations()?;
            match self.parse_modifier() {
                Some(modifier) => modifiers.push(modifier),
                None => break,
            }
        }

        Ok(modifiers)
    }

    fn parse_modifier(&mut self) -> Option<Modifier> {
        let modifier = match self.peek_token_type(self.current)? {
            Token::Public => Modifier::Public,
            Token::Protected => Modifier::Protected,
            Token::Private => Modifier::Private,
            Token::Abstract => Modifier::Abstract,
            Token::Static => Modifier::Static,
            Token::Final => Modifier::Final,
            Token::Native => Modifier::Native,
            Token::Synchronized => Modifier::Synchronized,
            Token::Transient => Modifier::Transient,
            Token::Volatile => Modifier::Volatile,
            Token::Strictfp => Modifier::Strictfp,
            Token::Default => Modifier::Default,
            _ => return None,
        };
        self.advance();
        Some(modifier)
    }

    /// Skip `@Name` / `@Name(...)` annotations; `@interface` is left alone
    fn skip_annotations(&mut self) -> ParseResult<()> {
        while self.check(&Token::At) && self.peek_token_type(self.current + 1) != Some(&Token::Interface) {
            self.advance();
            self.parse_qualified_name()?;
            if self.check(&Token::LParen) {
                self.skip_balanced(&Token::LParen, &Token::RParen)?;
            }
        }
        Ok(())
    }

    /// Skip from `open` to its matching `close`, both included
    fn skip_balanced(&mut self, open: &Token, close: &Token) -> ParseResult<()> {
        let expected = format!("{:?}", close);
        self.consume(open, &format!("{:?}", open))?;

        let mut depth = 1usize;
        while depth > 0 {
            match self.peek_kind() {
                None => return Err(self.error_here(&expected)),
                Some(ref t) if t == open => depth += 1,
                Some(ref t) if t == close => depth -= 1,
                Some(_) => {}
            }
            self.advance();
        }
        Ok(())
    }

    /// Skip a type header (`extends`, `implements`, record components, ...)
    /// up to, not including, the opening brace of the body
    fn skip_to_body(&mut self) -> ParseResult<()> {
        while !self.check(&Token::LBrace) {
            match self.peek_kind() {
                None => return Err(self.error_here("'{'")),
                Some(Token::LParen) => self.skip_balanced(&Token::LParen, &Token::RParen)?,
                Some(_) => self.advance(),
            }
        }
        Ok(())
    }

    /// Skip `throws ...` and then either a `{ ... }` body or a `;`
    fn skip_member_body(&mut self) -> ParseResult<()> {
        while !self.check(&Token::LBrace) && !self.check(&Token::Semicolon) {
            if self.is_at_end() {
                return Err(self.error_here("'{' or ';' after method declaration"));
            }
            self.advance();
        }

        if self.check(&Token::LBrace) {
            self.skip_balanced(&Token::LBrace, &Token::RBrace)
        } else {
            self.consume(&Token::Semicolon, "';'")
        }
    }

    /// Skip the remainder of a field declaration through its `;`
    fn skip_field_rest(&mut self) -> ParseResult<()> {
        loop {
            match self.peek_kind() {
                None => return Err(self.error_here("';' after field declaration")),
                Some(Token::Semicolon) => {
                    self.advance();
                    return Ok(());
                }
                Some(Token::LBrace) => self.skip_balanced(&Token::LBrace, &Token::RBrace)?,
                Some(Token::LParen) => self.skip_balanced(&Token::LParen, &Token::RParen)?,
                Some(_) => self.advance(),
            }
        }
    }

    fn parse_type_parameters(&mut self) -> ParseResult<Vec<String>> {
        self.consume(&Token::Lt, "'<' for type parameters")?;

        let mut names = Vec::new();
        loop {
            self.skip_annotations()?;
            names.push(self.parse_identifier()?);

            if self.match_token(&Token::Extends) {
                self.parse_type_node()?;
                while self.pending_gt == 0 && self.match_token(&Token::Amp) {
                    self.parse_type_node()?;
                }
            }

            if self.pending_gt == 0 && self.match_token(&Token::Comma) {
                continue;
            }
            break;
        }

        self.close_angle()?;
        self.expect_balanced_angles()?;

        Ok(names)
    }

    fn parse_parameters(&mut self) -> ParseResult<Vec<Parameter>> {
        self.consume(&Token::LParen, "'(' after method name")?;

        let mut parameters = Vec::new();
        if self.match_token(&Token::RParen) {
            return Ok(parameters);
        }

        loop {
            let start = self.current_location();

            // `final` and annotations say nothing about the signature
            self.parse_modifiers()?;
            let mut type_node = self.parse_type()?;
            self.skip_annotations()?;
            let varargs = self.match_token(&Token::Ellipsis);
            let name = self.parse_identifier()?;

            // C-style array parameter: `String args[]`
            let extra_dims = self.parse_dims()?;
            type_node.add_dimensions(extra_dims);

            parameters.push(Parameter {
                type_node,
                name,
                varargs,
                span: self.span_from(start),
            });

            if self.match_token(&Token::Comma) {
                continue;
            }
            self.consume(&Token::RParen, "',' or ')' in parameter list")?;
            break;
        }

        Ok(parameters)
    }

    /// Parse a complete type, rejecting stray closing angles
    fn parse_type(&mut self) -> ParseResult<TypeNode> {
        let node = self.parse_type_node()?;
        self.expect_balanced_angles()?;
        Ok(node)
    }

    fn parse_type_node(&mut self) -> ParseResult<TypeNode> {
        let start = self.current_location();
        self.skip_annotations()?;

        if let Some(token) = self.peek() {
            if token.token_type().is_primitive_type() {
                let name = token.lexeme().to_string();
                self.advance();
                let dimensions = self.parse_dims()?;
                return Ok(TypeNode::Basic(BasicType {
                    name,
                    dimensions,
                    span: self.span_from(start),
                }));
            }
        }

        let mut segments = vec![self.parse_reference_segment()?];
        while self.pending_gt == 0
            && self.check(&Token::Dot)
            && self.peek_token_type(self.current + 1) == Some(&Token::Identifier)
        {
            self.advance();
            segments.push(self.parse_reference_segment()?);
        }

        let dimensions = if self.pending_gt == 0 { self.parse_dims()? } else { 0 };
        let span = self.span_from(start);

        if segments.len() == 1 {
            let mut reference = segments.remove(0);
            reference.dimensions = dimensions;
            reference.span = span;
            Ok(TypeNode::Reference(reference))
        } else {
            Ok(TypeNode::Nested(NestedType { segments, dimensions, span }))
        }
    }

    fn parse_reference_segment(&mut self) -> ParseResult<ReferenceType> {
        let start = self.current_location();
        let name = self.parse_identifier()?;

        let arguments = if self.pending_gt == 0 && self.check(&Token::Lt) {
            self.parse_type_arguments()?
        } else {
            Vec::new()
        };

        Ok(ReferenceType {
            name,
            arguments,
            dimensions: 0,
            span: self.span_from(start),
        })
    }

    fn parse_type_arguments(&mut self) -> ParseResult<Vec<TypeNode>> {
        self.consume(&Token::Lt, "'<' for type arguments")?;

        let mut arguments = Vec::new();
        if !self.at_closing_angle() {
            loop {
                arguments.push(self.parse_type_argument()?);

                if self.pending_gt == 0 && self.match_token(&Token::Comma) {
                    continue;
                }
                break;
            }
        }

        self.close_angle()?;

        Ok(arguments)
    }

    fn parse_type_argument(&mut self) -> ParseResult<TypeNode> {
        let start = self.current_location();
        self.skip_annotations()?;

        if self.match_token(&Token::Question) {
            let bound = if self.match_token(&Token::Extends) {
                Some((BoundKind::Extends, Box::new(self.parse_type_node()?)))
            } else if self.match_token(&Token::Super) {
                Some((BoundKind::Super, Box::new(self.parse_type_node()?)))
            } else {
                None
            };
            return Ok(TypeNode::Wildcard(WildcardType {
                bound,
                span: self.span_from(start),
            }));
        }

        let inner = self.parse_type_node()?;
        Ok(TypeNode::Argument(TypeArgument {
            inner: Box::new(inner),
            span: self.span_from(start),
        }))
    }

    fn at_closing_angle(&self) -> bool {
        self.pending_gt > 0
            || matches!(
                self.peek_token_type(self.current),
                Some(Token::Gt) | Some(Token::RShift) | Some(Token::URShift)
            )
    }

    /// Consume one closing `>`, splitting `>>` and `>>>` as needed
    fn close_angle(&mut self) -> ParseResult<()> {
        if self.pending_gt > 0 {
            self.pending_gt -= 1;
            return Ok(());
        }

        match self.peek_kind() {
            Some(Token::Gt) => self.pending_gt = 0,
            Some(Token::RShift) => self.pending_gt = 1,
            Some(Token::URShift) => self.pending_gt = 2,
            _ => return Err(self.error_here("'>'")),
        }
        self.advance();
        Ok(())
    }

    fn expect_balanced_angles(&self) -> ParseResult<()> {
        if self.pending_gt > 0 {
            return Err(ParseError::invalid_syntax("unbalanced '>' in type", self.previous_location()));
        }
        Ok(())
    }

    fn parse_dims(&mut self) -> ParseResult<usize> {
        let mut dims = 0;
        while self.match_token(&Token::LBracket) {
            self.consume(&Token::RBracket, "']' after array dimension")?;
            dims += 1;
        }
        Ok(dims)
    }
}

/// Parse source code into a compilation unit
pub fn parse(source: &str) -> ParseResult<CompilationUnit> {
    let parser = Parser::new(source)?;
    parser.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(source: &str) -> ClassDecl {
        let unit = parse(source).expect("Failed to parse");
        match unit.type_decls.into_iter().next() {
            Some(TypeDecl::Class(c)) => c,
            other => panic!("expected a class, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_package_and_imports() {
        let unit = parse(
            "package a.b.c;\nimport java.util.List;\nimport static x.Y.z;\nimport java.io.*;\nclass C {}",
        )
        .expect("Failed to parse");

        assert_eq!(unit.package_name(), Some("a.b.c"));
        assert_eq!(unit.imports.len(), 3);
        assert_eq!(unit.imports[0].name, "java.util.List");
        assert!(!unit.imports[0].is_static && !unit.imports[0].is_wildcard);
        assert!(unit.imports[1].is_static);
        assert_eq!(unit.imports[1].name, "x.Y.z");
        assert!(unit.imports[2].is_wildcard);
        assert_eq!(unit.imports[2].name, "java.io");
    }

    #[test]
    fn test_parse_methods_skips_other_members() {
        let c = class(
            r#"
package p;
public final class Factory {
    private static final String NAME = "x{";
    static { init(); }
    private Factory() { this.x = 1; }
    public static Thing create(int size, String label) {
        if (size > 0) { return new Thing() { public void run() {} }; }
        return null;
    }
    interface Listener { void on(); }
    void hidden() {}
}
"#,
        );

        assert_eq!(c.name, "Factory");
        assert_eq!(c.modifiers, vec![Modifier::Public, Modifier::Final]);
        let names: Vec<_> = c.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["create", "hidden"]);
        let create = &c.methods[0];
        assert_eq!(create.parameters.len(), 2);
        assert_eq!(create.parameters[1].name, "label");
        assert!(create.is_public());
        assert!(!c.methods[1].is_public());
    }

    #[test]
    fn test_parse_nested_generics_split_shift() {
        let c = class("package p; class C { public Map<String, List<Set<Integer>>> m() { return null; } }");
        let ret = c.methods[0].return_type.as_ref().expect("return type");
        assert_eq!(ret.to_string(), "Map<String, List<Set<Integer>>>");
    }

    #[test]
    fn test_parse_wildcard_and_nested_types() {
        let c = class("package p; class C { public void m(List<? extends Foo> a, Map.Entry<K, V> b) {} }");
        let params = &c.methods[0].parameters;
        match &params[0].type_node {
            TypeNode::Reference(r) => assert!(matches!(r.arguments[0], TypeNode::Wildcard(_))),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(params[1].type_node, TypeNode::Nested(_)));
    }

    #[test]
    fn test_parse_arrays_and_varargs() {
        let c = class("package p; class C { public int[] m(String args[], Object... rest) { return null; } }");
        let m = &c.methods[0];
        assert_eq!(m.return_type.as_ref().map(|t| t.to_string()), Some("int[]".to_string()));
        assert_eq!(m.parameters[0].type_node.to_string(), "String[]");
        assert!(m.parameters[1].varargs);
    }

    #[test]
    fn test_parse_annotations_are_dropped() {
        let c = class(
            "package p;\n@Deprecated\npublic class C {\n  @Override @SuppressWarnings({\"a\", \"b\"})\n  public String toString(@Nullable final Object o) { return \"\"; }\n}",
        );
        assert_eq!(c.modifiers, vec![Modifier::Public]);
        assert_eq!(c.methods[0].parameters[0].name, "o");
    }

    #[test]
    fn test_parse_generic_method_type_params() {
        let c = class("package p; class C { public <T extends Comparable<T>> T max(T a) { return a; } }");
        assert_eq!(c.methods[0].type_params, vec!["T".to_string()]);
    }

    #[test]
    fn test_parse_multiple_top_level_types() {
        let unit = parse("package p; class A {} interface B {} enum E { X, Y; void f() {} }").expect("Failed to parse");
        let kinds: Vec<_> = unit.type_decls.iter().map(|t| t.kind()).collect();
        assert_eq!(kinds, vec!["class", "interface", "enum"]);
    }

    #[test]
    fn test_parse_reports_unterminated_class() {
        let err = parse("package p; public class A { public void f() {").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { .. }));
    }
}
