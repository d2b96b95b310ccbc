use logos::Logos;
use crate::ast::Location;
use super::error::ParseError;

/// Token types for Java source
///
/// Method bodies are skipped rather than parsed, but they still go through
/// the lexer: every operator and literal form must tokenize so that braces
/// inside strings, chars and comments never unbalance the body scanner.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Keywords
    #[token("package")]
    Package,
    #[token("import")]
    Import,
    #[token("static")]
    Static,
    #[token("public")]
    Public,
    #[token("protected")]
    Protected,
    #[token("private")]
    Private,
    #[token("abstract")]
    Abstract,
    #[token("final")]
    Final,
    #[token("native")]
    Native,
    #[token("synchronized")]
    Synchronized,
    #[token("transient")]
    Transient,
    #[token("volatile")]
    Volatile,
    #[token("strictfp")]
    Strictfp,
    #[token("default")]
    Default,
    #[token("class")]
    Class,
    #[token("interface")]
    Interface,
    #[token("enum")]
    Enum,
    #[token("extends")]
    Extends,
    #[token("implements")]
    Implements,
    #[token("throws")]
    Throws,
    #[token("super")]
    Super,
    #[token("this")]
    This,
    #[token("void")]
    Void,
    #[token("boolean")]
    Boolean,
    #[token("byte")]
    Byte,
    #[token("short")]
    Short,
    #[token("int")]
    Int,
    #[token("long")]
    Long,
    #[token("char")]
    Char,
    #[token("float")]
    Float,
    #[token("double")]
    Double,

    // Operators
    #[token("=")]
    Assign,
    #[token("+=")]
    AddAssign,
    #[token("-=")]
    SubAssign,
    #[token("*=")]
    MulAssign,
    #[token("/=")]
    DivAssign,
    #[token("%=")]
    ModAssign,
    #[token("&=")]
    AndAssign,
    #[token("|=")]
    OrAssign,
    #[token("^=")]
    XorAssign,
    #[token("<<=")]
    LShiftAssign,
    #[token(">>=")]
    RShiftAssign,
    #[token(">>>=")]
    URShiftAssign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("++")]
    Inc,
    #[token("--")]
    Dec,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("<<")]
    LShift,
    #[token(">>")]
    RShift,
    #[token(">>>")]
    URShift,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    PipePipe,
    #[token("==")]
    Eq,
    #[token("!=")]
    Ne,
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token("::")]
    DoubleColon,
    #[token("->")]
    Arrow,

    // Separators
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("@")]
    At,
    #[token("...")]
    Ellipsis,

    // Literals
    #[regex(r#""([^"\\]|\\u[0-9a-fA-F]{4}|\\.)*""#)]
    StringLiteral,
    // Java 15 text block: """ ... """
    #[token(r#"""""#, lex_text_block)]
    TextBlock,
    #[regex(r"'([^'\\]|\\u[0-9a-fA-F]{4}|\\[0-7]{1,3}|\\.)'")]
    CharLiteral,
    #[regex(r"0[xX][0-9a-fA-F_]+[lL]?")]
    HexInteger,
    #[regex(r"0[bB][01_]+[lL]?")]
    BinaryInteger,
    #[regex(r"[0-9][0-9_]*[lL]?")]
    IntegerLiteral,
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?[fFdD]?|\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[fFdD]?|[0-9][0-9_]*[eE][+-]?[0-9]+[fFdD]?|[0-9][0-9_]*[fFdD]")]
    FloatLiteral,

    // Identifiers, including contextual keywords such as `record` and `var`
    #[regex(r"[\p{L}_$][\p{L}\p{N}_$]*")]
    Identifier,

    // Comments and whitespace
    #[regex(r"//[^\n]*")]
    LineComment,
    // Block/Javadoc comment (handles /**...*/, /*...*/, and multiple '*')
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", priority = 2)]
    BlockComment,
    #[regex(r"[ \t\n\r\x0C]+", priority = 2)]
    Whitespace,

    // Unicode BOM (Byte Order Mark) - treat as ignorable whitespace
    #[token("\u{FEFF}")]
    Bom,
}

/// Consume a text block body after its opening `"""`.
///
/// The block closes at the end of the first run of three or more unescaped
/// quotes; quotes in that run beyond the last three belong to the content.
fn lex_text_block(lex: &mut logos::Lexer<Token>) -> bool {
    let rest = lex.remainder().as_bytes();
    let mut i = 0;
    let mut quotes = 0;
    while i < rest.len() {
        let byte = rest[i];
        if byte == b'"' {
            quotes += 1;
            i += 1;
            continue;
        }
        if quotes >= 3 {
            break;
        }
        quotes = 0;
        // an escape covers the next byte, including a quote
        i += if byte == b'\\' { 2 } else { 1 };
    }
    if quotes < 3 {
        return false;
    }
    lex.bump(i);
    true
}

impl Token {
    /// Check if this token is a primitive type keyword (`void` excluded)
    pub fn is_primitive_type(&self) -> bool {
        matches!(self,
            Token::Boolean | Token::Byte | Token::Short |
            Token::Int | Token::Long | Token::Char |
            Token::Float | Token::Double
        )
    }

    /// Tokens the parser never sees
    pub fn is_trivia(&self) -> bool {
        matches!(self, Token::Whitespace | Token::Bom | Token::LineComment | Token::BlockComment)
    }
}

/// Lexical token with location information
#[derive(Debug, Clone)]
pub struct LexicalToken {
    pub token: Token,
    pub lexeme: String,
    pub location: Location,
}

impl LexicalToken {
    pub fn new(token: Token, lexeme: String, location: Location) -> Self {
        Self { token, lexeme, location }
    }

    /// Get the token type
    pub fn token_type(&self) -> &Token {
        &self.token
    }

    /// Get the lexeme (actual text)
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Get the location
    pub fn location(&self) -> Location {
        self.location
    }

    /// Check if this token matches the given token type
    pub fn is(&self, token_type: &Token) -> bool {
        std::mem::discriminant(&self.token) == std::mem::discriminant(token_type)
    }
}

/// Lexer for Java source
pub struct Lexer<'a> {
    lexer: logos::Lexer<'a, Token>,
    current_line: usize,
    current_column: usize,
    current_offset: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Token::lexer(source),
            current_line: 1,
            current_column: 1,
            current_offset: 0,
        }
    }

    /// Get the next token
    pub fn next_token(&mut self) -> Option<Result<LexicalToken, ParseError>> {
        let token = self.lexer.next()?;
        let location = Location::new(self.current_line, self.current_column, self.current_offset);

        match token {
            Ok(token) => {
                let lexeme = self.lexer.slice().to_string();
                self.update_position(&lexeme);
                Some(Ok(LexicalToken::new(token, lexeme, location)))
            }
            Err(_) => {
                let slice = self.lexer.slice().to_string();
                self.update_position(&slice);
                Some(Err(ParseError::lexical_error(
                    &format!("unrecognized input '{}'", slice.escape_debug()),
                    location,
                )))
            }
        }
    }

    /// Update the current position based on the lexeme
    fn update_position(&mut self, lexeme: &str) {
        let mut chars = lexeme.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\n' => {
                    self.current_line += 1;
                    self.current_column = 1;
                }
                '\r' => {
                    // a lone \r ends a line, \r\n is counted once at the \n
                    if chars.peek() != Some(&'\n') {
                        self.current_line += 1;
                        self.current_column = 1;
                    }
                }
                _ => {
                    self.current_column += 1;
                }
            }
            self.current_offset += ch.len_utf8();
        }
    }

    /// Get all significant tokens from the source
    pub fn tokenize(mut self) -> Result<Vec<LexicalToken>, ParseError> {
        let mut tokens = Vec::new();

        while let Some(result) = self.next_token() {
            let token = result?;
            if !token.token.is_trivia() {
                tokens.push(token);
            }
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        Lexer::new(source)
            .tokenize()
            .expect("Failed to tokenize")
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_lexer_keywords() {
        let source = "public class Test extends Object implements Interface";
        let tokens = Lexer::new(source).tokenize().expect("Failed to tokenize");

        assert_eq!(tokens.len(), 7);
        assert!(tokens[0].is(&Token::Public));
        assert!(tokens[1].is(&Token::Class));
        assert!(tokens[2].is(&Token::Identifier));
        assert!(tokens[3].is(&Token::Extends));
        assert!(tokens[4].is(&Token::Identifier));
        assert!(tokens[5].is(&Token::Implements));
        assert!(tokens[6].is(&Token::Identifier));
    }

    #[test]
    fn test_lexer_literals() {
        let source = r#"42 "hello" 'a' 0x1F 3.14f 10L 1e9 .5"#;
        assert_eq!(
            kinds(source),
            vec![
                Token::IntegerLiteral,
                Token::StringLiteral,
                Token::CharLiteral,
                Token::HexInteger,
                Token::FloatLiteral,
                Token::IntegerLiteral,
                Token::FloatLiteral,
                Token::FloatLiteral,
            ]
        );
    }

    #[test]
    fn test_lexer_braces_inside_literals_and_comments() {
        let source = "{ \"}\" '{' /* } */ // }\n }";
        assert_eq!(
            kinds(source),
            vec![Token::LBrace, Token::StringLiteral, Token::CharLiteral, Token::RBrace]
        );
    }

    #[test]
    fn test_lexer_text_block() {
        let source = "x = \"\"\"\n  a \"quoted\" }\n  \"\"\";";
        assert_eq!(
            kinds(source),
            vec![Token::Identifier, Token::Assign, Token::TextBlock, Token::Semicolon]
        );
    }

    #[test]
    fn test_lexer_text_block_ending_in_quote() {
        let source = "S = \"\"\"\n  say \"hi\"\"\"\"; int";
        assert_eq!(
            kinds(source),
            vec![Token::Identifier, Token::Assign, Token::TextBlock, Token::Semicolon, Token::Int]
        );
        let tokens = Lexer::new(source).tokenize().expect("Failed to tokenize");
        assert_eq!(tokens[2].lexeme(), "\"\"\"\n  say \"hi\"\"\"\"");
    }

    #[test]
    fn test_lexer_text_block_escaped_quotes_do_not_close() {
        let source = "\"\"\"\n  a \\\"\"\" b\n  \"\"\";";
        assert_eq!(kinds(source), vec![Token::TextBlock, Token::Semicolon]);
    }

    #[test]
    fn test_lexer_unterminated_text_block() {
        assert!(Lexer::new("x = \"\"\"\n  open \"\" ;").tokenize().is_err());
    }

    #[test]
    fn test_lexer_shift_tokens_for_nested_generics() {
        assert_eq!(
            kinds("Map<String, List<Integer>>"),
            vec![
                Token::Identifier,
                Token::Lt,
                Token::Identifier,
                Token::Comma,
                Token::Identifier,
                Token::Lt,
                Token::Identifier,
                Token::RShift,
            ]
        );
    }

    #[test]
    fn test_lexer_locations() {
        let tokens = Lexer::new("package a;\r\n\nclass B").tokenize().expect("Failed to tokenize");
        let class = &tokens[3];
        assert!(class.is(&Token::Class));
        assert_eq!(class.location().line, 3);
        assert_eq!(class.location().column, 1);
    }

    #[test]
    fn test_lexer_reports_unknown_character() {
        let err = Lexer::new("class A { # }").tokenize().unwrap_err();
        assert_eq!(err.location().column, 11);
    }
}
