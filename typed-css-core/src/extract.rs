//! Class-name extraction from CSS-module build output.
//!
//! The build step emits a small CommonJS module:
//!
//! ```text
//! // Generated by the CSS-module build step
//! module.exports = {
//!     "container": "_container_x7f2a",
//!     "is-active": "_is-active_x7f2a"
//! };
//! module.exports.checksum = "1f2e3d";
//! ```
//!
//! The source is tokenized, then the object literal assigned to
//! `module.exports` is walked entry by entry. Only keys are read; values are
//! skipped up to the next top-level `,` or `}`. Assignments to properties of
//! `module.exports` (the checksum) never match the block.

use std::ops::Range;

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Token {
    #[token("module.exports")]
    ModuleExports,

    #[token("=")]
    Assign,

    #[regex(r"===?")]
    Comparison,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    #[regex(r"'(?:[^'\\]|\\.)*'")]
    StringLiteral,

    #[regex(r"`(?:[^`\\]|\\.)*`")]
    TemplateLiteral,

    #[regex(r"(?:[a-zA-Z_$]|[^\x00-\x7F])(?:[a-zA-Z0-9_$]|[^\x00-\x7F])*")]
    Ident,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/")]
    BlockComment,

    /// Anything the lexer does not recognize (numbers, operators, stray quotes).
    Unknown,
}

impl Token {
    fn is_trivia(self) -> bool {
        matches!(self, Token::LineComment | Token::BlockComment)
    }
}

/// Tokenizes source, dropping comments and mapping lexer errors to `Unknown`.
fn lex(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(Token::Unknown);
        if !kind.is_trivia() {
            tokens.push((kind, lexer.span()));
        }
    }

    tokens
}

/// Extract the class-name keys from raw build output, in source order.
///
/// Returns `None` when there is no `module.exports = { ... }` block, when the
/// block has no entries, or when it is malformed (unterminated, or an entry
/// without a `:`). Duplicate keys are kept.
///
/// ```
/// use typed_css_core::extract;
///
/// let raw = r#"module.exports = { "b": "_b_1", "a": "_a_1" };"#;
/// assert_eq!(extract(raw), Some(vec!["b".to_string(), "a".to_string()]));
/// assert_eq!(extract("module.exports = {};"), None);
/// ```
pub fn extract(raw: &str) -> Option<Vec<String>> {
    let tokens = lex(raw);
    let mut search_from = 0;

    while let Some(offset) = tokens[search_from..]
        .iter()
        .position(|(kind, _)| *kind == Token::ModuleExports)
    {
        let after = search_from + offset + 1;
        let mut parser = Parser::new(raw, &tokens, after);

        if parser.eat(Token::Assign) && parser.eat(Token::LBrace) {
            let keys = parser.entries()?;
            return if keys.is_empty() { None } else { Some(keys) };
        }

        search_from = after;
    }

    None
}

/// Cursor over the token stream of one export block.
struct Parser<'a> {
    src: &'a str,
    tokens: &'a [(Token, Range<usize>)],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str, tokens: &'a [(Token, Range<usize>)], pos: usize) -> Self {
        Self { src, tokens, pos }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|(kind, _)| *kind)
    }

    fn eat(&mut self, kind: Token) -> bool {
        if self.peek() == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Read entries up to and including the closing brace.
    fn entries(&mut self) -> Option<Vec<String>> {
        let mut keys = Vec::new();

        loop {
            match self.peek()? {
                Token::RBrace => {
                    self.pos += 1;
                    return Some(keys);
                }
                Token::Comma => self.pos += 1,
                _ => {
                    let key = self.key()?;
                    if !self.eat(Token::Colon) {
                        return None;
                    }
                    self.skip_value()?;
                    keys.push(key);
                }
            }
        }
    }

    fn key(&mut self) -> Option<String> {
        let (kind, span) = self.tokens.get(self.pos)?;
        let key = match kind {
            // Strip the surrounding quotes
            Token::StringLiteral => &self.src[span.start + 1..span.end - 1],
            Token::Ident => &self.src[span.clone()],
            _ => return None,
        };
        self.pos += 1;
        Some(key.to_string())
    }

    /// Skip a value up to the next top-level `,` or `}` (left unconsumed).
    fn skip_value(&mut self) -> Option<()> {
        let mut depth = 0usize;

        loop {
            match self.peek()? {
                Token::Comma | Token::RBrace if depth == 0 => return Some(()),
                Token::LParen | Token::LBracket | Token::LBrace => depth += 1,
                Token::RParen | Token::RBracket | Token::RBrace => {
                    depth = depth.checked_sub(1)?
                }
                _ => {}
            }
            self.pos += 1;
        }
    }
}
