use std::fmt;

use logos::Logos;

use crate::{ast::Type, error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Identifiers borrow from the source buffer; string literals are owned.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\f\r]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token<'src> {
    /// Numeric literal tokens: a plain digit sequence such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// String literal tokens, `"..."`, without escape processing.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// Type names used in declarations. `int` is an alias of `double`.
    #[token("void", |_| Type::Void)]
    #[token("bool", |_| Type::Bool)]
    #[token("int", |_| Type::Double)]
    #[token("double", |_| Type::Double)]
    #[token("string", |_| Type::String)]
    #[token("array", |_| Type::Array)]
    TypeName(Type),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `func`
    #[token("func")]
    Func,
    /// `for`
    #[token("for")]
    For,
    /// `print`
    #[token("print")]
    Print,
    /// `throw`
    #[token("throw")]
    Throw,
    /// `return`
    #[token("return")]
    Return,
    /// `input`
    #[token("input")]
    Input,
    /// `exit`
    #[token("exit")]
    Exit,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice())]
    Identifier(&'src str),
    /// `->`
    #[token("->")]
    Arrow,
    /// `//`
    #[token("//")]
    SlashSlash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    PipePipe,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `!`
    #[token("!")]
    Bang,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `.`
    #[token(".")]
    Dot,
    /// `?`
    #[token("?")]
    Question,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// Newlines are significant: they can terminate statements.
    #[token("\n", |lex| lex.extras.line += 1)]
    NewLine,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Number(n) => return write!(f, "number {n}"),
            Self::Str(s) => return write!(f, "string \"{s}\""),
            Self::Bool(b) => return write!(f, "'{b}'"),
            Self::TypeName(ty) => return write!(f, "type '{ty}'"),
            Self::Identifier(name) => return write!(f, "identifier '{name}'"),
            Self::NewLine => return write!(f, "a newline"),
            Self::If => "if",
            Self::Else => "else",
            Self::Func => "func",
            Self::For => "for",
            Self::Print => "print",
            Self::Throw => "throw",
            Self::Return => "return",
            Self::Input => "input",
            Self::Exit => "exit",
            Self::Arrow => "->",
            Self::SlashSlash => "//",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::AndAnd => "&&",
            Self::PipePipe => "||",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equals => "=",
            Self::Bang => "!",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Dot => ".",
            Self::Question => "?",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
        };
        write!(f, "'{symbol}'")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized, starting at 1.
    pub line: usize,
}

/// Parses a number literal from the current token slice.
fn parse_number<'src>(lex: &mut logos::Lexer<'src, Token<'src>>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the quotes from a string literal and counts the newlines inside it.
fn parse_string<'src>(lex: &mut logos::Lexer<'src, Token<'src>>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();
    slice[1..slice.len() - 1].to_string()
}

/// A pull-based token stream with a single token of lookahead.
///
/// The lexer always holds the current token (`None` once the input is
/// exhausted) together with the line it starts on. Lexical errors surface
/// when the offending token is pulled.
pub struct Lexer<'src> {
    inner:     logos::Lexer<'src, Token<'src>>,
    /// The current token, or `None` at the end of input.
    pub token: Option<Token<'src>>,
    /// The line of the current token.
    pub line:  usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the first token of `source`.
    ///
    /// # Example
    /// ```
    /// use ciktor::interpreter::lexer::{Lexer, Token};
    ///
    /// let lexer = Lexer::new("\nprint").unwrap();
    /// assert_eq!(lexer.token, Some(Token::NewLine));
    /// assert_eq!(lexer.line, 1);
    /// ```
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut lexer = Self { inner: Token::lexer_with_extras(source, LexerExtras { line: 1 }),
                               token: None,
                               line:  1, };
        lexer.advance()?;
        Ok(lexer)
    }

    /// Moves to the next token and returns the one that was current.
    pub fn advance(&mut self) -> ParseResult<Option<Token<'src>>> {
        // Skipped whitespace and comments never contain a newline, so the
        // counter already points at the line of the next token.
        self.line = self.inner.extras.line;
        let next = match self.inner.next() {
            Some(Ok(token)) => Some(token),
            Some(Err(())) => return Err(self.lex_error()),
            None => None,
        };
        Ok(std::mem::replace(&mut self.token, next))
    }

    /// Returns `true` if the current token equals `expected`.
    #[must_use]
    pub fn check(&self, expected: &Token<'_>) -> bool {
        self.token.as_ref() == Some(expected)
    }

    /// Consumes `expected` or fails with an `UnexpectedToken` error.
    pub fn expect(&mut self, expected: &Token<'_>) -> ParseResult<()> {
        if !self.check(expected) {
            return Err(self.unexpected(&expected.to_string()));
        }
        self.advance()?;
        Ok(())
    }

    /// Consumes a statement terminator.
    ///
    /// A terminator is a `;` or a newline. All newlines following it are
    /// consumed as well. The end of input and a closing `}` also end a
    /// statement; the brace is left for the enclosing block.
    pub fn expect_semi(&mut self) -> ParseResult<()> {
        match self.token {
            Some(Token::Semicolon | Token::NewLine) => {
                self.advance()?;
                self.skip_newlines()
            },
            Some(Token::RBrace) | None => Ok(()),
            Some(_) => Err(ParseError::ExpectedTerminator { found: self.describe(),
                                                            line:  self.line, }),
        }
    }

    /// Skips any number of newline tokens.
    pub fn skip_newlines(&mut self) -> ParseResult<()> {
        while self.check(&Token::NewLine) {
            self.advance()?;
        }
        Ok(())
    }

    /// Describes the current token for diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        self.token
            .as_ref()
            .map_or_else(|| "end of input".to_string(), ToString::to_string)
    }

    /// Builds an `UnexpectedToken` error for the current token.
    #[must_use]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken { expected: expected.to_string(),
                                      found:    self.describe(),
                                      line:     self.line, }
    }

    fn lex_error(&self) -> ParseError {
        let slice = self.inner.slice();
        if slice.starts_with('"') {
            ParseError::UnterminatedString { line: self.line }
        } else {
            ParseError::UnexpectedCharacter { found: slice.to_string(),
                                              line:  self.line, }
        }
    }
}

/// Tokenizes a whole source string.
///
/// Returns every token paired with its line. Used for debugging output; the
/// parser pulls tokens one at a time instead.
///
/// # Example
/// ```
/// use ciktor::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x == 1").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x"), 1),
///                 (Token::EqualEqual, 1),
///                 (Token::Number(1.0), 1)]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token<'_>, usize)>> {
    let mut lexer = Lexer::new(source)?;
    let mut tokens = Vec::new();
    loop {
        let line = lexer.line;
        match lexer.advance()? {
            Some(token) => tokens.push((token, line)),
            None => break,
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token<'_>> {
        tokenize(source).unwrap()
                        .into_iter()
                        .map(|(token, _)| token)
                        .collect()
    }

    #[test]
    fn numbers_are_base_ten() {
        assert_eq!(kinds("0 7 42 1234567890"),
                   vec![Token::Number(0.0),
                        Token::Number(7.0),
                        Token::Number(42.0),
                        Token::Number(1_234_567_890.0)]);
    }

    #[test]
    fn strings_are_verbatim() {
        assert_eq!(kinds(r#""a \n b" "#), vec![Token::Str(r"a \n b".to_string())]);
        assert_eq!(kinds(r#""""#), vec![Token::Str(String::new())]);
    }

    #[test]
    fn two_character_operators_win() {
        assert_eq!(kinds("== = -> - // / <= < >= > != ! && & || |"),
                   vec![Token::EqualEqual,
                        Token::Equals,
                        Token::Arrow,
                        Token::Minus,
                        Token::SlashSlash,
                        Token::Slash,
                        Token::LessEqual,
                        Token::Less,
                        Token::GreaterEqual,
                        Token::Greater,
                        Token::BangEqual,
                        Token::Bang,
                        Token::AndAnd,
                        Token::Ampersand,
                        Token::PipePipe,
                        Token::Pipe]);
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(kinds("func funcs int x_1 true"),
                   vec![Token::Func,
                        Token::Identifier("funcs"),
                        Token::TypeName(Type::Double),
                        Token::Identifier("x_1"),
                        Token::Bool(true)]);
    }

    #[test]
    fn comments_are_skipped_but_newlines_kept() {
        assert_eq!(kinds("a # comment ! \" \nb"),
                   vec![Token::Identifier("a"), Token::NewLine, Token::Identifier("b")]);
    }

    #[test]
    fn lines_are_tracked() {
        let tokens = tokenize("a\n\"x\ny\" b\nc").unwrap();
        let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();
        assert_eq!(lines, vec![1, 1, 2, 3, 3, 4]);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert_eq!(tokenize("\n\"abc"),
                   Err(ParseError::UnterminatedString { line: 2 }));
    }

    #[test]
    fn unknown_character_is_an_error() {
        assert!(matches!(tokenize("a @ b"),
                         Err(ParseError::UnexpectedCharacter { line: 1, .. })));
    }

    #[test]
    fn identifiers_cannot_start_with_underscore() {
        assert!(tokenize("_x").is_err());
    }
}
