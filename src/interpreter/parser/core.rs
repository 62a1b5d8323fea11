use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        parser::{binary::parse_logical, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the logical operators, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := logical`
pub fn parse_expression(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    parse_logical(lexer)
}

/// Parses a whole program into its list of top-level statements.
///
/// Blank lines between top-level statements are skipped. Parsing stops at
/// the end of input or at the first error.
///
/// # Example
/// ```
/// use ciktor::interpreter::{lexer::Lexer, parser::core::parse_program};
///
/// let mut lexer = Lexer::new("\n\nprint(1)\n\nprint(2);").unwrap();
/// let program = parse_program(&mut lexer).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(lexer: &mut Lexer<'_>) -> ParseResult<Vec<Statement>> {
    let mut statements = Vec::new();

    lexer.skip_newlines()?;
    while lexer.token.is_some() {
        statements.push(parse_statement(lexer)?);
        lexer.skip_newlines()?;
    }

    Ok(statements)
}
