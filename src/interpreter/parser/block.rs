use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses a block of statements delimited by braces.
///
/// A block consists of zero or more statements. Leading newlines inside the
/// block are ignored; each statement swallows the newlines after its own
/// terminator. Parsing continues until the closing `}` is consumed.
///
/// Grammar: `block := "{" statement* "}"`
pub fn parse_block(lexer: &mut Lexer<'_>) -> ParseResult<Vec<Statement>> {
    lexer.expect(&Token::LBrace)?;
    lexer.skip_newlines()?;

    let mut statements = Vec::new();
    while !lexer.check(&Token::RBrace) {
        if lexer.token.is_none() {
            return Err(lexer.unexpected("'}'"));
        }
        statements.push(parse_statement(lexer)?);
    }
    lexer.advance()?;

    Ok(statements)
}
