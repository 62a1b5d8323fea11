use crate::{
    ast::Type,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::core::ParseResult,
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by array literals, call arguments and parameter
/// lists. The opening token has already been consumed. It repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or a token other than
/// `,` or `closing` follows an item.
pub(in crate::interpreter::parser) fn parse_comma_separated<'src, T>(
    lexer: &mut Lexer<'src>,
    parse_item: impl Fn(&mut Lexer<'src>) -> ParseResult<T>,
    closing: &Token<'_>)
    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if lexer.check(closing) {
        lexer.advance()?;
        return Ok(items);
    }
    loop {
        items.push(parse_item(lexer)?);
        if lexer.check(&Token::Comma) {
            lexer.advance()?;
        } else if lexer.check(closing) {
            lexer.advance()?;
            break;
        } else {
            return Err(lexer.unexpected(&format!("',' or {closing}")));
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// Keywords and type names never lex as identifiers, so nothing reserved can
/// come back from here.
pub(in crate::interpreter::parser) fn parse_name(lexer: &mut Lexer<'_>) -> ParseResult<String> {
    if let Some(Token::Identifier(name)) = lexer.token {
        lexer.advance()?;
        return Ok(name.to_string());
    }
    Err(ParseError::ExpectedName { found: lexer.describe(),
                                   line:  lexer.line, })
}

/// Consumes a type keyword if one is current.
pub(in crate::interpreter::parser) fn parse_type(lexer: &mut Lexer<'_>) -> ParseResult<Option<Type>> {
    if let Some(Token::TypeName(ty)) = lexer.token {
        lexer.advance()?;
        return Ok(Some(ty));
    }
    Ok(None)
}

/// Like [`parse_type`] but requires the type to be present.
///
/// `position` names the slot for the error message, e.g. `parameter`.
pub(in crate::interpreter::parser) fn expect_type(lexer: &mut Lexer<'_>,
                                                  position: &'static str)
                                                  -> ParseResult<Type> {
    parse_type(lexer)?.ok_or_else(|| ParseError::ExpectedType { position,
                                                               found: lexer.describe(),
                                                               line: lexer.line })
}
