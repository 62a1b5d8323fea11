use crate::{
    ast::{BinaryOperator, Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            binary::binary,
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses the postfix size query.
///
/// A single `?` may follow an index chain and yields the length of the string
/// or array on its left.
///
/// Grammar: `postfix := index "?"?`
pub(crate) fn parse_postfix(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let expr = parse_index(lexer)?;
    if lexer.check(&Token::Question) {
        let line = lexer.line;
        lexer.advance()?;
        return Ok(Expr::Size { expr: Box::new(expr),
                               line });
    }
    Ok(expr)
}

/// Parses index chains with `.`.
///
/// Indexing is left-associative, so `a.0.1` is `(a.0).1`. The index itself is
/// a unary expression; use parentheses for anything larger: `a.(i + 1)`.
///
/// Grammar: `index := unary ("." unary)*`
fn parse_index(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_unary(lexer)?;
    while lexer.check(&Token::Dot) {
        let line = lexer.line;
        lexer.advance()?;
        let right = parse_unary(lexer)?;
        left = binary(left, BinaryOperator::Index, right, line);
    }
    Ok(left)
}

/// Parses a unary expression.
///
/// Only the logical not is a prefix operator. It is right-associative, so
/// `!!x` is `!(!x)`. There is no unary minus.
///
/// Grammar: `unary := "!" unary | primary`
pub(crate) fn parse_unary(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    if lexer.check(&Token::Bang) {
        let line = lexer.line;
        lexer.advance()?;
        let expr = parse_unary(lexer)?;
        return Ok(Expr::Not { expr: Box::new(expr),
                              line });
    }
    parse_primary(lexer)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - number, string and boolean literals
/// - array literals (`[ ... ]`)
/// - parenthesized expressions
/// - `input()` and `exit()`
/// - function calls and variable references
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | "[" elements "]"
///              | "(" expression ")"
///              | "input" "(" ")"
///              | "exit" "(" ")"
///              | identifier ("(" arguments ")")?
/// ```
pub(crate) fn parse_primary(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let line = lexer.line;
    let literal = match &lexer.token {
        Some(Token::Number(n)) => LiteralValue::Number(*n),
        Some(Token::Str(s)) => LiteralValue::Str(s.clone()),
        Some(Token::Bool(b)) => LiteralValue::Bool(*b),
        Some(Token::LBracket) => return parse_array_literal(lexer),
        Some(Token::LParen) => return parse_grouping(lexer),
        Some(Token::Input) => {
            parse_empty_call(lexer)?;
            return Ok(Expr::Input { line });
        },
        Some(Token::Exit) => {
            parse_empty_call(lexer)?;
            return Ok(Expr::Exit { line });
        },
        Some(Token::Identifier(name)) => {
            let name = (*name).to_string();
            lexer.advance()?;
            return parse_identifier_or_call(lexer, name, line);
        },
        _ => {
            return Err(ParseError::ExpectedExpression { found: lexer.describe(),
                                                        line });
        },
    };
    lexer.advance()?;
    Ok(Expr::Literal { value: literal,
                       line })
}

/// Parses an array literal of the form `[ expr1, expr2, ..., exprN ]`.
///
/// An empty array `[]` is accepted.
fn parse_array_literal(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let line = lexer.line;
    lexer.expect(&Token::LBracket)?;
    let elements = parse_comma_separated(lexer, parse_expression, &Token::RBracket)?;
    Ok(Expr::ArrayLiteral { elements, line })
}

/// Parses a parenthesized expression. The parentheses leave no trace in the
/// tree.
fn parse_grouping(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    lexer.expect(&Token::LParen)?;
    let expr = parse_expression(lexer)?;
    lexer.expect(&Token::RParen)?;
    Ok(expr)
}

/// Consumes a keyword followed by `()`.
fn parse_empty_call(lexer: &mut Lexer<'_>) -> ParseResult<()> {
    lexer.advance()?;
    lexer.expect(&Token::LParen)?;
    lexer.expect(&Token::RParen)
}

/// Parses either a function call `name(args)` or a variable reference. The
/// name has already been consumed.
fn parse_identifier_or_call(lexer: &mut Lexer<'_>, name: String, line: usize) -> ParseResult<Expr> {
    if lexer.check(&Token::LParen) {
        lexer.advance()?;
        let arguments = parse_comma_separated(lexer, parse_expression, &Token::RParen)?;
        return Ok(Expr::FunctionCall { name,
                                       arguments,
                                       line });
    }

    Ok(Expr::Variable { name, line })
}
