use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Lexer, Token},
        parser::{core::ParseResult, unary::parse_postfix},
    },
};

/// Parses logical expressions.
///
/// `&&` and `||` share one precedence level and chain left to right, so
/// `a || b && c` parses as `(a || b) && c`.
///
/// Grammar: `logical := comparison (("||" | "&&") comparison)*`
pub fn parse_logical(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_comparison(lexer)?;
    loop {
        if let Some(op) = peek_operator(lexer)
           && is_logical_op(op)
        {
            let line = lexer.line;
            lexer.advance()?;
            let right = parse_comparison(lexer)?;
            left = binary(left, op, right, line);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses a comparison.
///
/// Comparisons do not chain: at most one comparison operator is consumed, and
/// a second one is left for the caller, which rejects it.
///
/// Grammar: `comparison := additive (("==" | "!=" | "<" | "<=" | ">" | ">=")
/// additive)?`
pub fn parse_comparison(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let left = parse_additive(lexer)?;
    if let Some(op) = peek_operator(lexer)
       && is_relational_op(op)
    {
        let line = lexer.line;
        lexer.advance()?;
        let right = parse_additive(lexer)?;
        return Ok(binary(left, op, right, line));
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(lexer)?;
    loop {
        if let Some(op) = peek_operator(lexer)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = lexer.line;
            lexer.advance()?;
            let right = parse_multiplicative(lexer)?;
            left = binary(left, op, right, line);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, `%` and `//`.
///
/// Grammar: `multiplicative := postfix (("*" | "/" | "%" | "//") postfix)*`
pub fn parse_multiplicative(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_postfix(lexer)?;
    loop {
        if let Some(op) = peek_operator(lexer)
           && matches!(op,
                       BinaryOperator::Mul
                       | BinaryOperator::Div
                       | BinaryOperator::Mod
                       | BinaryOperator::IntDiv)
        {
            let line = lexer.line;
            lexer.advance()?;
            let right = parse_postfix(lexer)?;
            left = binary(left, op, right, line);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use ciktor::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::SlashSlash),
///            Some(BinaryOperator::IntDiv));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token<'_>) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::SlashSlash => Some(BinaryOperator::IntDiv),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::AndAnd => Some(BinaryOperator::And),
        Token::PipePipe => Some(BinaryOperator::Or),
        Token::Dot => Some(BinaryOperator::Index),
        _ => None,
    }
}

/// Determines whether a binary operator is a comparison.
///
/// # Example
/// ```
/// use ciktor::{ast::BinaryOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(BinaryOperator::LessEqual));
/// assert!(!is_relational_op(BinaryOperator::And));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::Greater
             | BinaryOperator::LessEqual
             | BinaryOperator::GreaterEqual
             | BinaryOperator::Equal
             | BinaryOperator::NotEqual)
}

/// Returns `true` for `&&` and `||`.
#[must_use]
pub const fn is_logical_op(op: BinaryOperator) -> bool {
    matches!(op, BinaryOperator::And | BinaryOperator::Or)
}

fn peek_operator(lexer: &Lexer<'_>) -> Option<BinaryOperator> {
    lexer.token.as_ref().and_then(token_to_binary_operator)
}

pub(in crate::interpreter::parser) fn binary(left: Expr,
                                             op: BinaryOperator,
                                             right: Expr,
                                             line: usize)
                                             -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line }
}
