use crate::{
    ast::{Expr, FunctionDef, Param, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_type, parse_comma_separated, parse_name, parse_type},
        },
    },
};

/// Parses a single statement together with its terminator.
///
/// A statement may be one of:
/// - an `if` statement,
/// - a function definition,
/// - a `for` loop,
/// - `print(...)`, `throw(...)` or `return`,
/// - a typed variable declaration,
/// - an assignment or an expression used as a statement.
///
/// The construct is chosen by its first token. Every statement must be
/// followed by `;`, a newline, a closing `}` or the end of input, except
/// that the terminator after a block-bodied `if`, `for` or `func` is
/// optional.
pub fn parse_statement(lexer: &mut Lexer<'_>) -> ParseResult<Statement> {
    let statement = parse_unterminated(lexer)?;
    let ends_with_block =
        matches!(statement, Statement::If { .. } | Statement::For { .. } | Statement::Function(_));
    if !ends_with_block || at_terminator(lexer) {
        lexer.expect_semi()?;
    }
    Ok(statement)
}

fn at_terminator(lexer: &Lexer<'_>) -> bool {
    matches!(lexer.token, Some(Token::Semicolon | Token::NewLine))
}

/// Parses a statement without consuming a terminator.
fn parse_unterminated(lexer: &mut Lexer<'_>) -> ParseResult<Statement> {
    match lexer.token {
        Some(Token::If) => parse_if(lexer),
        Some(Token::Func) => parse_function_definition(lexer),
        Some(Token::For) => parse_for(lexer),
        Some(Token::Print) => parse_print(lexer),
        Some(Token::Throw) => parse_throw(lexer),
        Some(Token::Return) => parse_return(lexer),
        Some(Token::TypeName(_)) => parse_variable_declaration(lexer),
        _ => parse_expression_or_assignment(lexer),
    }
}

/// Parses `if cond { ... }` with an optional `else { ... }` or `else if ...`.
///
/// `else` must directly follow the closing brace of the then-branch, on the
/// same line. An `else if` becomes an else branch holding the nested `If`.
fn parse_if(lexer: &mut Lexer<'_>) -> ParseResult<Statement> {
    let line = lexer.line;
    lexer.expect(&Token::If)?;
    let condition = parse_expression(lexer)?;
    let then_branch = parse_block(lexer)?;

    let mut else_branch = Vec::new();
    if lexer.check(&Token::Else) {
        lexer.advance()?;
        if lexer.check(&Token::If) {
            else_branch.push(parse_if(lexer)?);
        } else {
            else_branch = parse_block(lexer)?;
        }
    }

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       line })
}

/// Parses a function definition.
///
/// Grammar: `func NAME "<" (type NAME ("," type NAME)*)? ">" type block`
fn parse_function_definition(lexer: &mut Lexer<'_>) -> ParseResult<Statement> {
    let line = lexer.line;
    lexer.expect(&Token::Func)?;
    let name = parse_name(lexer)?;

    lexer.expect(&Token::Less)?;
    let params = parse_comma_separated(lexer, parse_param, &Token::Greater)?;
    let return_type = expect_type(lexer, "return")?;
    let body = parse_block(lexer)?;

    Ok(Statement::Function(FunctionDef { name,
                                         params,
                                         return_type,
                                         body,
                                         line }))
}

fn parse_param(lexer: &mut Lexer<'_>) -> ParseResult<Param> {
    let ty = expect_type(lexer, "parameter")?;
    let name = parse_name(lexer)?;
    Ok(Param { ty, name })
}

/// Parses `for init cond { ... }`.
///
/// The init statement may be terminated by `;` or a newline, but does not
/// have to be: `for double i = 0 i < 3 { ... }` is accepted.
fn parse_for(lexer: &mut Lexer<'_>) -> ParseResult<Statement> {
    let line = lexer.line;
    lexer.expect(&Token::For)?;

    let init = parse_unterminated(lexer)?;
    if at_terminator(lexer) {
        lexer.expect_semi()?;
    }

    let condition = parse_expression(lexer)?;
    let body = parse_block(lexer)?;

    Ok(Statement::For { init: Box::new(init),
                        condition,
                        body,
                        line })
}

/// Parses `print()` or `print(expr)`.
fn parse_print(lexer: &mut Lexer<'_>) -> ParseResult<Statement> {
    let line = lexer.line;
    lexer.expect(&Token::Print)?;
    lexer.expect(&Token::LParen)?;
    let value = if lexer.check(&Token::RParen) {
        None
    } else {
        Some(parse_expression(lexer)?)
    };
    lexer.expect(&Token::RParen)?;
    Ok(Statement::Print { value, line })
}

/// Parses `throw(expr)`. The argument is required.
fn parse_throw(lexer: &mut Lexer<'_>) -> ParseResult<Statement> {
    let line = lexer.line;
    lexer.expect(&Token::Throw)?;
    lexer.expect(&Token::LParen)?;
    let value = parse_expression(lexer)?;
    lexer.expect(&Token::RParen)?;
    Ok(Statement::Throw { value, line })
}

/// Parses `return` with an optional value.
///
/// The value is omitted when a terminator directly follows the keyword.
fn parse_return(lexer: &mut Lexer<'_>) -> ParseResult<Statement> {
    let line = lexer.line;
    lexer.expect(&Token::Return)?;
    let value = match lexer.token {
        Some(Token::Semicolon | Token::NewLine | Token::RBrace) | None => None,
        Some(_) => Some(parse_expression(lexer)?),
    };
    Ok(Statement::Return { value, line })
}

/// Parses a variable declaration of the form `type NAME = expr`.
fn parse_variable_declaration(lexer: &mut Lexer<'_>) -> ParseResult<Statement> {
    let line = lexer.line;
    let Some(ty) = parse_type(lexer)? else {
        return Err(lexer.unexpected("a type"));
    };
    let name = parse_name(lexer)?;
    lexer.expect(&Token::Equals)?;
    let value = parse_expression(lexer)?;
    Ok(Statement::VariableDeclaration { name, ty, value, line })
}

/// Parses an expression statement, or an assignment if the expression is
/// followed by `=`.
///
/// Only a plain variable may stand on the left of `=`.
fn parse_expression_or_assignment(lexer: &mut Lexer<'_>) -> ParseResult<Statement> {
    let line = lexer.line;
    let expr = parse_expression(lexer)?;

    if !lexer.check(&Token::Equals) {
        return Ok(Statement::Expression { expr, line });
    }

    let Expr::Variable { name, .. } = expr else {
        return Err(ParseError::InvalidAssignmentTarget { line: lexer.line });
    };
    lexer.advance()?;
    let value = parse_expression(lexer)?;
    Ok(Statement::Assignment { name, value, line })
}
