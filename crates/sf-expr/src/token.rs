//! Tokenizer for constraint expressions.

use std::iter::Peekable;
use std::str::Chars;

use sf_core::Real;

use crate::error::{ExprError, ExprResult};

/// Tokens of the expression language.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Plus,
    Minus,
    Mul,
    Div,
    LParen,
    RParen,
    Number(Real),
    /// `parameters.<name>`
    Parameter(String),
    /// `flows.<id>`
    FlowRef(String),
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn invalid(what: impl Into<String>) -> ExprError {
    ExprError::InvalidExpression { what: what.into() }
}

/// Tokenize an expression string.
///
/// References are two identifier segments joined by a dot, where the first
/// segment must be `parameters` or `flows`; anything else is rejected here
/// rather than at parse time.
pub(crate) fn tokenize(input: &str) -> ExprResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' | '\r' | '\n' => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Mul);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Div);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '0'..='9' | '.' => {
                tokens.push(lex_number(&mut chars)?);
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                tokens.push(lex_reference(&mut chars)?);
            }
            other => {
                return Err(invalid(format!("unexpected character '{other}'")));
            }
        }
    }

    Ok(tokens)
}

fn lex_number(chars: &mut Peekable<Chars<'_>>) -> ExprResult<Token> {
    let mut text = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            text.push(c);
            chars.next();
        } else {
            break;
        }
    }
    text.parse::<Real>()
        .map(Token::Number)
        .map_err(|_| invalid(format!("malformed number '{text}'")))
}

fn lex_reference(chars: &mut Peekable<Chars<'_>>) -> ExprResult<Token> {
    let namespace = lex_ident(chars);
    if chars.peek() != Some(&'.') {
        return Err(invalid(format!(
            "bare identifier '{namespace}' (expected 'parameters.<name>' or 'flows.<id>')"
        )));
    }
    chars.next(); // consume '.'

    let name = lex_ident(chars);
    if name.is_empty() {
        return Err(invalid(format!("missing identifier after '{namespace}.'")));
    }

    match namespace.as_str() {
        "parameters" => Ok(Token::Parameter(name)),
        "flows" => Ok(Token::FlowRef(name)),
        other => Err(invalid(format!(
            "unknown reference namespace '{other}' (expected 'parameters' or 'flows')"
        ))),
    }
}

fn lex_ident(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut text = String::new();
    while let Some(&c) = chars.peek() {
        if is_ident_char(c) {
            text.push(c);
            chars.next();
        } else {
            break;
        }
    }
    text
}
