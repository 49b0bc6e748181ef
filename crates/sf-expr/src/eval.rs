//! Recursive-descent expression evaluation.

use sf_core::{Parameters, Real};
use sf_graph::{FlowValues, Topology};

use crate::error::{ExprError, ExprResult};
use crate::token::{Token, tokenize};

/// Evaluate an arithmetic expression against the given parameters and the
/// currently-defined flow values.
///
/// `parameters.<name>` resolves through `params`; `flows.<id>` resolves
/// through `values` and fails if the flow has no value yet (constraints are
/// evaluated in order, with no dependency reordering). Division by zero
/// follows IEEE-754: the resulting infinity/NaN propagates and surfaces
/// later as a verification failure, not as an evaluation error.
pub fn evaluate_expression(
    expr: &str,
    params: &Parameters,
    topo: &Topology,
    values: &FlowValues,
) -> ExprResult<Real> {
    let tokens = tokenize(expr)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        params,
        topo,
        values,
    };
    let result = parser.expression()?;
    if parser.pos != parser.tokens.len() {
        return Err(ExprError::InvalidExpression {
            what: format!("trailing tokens after expression in '{expr}'"),
        });
    }
    Ok(result)
}

/// Grammar:
///   expression := term  (('+' | '-') term)*
///   term       := factor (('*' | '/') factor)*
///   factor     := '-' factor | primary
///   primary    := number | parameter | flow | '(' expression ')'
struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    params: &'a Parameters,
    topo: &'a Topology,
    values: &'a FlowValues,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expression(&mut self) -> ExprResult<Real> {
        let mut acc = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.advance();
                    acc += self.term()?;
                }
                Token::Minus => {
                    self.advance();
                    acc -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    fn term(&mut self) -> ExprResult<Real> {
        let mut acc = self.factor()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Mul => {
                    self.advance();
                    acc *= self.factor()?;
                }
                Token::Div => {
                    self.advance();
                    acc /= self.factor()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    fn factor(&mut self) -> ExprResult<Real> {
        if self.peek() == Some(&Token::Minus) {
            self.advance();
            return Ok(-self.factor()?);
        }
        self.primary()
    }

    fn primary(&mut self) -> ExprResult<Real> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::Parameter(name)) => {
                self.params
                    .get(&name)
                    .ok_or(ExprError::UnknownParameter { name })
            }
            Some(Token::FlowRef(name)) => {
                let id = self
                    .topo
                    .flow_by_name(&name)
                    .ok_or_else(|| ExprError::FlowNotYetDefined { name: name.clone() })?;
                self.values
                    .get(id)
                    .ok_or(ExprError::FlowNotYetDefined { name })
            }
            Some(Token::LParen) => {
                let inner = self.expression()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(ExprError::InvalidExpression {
                        what: "unbalanced parentheses".to_string(),
                    }),
                }
            }
            other => Err(ExprError::InvalidExpression {
                what: format!("expected value, found {other:?}"),
            }),
        }
    }
}
