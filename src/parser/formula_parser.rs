use crate::errors::{FormulaError, SyntaxError};
use crate::formulas::Formula;
use crate::parser::lexer::{tokenize, Token, TokenKind};

const EXPECTED_OPERAND: &[&str] = &["a variable", "¬", "("];
const EXPECTED_OPERATOR: &[&str] = &["∧", "∨", "→", "↔", ")"];

/// Parses `text` into a [`Formula`], lexing first.
///
/// Precedence, binding tightest to loosest: `¬` (prefix) > `∧` > `∨` > `→` >
/// `↔`. `∧` and `∨` associate to the left, `→` and `↔` to the right, and
/// parentheses override everything. A bare variable is a complete formula.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::formulas::Formula;
/// use proplogic::parser::parse;
///
/// let p = Formula::var("p");
/// let q = Formula::var("q");
/// let r = Formula::var("r");
///
/// assert_eq!(parse("p").unwrap(), p.clone());
/// assert_eq!(
///     parse("¬p ∨ q ∧ r").unwrap(),
///     Formula::or(Formula::not(p.clone()), Formula::and(q.clone(), r.clone()))
/// );
/// assert_eq!(
///     parse("p → q → r").unwrap(),
///     Formula::implication(p, Formula::implication(q, r))
/// );
/// ```
pub fn parse(text: &str) -> Result<Formula, FormulaError> {
    let tokens = tokenize(text)?;
    Ok(parse_tokens(&tokens)?)
}

/// Parses an already-lexed token sequence into a [`Formula`].
///
/// Each precedence level parses greedily and never backtracks across a
/// reduced subtree, so parsing is linear in the token count.
pub fn parse_tokens(tokens: &[Token]) -> Result<Formula, SyntaxError> {
    let mut cursor = Cursor { tokens, pos: 0 };
    if cursor.peek().is_none() {
        return Err(SyntaxError::EmptyInput);
    }
    let formula = cursor.equivalence()?;
    match cursor.peek() {
        None => Ok(formula),
        Some(token) if token.kind == TokenKind::RParen => Err(SyntaxError::UnbalancedParentheses),
        Some(token) => Err(SyntaxError::TrailingTokens { offset: token.offset }),
    }
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance_if(&mut self, kind: &TokenKind) -> bool {
        if self.peek().map(|t| &t.kind) == Some(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    // equivalence := implication ('↔' equivalence)?
    fn equivalence(&mut self) -> Result<Formula, SyntaxError> {
        let left = self.implication()?;
        if self.advance_if(&TokenKind::Iff) {
            let right = self.equivalence()?;
            Ok(Formula::equivalence(left, right))
        } else {
            Ok(left)
        }
    }

    // implication := disjunction ('→' implication)?
    fn implication(&mut self) -> Result<Formula, SyntaxError> {
        let left = self.disjunction()?;
        if self.advance_if(&TokenKind::Implies) {
            let right = self.implication()?;
            Ok(Formula::implication(left, right))
        } else {
            Ok(left)
        }
    }

    // disjunction := conjunction ('∨' conjunction)*
    fn disjunction(&mut self) -> Result<Formula, SyntaxError> {
        let mut left = self.conjunction()?;
        while self.advance_if(&TokenKind::Or) {
            let right = self.conjunction()?;
            left = Formula::or(left, right);
        }
        Ok(left)
    }

    // conjunction := negation ('∧' negation)*
    fn conjunction(&mut self) -> Result<Formula, SyntaxError> {
        let mut left = self.negation()?;
        while self.advance_if(&TokenKind::And) {
            let right = self.negation()?;
            left = Formula::and(left, right);
        }
        Ok(left)
    }

    // negation := '¬' negation | primary
    fn negation(&mut self) -> Result<Formula, SyntaxError> {
        if self.advance_if(&TokenKind::Not) {
            let operand = self.negation()?;
            Ok(Formula::not(operand))
        } else {
            self.primary()
        }
    }

    // primary := variable | '(' equivalence ')'
    fn primary(&mut self) -> Result<Formula, SyntaxError> {
        match self.peek() {
            None => Err(SyntaxError::UnexpectedToken {
                offset: self.tokens.last().map_or(0, |t| t.offset),
                found: "end of input".to_string(),
                expected: EXPECTED_OPERAND,
            }),
            Some(token) => match &token.kind {
                TokenKind::Variable(name) => {
                    let formula = Formula::var(name.clone());
                    self.pos += 1;
                    Ok(formula)
                }
                TokenKind::LParen => {
                    self.pos += 1;
                    let inner = self.equivalence()?;
                    match self.peek() {
                        None => Err(SyntaxError::UnbalancedParentheses),
                        Some(token) if token.kind == TokenKind::RParen => {
                            self.pos += 1;
                            Ok(inner)
                        }
                        Some(token) => Err(SyntaxError::UnexpectedToken {
                            offset: token.offset,
                            found: token.kind.to_string(),
                            expected: EXPECTED_OPERATOR,
                        }),
                    }
                }
                kind => Err(SyntaxError::UnexpectedToken {
                    offset: token.offset,
                    found: kind.to_string(),
                    expected: EXPECTED_OPERAND,
                }),
            },
        }
    }
}
