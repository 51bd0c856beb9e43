use std::fmt;

use crate::errors::LexError;

/// The kind of a lexed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A variable name, `[A-Za-z][A-Za-z0-9]*`.
    Variable(String),
    /// `¬`, `!` or `~`.
    Not,
    /// `∧` or `&`.
    And,
    /// `∨` or `|`.
    Or,
    /// `→`, `->` or `>`.
    Implies,
    /// `↔`, `<->` or `=`.
    Iff,
    /// `(`.
    LParen,
    /// `)`.
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Variable(name) => f.write_str(name),
            TokenKind::Not => f.write_str("¬"),
            TokenKind::And => f.write_str("∧"),
            TokenKind::Or => f.write_str("∨"),
            TokenKind::Implies => f.write_str("→"),
            TokenKind::Iff => f.write_str("↔"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
        }
    }
}

/// A token together with the byte offset of its first character in the
/// source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was lexed.
    pub kind: TokenKind,
    /// Byte offset into the source text, for error reporting.
    pub offset: usize,
}

/// Splits `text` into tokens, left to right, skipping whitespace.
///
/// Both the Unicode connectives `¬ ∧ ∨ → ↔` and the ASCII spellings the
/// front end may send (`! ~ & | > = -> <->`) are accepted; the printer
/// always re-emits the Unicode forms.
///
/// # Example
///
/// Basic usage:
///
/// ```
/// use proplogic::parser::{tokenize, TokenKind};
///
/// let tokens = tokenize("¬p ∧ q").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Not, TokenKind::Variable("p".into()), TokenKind::And, TokenKind::Variable("q".into())]
/// );
///
/// assert!(tokenize("p ? q").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(offset, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }
        let kind = match ch {
            '¬' | '!' | '~' => {
                chars.next();
                TokenKind::Not
            }
            '∧' | '&' => {
                chars.next();
                TokenKind::And
            }
            '∨' | '|' => {
                chars.next();
                TokenKind::Or
            }
            '→' | '>' => {
                chars.next();
                TokenKind::Implies
            }
            '↔' | '=' => {
                chars.next();
                TokenKind::Iff
            }
            '-' => {
                chars.next();
                match chars.peek() {
                    Some(&(_, '>')) => {
                        chars.next();
                        TokenKind::Implies
                    }
                    _ => return Err(LexError { offset, ch }),
                }
            }
            '<' => {
                chars.next();
                match (chars.next(), chars.peek()) {
                    (Some((_, '-')), Some(&(_, '>'))) => {
                        chars.next();
                        TokenKind::Iff
                    }
                    _ => return Err(LexError { offset, ch }),
                }
            }
            '(' => {
                chars.next();
                TokenKind::LParen
            }
            ')' => {
                chars.next();
                TokenKind::RParen
            }
            c if c.is_ascii_alphabetic() => {
                let mut name = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                TokenKind::Variable(name)
            }
            _ => return Err(LexError { offset, ch }),
        };
        tokens.push(Token { kind, offset });
    }

    Ok(tokens)
}
