mod formula_parser;
mod lexer;


pub use formula_parser::{parse, parse_tokens};
pub use lexer::{tokenize, Token, TokenKind};
