use std::ops::Range;

use logos::Logos;

use crate::ast::BinaryOperator;

/// Represents a raw lexical token in a qualifier expression.
///
/// Operator lexemes and parentheses are standalone tokens. Everything else is
/// split into runs of text and runs of whitespace, which [`tokenize`] folds
/// back together into trimmed operands. Longer operators win over their
/// prefixes (`===` over `==`, `<=` over `<`) because the lexer always takes
/// the longest match.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `===`
    #[token("===")]
    TripleEqual,
    /// `!==`
    #[token("!==")]
    BangEqualEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `<>`
    #[token("<>")]
    LessGreater,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A run of operand text, or a lone `=`, `!`, `&` or `|` that does not
    /// start an operator.
    #[regex(r"[^ \t\r\n\f()*/+\-=!<>&|]+")]
    #[regex(r"[=!&|]")]
    Text,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
}

impl Token {
    /// Maps an operator token to its binary operator.
    ///
    /// Returns `None` for parentheses, text and whitespace.
    #[must_use]
    pub const fn binary_operator(self) -> Option<BinaryOperator> {
        Some(match self {
            Self::Star => BinaryOperator::Mul,
            Self::Slash => BinaryOperator::Div,
            Self::Plus => BinaryOperator::Add,
            Self::Minus => BinaryOperator::Sub,
            Self::EqualEqual => BinaryOperator::Equal,
            Self::BangEqual => BinaryOperator::NotEqual,
            Self::TripleEqual => BinaryOperator::Identical,
            Self::BangEqualEqual => BinaryOperator::NotIdentical,
            Self::Less => BinaryOperator::Less,
            Self::Greater => BinaryOperator::Greater,
            Self::GreaterEqual => BinaryOperator::GreaterEqual,
            Self::LessEqual => BinaryOperator::LessEqual,
            Self::LessGreater => BinaryOperator::LessGreater,
            Self::DoubleAmpersand => BinaryOperator::And,
            Self::DoublePipe => BinaryOperator::Or,
            Self::LParen | Self::RParen | Self::Text | Self::Whitespace => return None,
        })
    }
}

/// What a [`Lexeme`] stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexemeKind {
    /// A binary operator, including `as`.
    Operator(BinaryOperator),
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// Operand text with surrounding whitespace removed.
    Operand(String),
}

/// A token of a tokenized expression together with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// What the token is.
    pub kind: LexemeKind,
    /// Byte range of the token in the source text.
    pub span: Range<usize>,
}

/// Splits an expression into operands, operators and parentheses.
///
/// Operand text between two delimiters is trimmed and kept as one token, so
/// interior whitespace survives (`hello world` stays a single operand).
/// Operands that are empty after trimming are dropped. The word `as` is the
/// alias operator only when whitespace surrounds it on both sides.
///
/// Tokenization never fails: every character of the input belongs to some
/// token.
///
/// # Example
/// ```
/// use qualex::{
///     ast::BinaryOperator,
///     interpreter::lexer::{LexemeKind, tokenize},
/// };
///
/// let kinds: Vec<_> = tokenize("$mode == dev as local").into_iter().map(|l| l.kind).collect();
/// assert_eq!(kinds,
///            vec![LexemeKind::Operand("$mode".to_string()),
///                 LexemeKind::Operator(BinaryOperator::Equal),
///                 LexemeKind::Operand("dev".to_string()),
///                 LexemeKind::Operator(BinaryOperator::As),
///                 LexemeKind::Operand("local".to_string())]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Lexeme> {
    let raw: Vec<(Option<Token>, Range<usize>)> =
        Token::lexer(source).spanned().map(|(token, span)| (token.ok(), span)).collect();

    let is_whitespace = |index: Option<usize>| {
        index.and_then(|i| raw.get(i))
             .is_some_and(|(token, _)| *token == Some(Token::Whitespace))
    };

    let mut lexemes = Vec::new();
    let mut operand: Option<Range<usize>> = None;

    for (index, (token, span)) in raw.iter().enumerate() {
        match token {
            Some(Token::Whitespace) => {},
            Some(Token::Text) | None => {
                if &source[span.clone()] == "as"
                   && is_whitespace(index.checked_sub(1))
                   && is_whitespace(Some(index + 1))
                {
                    flush_operand(source, &mut operand, &mut lexemes);
                    lexemes.push(Lexeme { kind: LexemeKind::Operator(BinaryOperator::As),
                                          span: span.clone(), });
                } else {
                    operand = Some(operand.map_or_else(|| span.clone(), |o| o.start..span.end));
                }
            },
            Some(Token::LParen) => {
                flush_operand(source, &mut operand, &mut lexemes);
                lexemes.push(Lexeme { kind: LexemeKind::OpenParen,
                                      span: span.clone(), });
            },
            Some(Token::RParen) => {
                flush_operand(source, &mut operand, &mut lexemes);
                lexemes.push(Lexeme { kind: LexemeKind::CloseParen,
                                      span: span.clone(), });
            },
            Some(token) => {
                flush_operand(source, &mut operand, &mut lexemes);
                if let Some(op) = token.binary_operator() {
                    lexemes.push(Lexeme { kind: LexemeKind::Operator(op),
                                          span: span.clone(), });
                }
            },
        }
    }
    flush_operand(source, &mut operand, &mut lexemes);

    lexemes
}

/// Emits the pending operand, if any.
///
/// The pending range always starts and ends on text, so it needs no further
/// trimming.
fn flush_operand(source: &str, operand: &mut Option<Range<usize>>, lexemes: &mut Vec<Lexeme>) {
    if let Some(span) = operand.take() {
        let text = source[span.clone()].trim();
        if !text.is_empty() {
            lexemes.push(Lexeme { kind: LexemeKind::Operand(text.to_string()),
                                  span });
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<LexemeKind> {
        tokenize(source).into_iter().map(|l| l.kind).collect()
    }

    fn operand(text: &str) -> LexemeKind {
        LexemeKind::Operand(text.to_string())
    }

    #[test]
    fn splits_section_qualifier() {
        assert_eq!(kinds("some.key == $env.mode && @isEnabled as production"),
                   vec![operand("some.key"),
                        LexemeKind::Operator(BinaryOperator::Equal),
                        operand("$env.mode"),
                        LexemeKind::Operator(BinaryOperator::And),
                        operand("@isEnabled"),
                        LexemeKind::Operator(BinaryOperator::As),
                        operand("production")]);
    }

    #[test]
    fn longer_operators_win() {
        assert_eq!(kinds("a===b!==c<=d>=e<>f"),
                   vec![operand("a"),
                        LexemeKind::Operator(BinaryOperator::Identical),
                        operand("b"),
                        LexemeKind::Operator(BinaryOperator::NotIdentical),
                        operand("c"),
                        LexemeKind::Operator(BinaryOperator::LessEqual),
                        operand("d"),
                        LexemeKind::Operator(BinaryOperator::GreaterEqual),
                        operand("e"),
                        LexemeKind::Operator(BinaryOperator::LessGreater),
                        operand("f")]);
    }

    #[test]
    fn as_needs_whitespace_on_both_sides() {
        assert_eq!(kinds("alias"), vec![operand("alias")]);
        assert_eq!(kinds("has as"), vec![operand("has as")]);
        assert_eq!(kinds("x as(y)"),
                   vec![operand("x as"),
                        LexemeKind::OpenParen,
                        operand("y"),
                        LexemeKind::CloseParen]);
    }

    #[test]
    fn parentheses_are_standalone_and_whitespace_is_dropped() {
        assert_eq!(kinds("  ( 2+3 )*4 "),
                   vec![LexemeKind::OpenParen,
                        operand("2"),
                        LexemeKind::Operator(BinaryOperator::Add),
                        operand("3"),
                        LexemeKind::CloseParen,
                        LexemeKind::Operator(BinaryOperator::Mul),
                        operand("4")]);
    }

    #[test]
    fn interior_whitespace_and_stray_symbols_stay_in_operands() {
        assert_eq!(kinds("hello  world"), vec![operand("hello  world")]);
        assert_eq!(kinds("a = b"), vec![operand("a = b")]);
        assert_eq!(kinds("!x & y"), vec![operand("!x & y")]);
    }

    #[test]
    fn spans_point_into_the_source() {
        let source = "ab + (cd)";
        let lexemes = tokenize(source);
        let spans: Vec<&str> = lexemes.iter().map(|l| &source[l.span.clone()]).collect();
        assert_eq!(spans, vec!["ab", "+", "(", "cd", ")"]);
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n").is_empty());
    }
}
