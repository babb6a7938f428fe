use crate::{
    ast::QueueEntry,
    error::{EvalResult, ParseError},
    interpreter::{
        environment::Environment,
        evaluator::{core::Limits, reduce::reduce},
        lexer::{Lexeme, LexemeKind},
        parser::queue::validate_queue,
        resolver::{is_literal, resolve_operand},
        value::core::Value,
    },
};

/// State of one evaluation pass over a token sequence.
///
/// Every parenthesis level gets its own queue through a recursive call to
/// [`Parser::parse_group`], which hands back the reduced value together with
/// the index just past the level's closing parenthesis. The caller resumes
/// from that index, so no cursor is shared between levels.
pub struct Parser<'a> {
    lexemes: &'a [Lexeme],
    env:     &'a dyn Environment,
    limits:  Limits,
    alias:   String,
}

impl<'a> Parser<'a> {
    /// Creates a pass over `lexemes`.
    ///
    /// `alias` is the alias in effect before any `as` is applied, normally
    /// the raw expression text.
    #[must_use]
    pub fn new(lexemes: &'a [Lexeme],
               env: &'a dyn Environment,
               limits: Limits,
               alias: String)
               -> Self {
        Self { lexemes,
               env,
               limits,
               alias }
    }

    /// Parses and reduces the whole token sequence.
    ///
    /// # Returns
    /// The final value and the alias as left by the last `as` applied (or the
    /// initial alias if there was none).
    ///
    /// # Errors
    /// - `ParseError` for unbalanced parentheses, misplaced operators or
    ///   operands, empty groups and nesting beyond [`Limits::max_depth`].
    /// - `RuntimeError` for failures raised while applying operators.
    pub fn parse(mut self) -> EvalResult<(Value, String)> {
        let (value, _) = self.parse_group(0, 0, None)?;
        Ok((value, self.alias))
    }

    /// Parses one parenthesis level starting at token `start`.
    ///
    /// When the outermost level is a single literal token, its text is the
    /// result, even if it looks numeric.
    ///
    /// # Parameters
    /// - `start`: Index of the first token of the level.
    /// - `depth`: Number of enclosing open parentheses.
    /// - `open`: Offset of the `(` that opened this level, `None` for the
    ///   outermost level.
    ///
    /// # Returns
    /// The reduced value of the level and the index of the first token after
    /// it.
    fn parse_group(&mut self,
                   start: usize,
                   depth: usize,
                   open: Option<usize>)
                   -> EvalResult<(Value, usize)> {
        let lexemes = self.lexemes;
        let mut queue = Vec::new();
        let mut index = start;

        while let Some(lexeme) = lexemes.get(index) {
            let position = lexeme.span.start;

            match &lexeme.kind {
                LexemeKind::OpenParen => {
                    if depth >= self.limits.max_depth {
                        return Err(ParseError::NestingTooDeep { limit: self.limits.max_depth,
                                                                position }.into());
                    }
                    let (value, next) = self.parse_group(index + 1, depth + 1, Some(position))?;
                    queue.push(QueueEntry::Operand { value,
                                                     literal: None,
                                                     position });
                    index = next;
                },
                LexemeKind::CloseParen => {
                    let Some(open) = open else {
                        return Err(ParseError::UnmatchedClosingParen { position }.into());
                    };
                    let value = self.finish(queue, open)?;
                    return Ok((value, index + 1));
                },
                LexemeKind::Operator(op) => {
                    queue.push(QueueEntry::Operator { op: *op, position });
                    index += 1;
                },
                LexemeKind::Operand(text) => {
                    let value = resolve_operand(text, self.env);
                    let literal = is_literal(text).then(|| text.clone());
                    queue.push(QueueEntry::Operand { value,
                                                     literal,
                                                     position });
                    index += 1;
                },
            }
        }

        if let Some(position) = open {
            return Err(ParseError::UnclosedParen { position }.into());
        }

        // A whole expression made of one literal is returned as written.
        if let [QueueEntry::Operand { literal: Some(text), .. }] = queue.as_slice() {
            return Ok((Value::from(text.as_str()), index));
        }

        let value = self.finish(queue, 0)?;
        Ok((value, index))
    }

    /// Validates and reduces a completed queue.
    fn finish(&mut self, queue: Vec<QueueEntry>, position: usize) -> EvalResult<Value> {
        validate_queue(&queue, position)?;
        reduce(queue, &mut self.alias)
    }
}
