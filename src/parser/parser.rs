/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver functions that turn Clarity source text into an AST.
 *
 * The grammar itself is split across multiple modules:
 * - `functions.rs`    → Program and function declarations
 * - `statements.rs`   → Code blocks, assignments, returns
 * - `expressions.rs`  → Terms, operator chains, groups, calls
 * - `helpers.rs`      → Atom consumption and failure bookkeeping
 *
 * --------------------------------------------------------------------------
 *  BACKTRACKING MODEL
 * --------------------------------------------------------------------------
 * Every grammar rule returns `PResult<T>`:
 *
 *   Ok(Some(node))  → matched, cursor moved past it
 *   Ok(None)        → no match, cursor restored
 *   Err(err)        → fatal, abandon the whole parse
 *
 * Alternatives are tried in a fixed order and the first match is kept.
 * Each failed atom records what was expected at its offset; only the
 * furthest offset is remembered, and that is what a failed parse reports.
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the Clarity parser project.
 *
 * Clarity is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::collections::BTreeSet;

use crate::ast::{Constant, Expression, Function, Program, Statement, TypeTag};
use crate::config::ParserConfig;
use crate::error::{ParseError, SyntaxError};
use crate::lexer::Cursor;
use crate::span::Span;

/// Result of a single grammar rule. See the backtracking model above.
pub(crate) type PResult<T> = Result<Option<T>, ParseError>;

/// The furthest failure seen so far.
#[derive(Debug, Default)]
pub(crate) struct Furthest {
    /// Offset of the furthest failed atom
    pub offset: usize,

    /// Everything that failed at `offset`
    pub expected: BTreeSet<&'static str>,

    /// Furthest offset any atom was consumed up to
    pub matched: usize,
}

impl Furthest {
    pub(crate) fn record(&mut self, offset: usize, expected: &'static str) {
        if offset > self.offset {
            self.offset = offset;
            self.expected.clear();
        }
        if offset == self.offset {
            self.expected.insert(expected);
        }
    }
}

/// The Clarity recursive-descent parser.
///
/// This structure maintains:
/// - The cursor into the source text (the only mutable parse state)
/// - The current nesting depth, checked against `ParserConfig::max_depth`
/// - The furthest failure, for diagnostics
///
/// A `Parser` is single-use: each `parse_*` method consumes it.
pub struct Parser<'src> {
    pub(crate) cursor: Cursor<'src>,
    pub(crate) config: ParserConfig,
    pub(crate) depth: usize,
    pub(crate) furthest: Furthest,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, config: &ParserConfig) -> Self {
        Self {
            cursor: Cursor::new(source, config.line_comments),
            config: *config,
            depth: 0,
            furthest: Furthest::default(),
        }
    }

    /// Parses the whole input as a program.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        self.complete(Self::program)
    }

    /// Parses the whole input as exactly one function declaration.
    pub fn parse_function(mut self) -> Result<Function, ParseError> {
        self.complete(Self::function)
    }

    /// Parses the whole input as exactly one statement.
    pub fn parse_statement(mut self) -> Result<Statement, ParseError> {
        self.complete(Self::statement)
    }

    /// Parses the whole input as exactly one expression.
    pub fn parse_expression(mut self) -> Result<Expression, ParseError> {
        self.complete(Self::expression)
    }

    /// Parses the whole input as exactly one literal constant.
    pub fn parse_constant(mut self) -> Result<Constant, ParseError> {
        self.complete(|p| Ok(p.constant()))
    }

    /// Parses the whole input as exactly one type keyword.
    pub fn parse_type(mut self) -> Result<TypeTag, ParseError> {
        self.complete(|p| Ok(p.type_tag()))
    }

    /// Runs `rule` and requires it to consume the entire input.
    fn complete<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> Result<T, ParseError> {
        if let Some(value) = rule(self)? {
            if self.at_end() {
                return Ok(value);
            }
        }

        Err(self.syntax_error().into())
    }

    /// Builds the diagnostic for the furthest failure.
    pub(crate) fn syntax_error(&self) -> SyntaxError {
        let source = self.cursor.source();
        let offset = self.furthest.offset;

        SyntaxError {
            span: Span::locate(source, offset),
            expected: self.furthest.expected.iter().copied().collect(),
            found: source[offset..].chars().next(),
            matched: self.furthest.matched,
        }
    }

    /// Runs `rule`, restoring the cursor if it does not match.
    pub(crate) fn attempt<T>(&mut self, rule: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        let start = self.cursor.position();
        let result = rule(self)?;
        if result.is_none() {
            self.cursor.reset(start);
        }
        Ok(result)
    }

    /// Runs `rule` one nesting level deeper.
    ///
    /// # Errors
    /// `ParseError::DepthExceeded` once `max_depth` levels are open.
    pub(crate) fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.depth >= self.config.max_depth {
            self.cursor.skip_trivia();
            return Err(ParseError::DepthExceeded {
                limit: self.config.max_depth,
                span: Span::locate(self.cursor.source(), self.cursor.position()),
            });
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}

/// Public entry point for parsing a Clarity program.
///
/// # Clarity Pipeline
/// ```text
/// Source → Parser (atoms on demand) → Program
/// ```
///
/// # Example
/// ```text
/// let program = parse("int32, float foo(int32 x, float y) { }")?;
/// assert_eq!(program.functions[0].function_name, "foo");
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    parse_with_config(source, &ParserConfig::default())
}

/// Same as [`parse`], with explicit configuration.
pub fn parse_with_config(source: &str, config: &ParserConfig) -> Result<Program, ParseError> {
    Parser::new(source, config).parse_program()
}

/// Parses `source` as a single function declaration.
pub fn parse_function(source: &str) -> Result<Function, ParseError> {
    Parser::new(source, &ParserConfig::default()).parse_function()
}

/// Parses `source` as a single assignment or return statement.
pub fn parse_statement(source: &str) -> Result<Statement, ParseError> {
    Parser::new(source, &ParserConfig::default()).parse_statement()
}

/// Parses `source` as a single expression.
pub fn parse_expression(source: &str) -> Result<Expression, ParseError> {
    Parser::new(source, &ParserConfig::default()).parse_expression()
}

/// Parses `source` as a single literal constant.
pub fn parse_constant(source: &str) -> Result<Constant, ParseError> {
    Parser::new(source, &ParserConfig::default()).parse_constant()
}

/// Parses `source` as a single type keyword.
pub fn parse_type(source: &str) -> Result<TypeTag, ParseError> {
    Parser::new(source, &ParserConfig::default()).parse_type()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn furthest_keeps_only_deepest_offset() {
        let mut furthest = Furthest::default();
        furthest.record(3, "identifier");
        furthest.record(1, "type");
        furthest.record(3, "constant");
        assert_eq!(furthest.offset, 3);
        assert_eq!(furthest.expected.iter().copied().collect::<Vec<_>>(), ["constant", "identifier"]);

        furthest.record(7, "';'");
        assert_eq!(furthest.expected.len(), 1);
    }

    #[test]
    fn attempt_restores_cursor_on_no_match() {
        let mut parser = Parser::new("abc def", &ParserConfig::default());
        let result: PResult<()> = parser.attempt(|p| {
            p.cursor.advance(3);
            Ok(None)
        });
        assert_eq!(result, Ok(None));
        assert_eq!(parser.cursor.position(), 0);
    }

    #[test]
    fn nested_fails_past_limit() {
        let config = ParserConfig::default().with_max_depth(1);
        let mut parser = Parser::new("x", &config);
        let result: PResult<()> = parser.nested(|p| p.nested(|_| Ok(Some(()))));
        assert!(matches!(result, Err(ParseError::DepthExceeded { limit: 1, .. })));
    }

    #[test]
    fn empty_input_is_empty_program() {
        assert_eq!(parse("").unwrap(), Program::default());
        assert_eq!(parse("  \n // nothing here\n").unwrap(), Program::default());
    }
}
