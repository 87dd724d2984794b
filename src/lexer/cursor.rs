/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     lexer/cursor.rs
 * Purpose:  The single mutable position a parse owns.
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

/// A byte position into a borrowed source text.
///
/// The cursor only ever moves forward through `advance` and backward through
/// `reset`, which is how the parser backtracks out of a failed alternative.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
    line_comments: bool,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of `source`.
    ///
    /// When `line_comments` is set, `//` up to the end of the line counts
    /// as whitespace.
    pub fn new(source: &'src str, line_comments: bool) -> Self {
        Self {
            source,
            pos: 0,
            line_comments,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves back to a previously saved offset.
    pub fn reset(&mut self, pos: usize) {
        debug_assert!(pos <= self.source.len());
        self.pos = pos;
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Consumes `len` bytes. `len` must land on a char boundary.
    pub fn advance(&mut self, len: usize) {
        self.pos += len;
        debug_assert!(self.source.is_char_boundary(self.pos));
    }

    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Skips whitespace and, if enabled, `//` line comments.
    pub fn skip_trivia(&mut self) {
        loop {
            let rest = self.rest();
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();

            if self.line_comments && trimmed.starts_with("//") {
                let line_len = trimmed.find('\n').unwrap_or(trimmed.len());
                self.pos += line_len;
                continue;
            }

            break;
        }
    }
}
