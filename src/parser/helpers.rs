/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
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

use crate::ast::{Constant, Identifier, Operator, TypeTag};
use crate::lexer::{atoms, constants};
use crate::parser::parser::{PResult, Parser};

/// Rule name recorded when a punctuation symbol is missing.
fn describe_symbol(symbol: &str) -> &'static str {
    match symbol {
        "(" => "'('",
        ")" => "')'",
        "{" => "'{'",
        "}" => "'}'",
        "," => "','",
        ";" => "';'",
        "=" => "'='",
        "-" => "'-'",
        _ => "symbol",
    }
}

impl<'src> Parser<'src> {
    /// Records that `expected` was tried at the current position and failed.
    fn expected(&mut self, expected: &'static str) {
        self.furthest.record(self.cursor.position(), expected);
    }

    /// Consumes `len` bytes of a successful match.
    fn consume(&mut self, len: usize) {
        self.cursor.advance(len);
        self.furthest.matched = self.furthest.matched.max(self.cursor.position());
    }

    /// Matches a punctuation symbol and consumes it if present.
    ///
    /// A lone `=` never matches the first half of `==`.
    pub(crate) fn match_symbol(&mut self, symbol: &'static str) -> bool {
        self.cursor.skip_trivia();
        let rest = self.cursor.rest();

        if rest.starts_with(symbol) && !(symbol == "=" && rest.starts_with("==")) {
            self.consume(symbol.len());
            true
        } else {
            self.expected(describe_symbol(symbol));
            false
        }
    }

    /// Checks for a symbol without consuming it or recording a failure.
    pub(crate) fn check_symbol(&mut self, symbol: &str) -> bool {
        self.cursor.skip_trivia();
        self.cursor.rest().starts_with(symbol)
    }

    /// Matches a keyword as a whole word and consumes it if present.
    pub(crate) fn match_keyword(&mut self, keyword: &'static str) -> bool {
        self.cursor.skip_trivia();
        match atoms::match_keyword(self.cursor.rest(), keyword) {
            Some(len) => {
                self.consume(len);
                true
            }
            None => {
                self.expected(keyword);
                false
            }
        }
    }

    /// Consumes and returns a non-reserved identifier.
    pub(crate) fn identifier(&mut self) -> Option<Identifier> {
        self.cursor.skip_trivia();
        let rest = self.cursor.rest();

        match atoms::match_identifier(rest) {
            Some(len) => {
                self.consume(len);
                Some(Identifier::from_matched(&rest[..len]))
            }
            None => {
                self.expected("identifier");
                None
            }
        }
    }

    /// Consumes and returns a type keyword.
    pub(crate) fn type_tag(&mut self) -> Option<TypeTag> {
        self.cursor.skip_trivia();

        match atoms::match_type(self.cursor.rest()) {
            Some((tag, len)) => {
                self.consume(len);
                Some(tag)
            }
            None => {
                self.expected("type");
                None
            }
        }
    }

    /// Consumes and returns a literal constant, classified by the first
    /// matching rule of `CONSTANT_PRIORITY`.
    pub(crate) fn constant(&mut self) -> Option<Constant> {
        self.cursor.skip_trivia();
        let rest = self.cursor.rest();

        match constants::match_constant(rest) {
            Some((kind, len)) => {
                self.consume(len);
                Some(Constant::new(kind, &rest[..len]))
            }
            None => {
                self.expected("constant");
                None
            }
        }
    }

    /// Consumes and returns a binary operator.
    pub(crate) fn operator(&mut self) -> Option<Operator> {
        self.cursor.skip_trivia();

        match atoms::match_operator(self.cursor.rest()) {
            Some((operator, len)) => {
                self.consume(len);
                Some(operator)
            }
            None => {
                self.expected("operator");
                None
            }
        }
    }

    /// True when only whitespace (and comments) remain.
    pub(crate) fn at_end(&mut self) -> bool {
        self.cursor.skip_trivia();
        if self.cursor.is_at_end() {
            true
        } else {
            self.expected("end of input");
            false
        }
    }

    /// `item ("," item)*`, one or more.
    ///
    /// A trailing comma not followed by another item is left unconsumed.
    pub(crate) fn separated<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> PResult<T>,
    ) -> PResult<Vec<T>> {
        let Some(first) = item(self)? else {
            return Ok(None);
        };

        let mut items = vec![first];
        loop {
            let checkpoint = self.cursor.position();
            if !self.match_symbol(",") {
                break;
            }
            match item(self)? {
                Some(next) => items.push(next),
                None => {
                    self.cursor.reset(checkpoint);
                    break;
                }
            }
        }

        Ok(Some(items))
    }
}
