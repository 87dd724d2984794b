/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     lexer/constants.rs
 * Purpose:  Ordered, first-match-wins classification of literal constants.
 *
 * --------------------------------------------------------------------------
 *  ORDERING CONTRACT
 * --------------------------------------------------------------------------
 * `CONSTANT_PRIORITY` is tried top to bottom and the first rule that
 * matches decides the kind. More specific forms must come before the
 * generic ones they overlap with:
 *
 *   - suffixed numbers (`1l`, `1i32`, `1.0f`) before bare `1`
 *   - float `1.0f` before double `1.0`
 *   - `""`, `{}`, `[]`, `()` before the non-empty string/collection rules
 *
 * Numeric and keyword literals end on a word boundary, so `1abc` and
 * `trueish` are not constants at all.
 *
 * Composite literals keep their raw text. They are scanned with bracket
 * balancing that skips over quoted strings and chars. A tuple also needs a
 * comma at its own nesting level, otherwise `(1)` is a parenthesized group.
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

use crate::ast::ConstantKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// The order constant rules are tried in. See the ordering contract above.
pub const CONSTANT_PRIORITY: [ConstantKind; 24] = [
    ConstantKind::Hex,
    ConstantKind::Float,
    ConstantKind::Double,
    ConstantKind::Long,
    ConstantKind::Int8,
    ConstantKind::Int16,
    ConstantKind::Int32,
    ConstantKind::Int64,
    ConstantKind::UInt8,
    ConstantKind::UInt16,
    ConstantKind::UInt32,
    ConstantKind::UInt64,
    ConstantKind::Integer,
    ConstantKind::Char,
    ConstantKind::Boolean,
    ConstantKind::Null,
    ConstantKind::EmptyString,
    ConstantKind::EmptyDict,
    ConstantKind::EmptyArray,
    ConstantKind::EmptyTuple,
    ConstantKind::String,
    ConstantKind::Array,
    ConstantKind::Tuple,
    ConstantKind::Dict,
];

/// How a single rule recognises its literal.
#[derive(Debug)]
enum Matcher {
    /// Anchored regular expression.
    Pattern(Regex),

    /// Balanced `open ... close`.
    Composite {
        open: char,
        close: char,
        needs_comma: bool,
    },
}

impl Matcher {
    fn pattern(source: &str) -> Self {
        // Patterns are compile-time constants, covered by the table tests.
        Matcher::Pattern(Regex::new(source).expect("constant pattern must compile"))
    }

    fn match_len(&self, input: &str) -> Option<usize> {
        match self {
            Matcher::Pattern(regex) => regex.find(input).map(|m| m.end()),
            Matcher::Composite {
                open,
                close,
                needs_comma,
            } => scan_composite(input, *open, *close, *needs_comma),
        }
    }
}

fn matcher_for(kind: ConstantKind) -> Matcher {
    match kind {
        ConstantKind::Hex => Matcher::pattern(r"^0[xX][0-9a-fA-F]+\b"),
        ConstantKind::Float => Matcher::pattern(r"^\d+\.\d*f\b"),
        ConstantKind::Double => Matcher::pattern(r"^\d+\.\d+\b"),
        ConstantKind::Long => Matcher::pattern(r"^\d+l\b"),
        ConstantKind::Int8 => Matcher::pattern(r"^\d+i8\b"),
        ConstantKind::Int16 => Matcher::pattern(r"^\d+i16\b"),
        ConstantKind::Int32 => Matcher::pattern(r"^\d+i32\b"),
        ConstantKind::Int64 => Matcher::pattern(r"^\d+i64\b"),
        ConstantKind::UInt8 => Matcher::pattern(r"^\d+u8\b"),
        ConstantKind::UInt16 => Matcher::pattern(r"^\d+u16\b"),
        ConstantKind::UInt32 => Matcher::pattern(r"^\d+u32\b"),
        ConstantKind::UInt64 => Matcher::pattern(r"^\d+u64\b"),
        ConstantKind::Integer => Matcher::pattern(r"^\d+\b"),
        ConstantKind::Char => Matcher::pattern(r"^'[^']'"),
        ConstantKind::Boolean => Matcher::pattern(r"^(?:true|false)\b"),
        ConstantKind::Null => Matcher::pattern(r"^null\b"),
        ConstantKind::EmptyString => Matcher::pattern(r#"^"""#),
        ConstantKind::EmptyDict => Matcher::pattern(r"^\{\s*\}"),
        ConstantKind::EmptyArray => Matcher::pattern(r"^\[\s*\]"),
        ConstantKind::EmptyTuple => Matcher::pattern(r"^\(\s*\)"),
        ConstantKind::String => Matcher::pattern(r#"^"[^"]*""#),
        ConstantKind::Array => Matcher::Composite {
            open: '[',
            close: ']',
            needs_comma: false,
        },
        ConstantKind::Tuple => Matcher::Composite {
            open: '(',
            close: ')',
            needs_comma: true,
        },
        ConstantKind::Dict => Matcher::Composite {
            open: '{',
            close: '}',
            needs_comma: false,
        },
    }
}

/// `CONSTANT_PRIORITY` paired with compiled matchers, built once.
static CONSTANT_RULES: Lazy<Vec<(ConstantKind, Matcher)>> = Lazy::new(|| {
    CONSTANT_PRIORITY
        .iter()
        .map(|kind| (*kind, matcher_for(*kind)))
        .collect()
});

/// Classifies the constant at the start of `input`.
///
/// Returns the kind of the first matching rule and the length of its match.
pub fn match_constant(input: &str) -> Option<(ConstantKind, usize)> {
    CONSTANT_RULES
        .iter()
        .find_map(|(kind, matcher)| matcher.match_len(input).map(|len| (*kind, len)))
}

/// Scans a bracketed literal starting at `input[0] == open`.
///
/// Nested brackets of any kind only track depth; quoted strings and chars
/// are skipped whole. Returns the length up to and including the matching
/// `close`.
fn scan_composite(input: &str, open: char, close: char, needs_comma: bool) -> Option<usize> {
    let mut chars = input.char_indices();
    if chars.next()?.1 != open {
        return None;
    }

    let mut depth = 0usize;
    let mut top_level_comma = false;

    while let Some((i, ch)) = chars.next() {
        match ch {
            '"' | '\'' => loop {
                match chars.next() {
                    Some((_, quote)) if quote == ch => break,
                    Some(_) => {}
                    None => return None,
                }
            },
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' if depth == 0 => {
                if ch != close || (needs_comma && !top_level_comma) {
                    return None;
                }
                return Some(i + ch.len_utf8());
            }
            ')' | ']' | '}' => depth -= 1,
            ',' if depth == 0 => top_level_comma = true,
            _ => {}
        }
    }

    None
}
