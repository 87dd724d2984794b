/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     lexer/atoms.rs
 * Purpose:  Matchers for words, identifiers, type keywords and operators.
 *
 * Every matcher looks at the start of the given input only, and returns the
 * number of bytes it would consume (plus the classified value). `None`
 * means no match; nothing is consumed either way, the parser decides.
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

use crate::ast::{Operator, TypeTag};
use crate::lexer::keywords::is_reserved;

/// Operators, longest symbol first so `==` wins over any shorter prefix.
pub const OPERATORS: [(&str, Operator); 5] = [
    ("==", Operator::Equal),
    ("+", Operator::Add),
    ("-", Operator::Subtract),
    ("*", Operator::Multiply),
    ("/", Operator::Divide),
];

/// True for characters that may continue an identifier.
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Greedy `[A-Za-z_][A-Za-z0-9_]*`, returning the matched word.
pub fn match_word(input: &str) -> Option<&str> {
    let first = input.chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }

    let len = input
        .find(|ch: char| !is_word_char(ch))
        .unwrap_or(input.len());
    Some(&input[..len])
}

/// A word that is not reserved. Returns its length.
pub fn match_identifier(input: &str) -> Option<usize> {
    match_word(input)
        .filter(|word| !is_reserved(word))
        .map(str::len)
}

/// A whole word naming a type (`int8` is never `int` followed by `8`).
pub fn match_type(input: &str) -> Option<(TypeTag, usize)> {
    let word = match_word(input)?;
    TypeTag::from_keyword(word).map(|tag| (tag, word.len()))
}

/// A specific keyword as a whole word (`return` but not `returns`).
pub fn match_keyword(input: &str, keyword: &str) -> Option<usize> {
    match_word(input)
        .filter(|word| *word == keyword)
        .map(str::len)
}

/// First entry of `OPERATORS` that prefixes `input`.
pub fn match_operator(input: &str) -> Option<(Operator, usize)> {
    OPERATORS
        .iter()
        .find(|(symbol, _)| input.starts_with(symbol))
        .map(|(symbol, operator)| (*operator, symbol.len()))
}
