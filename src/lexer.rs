/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     lexer.rs
 * Purpose:  Lexical atoms, matched directly against the source text.
 *
 * There is no separate token stream: the parser asks for one atom at a time
 * at its cursor and backtracks freely, so every matcher here is pure and
 * consumes nothing on its own.
 *
 *   - `cursor`     → position, whitespace and comment skipping
 *   - `keywords`   → reserved words
 *   - `atoms`      → words, identifiers, type keywords, operators
 *   - `constants`  → ordered literal classification table
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

pub mod atoms;
pub mod constants;
pub mod cursor;
pub mod keywords;

pub use constants::{match_constant, CONSTANT_PRIORITY};
pub use cursor::Cursor;
pub use keywords::is_reserved;
