/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the Clarity recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Function and program parsing
 *   - Statement parsing
 *   - Expression parsing
 *   - Shared helper utilities
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Backtracking, depth guard and furthest-failure tracking
/// - Exposes the `parse*` entry points
pub mod parser;

/// Program and function declarations
pub mod functions;

/// Code blocks, assignments and returns
pub mod statements;

/// Terms, operator chains, groups and calls
pub mod expressions;

/// Shared parser helpers:
/// - atom matching and consumption
/// - symbol and keyword matching
/// - comma-separated lists
pub mod helpers;

/// Re-export the public parse entry points so callers can use:
/// `crate::parser::parse(...)`
pub use parser::{
    parse, parse_constant, parse_expression, parse_function, parse_statement, parse_type,
    parse_with_config, Parser,
};
