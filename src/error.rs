/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     error.rs
 * Purpose:  Error types surfaced by the parser and its configuration.
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

use crate::span::Span;
use thiserror::Error;

/// The furthest point a failed parse reached, and what the grammar would
/// have accepted there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "syntax error at {span}: expected {}, found {}",
    expected_list(.expected),
    found_text(.found)
)]
pub struct SyntaxError {
    /// Location of the furthest failure
    pub span: Span,

    /// Rule names attempted at `span`, sorted and deduplicated
    pub expected: Vec<&'static str>,

    /// Character found at `span`, `None` at end of input
    pub found: Option<char>,

    /// Byte length of the longest prefix any rule consumed
    pub matched: usize,
}

impl SyntaxError {
    /// Message without the location prefix, for diagnostics that print the
    /// location on their own line.
    pub fn message(&self) -> String {
        format!(
            "expected {}, found {}",
            expected_list(&self.expected),
            found_text(&self.found)
        )
    }
}

/// Every way a parse can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No grammar alternative matched.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Groups or expressions nested deeper than `ParserConfig::max_depth`.
    #[error("nesting depth exceeded the limit of {limit} at {span}")]
    DepthExceeded { limit: usize, span: Span },
}

impl ParseError {
    /// Stable error code (`E_SYNTAX`, `E_DEPTH`)
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Syntax(_) => "E_SYNTAX",
            ParseError::DepthExceeded { .. } => "E_DEPTH",
        }
    }

    /// Primary source location
    pub fn span(&self) -> Span {
        match self {
            ParseError::Syntax(err) => err.span,
            ParseError::DepthExceeded { span, .. } => *span,
        }
    }

    /// Human-readable message without the location prefix
    pub fn message(&self) -> String {
        match self {
            ParseError::Syntax(err) => err.message(),
            ParseError::DepthExceeded { limit, .. } => {
                format!("nesting depth exceeded the limit of {}", limit)
            }
        }
    }

    /// Optional note / help text
    pub fn help(&self) -> Option<String> {
        match self {
            ParseError::Syntax(err) if err.found.is_none() => {
                Some("the input ended before the declaration was complete".to_string())
            }
            ParseError::Syntax(_) => None,
            ParseError::DepthExceeded { .. } => Some(
                "raise `max_depth` in the parser configuration or flatten the nested groups"
                    .to_string(),
            ),
        }
    }
}

/// Failures while loading a `ParserConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parser configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("max_depth must be at least 1")]
    ZeroDepth,
}

fn expected_list(expected: &[&'static str]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}

fn found_text(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!("{:?}", ch),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax(expected: Vec<&'static str>, found: Option<char>) -> SyntaxError {
        SyntaxError {
            span: Span {
                offset: 8,
                line: 1,
                column: 8,
            },
            expected,
            found,
            matched: 6,
        }
    }

    #[test]
    fn joins_expectations() {
        let err = syntax(vec!["'('", "constant", "identifier"], Some(';'));
        assert_eq!(err.message(), "expected '(', constant or identifier, found ';'");
    }

    #[test]
    fn reports_end_of_input() {
        let err = ParseError::from(syntax(vec!["'}'"], None));
        assert_eq!(err.code(), "E_SYNTAX");
        assert_eq!(err.to_string(), "syntax error at 1:9: expected '}', found end of input");
        assert!(err.help().is_some());
    }

    #[test]
    fn depth_error_has_code_and_help() {
        let err = ParseError::DepthExceeded {
            limit: 4,
            span: Span::default(),
        };
        assert_eq!(err.code(), "E_DEPTH");
        assert_eq!(err.message(), "nesting depth exceeded the limit of 4");
        assert!(err.help().unwrap().contains("max_depth"));
    }
}
