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

use crate::error::ParseError;
use crate::span::Span;
use std::fmt::Write;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for Clarity parse errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is modelled on `rustc` diagnostics, kept readable without
/// color.
pub struct DiagnosticPrinter {
    /// Full source text that was parsed.
    source: String,

    /// Name shown in the `-->` location line (e.g. `main.clar`).
    file_name: String,
}

impl DiagnosticPrinter {
    /// Creates a new diagnostic printer for a given source text.
    ///
    /// Both parameters accept any type convertible into `String`
    /// for ergonomic call-sites.
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders an error diagnostic into a string.
    ///
    /// # Output Example
    /// ```text
    /// error[E_SYNTAX]: expected identifier, found ')'
    ///   --> main.clar:1:9
    ///    |
    ///  1 | foo(x = ) ;
    ///    |         ^
    /// ```
    pub fn render(&self, error: &ParseError) -> String {
        let Span { line, column, .. } = error.span();

        // Lines are 1-indexed in diagnostics, but iterators are 0-indexed.
        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code(),
            error.message(),
            self.file_name,
            line,
            column + 1
        );

        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>2} | {}", line, src_line);

        // Caret under the exact column, keeping tabs so it lines up.
        let underline: String = src_line
            .chars()
            .take(column)
            .map(|ch| if ch == '\t' { '\t' } else { ' ' })
            .collect();
        let _ = writeln!(out, "   | {}^", underline);

        if let Some(help) = error.help() {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print(&self, error: &ParseError) {
        eprint!("{}", self.render(error));
    }
}
