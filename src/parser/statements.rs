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

use crate::ast::{AssignmentStatement, CodeBlock, ReturnStatement, Statement};
use crate::error::ParseError;
use crate::lexer::keywords::RETURN;
use crate::parser::parser::{PResult, Parser};

impl<'src> Parser<'src> {
    /// code_block → ( assignment | return )*
    ///
    /// Stops at the first position where neither statement matches, which
    /// in a well-formed function is the closing `}`.
    pub(crate) fn code_block(&mut self) -> Result<CodeBlock, ParseError> {
        let mut statements = Vec::new();

        while let Some(statement) = self.statement()? {
            statements.push(statement);
        }

        Ok(CodeBlock { statements })
    }

    /// Parses a single statement, trying assignment before return.
    pub(crate) fn statement(&mut self) -> PResult<Statement> {
        if let Some(assignment) = self.assignment_statement()? {
            return Ok(Some(Statement::Assignment(assignment)));
        }

        Ok(self.return_statement()?.map(Statement::Return))
    }

    /// assignment → identifier "=" expression ";"
    fn assignment_statement(&mut self) -> PResult<AssignmentStatement> {
        self.attempt(|p| {
            let Some(variable_name) = p.identifier() else {
                return Ok(None);
            };
            if !p.match_symbol("=") {
                return Ok(None);
            }
            let Some(variable_expression) = p.expression()? else {
                return Ok(None);
            };
            if !p.match_symbol(";") {
                return Ok(None);
            }

            Ok(Some(AssignmentStatement {
                variable_name,
                variable_expression,
            }))
        })
    }

    /// return → "return" expression ( "," expression )* ";"
    fn return_statement(&mut self) -> PResult<ReturnStatement> {
        self.attempt(|p| {
            if !p.match_keyword(RETURN) {
                return Ok(None);
            }
            let Some(expressions) = p.separated(Self::expression)? else {
                return Ok(None);
            };
            if !p.match_symbol(";") {
                return Ok(None);
            }

            Ok(Some(ReturnStatement { expressions }))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parser::parse_statement;

    #[test]
    fn return_with_several_values() {
        let statement = parse_statement("return a, b + 1, f(x = y);").unwrap();
        let Statement::Return(ret) = statement else {
            panic!("expected return");
        };
        assert_eq!(ret.expressions.len(), 3);
        assert_eq!(ret.expressions[1].len(), 2);
    }

    #[test]
    fn return_needs_a_value() {
        assert!(parse_statement("return;").is_err());
    }

    #[test]
    fn assignment_needs_semicolon() {
        let err = parse_statement("x = 1").unwrap_err();
        let crate::ParseError::Syntax(err) = err else {
            panic!("expected syntax error");
        };
        assert!(err.expected.contains(&"';'"));
        assert_eq!(err.found, None);
    }

    #[test]
    fn equality_is_not_assignment() {
        assert!(parse_statement("x == 1;").is_err());
    }

    #[test]
    fn return_is_not_an_assignment_target() {
        assert!(parse_statement("return = 1;").is_err());
    }
}
