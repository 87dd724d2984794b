/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     ast/stmt.rs
 * Purpose:  Statement nodes and function bodies.
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

use crate::ast::expr::Expression;
use crate::ast::Identifier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    // x = expr;
    Assignment(AssignmentStatement),

    // return a, b;
    Return(ReturnStatement),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentStatement {
    pub variable_name: Identifier,
    pub variable_expression: Expression,
}

/// `return` with one or more values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnStatement {
    /// Never empty.
    pub expressions: Vec<Expression>,
}

/// The statements between a function's braces.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodeBlock {
    pub statements: Vec<Statement>,
}

impl CodeBlock {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a CodeBlock {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
