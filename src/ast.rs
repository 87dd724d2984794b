/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     ast.rs
 * Purpose:  Root of the abstract syntax tree.
 *
 * Every node owns its children exclusively; nothing is shared and nothing
 * is mutated once the parser has built it.
 *
 *   Program
 *     └─ Function (returns, name, params, code)
 *          └─ Statement (Assignment | Return)
 *               └─ Expression (Term (Operator Term)*)
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

pub mod constant;
pub mod expr;
pub mod function;
pub mod param;
pub mod stmt;
pub mod types;

mod display;

pub use constant::{Constant, ConstantKind};
pub use expr::{
    ArgumentValue, Element, Expression, FunctionCall, FunctionCallArgument, GroupExpression,
    Operand, Operator, Term, UnaryExpression,
};
pub use function::{Function, Program};
pub use param::FunctionParameter;
pub use stmt::{AssignmentStatement, CodeBlock, ReturnStatement, Statement};
pub use types::TypeTag;

use crate::lexer::atoms;
use serde::{Deserialize, Serialize};

/// A variable, function, parameter or argument name.
///
/// Always matches `[A-Za-z_][A-Za-z0-9_]*` and is never a reserved word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Validates `name` the same way the parser does.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        match atoms::match_identifier(&name) {
            Some(len) if len == name.len() => Some(Identifier(name)),
            _ => None,
        }
    }

    /// Wraps a name the lexer has already matched.
    pub(crate) fn from_matched(name: &str) -> Self {
        Identifier(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Identifier::new(name.clone()).ok_or_else(|| format!("`{}` is not a valid identifier", name))
    }
}

impl From<Identifier> for String {
    fn from(name: Identifier) -> Self {
        name.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
