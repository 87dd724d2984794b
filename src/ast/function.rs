/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     ast/function.rs
 * Purpose:  Function declarations and the program root.
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

use crate::ast::param::FunctionParameter;
use crate::ast::stmt::CodeBlock;
use crate::ast::types::TypeTag;
use crate::ast::Identifier;
use serde::{Deserialize, Serialize};

/// A function declaration.
///
/// ```text
/// int32, float foo(int32 x, float y) {
///     x = -x + 2;
///     return x, y;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// Declared return types, in order. Never empty.
    pub function_returns: Vec<TypeTag>,

    pub function_name: Identifier,

    pub function_params: Vec<FunctionParameter>,

    pub function_code: CodeBlock,
}

/// The root of every parse: the functions of one source text, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Program {
    pub functions: Vec<Function>,
}

impl Program {
    /// Looks up the first function declared under `name`.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions
            .iter()
            .find(|function| function.function_name.as_str() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Function> {
        self.functions.iter()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Pretty-printed JSON rendering of the whole tree.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Function;
    type IntoIter = std::slice::Iter<'a, Function>;

    fn into_iter(self) -> Self::IntoIter {
        self.functions.iter()
    }
}
