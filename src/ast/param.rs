/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     ast/param.rs
 * Purpose:  Defines the AST structure for function parameters
 *
 * Every parameter carries exactly one type keyword followed by its name:
 *
 *   int32 x
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

use crate::ast::types::TypeTag;
use crate::ast::Identifier;
use serde::{Deserialize, Serialize};

/// Represents **one declared parameter** in a function signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionParameter {
    /// Declared type keyword
    pub parameter_type: TypeTag,

    /// Parameter name (identifier)
    pub parameter_name: Identifier,
}

impl FunctionParameter {
    pub fn new(parameter_type: TypeTag, parameter_name: Identifier) -> Self {
        Self {
            parameter_type,
            parameter_name,
        }
    }
}
