/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     parser/functions.rs
 * Purpose:  Function declarations and the program root.
 *
 *   program   → function*
 *   function  → type ( "," type )* identifier
 *                 "(" ( parameter ( "," parameter )* )? ")"
 *                 "{" code_block "}"
 *   parameter → type identifier
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

use crate::ast::{Function, FunctionParameter, Program};
use crate::parser::parser::{PResult, Parser};

impl<'src> Parser<'src> {
    /// program → function*
    ///
    /// Always matches; whatever follows the last function is checked by the
    /// caller against end of input.
    pub(crate) fn program(&mut self) -> PResult<Program> {
        let mut functions = Vec::new();

        while let Some(function) = self.function()? {
            functions.push(function);
        }

        Ok(Some(Program { functions }))
    }

    /// Parses one function declaration.
    pub(crate) fn function(&mut self) -> PResult<Function> {
        self.attempt(|p| {
            let Some(function_returns) = p.separated(|p| Ok(p.type_tag()))? else {
                return Ok(None);
            };
            let Some(function_name) = p.identifier() else {
                return Ok(None);
            };

            if !p.match_symbol("(") {
                return Ok(None);
            }
            let function_params = p
                .separated(Self::function_parameter)?
                .unwrap_or_default();
            if !p.match_symbol(")") {
                return Ok(None);
            }

            if !p.match_symbol("{") {
                return Ok(None);
            }
            let function_code = p.code_block()?;
            if !p.match_symbol("}") {
                return Ok(None);
            }

            Ok(Some(Function {
                function_returns,
                function_name,
                function_params,
                function_code,
            }))
        })
    }

    /// parameter → type identifier
    fn function_parameter(&mut self) -> PResult<FunctionParameter> {
        self.attempt(|p| {
            let Some(parameter_type) = p.type_tag() else {
                return Ok(None);
            };
            let Some(parameter_name) = p.identifier() else {
                return Ok(None);
            };

            Ok(Some(FunctionParameter {
                parameter_type,
                parameter_name,
            }))
        })
    }
}
