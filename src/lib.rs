/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root. Wires the lexer, parser, AST and diagnostics
 *           together and re-exports the public surface.
 *
 * --------------------------------------------------------------------------
 *  PIPELINE
 * --------------------------------------------------------------------------
 *
 *   source text
 *       │
 *       ▼
 *   Cursor + atoms (lexer)      whitespace, comments, literals, names
 *       │
 *       ▼
 *   Parser (parser)             ordered-choice recursive descent
 *       │
 *       ├──▶ Program (ast)      serde + Display
 *       │
 *       └──▶ ParseError         rendered by DiagnosticPrinter
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

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

pub use ast::{
    ArgumentValue, AssignmentStatement, CodeBlock, Constant, ConstantKind, Expression, Function,
    FunctionCall, FunctionCallArgument, FunctionParameter, GroupExpression, Identifier, Operand,
    Operator, Program, ReturnStatement, Statement, Term, TypeTag, UnaryExpression,
};
pub use config::ParserConfig;
pub use diagnostics::DiagnosticPrinter;
pub use error::{ConfigError, ParseError, SyntaxError};
pub use parser::{
    parse, parse_constant, parse_expression, parse_function, parse_statement, parse_type,
    parse_with_config, Parser,
};
pub use span::Span;
