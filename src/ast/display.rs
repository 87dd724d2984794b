/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     ast/display.rs
 * Purpose:  Canonical source rendering for every AST node.
 *
 * The text produced here parses back to an identical tree:
 *
 *   parse(&program.to_string()) == Ok(program)
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

use crate::ast::{
    ArgumentValue, AssignmentStatement, CodeBlock, Constant, Expression, Function, FunctionCall,
    FunctionCallArgument, FunctionParameter, GroupExpression, Identifier, Operand, Operator,
    Program, ReturnStatement, Statement, Term, TypeTag, UnaryExpression,
};
use std::fmt;

/// Indentation for statements inside a function body.
const INDENT: &str = "    ";

/// Writes `items` separated by `", "`.
fn comma_separated<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

// ------------------------
// Atoms
// ------------------------

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ------------------------
// Expressions
// ------------------------

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (operator, term) in &self.rest {
            write!(f, " {} {}", operator, term)?;
        }
        Ok(())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Unary(unary) => write!(f, "{}", unary),
            Term::Group(group) => write!(f, "{}", group),
        }
    }
}

impl fmt::Display for UnaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("-")?;
        }
        write!(f, "{}", self.operand)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Constant(constant) => write!(f, "{}", constant),
            Operand::Identifier(name) => write!(f, "{}", name),
            Operand::Call(call) => write!(f, "{}", call),
        }
    }
}

impl fmt::Display for GroupExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.expression)
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function_name)?;
        comma_separated(f, &self.arguments)?;
        f.write_str(")")
    }
}

impl fmt::Display for FunctionCallArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionCallArgument::Named {
                argument_name,
                argument_value,
            } => write!(f, "{} = {}", argument_name, argument_value),
            FunctionCallArgument::Positional(value) => write!(f, "{}", value),
        }
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentValue::Constant(constant) => write!(f, "{}", constant),
            ArgumentValue::Identifier(name) => write!(f, "{}", name),
        }
    }
}

// ------------------------
// Statements
// ------------------------

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assignment(assignment) => write!(f, "{}", assignment),
            Statement::Return(ret) => write!(f, "{}", ret),
        }
    }
}

impl fmt::Display for AssignmentStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {};", self.variable_name, self.variable_expression)
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("return ")?;
        comma_separated(f, &self.expressions)?;
        f.write_str(";")
    }
}

impl fmt::Display for CodeBlock {
    /// One statement per line, each indented one level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{}{}", INDENT, statement)?;
        }
        Ok(())
    }
}

// ------------------------
// Declarations
// ------------------------

impl fmt::Display for FunctionParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.parameter_type, self.parameter_name)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        comma_separated(f, &self.function_returns)?;
        write!(f, " {}(", self.function_name)?;
        comma_separated(f, &self.function_params)?;
        writeln!(f, ") {{")?;
        write!(f, "{}", self.function_code)?;
        f.write_str("}")
    }
}

impl fmt::Display for Program {
    /// Functions separated by a blank line, with a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, function) in self.functions.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            writeln!(f, "{}", function)?;
        }
        Ok(())
    }
}
