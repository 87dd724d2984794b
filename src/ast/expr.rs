/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     ast/expr.rs
 * Purpose:  Expression nodes: terms, operators, groups and calls.
 *
 * Expressions are kept as the flat, left-to-right sequence the source
 * wrote them in:
 *
 *   Term (Operator Term)*
 *
 * No precedence or associativity is resolved at this layer.
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

use crate::ast::constant::Constant;
use crate::ast::Identifier;
use serde::{Deserialize, Serialize};

/// A binary operator between two terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "==")]
    Equal,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Equal => "==",
        }
    }
}

/// A non-empty, flat operator chain.
///
/// `first` is always present; `rest` holds each following
/// `(operator, term)` pair in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub first: Term,
    pub rest: Vec<(Operator, Term)>,
}

/// One position in the flattened `Term, Operator, Term, ...` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    Term(&'a Term),
    Operator(Operator),
}

impl Expression {
    /// A single-term expression.
    pub fn single(term: Term) -> Self {
        Self {
            first: term,
            rest: Vec::new(),
        }
    }

    /// Appends `operator term` to the chain (builder-style).
    pub fn then(mut self, operator: Operator, term: Term) -> Self {
        self.rest.push((operator, term));
        self
    }

    /// All terms in order.
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        std::iter::once(&self.first).chain(self.rest.iter().map(|(_, term)| term))
    }

    /// All operators in order.
    pub fn operators(&self) -> impl Iterator<Item = Operator> + '_ {
        self.rest.iter().map(|(operator, _)| *operator)
    }

    /// The alternating sequence exactly as written.
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> {
        std::iter::once(Element::Term(&self.first)).chain(
            self.rest
                .iter()
                .flat_map(|(operator, term)| [Element::Operator(*operator), Element::Term(term)]),
        )
    }

    /// Number of terms (always at least one).
    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Always false; present so `len` has its usual companion.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// The atomic unit of an expression before operator combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    Unary(UnaryExpression),
    Group(GroupExpression),
}

impl Term {
    /// Shorthand for a non-negated constant term.
    pub fn constant(constant: Constant) -> Self {
        Term::Unary(UnaryExpression::new(Operand::Constant(constant)))
    }

    /// Shorthand for a non-negated identifier term.
    pub fn identifier(name: Identifier) -> Self {
        Term::Unary(UnaryExpression::new(Operand::Identifier(name)))
    }

    /// Shorthand for a parenthesized sub-expression.
    pub fn group(expression: Expression) -> Self {
        Term::Group(GroupExpression {
            expression: Box::new(expression),
        })
    }
}

/// `-`? followed by a constant, identifier or call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnaryExpression {
    pub negated: bool,
    pub operand: Operand,
}

impl UnaryExpression {
    pub fn new(operand: Operand) -> Self {
        Self {
            negated: false,
            operand,
        }
    }

    pub fn negated(operand: Operand) -> Self {
        Self {
            negated: true,
            operand,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    Constant(Constant),
    Identifier(Identifier),
    Call(FunctionCall),
}

/// `( expression )`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupExpression {
    pub expression: Box<Expression>,
}

/// `name(arguments...)`
///
/// Arguments keep source order and may repeat names; binding them to
/// parameters is left to later stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub function_name: Identifier,
    pub arguments: Vec<FunctionCallArgument>,
}

/// One argument of a call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionCallArgument {
    /// `name = value`. The value is always an identifier; literals and
    /// expressions are not accepted after `=`.
    Named {
        argument_name: Identifier,
        argument_value: Identifier,
    },

    /// A bare constant or identifier: `z(1, y)`.
    Positional(ArgumentValue),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgumentValue {
    Constant(Constant),
    Identifier(Identifier),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::constant::ConstantKind;

    fn ident(name: &str) -> Identifier {
        Identifier::new(name).unwrap()
    }

    #[test]
    fn elements_alternate() {
        let expr = Expression::single(Term::identifier(ident("a")))
            .then(Operator::Add, Term::constant(Constant::new(ConstantKind::Integer, "2")))
            .then(Operator::Equal, Term::identifier(ident("b")));

        assert_eq!(expr.len(), 3);
        let shape: Vec<&str> = expr
            .elements()
            .map(|element| match element {
                Element::Term(_) => "term",
                Element::Operator(op) => op.symbol(),
            })
            .collect();
        assert_eq!(shape, ["term", "+", "term", "==", "term"]);
        assert_eq!(expr.operators().collect::<Vec<_>>(), [Operator::Add, Operator::Equal]);
    }

    #[test]
    fn operators_serialize_as_symbols() {
        let json = serde_json::to_string(&Operator::Divide).unwrap();
        assert_eq!(json, "\"/\"");
    }
}
