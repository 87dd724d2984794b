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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire Clarity expression grammar**:
 *
 *   expression → term ( operator term )*
 *   term       → unary | group
 *   unary      → "-"? ( constant | identifier | call )
 *   group      → "(" expression ")"
 *   call       → identifier "(" ( argument ( "," argument )* )? ")"
 *   argument   → identifier "=" identifier | constant | identifier
 *
 * Alternatives are tried left to right and the first match wins.
 *
 * Operator chains are kept flat. `a + b * c` is three terms and two
 * operators; no precedence is applied here.
 *
 * ==========================================================================
 */

use crate::ast::{
    ArgumentValue, Expression, FunctionCall, FunctionCallArgument, GroupExpression, Identifier,
    Operand, Term, UnaryExpression,
};
use crate::parser::parser::{PResult, Parser};

impl<'src> Parser<'src> {
    /// expression → term ( operator term )*
    ///
    /// Each expression opens one nesting level.
    pub(crate) fn expression(&mut self) -> PResult<Expression> {
        self.nested(|p| p.attempt(Self::operator_chain))
    }

    fn operator_chain(&mut self) -> PResult<Expression> {
        let Some(first) = self.term()? else {
            return Ok(None);
        };

        let mut rest = Vec::new();
        loop {
            let checkpoint = self.cursor.position();
            let Some(operator) = self.operator() else {
                break;
            };

            // An operator with nothing after it belongs to whoever called us.
            match self.term()? {
                Some(term) => rest.push((operator, term)),
                None => {
                    self.cursor.reset(checkpoint);
                    break;
                }
            }
        }

        Ok(Some(Expression { first, rest }))
    }

    /// term → unary | group
    fn term(&mut self) -> PResult<Term> {
        if let Some(unary) = self.unary_expression()? {
            return Ok(Some(Term::Unary(unary)));
        }

        Ok(self.group_expression()?.map(Term::Group))
    }

    /// unary → "-"? ( constant | identifier | call )
    fn unary_expression(&mut self) -> PResult<UnaryExpression> {
        self.attempt(|p| {
            let negated = p.match_symbol("-");
            let operand = p.operand()?;
            Ok(operand.map(|operand| UnaryExpression { negated, operand }))
        })
    }

    fn operand(&mut self) -> PResult<Operand> {
        if let Some(constant) = self.constant() {
            return Ok(Some(Operand::Constant(constant)));
        }

        if let Some(name) = self.plain_identifier() {
            return Ok(Some(Operand::Identifier(name)));
        }

        Ok(self.function_call()?.map(Operand::Call))
    }

    /// An identifier that is not the start of a call.
    ///
    /// `name` followed by `(` is left for the call alternative.
    fn plain_identifier(&mut self) -> Option<Identifier> {
        let checkpoint = self.cursor.position();
        let name = self.identifier()?;

        if self.check_symbol("(") {
            self.cursor.reset(checkpoint);
            return None;
        }

        Some(name)
    }

    /// group → "(" expression ")"
    fn group_expression(&mut self) -> PResult<GroupExpression> {
        self.attempt(|p| {
            if !p.match_symbol("(") {
                return Ok(None);
            }
            let Some(expression) = p.expression()? else {
                return Ok(None);
            };
            if !p.match_symbol(")") {
                return Ok(None);
            }

            Ok(Some(GroupExpression {
                expression: Box::new(expression),
            }))
        })
    }

    /// call → identifier "(" ( argument ( "," argument )* )? ")"
    pub(crate) fn function_call(&mut self) -> PResult<FunctionCall> {
        self.attempt(|p| {
            let Some(function_name) = p.identifier() else {
                return Ok(None);
            };
            if !p.match_symbol("(") {
                return Ok(None);
            }

            let arguments = p
                .separated(|p| Ok(p.function_call_argument()))?
                .unwrap_or_default();

            if !p.match_symbol(")") {
                return Ok(None);
            }

            Ok(Some(FunctionCall {
                function_name,
                arguments,
            }))
        })
    }

    /// argument → identifier "=" identifier | constant | identifier
    ///
    /// The value after `=` must be an identifier. `f(x = 1)` is rejected
    /// rather than falling back to something else.
    fn function_call_argument(&mut self) -> Option<FunctionCallArgument> {
        let checkpoint = self.cursor.position();

        if let Some(argument_name) = self.identifier() {
            if self.match_symbol("=") {
                if let Some(argument_value) = self.identifier() {
                    return Some(FunctionCallArgument::Named {
                        argument_name,
                        argument_value,
                    });
                }
            }
        }

        self.cursor.reset(checkpoint);
        self.argument_value().map(FunctionCallArgument::Positional)
    }

    fn argument_value(&mut self) -> Option<ArgumentValue> {
        if let Some(constant) = self.constant() {
            return Some(ArgumentValue::Constant(constant));
        }

        self.identifier().map(ArgumentValue::Identifier)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::*;
    use crate::parser::parse_expression;

    #[test]
    fn single_identifier() {
        let expr = parse_expression("x").unwrap();
        assert_eq!(expr, Expression::single(Term::identifier(Identifier::new("x").unwrap())));
    }

    #[test]
    fn negated_constant() {
        let expr = parse_expression("-1.5").unwrap();
        let Term::Unary(unary) = &expr.first else {
            panic!("expected unary term, got {:?}", expr.first);
        };
        assert!(unary.negated);
        assert_eq!(
            unary.operand,
            Operand::Constant(Constant::new(ConstantKind::Double, "1.5"))
        );
    }

    #[test]
    fn minus_after_term_is_an_operator() {
        let expr = parse_expression("a - -b").unwrap();
        assert_eq!(expr.operators().collect::<Vec<_>>(), [Operator::Subtract]);
        let Term::Unary(second) = &expr.rest[0].1 else {
            panic!("expected unary term");
        };
        assert!(second.negated);
    }

    #[test]
    fn call_with_no_arguments() {
        let expr = parse_expression("now()").unwrap();
        let Term::Unary(UnaryExpression {
            operand: Operand::Call(call),
            ..
        }) = &expr.first
        else {
            panic!("expected call");
        };
        assert_eq!(call.function_name, "now");
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn named_arguments_keep_order_and_duplicates() {
        let expr = parse_expression("f(a = b, a = c)").unwrap();
        let Term::Unary(UnaryExpression {
            operand: Operand::Call(call),
            ..
        }) = &expr.first
        else {
            panic!("expected call");
        };
        let names: Vec<String> = call.arguments.iter().map(|arg| arg.to_string()).collect();
        assert_eq!(names, ["a = b", "a = c"]);
    }

    #[test]
    fn trailing_operator_is_rejected() {
        assert!(parse_expression("a +").is_err());
    }

    #[test]
    fn single_equals_is_not_an_operator() {
        assert!(parse_expression("a = b").is_err());
        assert!(parse_expression("a == b").is_ok());
    }
}
