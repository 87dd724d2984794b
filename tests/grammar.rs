use clarity::{
    parse, parse_expression, parse_statement, parse_with_config, ArgumentValue, Constant,
    ConstantKind, Expression, FunctionCallArgument, Identifier, Operand, Operator, ParseError,
    ParserConfig, Statement, Term, TypeTag,
};

fn unwrap_group(term: &Term) -> &Expression {
    match term {
        Term::Group(group) => &group.expression,
        other => panic!("expected group, got {:?}", other),
    }
}

fn unwrap_operand(term: &Term) -> &Operand {
    match term {
        Term::Unary(unary) => &unary.operand,
        other => panic!("expected unary term, got {:?}", other),
    }
}

#[test]
fn nested_groups_wrap_the_constant() {
    let expr = parse_expression("(((1)))").unwrap();

    let level1 = unwrap_group(&expr.first);
    let level2 = unwrap_group(&level1.first);
    let level3 = unwrap_group(&level2.first);

    assert!(expr.rest.is_empty());
    assert_eq!(
        unwrap_operand(&level3.first),
        &Operand::Constant(Constant::new(ConstantKind::Integer, "1"))
    );
}

#[test]
fn operator_chain_stays_flat() {
    let statement = parse_statement("x = -x + 2 * (y + z(1,2)) / x;").unwrap();
    let Statement::Assignment(assignment) = statement else {
        panic!("expected assignment");
    };
    assert_eq!(assignment.variable_name, "x");

    let expr = &assignment.variable_expression;
    assert_eq!(expr.terms().count(), 4);
    assert_eq!(
        expr.operators().collect::<Vec<_>>(),
        [Operator::Add, Operator::Multiply, Operator::Divide]
    );

    let Term::Unary(first) = &expr.first else {
        panic!("expected unary first term");
    };
    assert!(first.negated);
    assert_eq!(first.operand, Operand::Identifier(Identifier::new("x").unwrap()));

    assert_eq!(
        unwrap_operand(&expr.rest[0].1),
        &Operand::Constant(Constant::new(ConstantKind::Integer, "2"))
    );

    let group = unwrap_group(&expr.rest[1].1);
    assert_eq!(group.len(), 2);
    let Operand::Call(call) = unwrap_operand(&group.rest[0].1) else {
        panic!("expected call inside group");
    };
    assert_eq!(call.function_name, "z");
    assert_eq!(
        call.arguments,
        [
            FunctionCallArgument::Positional(ArgumentValue::Constant(Constant::new(
                ConstantKind::Integer,
                "1"
            ))),
            FunctionCallArgument::Positional(ArgumentValue::Constant(Constant::new(
                ConstantKind::Integer,
                "2"
            ))),
        ]
    );

    assert_eq!(
        unwrap_operand(&expr.rest[2].1),
        &Operand::Identifier(Identifier::new("x").unwrap())
    );
}

#[test]
fn multiple_return_types_and_parameters() {
    let program = parse("int32, float foo(int32 x, float y) { }").unwrap();
    assert_eq!(program.len(), 1);

    let function = &program.functions[0];
    assert_eq!(function.function_returns, [TypeTag::Int32, TypeTag::Float]);
    assert_eq!(function.function_name, "foo");

    let params: Vec<(TypeTag, &str)> = function
        .function_params
        .iter()
        .map(|param| (param.parameter_type, param.parameter_name.as_str()))
        .collect();
    assert_eq!(params, [(TypeTag::Int32, "x"), (TypeTag::Float, "y")]);
    assert!(function.function_code.is_empty());
}

#[test]
fn missing_argument_value_points_at_the_gap() {
    let err = parse_expression("foo(x = ) ;").unwrap_err();
    let ParseError::Syntax(err) = err else {
        panic!("expected syntax error, got {:?}", err);
    };

    assert_eq!(err.span.offset, 8);
    assert_eq!(err.expected, ["identifier"]);
    assert_eq!(err.found, Some(')'));
}

#[test]
fn named_argument_value_must_be_identifier() {
    assert!(parse_expression("foo(x = 1)").is_err());
    assert!(parse_expression("foo(x = y)").is_ok());
}

#[test]
fn whole_program_with_comments() {
    let source = r#"
// entry point
int32, float foo(int32 x, float y) {
    x = -x + 2 * (y + z(1,2)) / x; // flattened
    y = bar(a = b, c);
    return x, y;
}

void empty() { }
"#;
    let program = parse(source).unwrap();
    assert_eq!(program.len(), 2);

    let foo = program.function("foo").unwrap();
    assert_eq!(foo.function_code.len(), 3);
    assert!(matches!(
        foo.function_code.statements[2],
        Statement::Return(ref ret) if ret.expressions.len() == 2
    ));
    assert!(program.function("empty").unwrap().function_code.is_empty());
}

#[test]
fn comments_can_be_disabled() {
    let config = ParserConfig::default().with_line_comments(false);
    assert!(parse_with_config("// nothing\n", &config).is_err());
    assert!(parse_with_config("void f() { }", &config).is_ok());
}

#[test]
fn trailing_input_is_rejected() {
    let err = parse("void f() { } }").unwrap_err();
    assert_eq!(err.code(), "E_SYNTAX");
    assert_eq!(err.span().offset, 13);
}

#[test]
fn unterminated_body_reports_end_of_input() {
    let err = parse("void f() { x = 1;").unwrap_err();
    let ParseError::Syntax(err) = err else {
        panic!("expected syntax error");
    };
    assert_eq!(err.found, None);
    assert!(err.expected.contains(&"'}'"));
}

#[test]
fn depth_limit_is_enforced() {
    let source = format!("void f() {{ x = {}1{}; }}", "(".repeat(40), ")".repeat(40));

    let shallow = ParserConfig::default().with_max_depth(16);
    let err = parse_with_config(&source, &shallow).unwrap_err();
    assert!(matches!(err, ParseError::DepthExceeded { limit: 16, .. }));

    assert!(parse(&source).is_ok());
}

#[test]
fn deep_nesting_does_not_overflow() {
    let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    let err = parse_expression(&source).unwrap_err();
    assert_eq!(err.code(), "E_DEPTH");
}

#[test]
fn parsing_is_deterministic() {
    let source = "int f(int a) { a = g(b = c) == 0x1F; return a; }";
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn error_message_lists_alternatives() {
    let err = parse_statement("x = ;").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"syntax error at 1:5: expected '(', '-', constant or identifier, found ';'"
    );
}
