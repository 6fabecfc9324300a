//! Comprehensive tests for boolean expression functionality

use logic_forms::expression::Symbol;
use logic_forms::{
    expr, BoolExpr, ExpressionParseError, LogicError, Node, NormalForm, Op, SimplifyConfig,
};
use std::collections::HashMap;

fn parse(input: &str) -> BoolExpr {
    BoolExpr::parse(input).unwrap()
}

// ========== Concrete scenarios ==========

#[test]
fn test_sum_of_product_parses_and_renders() {
    let expr = parse("ab+c");
    assert_eq!(expr.op(), Some(Op::Or));

    let operands: Vec<&BoolExpr> = expr.operands().unwrap().iter().collect();
    assert_eq!(operands.len(), 2);
    assert_eq!(*operands[0], BoolExpr::variable('c'));
    assert_eq!(*operands[1], expr!('a' * 'b'));

    assert_eq!(expr.to_string(), "ab+c");
}

#[test]
fn test_de_morgan_scenario() {
    let expr = parse("!(a+b)");
    let normal = expr.normalize_negations();
    assert_eq!(
        normal,
        BoolExpr::conjunction([BoolExpr::literal('a', true), BoolExpr::literal('b', true)])
    );
    assert_eq!(normal.to_string(), "!a!b");
}

#[test]
fn test_distribution_scenario() {
    let dnf = parse("a(b+c)").to_dnf();
    let a = BoolExpr::variable('a');
    let b = BoolExpr::variable('b');
    let c = BoolExpr::variable('c');
    assert_eq!(dnf, BoolExpr::disjunction([&a * &b, &a * &c]));
    assert_eq!(dnf.to_string(), "ab+ac");
}

#[test]
fn test_reduction_scenarios() {
    assert_eq!(parse("a+a").reduce().to_string(), "a");
    assert_eq!(parse("a!a").reduce().to_string(), "0");
    assert_eq!(parse("a+1").reduce().to_string(), "1");
}

#[test]
fn test_factoring_scenario() {
    let factored = parse("ab+ac").factor();
    match factored.node() {
        Node::And(operands) => {
            assert!(operands.contains(&BoolExpr::variable('a')));
            assert!(operands.contains(&parse("b+c")));
            assert_eq!(operands.len(), 2);
        }
        other => panic!("expected an AND node, got {:?}", other),
    }
    assert_eq!(factored.to_string(), "a(b+c)");
}

// ========== Properties ==========

#[test]
fn test_complement_laws_with_extra_operand() {
    let x = parse("a+b");
    let y = BoolExpr::variable('y');

    let and = BoolExpr::conjunction([x.clone(), x.not(), y.clone()]);
    assert_eq!(and.reduce(), BoolExpr::constant(false));

    let or = BoolExpr::disjunction([x.clone(), x.not(), y]);
    assert_eq!(or.reduce(), BoolExpr::constant(true));
}

#[test]
fn test_normal_form_predicates_hold_after_conversion() {
    for input in [
        "a",
        "!(a+b)(c+!(de))",
        "(a+b)(c+d)+e!f",
        "!(!(ab)+c)+d(e+f)",
        "1+a0",
    ] {
        let expr = parse(input);
        let cnf = expr.to_cnf();
        let dnf = expr.to_dnf();
        assert!(cnf.is_cnf(), "{} -> {}", input, cnf);
        assert!(dnf.is_dnf(), "{} -> {}", input, dnf);
        assert!(expr.equivalent_to(&cnf), "{} -> {}", input, cnf);
        assert!(expr.equivalent_to(&dnf), "{} -> {}", input, dnf);
    }
}

#[test]
fn test_xor_expression() {
    let a = BoolExpr::variable('a');
    let b = BoolExpr::variable('b');
    let xor = expr!(a * !b + !a * b);

    let mut assignment = HashMap::new();
    for (va, vb) in [(false, false), (false, true), (true, false), (true, true)] {
        assignment.insert('a', va);
        assignment.insert('b', vb);
        assert_eq!(xor.evaluate(&assignment), va != vb);
    }

    // XOR has no shorter two-level form, simplification keeps its meaning
    let simplified = xor.simplify();
    assert!(simplified.converged());
    assert!(xor.equivalent_to(&simplified.expr));
}

#[test]
fn test_simplify_with_both_forms() {
    let expr = parse("(a+b)(a+c)(a+d)");
    for form in [NormalForm::Dnf, NormalForm::Cnf] {
        let config = SimplifyConfig::new().with_form(form);
        let result = expr.simplify_with_config(&config);
        assert_eq!(result.expr, parse("a+bcd"), "{:?}", form);
    }
}

#[test]
fn test_from_str_and_operators() {
    let lhs: BoolExpr = "a+b".parse().unwrap();
    let rhs: BoolExpr = "c".parse().unwrap();
    assert_eq!(&lhs * &rhs, parse("(a+b)c"));
    assert_eq!(!(lhs.clone() + rhs), parse("!(a+b+c)"));
}

// ========== Error taxonomy ==========

#[test]
fn test_lex_error_reports_character_and_position() {
    let err = BoolExpr::parse("ab & c").unwrap_err();
    match &err {
        ExpressionParseError::UnexpectedCharacter {
            character,
            position,
            input,
        } => {
            assert_eq!(*character, '&');
            assert_eq!(*position, 3);
            assert_eq!(&**input, "ab & c");
        }
        other => panic!("expected a lex error, got {:?}", other),
    }
}

#[test]
fn test_syntax_errors() {
    let cases: [(&str, Symbol, usize); 5] = [
        ("(a+b", Symbol::End, 4),
        ("a+b)", Symbol::Char(')'), 3),
        ("a+", Symbol::End, 2),
        ("", Symbol::End, 0),
        ("a(+b)", Symbol::Char('+'), 2),
    ];
    for (input, expected_found, expected_position) in cases {
        match BoolExpr::parse(input) {
            Err(ExpressionParseError::InvalidSyntax {
                found, position, ..
            }) => {
                assert_eq!(found, expected_found, "{:?}", input);
                assert_eq!(position, expected_position, "{:?}", input);
            }
            other => panic!("{:?} gave {:?}", input, other),
        }
    }
}

#[test]
fn test_errors_convert_to_crate_error() {
    let err: LogicError = BoolExpr::parse("a**").unwrap_err().into();
    assert!(matches!(err, LogicError::Parse(_)));

    let io_err: std::io::Error = err.into();
    assert_eq!(io_err.kind(), std::io::ErrorKind::InvalidData);
}
