//! Tests for the expression module

use super::*;
use crate::expr;
use test_log::test;

#[test]
fn test_collect_variables() {
    let a = BoolExpr::variable('a');
    let b = BoolExpr::variable('b');
    let c = BoolExpr::variable('c');

    let expr = c.and(&a).or(&b);
    let vars = expr.collect_variables();

    assert_eq!(vars.len(), 3);
    let var_names: Vec<char> = vars.into_iter().collect();
    assert_eq!(var_names, vec!['a', 'b', 'c']); // Should be alphabetical
}

#[test]
fn test_depth_and_size() {
    let expr = BoolExpr::parse("a(b+!(cd))").unwrap();
    // And -> Or -> Not -> And -> leaf
    assert_eq!(expr.depth(), 4);
    assert_eq!(expr.size(), 8);
    assert_eq!(BoolExpr::variable('a').depth(), 0);
}

// ========== Display and Parsing Round-trip Tests ==========
// These tests verify correct expression formatting with focus on:
// - Operator precedence
// - Correct parenthesis placement
// - Complex nesting
// Uses round-trip validation: display → parse → canonical equality

fn assert_round_trip(expr: &BoolExpr) {
    let display = expr.to_string();
    let parsed = BoolExpr::parse(&display).unwrap();
    assert_eq!(*expr, parsed, "{} did not round-trip", display);
}

#[test]
fn test_precedence_and_over_or() {
    // AND binds tighter than OR
    let a = BoolExpr::variable('a');
    let b = BoolExpr::variable('b');
    let c = BoolExpr::variable('c');
    let expr = a.and(&b).or(&c);

    assert_eq!(expr.to_string(), "ab+c"); // No parens needed
    assert_round_trip(&expr);
}

#[test]
fn test_precedence_or_in_and_needs_parens() {
    let a = BoolExpr::variable('a');
    let b = BoolExpr::variable('b');
    let c = BoolExpr::variable('c');
    let expr = a.or(&b).and(&c);

    assert_eq!(expr.to_string(), "c(a+b)"); // Parens required
    assert_round_trip(&expr);
}

#[test]
fn test_not_of_compound_requires_parens() {
    let a = BoolExpr::variable('a');
    let b = BoolExpr::variable('b');

    let expr_and = a.and(&b).not();
    assert_eq!(expr_and.to_string(), "!(ab)");
    assert_round_trip(&expr_and);

    let expr_or = a.or(&b).not();
    assert_eq!(expr_or.to_string(), "!(a+b)");
    assert_round_trip(&expr_or);
}

#[test]
fn test_not_of_literal_needs_no_parens() {
    let a = BoolExpr::variable('a');
    assert_eq!(a.not().to_string(), "!a");
    assert_eq!((!&a).and(&BoolExpr::variable('b')).to_string(), "!ab");
}

#[test]
fn test_hand_built_not_of_leaf_renders_flipped() {
    let not_a = BoolExpr::from_node(Node::Not(BoolExpr::variable('a')));
    assert_eq!(not_a.to_string(), "!a");
    let not_zero = BoolExpr::from_node(Node::Not(BoolExpr::constant(false)));
    assert_eq!(not_zero.to_string(), "1");
}

#[test]
fn test_complex_nested_parentheses() {
    // (a + b)(c + d)
    let expr = BoolExpr::parse("(c+d)(b+a)").unwrap();
    assert_eq!(expr.to_string(), "(a+b)(c+d)");
    assert_round_trip(&expr);

    // Three levels: a(b + c(d + e))
    let expr = BoolExpr::parse("a(b+c(d+e))").unwrap();
    assert_eq!(expr.to_string(), "a(c(d+e)+b)");
    assert_round_trip(&expr);
}

#[test]
fn test_products_render_before_leaves_in_sums() {
    let expr = BoolExpr::parse("c+ab+!(de)").unwrap();
    let display = expr.to_string();
    assert!(display.ends_with("+c"), "{}", display);
    assert_round_trip(&expr);
}

#[test]
fn test_constants_round_trip() {
    for input in ["0", "1", "a+1", "0b", "!(a+0)"] {
        assert_round_trip(&BoolExpr::parse(input).unwrap());
    }
}

#[test]
fn test_digit_variables() {
    let expr = BoolExpr::parse("2a+!9").unwrap();
    assert_eq!(expr.collect_variables().len(), 3);
    assert_round_trip(&expr);
}

#[test]
fn test_debug_matches_display() {
    let expr = BoolExpr::parse("!(a+b)c").unwrap();
    assert_eq!(format!("{:?}", expr), format!("{}", expr));
}

#[test]
fn test_tree_dump() {
    let expr = BoolExpr::parse("!(a+b)c").unwrap();
    let dump = expr.tree().to_string();
    assert_eq!(dump, "*\n   c\n   !\n      +\n         a\n         b\n");
}

// ========== Canonical Form Tests ==========

#[test]
fn test_commutativity_is_structural() {
    let inputs = ["abc", "cba", "bca", "b(ca)", "(ab)c", "abcab"];
    let first = BoolExpr::parse(inputs[0]).unwrap();
    for input in &inputs[1..] {
        assert_eq!(BoolExpr::parse(input).unwrap(), first, "{}", input);
    }
}

#[test]
fn test_expr_macro_matches_parser() {
    let a = BoolExpr::variable('a');
    let b = BoolExpr::variable('b');
    let c = BoolExpr::variable('c');

    assert_eq!(expr!(a * b + c), BoolExpr::parse("ab+c").unwrap());
    assert_eq!(expr!((a + b) * c), BoolExpr::parse("(a+b)c").unwrap());
    assert_eq!(expr!(!(a & b) | ~c), BoolExpr::parse("!(ab)+!c").unwrap());
    assert_eq!(expr!("a" * 'b'), BoolExpr::parse("ab").unwrap());
}

#[test]
fn test_expr_macro_precedence() {
    let a = BoolExpr::variable('a');
    let b = BoolExpr::variable('b');
    let c = BoolExpr::variable('c');
    let d = BoolExpr::variable('d');

    assert_eq!(expr!(a | b & c), BoolExpr::parse("a+bc").unwrap());
    assert_eq!(expr!(a * b + c * d), BoolExpr::parse("ab+cd").unwrap());
    assert_eq!(expr!(a + b * !c + d), BoolExpr::parse("a+b!c+d").unwrap());
    assert_eq!(expr!(!!a * ~b), BoolExpr::parse("a!b").unwrap());
    assert_eq!(expr!(a * (b + 0) * 1), BoolExpr::parse("a(b+0)1").unwrap());
}

#[test]
fn test_structural_sharing() {
    let shared = BoolExpr::parse("a+b").unwrap();
    let product = BoolExpr::conjunction([shared.clone(), BoolExpr::variable('c')]);
    let reused = product
        .operands()
        .and_then(|operands| operands.iter().find(|operand| !operand.is_leaf()))
        .unwrap();
    assert!(reused.same_allocation(&shared));
}
