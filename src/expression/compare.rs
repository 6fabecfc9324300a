//! Canonical ordering and structural equality
//!
//! The order is total over nodes and drives operand storage, deduplication,
//! fixpoint detection and round-trip checks:
//!
//! 1. Leaves sort before operator nodes.
//! 2. Leaves sort by symbol; a negated literal sorts immediately before the
//!    positive literal of the same name, and the constants `0`/`1` sort by
//!    their digit.
//! 3. Operator nodes sort `Not` < `And` < `Or`, then by operand count, then
//!    lexicographically over their operands in canonical order.
//!
//! Two nodes are equal iff neither sorts before the other.

use super::{BoolExpr, Node};
use std::cmp::Ordering;

impl Node {
    /// Sort key of a leaf: symbol, then polarity rank
    ///
    /// Constants get their own rank so they can never tie with a literal.
    fn leaf_key(&self) -> Option<(char, u8)> {
        match self {
            Node::Literal { name, negated } => Some((*name, if *negated { 0 } else { 1 })),
            Node::Constant(value) => Some((if *value { '1' } else { '0' }, 2)),
            _ => None,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Node::Literal { .. } | Node::Constant(_) => 0,
            Node::Not(_) => 1,
            Node::And(_) => 2,
            Node::Or(_) => 3,
        }
    }

    fn arity(&self) -> usize {
        match self {
            Node::Literal { .. } | Node::Constant(_) => 0,
            Node::Not(_) => 1,
            Node::And(operands) | Node::Or(operands) => operands.len(),
        }
    }

    /// Children in canonical order
    pub(crate) fn children(&self) -> Box<dyn Iterator<Item = &BoolExpr> + '_> {
        match self {
            Node::Literal { .. } | Node::Constant(_) => Box::new(std::iter::empty()),
            Node::Not(child) => Box::new(std::iter::once(child)),
            Node::And(operands) | Node::Or(operands) => Box::new(operands.iter()),
        }
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.leaf_key(), other.leaf_key()) {
            (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self
                .kind_rank()
                .cmp(&other.kind_rank())
                .then_with(|| self.arity().cmp(&other.arity()))
                .then_with(|| self.children().cmp(other.children())),
        }
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl Ord for BoolExpr {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.same_allocation(other) {
            return Ordering::Equal;
        }
        self.node().cmp(other.node())
    }
}

impl PartialOrd for BoolExpr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Structural equality under the canonical order
///
/// Two expressions are equal iff they are the same canonical tree. Logical
/// equivalence is a different question, see [`BoolExpr::equivalent_to`].
impl PartialEq for BoolExpr {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BoolExpr {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn parse(input: &str) -> BoolExpr {
        BoolExpr::parse(input).unwrap()
    }

    #[test]
    fn test_literals_before_operators() {
        let z = BoolExpr::variable('z');
        let not = parse("!(a+b)");
        let and = parse("ab");
        let or = parse("a+b");

        assert!(z < not);
        assert!(not < and);
        assert!(and < or);
    }

    #[test]
    fn test_negated_literal_sorts_first() {
        let a = BoolExpr::literal('a', false);
        let not_a = BoolExpr::literal('a', true);
        let b = BoolExpr::literal('b', true);

        assert!(not_a < a);
        assert!(a < b);
        assert_eq!(not_a.cmp(&BoolExpr::literal('a', true)), Ordering::Equal);
    }

    #[test]
    fn test_constants_never_equal_literals() {
        let zero = BoolExpr::constant(false);
        let one = BoolExpr::constant(true);

        assert!(zero < one);
        assert!(one < BoolExpr::variable('a'));
        assert_ne!(zero, one);
    }

    #[test]
    fn test_fewer_operands_first() {
        let narrow = parse("ab");
        let wide = parse("abc");
        assert!(narrow < wide);
    }

    #[test]
    fn test_lexicographic_operands() {
        let ab = parse("ab");
        let ac = parse("ac");
        let a_not_b = parse("a!b");

        assert!(ab < ac);
        assert!(a_not_b < ab);
    }

    #[test]
    fn test_structural_equality_ignores_input_order() {
        assert_eq!(parse("ba+c"), parse("c+ab"));
        assert_eq!(parse("(b+a)(d+c)"), parse("(c+d)(a+b)"));
        assert_ne!(parse("ab"), parse("a+b"));
    }
}
