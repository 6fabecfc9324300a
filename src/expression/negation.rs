//! Negation push-down (De Morgan)

use super::ast::Op;
use super::{BoolExpr, Node};

impl BoolExpr {
    /// Push every negation down to the literals
    ///
    /// Rewrites `!(x y)` to `!x + !y`, `!(x + y)` to `!x !y` and `!!x` to
    /// `x`, and folds `!` on a literal or constant into the leaf itself. The
    /// result is in negation-normal form: it contains no `Not` nodes at all.
    /// Applying it twice gives the same tree as applying it once.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_forms::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("!(a+b)").unwrap();
    /// assert_eq!(expr.normalize_negations().to_string(), "!a!b");
    /// ```
    pub fn normalize_negations(&self) -> BoolExpr {
        match self.node() {
            Node::Literal { .. } | Node::Constant(_) => self.clone(),
            Node::Not(child) => child.negated_normal_form(),
            Node::And(_) | Node::Or(_) => self.map_children(BoolExpr::normalize_negations),
        }
    }

    /// Negation-normal form of `!self`
    fn negated_normal_form(&self) -> BoolExpr {
        match self.node() {
            Node::Literal { .. } | Node::Constant(_) => {
                self.flipped_leaf().unwrap_or_else(|| self.clone())
            }
            Node::Not(child) => child.normalize_negations(),
            Node::And(operands) => {
                log::trace!("De Morgan on {}", self);
                BoolExpr::operation(
                    Op::Or,
                    operands.iter().map(BoolExpr::negated_normal_form),
                )
            }
            Node::Or(operands) => {
                log::trace!("De Morgan on {}", self);
                BoolExpr::operation(
                    Op::And,
                    operands.iter().map(BoolExpr::negated_normal_form),
                )
            }
        }
    }

    /// Whether `Not` appears only directly above leaves (or not at all)
    pub fn is_negation_normal(&self) -> bool {
        match self.node() {
            Node::Literal { .. } | Node::Constant(_) => true,
            Node::Not(child) => child.is_leaf(),
            Node::And(operands) | Node::Or(operands) => {
                operands.iter().all(BoolExpr::is_negation_normal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn parse(input: &str) -> BoolExpr {
        BoolExpr::parse(input).unwrap()
    }

    #[test]
    fn test_de_morgan_or() {
        let expr = parse("!(a+b)").normalize_negations();
        assert_eq!(expr, parse("!a!b"));
    }

    #[test]
    fn test_de_morgan_and() {
        let expr = parse("!(ab)").normalize_negations();
        assert_eq!(expr, parse("!a+!b"));
    }

    #[test]
    fn test_nested_negations() {
        let expr = parse("!(a+!(b+!c))").normalize_negations();
        // !a * (b + !c)
        assert_eq!(expr, parse("!a(b+!c)"));
        assert!(expr.is_negation_normal());
    }

    #[test]
    fn test_negation_flattens_into_parent() {
        let expr = parse("c!(a+b)").normalize_negations();
        assert_eq!(expr, parse("!a!bc"));
        assert_eq!(expr.operands().unwrap().len(), 3);
    }

    #[test]
    fn test_negated_literals_flip() {
        assert_eq!(parse("!(!a b)").normalize_negations(), parse("a+!b"));
    }

    #[test]
    fn test_hand_built_double_negation() {
        let a = BoolExpr::variable('a');
        let not_a = BoolExpr::from_node(Node::Not(a.clone()));
        let not_not_a = BoolExpr::from_node(Node::Not(not_a.clone()));

        assert!(not_a.is_negation_normal());
        assert!(!not_not_a.is_negation_normal());
        assert_eq!(not_a.normalize_negations(), BoolExpr::literal('a', true));
        assert_eq!(not_not_a.normalize_negations(), a);
    }

    #[test]
    fn test_idempotent() {
        for input in ["!(a+b)c", "!(a!(b+c)+d)", "ab+!(c(d+!e))", "a", "0"] {
            let once = parse(input).normalize_negations();
            let twice = once.normalize_negations();
            assert_eq!(once, twice, "not idempotent for {}", input);
        }
    }

    #[test]
    fn test_preserves_meaning() {
        for input in ["!(a+b)c", "!(a!(b+c)+d)", "!(ab+!(c+1))"] {
            let expr = parse(input);
            assert!(expr.equivalent_to(&expr.normalize_negations()), "{}", input);
        }
    }

    #[test]
    fn test_unchanged_tree_is_shared() {
        let expr = parse("a!b+c");
        assert!(expr.normalize_negations().same_allocation(&expr));
    }
}
