//! Operator overloading and boolean operations for boolean expressions

use super::ast::Op;
use super::{BoolExpr, Node};
use std::ops::{Add, Mul, Not};

/// Logical AND operator for references: `&a * &b`
///
/// Implements the `*` operator for boolean expressions using references.
/// Only reference counts are bumped, the operands themselves are shared.
///
/// # Examples
///
/// ```
/// use logic_forms::BoolExpr;
///
/// let a = BoolExpr::variable('a');
/// let b = BoolExpr::variable('b');
/// let result = &a * &b;  // Equivalent to a.and(&b)
/// assert_eq!(result.to_string(), "ab");
/// ```
impl Mul for &BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: &BoolExpr) -> BoolExpr {
        self.and(rhs)
    }
}

/// Logical AND operator: `a * b` (delegates to reference version)
///
/// # Examples
///
/// ```
/// use logic_forms::BoolExpr;
///
/// let a = BoolExpr::variable('a');
/// let b = BoolExpr::variable('b');
/// let result1 = a.clone() * b.clone();
/// let result2 = &a * &b;
/// assert_eq!(result1, result2);
/// ```
impl Mul for BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: BoolExpr) -> BoolExpr {
        self.and(&rhs)
    }
}

/// Logical OR operator for references: `&a + &b`
///
/// # Examples
///
/// ```
/// use logic_forms::BoolExpr;
///
/// let a = BoolExpr::variable('a');
/// let b = BoolExpr::variable('b');
/// let result = &a + &b;  // Equivalent to a.or(&b)
/// assert_eq!(result.to_string(), "a+b");
/// ```
impl Add for &BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: &BoolExpr) -> BoolExpr {
        self.or(rhs)
    }
}

/// Logical OR operator: `a + b` (delegates to reference version)
impl Add for BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: BoolExpr) -> BoolExpr {
        self.or(&rhs)
    }
}

/// Logical NOT operator for references: `!&a`
///
/// # Examples
///
/// ```
/// use logic_forms::BoolExpr;
///
/// let a = BoolExpr::variable('a');
/// let result = !&a;  // Equivalent to a.not()
/// assert_eq!(result.to_string(), "!a");
/// ```
impl Not for &BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(self)
    }
}

/// Logical NOT operator: `!a` (delegates to reference version)
///
/// Using references (`!&a`) is preferred when the original expression is
/// still needed.
impl Not for BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(&self)
    }
}

// Boolean operation methods
impl BoolExpr {
    /// Logical AND: the conjunction of this and another expression
    ///
    /// Built through the reducing builder, so nested conjunctions are
    /// flattened and duplicates dropped.
    pub fn and(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr::operation(Op::And, [self.clone(), other.clone()])
    }

    /// Logical OR: the disjunction of this and another expression
    pub fn or(&self, other: &BoolExpr) -> BoolExpr {
        BoolExpr::operation(Op::Or, [self.clone(), other.clone()])
    }

    /// Logical NOT: the negation of this expression
    ///
    /// A literal or constant has its polarity flipped and a negation is
    /// unwrapped, so `Not` only ever wraps an AND/OR node.
    pub fn not(&self) -> BoolExpr {
        match self.node() {
            Node::Literal { .. } | Node::Constant(_) => {
                self.flipped_leaf().unwrap_or_else(|| self.clone())
            }
            Node::Not(child) => child.clone(),
            Node::And(_) | Node::Or(_) => BoolExpr::from_node(Node::Not(self.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    // Keeps `std::ops::Not` out of scope so `.not()` resolves to the borrowing method
    use crate::expression::{BoolExpr, Node};
    use test_log::test;

    #[test]
    fn test_operators_match_methods() {
        let a = BoolExpr::variable('a');
        let b = BoolExpr::variable('b');
        let c = BoolExpr::variable('c');

        assert_eq!(&a * &b, a.and(&b));
        assert_eq!(&a + &b, a.or(&b));
        assert_eq!(!&a, a.not());
        assert_eq!(a.clone() * b.clone() + c.clone(), a.and(&b).or(&c));
    }

    #[test]
    fn test_not_folds_into_leaves() {
        let a = BoolExpr::variable('a');
        assert_eq!(a.not(), BoolExpr::literal('a', true));
        assert_eq!(a.not().not(), a);
        assert_eq!(BoolExpr::constant(true).not(), BoolExpr::constant(false));
    }

    #[test]
    fn test_not_wraps_compound() {
        let a = BoolExpr::variable('a');
        let b = BoolExpr::variable('b');
        let sum = &a + &b;

        let negated = !&sum;
        assert!(matches!(negated.node(), Node::Not(_)));
        assert!((!negated).same_allocation(&sum));
    }

    #[test]
    fn test_chained_operations_flatten() {
        let a = BoolExpr::variable('a');
        let b = BoolExpr::variable('b');
        let c = BoolExpr::variable('c');

        let product = &(&a * &b) * &c;
        assert_eq!(product.operands().map(|ops| ops.len()), Some(3));

        let same = &(&b * &c) * &a;
        assert_eq!(product, same);
    }
}
