//! Algebraic reduction with the identity, annihilator and complement laws
//!
//! | Pattern                          | Result            |
//! |----------------------------------|-------------------|
//! | AND containing `0`               | `0`               |
//! | AND containing `1`               | `1` dropped       |
//! | OR containing `0`                | `0` dropped       |
//! | OR containing `1`                | `1`               |
//! | AND containing `x` and `!x`      | `0`               |
//! | OR containing `x` and `!x`       | `1`               |
//! | one operand left                 | that operand      |
//!
//! Children are reduced before their parent is inspected, and the whole
//! pass is repeated until the tree stops changing.

use super::ast::{Op, OperandsBuilder};
use super::{BoolExpr, Node, Operands};

impl BoolExpr {
    /// Apply the reduction rules until no rule fires
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_forms::BoolExpr;
    ///
    /// assert_eq!(BoolExpr::parse("a!a").unwrap().reduce().to_string(), "0");
    /// assert_eq!(BoolExpr::parse("a+1").unwrap().reduce().to_string(), "1");
    /// assert_eq!(BoolExpr::parse("(a+0)1").unwrap().reduce().to_string(), "a");
    /// ```
    pub fn reduce(&self) -> BoolExpr {
        let mut current = self.clone();
        loop {
            let next = current.reduce_once();
            if next == current {
                return next;
            }
            log::trace!("reduced {} to {}", current, next);
            current = next;
        }
    }

    /// One post-order reduction pass
    fn reduce_once(&self) -> BoolExpr {
        match self.node() {
            Node::Literal { .. } | Node::Constant(_) => self.clone(),
            Node::Not(child) => {
                let reduced = child.reduce_once();
                if reduced.same_allocation(child) && child.op().is_some() {
                    self.clone()
                } else {
                    reduced.not()
                }
            }
            Node::And(operands) => self.reduce_operands(Op::And, operands),
            Node::Or(operands) => self.reduce_operands(Op::Or, operands),
        }
    }

    fn reduce_operands(&self, op: Op, operands: &Operands) -> BoolExpr {
        let annihilator = op.annihilator();
        let mut changed = false;
        let mut builder = OperandsBuilder::new(op);

        for operand in operands {
            let reduced = operand.reduce_once();
            changed |= !reduced.same_allocation(operand);
            match reduced.node() {
                Node::Constant(value) if *value == annihilator => {
                    return BoolExpr::constant(annihilator);
                }
                Node::Constant(_) => changed = true,
                _ => builder.push(reduced),
            }
        }

        if builder
            .operands()
            .iter()
            .any(|operand| operand.complemented_in(op, builder.operands()))
        {
            log::trace!("complement pair in {}", self);
            return BoolExpr::constant(annihilator);
        }

        if changed {
            builder.build()
        } else {
            self.clone()
        }
    }

    /// Whether the complement of this operand also sits in `operands`
    ///
    /// `operands` belong to an `op` node. A negated operand of the same kind
    /// was flattened into its parent, so `!(e)` is matched when every
    /// operand of `e` is present rather than `e` itself.
    fn complemented_in(&self, op: Op, operands: &Operands) -> bool {
        match self.node() {
            Node::Literal { .. } => self
                .flipped_leaf()
                .is_some_and(|flipped| operands.contains(&flipped)),
            Node::Not(child) => match child.operands() {
                Some(inner) if child.op() == Some(op) => {
                    inner.iter().all(|operand| operands.contains(operand))
                }
                _ => operands.contains(child),
            },
            _ => false,
        }
    }
}
