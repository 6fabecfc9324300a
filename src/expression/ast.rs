//! Node representation and canonical construction
//!
//! This module contains the tagged node type and the reducing builder that
//! every AND/OR node is assembled through.

use super::BoolExpr;
use std::collections::BTreeSet;

/// Canonically ordered, deduplicated operand set of an AND/OR node
pub type Operands = BTreeSet<BoolExpr>;

/// A node of a boolean expression tree
///
/// Trees built through [`BoolExpr`]'s constructors, the parser and the
/// rewrite passes uphold these invariants:
///
/// - `Not` never wraps a leaf or another `Not`
/// - `And`/`Or` never directly contain an operand of the same kind
/// - `And`/`Or` hold at least two operands
///
/// The variants are public for pattern matching. Building a node by hand
/// bypasses the invariants; the passes still accept such nodes and repair
/// them as they go.
#[derive(Debug, Clone)]
pub enum Node {
    /// A propositional variable, optionally negated
    Literal { name: char, negated: bool },
    /// The constants 0 and 1
    Constant(bool),
    /// Logical negation of a compound expression
    Not(BoolExpr),
    /// Conjunction of two or more operands
    And(Operands),
    /// Disjunction of two or more operands
    Or(Operands),
}

/// The two n-ary operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    And,
    Or,
}

impl Op {
    /// The other operator kind
    pub fn dual(self) -> Op {
        match self {
            Op::And => Op::Or,
            Op::Or => Op::And,
        }
    }

    /// The constant that leaves this operator's result unchanged
    pub fn identity(self) -> bool {
        matches!(self, Op::And)
    }

    /// The constant that forces this operator's result
    pub fn annihilator(self) -> bool {
        !self.identity()
    }

    /// Symbol used in tree dumps
    pub fn symbol(self) -> char {
        match self {
            Op::And => '*',
            Op::Or => '+',
        }
    }
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Literal { .. } | Node::Constant(_))
    }

    pub fn op(&self) -> Option<Op> {
        match self {
            Node::And(_) => Some(Op::And),
            Node::Or(_) => Some(Op::Or),
            _ => None,
        }
    }

    pub fn operands(&self) -> Option<&Operands> {
        match self {
            Node::And(operands) | Node::Or(operands) => Some(operands),
            _ => None,
        }
    }
}

/// Accumulates the operands of an AND/OR node under construction
///
/// Every [`push`](OperandsBuilder::push) is a reducing add: operands of the
/// same kind are merged into this node instead of nested, and duplicates are
/// dropped by the canonical set.
#[derive(Debug)]
pub(crate) struct OperandsBuilder {
    op: Op,
    operands: Operands,
}

impl OperandsBuilder {
    pub(crate) fn new(op: Op) -> Self {
        OperandsBuilder {
            op,
            operands: Operands::new(),
        }
    }

    pub(crate) fn push(&mut self, operand: BoolExpr) {
        if operand.op() == Some(self.op) {
            if let Some(grandchildren) = operand.operands() {
                self.operands.extend(grandchildren.iter().cloned());
            }
        } else {
            self.operands.insert(operand);
        }
    }

    pub(crate) fn operands(&self) -> &Operands {
        &self.operands
    }

    /// Finish the node, collapsing degenerate widths
    ///
    /// No operands yields the operator's identity constant and a single
    /// operand is returned as is.
    pub(crate) fn build(mut self) -> BoolExpr {
        match self.operands.len() {
            0 => BoolExpr::constant(self.op.identity()),
            1 => self
                .operands
                .pop_first()
                .unwrap_or_else(|| BoolExpr::constant(self.op.identity())),
            _ => BoolExpr::from_node(match self.op {
                Op::And => Node::And(self.operands),
                Op::Or => Node::Or(self.operands),
            }),
        }
    }
}

impl Extend<BoolExpr> for OperandsBuilder {
    fn extend<I: IntoIterator<Item = BoolExpr>>(&mut self, iter: I) {
        for operand in iter {
            self.push(operand);
        }
    }
}

impl BoolExpr {
    /// Build an AND/OR node over the given operands
    ///
    /// Same-kind operands are flattened, duplicates dropped, a single
    /// operand returned directly and an empty iterator yields the identity
    /// constant.
    pub fn operation<I>(op: Op, operands: I) -> BoolExpr
    where
        I: IntoIterator<Item = BoolExpr>,
    {
        let mut builder = OperandsBuilder::new(op);
        builder.extend(operands);
        builder.build()
    }

    /// Conjunction of all operands (`1` when empty)
    pub fn conjunction<I>(operands: I) -> BoolExpr
    where
        I: IntoIterator<Item = BoolExpr>,
    {
        Self::operation(Op::And, operands)
    }

    /// Disjunction of all operands (`0` when empty)
    pub fn disjunction<I>(operands: I) -> BoolExpr
    where
        I: IntoIterator<Item = BoolExpr>,
    {
        Self::operation(Op::Or, operands)
    }

    /// The literal or constant with its polarity flipped, if this is a leaf
    pub(crate) fn flipped_leaf(&self) -> Option<BoolExpr> {
        match self.node() {
            Node::Literal { name, negated } => Some(BoolExpr::from_node(Node::Literal {
                name: *name,
                negated: !negated,
            })),
            Node::Constant(value) => Some(BoolExpr::constant(!value)),
            _ => None,
        }
    }

    /// Rebuild this node from transformed children
    ///
    /// Returns `self` unchanged (same allocation) when `f` returns every
    /// child unchanged; otherwise the node is rebuilt through the canonical
    /// constructors, so flattening and collapsing apply to the new children.
    pub(crate) fn map_children<F>(&self, mut f: F) -> BoolExpr
    where
        F: FnMut(&BoolExpr) -> BoolExpr,
    {
        match self.node() {
            Node::Literal { .. } | Node::Constant(_) => self.clone(),
            Node::Not(child) => {
                let mapped = f(child);
                if mapped.same_allocation(child) {
                    self.clone()
                } else {
                    mapped.not()
                }
            }
            Node::And(operands) => self.map_operands(Op::And, operands, f),
            Node::Or(operands) => self.map_operands(Op::Or, operands, f),
        }
    }

    fn map_operands<F>(&self, op: Op, operands: &Operands, f: F) -> BoolExpr
    where
        F: FnMut(&BoolExpr) -> BoolExpr,
    {
        let mapped: Vec<BoolExpr> = operands.iter().map(f).collect();
        if mapped
            .iter()
            .zip(operands.iter())
            .all(|(new, old)| new.same_allocation(old))
        {
            return self.clone();
        }
        BoolExpr::operation(op, mapped)
    }
}
