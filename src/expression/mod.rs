//! Boolean expression trees and their symbolic rewrites
//!
//! This module provides [`BoolExpr`], an immutable, canonical expression tree
//! over single-character variables, together with the rewrite pipeline that
//! turns it into negation-normal form, CNF or DNF, reduces it with the
//! identity/complement laws and factors common terms back out.
//!
//! # Main Types
//!
//! - [`BoolExpr`] - A cheaply clonable handle to a canonical tree. Three ways
//!   to construct one:
//!   1. Parsing: `BoolExpr::parse("a(b+c)")`
//!   2. Method API: `a.and(&b).or(&c)`
//!   3. Operators or the `expr!` macro: `&a * &b + &c`, `expr!(a * b + c)`
//! - [`Node`] - The tagged variant behind every `BoolExpr`, exposed for
//!   pattern matching.
//!
//! # Canonical Form
//!
//! AND/OR nodes hold their operands in a `BTreeSet` ordered by the canonical
//! comparator, so commutativity and idempotence are structural: `ba`, `ab`
//! and `aab` build the same tree. Same-kind operands are flattened and
//! single-operand groups collapse when a node is built, never later.
//!
//! # Quick Start
//!
//! ```
//! use logic_forms::BoolExpr;
//!
//! # fn main() -> Result<(), logic_forms::ExpressionParseError> {
//! let expr = BoolExpr::parse("a(b+c)")?;
//! assert_eq!(expr.to_dnf().to_string(), "ab+ac");
//!
//! let factored = BoolExpr::parse("ab+ac")?.factor();
//! assert_eq!(factored.to_string(), "a(b+c)");
//!
//! let simplified = BoolExpr::parse("ab+a!b")?.simplify();
//! assert_eq!(simplified.to_string(), "a");
//! # Ok(())
//! # }
//! ```

// Submodules
mod ast;
mod compare;
mod display;
mod distribute;
pub mod error;
mod eval;
pub(crate) mod factorization;
mod negation;
mod operators;
mod parser;
mod reduce;
mod scanner;
mod simplify;

pub use ast::{Node, Op, Operands};
pub use display::TreeDisplay;
pub use error::ExpressionParseError;
pub use scanner::{Scanner, Symbol};
pub use simplify::{NormalForm, Simplification, Stage};

use std::sync::Arc;

/// A canonical boolean expression tree
///
/// `BoolExpr` is a shared handle to an immutable [`Node`]. Cloning only bumps
/// a reference count, so subtrees are shared between the input and output of
/// every rewrite instead of being copied.
///
/// Equality and ordering are structural, defined by the canonical comparator:
/// two expressions are equal iff they are the same canonical tree. Use
/// [`BoolExpr::equivalent_to`] for logical equivalence.
///
/// # Examples
///
/// ```
/// use logic_forms::BoolExpr;
///
/// let a = BoolExpr::variable('a');
/// let b = BoolExpr::variable('b');
///
/// // Commutativity is structural
/// assert_eq!(a.and(&b), b.and(&a));
///
/// // Double negation collapses on construction
/// assert_eq!(a.not().not(), a);
/// ```
#[derive(Clone)]
pub struct BoolExpr {
    node: Arc<Node>,
}

impl BoolExpr {
    pub(crate) fn from_node(node: Node) -> Self {
        BoolExpr {
            node: Arc::new(node),
        }
    }

    /// Create a positive literal for the given variable name
    pub fn variable(name: char) -> Self {
        Self::literal(name, false)
    }

    /// Create a literal, optionally negated
    ///
    /// Names are single letters or digits; `'0'` and `'1'` are reserved for
    /// the constants.
    pub fn literal(name: char, negated: bool) -> Self {
        debug_assert!(
            name.is_ascii_alphanumeric() && name != '0' && name != '1',
            "invalid variable name {:?}",
            name
        );
        Self::from_node(Node::Literal { name, negated })
    }

    /// Create a constant expression (true or false)
    pub fn constant(value: bool) -> Self {
        Self::from_node(Node::Constant(value))
    }

    /// Borrow the node at the root of this tree
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Whether this is a literal or a constant
    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// The operator kind of an AND/OR root, if any
    pub fn op(&self) -> Option<Op> {
        self.node.op()
    }

    /// The operands of an AND/OR root, if any
    pub fn operands(&self) -> Option<&Operands> {
        self.node.operands()
    }

    /// Nesting depth: leaves are 0, every operator adds one level
    pub fn depth(&self) -> usize {
        match self.node() {
            Node::Literal { .. } | Node::Constant(_) => 0,
            Node::Not(child) => child.depth() + 1,
            Node::And(operands) | Node::Or(operands) => {
                operands.iter().map(BoolExpr::depth).max().unwrap_or(0) + 1
            }
        }
    }

    /// Total number of nodes in the tree
    pub fn size(&self) -> usize {
        match self.node() {
            Node::Literal { .. } | Node::Constant(_) => 1,
            Node::Not(child) => child.size() + 1,
            Node::And(operands) | Node::Or(operands) => {
                operands.iter().map(BoolExpr::size).sum::<usize>() + 1
            }
        }
    }

    /// Whether both handles point at the same allocation
    pub(crate) fn same_allocation(&self, other: &BoolExpr) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

#[cfg(test)]
mod tests;
