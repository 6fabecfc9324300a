//! Display and Debug formatting for boolean expressions

use super::{BoolExpr, Node};
use std::fmt;

/// Context for formatting expressions with minimal parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None, // Top level, inside parentheses or a sum
    And,  // Inside an AND operation
}

impl BoolExpr {
    /// Format with operator precedence context to minimise parentheses
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        match self.node() {
            Node::Literal { name, negated } => {
                if *negated {
                    write!(f, "!")?;
                }
                write!(f, "{}", name)
            }
            Node::Constant(value) => write!(f, "{}", if *value { "1" } else { "0" }),

            Node::And(operands) => {
                // Juxtaposition binds tighter than anything else
                for operand in operands {
                    operand.fmt_with_context(f, OpContext::And)?;
                }
                Ok(())
            }

            Node::Or(operands) => {
                // OR needs parens inside a product
                let needs_parens = ctx == OpContext::And;
                if needs_parens {
                    write!(f, "(")?;
                }

                // Product terms first, then bare leaves
                let terms = operands.iter().filter(|operand| !operand.is_leaf());
                let leaves = operands.iter().filter(|operand| operand.is_leaf());
                for (i, operand) in terms.chain(leaves).enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    operand.fmt_with_context(f, OpContext::None)?;
                }

                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            Node::Not(child) => match child.flipped_leaf() {
                // Only reachable for hand-built nodes
                Some(leaf) => leaf.fmt_with_context(f, ctx),
                None => {
                    write!(f, "!(")?;
                    child.fmt_with_context(f, OpContext::None)?;
                    write!(f, ")")
                }
            },
        }
    }

    /// Indented tree dump for diagnostics
    ///
    /// One node per line, three spaces of indentation per level; AND, OR
    /// and NOT are shown as `*`, `+` and `!`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_forms::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("a(b+!c)").unwrap();
    /// assert_eq!(expr.tree().to_string(), "*\n   a\n   +\n      b\n      !c\n");
    /// ```
    pub fn tree(&self) -> TreeDisplay<'_> {
        TreeDisplay { expr: self }
    }
}

/// Debug formatting for boolean expressions
///
/// Formats expressions in the input grammar with minimal parentheses:
/// juxtaposition for AND, `+` for OR, `!` for NOT.
///
/// # Examples
///
/// ```
/// use logic_forms::BoolExpr;
///
/// let a = BoolExpr::variable('a');
/// let b = BoolExpr::variable('b');
/// let c = BoolExpr::variable('c');
/// let expr = a.and(&b).or(&c);
///
/// assert_eq!(format!("{:?}", expr), "ab+c");
/// ```
impl fmt::Debug for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}

/// Display formatting for boolean expressions
///
/// Delegates to the `Debug` implementation. Use `{}` or `{:?}` interchangeably.
/// The output parses back to the same canonical tree.
impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Indented tree dump returned by [`BoolExpr::tree`]
pub struct TreeDisplay<'a> {
    expr: &'a BoolExpr,
}

impl TreeDisplay<'_> {
    fn fmt_level(expr: &BoolExpr, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        write!(f, "{:indent$}", "", indent = level * 3)?;
        match expr.node() {
            Node::Literal { .. } | Node::Constant(_) => return writeln!(f, "{}", expr),
            Node::Not(_) => writeln!(f, "!")?,
            Node::And(_) | Node::Or(_) => {
                if let Some(op) = expr.op() {
                    writeln!(f, "{}", op.symbol())?;
                }
            }
        }
        for child in expr.node().children() {
            Self::fmt_level(child, f, level + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::fmt_level(self.expr, f, 0)
    }
}
