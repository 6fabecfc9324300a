//! Algebraic factorisation for boolean expressions
//!
//! This module implements a greedy factorisation, the approximate inverse of
//! distribution, that turns two-level forms into more compact multi-level
//! ones:
//!
//! 1. Finds common divisors (members shared by several operands)
//! 2. Picks the divisor shared by the most operands
//! 3. Divides it out: `ab + ac + d → a(b + c) + d`, dually
//!    `(a+b)(a+c)d → (a + bc)d`
//! 4. Repeats on the rebuilt node and factors the quotient recursively
//!
//! The heuristic is local and greedy: it does not search for a maximal
//! factoring and gives no minimality guarantee.
//!
//! Complexity: O(n² × m) per level where n = number of operands, m = members
//! per operand

use super::ast::Op;
use super::{BoolExpr, Node, Operands};
use std::collections::BTreeMap;

/// Find common divisors of a set of operands
///
/// Counts, for each member of an `inner`-kind operand, how many operands
/// contain it, and keeps those shared by at least two.
fn find_common_divisors(operands: &Operands, inner: Op) -> Vec<(&BoolExpr, usize)> {
    if operands.len() < 2 {
        return Vec::new();
    }

    let mut member_counts: BTreeMap<&BoolExpr, usize> = BTreeMap::new();
    for operand in operands {
        if operand.op() != Some(inner) {
            continue;
        }
        for member in operand.operands().into_iter().flatten() {
            *member_counts.entry(member).or_insert(0) += 1;
        }
    }

    // BTreeMap iteration keeps the result in canonical order
    member_counts
        .into_iter()
        .filter(|(_, count)| *count >= 2)
        .collect()
}

/// Find the best member to factor out (greedy heuristic)
///
/// Prefers the member shared by the most operands; ties go to the member
/// that comes first in canonical order.
fn find_best_factor(operands: &Operands, inner: Op) -> Option<BoolExpr> {
    let mut best: Option<(&BoolExpr, usize)> = None;
    for (member, count) in find_common_divisors(operands, inner) {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((member, count));
        }
    }
    best.map(|(member, _)| member.clone())
}

/// Divide a member out of a set of operands
///
/// Splits the operands into:
/// - quotients of the `inner`-kind operands containing the member (with the
///   member removed)
/// - operands not containing the member
fn factor_member(
    operands: &Operands,
    member: &BoolExpr,
    inner: Op,
) -> (Vec<BoolExpr>, Vec<BoolExpr>) {
    let mut quotients = Vec::new();
    let mut rest = Vec::new();

    for operand in operands {
        match operand.operands() {
            Some(members) if operand.op() == Some(inner) && members.contains(member) => {
                let quotient = members.iter().filter(|m| *m != member).cloned();
                quotients.push(BoolExpr::operation(inner, quotient));
            }
            _ => rest.push(operand.clone()),
        }
    }

    (quotients, rest)
}

impl BoolExpr {
    /// Factor common terms out of the expression
    ///
    /// Works bottom-up: operands are factored first, then every AND/OR node
    /// whose operands share a member has it extracted, e.g. `ab + ac`
    /// becomes `a(b + c)`. Expressions without shared members are returned
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_forms::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("ab+ac").unwrap();
    /// assert_eq!(expr.factor().to_string(), "a(b+c)");
    ///
    /// let expr = BoolExpr::parse("(a+b)(a+c)").unwrap();
    /// assert_eq!(expr.factor().to_string(), "a+bc");
    /// ```
    pub fn factor(&self) -> BoolExpr {
        match self.node() {
            Node::Literal { .. } | Node::Constant(_) => self.clone(),
            Node::Not(_) => self.map_children(BoolExpr::factor),
            Node::And(_) | Node::Or(_) => self.map_children(BoolExpr::factor).factor_level(),
        }
    }

    /// Factor the top level of a node whose operands are already factored
    fn factor_level(&self) -> BoolExpr {
        let (op, operands) = match (self.op(), self.operands()) {
            (Some(op), Some(operands)) => (op, operands),
            _ => return self.clone(),
        };
        let inner = op.dual();

        let common = match find_best_factor(operands, inner) {
            Some(common) => common,
            None => return self.clone(),
        };
        let (quotients, rest) = factor_member(operands, &common, inner);
        log::trace!(
            "extracting {} from {} operands of {}",
            common,
            quotients.len(),
            self
        );

        let quotient = BoolExpr::operation(op, quotients).factor_level();
        let extracted = BoolExpr::operation(inner, [common, quotient]).factor_level();
        BoolExpr::operation(op, rest.into_iter().chain(std::iter::once(extracted))).factor_level()
    }
}
