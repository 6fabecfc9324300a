//! Normal-form conversion by distribution
//!
//! Converting to CNF distributes OR over AND; converting to DNF distributes
//! AND over OR. Both are the same algorithm parameterised by the *outer*
//! operator (`And` for CNF, `Or` for DNF) and its dual, the *inner* clause
//! operator.
//!
//! The conversion is post-order: children are converted first, so a node
//! only ever has to combine operands that are already in normal form. An
//! inner-kind node with outer-kind operands is expanded into the Cartesian
//! product of those operands, which is exponential in the worst case. No
//! size cap is applied.

use super::ast::{Op, OperandsBuilder};
use super::{BoolExpr, Node};

impl BoolExpr {
    /// Convert to conjunctive normal form (AND of OR-clauses)
    ///
    /// Negations are pushed down first, so this accepts any tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_forms::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("ab+c").unwrap();
    /// let cnf = expr.to_cnf();
    /// assert!(cnf.is_cnf());
    /// assert_eq!(cnf.to_string(), "(a+c)(b+c)");
    /// ```
    pub fn to_cnf(&self) -> BoolExpr {
        self.to_normal_form(Op::And)
    }

    /// Convert to disjunctive normal form (OR of AND-clauses)
    ///
    /// Negations are pushed down first, so this accepts any tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_forms::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("a(b+c)").unwrap();
    /// assert_eq!(expr.to_dnf().to_string(), "ab+ac");
    /// ```
    pub fn to_dnf(&self) -> BoolExpr {
        self.to_normal_form(Op::Or)
    }

    /// Whether no AND appears below an OR and `Not` only sits on leaves
    pub fn is_cnf(&self) -> bool {
        self.satisfies_normal_form(Op::And, false)
    }

    /// Whether no OR appears below an AND and `Not` only sits on leaves
    pub fn is_dnf(&self) -> bool {
        self.satisfies_normal_form(Op::Or, false)
    }

    /// Convert to the normal form whose top-level operator is `outer`
    pub(crate) fn to_normal_form(&self, outer: Op) -> BoolExpr {
        log::debug!("distributing to {:?}-of-{:?} form", outer, outer.dual());
        self.normalize_negations().distribute(outer)
    }

    fn satisfies_normal_form(&self, outer: Op, under_inner: bool) -> bool {
        match self.node() {
            Node::Literal { .. } | Node::Constant(_) => true,
            Node::Not(child) => child.is_leaf(),
            Node::And(operands) | Node::Or(operands) => {
                let op = self.op() == Some(outer);
                if op && under_inner {
                    return false;
                }
                let under_inner = under_inner || !op;
                operands
                    .iter()
                    .all(|operand| operand.satisfies_normal_form(outer, under_inner))
            }
        }
    }

    /// Distribute a negation-normal tree into `outer`-of-`inner` form
    fn distribute(&self, outer: Op) -> BoolExpr {
        if self.op().is_none() {
            return self.clone();
        }
        let distributed = self.map_children(|child| child.distribute(outer));

        // Rebuilding may have collapsed the node to a single operand
        match distributed.op() {
            Some(op) if op == outer => distributed.absorb_clauses(outer),
            Some(_) => distributed.expand_product(outer),
            None => distributed,
        }
    }

    /// Expand an inner-kind node whose operands are in normal form
    ///
    /// Every combination that picks one clause from each outer-kind operand
    /// (and takes every other operand as is) becomes one inner clause of the
    /// resulting outer node.
    fn expand_product(&self, outer: Op) -> BoolExpr {
        let inner = outer.dual();
        let operands = match self.operands() {
            Some(operands) => operands,
            None => return self.clone(),
        };
        if operands.iter().all(|operand| operand.op() != Some(outer)) {
            return self.clone();
        }

        // Partial clauses, extended one operand at a time in canonical order
        let mut partials: Vec<OperandsBuilder> = vec![OperandsBuilder::new(inner)];
        for operand in operands {
            match operand.operands() {
                Some(choices) if operand.op() == Some(outer) => {
                    let mut next = Vec::with_capacity(partials.len() * choices.len());
                    for partial in &partials {
                        for choice in choices {
                            let mut clause = OperandsBuilder::new(inner);
                            clause.extend(partial.operands().iter().cloned());
                            clause.push(choice.clone());
                            next.push(clause);
                        }
                    }
                    partials = next;
                }
                _ => {
                    for partial in &mut partials {
                        partial.push(operand.clone());
                    }
                }
            }
        }

        log::trace!(
            "distributed {} into {} {:?}-clauses",
            self,
            partials.len(),
            inner
        );
        BoolExpr::operation(outer, partials.into_iter().map(OperandsBuilder::build))
            .absorb_clauses(outer)
    }

    /// Minimal-set reduction on an outer-kind node
    ///
    /// Drops every clause that is a strict superset of a sibling clause
    /// (`a + ab` → `a`, dually `a(a+b)` → `a`).
    pub(crate) fn absorb_clauses(&self, outer: Op) -> BoolExpr {
        let inner = outer.dual();
        let clauses = match self.operands() {
            Some(clauses) if self.op() == Some(outer) => clauses,
            _ => return self.clone(),
        };

        let kept: Vec<BoolExpr> = clauses
            .iter()
            .filter(|clause| {
                let absorbed = clauses
                    .iter()
                    .any(|other| other != *clause && other.is_subclause_of(clause, inner));
                if absorbed {
                    log::trace!("absorbed clause {}", clause);
                }
                !absorbed
            })
            .cloned()
            .collect();

        if kept.len() == clauses.len() {
            self.clone()
        } else {
            BoolExpr::operation(outer, kept)
        }
    }

    /// Whether every member of this clause is a member of `other`
    ///
    /// A clause is either an `inner`-kind node (its members are its
    /// operands) or any other expression (a clause of one member).
    fn is_subclause_of(&self, other: &BoolExpr, inner: Op) -> bool {
        match (self.clause_members(inner), other.clause_members(inner)) {
            (Some(members), Some(other_members)) => members.is_subset(other_members),
            (Some(_), None) => false,
            (None, Some(other_members)) => other_members.contains(self),
            (None, None) => self == other,
        }
    }

    fn clause_members(&self, inner: Op) -> Option<&super::Operands> {
        match self.operands() {
            Some(members) if self.op() == Some(inner) => Some(members),
            _ => None,
        }
    }
}
