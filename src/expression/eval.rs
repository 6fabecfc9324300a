//! Evaluation and equivalence checking for boolean expressions

use super::{BoolExpr, Node};
use std::collections::{BTreeSet, HashMap};

impl BoolExpr {
    /// Collect all variables used in this expression in alphabetical order
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_forms::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("c!a+b1").unwrap();
    /// let vars: Vec<char> = expr.collect_variables().into_iter().collect();
    /// assert_eq!(vars, vec!['a', 'b', 'c']);
    /// ```
    pub fn collect_variables(&self) -> BTreeSet<char> {
        let mut vars = BTreeSet::new();
        self.collect_variables_into(&mut vars);
        vars
    }

    fn collect_variables_into(&self, vars: &mut BTreeSet<char>) {
        match self.node() {
            Node::Literal { name, .. } => {
                vars.insert(*name);
            }
            Node::Constant(_) => {}
            _ => {
                for child in self.node().children() {
                    child.collect_variables_into(vars);
                }
            }
        }
    }

    /// Evaluate the expression with a given variable assignment
    ///
    /// Variables missing from the assignment are treated as false.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_forms::BoolExpr;
    /// use std::collections::HashMap;
    ///
    /// let expr = BoolExpr::parse("ab+!c").unwrap();
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert('a', true);
    /// assignment.insert('b', true);
    /// assignment.insert('c', true);
    /// assert!(expr.evaluate(&assignment));
    ///
    /// assignment.insert('b', false);
    /// assert!(!expr.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<char, bool>) -> bool {
        match self.node() {
            Node::Literal { name, negated } => {
                assignment.get(name).copied().unwrap_or(false) != *negated
            }
            Node::Constant(value) => *value,
            Node::Not(child) => !child.evaluate(assignment),
            Node::And(operands) => operands.iter().all(|operand| operand.evaluate(assignment)),
            Node::Or(operands) => operands.iter().any(|operand| operand.evaluate(assignment)),
        }
    }

    /// Check if two boolean expressions are logically equivalent
    ///
    /// Compares the truth tables of both expressions over the union of their
    /// variables, so the cost is exponential in the number of distinct
    /// variables. Canonically equal trees short-circuit.
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_forms::BoolExpr;
    ///
    /// let lhs = BoolExpr::parse("a(b+c)").unwrap();
    /// let rhs = BoolExpr::parse("ab+ac").unwrap();
    ///
    /// // Different structures, same logic
    /// assert_ne!(lhs, rhs);
    /// assert!(lhs.equivalent_to(&rhs));
    /// ```
    pub fn equivalent_to(&self, other: &BoolExpr) -> bool {
        if self == other {
            return true;
        }

        let mut vars = self.collect_variables();
        vars.extend(other.collect_variables());
        let vars: Vec<char> = vars.into_iter().collect();

        let mut assignment = HashMap::with_capacity(vars.len());
        for row in 0u64..(1u64 << vars.len()) {
            for (i, var) in vars.iter().enumerate() {
                assignment.insert(*var, (row >> i) & 1 == 1);
            }
            if self.evaluate(&assignment) != other.evaluate(&assignment) {
                log::trace!("{} and {} differ at {:?}", self, other, assignment);
                return false;
            }
        }
        true
    }
}
