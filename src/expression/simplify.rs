//! Fixpoint driver chaining the rewrite passes
//!
//! The driver normalizes negations once and then iterates
//! distribute → reduce → factor → reduce until the tree stops changing.
//! Because factoring is a heuristic, "stops changing" is measured over a
//! window: every change resets a bound of `depth + 1` iterations, every
//! unchanged iteration consumes one, and the tree is declared stable when
//! the bound runs out. A hard iteration cap guards against oscillation.

use super::ast::Op;
use super::BoolExpr;
use crate::SimplifyConfig;
use std::fmt;

/// Normal form the driver distributes to on every iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NormalForm {
    /// Sum of products (OR of AND-clauses)
    #[default]
    Dnf,
    /// Product of sums (AND of OR-clauses)
    Cnf,
}

impl NormalForm {
    /// Top-level operator of the normal form
    pub(crate) fn outer(self) -> Op {
        match self {
            NormalForm::Dnf => Op::Or,
            NormalForm::Cnf => Op::And,
        }
    }
}

/// Driver state machine: `Parsed → NegationNormalized → Converging → Stable`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Parsed,
    NegationNormalized,
    Converging,
    Stable,
}

/// Result of a simplification run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simplification {
    /// The final canonical tree
    pub expr: BoolExpr,
    /// Number of full distribute/reduce/factor iterations performed
    pub iterations: usize,
    /// Stage the driver stopped in
    pub stage: Stage,
}

impl Simplification {
    /// Whether the fixpoint was reached before the iteration cap
    pub fn converged(&self) -> bool {
        self.stage == Stage::Stable
    }

    /// Take the final tree
    pub fn into_expr(self) -> BoolExpr {
        self.expr
    }
}

/// Renders the final tree in the input grammar
impl fmt::Display for Simplification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)
    }
}

impl BoolExpr {
    /// Simplify with the default configuration (DNF, factoring enabled)
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_forms::BoolExpr;
    ///
    /// let result = BoolExpr::parse("ab+a!b").unwrap().simplify();
    /// assert!(result.converged());
    /// assert_eq!(result.to_string(), "a");
    /// ```
    pub fn simplify(&self) -> Simplification {
        self.simplify_with_config(&SimplifyConfig::default())
    }

    /// Simplify with an explicit configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_forms::{BoolExpr, NormalForm, SimplifyConfig};
    ///
    /// let config = SimplifyConfig::new()
    ///     .with_form(NormalForm::Cnf)
    ///     .with_factoring(false);
    /// let result = BoolExpr::parse("ab+c").unwrap().simplify_with_config(&config);
    /// assert_eq!(result.to_string(), "(a+c)(b+c)");
    /// ```
    pub fn simplify_with_config(&self, config: &SimplifyConfig) -> Simplification {
        log::debug!("simplifying {} with {:?}", self, config);

        let mut current = self.normalize_negations();
        let mut stage = Stage::NegationNormalized;
        log::debug!("negation normal form: {}", current);

        let mut remaining = current.depth() + 1;
        let mut iterations = 0;
        while iterations < config.max_iterations {
            stage = Stage::Converging;
            let next = current.simplify_step(config);
            iterations += 1;

            if next == current {
                remaining -= 1;
                log::debug!(
                    "iteration {}: unchanged, {} left in window",
                    iterations,
                    remaining
                );
                if remaining == 0 {
                    stage = Stage::Stable;
                    break;
                }
            } else {
                remaining = next.depth() + 1;
                log::debug!("iteration {}: {}", iterations, next);
                current = next;
            }
        }

        if stage != Stage::Stable {
            log::warn!(
                "stopped after {} iterations without reaching a fixpoint",
                iterations
            );
        }

        Simplification {
            expr: current,
            iterations,
            stage,
        }
    }

    /// One driver iteration on a negation-normal tree
    fn simplify_step(&self, config: &SimplifyConfig) -> BoolExpr {
        let distributed = self.to_normal_form(config.form.outer()).reduce();
        if config.factor {
            distributed.factor().reduce()
        } else {
            distributed
        }
    }
}
