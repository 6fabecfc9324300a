//! # Logic Forms
//!
//! This crate parses propositional boolean expressions into canonical trees
//! and rewrites them symbolically: negation push-down (De Morgan), CNF/DNF
//! distribution with absorption, algebraic reduction and factoring.
//!
//! ## Overview
//!
//! Expressions use a compact notation: juxtaposition is AND, `+` is OR and
//! `!` is NOT. Variables are single letters or digits, `0` and `1` are the
//! constants:
//!
//! ```text
//! ab + !c        (a AND b) OR (NOT c)
//! a(b + c)       a AND (b OR c)
//! !(a + b)c      NOT (a OR b) AND c
//! ```
//!
//! Every tree is canonical: operands of AND/OR are flattened, deduplicated
//! and kept in a fixed order, so structurally equal expressions compare
//! equal regardless of how they were written.
//!
//! ## Three Ways to Build Expressions
//!
//! Parse them from strings:
//!
//! ```
//! use logic_forms::BoolExpr;
//!
//! # fn main() -> Result<(), logic_forms::ExpressionParseError> {
//! let expr = BoolExpr::parse("ba + c")?;
//! assert_eq!(expr.to_string(), "ab+c");
//! # Ok(())
//! # }
//! ```
//!
//! Build them with methods or operators:
//!
//! ```
//! use logic_forms::BoolExpr;
//!
//! let a = BoolExpr::variable('a');
//! let b = BoolExpr::variable('b');
//! let c = BoolExpr::variable('c');
//!
//! let with_methods = a.and(&b).or(&c);
//! let with_operators = &a * &b + c.clone();
//! assert_eq!(with_methods, with_operators);
//! ```
//!
//! Or use the `expr!` macro:
//!
//! ```
//! use logic_forms::{expr, BoolExpr};
//!
//! let a = BoolExpr::variable('a');
//! let b = BoolExpr::variable('b');
//!
//! let xor = expr!(a * !b + !a * b);
//! assert_eq!(xor.to_string(), "!ab+a!b");
//!
//! // Character literals create variables in place
//! let same = expr!('a' * !'b' + !'a' * 'b');
//! assert_eq!(xor, same);
//! ```
//!
//! ## Rewrites
//!
//! Each pass is a pure function from tree to tree; unchanged subtrees are
//! shared rather than copied.
//!
//! ```
//! use logic_forms::BoolExpr;
//!
//! # fn main() -> Result<(), logic_forms::ExpressionParseError> {
//! let expr = BoolExpr::parse("!(a + b)c")?;
//! assert_eq!(expr.normalize_negations().to_string(), "!a!bc");
//!
//! let expr = BoolExpr::parse("ab + c")?;
//! assert_eq!(expr.to_cnf().to_string(), "(a+c)(b+c)");
//! assert_eq!(expr.to_cnf().to_dnf(), expr);
//!
//! assert_eq!(BoolExpr::parse("a + !a")?.reduce().to_string(), "1");
//! assert_eq!(BoolExpr::parse("ab + ac")?.factor().to_string(), "a(b+c)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Simplification
//!
//! [`BoolExpr::simplify`] chains the passes until the tree reaches a
//! fixpoint. [`SimplifyConfig`] selects the normal form, the iteration cap
//! and whether factoring runs.
//!
//! ```
//! use logic_forms::{BoolExpr, NormalForm, SimplifyConfig};
//!
//! # fn main() -> Result<(), logic_forms::ExpressionParseError> {
//! let expr = BoolExpr::parse("ab + a!b + ac")?;
//!
//! let result = expr.simplify();
//! assert!(result.converged());
//! assert_eq!(result.to_string(), "a");
//!
//! let config = SimplifyConfig::new()
//!     .with_form(NormalForm::Cnf)
//!     .with_max_iterations(16);
//! let original = BoolExpr::parse("ab + c")?;
//! let result = original.simplify_with_config(&config);
//! assert!(original.equivalent_to(&result.expr));
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `debug!` for pass entry and
//! driver iterations, `trace!` for individual rewrites. No logger is
//! installed by the library; the `logic-forms` binary (feature `cli`)
//! installs a terminal logger controlled by `-v`.

// Lets the `expr!` macro refer to `::logic_forms` from inside this crate
extern crate self as logic_forms;

// Public modules
pub mod error;
pub mod expression;

// Re-export high-level public API
pub use error::LogicError;
pub use expression::{
    BoolExpr, ExpressionParseError, Node, NormalForm, Op, Simplification, Stage,
};
pub use logic_forms_macros::expr;

/// Configuration for the simplification driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifyConfig {
    /// Normal form distributed to on every iteration
    pub form: NormalForm,
    /// Hard cap on driver iterations
    pub max_iterations: usize,
    /// Run the factoring step after distribution
    pub factor: bool,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        SimplifyConfig {
            form: NormalForm::Dnf,
            max_iterations: 64,
            factor: true,
        }
    }
}

impl SimplifyConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given normal form
    pub fn with_form(mut self, form: NormalForm) -> Self {
        self.form = form;
        self
    }

    /// Cap the number of driver iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Enable or disable factoring
    pub fn with_factoring(mut self, factor: bool) -> Self {
        self.factor = factor;
        self
    }
}
