//! Parsing support for boolean expressions
//!
//! Grammar (juxtaposition is AND, `+` is OR, `!` is NOT):
//!
//! ```text
//! literal  := '!'? (letter | digit)
//! negation := '!' '(' expr ')'
//! group    := '(' expr ')'
//! product  := (negation | group | literal)+
//! expr     := product ('+' product)*
//! ```
//!
//! `0` and `1` are the constants. Whitespace may appear between any two
//! tokens. Every AND/OR is assembled with the reducing builder, so the parser
//! returns an already flattened, canonical tree.

use super::ast::{Op, OperandsBuilder};
use super::error::ExpressionParseError;
use super::scanner::{Scanner, Symbol};
use super::BoolExpr;
use std::str::FromStr;
use std::sync::Arc;

fn is_operand_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn in_alphabet(c: char) -> bool {
    is_operand_char(c) || matches!(c, '!' | '+' | '(' | ')') || c.is_whitespace()
}

/// Recursive-descent parser owning its cursor
struct Parser {
    scanner: Scanner,
    input: Arc<str>,
}

impl Parser {
    fn new(input: &str) -> Self {
        Parser {
            scanner: Scanner::new(input),
            input: Arc::from(input),
        }
    }

    /// Error for the current symbol
    ///
    /// Characters outside the alphabet are reported as such regardless of
    /// what the grammar wanted.
    fn unexpected(&self, expected: &'static str) -> ExpressionParseError {
        let found = self.scanner.current();
        let position = self.scanner.position();
        match found {
            Symbol::Char(character) if !in_alphabet(character) => {
                ExpressionParseError::UnexpectedCharacter {
                    character,
                    position,
                    input: Arc::clone(&self.input),
                }
            }
            _ => ExpressionParseError::InvalidSyntax {
                expected,
                found,
                position,
                input: Arc::clone(&self.input),
            },
        }
    }

    fn expect(&mut self, c: char, expected: &'static str) -> Result<(), ExpressionParseError> {
        if self.scanner.current().is(c) {
            self.scanner.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn starts_factor(&self) -> bool {
        match self.scanner.current() {
            Symbol::Char(c) => c == '!' || c == '(' || is_operand_char(c),
            Symbol::End => false,
        }
    }

    /// `expr := product ('+' product)*`
    fn expr(&mut self) -> Result<BoolExpr, ExpressionParseError> {
        let mut sum = OperandsBuilder::new(Op::Or);
        sum.push(self.product()?);
        while self.scanner.current().is('+') {
            self.scanner.advance();
            sum.push(self.product()?);
        }
        Ok(sum.build())
    }

    /// `product := (negation | group | literal)+`
    fn product(&mut self) -> Result<BoolExpr, ExpressionParseError> {
        if !self.starts_factor() {
            return Err(self.unexpected("an operand"));
        }
        let mut product = OperandsBuilder::new(Op::And);
        while self.starts_factor() {
            product.push(self.factor()?);
        }
        match self.scanner.current() {
            Symbol::End | Symbol::Char('+') | Symbol::Char(')') => Ok(product.build()),
            Symbol::Char(_) => Err(self.unexpected("an operand, '+' or ')'")),
        }
    }

    fn factor(&mut self) -> Result<BoolExpr, ExpressionParseError> {
        match self.scanner.current() {
            Symbol::Char('!') if self.scanner.peek(1).is('(') => self.negation(),
            Symbol::Char('(') => self.group(),
            _ => self.literal(),
        }
    }

    /// `negation := '!' '(' expr ')'`
    fn negation(&mut self) -> Result<BoolExpr, ExpressionParseError> {
        self.expect('!', "'!'")?;
        self.expect('(', "'('")?;
        let inner = self.expr()?;
        self.expect(')', "')'")?;
        Ok(inner.not())
    }

    /// `group := '(' expr ')'`
    fn group(&mut self) -> Result<BoolExpr, ExpressionParseError> {
        self.expect('(', "'('")?;
        let inner = self.expr()?;
        self.expect(')', "')'")?;
        Ok(inner)
    }

    /// `literal := '!'? (letter | digit)`
    fn literal(&mut self) -> Result<BoolExpr, ExpressionParseError> {
        let negated = self.scanner.current().is('!');
        if negated {
            self.scanner.advance();
        }
        let name = match self.scanner.current() {
            Symbol::Char(c) if is_operand_char(c) => c,
            _ => return Err(self.unexpected("a variable or constant")),
        };
        self.scanner.advance();
        Ok(match name {
            '0' => BoolExpr::constant(negated),
            '1' => BoolExpr::constant(!negated),
            _ => BoolExpr::literal(name, negated),
        })
    }

    fn parse(mut self) -> Result<BoolExpr, ExpressionParseError> {
        let expr = self.expr()?;
        if self.scanner.current() != Symbol::End {
            return Err(self.unexpected("end of input"));
        }
        Ok(expr)
    }
}

impl BoolExpr {
    /// Parse a boolean expression from a string
    ///
    /// Supports:
    /// - juxtaposition for AND: `ab`, `a(b+c)`
    /// - `+` for OR
    /// - `!` for NOT, on a literal (`!a`) or a parenthesized group (`!(a+b)`)
    /// - constants `0` and `1`
    ///
    /// # Examples
    ///
    /// ```
    /// use logic_forms::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("ab + c").unwrap();
    /// assert_eq!(expr.to_string(), "ab+c");
    ///
    /// assert!(BoolExpr::parse("a*b").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ExpressionParseError> {
        let result = Parser::new(input).parse();
        match &result {
            Ok(expr) => log::trace!("parsed {:?} as {}", input, expr),
            Err(e) => log::debug!("parse failed: {}", e),
        }
        result
    }
}

impl FromStr for BoolExpr {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoolExpr::parse(s)
    }
}
