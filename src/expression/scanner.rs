//! Character cursor over an in-memory expression string

use std::fmt;

/// A significant character, or the end of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Char(char),
    End,
}

impl Symbol {
    pub fn is(self, c: char) -> bool {
        self == Symbol::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "'{}'", c),
            Symbol::End => write!(f, "end of input"),
        }
    }
}

/// Cursor with arbitrary lookahead that skips whitespace
///
/// The cursor always rests on a significant character (or the end), so
/// [`current`](Scanner::current) and [`peek`](Scanner::peek) never observe
/// whitespace. Lookahead only reads, it never moves the cursor.
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        let mut scanner = Scanner {
            chars: input.chars().collect(),
            pos: 0,
        };
        scanner.skip_whitespace();
        scanner
    }

    fn skip_whitespace(&mut self) {
        while self.chars.get(self.pos).is_some_and(|c| c.is_whitespace()) {
            self.pos += 1;
        }
    }

    /// The current significant character
    pub fn current(&self) -> Symbol {
        self.chars
            .get(self.pos)
            .map_or(Symbol::End, |&c| Symbol::Char(c))
    }

    /// The `n`-th significant character ahead of the cursor
    ///
    /// `peek(0)` is the current character.
    pub fn peek(&self, n: usize) -> Symbol {
        self.chars[self.pos..]
            .iter()
            .filter(|c| !c.is_whitespace())
            .nth(n)
            .map_or(Symbol::End, |&c| Symbol::Char(c))
    }

    /// Consume the current character
    pub fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
            self.skip_whitespace();
        }
    }

    /// Character index of the current significant character
    pub fn position(&self) -> usize {
        self.pos
    }
}
