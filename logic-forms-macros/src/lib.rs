use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// AST for boolean expressions written in Rust token syntax
enum Expr {
    Variable(Ident),
    Name(char),
    Constant(bool),
    Not(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

/// Infix connectives, each spelled two ways
#[derive(Clone, Copy)]
enum BinOp {
    And,
    Or,
}

impl BinOp {
    /// Operators at or above this level bind before the caller's operator
    fn precedence(self) -> u8 {
        match self {
            BinOp::Or => 1,
            BinOp::And => 2,
        }
    }

    /// The operator at the front of `input`, without consuming it
    fn peek(input: ParseStream) -> Option<BinOp> {
        if input.peek(Token![*]) || input.peek(Token![&]) {
            Some(BinOp::And)
        } else if input.peek(Token![+]) || input.peek(Token![|]) {
            Some(BinOp::Or)
        } else {
            None
        }
    }

    /// Consume the operator token peeked by [`BinOp::peek`]
    fn consume(self, input: ParseStream) -> Result<()> {
        match self {
            BinOp::And if input.peek(Token![*]) => input.parse::<Token![*]>().map(drop),
            BinOp::And => input.parse::<Token![&]>().map(drop),
            BinOp::Or if input.peek(Token![+]) => input.parse::<Token![+]>().map(drop),
            BinOp::Or => input.parse::<Token![|]>().map(drop),
        }
    }

    fn method(self) -> Ident {
        let name = match self {
            BinOp::And => "and",
            BinOp::Or => "or",
        };
        Ident::new(name, proc_macro2::Span::call_site())
    }
}

impl Expr {
    /// Emit calls to the borrowing `BoolExpr` constructors
    ///
    /// Identifiers in scope are borrowed, never moved.
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Expr::Variable(ident) => quote! { #ident },
            Expr::Name(name) => quote! { ::logic_forms::BoolExpr::variable(#name) },
            Expr::Constant(value) => quote! { ::logic_forms::BoolExpr::constant(#value) },
            Expr::Not(inner) => {
                let inner = inner.to_tokens();
                quote! { ::logic_forms::BoolExpr::not(&(#inner)) }
            }
            Expr::Binary(op, left, right) => {
                let method = op.method();
                let (left, right) = (left.to_tokens(), right.to_tokens());
                quote! { ::logic_forms::BoolExpr::#method(&(#left), &(#right)) }
            }
        }
    }
}

struct ExprInput(Expr);

impl Parse for ExprInput {
    fn parse(input: ParseStream) -> Result<Self> {
        parse_binary(input, 0).map(ExprInput)
    }
}

/// Precedence climbing over the infix operators
///
/// Operands are unary expressions; an operator is folded in only while it
/// binds tighter than `min_precedence`, which keeps both connectives
/// left-associative.
fn parse_binary(input: ParseStream, min_precedence: u8) -> Result<Expr> {
    let mut left = parse_unary(input)?;
    while let Some(op) = BinOp::peek(input) {
        if op.precedence() <= min_precedence {
            break;
        }
        op.consume(input)?;
        let right = parse_binary(input, op.precedence())?;
        left = Expr::Binary(op, Box::new(left), Box::new(right));
    }
    Ok(left)
}

/// `!` and `~` both negate and bind tightest
fn parse_unary(input: ParseStream) -> Result<Expr> {
    let negated = if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        true
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
        true
    } else {
        false
    };

    if negated {
        Ok(Expr::Not(Box::new(parse_unary(input)?)))
    } else {
        parse_atom(input)
    }
}

/// Single-character variable name taken from a string literal
fn single_char(lit: &syn::LitStr) -> Result<char> {
    let value = lit.value();
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() && c != '0' && c != '1' => Ok(c),
        _ => Err(syn::Error::new(
            lit.span(),
            "variable names are a single letter or a digit other than 0 and 1",
        )),
    }
}

/// Parse atoms: identifiers, char/string names, 0/1 and parenthesized expressions
fn parse_atom(input: ParseStream) -> Result<Expr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        parse_binary(&content, 0)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        Ok(Expr::Name(single_char(&lit)?))
    } else if input.peek(syn::LitChar) {
        let lit: syn::LitChar = input.parse()?;
        let as_str = syn::LitStr::new(&lit.value().to_string(), lit.span());
        Ok(Expr::Name(single_char(&as_str)?))
    } else if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        let value: u8 = lit.base10_parse()?;
        match value {
            0 => Ok(Expr::Constant(false)),
            1 => Ok(Expr::Constant(true)),
            _ => Err(syn::Error::new(
                lit.span(),
                "only 0 and 1 are supported as boolean constants",
            )),
        }
    } else {
        let ident: Ident = input.parse()?;
        Ok(Expr::Variable(ident))
    }
}

/// The `expr!` procedural macro for boolean expressions
///
/// Builds a `logic_forms::BoolExpr` from Rust operator syntax. Every
/// intermediate result goes through the canonical constructors, so the
/// value is flattened and deduplicated exactly like a parsed expression.
///
/// # Supported Syntax
///
/// - `a` - any `BoolExpr` identifier in scope
/// - `'a'` or `"a"` - a variable with that single-character name
/// - `0` / `1` - constants
/// - `!a` or `~a` - NOT
/// - `a * b` or `a & b` - AND
/// - `a + b` or `a | b` - OR
/// - `(a + b) * c` - grouping
///
/// # Examples
///
/// ```ignore
/// use logic_forms::{expr, BoolExpr};
///
/// let xor = expr!('a' * !'b' + !'a' * 'b');
///
/// let a = BoolExpr::variable('a');
/// let b = BoolExpr::variable('b');
/// let both = expr!(a * b + 0);
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let ExprInput(expr) = parse_macro_input!(input as ExprInput);
    TokenStream::from(expr.to_tokens())
}
