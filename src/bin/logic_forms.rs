//! Logic Forms - Command Line Interface
//!
//! Parses one boolean expression, rewrites it and prints the result in the
//! same notation.

use clap::{Parser, ValueEnum};
use logic_forms::{BoolExpr, LogicError, NormalForm, SimplifyConfig};
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Run the fixpoint driver: distribute, reduce and factor (default)
    Simplify,
    /// Convert to conjunctive normal form
    Cnf,
    /// Convert to disjunctive normal form
    Dnf,
    /// Convert to CNF, or to DNF when the input already is CNF
    Auto,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Form {
    /// Sum of products
    Dnf,
    /// Product of sums
    Cnf,
}

impl From<Form> for NormalForm {
    fn from(val: Form) -> Self {
        match val {
            Form::Dnf => NormalForm::Dnf,
            Form::Cnf => NormalForm::Cnf,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "logic-forms")]
#[command(about = "Boolean expression normal forms and simplification", long_about = None)]
#[command(version)]
struct Args {
    /// Expression to rewrite, e.g. "a(b+c)+!(ab)"
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// Rewrite to perform
    #[arg(short = 'm', long = "mode", value_enum, default_value = "simplify")]
    mode: Mode,

    /// Normal form used by the simplify mode
    #[arg(short = 'f', long = "form", value_enum, default_value = "dnf")]
    form: Form,

    /// Print the tree dump of the parsed and of the final expression
    #[arg(short = 't', long = "tree")]
    tree: bool,

    /// Iteration cap for the simplify mode
    #[arg(long = "max-iterations", default_value_t = SimplifyConfig::default().max_iterations)]
    max_iterations: usize,

    /// Skip the factoring step in the simplify mode
    #[arg(long = "no-factor")]
    no_factor: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    if let Err(e) = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialise logging: {}", e);
    }
}

fn run(args: &Args) -> Result<BoolExpr, LogicError> {
    let input = match args.expression.as_deref().map(str::trim) {
        Some(input) if !input.is_empty() => input,
        _ => return Err(LogicError::usage("an expression is required")),
    };

    let expr = BoolExpr::parse(input)?;
    if args.tree {
        eprint!("{}", expr.tree());
    }

    let result = match args.mode {
        Mode::Simplify => {
            let config = SimplifyConfig::new()
                .with_form(args.form.into())
                .with_max_iterations(args.max_iterations)
                .with_factoring(!args.no_factor);
            let simplification = expr.simplify_with_config(&config);
            log::info!(
                "{} iterations, stopped in {:?}",
                simplification.iterations,
                simplification.stage
            );
            simplification.into_expr()
        }
        Mode::Cnf => expr.to_cnf(),
        Mode::Dnf => expr.to_dnf(),
        Mode::Auto if expr.is_cnf() => {
            log::info!("input is already in CNF, converting to DNF");
            expr.to_dnf()
        }
        Mode::Auto => expr.to_cnf(),
    };

    if args.tree {
        eprint!("{}", result.tree());
    }
    Ok(result)
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(result) => println!("{}", result),
        Err(e @ LogicError::Usage { .. }) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: logic-forms [OPTIONS] <EXPRESSION>");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
