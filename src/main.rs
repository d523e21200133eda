//! approx-sqrt CLI
//!
//! Approximates a square root by successive averaging and prints it.
//!
//! ```text
//! approx-sqrt 100 --verbose
//! 50
//! 26
//! ...
//! 10
//! ```
//!
//! With `--verbose` every intermediate guess is printed on stdout, one per
//! line, before the result. Logs go to stderr.

use anyhow::{Context, Result};
use approx_sqrt::sqrt::decimal::decimal_sqrt_cb;
use approx_sqrt::{Control, GuessStep, Real, SqrtOptions, Tolerance, newton_sqrt_cb};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Approximate a square root with Newton's method
#[derive(Parser, Debug)]
#[command(name = "approx-sqrt")]
#[command(version)]
#[command(about = "Approximate a square root by successive averaging")]
struct Cli {
    /// Radicand
    #[arg(allow_negative_numbers = true)]
    n: String,

    /// Print each intermediate guess before the result
    #[arg(short, long)]
    verbose: bool,

    /// Relative tolerance for successive guesses (defaults to 1e-9)
    #[arg(long)]
    rel_tol: Option<String>,

    /// Absolute tolerance for successive guesses
    #[arg(long)]
    abs_tol: Option<String>,

    /// Maximum number of iterations
    #[arg(long, default_value_t = approx_sqrt::sqrt::DEFAULT_MAX_ITER)]
    max_iter: usize,

    /// Use 28-digit decimal arithmetic instead of f64
    #[arg(long)]
    decimal: bool,

    /// Log filter (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.log.as_deref() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    if cli.decimal {
        run::<Decimal>(&cli, parse_decimal, |n, options, cb| {
            decimal_sqrt_cb(n, options, cb)
        })
    } else {
        run::<f64>(&cli, parse_f64, |n, options, cb| newton_sqrt_cb(n, options, cb))
    }
}

type Solver<T> = fn(
    T,
    &SqrtOptions<T>,
    &mut dyn FnMut(&GuessStep<T>) -> Control,
) -> approx_sqrt::SqrtResult<approx_sqrt::RootResult<T>>;

fn run<T: Real>(cli: &Cli, parse: fn(&str) -> Result<T>, solve: Solver<T>) -> Result<()> {
    let n = parse(&cli.n).with_context(|| format!("invalid radicand '{}'", cli.n))?;
    let options = build_options(cli, parse)?;
    info!(n = %n, max_iter = options.max_iter, "solving");

    let verbose = cli.verbose;
    let mut print_guess = |step: &GuessStep<T>| {
        if verbose {
            println!("{}", step.guess);
        }
        Control::Continue
    };

    let result = solve(n, &options, &mut print_guess)
        .with_context(|| format!("could not approximate sqrt({})", n))?;
    info!(iterations = result.iterations, "done");
    println!("{}", result.root);
    Ok(())
}

fn build_options<T: Real>(cli: &Cli, parse: fn(&str) -> Result<T>) -> Result<SqrtOptions<T>> {
    let defaults = Tolerance::<T>::default();
    let rel_tol = match cli.rel_tol.as_deref() {
        Some(s) => parse(s).context("invalid --rel-tol")?,
        None => defaults.rel_tol,
    };
    let abs_tol = match cli.abs_tol.as_deref() {
        Some(s) => parse(s).context("invalid --abs-tol")?,
        None => defaults.abs_tol,
    };
    let options = SqrtOptions::default()
        .with_max_iter(cli.max_iter)
        .with_tolerance(Tolerance::new(rel_tol, abs_tol)?);
    options.validate()?;
    Ok(options)
}

fn parse_f64(s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .with_context(|| format!("'{}' is not a number", s))
}

fn parse_decimal(s: &str) -> Result<Decimal> {
    let s = s.trim();
    // Accept exponent notation the way f64 parsing does
    let parsed = if s.contains(['e', 'E']) {
        Decimal::from_scientific(s)
    } else {
        s.parse::<Decimal>()
    };
    parsed.with_context(|| format!("'{}' is not a decimal number", s))
}
