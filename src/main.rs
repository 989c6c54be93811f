#[cfg_attr(not(any(feature = "tui", feature = "line")), allow(dead_code))]
mod commands;
#[cfg(feature = "line")]
mod line_mode;
#[cfg(feature = "tui")]
mod render_help;
mod repl;
#[cfg(feature = "tui")]
mod tui_mode;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use intcalc::calc_engine::{evaluate_traced, EvaluationTrace};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Read one expression per line from stdin.
    Plain,
    /// Raw-terminal line editor with history.
    Line,
    /// Full-screen terminal interface.
    Tui,
}

impl Default for Mode {
    fn default() -> Self {
        if cfg!(feature = "tui") {
            Mode::Tui
        } else if cfg!(feature = "line") {
            Mode::Line
        } else {
            Mode::Plain
        }
    }
}

/// Integer arithmetic calculator: + - * / and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Interactive front-end to start when no expression is given.
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Print each reduced operation after the result.
    #[arg(short, long)]
    details: bool,

    /// Evaluate this expression once and exit.
    expression: Option<String>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Some(expression) = args.expression {
        let code = if evaluate_once(&expression, args.details) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
        return Ok(code);
    }

    match args.mode.unwrap_or_default() {
        Mode::Plain => {
            let stdin = io::stdin();
            repl::run_plain(stdin.lock(), &mut io::stdout(), &mut io::stderr())?;
        }
        Mode::Line => run_line()?,
        Mode::Tui => run_tui()?,
    }

    Ok(ExitCode::SUCCESS)
}

/// Prints the result (or the error) of a single expression; true on success.
fn evaluate_once(expression: &str, details: bool) -> bool {
    let mut trace = EvaluationTrace::new(details);
    match evaluate_traced(expression, &mut trace) {
        Ok(value) => {
            println!("{}", value);
            for (i, step) in trace.steps.iter().enumerate() {
                println!("  Step {}: {} = {}", i + 1, step.operation, step.result);
            }
            true
        }
        Err(e) => {
            eprintln!("{}", e);
            false
        }
    }
}

#[cfg(feature = "line")]
fn run_line() -> Result<()> {
    line_mode::run_line()
}

#[cfg(not(feature = "line"))]
fn run_line() -> Result<()> {
    anyhow::bail!("line mode is not available: rebuild with `--features line`")
}

#[cfg(feature = "tui")]
fn run_tui() -> Result<()> {
    tui_mode::run_tui()
}

#[cfg(not(feature = "tui"))]
fn run_tui() -> Result<()> {
    anyhow::bail!("tui mode is not available: rebuild with `--features tui`")
}
