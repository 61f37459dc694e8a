use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use forward_list::script::{Interpreter, ScriptOptions, ScriptReport};
use forward_list::ForwardList;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flist", about = "Drive a singly-linked list with list commands")]
struct Cli {
    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Print the list after every command.
    #[arg(long, global = true)]
    trace_steps: bool,
    /// Log failing commands and continue instead of aborting.
    #[arg(long, global = true)]
    keep_going: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a list from values and apply inline operations.
    Apply {
        /// Initial list contents.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
        /// Operation to apply, e.g. `-o "sort desc"` (repeatable, applied in order).
        #[arg(short = 'o', long = "op")]
        ops: Vec<String>,
    },
    /// Run operations from a script file (one per line, `#` comments).
    Script {
        /// Script file.
        file: PathBuf,
        /// Initial list contents.
        #[arg(long, num_args = 0.., allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut options = ScriptOptions::default().with_trace_steps(cli.run.trace_steps);
    if cli.run.keep_going {
        options = options.keep_going();
    }

    match cli.command {
        Commands::Apply { values, ops } => run_apply(values, ops, options)?,
        Commands::Script { file, values } => run_script(file, values, options)?,
    }

    Ok(())
}

fn run_apply(values: Vec<i64>, ops: Vec<String>, options: ScriptOptions) -> Result<()> {
    let mut interpreter = Interpreter::new(ForwardList::from(values), options);
    let report = interpreter
        .run_lines(ops.iter().map(String::as_str))
        .context("operation failed")?;

    print_report(&report);
    print_list(interpreter.list());
    Ok(())
}

fn run_script(file: PathBuf, values: Vec<i64>, options: ScriptOptions) -> Result<()> {
    let script = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read script {}", file.display()))?;

    let mut interpreter = Interpreter::new(ForwardList::from(values), options);
    let report = interpreter
        .run_script(&script)
        .with_context(|| format!("script {} failed", file.display()))?;

    print_report(&report);
    print_list(interpreter.list());
    Ok(())
}

fn print_report(report: &ScriptReport) {
    for step in &report.steps {
        if let Some(snapshot) = &step.snapshot {
            println!("{}\t{}\t{}\t{:?}", step.line, step.command, step.outcome, snapshot);
        }
    }
    for failure in &report.failures {
        eprintln!("error: {}", failure);
    }
}

fn print_list(list: &ForwardList<i64>) {
    let rendered: Vec<String> = list.iter().map(|v| v.to_string()).collect();
    println!("[{}]\tlen={}", rendered.join(", "), list.len());
}
