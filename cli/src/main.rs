#![deny(clippy::pedantic)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_derive::Args;
use clio::{Input, Output};
use log::debug;
use trapsort_cli::cli_benches::benches::BenchArgs;
use trapsort_cli::runner::{load_runtime_arguments, write_trace, write_words};
use trapsort_core_types::constants::DEFAULT_ARENA_WORDS;
use trapsort_runner::state::State;
use trapsort_runner::vm::step;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// Input tape: whitespace separated words answered to read traps, the
    /// first of which is the element count
    input: Input,
    /// Words answered to random traps, in order
    #[arg(long, conflicts_with = "seed")]
    random_tape: Option<Input>,
    /// Seed for the host's random generator when no random tape is given
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Size of the guest's arena in words
    #[arg(long, default_value_t = DEFAULT_ARENA_WORDS)]
    arena_words: usize,
    /// Where to write the guest's output words
    #[arg(short, long, default_value = "-")]
    output: Output,
    /// Write every executed trap as JSON
    #[arg(long)]
    trace: Option<Output>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run the sort guest natively against the given tapes and print what it
    /// writes
    Run(RunArgs),
    /// Bench the function with given parameters
    Bench(BenchArgs),
}

/// Run me eg like `echo 5 | cargo run -- -vvv run - --seed 7`
fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    match cli.command {
        Command::Run(RunArgs {
            input,
            random_tape,
            seed,
            arena_words,
            output,
            trace,
        }) => {
            let args = load_runtime_arguments(input, random_tape, seed)?;
            let record = step(State::from(args), arena_words)?;
            write_words(output, record.output())?;
            if let Some(trace) = trace {
                write_trace(trace, &record)?;
            }
            debug!("{:?}", record.summary);
        }
        Command::Bench(bench) => {
            let mean = bench.run()?;
            println!("{mean:?}");
        }
    }
    Ok(())
}
