use std::time::Duration;

use clap::{Args as Args_, Subcommand};

use super::sort::sort_bench;

#[derive(Debug, Args_, Clone)]
#[command(args_conflicts_with_subcommands = true)]
pub struct BenchArgs {
    #[command(subcommand)]
    pub function: BenchFunction,
}

#[derive(PartialEq, Debug, Subcommand, Clone)]
pub enum BenchFunction {
    /// Sort `n` seeded random words, `iterations` times over
    SortBench {
        n: u32,
        #[arg(long, default_value_t = 0xdead_beef_feed_cafe)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        iterations: u32,
    },
}

impl BenchArgs {
    /// Runs the selected benchmark and returns the mean time per run.
    ///
    /// # Errors
    ///
    /// Errors if a run fails.
    pub fn run(&self) -> Result<Duration, anyhow::Error> {
        match self.function {
            BenchFunction::SortBench {
                n,
                seed,
                iterations,
            } => sort_bench(n, seed, iterations),
        }
    }
}
