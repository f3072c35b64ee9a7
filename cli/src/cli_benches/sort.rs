use std::time::{Duration, Instant};

use anyhow::ensure;
use log::info;
use trapsort_runner::state::{RuntimeArguments, State};
use trapsort_runner::vm::step;

pub fn sort_bench(n: u32, seed: u64, iterations: u32) -> Result<Duration, anyhow::Error> {
    ensure!(iterations > 0, "need at least one iteration");
    let arena_words = usize::try_from(n)?;
    let start = Instant::now();
    for _ in 0..iterations {
        let state = State::from(RuntimeArguments::with_seed(n.into(), seed));
        let record = step(state, arena_words)?;
        ensure!(record.summary.written == arena_words, "short output");
    }
    let mean = start.elapsed() / iterations;
    info!("sort of {n} words: {mean:?} per run over {iterations} runs");
    Ok(mean)
}

#[cfg(test)]
mod tests {
    use crate::cli_benches::benches::{BenchArgs, BenchFunction};

    #[test]
    fn test_sort_bench_with_run() {
        let bench = BenchArgs {
            function: BenchFunction::SortBench {
                n: 10,
                seed: 0,
                iterations: 2,
            },
        };
        bench.run().unwrap();
    }

    #[test]
    fn test_sort_bench_without_iterations() {
        let bench = BenchArgs {
            function: BenchFunction::SortBench {
                n: 10,
                seed: 0,
                iterations: 0,
            },
        };
        assert!(bench.run().is_err());
    }
}
