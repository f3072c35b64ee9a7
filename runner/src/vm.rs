use anyhow::{Context, Result};
use itertools::Itertools;
use trapsort_core_types::Word;
use trapsort_sdk::pipeline::{self, RunSummary};

use crate::ecall::TrapEntry;
use crate::native::NativeHost;
use crate::state::State;

/// Trace of a native run.
#[derive(Debug)]
pub struct ExecutionRecord {
    /// Every trap the guest issued, in order.
    pub executed: Vec<TrapEntry>,
    /// Host state after the last trap.
    pub last_state: State,
    pub summary: RunSummary,
}

impl ExecutionRecord {
    /// The words the guest wrote.
    #[must_use]
    pub fn output(&self) -> &[Word] { &self.last_state.output_tape }
}

/// Runs the sort pipeline natively against `state`, giving it a fresh arena
/// of `arena_words` words.
///
/// # Errors
/// This function returns an error if the guest rejects its input: a negative
/// count, or a count that does not fit into the arena.
///
/// # Panics
/// Panics when the guest asks for more input or replayed random words than
/// the host's tapes hold.
pub fn step(state: State, arena_words: usize) -> Result<ExecutionRecord> {
    let mut host = NativeHost::from(state);
    let mut backing: Vec<Word> = vec![0; arena_words];
    let summary = pipeline::run(&mut host, &mut backing)
        .with_context(|| format!("guest failed after {} traps", host.executed.len()))?;
    let NativeHost {
        state: last_state,
        executed,
    } = host;
    log::debug!(
        "guest wrote {} words using {} of {arena_words} arena words",
        summary.written,
        summary.arena_used
    );

    if option_env!("TRAPSORT_COUNT_TRAPS").is_some() {
        println!("Trap counts:");
        let total = executed.len();
        println!("{total:10} total");
        for (count, op) in executed
            .iter()
            .map(|entry| entry.op)
            .sorted()
            .dedup_with_count()
        {
            println!("{count:10} {op}");
        }
    }
    Ok(ExecutionRecord {
        executed,
        last_state,
        summary,
    })
}
