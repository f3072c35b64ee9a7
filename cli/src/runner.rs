//! Utility functions that help the CLI feed tapes into, and read results
//! out of, the [trapsort runner crate](trapsort_runner).
use std::io::{Read, Write};

use anyhow::{bail, ensure, Context, Result};
use clio::{Input, Output};
use itertools::Itertools;
use log::debug;
use trapsort_core_types::Word;
use trapsort_runner::state::{RandomArguments, RuntimeArguments};
use trapsort_runner::vm::ExecutionRecord;

/// Parses whitespace separated decimal words.
///
/// # Errors
///
/// Errors on the first token that is not a valid word, naming it and its
/// position.
pub fn parse_words(text: &str) -> Result<Vec<Word>> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<Word>()
                .with_context(|| format!("invalid word {token:?} at position {position}"))
        })
        .collect()
}

/// Reads a whole tape from `input`.
///
/// # Errors
///
/// Errors if reading fails or the contents do not parse as words.
pub fn read_words(mut input: impl Read) -> Result<Vec<Word>> {
    let mut text = String::new();
    let bytes_read = input.read_to_string(&mut text)?;
    debug!("Read {bytes_read} bytes of tape data.");
    parse_words(&text)
}

/// Checks that the tapes can answer every trap a run asks for: the input
/// tape must hold the count, and a replayed random tape at least that many
/// words. A negative count is left for the guest to reject.
///
/// # Errors
///
/// Errors if either tape would run dry during the run.
pub fn check_tapes(args: &RuntimeArguments) -> Result<()> {
    let Some(&count) = args.input_tape.first() else {
        bail!("input tape is empty, expected the element count as its first word");
    };
    if let (RandomArguments::Tape(randoms), Ok(needed)) = (&args.random, usize::try_from(count)) {
        ensure!(
            randoms.len() >= needed,
            "random tape holds {} words, but the count asks for {needed}",
            randoms.len()
        );
    }
    Ok(())
}

/// Builds the runtime arguments from the CLI's tapes. Without a random tape
/// the host generates randoms from `seed`.
///
/// # Errors
///
/// Errors if either tape cannot be read, or if [`check_tapes`] rejects them.
pub fn load_runtime_arguments(
    input: Input,
    random_tape: Option<Input>,
    seed: u64,
) -> Result<RuntimeArguments> {
    let input_tape = read_words(input).context("reading input tape")?;
    let random = match random_tape {
        Some(tape) => RandomArguments::Tape(read_words(tape).context("reading random tape")?),
        None => RandomArguments::Seed(seed),
    };
    debug!(
        "input tape of {} words, randoms from {random}",
        input_tape.len()
    );
    let args = RuntimeArguments { input_tape, random };
    check_tapes(&args)?;
    Ok(args)
}

/// Writes each word on its own line.
///
/// # Errors
///
/// Errors if writing fails.
pub fn write_words(mut output: impl Write, words: &[Word]) -> Result<()> {
    for word in words {
        writeln!(output, "{word}")?;
    }
    output.flush()?;
    Ok(())
}

/// Writes the executed traps as JSON.
///
/// # Errors
///
/// Errors if serialization or writing fails.
pub fn write_trace(mut output: Output, record: &ExecutionRecord) -> Result<()> {
    serde_json::to_writer_pretty(&mut output, &record.executed)?;
    writeln!(output)?;
    debug!(
        "wrote {} trap entries ({})",
        record.executed.len(),
        record
            .executed
            .iter()
            .map(|entry| entry.op)
            .counts()
            .into_iter()
            .sorted()
            .map(|(op, count)| format!("{op}: {count}"))
            .join(", ")
    );
    Ok(())
}
