use anyhow::Result;
use proptest::prelude::any;
use proptest::prop_oneof;
use proptest::strategy::{Just, Strategy};
use trapsort_core_types::constants::DEFAULT_ARENA_WORDS;
use trapsort_core_types::Word;

use crate::state::{RuntimeArguments, State};
use crate::vm::{step, ExecutionRecord};

pub fn word_extra() -> impl Strategy<Value = Word> {
    prop_oneof![
        Just(0),
        Just(1),
        Just(-1),
        Just(Word::MIN),
        Just(Word::MAX),
        Just(Word::from(i32::MIN)),
        Just(Word::from(i32::MAX)),
        any::<Word>(),
    ]
}

/// Runs the pipeline with `count` on the input tape and `randoms` replayed as
/// the random stream.
///
/// # Errors
///
/// Passes on the guest's rejection of `count`.
pub fn execute_with_randoms(count: Word, randoms: &[Word]) -> Result<ExecutionRecord> {
    let _ = env_logger::try_init();
    let state = State::from(RuntimeArguments::with_randoms(count, randoms.to_vec()));
    step(state, DEFAULT_ARENA_WORDS)
}
