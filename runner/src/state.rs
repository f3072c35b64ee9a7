use std::rc::Rc;

use derive_more::Display;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use trapsort_core_types::Word;

/// Takes the next word off `tape`, advancing its read index.
///
/// # Panics
///
/// Panics if the tape has no words left. Running dry is a host fault: the
/// guest has no way to observe a short read.
pub fn read_word(tape: &mut IntTape, name: &str) -> Word {
    let Some(&word) = tape.data.get(tape.read_index) else {
        panic!(
            "{name} tape exhausted after {} words",
            tape.data.len()
        );
    };
    log::trace!("read: {name}[{}] = {word}", tape.read_index);
    tape.read_index += 1;
    word
}

/// The registers the trap convention uses: opcode and results in `rax`,
/// the argument of a write in `rbx`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Registers {
    pub rax: u64,
    pub rbx: u64,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IntTape {
    pub data: Rc<[Word]>,
    pub read_index: usize,
}

impl From<Vec<Word>> for IntTape {
    fn from(data: Vec<Word>) -> Self {
        Self {
            data: Rc::from(data),
            read_index: 0,
        }
    }
}

impl IntTape {
    #[must_use]
    pub fn remaining(&self) -> usize { self.data.len() - self.read_index }
}

/// Where answers to `RANDOM` come from.
#[derive(Clone, Debug)]
pub enum RandomSource {
    /// Replays a fixed list of words.
    Tape(IntTape),
    Seeded(ChaCha8Rng),
}

impl RandomSource {
    /// # Panics
    ///
    /// Panics if a replayed tape has run dry.
    pub fn next_word(&mut self) -> Word {
        match self {
            RandomSource::Tape(tape) => read_word(tape, "random"),
            RandomSource::Seeded(rng) => rng.gen(),
        }
    }
}

#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize, Deserialize)]
pub enum RandomArguments {
    #[display("tape of {} words", _0.len())]
    Tape(Vec<Word>),
    #[display("seed {_0:#x}")]
    Seed(u64),
}

impl Default for RandomArguments {
    fn default() -> Self { RandomArguments::Seed(0) }
}

impl From<RandomArguments> for RandomSource {
    fn from(args: RandomArguments) -> Self {
        match args {
            RandomArguments::Tape(words) => RandomSource::Tape(words.into()),
            RandomArguments::Seed(seed) => RandomSource::Seeded(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

/// Everything the host needs to answer a run's traps.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RuntimeArguments {
    pub input_tape: Vec<Word>,
    pub random: RandomArguments,
}

impl RuntimeArguments {
    /// Arguments for the usual run: the count on the input tape and the
    /// values to sort on a random tape.
    #[must_use]
    pub fn with_randoms(count: Word, randoms: Vec<Word>) -> Self {
        Self {
            input_tape: vec![count],
            random: RandomArguments::Tape(randoms),
        }
    }

    #[must_use]
    pub fn with_seed(count: Word, seed: u64) -> Self {
        Self {
            input_tape: vec![count],
            random: RandomArguments::Seed(seed),
        }
    }
}

/// Host state while a guest runs.
#[derive(Clone, Debug)]
pub struct State {
    /// Number of traps answered so far.
    pub clk: u64,
    pub registers: Registers,
    pub input_tape: IntTape,
    pub random: RandomSource,
    pub output_tape: Vec<Word>,
}

impl From<RuntimeArguments> for State {
    fn from(RuntimeArguments { input_tape, random }: RuntimeArguments) -> Self {
        Self {
            clk: 0,
            registers: Registers::default(),
            input_tape: input_tape.into(),
            random: random.into(),
            output_tape: Vec::new(),
        }
    }
}

impl Default for State {
    fn default() -> Self { Self::from(RuntimeArguments::default()) }
}

impl State {
    #[must_use]
    pub fn bump_clock(mut self) -> Self {
        self.clk += 1;
        self
    }
}
