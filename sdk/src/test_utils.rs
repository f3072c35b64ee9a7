use std::collections::VecDeque;

use proptest::prelude::any;
use proptest::prop_oneof;
use proptest::strategy::{Just, Strategy};

use crate::ecall_id;
use crate::host::HostChannel;
use crate::Word;

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

/// Host channel that replays fixed input and random streams and records
/// every trap it answers.
#[derive(Debug, Default)]
pub struct TapeHost {
    pub input: VecDeque<Word>,
    pub randoms: VecDeque<Word>,
    pub output: Vec<Word>,
    pub traps: Vec<u64>,
}

impl TapeHost {
    pub fn new(input: &[Word], randoms: &[Word]) -> Self {
        Self {
            input: input.iter().copied().collect(),
            randoms: randoms.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl HostChannel for TapeHost {
    fn read_integer(&mut self) -> Word {
        self.traps.push(ecall_id::READ);
        self.input.pop_front().expect("input tape exhausted")
    }

    fn generate_random(&mut self) -> Word {
        self.traps.push(ecall_id::RANDOM);
        self.randoms.pop_front().expect("random tape exhausted")
    }

    fn write_integer(&mut self, value: Word) {
        self.traps.push(ecall_id::WRITE);
        self.output.push(value);
    }
}
