// Host-side answers to the guest's traps.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use trapsort_core_types::ecall_id;
use trapsort_core_types::Word;

use crate::state::{read_word, State};

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum TrapOp {
    #[display("read")]
    Read,
    #[display("random")]
    Random,
    #[display("write")]
    Write,
    #[display("unknown({_0})")]
    Unknown(u64),
}

impl From<u64> for TrapOp {
    fn from(raw_id: u64) -> Self {
        match raw_id {
            ecall_id::READ => TrapOp::Read,
            ecall_id::RANDOM => TrapOp::Random,
            ecall_id::WRITE => TrapOp::Write,
            other => TrapOp::Unknown(other),
        }
    }
}

/// One answered trap. `value` is what travelled across the boundary: the
/// word returned for reads and randoms, the word consumed for writes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TrapEntry {
    pub clk: u64,
    pub op: TrapOp,
    pub value: Option<Word>,
}

#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_wrap)]
impl State {
    fn ecall_read(mut self) -> (Option<Word>, Self) {
        let word = read_word(&mut self.input_tape, "input");
        self.registers.rax = word as u64;
        (Some(word), self)
    }

    fn ecall_random(mut self) -> (Option<Word>, Self) {
        let word = self.random.next_word();
        self.registers.rax = word as u64;
        (Some(word), self)
    }

    fn ecall_write(mut self) -> (Option<Word>, Self) {
        let word = self.registers.rbx as Word;
        self.output_tape.push(word);
        (Some(word), self)
    }

    /// Answers the trap described by the current registers.
    ///
    /// Unknown opcodes are logged and otherwise ignored.
    ///
    /// # Panics
    ///
    /// Panics if a read or a replayed random needs a word its tape does not
    /// have.
    #[must_use]
    pub fn ecall(self) -> (TrapEntry, Self) {
        let raw_id = self.registers.rax;
        log::trace!("ecall '{}' at clk: {}", ecall_id::log(raw_id), self.clk);
        let op = TrapOp::from(raw_id);
        let (value, state) = match op {
            TrapOp::Read => self.ecall_read(),
            TrapOp::Random => self.ecall_random(),
            TrapOp::Write => self.ecall_write(),
            TrapOp::Unknown(raw_id) => {
                log::warn!("ignoring unknown trap opcode {raw_id} at clk: {}", self.clk);
                (None, self)
            }
        };
        let state = state.bump_clock();
        (
            TrapEntry {
                clk: state.clk,
                op,
                value,
            },
            state,
        )
    }
}
