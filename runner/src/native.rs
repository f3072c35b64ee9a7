//! [`HostChannel`] answered in-process by the host-side trap handlers.
//!
//! Every call goes through the register file and [`State::ecall`], the same
//! path a real trap takes, so native runs see exactly the host's semantics.
use trapsort_core_types::{ecall_id, Word};
use trapsort_sdk::host::HostChannel;

use crate::ecall::TrapEntry;
use crate::state::{Registers, State};

#[derive(Debug, Default)]
pub struct NativeHost {
    pub state: State,
    /// Every trap answered so far, in order.
    pub executed: Vec<TrapEntry>,
}

impl From<State> for NativeHost {
    fn from(state: State) -> Self {
        Self {
            state,
            executed: Vec::new(),
        }
    }
}

#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_wrap)]
impl NativeHost {
    fn trap(&mut self, raw_id: u64, arg: Word) -> Word {
        let mut state = std::mem::take(&mut self.state);
        state.registers = Registers {
            rax: raw_id,
            rbx: arg as u64,
        };
        let (entry, state) = state.ecall();
        self.executed.push(entry);
        self.state = state;
        self.state.registers.rax as Word
    }
}

impl HostChannel for NativeHost {
    fn read_integer(&mut self) -> Word { self.trap(ecall_id::READ, 0) }

    fn generate_random(&mut self) -> Word { self.trap(ecall_id::RANDOM, 0) }

    fn write_integer(&mut self, value: Word) { self.trap(ecall_id::WRITE, value); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecall::TrapOp;
    use crate::state::RuntimeArguments;

    #[test]
    fn channel_calls_become_traps() {
        let mut host = NativeHost::from(State::from(RuntimeArguments::with_randoms(3, vec![9])));
        assert_eq!(host.read_integer(), 3);
        assert_eq!(host.generate_random(), 9);
        host.write_integer(-4);
        assert_eq!(host.state.output_tape, vec![-4]);
        assert_eq!(host.state.clk, 3);
        let ops: Vec<TrapOp> = host.executed.iter().map(|entry| entry.op).collect();
        assert_eq!(ops, vec![TrapOp::Read, TrapOp::Random, TrapOp::Write]);
    }
}
