//! The three host services a guest can ask for.
//!
//! [`HostChannel`] decouples the pipeline from how a trap is encoded. The
//! guest uses [`Syscalls`]; native execution plugs in a host-side
//! implementation that answers the same opcodes without leaving the process.
use crate::core::ecall;
use crate::Word;

pub trait HostChannel {
    /// Blocks until the host supplies one integer.
    fn read_integer(&mut self) -> Word;

    /// Returns one host-supplied pseudo-random integer.
    fn generate_random(&mut self) -> Word;

    /// Blocks until the host has accepted `value`.
    fn write_integer(&mut self, value: Word);
}

/// Host channel backed by real traps. Only usable inside the guest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Syscalls;

impl HostChannel for Syscalls {
    fn read_integer(&mut self) -> Word { ecall::read_word() }

    fn generate_random(&mut self) -> Word { ecall::gen_random() }

    fn write_integer(&mut self, value: Word) { ecall::write_word(value); }
}
