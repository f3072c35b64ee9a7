//! Trap opcodes. The opcode travels in `rax`, the argument of `WRITE` in
//! `rbx`, and the result of `READ` and `RANDOM` comes back in `rax`.

pub const READ: u64 = 0;
pub const RANDOM: u64 = 1;
pub const WRITE: u64 = 2;

#[must_use]
pub fn log<'a>(raw_id: u64) -> &'a str {
    match raw_id {
        READ => "read",
        RANDOM => "random",
        WRITE => "write",
        _ => "",
    }
}
