#![cfg_attr(
    not(all(target_arch = "x86_64", target_os = "none")),
    allow(unused_variables)
)]
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
use core::arch::asm;

pub use trapsort_core_types::ecall_id::{log, RANDOM, READ, WRITE};
use trapsort_core_types::Word;

// `syscall` clobbers `rcx` (return address) and `r11` (saved rflags).
// LLVM reserves `rbx`, so the argument is swapped in and out around the
// trap instead of being bound to `rbx` directly.

#[must_use]
pub fn read_word() -> Word {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    {
        let result: Word;
        unsafe {
            asm!(
                "syscall",
                inlateout("rax") READ => result,
                out("rcx") _,
                out("r11") _,
                options(nostack),
            );
        }
        result
    }
    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    {
        unimplemented!()
    }
}

#[must_use]
pub fn gen_random() -> Word {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    {
        let result: Word;
        unsafe {
            asm!(
                "syscall",
                inlateout("rax") RANDOM => result,
                out("rcx") _,
                out("r11") _,
                options(nostack),
            );
        }
        result
    }
    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    {
        unimplemented!()
    }
}

pub fn write_word(value: Word) {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    unsafe {
        asm!(
            "xchg {arg}, rbx",
            "syscall",
            "xchg {arg}, rbx",
            arg = inout(reg) value => _,
            inlateout("rax") WRITE => _,
            out("rcx") _,
            out("r11") _,
            options(nostack),
        );
    }
    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    {
        unimplemented!()
    }
}

/// Stops the guest after a completed run. The host observes the `hlt`.
pub fn halt() -> ! {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    loop {
        unsafe { asm!("hlt", options(nomem, nostack)) };
    }
    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    {
        unimplemented!()
    }
}

/// Aborts the guest. `ud2` raises an invalid-opcode fault the host can tell
/// apart from a clean `halt`.
pub fn abort() -> ! {
    #[cfg(all(target_arch = "x86_64", target_os = "none"))]
    unsafe {
        asm!("ud2", options(noreturn, nomem, nostack));
    }
    #[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
    {
        unimplemented!()
    }
}
