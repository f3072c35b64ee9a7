pub mod ecall;
pub mod env;

/// Declares the guest entry point.
///
/// The given function receives the trap-backed host channel and the static
/// arena backing region, and is called exactly once.
#[macro_export]
macro_rules! entry {
    ($path:path) => {
        // Type check the given path
        const TRAPSORT_ENTRY: fn(&mut $crate::host::Syscalls, &'static mut [$crate::Word]) = $path;

        #[no_mangle]
        extern "C" fn bespoke_entrypoint() {
            // SAFETY: `_start` calls us exactly once.
            let backing = unsafe { $crate::core::env::arena_backing() };
            TRAPSORT_ENTRY(&mut $crate::host::Syscalls, backing);
        }
    };
}

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
#[no_mangle]
unsafe extern "C" fn _start() -> ! {
    extern "C" {
        fn bespoke_entrypoint();
    }
    bespoke_entrypoint();
    env::finalize()
}

#[cfg(all(target_os = "none", not(feature = "std")))]
mod handlers {
    use core::panic::PanicInfo;

    use crate::core::ecall;

    // There is no trap for diagnostics, so the message is dropped and the
    // host only sees the fault.
    #[panic_handler]
    fn panic_fault(_panic_info: &PanicInfo) -> ! { ecall::abort() }
}
