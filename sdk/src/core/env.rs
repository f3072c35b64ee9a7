use trapsort_core_types::constants::ARENA_WORDS;
use trapsort_core_types::Word;

// Backing storage for the guest arena. Lives in `.bss`, so it costs nothing
// in the image.
static mut ARENA_BACKING: [Word; ARENA_WORDS] = [0; ARENA_WORDS];

/// Hands out the guest's arena backing region.
///
/// # Safety
///
/// Must be called at most once per run. The entry point generated by
/// [`entry!`](crate::entry) is the only caller.
#[must_use]
pub unsafe fn arena_backing() -> &'static mut [Word] {
    // SAFETY: single threaded and called once, so this is the only reference.
    unsafe { &mut *core::ptr::addr_of_mut!(ARENA_BACKING) }
}

pub fn finalize() -> ! { super::ecall::halt() }
