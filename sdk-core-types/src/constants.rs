use crate::Word;

/// The size of a [`Word`] in bytes.
pub const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// Number of words in the guest's static arena backing region.
pub const ARENA_WORDS: usize = 1 << 16;

/// Arena size used for native execution when none is requested.
pub const DEFAULT_ARENA_WORDS: usize = ARENA_WORDS;
