//! The driver: read a count, build a random array, sort it, write it out.
//!
//! The run is a straight line through [`Stage`]s. Each stage value carries
//! exactly what the next one needs, so a stage cannot run twice and the
//! array cannot be touched after it has been printed.
use derive_more::{Display, From};

use crate::arena::{Arena, ArenaError};
use crate::array::build_random_array;
use crate::host::HostChannel;
use crate::sort::sort;
use crate::Word;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, From)]
pub enum PipelineError {
    #[display("element count must not be negative, got {_0}")]
    #[from(ignore)]
    NegativeCount(Word),
    #[display("{_0}")]
    Arena(ArenaError),
}

impl core::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            PipelineError::NegativeCount(_) => None,
            PipelineError::Arena(err) => Some(err),
        }
    }
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Stage {
    Init,
    ReadCount,
    BuildAndSort,
    Print,
    Terminated,
}

/// What a finished run reports back.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunSummary {
    /// Number of values handed to the host.
    pub written: usize,
    pub arena_used: usize,
}

enum State<'a> {
    Init(&'a mut [Word]),
    ReadCount(Arena<'a>),
    BuildAndSort(Arena<'a>, usize),
    Print(&'a mut [Word], usize),
    Terminated(RunSummary),
}

impl<'a> State<'a> {
    fn stage(&self) -> Stage {
        match self {
            State::Init(_) => Stage::Init,
            State::ReadCount(_) => Stage::ReadCount,
            State::BuildAndSort(..) => Stage::BuildAndSort,
            State::Print(..) => Stage::Print,
            State::Terminated(_) => Stage::Terminated,
        }
    }

    fn step<H: HostChannel + ?Sized>(self, host: &mut H) -> Result<State<'a>, PipelineError> {
        Ok(match self {
            State::Init(backing) => State::ReadCount(Arena::new(backing)),
            State::ReadCount(arena) => {
                let raw = host.read_integer();
                let count = usize::try_from(raw).map_err(|_| PipelineError::NegativeCount(raw))?;
                log::debug!("count: {count}");
                State::BuildAndSort(arena, count)
            }
            State::BuildAndSort(mut arena, count) => {
                let array = build_random_array(host, &mut arena, count)?;
                sort(array);
                State::Print(array, arena.used())
            }
            State::Print(array, arena_used) => {
                for &value in &*array {
                    host.write_integer(value);
                }
                State::Terminated(RunSummary {
                    written: array.len(),
                    arena_used,
                })
            }
            State::Terminated(_) => unreachable!("a terminated pipeline is never stepped"),
        })
    }
}

/// Runs the whole pipeline against `host`, drawing memory from `backing`.
///
/// # Errors
///
/// Returns [`PipelineError::NegativeCount`] if the host supplies a negative
/// count and [`PipelineError::Arena`] if `backing` is too small for it. Both
/// are detected before any random value is requested.
pub fn run<H: HostChannel + ?Sized>(
    host: &mut H,
    backing: &mut [Word],
) -> Result<RunSummary, PipelineError> {
    let mut state = State::Init(backing);
    loop {
        log::debug!("stage: {}", state.stage());
        state = match state {
            State::Terminated(summary) => return Ok(summary),
            state => state.step(host)?,
        };
    }
}
