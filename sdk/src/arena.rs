//! Word-granular bump allocator over a fixed backing region.
//!
//! Allocations are handed out front to back and never reclaimed, so every
//! region the arena returns is disjoint from every other one and regions
//! appear in increasing address order.
use derive_more::Display;

use crate::Word;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ArenaError {
    #[display("arena exhausted: requested {requested} words, {available} available")]
    Exhausted { requested: usize, available: usize },
}

impl core::error::Error for ArenaError {}

pub struct Arena<'a> {
    /// Not yet issued part of the backing region. Its start is the cursor.
    free: &'a mut [Word],
    capacity: usize,
}

impl<'a> Arena<'a> {
    /// Starts an arena with the cursor at the base of `backing`.
    #[must_use]
    pub fn new(backing: &'a mut [Word]) -> Self {
        let capacity = backing.len();
        Self {
            free: backing,
            capacity,
        }
    }

    /// Issues `count` contiguous words at the cursor and advances the cursor
    /// past them.
    ///
    /// The contents of the region are whatever the backing held.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::Exhausted`] if fewer than `count` words remain.
    /// The cursor does not move in that case.
    pub fn allocate(&mut self, count: usize) -> Result<&'a mut [Word], ArenaError> {
        let available = self.free.len();
        if count > available {
            return Err(ArenaError::Exhausted {
                requested: count,
                available,
            });
        }
        let (region, rest) = core::mem::take(&mut self.free).split_at_mut(count);
        self.free = rest;
        log::trace!("arena: issued {count} words, {} left", self.free.len());
        Ok(region)
    }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    #[must_use]
    pub fn used(&self) -> usize { self.capacity - self.free.len() }

    #[must_use]
    pub fn remaining(&self) -> usize { self.free.len() }
}

impl core::fmt::Debug for Arena<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Arena")
            .field("capacity", &self.capacity)
            .field("used", &self.used())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn cursor_starts_at_base() {
        let mut backing = [0; 8];
        let base = backing.as_ptr();
        let mut arena = Arena::new(&mut backing);
        assert_eq!(arena.used(), 0);
        let region = arena.allocate(3).unwrap();
        assert_eq!(region.as_ptr(), base);
        assert_eq!(region.len(), 3);
        assert_eq!(arena.used(), 3);
        assert_eq!(arena.remaining(), 5);
    }

    #[test]
    fn zero_sized_allocation_keeps_cursor() {
        let mut backing = [0; 4];
        let mut arena = Arena::new(&mut backing);
        assert!(arena.allocate(0).unwrap().is_empty());
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn fills_to_capacity() {
        let mut backing = [0; 4];
        let mut arena = Arena::new(&mut backing);
        arena.allocate(4).unwrap();
        assert_eq!(arena.remaining(), 0);
        assert!(arena.allocate(0).unwrap().is_empty());
    }

    #[test]
    fn exhaustion_is_an_error_and_leaves_cursor() {
        let mut backing = [0; 4];
        let mut arena = Arena::new(&mut backing);
        arena.allocate(3).unwrap();
        assert_eq!(
            arena.allocate(2),
            Err(ArenaError::Exhausted {
                requested: 2,
                available: 1,
            })
        );
        assert_eq!(arena.used(), 3);
        assert_eq!(arena.allocate(1).unwrap().len(), 1);
    }

    #[test]
    fn regions_stay_writable_side_by_side() {
        let mut backing = [0; 6];
        let mut arena = Arena::new(&mut backing);
        let a = arena.allocate(2).unwrap();
        let b = arena.allocate(4).unwrap();
        a.fill(1);
        b.fill(2);
        assert_eq!(a, &[1, 1]);
        assert_eq!(b, &[2, 2, 2, 2]);
        assert_eq!(backing, [1, 1, 2, 2, 2, 2]);
    }

    proptest! {
        #[test]
        fn regions_are_disjoint_and_ascending(sizes in prop::collection::vec(0_usize..16, 0..32)) {
            let mut backing = vec![0; sizes.iter().sum()];
            let base = backing.as_ptr() as usize;
            let mut arena = Arena::new(&mut backing);
            let ranges = sizes
                .iter()
                .map(|&size| {
                    let region = arena.allocate(size).unwrap();
                    let range = region.as_ptr_range();
                    (range.start as usize, range.end as usize)
                })
                .collect_vec();
            prop_assert_eq!(arena.remaining(), 0);
            let mut cursor = base;
            for (start, end) in ranges {
                prop_assert_eq!(start, cursor);
                prop_assert!(start <= end);
                cursor = end;
            }
        }
    }
}
