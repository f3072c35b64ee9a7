use crate::arena::{Arena, ArenaError};
use crate::host::HostChannel;
use crate::Word;

/// Allocates `count` words from `arena` and fills them, in slot order, with
/// values from the host's random generator.
///
/// # Errors
///
/// Fails without issuing any trap if the arena cannot hold `count` words.
pub fn build_random_array<'a, H: HostChannel + ?Sized>(
    host: &mut H,
    arena: &mut Arena<'a>,
    count: usize,
) -> Result<&'a mut [Word], ArenaError> {
    let array = arena.allocate(count)?;
    for slot in array.iter_mut() {
        *slot = host.generate_random();
    }
    Ok(array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecall_id;
    use crate::test_utils::TapeHost;

    #[test]
    fn fills_in_stream_order() {
        let mut host = TapeHost::new(&[], &[7, -3, 7, 0]);
        let mut backing = [0; 8];
        let mut arena = Arena::new(&mut backing);
        let array = build_random_array(&mut host, &mut arena, 4).unwrap();
        assert_eq!(array, &[7, -3, 7, 0]);
        assert_eq!(host.traps, vec![ecall_id::RANDOM; 4]);
        assert_eq!(arena.used(), 4);
    }

    #[test]
    fn empty_array_issues_no_traps() {
        let mut host = TapeHost::default();
        let mut backing = [0; 1];
        let mut arena = Arena::new(&mut backing);
        assert!(build_random_array(&mut host, &mut arena, 0)
            .unwrap()
            .is_empty());
        assert!(host.traps.is_empty());
    }

    #[test]
    fn oversized_request_issues_no_traps() {
        let mut host = TapeHost::new(&[], &[1, 2, 3]);
        let mut backing = [0; 2];
        let mut arena = Arena::new(&mut backing);
        assert_eq!(
            build_random_array(&mut host, &mut arena, 3),
            Err(ArenaError::Exhausted {
                requested: 3,
                available: 2,
            })
        );
        assert!(host.traps.is_empty());
    }
}
