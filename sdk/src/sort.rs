/// Sorts `array` in place into non-decreasing order.
///
/// Pairwise exchange: every slot `i` is compared against each later slot `j`
/// and the two are swapped when out of order, so after pass `i` the slot
/// holds the minimum of the tail. Quadratic in time, no extra space, and not
/// stable.
pub fn sort<T: Ord>(array: &mut [T]) {
    let len = array.len();
    for i in 0..len {
        for j in i + 1..len {
            if array[i] > array[j] {
                array.swap(i, j);
            }
        }
    }
}
