/// Returns the value of the lowest set bit of `x` (`lowbit(12) == 4`).
///
/// Computed as `x & -x` under two's complement; `wrapping_neg` gives the
/// same bit pattern on `usize`. `lowbit(0) == 0`, so loops driven by it must
/// terminate on their own bounds.
#[inline]
pub fn lowbit(x: usize) -> usize {
    x & x.wrapping_neg()
}

/// Largest power of two `<= n`, or 0 for an empty tree.
#[inline]
pub(crate) fn highest_power_of_two_leq(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1usize << (usize::BITS - 1 - n.leading_zeros())
    }
}
