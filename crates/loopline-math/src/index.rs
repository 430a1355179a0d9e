//! Circular index arithmetic for closed point sequences.

/// Wrap an index into `[0, n)`.
///
/// `n` must be non-zero.
#[inline]
pub fn wrap(i: usize, n: usize) -> usize {
    debug_assert!(n > 0, "cannot wrap into an empty sequence");
    i % n
}

/// Wrap a signed index into `[0, n)`, so `-1` maps to `n - 1`.
#[inline]
pub fn wrap_signed(i: i64, n: usize) -> usize {
    debug_assert!(n > 0, "cannot wrap into an empty sequence");
    i.rem_euclid(n as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, 4), 0);
        assert_eq!(wrap(3, 4), 3);
        assert_eq!(wrap(4, 4), 0);
        assert_eq!(wrap(9, 4), 1);
    }

    #[test]
    fn test_wrap_signed() {
        assert_eq!(wrap_signed(-1, 4), 3);
        assert_eq!(wrap_signed(-4, 4), 0);
        assert_eq!(wrap_signed(-5, 4), 3);
        assert_eq!(wrap_signed(6, 4), 2);
    }
}
