//! Flat indexing of unordered pairs of indices in `[0, maxval)`.
//!
//! Pairs are enumerated row by row, `(0,0), (0,1), ..., (0,n-1), (1,1), ...`.
//! With `noself` the diagonal pairs `(a,a)` are left out.

/// Number of unordered pairs of values in `[0, maxval)`.
pub fn num_pairs(maxval: usize, noself: bool) -> usize {
    if noself {
        maxval * maxval.saturating_sub(1) / 2
    } else {
        maxval * (maxval + 1) / 2
    }
}

/// Index of the unordered pair `{a, b}`; symmetric in its arguments.
///
/// # Panics
/// In debug builds, if either value is out of range or `noself` is set and `a == b`.
pub fn pair_index(a: usize, b: usize, maxval: usize, noself: bool) -> usize {
    debug_assert!(a < maxval && b < maxval, "pair ({a}, {b}) out of range {maxval}");
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if noself {
        debug_assert!(lo != hi, "self pair ({a}, {b}) requested with noself");
        lo * maxval + hi - (lo + 1) * (lo + 2) / 2
    } else {
        lo * maxval + hi - lo * (lo + 1) / 2
    }
}

/// The pair `(a, b)` with `a <= b` (or `a < b` with `noself`) at the given index.
pub fn pair_from_index(pair: usize, maxval: usize, noself: bool) -> (usize, usize) {
    debug_assert!(pair < num_pairs(maxval, noself), "pair index {pair} out of range");
    let skip = usize::from(noself);
    let mut rest = pair;
    let mut row = 0;
    loop {
        let row_len = maxval - row - skip;
        if rest < row_len {
            return (row, row + skip + rest);
        }
        rest -= row_len;
        row += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_pairs() {
        assert_eq!(num_pairs(9, false), 45);
        assert_eq!(num_pairs(9, true), 36);
        assert_eq!(num_pairs(1, true), 0);
        assert_eq!(num_pairs(0, true), 0);
    }

    #[test]
    fn test_pair_index_is_a_bijection() {
        for &noself in &[false, true] {
            let n = 7;
            let mut seen = vec![false; num_pairs(n, noself)];
            for a in 0..n {
                for b in a..n {
                    if noself && a == b {
                        continue;
                    }
                    let p = pair_index(a, b, n, noself);
                    assert!(!seen[p], "pair index {p} produced twice");
                    seen[p] = true;
                    assert_eq!(pair_from_index(p, n, noself), (a, b));
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_pair_index_symmetric() {
        assert_eq!(pair_index(2, 5, 8, false), pair_index(5, 2, 8, false));
        assert_eq!(pair_index(2, 5, 8, true), pair_index(5, 2, 8, true));
    }

    #[test]
    fn test_pair_index_first_row() {
        assert_eq!(pair_index(0, 0, 4, false), 0);
        assert_eq!(pair_index(0, 3, 4, false), 3);
        assert_eq!(pair_index(1, 1, 4, false), 4);
        assert_eq!(pair_index(0, 1, 4, true), 0);
        assert_eq!(pair_index(1, 2, 4, true), 3);
    }
}
