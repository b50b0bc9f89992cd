use rand::{Rng, RngCore};

use crate::config::INTERPOLATION_SEARCH_THRESHOLD;

/// Interpolation-binary search.
///
/// Returns the position of the first element of `sorted` strictly greater than
/// `value` (`sorted.len()` if there is none), exactly like a binary
/// `upper_bound`. While the search window is larger than
/// [`INTERPOLATION_SEARCH_THRESHOLD`] the probe is placed by interpolating
/// `value` between the window endpoints; smaller windows are bisected.
///
/// `sorted` must be sorted in non-decreasing order.
pub fn upper_bound(sorted: &[f64], value: f64) -> usize {
    let mut lo = 0;
    let mut hi = sorted.len();

    // Invariant: the answer lies in [lo, hi]
    while hi - lo > INTERPOLATION_SEARCH_THRESHOLD {
        let first = sorted[lo];
        let last = sorted[hi - 1];
        if value < first {
            return lo;
        }
        if !(value < last) {
            return hi;
        }

        // first <= value < last, so the span is positive
        let span = (hi - 1 - lo) as f64;
        let estimate = ((value - first) / (last - first) * span).round();
        let probe = lo + (estimate as usize).min(hi - 1 - lo);

        if sorted[probe] <= value {
            lo = probe + 1;
        } else {
            hi = probe;
        }
    }

    lo + sorted[lo..hi].partition_point(|&x| !(value < x))
}

/// Draw an index with probability proportional to `probabilities[i]`.
///
/// Weights need not be normalised but must be non-negative with a positive sum.
pub fn choose_between(probabilities: &[f64], rng: &mut dyn RngCore) -> usize {
    let cumulative: Vec<f64> = probabilities
        .iter()
        .scan(0.0, |acc, &p| {
            *acc += p;
            Some(*acc)
        })
        .collect();
    choose_between_psums(&cumulative, rng)
}

/// Draw an index given the prefix sums of the weights (inverse-CDF sampling).
///
/// # Panics
/// If `cumulative` is empty.
pub fn choose_between_psums(cumulative: &[f64], rng: &mut dyn RngCore) -> usize {
    let total = *cumulative
        .last()
        .expect("cannot choose from an empty distribution");
    let draw = rng.random::<f64>() * total;
    upper_bound(cumulative, draw).min(cumulative.len() - 1)
}
