//! Binary Search with Upper-Bound Fallback
//!
//! Standard iterative binary search over a non-decreasing `&[f64]`, with two
//! twists: the number of probes is reported back to the caller, and a miss
//! falls back to the *upper bound* (the smallest element strictly greater
//! than the target) instead of a plain "not found".

/// Outcome of [`binary_search`]: probe count plus the resolved value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinarySearchResult {
    /// Number of midpoint comparisons performed.
    pub iterations: usize,
    /// The matched element, the smallest element strictly greater than the
    /// target, or [`f64::INFINITY`] when the target exceeds every element.
    pub value: f64,
}

/// Search a non-decreasing sequence for `target`.
///
/// On an exact hit the matched element is returned with the probe count at
/// that point. On a miss the result carries the upper bound, or
/// [`f64::INFINITY`] if no element exceeds the target. An empty sequence
/// yields zero iterations and [`f64::INFINITY`].
///
/// The caller guarantees `values` is non-decreasing; this is not validated.
/// With duplicate values, which duplicate is probed first is unspecified.
///
/// # Example
/// ```
/// use textscan::binary_search;
///
/// let values = [1.1, 2.2, 3.3, 4.4, 5.5];
/// assert_eq!(binary_search(&values, 3.3).value, 3.3);
/// assert_eq!(binary_search(&values, 3.5).value, 4.4);
/// assert_eq!(binary_search(&values, 9.0).value, f64::INFINITY);
/// ```
pub fn binary_search(values: &[f64], target: f64) -> BinarySearchResult {
    let mut lo = 0usize;
    let mut hi = values.len(); // exclusive
    let mut iterations = 0;

    while lo < hi {
        iterations += 1;
        // Midpoint of the inclusive range [lo, hi - 1]
        let mid = (lo + hi - 1) / 2;

        if values[mid] == target {
            return BinarySearchResult {
                iterations,
                value: values[mid],
            };
        }
        if values[mid] < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    // lo is the insertion point: the first element greater than target,
    // or one past the end.
    BinarySearchResult {
        iterations,
        value: values.get(lo).copied().unwrap_or(f64::INFINITY),
    }
}
