//! Boyer-Moore Search (bad-character rule)
//!
//! **Core Idea**: Compare right-to-left and skip. When the window's last
//! text character mismatches, the shift table says how far the window can
//! jump without passing a possible match.
//!
//! This is the single-heuristic variant: bad-character rule only, no
//! good-suffix rule. Pathological inputs (e.g. `"AAA...A"` vs `"AA...A"`)
//! degrade to O(N*M); that behavior is part of the contract.

/// Build the bad-character shift table for a pattern.
///
/// For every byte in `pattern[..m-1]` the entry is the distance from its
/// last occurrence to the end of the pattern. Bytes absent from the pattern
/// (and the final byte, unless it also occurs earlier) keep the default
/// shift of the full pattern length.
///
/// Same dense `[_; 256]` shape as a counting table: byte-indexed, no hashing.
///
/// # Panics
/// Panics if `pattern` is empty. [`boyer_moore_search`] handles the empty
/// pattern before building the table.
#[inline]
pub fn build_shift_table(pattern: &[u8]) -> [usize; 256] {
    let m = pattern.len();
    let mut table = [m; 256];

    for (i, &c) in pattern[..m - 1].iter().enumerate() {
        table[c as usize] = m - i - 1;
    }

    table
}

/// Find the first occurrence of `pattern` in `text`.
///
/// Returns the zero-based offset of the first match, or [`None`] if the
/// pattern does not occur. An empty pattern matches at offset 0.
///
/// # Example
/// ```
/// use textscan::boyer_moore_search;
///
/// assert_eq!(boyer_moore_search(b"ABABDABACDABABCABAB", b"ABABCABAB"), Some(10));
/// assert_eq!(boyer_moore_search(b"hello world", b"xyz"), None);
/// ```
pub fn boyer_moore_search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    let (n, m) = (text.len(), pattern.len());
    if m > n {
        return None;
    }

    let shift = build_shift_table(pattern);
    let mut i = 0; // window start

    while i <= n - m {
        // Scan the window right-to-left.
        let mut j = m;
        while j > 0 && text[i + j - 1] == pattern[j - 1] {
            j -= 1;
        }
        if j == 0 {
            return Some(i);
        }

        // Shift by the table entry for the text byte under the window's end.
        i += shift[text[i + m - 1] as usize];
    }

    None
}
