//! Per-sequence summary statistics.
//!
//! Pure functions over a single sequence or quality string. Empty input
//! yields 0 rather than a division fault.

use memchr::{memchr_iter, memchr2_iter};

use crate::options::CaseSensitivity;

/// Offset of the Phred+33 quality encoding. Phred+64 input is not detected.
pub const PHRED33_OFFSET: u8 = 33;

fn count_base(seq: &[u8], base: u8, case: CaseSensitivity) -> usize {
    match case {
        CaseSensitivity::Sensitive => memchr_iter(base, seq).count(),
        CaseSensitivity::Insensitive => {
            memchr2_iter(base, base.to_ascii_lowercase(), seq).count()
        }
    }
}

/// GC content as a percentage of the full sequence length, counting only
/// uppercase `G` and `C`.
///
/// ```
/// use seqstats::stats::gc_content;
///
/// assert_eq!(gc_content(b"GCAT"), 50.0);
/// assert_eq!(gc_content(b""), 0.0);
/// ```
pub fn gc_content(seq: &[u8]) -> f64 {
    gc_content_with(seq, CaseSensitivity::Sensitive)
}

pub fn gc_content_with(seq: &[u8], case: CaseSensitivity) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = count_base(seq, b'G', case) + count_base(seq, b'C', case);
    gc as f64 / seq.len() as f64 * 100.0
}

/// Number of `N` base calls.
pub fn ambiguous_count(seq: &[u8]) -> usize {
    ambiguous_count_with(seq, CaseSensitivity::Sensitive)
}

pub fn ambiguous_count_with(seq: &[u8], case: CaseSensitivity) -> usize {
    count_base(seq, b'N', case)
}

/// Mean Phred+33 quality score.
pub fn avg_quality(qual: &[u8]) -> f64 {
    avg_quality_with_offset(qual, PHRED33_OFFSET)
}

/// Mean of `byte - offset` over the quality string. Bytes below the offset
/// contribute negative scores.
pub fn avg_quality_with_offset(qual: &[u8], offset: u8) -> f64 {
    if qual.is_empty() {
        return 0.0;
    }
    let total: i64 = qual.iter().map(|&q| i64::from(q) - i64::from(offset)).sum();
    total as f64 / qual.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gc_content() {
        assert_eq!(gc_content(b""), 0.0);
        assert_eq!(gc_content(b"GGCC"), 100.0);
        assert_eq!(gc_content(b"ATAT"), 0.0);
        assert_eq!(gc_content(b"GCAT"), 50.0);
        assert_eq!(gc_content(b"ACGTGGCC"), 75.0);
    }

    #[test]
    fn test_gc_content_counts_n_in_denominator() {
        assert_eq!(gc_content(b"GCNN"), 50.0);
        assert_eq!(gc_content(b"NNNN"), 0.0);
    }

    #[test]
    fn test_gc_content_case() {
        assert_eq!(gc_content(b"ggcc"), 0.0);
        assert_eq!(gc_content(b"GgCc"), 50.0);
        assert_eq!(gc_content_with(b"ggcc", CaseSensitivity::Insensitive), 100.0);
        assert_eq!(gc_content_with(b"GgAt", CaseSensitivity::Insensitive), 50.0);
    }

    #[test]
    fn test_ambiguous_count() {
        assert_eq!(ambiguous_count(b"NNNACGT"), 3);
        assert_eq!(ambiguous_count(b""), 0);
        assert_eq!(ambiguous_count(b"nnN"), 1);
        assert_eq!(ambiguous_count_with(b"nnN", CaseSensitivity::Insensitive), 3);
    }

    #[test]
    fn test_avg_quality() {
        assert_eq!(avg_quality(b""), 0.0);
        assert_eq!(avg_quality(b"!!!!"), 0.0);
        assert_eq!(avg_quality(b"IIII"), 40.0);
        assert_eq!(avg_quality(b"!I"), 20.0);
    }

    #[test]
    fn test_avg_quality_offset() {
        assert_eq!(avg_quality_with_offset(b"hhhh", 64), 40.0);
        assert_eq!(avg_quality_with_offset(b"!", 34), -1.0);
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Uniform quality strings average to their exact score.
        #[test]
        fn prop_uniform_quality_is_exact(q in 0u8..=93, len in 1usize..500) {
            let qual = vec![PHRED33_OFFSET + q; len];
            prop_assert_eq!(avg_quality(&qual), f64::from(q));
        }

        /// GC percentage stays within bounds.
        #[test]
        fn prop_gc_content_bounded(seq in "[ACGTNacgtn]{0,300}") {
            let gc = gc_content(seq.as_bytes());
            prop_assert!((0.0..=100.0).contains(&gc));
            let folded = gc_content_with(seq.as_bytes(), CaseSensitivity::Insensitive);
            prop_assert!(folded >= gc);
        }
    }
}
