//! Shared types for locmerge.
//!
//! Both merge engines report their work through these.

/// Counts of what a merge did (or would do, in a dry run).
///
/// Every filtered source key ends up in exactly one bucket: `updated` if it
/// already existed in the target, `added` if it was inserted fresh. The
/// total therefore always equals the number of unique filtered source keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Keys that did not exist in the target and were inserted.
    pub added: usize,
    /// Keys that existed in the target and had their value replaced.
    pub updated: usize,
}

impl MergeSummary {
    /// Total number of source keys the merge touched.
    pub fn total(&self) -> usize {
        self.added + self.updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_total() {
        let summary = MergeSummary {
            added: 3,
            updated: 2,
        };
        assert_eq!(summary.total(), 5);
    }

    #[test]
    fn test_summary_default_is_zero() {
        let summary = MergeSummary::default();
        assert_eq!(summary.added, 0);
        assert_eq!(summary.updated, 0);
        assert_eq!(summary.total(), 0);
    }
}
