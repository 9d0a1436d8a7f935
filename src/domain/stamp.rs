//! Per-pull stamp shared by synthetic marker names and scratch filenames.

use chrono::{NaiveDateTime, Utc};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide sequence so stamps taken within the same second stay unique.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Identity of a single pull.
///
/// Rendered as the fixed-width, lexicographically sortable token
/// `yyyy_MM_dd_HH_mm_ss_NNNNNN`. The same stamp is computed once per pull
/// and reused for both synthetic marker names and the scratch filename, so
/// names and content stay correlated for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullStamp {
    taken_at: NaiveDateTime,
    sequence: u64,
}

impl PullStamp {
    /// Takes a fresh stamp for the current pull.
    pub fn next() -> Self {
        Self::from_parts(Utc::now().naive_utc(), SEQUENCE.fetch_add(1, Ordering::Relaxed))
    }

    /// Creates a stamp from explicit parts.
    pub fn from_parts(taken_at: NaiveDateTime, sequence: u64) -> Self {
        Self { taken_at, sequence }
    }

    /// The sortable token underlying all names derived from this stamp.
    pub fn token(&self) -> String {
        format!("{}_{:06}", self.taken_at.format("%Y_%m_%d_%H_%M_%S"), self.sequence)
    }

    /// Scratch filename for this pull's published resource.
    pub fn file_name(&self) -> String {
        format!("{}.feature", self.token())
    }

    /// Synthetic name for an injected marker line, e.g. `Feature_<token>`.
    pub fn synthetic_name(&self, kind: &str) -> String {
        format!("{}_{}", kind, self.token())
    }
}

impl fmt::Display for PullStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    #[test]
    fn token_is_fixed_width_and_sortable() {
        let stamp = PullStamp::from_parts(fixed_instant(), 42);
        assert_eq!(stamp.token(), "2024_03_07_14_05_09_000042");
    }

    #[test]
    fn file_name_appends_the_feature_extension() {
        let stamp = PullStamp::from_parts(fixed_instant(), 1);
        assert_eq!(stamp.file_name(), "2024_03_07_14_05_09_000001.feature");
    }

    #[test]
    fn synthetic_name_prefixes_the_kind() {
        let stamp = PullStamp::from_parts(fixed_instant(), 7);
        assert_eq!(stamp.synthetic_name("Scenario"), "Scenario_2024_03_07_14_05_09_000007");
    }

    #[test]
    fn stamps_within_the_same_second_stay_distinct() {
        let first = PullStamp::next();
        let second = PullStamp::next();
        assert_ne!(first.file_name(), second.file_name());
        assert_ne!(first.token(), second.token());
    }

    #[test]
    fn later_stamps_sort_after_earlier_ones() {
        let earlier = PullStamp::from_parts(fixed_instant(), 3);
        let later = PullStamp::from_parts(fixed_instant(), 4);
        assert!(later.token() > earlier.token());
    }
}
