//! Property tests for list page size clamping.

use auditlog_client::{ListEventsParams, effective_limit};
use proptest::prelude::*;

proptest! {
    #[test]
    fn effective_limit_always_in_range(requested in any::<i64>()) {
        let limit = effective_limit(requested);
        prop_assert!((1..=1000).contains(&limit));
    }

    #[test]
    fn non_positive_limit_uses_default(requested in i64::MIN..=0) {
        prop_assert_eq!(effective_limit(requested), 10);
    }

    #[test]
    fn in_range_limit_unchanged(requested in 1i64..=1000) {
        prop_assert_eq!(i64::from(effective_limit(requested)), requested);
    }

    #[test]
    fn oversized_limit_capped(requested in 1001i64..) {
        prop_assert_eq!(effective_limit(requested), 1000);
    }

    #[test]
    fn query_limit_matches_effective_limit(requested in any::<i64>()) {
        let params = ListEventsParams::new(requested);
        let pairs = params.query_pairs();
        prop_assert_eq!(pairs[0].0, "limit");
        prop_assert_eq!(&pairs[0].1, &effective_limit(requested).to_string());
    }
}
