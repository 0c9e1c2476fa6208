use std::collections::HashMap;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use launchrec::catalog::AppId;
use launchrec::recommend::select;
use launchrec::test_utils::rng::{exploit_only, explore_only};
use launchrec::usage::{UsageSample, aggregate};

fn samples() -> impl Strategy<Value = Vec<UsageSample>> {
    prop::collection::vec(
        ("[a-h]", 0u64..2_000).prop_map(|(id, ms)| UsageSample {
            app_id: AppId::new(id),
            foreground_ms: ms,
        }),
        0..48,
    )
}

proptest! {
    #[test]
    fn test_totals_are_exact_sums(samples in samples()) {
        let mut expected: HashMap<AppId, u64> = HashMap::new();
        for sample in &samples {
            *expected.entry(sample.app_id.clone()).or_default() += sample.foreground_ms;
        }
        expected.retain(|_, total| *total > 0);

        let ranked = aggregate(samples);
        prop_assert_eq!(ranked.len(), expected.len());
        for rank in &ranked {
            prop_assert_eq!(Some(&rank.total_foreground_ms), expected.get(&rank.app_id));
            prop_assert!(rank.total_foreground_ms > 0);
        }
    }

    #[test]
    fn test_ranking_is_descending(samples in samples()) {
        let ranked = aggregate(samples);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].total_foreground_ms >= pair[1].total_foreground_ms);
        }
    }

    #[test]
    fn test_aggregation_is_idempotent(samples in samples()) {
        prop_assert_eq!(aggregate(samples.clone()), aggregate(samples));
    }

    #[test]
    fn test_shortlist_is_bounded_and_unique(
        samples in samples(),
        count in 0i64..64,
        seed in any::<u64>(),
    ) {
        let ranked = aggregate(samples);
        let mut rng = StdRng::seed_from_u64(seed);
        let picked = select(&ranked, count, &mut rng).unwrap();

        let expected_len = usize::try_from(count).unwrap().min(ranked.len());
        prop_assert_eq!(picked.len(), expected_len);

        let mut seen = picked.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), picked.len());

        for id in &picked {
            prop_assert!(ranked.iter().any(|rank| rank.app_id == *id));
        }
    }

    #[test]
    fn test_exploit_only_returns_the_ranking_prefix(
        samples in samples(),
        count in 0i64..64,
    ) {
        let ranked = aggregate(samples);
        let mut rng = exploit_only();
        let picked = select(&ranked, count, &mut rng).unwrap();

        let take = usize::try_from(count).unwrap().min(ranked.len());
        let expected: Vec<AppId> = ranked[..take]
            .iter()
            .map(|rank| rank.app_id.clone())
            .collect();
        prop_assert_eq!(picked, expected);
    }

    #[test]
    fn test_explore_only_picks_stay_in_the_pool(
        samples in samples(),
        count in 0i64..64,
    ) {
        let ranked = aggregate(samples);
        let mut rng = explore_only();
        let picked = select(&ranked, count, &mut rng).unwrap();

        prop_assert_eq!(picked.len(), usize::try_from(count).unwrap().min(ranked.len()));
        let mut seen = picked.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), picked.len());
        for id in &picked {
            prop_assert!(ranked.iter().any(|rank| rank.app_id == *id));
        }
    }

    #[test]
    fn test_negative_count_is_always_an_error(
        samples in samples(),
        count in i64::MIN..0,
        seed in any::<u64>(),
    ) {
        let ranked = aggregate(samples);
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(select(&ranked, count, &mut rng).is_err());
    }
}
