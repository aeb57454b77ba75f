//! Wire keys round-trip and nothing else parses.

use facetrank::{RankError, RankStrategy};
use proptest::prelude::*;

#[test]
fn every_key_round_trips() {
    for strategy in RankStrategy::ALL {
        assert_eq!(RankStrategy::by_key(strategy.key()), Ok(strategy));
        assert_eq!(strategy.key().parse::<RankStrategy>(), Ok(strategy));
    }
}

proptest! {
    #[test]
    fn prop_unknown_keys_rejected(key in "[a-zA-Z]{0,12}") {
        let known = RankStrategy::ALL.iter().any(|s| s.key() == key);
        match RankStrategy::by_key(&key) {
            Ok(strategy) => prop_assert!(known && strategy.key() == key),
            Err(err) => {
                prop_assert!(!known);
                prop_assert_eq!(err, RankError::UnknownStrategy { key: key.clone() });
            }
        }
    }
}
