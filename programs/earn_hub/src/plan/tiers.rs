// Plan tier table and resolver. Tiers are unlocked by cumulative approved
// top-up volume and gate the minimum withdrawal amount.

// A single plan tier
pub struct Tier {
    pub index: u8,                  // Position in the tier table
    pub name: &'static str,         // Display name
    pub top_up_required: u64,       // Cumulative top-up needed to unlock this tier
    pub min_withdraw: u64           // Minimum withdrawal amount while on this tier
}

// The five plan tiers, ordered by strictly increasing top_up_required.
// Starter sits at 0 and is always unlocked.
pub const TIERS: [Tier; 5] = [
    Tier { index: 0, name: "Starter", top_up_required: 0,      min_withdraw: 1_000 },
    Tier { index: 1, name: "Pro",     top_up_required: 3_000,  min_withdraw: 5_000 },
    Tier { index: 2, name: "Elite",   top_up_required: 7_000,  min_withdraw: 12_000 },
    Tier { index: 3, name: "Titan",   top_up_required: 15_000, min_withdraw: 25_000 },
    Tier { index: 4, name: "Legend",  top_up_required: 30_000, min_withdraw: 50_000 }
];

// This function looks up a tier by its stored index, clamping out-of-range
// values to the highest tier
// Params
//   index - Stored tier index
// Return
//   Reference into the static tier table
pub fn tier_at(index: u8) -> &'static Tier {
    let i = (index as usize).min(TIERS.len() - 1);
    &TIERS[i]
}

// Resolved view of the tier table for one cumulative top-up total
pub struct TierStatus {
    pub current_index: usize,       // Highest unlocked tier index
    pub amount_to_next: u64         // Top-up still needed for the next tier, 0 at the top
}

impl TierStatus {
    pub fn current(&self) -> &'static Tier {
        &TIERS[self.current_index]
    }

    pub fn next(&self) -> Option<&'static Tier> {
        TIERS.get(self.current_index + 1)
    }

    // Unlocks are monotonic: reaching tier N unlocks every tier below it
    pub fn is_unlocked(&self, index: usize) -> bool {
        index <= self.current_index
    }
}

// This function resolves the current tier for a cumulative top-up total
// Params
//   cumulative_top_up - Sum of all approved top-ups
// Return
//   TierStatus with the highest unlocked tier and the gap to the next one
pub fn resolve_tier(cumulative_top_up: u64) -> TierStatus {
    let mut current_index = 0;
    for (i, tier) in TIERS.iter().enumerate() {
        if tier.top_up_required <= cumulative_top_up {
            current_index = i;
        }
    }
    let amount_to_next = match TIERS.get(current_index + 1) {
        Some(next) => next.top_up_required.saturating_sub(cumulative_top_up),
        None => 0
    };
    TierStatus { current_index, amount_to_next }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn table_is_strictly_increasing() {
        for pair in TIERS.windows(2) {
            assert!(pair[0].top_up_required < pair[1].top_up_required);
            assert!(pair[0].min_withdraw < pair[1].min_withdraw);
        }
    }

    #[test]
    fn starter_is_always_unlocked() {
        let status = resolve_tier(0);
        assert_eq!(status.current_index, 0);
        assert!(status.is_unlocked(0));
        assert_eq!(status.current().name, "Starter");
        assert_eq!(status.amount_to_next, 3_000);
    }

    #[test]
    fn exact_threshold_unlocks_the_tier() {
        let status = resolve_tier(3_000);
        assert_eq!(status.current_index, 1);
        assert_eq!(status.current().name, "Pro");
        assert_eq!(status.amount_to_next, 4_000);
        assert_eq!(status.next().unwrap().name, "Elite");
    }

    #[test]
    fn unlock_is_monotonic_over_lower_tiers() {
        let status = resolve_tier(16_000);
        assert_eq!(status.current_index, 3);
        for i in 0..=3 {
            assert!(status.is_unlocked(i));
        }
        assert!(!status.is_unlocked(4));
    }

    #[test]
    fn top_tier_has_no_next() {
        let status = resolve_tier(1_000_000);
        assert_eq!(status.current_index, 4);
        assert!(status.next().is_none());
        assert_eq!(status.amount_to_next, 0);
    }

    #[test]
    fn tier_at_clamps_out_of_range() {
        assert_eq!(tier_at(2).name, "Elite");
        assert_eq!(tier_at(200).name, "Legend");
    }

    proptest! {
        #[test]
        fn current_tier_threshold_is_satisfied(top_up in 0u64..100_000) {
            let status = resolve_tier(top_up);
            prop_assert!(TIERS[status.current_index].top_up_required <= top_up);
            if let Some(next) = status.next() {
                prop_assert!(next.top_up_required > top_up);
            }
        }

        #[test]
        fn resolution_is_monotonic(a in 0u64..100_000, b in 0u64..100_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(resolve_tier(lo).current_index <= resolve_tier(hi).current_index);
        }
    }
}
