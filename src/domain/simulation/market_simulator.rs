//! Market Simulator - multinomial logit choice shares.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::UtilityTable;
use crate::domain::foundation::Profile;

/// Predicted share for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketShare {
    pub profile: Profile,
    pub total_utility: f64,
    /// Fraction of choices, 0.0 to 1.0.
    pub share: f64,
}

/// Logit share-of-preference simulation.
pub struct MarketSimulator;

impl MarketSimulator {
    /// Predicts choice shares for competing profiles, in input order.
    ///
    /// # Algorithm
    /// `V_j = Σ utilities[attr][level]` over the profile's attributes, then
    /// `P(j) = exp(V_j - max V) / Σ exp(V_k - max V)`.
    ///
    /// # Edge Cases
    /// - Unknown attributes or levels contribute 0
    /// - Empty input: empty output
    /// - Degenerate exponential sum (0 or not finite): every share is 0
    pub fn simulate(utilities: &UtilityTable, profiles: &[Profile]) -> Vec<MarketShare> {
        let totals: Vec<f64> = profiles
            .iter()
            .map(|p| Self::total_utility(utilities, p))
            .collect();

        let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = totals.iter().map(|u| (u - max).exp()).collect();
        let sum: f64 = exps.iter().sum();
        let usable = sum > 0.0 && sum.is_finite();

        profiles
            .iter()
            .zip(totals)
            .zip(exps)
            .map(|((profile, total_utility), exp)| MarketShare {
                profile: profile.clone(),
                total_utility,
                share: if usable { exp / sum } else { 0.0 },
            })
            .collect()
    }

    /// Sum of part-worths for the profile's levels.
    pub fn total_utility(utilities: &UtilityTable, profile: &Profile) -> f64 {
        profile
            .iter()
            .filter_map(|(attribute, level)| utilities.get(attribute, level))
            .sum()
    }

    /// Orders results by share, highest first. Ties keep input order.
    pub fn rank(mut shares: Vec<MarketShare>) -> Vec<MarketShare> {
        shares.sort_by(|a, b| b.share.total_cmp(&a.share));
        shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::OrderedMap;
    use proptest::prelude::*;

    fn table(entries: &[(&str, &[(&str, f64)])]) -> UtilityTable {
        entries
            .iter()
            .map(|(attr, levels)| {
                let map: OrderedMap<f64> = levels.iter().map(|(l, u)| (*l, *u)).collect();
                (*attr, map)
            })
            .collect()
    }

    fn option(name: &str) -> Profile {
        Profile::new().with("option", name)
    }

    fn options_table(a: f64, b: f64, c: f64) -> UtilityTable {
        table(&[("option", &[("A", a), ("B", b), ("C", c)])])
    }

    #[test]
    fn shares_sum_to_one() {
        let utilities = options_table(1.0, 1.0, 2.0);
        let shares =
            MarketSimulator::simulate(&utilities, &[option("A"), option("B"), option("C")]);

        let total: f64 = shares.iter().map(|s| s.share).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((shares[0].share - shares[1].share).abs() < 1e-12);
        assert!(shares[2].share > shares[0].share);
    }

    #[test]
    fn shares_are_shift_invariant() {
        let profiles = [option("A"), option("B"), option("C")];
        let base = MarketSimulator::simulate(&options_table(1.0, 1.0, 2.0), &profiles);
        let shifted = MarketSimulator::simulate(&options_table(2.0, 2.0, 3.0), &profiles);

        for (a, b) in base.iter().zip(&shifted) {
            assert!((a.share - b.share).abs() < 1e-12);
        }
    }

    #[test]
    fn total_utility_sums_known_levels_only() {
        let utilities = table(&[
            ("price", &[("low", 0.5), ("high", -0.5)]),
            ("brand", &[("X", 0.25), ("Y", -0.25)]),
        ]);
        let profile = Profile::new()
            .with("price", "low")
            .with("brand", "Z")
            .with("color", "red");

        assert!((MarketSimulator::total_utility(&utilities, &profile) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(MarketSimulator::simulate(&options_table(0.0, 0.0, 0.0), &[]).is_empty());
    }

    #[test]
    fn non_finite_utilities_yield_zero_shares() {
        let utilities = options_table(f64::INFINITY, f64::INFINITY, 0.0);
        let shares = MarketSimulator::simulate(&utilities, &[option("A"), option("B")]);
        assert!(shares.iter().all(|s| s.share == 0.0));
    }

    #[test]
    fn rank_orders_by_share_descending() {
        let utilities = options_table(0.0, 2.0, 1.0);
        let shares =
            MarketSimulator::simulate(&utilities, &[option("A"), option("B"), option("C")]);
        let ranked = MarketSimulator::rank(shares);

        let order: Vec<_> = ranked
            .iter()
            .map(|s| s.profile.level("option").unwrap().to_string())
            .collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    proptest! {
        #[test]
        fn shares_always_sum_to_one(
            utils in prop::collection::vec(-20.0f64..20.0, 1..8),
            shift in -50.0f64..50.0,
        ) {
            let levels: Vec<(String, f64)> =
                utils.iter().enumerate().map(|(i, u)| (format!("o{}", i), *u)).collect();
            let shifted_levels: Vec<(String, f64)> =
                levels.iter().map(|(k, u)| (k.clone(), u + shift)).collect();

            let base: UtilityTable =
                vec![("option", levels.into_iter().collect::<OrderedMap<f64>>())]
                    .into_iter()
                    .collect();
            let moved: UtilityTable =
                vec![("option", shifted_levels.into_iter().collect::<OrderedMap<f64>>())]
                    .into_iter()
                    .collect();

            let profiles: Vec<Profile> =
                (0..utils.len()).map(|i| option(&format!("o{}", i))).collect();

            let a = MarketSimulator::simulate(&base, &profiles);
            let b = MarketSimulator::simulate(&moved, &profiles);

            let total: f64 = a.iter().map(|s| s.share).sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
            for (x, y) in a.iter().zip(&b) {
                prop_assert!((x.share - y.share).abs() < 1e-9);
            }
        }
    }
}
