//! The recommendation engine
//!
//! Combines the catalog snapshot with the precomputed similarity matrix to
//! answer per-drink queries with three independent rules: similar drinks,
//! premium upsell, and food pairings.

use brewrec_core::{Catalog, Drink, Error, Result};
use brewrec_model::{encode_catalog, SimilarityMatrix};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;
use std::sync::Arc;

/// Cap on similar-drink results
pub const MAX_SIMILAR: usize = 2;
/// Cap on premium upsell results
pub const MAX_UPSELL: usize = 2;

/// Which attributes a premium upsell candidate must share with the target.
///
/// The two observed rule sets disagree on whether temperature must match,
/// so the choice is an explicit configuration rather than a hardcoded join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpsellPolicy {
    /// Candidate must match the target's milk flag
    #[default]
    MatchMilk,
    /// Candidate must match both the milk flag and the temperature style
    MatchMilkAndTemperature,
}

/// Structured recommendation result for one drink.
///
/// Every list may be shorter than its cap, or empty; "no upsell exists" and
/// "no pairing defined" are valid outcomes, not errors.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub selected_drink: String,
    pub price: f64,
    pub similar_drinks: Vec<String>,
    pub premium_upsell: Vec<String>,
    pub food_pairings: Vec<String>,
}

/// Recommendation engine over an immutable catalog snapshot.
///
/// Built once at startup; the feature table and similarity matrix are
/// computed in the constructor and never change afterwards, so the engine
/// can be shared across concurrent requests behind an `Arc` without locks.
pub struct Recommender {
    catalog: Arc<Catalog>,
    matrix: SimilarityMatrix,
    policy: UpsellPolicy,
}

impl Recommender {
    /// Encode the catalog and build the similarity matrix.
    ///
    /// Any data-integrity failure aborts construction; a partially
    /// initialized engine is never returned.
    pub fn build(catalog: Arc<Catalog>, policy: UpsellPolicy) -> Result<Self> {
        let vectors = encode_catalog(&catalog)?;
        let matrix = SimilarityMatrix::from_vectors(&vectors);
        Ok(Self {
            catalog,
            matrix,
            policy,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    #[must_use]
    pub fn policy(&self) -> UpsellPolicy {
        self.policy
    }

    /// Produce recommendations for a drink, looked up by exact name.
    ///
    /// An unknown name fails with [`Error::DrinkNotFound`]; that is the only
    /// per-request failure. All other degenerate branches resolve to empty
    /// or partial lists.
    pub fn recommend(&self, name: &str) -> Result<Recommendation> {
        let idx = self
            .catalog
            .position(name)
            .ok_or_else(|| Error::DrinkNotFound(name.to_string()))?;
        let target = &self.catalog.drinks()[idx];

        Ok(Recommendation {
            selected_drink: target.name.clone(),
            price: target.price,
            similar_drinks: self.similar_to(idx),
            premium_upsell: self.upsell_for(target),
            food_pairings: self.pairings_for(target),
        })
    }

    /// Top drinks by similarity score, excluding the target.
    /// The sort is stable, so ties break by catalog order.
    fn similar_to(&self, idx: usize) -> Vec<String> {
        let row = self.matrix.row(idx);
        let mut ranked: Vec<usize> = (0..row.len()).filter(|&j| j != idx).collect();
        ranked.sort_by_key(|&j| Reverse(OrderedFloat(row[j])));
        ranked
            .into_iter()
            .take(MAX_SIMILAR)
            .map(|j| self.catalog.drinks()[j].name.clone())
            .collect()
    }

    /// Strictly costlier drinks matching the configured policy, cheapest
    /// qualifying step-up first.
    fn upsell_for(&self, target: &Drink) -> Vec<String> {
        let mut candidates: Vec<&Drink> = self
            .catalog
            .drinks()
            .iter()
            .filter(|d| d.price > target.price && d.milk_based == target.milk_based)
            .filter(|d| match self.policy {
                UpsellPolicy::MatchMilk => true,
                UpsellPolicy::MatchMilkAndTemperature => d.temperature == target.temperature,
            })
            .collect();
        candidates.sort_by_key(|d| OrderedFloat(d.price));
        candidates
            .into_iter()
            .take(MAX_UPSELL)
            .map(|d| d.name.clone())
            .collect()
    }

    /// Foods indexed under the target's category or its level, deduped,
    /// in food-catalog order. Uncapped.
    fn pairings_for(&self, target: &Drink) -> Vec<String> {
        let mut positions: Vec<usize> = self
            .catalog
            .foods_for(&target.category)
            .iter()
            .chain(self.catalog.foods_for(&target.level))
            .copied()
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
            .into_iter()
            .map(|pos| self.catalog.foods()[pos].name.clone())
            .collect()
    }
}
