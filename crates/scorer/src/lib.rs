// Rust guideline compliant 2026-08-30

//! Reward Scorer component -- runs one inference per candidate incentive,
//! applies the net-cost adjustment, and selects the best option.
//!
//! Entry points: [`Scorer::score`] and [`select_best`].

use domain::{
    AdjustedScores, FeatureVector, INCENTIVE_SLOTS, IncentiveCatalog, Predictor, PredictorError,
};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while scoring incentives.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// An inference call failed or produced a non-numeric result.
    ///
    /// Scoring is atomic: all 11 predictions must succeed or the whole call
    /// fails -- partial results are never returned.
    #[error("model inference failed: {reason}")]
    ModelInference {
        /// Human-readable description.
        reason: String,
    },
}

impl From<PredictorError> for ScoreError {
    fn from(source: PredictorError) -> Self {
        Self::ModelInference {
            reason: source.to_string(),
        }
    }
}

/// Errors from the recommendation selector.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// The score array is not exactly 11 long -- a contract violation by the
    /// caller, not a runtime data condition.
    #[error("expected exactly {INCENTIVE_SLOTS} scores, got {actual}")]
    EmptyScores { actual: usize },
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Runs the per-incentive inference loop against an injected [`Predictor`].
///
/// Generic over `P: Predictor` for zero-cost static dispatch. Holds no
/// catalog or vector state -- the catalog is injected per call and the
/// vector is consumed by value, so a single vector instance can never be
/// shared across concurrent scoring calls.
#[derive(Debug)]
pub struct Scorer<P: Predictor> {
    predictor: P,
}

impl<P: Predictor> Scorer<P> {
    /// Create a new scorer wrapping `predictor`.
    #[must_use]
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }

    /// Score every incentive option for one encoded member.
    ///
    /// Takes the vector by value: the incentive slots are mutated in place
    /// across the 11 iterations, and ownership guarantees no concurrent
    /// reuse. For each id `0..=10` in ascending order, exactly one slot is
    /// set to 1 before the prediction and reset to 0 after it -- except id 0,
    /// the "no incentive" baseline, which keeps all slots at zero (slot 0 is
    /// reserved and never set). The raw prediction is then discounted by the
    /// incentive's reward amount, but only when it meets the incentive's
    /// difficulty (inclusive threshold).
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::ModelInference`] if any of the 11 predictions
    /// fails or yields a non-finite value. No partial results.
    pub async fn score(
        &self,
        mut features: FeatureVector,
        catalog: &IncentiveCatalog,
    ) -> Result<AdjustedScores, ScoreError> {
        log::debug!(
            "scorer.score: model={} version={}",
            self.predictor.name(),
            self.predictor.version()
        );

        // Post-encoder vectors already satisfy this; re-assert the invariant
        // so at most one slot is ever set below.
        features.reset_incentive_slots();

        let mut raw = [0.0_f64; INCENTIVE_SLOTS];
        for (id, slot) in raw.iter_mut().enumerate() {
            if id > 0 {
                features.set_incentive_slot(id);
            }
            let prediction = self.predictor.predict(&features).await?;
            if id > 0 {
                features.clear_incentive_slot(id);
            }
            if !prediction.is_finite() {
                return Err(ScoreError::ModelInference {
                    reason: format!("non-numeric prediction {prediction} for incentive {id}"),
                });
            }
            *slot = prediction;
        }

        let rewards = catalog.reward_amounts();
        let difficulties = catalog.difficulties();
        let mut adjusted = [0.0_f64; INCENTIVE_SLOTS];
        for id in 0..INCENTIVE_SLOTS {
            // The reward is only paid (and deducted) when the predicted spend
            // meets the incentive's minimum-spend floor.
            let offer_met = raw[id] >= difficulties[id];
            adjusted[id] = if offer_met { raw[id] - rewards[id] } else { raw[id] };
            log::trace!(
                "scorer.adjusted: id={id} raw={} met={offer_met} adjusted={}",
                raw[id],
                adjusted[id]
            );
        }
        Ok(AdjustedScores::new(adjusted))
    }

    /// Name of the wrapped predictor.
    #[must_use]
    pub fn predictor_name(&self) -> &str {
        self.predictor.name()
    }
}

// ---------------------------------------------------------------------------
// select_best
// ---------------------------------------------------------------------------

/// Return the incentive id with the maximum adjusted score.
///
/// Ties break toward the lowest id (first-occurrence maximum), so selection
/// is deterministic.
///
/// # Errors
///
/// Returns [`SelectError::EmptyScores`] when `scores` is not exactly 11 long.
pub fn select_best(scores: &[f64]) -> Result<u8, SelectError> {
    if scores.len() != INCENTIVE_SLOTS {
        return Err(SelectError::EmptyScores {
            actual: scores.len(),
        });
    }
    let mut best = 0_usize;
    for (id, &score) in scores.iter().enumerate().skip(1) {
        // Strict comparison keeps the first occurrence on ties.
        if score > scores[best] {
            best = id;
        }
    }
    #[expect(clippy::cast_possible_truncation, reason = "index bounded by 11")]
    let best = best as u8;
    Ok(best)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
