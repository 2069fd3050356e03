// Rust guideline compliant 2026-08-30

//! Recommender component -- one-shot per-request pipeline:
//! raw profile -> Feature Encoder -> Reward Scorer -> selector -> recommended
//! incentive id.
//!
//! Entry point: [`Recommender::recommend`]. The request layer supplies a
//! parsed [`Profile`] plus the process-wide read-only artifacts and gets back
//! a [`Recommendation`] with the winning id and the full score array.

use domain::{IncentiveCatalog, NormalizationModel, Predictor, Profile, Recommendation};
use encoder::EncodeError;
use scorer::{ScoreError, Scorer, SelectError};

// ---------------------------------------------------------------------------
// RecommendError
// ---------------------------------------------------------------------------

/// Errors that can occur during a recommendation request.
///
/// No error is recovered here: a failed encode or score aborts the request,
/// and the caller decides what to show instead.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    /// Profile encoding failed.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
    /// Incentive scoring failed.
    #[error("score error: {0}")]
    Score(#[from] ScoreError),
    /// Selection failed (length contract violation).
    #[error("select error: {0}")]
    Select(#[from] SelectError),
}

// ---------------------------------------------------------------------------
// Recommender
// ---------------------------------------------------------------------------

/// Per-request recommendation pipeline over an injected [`Predictor`].
///
/// Holds only the scorer (and through it the predictor); the normalization
/// model and catalog are injected per call, matching their process-wide
/// read-only lifecycle. Each call allocates its own feature vector, so
/// concurrent requests share nothing mutable.
#[derive(Debug)]
pub struct Recommender<P: Predictor> {
    scorer: Scorer<P>,
}

impl<P: Predictor> Recommender<P> {
    /// Create a new recommender wrapping `predictor`.
    #[must_use]
    pub fn new(predictor: P) -> Self {
        Self {
            scorer: Scorer::new(predictor),
        }
    }

    /// Recommend the incentive that maximizes net expected spend for one member.
    ///
    /// Runs encode, then the 11-way scoring loop, then first-max selection.
    ///
    /// # Errors
    ///
    /// Propagates [`EncodeError`] for invalid profile values and
    /// [`ScoreError`] when any inference fails; [`SelectError`] cannot occur
    /// for scores produced here but is surfaced rather than swallowed.
    pub async fn recommend(
        &self,
        profile: &Profile,
        normalization: &NormalizationModel,
        catalog: &IncentiveCatalog,
    ) -> Result<Recommendation, RecommendError> {
        let features = encoder::encode(profile, normalization)?;
        let scores = self.scorer.score(features, catalog).await?;
        let incentive_id = scorer::select_best(scores.as_slice())?;
        log::info!(
            "recommender.done: model={} incentive_id={incentive_id}",
            self.scorer.predictor_name()
        );
        Ok(Recommendation {
            incentive_id,
            scores,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
