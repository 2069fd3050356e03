// Rust guideline compliant 2026-08-30

//! Demo artifacts for the reward-recommendation binary.
//!
//! In production the normalization model and incentive catalog are fitted and
//! persisted by the training pipeline; here they are rebuilt in code from the
//! historical population statistics so the binary is self-contained.

use domain::{
    AGE_INDEX, CatalogError, ENROLLMENT_INDEX, FEATURE_LEN, FeatureRange, INCOME_INDEX, Incentive,
    IncentiveCatalog, NormalizationError, NormalizationModel,
};

/// Population mean age (years), used to impute missing ages.
const MEAN_AGE: f64 = 54.4;

/// Population mean income (USD/year), used to impute missing incomes.
const MEAN_INCOME: f64 = 65_404.99;

/// Fitted age range of the member population.
const AGE_RANGE: (f64, f64) = (18.0, 101.0);

/// Fitted income range of the member population.
const INCOME_RANGE: (f64, f64) = (30_000.0, 120_000.0);

/// Fitted enrollment window, Unix seconds (2013-07-29 .. 2018-07-26).
const ENROLLMENT_RANGE: (f64, f64) = (1_375_056_000.0, 1_532_563_200.0);

/// Build the demo normalization model.
///
/// Binary dimensions (incentive and gender slots) carry the (0, 1) range the
/// scaler fits on one-hot columns, making scaling an identity there.
///
/// # Errors
///
/// Returns [`NormalizationError`] if the hard-coded statistics are invalid
/// (a programming error caught at startup).
pub fn demo_normalization() -> Result<NormalizationModel, NormalizationError> {
    let mut ranges = [FeatureRange::new(0.0, 1.0); FEATURE_LEN];
    ranges[AGE_INDEX] = FeatureRange::new(AGE_RANGE.0, AGE_RANGE.1);
    ranges[INCOME_INDEX] = FeatureRange::new(INCOME_RANGE.0, INCOME_RANGE.1);
    ranges[ENROLLMENT_INDEX] = FeatureRange::new(ENROLLMENT_RANGE.0, ENROLLMENT_RANGE.1);
    NormalizationModel::new(ranges, MEAN_AGE, MEAN_INCOME)
}

/// Build the demo incentive catalog: the historical 10-offer portfolio.
///
/// Reward amount is the cost paid out when the offer is earned; difficulty is
/// the minimum spend that earns it. Zero/zero entries are informational
/// offers with no payout.
///
/// # Errors
///
/// Returns [`CatalogError`] if the hard-coded portfolio is invalid
/// (a programming error caught at startup).
pub fn demo_catalog() -> Result<IncentiveCatalog, CatalogError> {
    let terms: [(f64, f64); 10] = [
        (10.0, 10.0),
        (10.0, 10.0),
        (0.0, 0.0),
        (5.0, 5.0),
        (5.0, 20.0),
        (3.0, 7.0),
        (2.0, 10.0),
        (0.0, 0.0),
        (5.0, 5.0),
        (2.0, 10.0),
    ];
    let entries = terms
        .iter()
        .enumerate()
        .map(|(position, &(reward_amount, difficulty))| {
            #[expect(clippy::cast_possible_truncation, reason = "position < 10")]
            let id = (position + 1) as u8;
            Incentive {
                id,
                reward_amount,
                difficulty,
            }
        })
        .collect();
    IncentiveCatalog::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_normalization_is_valid() {
        let model = demo_normalization().unwrap();
        assert_eq!(model.mean_age(), MEAN_AGE);
        assert_eq!(model.mean_income(), MEAN_INCOME);
    }

    #[test]
    fn demo_catalog_is_valid() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(catalog.entries().len(), 10);
        // Baseline inserted at index 0, portfolio terms after it.
        assert_eq!(catalog.reward_amounts()[0], 0.0);
        assert_eq!(catalog.reward_amounts()[1], 10.0);
        assert_eq!(catalog.difficulties()[5], 20.0);
    }

    #[test]
    fn demo_normalization_scales_population_midpoints() {
        let model = demo_normalization().unwrap();
        let mut raw = [0.0; FEATURE_LEN];
        raw[AGE_INDEX] = (AGE_RANGE.0 + AGE_RANGE.1) / 2.0;
        let scaled = model.scale(&raw);
        assert!((scaled[AGE_INDEX] - 0.5).abs() < 1e-12);
    }
}
