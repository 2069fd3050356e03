// Rust guideline compliant 2026-08-30

//! Shared domain types for the reward-recommendation engine.
//!
//! Defines `Profile`, `FeatureVector`, `IncentiveCatalog`, `NormalizationModel`,
//! `AdjustedScores`, and the hexagonal port trait `Predictor`. All engine
//! components depend on this crate; no other workspace crate is imported here.

use chrono::{DateTime, Utc};

/// Total number of dimensions in a [`FeatureVector`].
pub const FEATURE_LEN: usize = 17;

/// Number of incentive one-hot slots at the front of the vector (ids 0-10).
pub const INCENTIVE_SLOTS: usize = 11;

/// Number of non-baseline incentives in a valid [`IncentiveCatalog`].
pub const INCENTIVE_COUNT: usize = 10;

/// Index of the age dimension.
pub const AGE_INDEX: usize = 11;

/// Index of the income dimension.
pub const INCOME_INDEX: usize = 12;

/// Index of the enrollment-timestamp dimension (seconds since the Unix epoch).
pub const ENROLLMENT_INDEX: usize = 13;

/// First index of the 3-wide gender one-hot block.
pub const GENDER_INDEX: usize = 14;

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Member gender, as declared at enrollment.
///
/// A closed four-way policy: unrecognized input is folded into `Unknown`,
/// never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Other,
    /// Not declared, or not one of the recognized codes.
    Unknown,
}

impl Gender {
    /// Map a raw gender code to a variant.
    ///
    /// Accepts the long form (`"Female"`) and the dataset short form (`"F"`),
    /// case-insensitively. Anything else is `Unknown` -- by contract this is
    /// not an error path.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        if code.eq_ignore_ascii_case("Female") || code.eq_ignore_ascii_case("F") {
            Self::Female
        } else if code.eq_ignore_ascii_case("Male") || code.eq_ignore_ascii_case("M") {
            Self::Male
        } else if code.eq_ignore_ascii_case("Other") || code.eq_ignore_ascii_case("O") {
            Self::Other
        } else {
            Self::Unknown
        }
    }

    /// One-hot encoding for the gender block (indices 14-16).
    ///
    /// Female = (1,0,0), Male = (0,1,0), Other = (0,0,1), Unknown = (0,0,0).
    #[must_use]
    pub fn one_hot(self) -> [f64; 3] {
        match self {
            Self::Female => [1.0, 0.0, 0.0],
            Self::Male => [0.0, 1.0, 0.0],
            Self::Other => [0.0, 0.0, 1.0],
            Self::Unknown => [0.0, 0.0, 0.0],
        }
    }
}

/// One member's raw demographic input, created per request and consumed once.
///
/// `age` and `income` are `None` when unknown; the encoder imputes population
/// means for them. `enrollment_date` always has a value -- the caller supplies
/// "now" as the default when the request omits it.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Age in years, or `None` if unknown.
    pub age: Option<f64>,
    /// Annual income in USD, or `None` if unknown.
    pub income: Option<f64>,
    /// Date the member enrolled in the rewards program.
    pub enrollment_date: DateTime<Utc>,
    /// Declared gender.
    pub gender: Gender,
}

// ---------------------------------------------------------------------------
// FeatureVector
// ---------------------------------------------------------------------------

/// Fixed-layout 17-dimension numeric encoding consumed by the regression model.
///
/// Layout contract:
/// - indices 0-10: incentive one-hot (at most one slot set; all zero for the
///   id-0 baseline -- slot 0 itself is reserved and never set),
/// - index 11: age, index 12: income, index 13: enrollment timestamp,
/// - indices 14-16: gender one-hot.
///
/// A vector is exclusively owned by the request that created it; the scorer
/// takes it by value and mutates the incentive slots in place across its
/// iteration loop.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_LEN],
}

impl FeatureVector {
    /// Wrap an already-built 17-dimension array.
    #[must_use]
    pub fn from_values(values: [f64; FEATURE_LEN]) -> Self {
        Self { values }
    }

    /// Borrow the underlying dimensions in layout order.
    #[must_use]
    pub fn values(&self) -> &[f64; FEATURE_LEN] {
        &self.values
    }

    /// Zero all incentive slots (indices 0-10).
    pub fn reset_incentive_slots(&mut self) {
        for v in &mut self.values[..INCENTIVE_SLOTS] {
            *v = 0.0;
        }
    }

    /// Set one incentive slot to 1.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= INCENTIVE_SLOTS`.
    pub fn set_incentive_slot(&mut self, slot: usize) {
        assert!(slot < INCENTIVE_SLOTS, "incentive slot {slot} out of range");
        self.values[slot] = 1.0;
    }

    /// Reset one incentive slot to 0.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= INCENTIVE_SLOTS`.
    pub fn clear_incentive_slot(&mut self, slot: usize) {
        assert!(slot < INCENTIVE_SLOTS, "incentive slot {slot} out of range");
        self.values[slot] = 0.0;
    }
}

// ---------------------------------------------------------------------------
// IncentiveCatalog
// ---------------------------------------------------------------------------

/// One promotional incentive definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incentive {
    /// Stable id in `1..=10`, matching the one-hot position in the vector.
    pub id: u8,
    /// Amount (USD) deducted from predicted spend when the offer is earned.
    pub reward_amount: f64,
    /// Minimum predicted spend (USD) required to earn the reward.
    pub difficulty: f64,
}

/// Errors from [`IncentiveCatalog`] validation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog does not contain exactly 10 non-baseline entries.
    #[error("catalog must have exactly {INCENTIVE_COUNT} entries, got {actual}")]
    WrongCount { actual: usize },
    /// An entry's id does not match its one-hot position.
    #[error("entry at position {position} must have id {expected}, got {actual}")]
    IdMismatch {
        position: usize,
        expected: u8,
        actual: u8,
    },
    /// An entry carries a non-finite or negative reward amount or difficulty.
    #[error("entry id {id} has invalid terms: reward_amount={reward_amount}, difficulty={difficulty}")]
    InvalidTerms {
        id: u8,
        reward_amount: f64,
        difficulty: f64,
    },
}

/// Ordered catalog of the 10 non-baseline incentives plus the implicit
/// id-0 baseline ("no incentive": amount 0, difficulty 0).
///
/// Loaded once at process start, read-only thereafter, shared across requests.
#[derive(Debug, Clone, PartialEq)]
pub struct IncentiveCatalog {
    entries: Vec<Incentive>,
}

impl IncentiveCatalog {
    /// Validate and build a catalog from the 10 non-baseline entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::WrongCount`] unless exactly 10 entries are
    /// supplied, [`CatalogError::IdMismatch`] unless ids are `1..=10` in
    /// order, and [`CatalogError::InvalidTerms`] for non-finite or negative
    /// reward amounts or difficulties.
    pub fn new(entries: Vec<Incentive>) -> Result<Self, CatalogError> {
        if entries.len() != INCENTIVE_COUNT {
            return Err(CatalogError::WrongCount {
                actual: entries.len(),
            });
        }
        for (position, entry) in entries.iter().enumerate() {
            // Position k holds id k+1; id 0 is the implicit baseline.
            #[expect(clippy::cast_possible_truncation, reason = "position < 10")]
            let expected = (position + 1) as u8;
            if entry.id != expected {
                return Err(CatalogError::IdMismatch {
                    position,
                    expected,
                    actual: entry.id,
                });
            }
            let valid = entry.reward_amount.is_finite()
                && entry.reward_amount >= 0.0
                && entry.difficulty.is_finite()
                && entry.difficulty >= 0.0;
            if !valid {
                return Err(CatalogError::InvalidTerms {
                    id: entry.id,
                    reward_amount: entry.reward_amount,
                    difficulty: entry.difficulty,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Reward amounts indexed by incentive id, baseline 0 inserted at index 0.
    #[must_use]
    pub fn reward_amounts(&self) -> [f64; INCENTIVE_SLOTS] {
        let mut amounts = [0.0; INCENTIVE_SLOTS];
        for entry in &self.entries {
            amounts[usize::from(entry.id)] = entry.reward_amount;
        }
        amounts
    }

    /// Difficulties indexed by incentive id, baseline 0 inserted at index 0.
    #[must_use]
    pub fn difficulties(&self) -> [f64; INCENTIVE_SLOTS] {
        let mut difficulties = [0.0; INCENTIVE_SLOTS];
        for entry in &self.entries {
            difficulties[usize::from(entry.id)] = entry.difficulty;
        }
        difficulties
    }

    /// The 10 non-baseline entries in id order.
    #[must_use]
    pub fn entries(&self) -> &[Incentive] {
        &self.entries
    }
}

// ---------------------------------------------------------------------------
// NormalizationModel
// ---------------------------------------------------------------------------

/// Fitted (min, max) pair for one feature dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRange {
    pub min: f64,
    pub max: f64,
}

impl FeatureRange {
    /// Convenience constructor.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Errors from [`NormalizationModel`] validation.
#[derive(Debug, thiserror::Error)]
pub enum NormalizationError {
    /// A dimension's fitted range is non-finite or not strictly increasing.
    #[error("dimension {index} has invalid range: min={min}, max={max}")]
    InvalidRange { index: usize, min: f64, max: f64 },
    /// A population mean is non-finite.
    #[error("population mean {name} must be finite, got {value}")]
    InvalidMean { name: &'static str, value: f64 },
}

/// Per-dimension min-max statistics fitted once against the historical
/// population, plus the population mean age and income used to impute
/// missing profile values.
///
/// Loaded once at process start, read-only thereafter, shared across requests.
/// The enrollment-timestamp range must have been fitted on the same epoch
/// scale the encoder produces (seconds since the Unix epoch), or scaled
/// outputs are meaningless.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationModel {
    ranges: [FeatureRange; FEATURE_LEN],
    mean_age: f64,
    mean_income: f64,
}

impl NormalizationModel {
    /// Validate and build a normalization model.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizationError::InvalidRange`] for any dimension whose
    /// fitted range is non-finite or has `min >= max`, and
    /// [`NormalizationError::InvalidMean`] for non-finite population means.
    pub fn new(
        ranges: [FeatureRange; FEATURE_LEN],
        mean_age: f64,
        mean_income: f64,
    ) -> Result<Self, NormalizationError> {
        for (index, range) in ranges.iter().enumerate() {
            if !range.min.is_finite() || !range.max.is_finite() || range.min >= range.max {
                return Err(NormalizationError::InvalidRange {
                    index,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if !mean_age.is_finite() {
            return Err(NormalizationError::InvalidMean {
                name: "age",
                value: mean_age,
            });
        }
        if !mean_income.is_finite() {
            return Err(NormalizationError::InvalidMean {
                name: "income",
                value: mean_income,
            });
        }
        Ok(Self {
            ranges,
            mean_age,
            mean_income,
        })
    }

    /// Population mean age, substituted when a profile's age is missing.
    #[must_use]
    pub fn mean_age(&self) -> f64 {
        self.mean_age
    }

    /// Population mean income, substituted when a profile's income is missing.
    #[must_use]
    pub fn mean_income(&self) -> f64 {
        self.mean_income
    }

    /// Apply min-max scaling independently per dimension:
    /// `(value - min) / (max - min)`.
    ///
    /// Applied literally to every dimension, binary ones included -- their
    /// fitted range is expected to be (0, 1), making scaling a no-op there.
    #[must_use]
    pub fn scale(&self, raw: &[f64; FEATURE_LEN]) -> [f64; FEATURE_LEN] {
        let mut scaled = [0.0; FEATURE_LEN];
        for (index, value) in raw.iter().enumerate() {
            let range = self.ranges[index];
            scaled[index] = (value - range.min) / (range.max - range.min);
        }
        scaled
    }
}

// ---------------------------------------------------------------------------
// Scores + recommendation
// ---------------------------------------------------------------------------

/// Net-of-cost expected-spend estimates, one per incentive id `0..=10`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustedScores {
    values: [f64; INCENTIVE_SLOTS],
}

impl AdjustedScores {
    /// Wrap an id-ordered score array.
    #[must_use]
    pub fn new(values: [f64; INCENTIVE_SLOTS]) -> Self {
        Self { values }
    }

    /// Borrow the scores in id order.
    #[must_use]
    pub fn values(&self) -> &[f64; INCENTIVE_SLOTS] {
        &self.values
    }

    /// Borrow the scores as a slice (for the selector and display layers).
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Outcome of one recommendation request: the winning incentive id and the
/// full adjusted-score array for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Recommended incentive id in `0..=10`; 0 means "no incentive".
    pub incentive_id: u8,
    /// Adjusted scores for all 11 options, id order.
    pub scores: AdjustedScores,
}

// ---------------------------------------------------------------------------
// Predictor port
// ---------------------------------------------------------------------------

/// Errors from the Predictor hexagonal port.
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    /// Inference could not be completed.
    #[error("inference failed: {reason}")]
    InferenceFailed {
        /// Human-readable description.
        reason: String,
    },
}

/// Hexagonal port: previously-fitted regression capability.
///
/// Accepts one normalized 17-dimension vector and returns the expected
/// transaction amount (USD) for that member/incentive combination. Training
/// and fitting happen elsewhere; implementations live in the binary crate
/// (e.g. `DemoPredictor`). The scorer depends exclusively on this trait --
/// never on a concrete adapter. No batching at this layer.
#[expect(
    async_fn_in_trait,
    reason = "no dyn dispatch needed; internal workspace only"
)]
pub trait Predictor {
    /// Predict the expected transaction amount for one feature vector.
    ///
    /// # Errors
    ///
    /// Returns `PredictorError::InferenceFailed` if inference fails.
    async fn predict(&self, features: &FeatureVector) -> Result<f64, PredictorError>;

    /// Name of this predictor (e.g. `"DEMO"`).
    fn name(&self) -> &str;

    /// Version string of the fitted artifact (e.g. `"1"`).
    fn version(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    // ------------------------------------------------------------------
    // Gender
    // ------------------------------------------------------------------

    #[test]
    fn gender_from_code_recognized() {
        assert_eq!(Gender::from_code("Female"), Gender::Female);
        assert_eq!(Gender::from_code("f"), Gender::Female);
        assert_eq!(Gender::from_code("MALE"), Gender::Male);
        assert_eq!(Gender::from_code("M"), Gender::Male);
        assert_eq!(Gender::from_code("Other"), Gender::Other);
        assert_eq!(Gender::from_code(" o "), Gender::Other);
    }

    #[test]
    fn gender_from_code_unrecognized_is_unknown() {
        assert_eq!(Gender::from_code(""), Gender::Unknown);
        assert_eq!(Gender::from_code("U"), Gender::Unknown);
        assert_eq!(Gender::from_code("nonbinary"), Gender::Unknown);
        assert_eq!(Gender::from_code("42"), Gender::Unknown);
    }

    #[test]
    fn gender_one_hot_patterns() {
        assert_eq!(Gender::Female.one_hot(), [1.0, 0.0, 0.0]);
        assert_eq!(Gender::Male.one_hot(), [0.0, 1.0, 0.0]);
        assert_eq!(Gender::Other.one_hot(), [0.0, 0.0, 1.0]);
        assert_eq!(Gender::Unknown.one_hot(), [0.0, 0.0, 0.0]);
    }

    // ------------------------------------------------------------------
    // FeatureVector slot discipline
    // ------------------------------------------------------------------

    #[test]
    fn feature_vector_slot_ops() {
        let mut v = FeatureVector::from_values([0.5; FEATURE_LEN]);
        v.reset_incentive_slots();
        assert!(v.values()[..INCENTIVE_SLOTS].iter().all(|&x| x == 0.0));
        // Non-incentive dimensions untouched.
        assert!(v.values()[INCENTIVE_SLOTS..].iter().all(|&x| x == 0.5));

        v.set_incentive_slot(3);
        assert_eq!(v.values()[3], 1.0);
        v.clear_incentive_slot(3);
        assert_eq!(v.values()[3], 0.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn feature_vector_slot_out_of_range_panics() {
        let mut v = FeatureVector::from_values([0.0; FEATURE_LEN]);
        v.set_incentive_slot(INCENTIVE_SLOTS);
    }

    // ------------------------------------------------------------------
    // Catalog validation
    // ------------------------------------------------------------------

    fn valid_entries() -> Vec<Incentive> {
        (1..=10)
            .map(|id| Incentive {
                id,
                reward_amount: f64::from(id),
                difficulty: f64::from(id) * 2.0,
            })
            .collect()
    }

    #[test]
    fn catalog_accepts_ten_ordered_entries() {
        let catalog = IncentiveCatalog::new(valid_entries()).unwrap();
        assert_eq!(catalog.entries().len(), INCENTIVE_COUNT);
    }

    #[test]
    fn catalog_rejects_wrong_count() {
        let mut entries = valid_entries();
        entries.pop();
        let result = IncentiveCatalog::new(entries);
        assert!(matches!(result, Err(CatalogError::WrongCount { actual: 9 })));
    }

    #[test]
    fn catalog_rejects_id_mismatch() {
        let mut entries = valid_entries();
        entries[4].id = 9;
        let result = IncentiveCatalog::new(entries);
        assert!(matches!(
            result,
            Err(CatalogError::IdMismatch {
                position: 4,
                expected: 5,
                actual: 9
            })
        ));
    }

    #[test]
    fn catalog_rejects_negative_terms() {
        let mut entries = valid_entries();
        entries[0].reward_amount = -1.0;
        let result = IncentiveCatalog::new(entries);
        assert!(matches!(result, Err(CatalogError::InvalidTerms { id: 1, .. })));
    }

    #[test]
    fn catalog_inserts_baseline_at_index_zero() {
        let catalog = IncentiveCatalog::new(valid_entries()).unwrap();
        let rewards = catalog.reward_amounts();
        let difficulties = catalog.difficulties();
        assert_eq!(rewards[0], 0.0);
        assert_eq!(difficulties[0], 0.0);
        assert_eq!(rewards[3], 3.0);
        assert_eq!(difficulties[3], 6.0);
        assert_eq!(rewards[10], 10.0);
        assert_eq!(difficulties[10], 20.0);
    }

    // ------------------------------------------------------------------
    // NormalizationModel
    // ------------------------------------------------------------------

    fn unit_ranges() -> [FeatureRange; FEATURE_LEN] {
        [FeatureRange::new(0.0, 1.0); FEATURE_LEN]
    }

    #[test]
    fn normalization_rejects_inverted_range() {
        let mut ranges = unit_ranges();
        ranges[12] = FeatureRange::new(5.0, 5.0);
        let result = NormalizationModel::new(ranges, 50.0, 60_000.0);
        assert!(matches!(
            result,
            Err(NormalizationError::InvalidRange { index: 12, .. })
        ));
    }

    #[test]
    fn normalization_rejects_non_finite_mean() {
        let result = NormalizationModel::new(unit_ranges(), f64::NAN, 60_000.0);
        assert!(matches!(
            result,
            Err(NormalizationError::InvalidMean { name: "age", .. })
        ));
    }

    #[test]
    fn scale_applies_min_max_per_dimension() {
        let mut ranges = unit_ranges();
        ranges[AGE_INDEX] = FeatureRange::new(20.0, 70.0);
        let model = NormalizationModel::new(ranges, 50.0, 60_000.0).unwrap();

        let mut raw = [0.0; FEATURE_LEN];
        raw[AGE_INDEX] = 45.0;
        raw[GENDER_INDEX] = 1.0;
        let scaled = model.scale(&raw);

        assert!((scaled[AGE_INDEX] - 0.5).abs() < 1e-12);
        // Binary dimension with (0, 1) fitted range: identity.
        assert_eq!(scaled[GENDER_INDEX], 1.0);
        assert_eq!(scaled[0], 0.0);
    }

    // ------------------------------------------------------------------
    // Predictor port -- compile check
    // ------------------------------------------------------------------

    /// Verify that a minimal `Predictor` implementation compiles and satisfies
    /// all methods.
    #[tokio::test]
    async fn predictor_trait_compiles_with_minimal_impl() {
        struct MinimalPredictor;

        impl Predictor for MinimalPredictor {
            async fn predict(&self, _features: &FeatureVector) -> Result<f64, PredictorError> {
                Ok(0.0)
            }

            fn name(&self) -> &str {
                "minimal"
            }

            fn version(&self) -> &str {
                "0"
            }
        }

        let p = MinimalPredictor;
        let v = FeatureVector::from_values([0.0; FEATURE_LEN]);
        let amount = p.predict(&v).await.unwrap();
        assert_eq!(amount, 0.0);
        assert_eq!(p.name(), "minimal");
        assert_eq!(p.version(), "0");
    }

    // ------------------------------------------------------------------
    // Profile
    // ------------------------------------------------------------------

    #[test]
    fn profile_fields() {
        let date = Utc.with_ymd_and_hms(2017, 5, 3, 0, 0, 0).unwrap();
        let profile = Profile {
            age: Some(33.0),
            income: None,
            enrollment_date: date,
            gender: Gender::Other,
        };
        assert_eq!(profile.age, Some(33.0));
        assert!(profile.income.is_none());
        assert_eq!(profile.enrollment_date, date);
        assert_eq!(profile.gender, Gender::Other);
    }
}
