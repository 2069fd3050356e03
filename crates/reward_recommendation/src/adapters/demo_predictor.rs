// Rust guideline compliant 2026-08-30

//! DEMO predictor adapter for the `Predictor` port.
//!
//! Stands in for the externally fitted regression artifact: a fixed linear
//! model over the 17 normalized features plus a small seeded noise term, so
//! demo runs produce plausible, varied spend predictions. Supports seeded
//! randomness for reproducible tests.

use std::cell::RefCell;

use domain::{FEATURE_LEN, FeatureVector, Predictor, PredictorError};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Baseline expected spend (USD) for an all-zero normalized vector.
const INTERCEPT: f64 = 8.0;

/// Linear coefficients in feature-layout order: 11 incentive slots (slot 0
/// reserved, weight 0), age, income, enrollment timestamp, gender F/M/O.
const WEIGHTS: [f64; FEATURE_LEN] = [
    0.0, 2.5, 1.0, 4.0, 3.2, 0.5, 1.8, 2.2, 6.0, 1.2, 3.9, // incentive slots
    4.0, 9.0, -2.0, // age, income, enrollment tstamp
    1.5, 0.8, 1.1, // gender one-hot
];

/// Half-width of the uniform noise band added to each prediction (USD).
const NOISE: f64 = 0.25;

/// Concrete adapter for the `domain::Predictor` port.
///
/// `predict` is `intercept + weights . features + noise`; always finite for
/// finite inputs, so inference never fails here.
#[derive(Debug)]
pub struct DemoPredictor {
    /// RNG for the noise term; interior mutability required (trait takes `&self`).
    rng: RefCell<StdRng>,
}

impl DemoPredictor {
    /// Create a new DEMO predictor.
    ///
    /// `seed = Some(s)` produces deterministic predictions; `None` seeds from
    /// the OS.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl Predictor for DemoPredictor {
    /// Predict an expected transaction amount for one normalized vector.
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Ok(f64)`.
    async fn predict(&self, features: &FeatureVector) -> Result<f64, PredictorError> {
        let dot: f64 = features
            .values()
            .iter()
            .zip(WEIGHTS)
            .map(|(value, weight)| value * weight)
            .sum();
        let noise = self.rng.borrow_mut().random_range(-NOISE..=NOISE);
        let amount = INTERCEPT + dot + noise;
        log::debug!("demo_predictor.predict: amount={amount:.2}");
        Ok(amount)
    }

    fn name(&self) -> &str {
        "DEMO"
    }

    fn version(&self) -> &str {
        "1"
    }
}
