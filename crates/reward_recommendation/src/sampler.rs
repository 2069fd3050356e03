// Rust guideline compliant 2026-08-30

//! Profile sampler -- generates random member profiles so the binary can
//! demonstrate the recommendation pipeline without the production member
//! store.
//!
//! Entry point: [`ProfileSampler::sample_members`]. Configuration via
//! [`SamplerConfig::builder`].

use chrono::{DateTime, Utc};
use domain::{Gender, Profile};
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};
use std::cell::RefCell;

// ---------------------------------------------------------------------------
// SamplerError
// ---------------------------------------------------------------------------

/// Errors that can occur during profile sampling.
#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    /// The supplied configuration is invalid.
    #[error("invalid sampler configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// SamplerConfig + builder
// ---------------------------------------------------------------------------

/// Runtime configuration for a [`ProfileSampler`].
///
/// Construct via [`SamplerConfig::builder`].
#[derive(Debug)]
pub struct SamplerConfig {
    /// Number of members to sample per call (range: `[1, ..]`).
    pub count: usize,
    /// Optional RNG seed for reproducible members. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// Builder for [`SamplerConfig`].
///
/// Obtain via [`SamplerConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct SamplerConfigBuilder {
    count: usize,
    seed: Option<u64>,
}

impl SamplerConfig {
    /// Create a builder. `count` is the only required parameter.
    ///
    /// Default values: `seed = None`.
    #[must_use]
    pub fn builder(count: usize) -> SamplerConfigBuilder {
        SamplerConfigBuilder { count, seed: None }
    }
}

impl SamplerConfigBuilder {
    /// Fix the RNG seed for deterministic members (useful in tests).
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::InvalidConfig`] when `count` is zero.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<SamplerConfig, SamplerError> {
        if self.count == 0 {
            return Err(SamplerError::InvalidConfig {
                reason: "count must be >= 1".to_owned(),
            });
        }
        Ok(SamplerConfig {
            count: self.count,
            seed: self.seed,
        })
    }
}

// ---------------------------------------------------------------------------
// ProfileSampler
// ---------------------------------------------------------------------------

/// One sampled member: a stable id plus the raw profile handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Member identifier (UUID v4-compatible random bytes).
    pub id: uuid::Uuid,
    /// Raw demographic profile.
    pub profile: Profile,
}

/// Enrollment window matching the fitted normalization ranges, Unix seconds.
const ENROLLMENT_WINDOW: (i64, i64) = (1_375_056_000, 1_532_563_200);

/// Share of members with an undisclosed age or income.
const MISSING_AGE_RATE: f64 = 0.10;
const MISSING_INCOME_RATE: f64 = 0.15;

/// Generates random member profiles spanning the population the demo
/// artifacts were fitted on: ages 18-100, incomes 30k-120k, enrollment
/// 2013-2018, all four gender codes, with occasional missing values.
#[derive(Debug)]
pub struct ProfileSampler {
    config: SamplerConfig,
    /// Interior mutability required because all public methods take `&self`.
    rng: RefCell<StdRng>,
}

impl ProfileSampler {
    /// Create a new sampler from `config`.
    ///
    /// Seeds the RNG from `config.seed` if set, otherwise from the OS.
    #[must_use]
    pub fn new(config: SamplerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng: RefCell::new(rng),
        }
    }

    /// Sample `config.count` random members.
    #[must_use]
    pub fn sample_members(&self) -> Vec<Member> {
        let mut rng = self.rng.borrow_mut();
        let mut members = Vec::with_capacity(self.config.count);
        for _ in 0..self.config.count {
            // Build UUID from raw random bytes (no v4 fast-path needed).
            let mut bytes = [0u8; 16];
            rng.fill_bytes(&mut bytes);
            let id = uuid::Builder::from_random_bytes(bytes).into_uuid();

            let age = if rng.random::<f64>() < MISSING_AGE_RATE {
                None
            } else {
                Some(f64::from(rng.random_range(18u32..=100u32)))
            };
            let income = if rng.random::<f64>() < MISSING_INCOME_RATE {
                None
            } else {
                // Dataset granularity is thousands of USD.
                Some(f64::from(rng.random_range(30u32..=120u32)) * 1_000.0)
            };

            let secs = rng.random_range(ENROLLMENT_WINDOW.0..=ENROLLMENT_WINDOW.1);
            // Window bounds are valid Unix timestamps; the fallback is unreachable.
            let enrollment_date =
                DateTime::from_timestamp(secs, 0).unwrap_or_else(|| DateTime::<Utc>::MIN_UTC);

            let gender = match rng.random_range(0u8..4u8) {
                0 => Gender::Female,
                1 => Gender::Male,
                2 => Gender::Other,
                _ => Gender::Unknown,
            };

            members.push(Member {
                id,
                profile: Profile {
                    age,
                    income,
                    enrollment_date,
                    gender,
                },
            });
        }
        log::debug!("sampler.members.generated: count={}", members.len());
        members
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero() {
        let result = SamplerConfig::builder(0).build();
        assert!(matches!(result, Err(SamplerError::InvalidConfig { .. })));
    }

    #[test]
    fn member_fields_valid() {
        let config = SamplerConfig::builder(200).seed(2).build().unwrap();
        let sampler = ProfileSampler::new(config);
        let members = sampler.sample_members();
        assert_eq!(members.len(), 200);
        for member in &members {
            if let Some(age) = member.profile.age {
                assert!((18.0..=100.0).contains(&age), "age {age} out of range");
            }
            if let Some(income) = member.profile.income {
                assert!(
                    (30_000.0..=120_000.0).contains(&income),
                    "income {income} out of range"
                );
            }
            let secs = member.profile.enrollment_date.timestamp();
            assert!(
                (ENROLLMENT_WINDOW.0..=ENROLLMENT_WINDOW.1).contains(&secs),
                "enrollment {secs} outside fitted window"
            );
        }
    }

    #[test]
    fn sampler_covers_missing_values_and_genders() {
        let config = SamplerConfig::builder(500).seed(9).build().unwrap();
        let sampler = ProfileSampler::new(config);
        let members = sampler.sample_members();

        assert!(members.iter().any(|m| m.profile.age.is_none()));
        assert!(members.iter().any(|m| m.profile.income.is_none()));
        for gender in [Gender::Female, Gender::Male, Gender::Other, Gender::Unknown] {
            assert!(
                members.iter().any(|m| m.profile.gender == gender),
                "gender {gender:?} never sampled"
            );
        }
    }

    #[test]
    fn seeded_sampler_deterministic() {
        let members1 =
            ProfileSampler::new(SamplerConfig::builder(20).seed(99).build().unwrap())
                .sample_members();
        let members2 =
            ProfileSampler::new(SamplerConfig::builder(20).seed(99).build().unwrap())
                .sample_members();
        assert_eq!(
            members1, members2,
            "identical seeds must produce identical members"
        );
    }
}
