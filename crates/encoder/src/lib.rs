// Rust guideline compliant 2026-08-30

//! Feature Encoder component -- turns a raw member [`Profile`] into the
//! normalized, fixed-layout 17-dimension [`FeatureVector`] the regression
//! model was fitted against.
//!
//! Entry points: [`encode`] for already-typed profiles and [`parse_profile`]
//! for the string boundary of the request layer. Both are pure functions.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use domain::{
    AGE_INDEX, ENROLLMENT_INDEX, FEATURE_LEN, FeatureVector, GENDER_INDEX, Gender, INCOME_INDEX,
    NormalizationModel, Profile,
};

// ---------------------------------------------------------------------------
// EncodeError
// ---------------------------------------------------------------------------

/// Errors that can occur while encoding a profile.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A supplied value cannot be interpreted as the required type.
    ///
    /// Raised for present-but-non-numeric age or income and for enrollment
    /// dates that cannot be interpreted as dates. Missing age or income is
    /// not an error -- imputation is the designed default path.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Human-readable description of the problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// encode
// ---------------------------------------------------------------------------

/// Encode a typed profile into a normalized feature vector.
///
/// Missing age and income are imputed from the normalization model's
/// population means before scaling. The incentive slots (indices 0-10) are
/// left at zero -- no incentive is pre-selected; the scorer toggles them.
/// Deterministic: the same profile and model yield a bit-identical vector.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidInput`] when age or income is present but
/// not a finite number.
pub fn encode(
    profile: &Profile,
    normalization: &NormalizationModel,
) -> Result<FeatureVector, EncodeError> {
    let age = match profile.age {
        Some(age) if age.is_finite() => age,
        Some(age) => {
            return Err(EncodeError::InvalidInput {
                reason: format!("age must be a finite number, got {age}"),
            });
        }
        None => normalization.mean_age(),
    };
    let income = match profile.income {
        Some(income) if income.is_finite() => income,
        Some(income) => {
            return Err(EncodeError::InvalidInput {
                reason: format!("income must be a finite number, got {income}"),
            });
        }
        None => normalization.mean_income(),
    };

    // Same epoch reference the normalizer was fitted against: Unix seconds.
    #[expect(
        clippy::cast_precision_loss,
        reason = "epoch seconds for calendar dates fit in f64 exactly"
    )]
    let timestamp = profile.enrollment_date.timestamp() as f64;

    let mut raw = [0.0; FEATURE_LEN];
    raw[AGE_INDEX] = age;
    raw[INCOME_INDEX] = income;
    raw[ENROLLMENT_INDEX] = timestamp;
    raw[GENDER_INDEX..GENDER_INDEX + 3].copy_from_slice(&profile.gender.one_hot());

    let scaled = normalization.scale(&raw);
    log::trace!(
        "encoder.encode: age={age} income={income} tstamp={timestamp} gender={:?}",
        profile.gender
    );
    Ok(FeatureVector::from_values(scaled))
}

// ---------------------------------------------------------------------------
// parse_profile
// ---------------------------------------------------------------------------

/// Parse raw request strings into a typed [`Profile`].
///
/// Absent or empty age/income are treated as missing (imputed later by
/// [`encode`]). An absent enrollment date falls back to `default_now`, which
/// the caller supplies (typically `Utc::now()`). Dates are accepted as
/// RFC 3339 or `YYYY-MM-DD` (midnight UTC). Gender follows the closed
/// [`Gender::from_code`] policy -- unrecognized codes become `Unknown`,
/// never an error.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidInput`] when age or income is present but
/// not parseable as a finite number, or when the enrollment date cannot be
/// interpreted as a date.
pub fn parse_profile(
    age: Option<&str>,
    income: Option<&str>,
    enrollment_date: Option<&str>,
    gender: &str,
    default_now: DateTime<Utc>,
) -> Result<Profile, EncodeError> {
    let age = parse_optional_number("age", age)?;
    let income = parse_optional_number("income", income)?;
    let enrollment_date = match enrollment_date.map(str::trim) {
        None | Some("") => default_now,
        Some(text) => parse_date(text)?,
    };
    Ok(Profile {
        age,
        income,
        enrollment_date,
        gender: Gender::from_code(gender),
    })
}

/// Parse an optional numeric field; empty means missing, garbage is an error.
fn parse_optional_number(field: &str, text: Option<&str>) -> Result<Option<f64>, EncodeError> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(EncodeError::InvalidInput {
                reason: format!("{field} is not a number: {text:?}"),
            }),
        },
    }
}

/// Interpret a date string as RFC 3339, falling back to `YYYY-MM-DD`.
fn parse_date(text: &str) -> Result<DateTime<Utc>, EncodeError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| EncodeError::InvalidInput {
            reason: format!("enrollment date is not a date: {text:?} ({e})"),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
