// Rust guideline compliant 2026-08-30

//! Reward-recommendation engine entry point.
//!
//! Wires the Recommender to the DEMO predictor adapter and the demo
//! artifacts (normalization model + incentive catalog), samples a handful of
//! member profiles, and logs the recommended incentive for each.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run
//!
//! # Also show per-inference debug output
//! RUST_LOG=debug cargo run
//! ```

mod adapters;
mod artifacts;
mod sampler;

use adapters::demo_predictor::DemoPredictor;
use anyhow::Context as _;
use recommender::Recommender;
use sampler::{ProfileSampler, SamplerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize the log facade before any async work.
    env_logger::init();

    // Process-wide artifacts: loaded once, read-only, shared by all requests.
    let normalization = artifacts::demo_normalization()
        .context("failed to build demo normalization model")?;
    let catalog = artifacts::demo_catalog().context("failed to build demo incentive catalog")?;

    // DEMO predictor: OS-seeded noise; set Some(seed) for reproducible runs.
    let predictor = DemoPredictor::new(None);
    let engine = Recommender::new(predictor);

    let sampler_config = SamplerConfig::builder(10)
        .build()
        .context("failed to build sampler config")?;
    let members = ProfileSampler::new(sampler_config).sample_members();

    for member in &members {
        let recommendation = engine
            .recommend(&member.profile, &normalization, &catalog)
            .await
            .with_context(|| format!("recommendation failed for member {}", member.id))?;

        let id = usize::from(recommendation.incentive_id);
        let net = recommendation.scores.values()[id];
        log::info!(
            "main.recommendation: member={} incentive_id={} net_expected_spend={net:.2}",
            member.id,
            recommendation.incentive_id
        );
        log::debug!(
            "main.recommendation.scores: member={} scores={:?}",
            member.id,
            recommendation.scores.values()
        );
    }

    Ok(())
}
