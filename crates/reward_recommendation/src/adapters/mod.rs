// Rust guideline compliant 2026-08-30

//! Adapters (secondary ports) for the reward-recommendation binary.
//!
//! Each sub-module implements a hexagonal port trait defined in the `domain`
//! crate. Adapters are intentionally isolated from encoder and scorer logic.

pub mod demo_predictor;
