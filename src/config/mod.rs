//! Configuration loading and management for the severance engine.
//!
//! This module provides functionality to load a severance policy from YAML
//! files: policy metadata, the trial window, the vacation entitlement tiers
//! and the notice-period bands. [`PolicyConfig::default`] carries the same
//! statutory tables as literal constants.
//!
//! # Example
//!
//! ```no_run
//! use severance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/labor_code").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ClauseRefs, DEFAULT_ENTITLEMENT_TIERS, DEFAULT_NOTICE_BANDS, DEFAULT_TRIAL_WINDOW_DAYS,
    PolicyConfig, PolicyFile, PolicyMetadata, TierBand, TierTable,
};
