//! The dispatch engine.
//!
//! This module provides the runtime half of the crate:
//!
//! - **Engine**: owns the table, the context and the single state register;
//!   resolves rules, fires hooks and commits new states
//! - **Outcome**: what a dispatch did
//! - **EngineConfig**: naming and history settings

mod config;
mod machine;
mod outcome;

pub use config::{ConfigError, EngineConfig};
pub use machine::Engine;
pub use outcome::Outcome;
