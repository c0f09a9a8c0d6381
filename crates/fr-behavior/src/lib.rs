//! `fr-behavior` — how households decide.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`decision`] | `DecisionModel` trait, `PmtDecision`, `PmtThresholds`, `classify` |
//! | [`social`]   | `SocialConfig`, `InfluenceRule`, influence ratio and override   |
//! | [`scenario`] | Scenario score modifiers applied at model construction         |
//! | [`config`]   | `PmtConfig` — validated bundle of all behavioral parameters    |
//! | [`fixed`]    | `FixedDecision` — always returns the same action               |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! A decision is a pure function of the household's scores, the scenario,
//! the thresholds, and two jitter draws from the RNG handed in by the
//! caller.  Nothing here keeps state between calls, so every model is
//! `Send + Sync` and may be evaluated for many households in parallel.
//!
//! The social override is kept separate from the decision because only the
//! reactive phase applies it, and because it reads other households.

pub mod config;
pub mod decision;
pub mod error;
pub mod fixed;
pub mod scenario;
pub mod social;


pub use config::PmtConfig;
pub use decision::{DecisionModel, PmtDecision, PmtThresholds, classify};
pub use error::{BehaviorError, BehaviorResult};
pub use fixed::FixedDecision;
pub use social::{InfluenceRule, SocialConfig};
