//! `fr-sim` — step loop for the flood-response simulation.
//!
//! # Step loop
//!
//! ```text
//! for step in 0..config.total_steps:
//!   ① Water     — aggregate water level = mean of this step's timeline
//!                 entries (previous value kept if there are none).
//!   ② Phase     — once the level reaches the trigger, switch
//!                 PreHazard → Reactive for good (same step).
//!   ③ Decide    — PreHazard: PMT decision only, every household.
//!                 Reactive:  PMT decision → social override → relocation
//!                            to the safe zone, households visited in the
//!                            configured ActivationOrder.
//!   ④ Outcomes  — Reactive only: flooded / damaged flags from the home
//!                 zone's level.
//!   ⑤ Observe   — on_step_end (summary) and on_snapshot (households).
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Synchronous read phase and pre-hazard pass run on Rayon.   |
//! | `fx-hash`  | FxHash for the home-zone neighbour index.                  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fr_behavior::PmtConfig;
//! use fr_core::SimConfig;
//! use fr_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), PmtConfig::default(), zones)
//!     .survey(&records)
//!     .timeline(timeline)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod phase;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, StepSummary};
pub use phase::{ActivationOrder, Phase};
pub use sim::FloodSim;
