//! `fr-hazard` — the flood hazard as seen by the simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`timeline`]  | `HazardTimeline`, `ZoneLevel`                             |
//! | [`loader`]    | `load_timeline_csv`, `load_timeline_reader`, `load_scenario_timeline` |
//! | [`rules`]     | `HazardRules` (trigger level, early cutoff, flood/damage windows) |
//! | [`error`]     | `HazardError`, `HazardResult<T>`                          |
//!
//! # Sparse model (summary)
//!
//! A timeline is a sparse set of `(step, zone, flood_level)` triples.  Any
//! `(step, zone)` pair without an entry reads as level `0.0`; a gap is never
//! an error.

pub mod error;
pub mod loader;
pub mod rules;
pub mod timeline;


pub use error::{HazardError, HazardResult};
pub use loader::{load_scenario_timeline, load_timeline_csv, load_timeline_reader};
pub use rules::HazardRules;
pub use timeline::{HazardTimeline, ZoneLevel};
