//! `fr-core` — foundational types for the `rust_flood` simulation.
//!
//! This crate is a dependency of every other `fr-*` crate.  It has no `fr-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `GeoPoint`, `BBox`                                    |
//! | [`time`]        | `Step`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`scenario`]    | `Scenario` enum and its hazard-file mapping           |
//! | [`zone`]        | Zone-name constants and the survey zone-code table    |
//! | [`error`]       | `FrError`, `FrResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod scenario;
pub mod time;
pub mod zone;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FrError, FrResult};
pub use geo::{BBox, GeoPoint};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use scenario::Scenario;
pub use time::{SimClock, SimConfig, Step};
