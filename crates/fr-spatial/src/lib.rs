//! `fr-spatial` — zone geometry as the simulation needs it.
//!
//! The engine asks exactly two questions of geometry: "does zone X exist?"
//! and "give me a point inside zone X".  Both go through the [`ZoneLocator`]
//! trait so applications can plug in real GeoJSON-backed geometry; the
//! in-memory [`ZoneMap`] covers tests and synthetic layouts.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`polygon`] | `Polygon` (simple ring, even-odd containment)               |
//! | [`zones`]   | `ZoneLocator` trait, `ZoneMap`, `ZoneMapBuilder`            |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Polygon`.              |

pub mod error;
pub mod polygon;
pub mod zones;


pub use error::{SpatialError, SpatialResult};
pub use polygon::Polygon;
pub use zones::{ZoneLocator, ZoneMap, ZoneMapBuilder};
