//! Zone lookup and point sampling.
//!
//! # Pluggability
//!
//! `fr-sim` talks to geometry only through [`ZoneLocator`], so applications
//! can back it with real GeoJSON polygons (loaded and reprojected elsewhere)
//! without touching the engine.  [`ZoneMap`] is the in-memory default.
//!
//! # Sampling
//!
//! Points are drawn by rejection sampling inside the polygon's bounding box,
//! using whatever RNG the caller passes in.  Seeding that RNG makes the whole
//! placement reproducible.

use rand::{Rng, RngCore};

use fr_core::GeoPoint;
use fr_core::zone::same_zone;

use crate::{Polygon, SpatialError, SpatialResult};

/// Rejection-sampling budget per requested point.
const MAX_SAMPLE_ATTEMPTS: u32 = 10_000;

// ── ZoneLocator trait ─────────────────────────────────────────────────────────

/// Geometry collaborator consulted by the simulation.
///
/// Zone names are matched trimmed and case-insensitively.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a built simulation can be moved
/// across threads by whatever controller drives it.
pub trait ZoneLocator: Send + Sync {
    /// `true` if `zone` has geometry.
    fn has_zone(&self, zone: &str) -> bool;

    /// A point inside `zone`, drawn from `rng`.
    fn sample_point(&self, zone: &str, rng: &mut dyn RngCore) -> SpatialResult<GeoPoint>;
}

// ── ZoneMap ───────────────────────────────────────────────────────────────────

/// Named polygons held in memory.  Build with [`ZoneMapBuilder`].
#[derive(Clone, Debug, Default)]
pub struct ZoneMap {
    zones: Vec<(String, Polygon)>,
}

impl ZoneMap {
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zone names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.zones.iter().map(|(name, _)| name.as_str())
    }

    /// The polygon registered for `zone`, if any.
    pub fn polygon(&self, zone: &str) -> Option<&Polygon> {
        self.zones
            .iter()
            .find(|(name, _)| same_zone(name, zone))
            .map(|(_, poly)| poly)
    }

    /// Name of the first zone whose polygon contains `p`.
    pub fn zone_at(&self, p: GeoPoint) -> Option<&str> {
        self.zones
            .iter()
            .find(|(_, poly)| poly.contains(p))
            .map(|(name, _)| name.as_str())
    }
}

impl ZoneLocator for ZoneMap {
    fn has_zone(&self, zone: &str) -> bool {
        self.polygon(zone).is_some()
    }

    fn sample_point(&self, zone: &str, rng: &mut dyn RngCore) -> SpatialResult<GeoPoint> {
        let poly = self
            .polygon(zone)
            .ok_or_else(|| SpatialError::UnknownZone(zone.to_owned()))?;
        let bbox = poly.bbox();
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let p = GeoPoint::new(
                rng.gen_range(bbox.min.lon..=bbox.max.lon),
                rng.gen_range(bbox.min.lat..=bbox.max.lat),
            );
            if poly.contains(p) {
                return Ok(p);
            }
        }
        Err(SpatialError::SamplingFailed {
            zone:     zone.to_owned(),
            attempts: MAX_SAMPLE_ATTEMPTS,
        })
    }
}

// ── ZoneMapBuilder ────────────────────────────────────────────────────────────

/// Incremental builder for [`ZoneMap`].
///
/// ```rust
/// use fr_core::{BBox, GeoPoint};
/// use fr_spatial::{ZoneLocator, ZoneMapBuilder};
///
/// let mut b = ZoneMapBuilder::new();
/// b.add_rect("SafeZone", BBox::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 10.0)))
///     .unwrap();
/// let zones = b.build();
/// assert!(zones.has_zone("safezone"));
/// ```
#[derive(Default)]
pub struct ZoneMapBuilder {
    zones: Vec<(String, Polygon)>,
}

impl ZoneMapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `zone` with the polygon described by `ring`.
    pub fn add_zone(
        &mut self,
        zone: impl Into<String>,
        ring: Vec<GeoPoint>,
    ) -> SpatialResult<&mut Self> {
        let zone = zone.into();
        let poly = Polygon::new(ring).ok_or_else(|| SpatialError::InvalidPolygon {
            zone:   zone.clone(),
            reason: "need at least three finite, non-collinear vertices".into(),
        })?;
        self.insert(zone, poly)
    }

    /// Register `zone` as an axis-aligned rectangle.
    pub fn add_rect(
        &mut self,
        zone: impl Into<String>,
        bbox: fr_core::BBox,
    ) -> SpatialResult<&mut Self> {
        let zone = zone.into();
        let poly = Polygon::rectangle(bbox).ok_or_else(|| SpatialError::InvalidPolygon {
            zone:   zone.clone(),
            reason: "rectangle has zero width or height".into(),
        })?;
        self.insert(zone, poly)
    }

    fn insert(&mut self, zone: String, poly: Polygon) -> SpatialResult<&mut Self> {
        if self.zones.iter().any(|(name, _)| same_zone(name, &zone)) {
            return Err(SpatialError::DuplicateZone(zone));
        }
        self.zones.push((zone, poly));
        Ok(self)
    }

    pub fn build(self) -> ZoneMap {
        ZoneMap { zones: self.zones }
    }
}
