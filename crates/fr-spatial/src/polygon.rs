//! Simple polygons with containment tests.

use fr_core::{BBox, GeoPoint};

/// A simple polygon given by its exterior ring.
///
/// The ring may be open or closed (first vertex repeated at the end); holes
/// are not modelled.  The bounding box is computed once at construction and
/// bounds the rejection sampler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    ring: Vec<GeoPoint>,
    bbox: BBox,
}

impl Polygon {
    /// Build a polygon from its exterior ring.
    ///
    /// Returns `None` if the ring has fewer than three distinct vertices or
    /// any coordinate is not finite.
    pub fn new(mut ring: Vec<GeoPoint>) -> Option<Self> {
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        if ring.len() < 3 || ring.iter().any(|p| !p.lon.is_finite() || !p.lat.is_finite()) {
            return None;
        }
        let bbox = BBox::enclosing(ring.iter().copied())?;
        if bbox.width() <= 0.0 || bbox.height() <= 0.0 {
            return None;
        }
        Some(Self { ring, bbox })
    }

    /// Axis-aligned rectangle covering `bbox`.
    pub fn rectangle(bbox: BBox) -> Option<Self> {
        Self::new(vec![
            bbox.min,
            GeoPoint::new(bbox.max.lon, bbox.min.lat),
            bbox.max,
            GeoPoint::new(bbox.min.lon, bbox.max.lat),
        ])
    }

    pub fn ring(&self) -> &[GeoPoint] {
        &self.ring
    }

    pub fn bbox(&self) -> BBox {
        self.bbox
    }

    /// Even-odd (ray casting) containment test.
    ///
    /// Points exactly on an edge may land on either side; callers that
    /// sample points treat that as acceptable.
    pub fn contains(&self, p: GeoPoint) -> bool {
        if !self.bbox.contains(p) {
            return false;
        }
        let n = self.ring.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.ring[i];
            let b = self.ring[j];
            if (a.lat > p.lat) != (b.lat > p.lat) {
                let x_cross = (b.lon - a.lon) * (p.lat - a.lat) / (b.lat - a.lat) + a.lon;
                if p.lon < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}
