//! Planar coordinate types.
//!
//! Zone polygons and household positions live in one projected coordinate
//! system chosen by whoever supplies the geometry (the survey pipeline uses
//! Web Mercator metres).  The core never reprojects; it only needs points,
//! bounding boxes, and containment.

/// A point in the geometry's projected coordinate system.
///
/// `lon`/`lat` name the horizontal and vertical axes so exported rows keep the
/// familiar `Longitude`/`Latitude` column names.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.lon, self.lat)
    }
}

/// Axis-aligned bounding box.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    pub min: GeoPoint,
    pub max: GeoPoint,
}

impl BBox {
    /// Build a box from two opposite corners in any order.
    pub fn new(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            min: GeoPoint::new(a.lon.min(b.lon), a.lat.min(b.lat)),
            max: GeoPoint::new(a.lon.max(b.lon), a.lat.max(b.lat)),
        }
    }

    /// Smallest box enclosing every point; `None` for an empty iterator.
    pub fn enclosing<I: IntoIterator<Item = GeoPoint>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(BBox::new(first, first), |b, p| BBox {
            min: GeoPoint::new(b.min.lon.min(p.lon), b.min.lat.min(p.lat)),
            max: GeoPoint::new(b.max.lon.max(p.lon), b.max.lat.max(p.lat)),
        }))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.lon - self.min.lon
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.lat - self.min.lat
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lon >= self.min.lon && p.lon <= self.max.lon
            && p.lat >= self.min.lat && p.lat <= self.max.lat
    }
}
