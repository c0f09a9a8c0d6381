//! Synthetic Maastricht-south zone layout.
//!
//! Real zone polygons are not bundled; the configured bounds are cut into
//! three neighbourhood strips along the river plain with the evacuation
//! zone on the higher ground to the north:
//!
//! ```text
//!   +-------------------------------+
//!   |           SafeZone            |  top third
//!   +----------+----------+---------+
//!   | Randwyck | Heugem-  | Heugem  |  bottom two thirds
//!   |          | erveld   |         |
//!   +----------+----------+---------+
//! ```

use fr_core::zone::{HEUGEM, HEUGEMERVELD, RANDWYCK, SAFE_ZONE};
use fr_core::{BBox, GeoPoint};
use fr_spatial::{SpatialResult, ZoneMap, ZoneMapBuilder};

pub fn build_zones(bounds: BBox) -> SpatialResult<ZoneMap> {
    let BBox { min, max } = bounds;
    let split_lat = min.lat + bounds.height() * 2.0 / 3.0;
    let strip = bounds.width() / 3.0;

    let mut b = ZoneMapBuilder::new();
    b.add_rect(SAFE_ZONE, BBox::new(GeoPoint::new(min.lon, split_lat), max))?;
    for (i, name) in [RANDWYCK, HEUGEMERVELD, HEUGEM].into_iter().enumerate() {
        let west = min.lon + strip * i as f64;
        b.add_rect(
            name,
            BBox::new(GeoPoint::new(west, min.lat), GeoPoint::new(west + strip, split_lat)),
        )?;
    }
    Ok(b.build())
}
