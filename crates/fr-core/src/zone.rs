//! Zone names known to the core.
//!
//! Zones are identified by name throughout (geometry lookups, hazard
//! timelines, output rows).  Only a handful of names carry meaning to the
//! engine itself.

/// The relocation target for evacuating households.
pub const SAFE_ZONE: &str = "SafeZone";

/// The only neighbourhood that perceives the hazard under `heugem_only`.
pub const HEUGEM: &str = "Heugem";

pub const RANDWYCK: &str = "Randwyck";
pub const HEUGEMERVELD: &str = "Heugemerveld";

/// Map a survey neighbourhood code to its zone name.
pub fn zone_for_code(code: i64) -> Option<&'static str> {
    match code {
        1 => Some(RANDWYCK),
        2 => Some(HEUGEMERVELD),
        3 => Some(HEUGEM),
        _ => None,
    }
}

/// Name comparison used for geometry lookups: trimmed and case-insensitive.
#[inline]
pub fn same_zone(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
