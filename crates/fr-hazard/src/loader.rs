//! CSV hazard timeline loader.
//!
//! # CSV format
//!
//! One row per `(step, zone)` observation:
//!
//! ```csv
//! step,zone,flood_level
//! 0,Heugem,0.10
//! 0,Randwyck,0.05
//! 1,Heugem,0.35
//! ```
//!
//! Rows may appear in any order.  Levels must be finite and non-negative;
//! anything else is a parse error because the whole file is then suspect.
//!
//! # Scenario files
//!
//! [`load_scenario_timeline`] picks the file a scenario names (see
//! [`Scenario::hazard_file_name`]) inside a data directory.  A missing file
//! is not an error: the run proceeds with an empty timeline, which means the
//! reactive phase is never triggered.

use std::io::{ErrorKind, Read};
use std::path::Path;

use serde::Deserialize;

use fr_core::{Scenario, Step};

use crate::{HazardError, HazardTimeline};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TimelineRecord {
    step:        u64,
    zone:        String,
    flood_level: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a hazard timeline from a CSV file.
pub fn load_timeline_csv(path: &Path) -> Result<HazardTimeline, HazardError> {
    let file = std::fs::File::open(path)
        .map_err(HazardError::Io)?;
    load_timeline_reader(file)
}

/// Like [`load_timeline_csv`] but accepts any `Read` source.
pub fn load_timeline_reader<R: Read>(reader: R) -> Result<HazardTimeline, HazardError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut timeline = HazardTimeline::empty();

    for (line, result) in csv_reader.deserialize::<TimelineRecord>().enumerate() {
        let row = result.map_err(|e| HazardError::Parse(e.to_string()))?;
        if !row.flood_level.is_finite() || row.flood_level < 0.0 {
            return Err(HazardError::Parse(format!(
                "record {}: flood_level {} for zone {:?} must be a finite value >= 0",
                line + 1,
                row.flood_level,
                row.zone,
            )));
        }
        timeline.insert(Step(row.step), row.zone, row.flood_level);
    }

    Ok(timeline)
}

/// Load the timeline file that `scenario` maps to inside `data_dir`.
///
/// A missing file yields an empty timeline and a warning; any other I/O or
/// parse failure is returned.
pub fn load_scenario_timeline(
    data_dir: &Path,
    scenario: Scenario,
) -> Result<HazardTimeline, HazardError> {
    let path = data_dir.join(scenario.hazard_file_name());
    match std::fs::File::open(&path) {
        Ok(file) => {
            let timeline = load_timeline_reader(file)?;
            log::info!(
                "loaded {} hazard entries for scenario {} from {}",
                timeline.len(),
                scenario,
                path.display(),
            );
            Ok(timeline)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!(
                "hazard file {} not found; scenario {} runs with an empty timeline",
                path.display(),
                scenario,
            );
            Ok(HazardTimeline::empty())
        }
        Err(e) => Err(HazardError::Io(e)),
    }
}
