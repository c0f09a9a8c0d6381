//! Household survey loader.
//!
//! # CSV format
//!
//! The survey export uses `;` as the field delimiter and `,` as the decimal
//! separator.  Column names vary between exports, so each required column is
//! located by a fragment of its name after normalisation (trimmed, spaces
//! replaced by `_`):
//!
//! | Fragment        | Meaning                                          |
//! |-----------------|--------------------------------------------------|
//! | `Neighbourhood` | zone code: 1 Randwyck, 2 Heugemerveld, 3 Heugem  |
//! | `Threat_score`  | threat appraisal, 0–5                            |
//! | `Coping_score`  | coping appraisal, 0–5                            |
//! | `ZSES_score`    | standardised socio-economic score                |
//!
//! ```csv
//! ID;Neighbourhood code;Threat score;Coping score;ZSES score
//! 1;3;4,2;1,5;-0,8
//! 2;1;2,0;3,5;0,7
//! ```
//!
//! A missing column fails the whole load.  A row whose values do not parse
//! is skipped with a warning.

use std::io::Read;
use std::path::Path;

use fr_core::zone::{HEUGEMERVELD, same_zone, zone_for_code};

use crate::{Household, SesTier, SurveyError, SurveyResult};

/// Zone name for survey codes outside the known table.  No geometry carries
/// this name, so such households are dropped at simulation build time.
pub const UNKNOWN_ZONE: &str = "Unknown";

const NEIGHBOURHOOD: &str = "Neighbourhood";
const THREAT: &str = "Threat_score";
const COPING: &str = "Coping_score";
const ZSES: &str = "ZSES_score";

// ── SurveyRecord ──────────────────────────────────────────────────────────────

/// One parsed survey response.
#[derive(Clone, Debug, PartialEq)]
pub struct SurveyRecord {
    pub zone: String,
    pub threat_score: f64,
    pub coping_score: f64,
    pub zses: f64,
}

impl SurveyRecord {
    pub fn new(zone: impl Into<String>, threat_score: f64, coping_score: f64, zses: f64) -> Self {
        Self { zone: zone.into(), threat_score, coping_score, zses }
    }

    pub fn ses(&self) -> SesTier {
        SesTier::from_z_score(self.zses)
    }

    /// Ordinal tie strength: Heugemerveld households are the most tightly
    /// knit (4), low-SES households elsewhere the least (2), everyone else 3.
    pub fn social_network_strength(&self) -> u8 {
        if same_zone(&self.zone, HEUGEMERVELD) {
            4
        } else if self.ses() == SesTier::Low {
            2
        } else {
            3
        }
    }

    /// The household this response describes.  The ID is assigned later by
    /// the store builder.
    pub fn to_household(&self) -> Household {
        Household::new(self.zone.clone(), self.ses(), self.threat_score, self.coping_score)
            .with_social_network_strength(self.social_network_strength())
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load survey responses from a file.
pub fn load_survey_csv(path: &Path) -> SurveyResult<Vec<SurveyRecord>> {
    let file = std::fs::File::open(path)?;
    load_survey_reader(file)
}

/// Like [`load_survey_csv`] but accepts any `Read` source.
pub fn load_survey_reader<R: Read>(reader: R) -> SurveyResult<Vec<SurveyRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(normalise_header)
        .collect();
    let zone_col = find_column(&headers, NEIGHBOURHOOD)?;
    let threat_col = find_column(&headers, THREAT)?;
    let coping_col = find_column(&headers, COPING)?;
    let zses_col = find_column(&headers, ZSES)?;

    let mut records = Vec::new();
    for (line, result) in csv_reader.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::warn!("survey record {}: skipped ({e})", line + 1);
                continue;
            }
        };
        let field = |col: usize| row.get(col).and_then(parse_decimal);

        let (Some(code), Some(threat), Some(coping), Some(zses)) =
            (field(zone_col), field(threat_col), field(coping_col), field(zses_col))
        else {
            log::warn!("survey record {}: skipped (missing or malformed value)", line + 1);
            continue;
        };

        let zone = zone_for_code(code.trunc() as i64).unwrap_or(UNKNOWN_ZONE);
        records.push(SurveyRecord::new(zone, threat, coping, zses));
    }

    log::info!("loaded {} survey records", records.len());
    Ok(records)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn normalise_header(h: &str) -> String {
    h.trim().replace(' ', "_")
}

fn find_column(headers: &[String], fragment: &'static str) -> SurveyResult<usize> {
    headers
        .iter()
        .position(|h| h.contains(fragment))
        .ok_or(SurveyError::MissingColumn(fragment))
}

/// Parse a number that may use `,` as its decimal separator.
fn parse_decimal(raw: &str) -> Option<f64> {
    let v: f64 = raw.trim().replace(',', ".").parse().ok()?;
    v.is_finite().then_some(v)
}
