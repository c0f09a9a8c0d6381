//! flood_run — household flood-response simulation for Maastricht south.
//!
//! Loads the household survey and the scenario's hazard timeline, runs the
//! PMT decision model through the pre-hazard and reactive phases, writes
//! `agent_data.csv` and `step_summaries.csv`, and prints the final action
//! counts.
//!
//! Run with:
//!   cargo run -p flood-run --release -- [run_config.json]
//!
//! Every config field is optional; see `RunConfig::default` for the values
//! used when a field (or the whole file) is omitted.

mod zones;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;

use fr_agent::{HouseholdStore, SurveyRecord, load_survey_csv};
use fr_behavior::PmtConfig;
use fr_core::zone::{HEUGEM, HEUGEMERVELD, RANDWYCK};
use fr_core::{BBox, GeoPoint, SimConfig, SimRng, Step};
use fr_hazard::{HazardRules, load_scenario_timeline};
use fr_output::{AgentStepRow, CsvWriter, OutputWriter, SimOutputObserver, summarize_outcomes};
use fr_sim::{ActivationOrder, Phase, SimBuilder, SimObserver, StepSummary};

use zones::build_zones;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Households per neighbourhood when no survey file is available.
const SYNTHETIC_PER_ZONE: usize = 10;

// ── Run configuration ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RunConfig {
    sim:         SimConfig,
    pmt:         PmtConfig,
    hazard:      HazardRules,
    /// Evaluate all households against the start-of-step state instead of
    /// visiting them in seeded random order.
    synchronous: bool,
    data_dir:    PathBuf,
    survey_file: String,
    output_dir:  PathBuf,
    /// Extent of the synthetic zone layout.
    bounds:      BBox,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sim:         SimConfig::default(),
            pmt:         PmtConfig::default(),
            hazard:      HazardRules::default(),
            synchronous: false,
            data_dir:    PathBuf::from("data"),
            survey_file: "survey_analysis.csv".into(),
            output_dir:  PathBuf::from("output"),
            bounds:      BBox::new(GeoPoint::new(5.690, 50.825), GeoPoint::new(5.725, 50.850)),
        }
    }
}

impl RunConfig {
    fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading run config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing run config {}", path.display()))
    }

    fn activation(&self) -> ActivationOrder {
        if self.synchronous { ActivationOrder::Synchronous } else { ActivationOrder::RandomSequential }
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// Survey records from `data_dir/survey_file`, or a seeded synthetic
/// population when the file does not exist.
fn load_population(config: &RunConfig) -> Result<Vec<SurveyRecord>> {
    let path = config.data_dir.join(&config.survey_file);
    if path.exists() {
        return load_survey_csv(&path).with_context(|| format!("loading survey {}", path.display()));
    }

    log::warn!(
        "survey {} not found; generating {} synthetic households per zone",
        path.display(),
        SYNTHETIC_PER_ZONE,
    );
    let mut rng = match config.sim.seed {
        Some(seed) => SimRng::new(seed ^ 0x5EED),
        None => SimRng::from_entropy(),
    };
    let mut records = Vec::with_capacity(3 * SYNTHETIC_PER_ZONE);
    for zone in [RANDWYCK, HEUGEMERVELD, HEUGEM] {
        for _ in 0..SYNTHETIC_PER_ZONE {
            let threat: f64 = rng.gen_range(0.0..5.0);
            let coping: f64 = rng.gen_range(0.0..5.0);
            let zses: f64 = rng.gen_range(-1.5..1.5);
            records.push(SurveyRecord::new(zone, threat, coping, zses));
        }
    }
    Ok(records)
}

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Forwards to the CSV observer and keeps the latest snapshot in memory for
/// the end-of-run summary.
struct RunObserver<W: OutputWriter> {
    inner:        SimOutputObserver<W>,
    last_rows:    Vec<AgentStepRow>,
    summary_rows: usize,
    agent_rows:   usize,
}

impl<W: OutputWriter> RunObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, last_rows: Vec::new(), summary_rows: 0, agent_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for RunObserver<W> {
    fn on_phase_change(&mut self, step: Step, phase: Phase) {
        println!("{step}: entering {phase} phase");
    }

    fn on_step_end(&mut self, summary: &StepSummary) {
        self.summary_rows += 1;
        self.inner.on_step_end(summary);
    }

    fn on_snapshot(&mut self, step: Step, households: &HouseholdStore) {
        self.last_rows = households
            .iter()
            .map(|h| AgentStepRow::from_household(step.0, h))
            .collect();
        self.agent_rows += self.last_rows.len();
        self.inner.on_snapshot(step, households);
    }

    fn on_sim_end(&mut self, final_step: Step) {
        self.inner.on_sim_end(final_step);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = RunConfig::load(config_path.as_deref())?;

    println!("=== flood_run — household flood response ===");
    println!(
        "Scenario: {}  |  Steps: {}  |  Seed: {}  |  Social ties: {}",
        config.pmt.scenario,
        config.sim.total_steps,
        config.sim.seed.map_or_else(|| "entropy".to_owned(), |s| s.to_string()),
        if config.pmt.social.enabled { "on" } else { "off" },
    );
    println!();

    // 1. Zones, population, hazard timeline.
    let zones = build_zones(config.bounds)?;
    let records = load_population(&config)?;
    let timeline = load_scenario_timeline(&config.data_dir, config.pmt.scenario)?;
    println!(
        "Loaded {} households, {} hazard entries across {} zones",
        records.len(),
        timeline.len(),
        timeline.zones().len(),
    );

    // 2. Build sim.
    let mut sim = SimBuilder::new(config.sim.clone(), config.pmt.clone(), zones)
        .survey(&records)
        .timeline(timeline)
        .rules(config.hazard.clone())
        .activation(config.activation())
        .build()?;

    // 3. Set up output.
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("creating {}", config.output_dir.display()))?;
    let writer = CsvWriter::new(&config.output_dir)?;
    let mut obs = RunObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let last = sim.summary();
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  agent_data.csv      : {} rows", obs.agent_rows);
    println!("  step_summaries.csv  : {} rows", obs.summary_rows);
    println!(
        "  {} households: evacuated {}  |  influenced {}  |  flooded {}  |  damaged {}",
        last.total(),
        last.evacuated,
        last.influenced,
        last.flooded,
        last.damaged,
    );
    println!();
    match summarize_outcomes(&obs.last_rows) {
        Some(outcomes) => print!("{outcomes}"),
        None => println!("No household rows recorded."),
    }

    Ok(())
}
