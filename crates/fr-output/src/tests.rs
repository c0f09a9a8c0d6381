//! Integration tests for fr-output.

#[cfg(test)]
mod fixtures {
    use fr_agent::{Action, SesTier};

    use crate::row::{AgentStepRow, StepSummaryRow};

    pub fn agent_row(agent_id: u32, step: u64, action: Option<Action>) -> AgentStepRow {
        AgentStepRow {
            step,
            agent_id,
            agent_type:      "agent".into(),
            zone:            "Heugem".into(),
            current_zone:    "Heugem".into(),
            ses:             SesTier::Low,
            threat_score:    4.2,
            coping_score:    1.5,
            action,
            influenced:      false,
            early_evacuated: false,
            social_network:  Some(2),
            longitude:       Some(5.71),
            latitude:        None,
        }
    }

    pub fn summary_row(step: u64) -> StepSummaryRow {
        StepSummaryRow {
            step,
            water_level:      0.8,
            threat_triggered: true,
            mitigate:         1,
            evacuate:         2,
            do_nothing:       3,
            undecided:        0,
            evacuated:        2,
            flooded:          1,
            damaged:          0,
            influenced:       1,
        }
    }
}

#[cfg(test)]
mod csv_tests {
    use fr_agent::Action;
    use tempfile::TempDir;

    use super::fixtures::{agent_row, summary_row};
    use crate::csv::CsvWriter;
    use crate::row::{AGENT_COLUMNS, SUMMARY_COLUMNS};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_data.csv").exists());
        assert!(dir.path().join("step_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_data.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, AGENT_COLUMNS);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, SUMMARY_COLUMNS);
    }

    #[test]
    fn csv_agent_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![
            agent_row(0, 5, Some(Action::Evacuate)),
            agent_row(1, 5, None),
            agent_row(2, 5, Some(Action::DoNothing)),
        ];
        w.write_agent_rows(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_data.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "5"); // Step
        assert_eq!(&read_rows[0][1], "0"); // AgentID
        assert_eq!(&read_rows[0][8], "evacuate");
        assert_eq!(&read_rows[1][8], ""); // undecided
        assert_eq!(&read_rows[2][8], "do_nothing");
        assert_eq!(&read_rows[0][11], "2"); // SocialNetwork
        assert_eq!(&read_rows[0][12], "5.71");
        assert_eq!(&read_rows[0][13], ""); // no latitude
    }

    #[test]
    fn csv_step_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_step_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");
        assert_eq!(&read_rows[0][1], "0.8");
        assert_eq!(&read_rows[0][2], "true");
        assert_eq!(&read_rows[0][4], "2"); // Evacuate
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_directory_is_io_error() {
        let dir = tmp();
        let result = CsvWriter::new(&dir.path().join("does/not/exist"));
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod summary_tests {
    use fr_agent::Action;

    use super::fixtures::agent_row;
    use crate::summary::summarize_outcomes;

    #[test]
    fn empty_rows_have_no_summary() {
        assert!(summarize_outcomes(&[]).is_none());
    }

    #[test]
    fn counts_only_latest_step() {
        let rows = vec![
            agent_row(0, 0, Some(Action::DoNothing)),
            agent_row(1, 0, Some(Action::DoNothing)),
            agent_row(0, 1, Some(Action::Evacuate)),
            agent_row(1, 1, Some(Action::Mitigate)),
            agent_row(2, 1, Some(Action::Evacuate)),
            agent_row(3, 1, None),
        ];
        let s = summarize_outcomes(&rows).unwrap();
        assert_eq!(s.step, 1);
        assert_eq!(s.count(Action::Evacuate), 2);
        assert_eq!(s.count(Action::Mitigate), 1);
        assert_eq!(s.count(Action::DoNothing), 0);
        assert_eq!(s.undecided, 1);
        // Most frequent first, zero counts omitted.
        assert_eq!(s.counts, vec![(Action::Evacuate, 2), (Action::Mitigate, 1)]);
    }

    #[test]
    fn display_lists_actions() {
        let rows = vec![agent_row(0, 4, Some(Action::Mitigate))];
        let text = summarize_outcomes(&rows).unwrap().to_string();
        assert!(text.contains("step 4"));
        assert!(text.contains("mitigate"));
        assert!(!text.contains("undecided"));
    }
}

#[cfg(test)]
mod observer_tests {
    use fr_agent::{Action, Household, SesTier};
    use fr_behavior::{PmtConfig, SocialConfig};
    use fr_core::{BBox, GeoPoint, SimConfig};
    use fr_hazard::HazardTimeline;
    use fr_sim::{FloodSim, SimBuilder};
    use fr_spatial::{ZoneMap, ZoneMapBuilder};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::memory::MemoryWriter;
    use crate::observer::SimOutputObserver;
    use crate::writer::OutputWriter;
    use crate::{AgentStepRow, OutputError, OutputResult, StepSummaryRow};

    fn zones() -> ZoneMap {
        let mut b = ZoneMapBuilder::new();
        b.add_rect("SafeZone", BBox::new(GeoPoint::new(0.0, 2.0), GeoPoint::new(2.0, 3.0)))
            .unwrap();
        b.add_rect("Heugem", BBox::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)))
            .unwrap();
        b.add_rect("Randwyck", BBox::new(GeoPoint::new(1.0, 0.0), GeoPoint::new(2.0, 1.0)))
            .unwrap();
        b.build()
    }

    /// Four threatened, poorly-coping households in Heugem plus one calm
    /// household in Randwyck, flooded from step 0.
    fn sim(steps: u64, interval: u64) -> FloodSim<fr_behavior::PmtDecision, ZoneMap> {
        let config = SimConfig {
            total_steps: steps,
            seed: Some(11),
            output_interval_steps: interval,
            ..SimConfig::default()
        };
        let pmt = PmtConfig { social: SocialConfig::disabled(), ..PmtConfig::default() };
        let mut households: Vec<Household> =
            (0..4).map(|_| Household::new("Heugem", SesTier::Low, 4.5, 1.0)).collect();
        households.push(Household::new("Randwyck", SesTier::High, 0.5, 4.0));
        SimBuilder::new(config, pmt, zones())
            .households(households)
            .timeline(HazardTimeline::from_entries(
                (0..steps).map(|s| (s, "Heugem", 0.9)),
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn memory_observer_records_every_step() {
        let mut sim = sim(4, 1);
        let mut obs = SimOutputObserver::new(MemoryWriter::new());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mem = obs.into_writer();
        assert!(mem.finished);
        assert_eq!(mem.summary_rows.len(), 4);
        assert_eq!(mem.agent_rows.len(), 4 * 5);
        assert_eq!(mem.rows_at(3).count(), 5);
        assert!(mem.summary_rows.iter().all(|r| r.threat_triggered));
    }

    #[test]
    fn outcome_summary_reflects_final_actions() {
        let mut sim = sim(3, 1);
        let mut obs = SimOutputObserver::new(MemoryWriter::new());
        sim.run(&mut obs).unwrap();

        let summary = obs.writer().outcome_summary().unwrap();
        assert_eq!(summary.step, 2);
        assert_eq!(summary.count(Action::Evacuate), 4);
        assert_eq!(summary.count(Action::DoNothing), 1);
        assert_eq!(summary.undecided, 0);
    }

    #[test]
    fn evacuees_recorded_in_safe_zone() {
        let mut sim = sim(2, 1);
        let mut obs = SimOutputObserver::new(MemoryWriter::new());
        sim.run(&mut obs).unwrap();

        let mem = obs.into_writer();
        for row in mem.rows_at(1) {
            if row.action == Some(Action::Evacuate) {
                assert_eq!(row.current_zone, "SafeZone");
                assert_eq!(row.zone, "Heugem");
                assert!(row.early_evacuated);
            } else {
                assert_eq!(row.current_zone, row.zone);
            }
            assert!(row.longitude.is_some() && row.latitude.is_some());
        }
    }

    #[test]
    fn snapshot_interval_respected() {
        let mut sim = sim(6, 3);
        let mut obs = SimOutputObserver::new(MemoryWriter::new());
        sim.run(&mut obs).unwrap();

        let mem = obs.into_writer();
        // Summaries every step, household rows at steps 0 and 3 only.
        assert_eq!(mem.summary_rows.len(), 6);
        let mut steps: Vec<u64> = mem.agent_rows.iter().map(|r| r.step).collect();
        steps.dedup();
        assert_eq!(steps, vec![0, 3]);
    }

    #[test]
    fn csv_end_to_end() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let mut sim = sim(3, 1);
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_data.csv")).unwrap();
        assert_eq!(rdr.records().count(), 3 * 5);
        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 3);
    }

    /// Fails every write; used to check first-error retention.
    struct FailingWriter {
        calls: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_agent_rows(&mut self, _rows: &[AgentStepRow]) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("agent write {}", self.calls))))
        }
        fn write_step_summary(&mut self, _row: &StepSummaryRow) -> OutputResult<()> {
            self.calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("summary write {}", self.calls))))
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_error_kept() {
        let mut sim = sim(3, 1);
        let mut obs = SimOutputObserver::new(FailingWriter { calls: 0 });
        sim.run(&mut obs).unwrap();

        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("summary write 1"));
        assert!(obs.take_error().is_none());
        assert!(obs.into_writer().calls > 1);
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use fr_agent::Action;
    use tempfile::TempDir;

    use super::fixtures::{agent_row, summary_row};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_agent_rows_written() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_agent_rows(&[
            agent_row(0, 2, Some(Action::Mitigate)),
            agent_row(1, 2, None),
        ])
        .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM agent_data WHERE step = 2", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);
        let action: Option<String> = conn
            .query_row("SELECT action FROM agent_data WHERE agent_id = 1", [], |r| r.get(0))
            .unwrap();
        assert!(action.is_none());
    }

    #[test]
    fn sqlite_step_summary_written() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_step_summary(&summary_row(7)).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (evacuate, triggered): (i64, i64) = conn
            .query_row(
                "SELECT evacuate, threat_triggered FROM step_summaries WHERE step = 7",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(evacuate, 2);
        assert_eq!(triggered, 1);
    }
}

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use fr_agent::Action;

    use super::fixtures::{agent_row, summary_row};
    use crate::parquet::ParquetWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn parquet_files_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_agent_rows(&[agent_row(0, 0, Some(Action::Evacuate)), agent_row(1, 0, None)])
            .unwrap();
        w.write_step_summary(&summary_row(0)).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        for name in ["agent_data.parquet", "step_summaries.parquet"] {
            let len = std::fs::metadata(dir.path().join(name)).unwrap().len();
            assert!(len > 0, "{name} is empty");
        }
    }
}
