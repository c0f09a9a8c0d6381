//! Unit tests for fr-agent.

// ── Household invariants ──────────────────────────────────────────────────────

#[cfg(test)]
mod household {
    use fr_core::zone::SAFE_ZONE;
    use fr_core::{AgentId, GeoPoint};
    use crate::{Action, Household, SesTier};

    fn sample() -> Household {
        Household::new("Heugem", SesTier::Low, 4.0, 1.0)
    }

    #[test]
    fn fresh_household_defaults() {
        let h = sample();
        assert_eq!(h.id(), AgentId::INVALID);
        assert_eq!(h.agent_type(), "agent");
        assert_eq!(h.current_zone(), "Heugem");
        assert_eq!(h.action(), None);
        assert!(h.state().alive);
        assert!(!h.state().evacuated);
        assert_eq!(h.social_network_strength(), None);
        assert_eq!(h.demographics().income_level, None);
        assert_eq!(h.position(), None);
    }

    #[test]
    fn scores_are_clamped() {
        let mut h = Household::new("Heugem", SesTier::Medium, 7.5, -1.0);
        assert_eq!(h.threat_score(), 5.0);
        assert_eq!(h.coping_score(), 0.0);
        h.set_threat_score(f64::NAN);
        assert_eq!(h.threat_score(), 0.0);
        h.set_coping_score(2.5);
        assert_eq!(h.coping_score(), 2.5);
    }

    #[test]
    fn relocation_moves_to_safe_zone_once() {
        let mut h = sample().with_position(GeoPoint::new(1.0, 1.0));
        assert!(h.relocate_to_safe_zone(GeoPoint::new(9.0, 9.0), true));
        assert!(h.state().evacuated);
        assert!(h.state().early_evacuated);
        assert_eq!(h.current_zone(), SAFE_ZONE);
        assert_eq!(h.position(), Some(GeoPoint::new(9.0, 9.0)));
        assert_eq!(h.home_zone(), "Heugem");

        // Second relocation is a no-op.
        assert!(!h.relocate_to_safe_zone(GeoPoint::new(5.0, 5.0), false));
        assert_eq!(h.position(), Some(GeoPoint::new(9.0, 9.0)));
        assert!(h.state().early_evacuated);
    }

    #[test]
    fn late_relocation_is_not_early() {
        let mut h = sample();
        h.relocate_to_safe_zone(GeoPoint::new(0.0, 0.0), false);
        assert!(h.state().evacuated);
        assert!(!h.state().early_evacuated);
    }

    #[test]
    fn damage_requires_flooding() {
        let mut h = sample();
        assert!(!h.mark_damaged());
        assert!(!h.state().damaged);
        h.mark_flooded();
        assert!(h.mark_damaged());
        assert!(h.state().damaged && h.state().flooded);
    }

    #[test]
    fn influence_forces_mitigate() {
        let mut h = sample();
        h.set_action(Action::Evacuate);
        h.apply_influence();
        assert_eq!(h.action(), Some(Action::Mitigate));
        assert!(h.state().influenced);
    }

    #[test]
    fn action_labels() {
        assert_eq!(Action::Mitigate.as_str(), "mitigate");
        assert_eq!(Action::Evacuate.to_string(), "evacuate");
        assert_eq!(Action::DoNothing.as_str(), "do_nothing");
    }

    #[test]
    fn ses_tiers() {
        assert_eq!(SesTier::from_z_score(-0.8), SesTier::Low);
        assert_eq!(SesTier::from_z_score(-0.5), SesTier::Medium);
        assert_eq!(SesTier::from_z_score(0.5), SesTier::Medium);
        assert_eq!(SesTier::from_z_score(0.51), SesTier::High);
        assert_eq!(SesTier::from_z_score(f64::NAN), SesTier::Medium);
        assert_eq!(SesTier::High.to_string(), "high");
    }
}

// ── Store and builder ─────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use fr_core::AgentId;
    use crate::{Action, Household, HouseholdStoreBuilder, SesTier};

    fn three_zones() -> HouseholdStoreBuilder {
        HouseholdStoreBuilder::new(42)
            .household(Household::new("Heugem", SesTier::Low, 4.0, 1.0))
            .household(Household::new("Randwyck", SesTier::High, 2.0, 3.0))
            .household(Household::new("heugem ", SesTier::Medium, 3.0, 3.0))
            .household(Household::new("Heugem", SesTier::Medium, 1.0, 1.0))
    }

    #[test]
    fn ids_follow_insertion_order() {
        let (store, rngs) = three_zones().build();
        assert_eq!(store.len(), 4);
        assert_eq!(rngs.len(), 4);
        for (i, h) in store.iter().enumerate() {
            assert_eq!(h.id(), AgentId(i as u32));
        }
        assert_eq!(store.agent_ids().count(), 4);
    }

    #[test]
    fn push_returns_id() {
        let mut b = HouseholdStoreBuilder::new(1);
        assert_eq!(b.push(Household::new("A", SesTier::Low, 0.0, 0.0)), AgentId(0));
        assert_eq!(b.push(Household::new("B", SesTier::Low, 0.0, 0.0)), AgentId(1));
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn neighbours_share_home_zone_and_exclude_self() {
        let (store, _) = three_zones().build();
        let n: Vec<_> = store.neighbors_of(AgentId(0)).collect();
        assert_eq!(n, vec![AgentId(2), AgentId(3)]);
        assert_eq!(store.neighbors_of(AgentId(1)).count(), 0);
        assert_eq!(store.zone_members("HEUGEM").len(), 3);
        assert!(store.zone_members("Atlantis").is_empty());
    }

    #[test]
    fn neighbours_persist_after_evacuation() {
        let (mut store, _) = three_zones().build();
        store
            .household_mut(AgentId(2))
            .relocate_to_safe_zone(fr_core::GeoPoint::new(0.0, 0.0), false);
        let n: Vec<_> = store.neighbors_of(AgentId(0)).collect();
        assert!(n.contains(&AgentId(2)));
    }

    #[test]
    fn neighbour_actions_reflect_live_state() {
        let (mut store, _) = three_zones().build();
        store.household_mut(AgentId(2)).set_action(Action::Evacuate);
        assert_eq!(
            store.neighbor_actions(AgentId(0)),
            vec![Some(Action::Evacuate), None],
        );
    }

    #[test]
    fn unknown_id_is_none() {
        let (store, _) = three_zones().build();
        assert!(store.get(AgentId(99)).is_none());
        assert_eq!(store.neighbors_of(AgentId(99)).count(), 0);
    }

    #[test]
    fn home_zones_deduplicated() {
        let (store, _) = three_zones().build();
        assert_eq!(store.home_zones(), vec!["Heugem", "Randwyck"]);
    }

    #[test]
    fn rngs_are_seeded_per_agent() {
        use rand::RngCore;
        let (_, mut a) = three_zones().build();
        let (_, mut b) = three_zones().build();
        assert_eq!(
            a.get_mut(AgentId(1)).next_u64(),
            b.get_mut(AgentId(1)).next_u64(),
        );
        assert_ne!(
            a.get_mut(AgentId(2)).next_u64(),
            b.get_mut(AgentId(3)).next_u64(),
        );
    }
}

// ── Survey loader ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod survey {
    use crate::survey::UNKNOWN_ZONE;
    use crate::{SesTier, SurveyError, SurveyRecord, load_survey_reader};

    const SURVEY: &str = "\
ID; Neighbourhood code ;Threat score;Coping score;ZSES score
1;3;4,2;1,5;-0,8
2;1;2,0;3,5;0,7
3;2;3,1;2,2;0,1
4;7;1,0;1,0;0,0
5;1;abc;1,0;0,0
";

    #[test]
    fn parses_decimal_commas_and_fuzzy_headers() {
        let records = load_survey_reader(SURVEY.as_bytes()).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0], SurveyRecord::new("Heugem", 4.2, 1.5, -0.8));
        assert_eq!(records[1].zone, "Randwyck");
        assert_eq!(records[2].zone, "Heugemerveld");
    }

    #[test]
    fn unknown_zone_code_kept_as_unknown() {
        let records = load_survey_reader(SURVEY.as_bytes()).unwrap();
        assert_eq!(records[3].zone, UNKNOWN_ZONE);
    }

    #[test]
    fn missing_column_fails() {
        let csv = "Neighbourhood;Threat_score;Coping_score\n1;2;3\n";
        let err = load_survey_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, SurveyError::MissingColumn("ZSES_score")));
    }

    #[test]
    fn derived_traits() {
        let heugem_low = SurveyRecord::new("Heugem", 4.0, 1.0, -0.8);
        assert_eq!(heugem_low.ses(), SesTier::Low);
        assert_eq!(heugem_low.social_network_strength(), 2);

        let veld_low = SurveyRecord::new("Heugemerveld", 4.0, 1.0, -0.8);
        assert_eq!(veld_low.social_network_strength(), 4);

        let randwyck_high = SurveyRecord::new("Randwyck", 2.0, 3.0, 0.9);
        assert_eq!(randwyck_high.ses(), SesTier::High);
        assert_eq!(randwyck_high.social_network_strength(), 3);
    }

    #[test]
    fn record_to_household() {
        let h = SurveyRecord::new("Heugemerveld", 6.0, 2.0, 0.0).to_household();
        assert_eq!(h.home_zone(), "Heugemerveld");
        assert_eq!(h.threat_score(), 5.0);
        assert_eq!(h.ses(), SesTier::Medium);
        assert_eq!(h.social_network_strength(), Some(4));
    }
}
