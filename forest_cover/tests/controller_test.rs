use std::collections::BTreeMap;

use bevy::prelude::Entity;
use forest_cover::data::{parse_dataset, CountryRecord, Dataset, Period, MAX_TREES};
use forest_cover::forest::{
    ForestController, ForestError, Motion, TreeStage, ViewMode, YearRange, GROWTH_SECS,
    GROWTH_STAGGER_SECS,
};

/// Stage that hands out sequential handles and records every request.
#[derive(Default)]
struct RecordingStage {
    next: u32,
    planted: Vec<(Entity, Motion)>,
    felled: Vec<(Entity, Motion)>,
}

impl TreeStage for RecordingStage {
    fn plant(&mut self, motion: Motion) -> Entity {
        let tree = Entity::from_raw(self.next);
        self.next += 1;
        self.planted.push((tree, motion));
        tree
    }

    fn fell(&mut self, tree: Entity, motion: Motion) {
        self.felled.push((tree, motion));
    }
}

const DATASET: &str = r#"[
    {
        "iso": "BRA", "country": "Brazil", "basic": 5000,
        "2000-2005 umd_tree_cover_gain__ha": 0, "2000-2005_cover_loss": 0,
        "2005-2010 umd_tree_cover_gain__ha": 3000, "2005-2010_cover_loss": 0,
        "2010-2015 umd_tree_cover_gain__ha": 2000, "2010-2015_cover_loss": 1000,
        "2015-2020 umd_tree_cover_gain__ha": 0, "2015-2020_cover_loss": 40000
    },
    {
        "iso": "PER", "country": "Peru", "basic": 2999,
        "2005-2010 umd_tree_cover_gain__ha": 1000, "2005-2010_cover_loss": 0
    },
    { "iso": "ISL", "country": "Iceland", "basic": 0 }
]"#;

fn controller(mode: ViewMode) -> (ForestController, RecordingStage) {
    let dataset = parse_dataset(DATASET).unwrap();
    let mut controller = ForestController::new(dataset, YearRange::default(), mode).unwrap();
    let mut stage = RecordingStage::default();
    controller.select_country(0, &mut stage).unwrap();
    (controller, stage)
}

#[test]
fn selecting_a_country_plants_its_baseline() {
    let (controller, stage) = controller(ViewMode::Desktop);
    assert_eq!(controller.tree_count(), 5);
    assert_eq!(controller.current_year(), 2000);
    assert!(stage.planted.iter().all(|(_, m)| *m == Motion::Instant));
}

#[test]
fn baseline_is_floor_of_thousands() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    controller.select_country(1, &mut stage).unwrap();
    assert_eq!(controller.tree_count(), 2);
    controller.select_country(2, &mut stage).unwrap();
    assert_eq!(controller.tree_count(), 0);
}

#[test]
fn gain_adds_trees_on_top_of_baseline() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    let report = controller.step_year(5, &mut stage).unwrap().unwrap();

    assert_eq!(report.planted, 3);
    assert_eq!(report.felled, 0);
    assert_eq!(controller.tree_count(), 8);
    assert_eq!(controller.current_period().to_string(), "2005-2010");
}

#[test]
fn gain_and_loss_net_out() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    controller.set_year(2005, &mut stage).unwrap();
    let before = controller.tree_count();

    let report = controller.step_year(5, &mut stage).unwrap().unwrap();

    assert_eq!((report.planted, report.felled), (2, 1));
    assert_eq!(controller.tree_count(), before + 1);
}

#[test]
fn loss_is_taken_from_the_end_after_growth() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    controller.set_year(2005, &mut stage).unwrap();
    let transition_before = controller.transition();
    controller.step_year(5, &mut stage).unwrap();

    let newest = stage.planted.last().unwrap().0;
    let (felled, motion) = *stage.felled.last().unwrap();
    assert_eq!(felled, newest);
    assert!(!controller.trees().contains(&felled));
    assert_eq!(
        motion,
        Motion::Animated {
            delay: 2.0 * GROWTH_STAGGER_SECS + GROWTH_SECS,
            transition: transition_before + 1,
        }
    );
}

#[test]
fn growth_is_staggered() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    controller.step_year(5, &mut stage).unwrap();
    let delays: Vec<f32> = stage.planted[5..]
        .iter()
        .map(|(_, m)| match m {
            Motion::Animated { delay, .. } => *delay,
            Motion::Instant => -1.0,
        })
        .collect();
    assert_eq!(delays, vec![0.0, GROWTH_STAGGER_SECS, 2.0 * GROWTH_STAGGER_SECS]);
}

#[test]
fn immersive_mode_applies_instantly() {
    let (mut controller, mut stage) = controller(ViewMode::Immersive);
    controller.set_year(2010, &mut stage).unwrap();
    assert!(stage.planted.iter().all(|(_, m)| *m == Motion::Instant));
    assert!(stage.felled.iter().all(|(_, m)| *m == Motion::Instant));
}

#[test]
fn loss_beyond_population_clamps_at_zero() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    controller.set_year(2015, &mut stage).unwrap();
    assert_eq!(controller.tree_count(), 0);
}

#[test]
fn year_never_leaves_range() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    assert_eq!(controller.step_year(-5, &mut stage), Ok(None));
    assert_eq!(controller.current_year(), 2000);

    controller.step_year(500, &mut stage).unwrap();
    assert_eq!(controller.current_year(), 2015);
}

#[test]
fn extreme_deltas_clamp_instead_of_overflowing() {
    let (mut controller, mut stage) = controller(ViewMode::Immersive);
    controller.step_year(i32::MAX, &mut stage).unwrap();
    assert_eq!(controller.current_year(), 2015);

    assert_eq!(controller.step_year(i32::MAX, &mut stage), Ok(None));
    controller.step_year(i32::MIN, &mut stage).unwrap();
    assert_eq!(controller.current_year(), 2000);
}

#[test]
fn period_must_match_start_and_end() {
    let json = r#"[{ "iso": "BRA", "country": "Brazil", "basic": 0,
        "2005-2020 umd_tree_cover_gain__ha": 9000 }]"#;
    let dataset = parse_dataset(json).unwrap();
    let mut controller =
        ForestController::new(dataset, YearRange::default(), ViewMode::Immersive).unwrap();
    let mut stage = RecordingStage::default();
    controller.select_country(0, &mut stage).unwrap();

    let err = controller.step_year(5, &mut stage).unwrap_err();

    assert_eq!(
        err,
        ForestError::MissingPeriod {
            iso: "BRA".into(),
            period: Period::new(2005, 2010),
        }
    );
    assert_eq!(controller.current_year(), 2000);
    assert_eq!(controller.tree_count(), 0);
}

#[test]
fn huge_baseline_is_capped() {
    let dataset = Dataset {
        records: vec![CountryRecord {
            iso: "BIG".into(),
            country: "Big".into(),
            basic_ha: 1e300,
            changes: BTreeMap::new(),
        }],
    };
    let mut controller =
        ForestController::new(dataset, YearRange::default(), ViewMode::Immersive).unwrap();
    let mut stage = RecordingStage::default();

    let report = controller.select_country(0, &mut stage).unwrap();

    assert_eq!(report.planted, MAX_TREES);
    assert_eq!(controller.tree_count(), MAX_TREES);
}

#[test]
fn stepping_at_upper_bound_is_idempotent() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    controller.set_year(2015, &mut stage).unwrap();
    let trees = controller.trees().to_vec();
    let transition = controller.transition();

    for _ in 0..3 {
        assert_eq!(controller.step_year(5, &mut stage), Ok(None));
    }
    assert_eq!(controller.trees(), trees.as_slice());
    assert_eq!(controller.transition(), transition);
    assert_eq!(controller.current_year(), 2015);
}

#[test]
fn switching_country_resets_to_baseline() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    controller.step_year(5, &mut stage).unwrap();
    let old_trees = controller.trees().to_vec();

    let report = controller.select_country(1, &mut stage).unwrap();

    assert_eq!(report.felled, old_trees.len());
    assert_eq!(controller.tree_count(), 2);
    for tree in old_trees {
        assert!(stage.felled.contains(&(tree, Motion::Instant)));
    }
}

#[test]
fn country_index_wraps() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    controller.select_country(4, &mut stage).unwrap();
    assert_eq!(controller.selected().iso, "PER");

    controller.select_country(2, &mut stage).unwrap();
    controller.next_country(&mut stage).unwrap();
    assert_eq!(controller.selected_index(), 0);
}

#[test]
fn unknown_iso_leaves_state_untouched() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    let err = controller.select_country_by_iso("ATL", &mut stage).unwrap_err();
    assert_eq!(err, ForestError::UnknownCountry("ATL".into()));
    assert_eq!(controller.selected().iso, "BRA");
    assert_eq!(controller.tree_count(), 5);

    controller.select_country_by_iso("PER", &mut stage).unwrap();
    assert_eq!(controller.selected_index(), 1);
}

#[test]
fn missing_period_aborts_without_mutation() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    controller.select_country(1, &mut stage).unwrap();
    let transition = controller.transition();

    let err = controller.set_year(2010, &mut stage).unwrap_err();

    assert!(matches!(err, ForestError::MissingPeriod { .. }));
    assert_eq!(controller.current_year(), 2000);
    assert_eq!(controller.tree_count(), 2);
    assert_eq!(controller.transition(), transition);
}

#[test]
fn cycling_wraps_to_first_year() {
    let (mut controller, mut stage) = controller(ViewMode::Desktop);
    controller.set_year(2015, &mut stage).unwrap();
    controller.cycle_year(&mut stage).unwrap();
    assert_eq!(controller.current_year(), 2000);
}

#[test]
fn empty_dataset_is_rejected() {
    let dataset = parse_dataset("[]").unwrap();
    let err = ForestController::new(dataset, YearRange::default(), ViewMode::Desktop).unwrap_err();
    assert_eq!(err, ForestError::EmptyDataset);
}
