//! Visualization state: selected country, current year, active trees, and the
//! transitions between them.

use bevy::prelude::*;

use crate::data::{CountryRecord, Dataset, Period};
use crate::forest::stage::{Motion, TreeStage};
use crate::forest::years::YearRange;
use crate::forest::ForestError;

/// Delay between consecutive growth tweens within one batch.
pub const GROWTH_STAGGER_SECS: f32 = 0.1;
/// Duration of a single growth tween.
pub const GROWTH_SECS: f32 = 1.0;
/// Duration of a single shrink tween.
pub const SHRINK_SECS: f32 = 1.0;

/// Desktop transitions animate; immersive ones apply instantly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Desktop,
    Immersive,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Desktop => Self::Immersive,
            Self::Immersive => Self::Desktop,
        }
    }
}

/// Selection and tree handles. Mutated only through `ForestController`.
#[derive(Debug, Default)]
pub struct VisualizationState {
    selected: usize,
    year: u16,
    trees: Vec<Entity>,
    transition: u64,
}

/// What a transition did to the forest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionReport {
    /// Period applied, `None` for country switches.
    pub period: Option<Period>,
    pub planted: usize,
    pub felled: usize,
}

#[derive(Resource, Debug)]
pub struct ForestController {
    dataset: Dataset,
    years: YearRange,
    mode: ViewMode,
    state: VisualizationState,
    last_report: Option<TransitionReport>,
}

impl ForestController {
    /// Controller positioned on the first record at `years.min`, with no trees yet.
    /// Call `select_country(0, ..)` to plant the initial forest.
    pub fn new(dataset: Dataset, years: YearRange, mode: ViewMode) -> Result<Self, ForestError> {
        if dataset.is_empty() {
            return Err(ForestError::EmptyDataset);
        }
        Ok(Self {
            dataset,
            years,
            mode,
            state: VisualizationState {
                year: years.min,
                ..default()
            },
            last_report: None,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn years(&self) -> YearRange {
        self.years
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected
    }

    pub fn selected(&self) -> &CountryRecord {
        &self.dataset.records[self.state.selected]
    }

    pub fn current_year(&self) -> u16 {
        self.state.year
    }

    pub fn current_period(&self) -> Period {
        self.years.period_for(self.state.year)
    }

    pub fn trees(&self) -> &[Entity] {
        &self.state.trees
    }

    pub fn tree_count(&self) -> usize {
        self.state.trees.len()
    }

    /// Id of the latest transition. Animations tagged with an older id are stale.
    pub fn transition(&self) -> u64 {
        self.state.transition
    }

    pub fn last_report(&self) -> Option<TransitionReport> {
        self.last_report
    }

    /// Shows the country at `index` (wrapping past the end) at its baseline cover.
    pub fn select_country(
        &mut self,
        index: usize,
        stage: &mut impl TreeStage,
    ) -> Result<TransitionReport, ForestError> {
        let index = index % self.dataset.len();
        let baseline = self.dataset.records[index].baseline_trees();

        self.state.transition += 1;
        let felled = self.state.trees.len();
        for tree in self.state.trees.drain(..) {
            stage.fell(tree, Motion::Instant);
        }

        self.state.selected = index;
        for _ in 0..baseline {
            let tree = stage.plant(Motion::Instant);
            self.state.trees.push(tree);
        }

        let report = TransitionReport {
            period: None,
            planted: baseline,
            felled,
        };
        self.last_report = Some(report);
        Ok(report)
    }

    pub fn next_country(
        &mut self,
        stage: &mut impl TreeStage,
    ) -> Result<TransitionReport, ForestError> {
        self.select_country(self.state.selected + 1, stage)
    }

    pub fn select_country_by_iso(
        &mut self,
        iso: &str,
        stage: &mut impl TreeStage,
    ) -> Result<TransitionReport, ForestError> {
        let index = self
            .dataset
            .position_of(iso)
            .ok_or_else(|| ForestError::UnknownCountry(iso.to_string()))?;
        self.select_country(index, stage)
    }

    /// Moves the year by `delta` within the range and applies the target period's
    /// gain and loss. Returns `Ok(None)` when the clamped year does not change.
    pub fn step_year(
        &mut self,
        delta: i32,
        stage: &mut impl TreeStage,
    ) -> Result<Option<TransitionReport>, ForestError> {
        let target = self.years.clamp((self.state.year as i32).saturating_add(delta));
        if target == self.state.year {
            return Ok(None);
        }
        self.apply_year(target, stage).map(Some)
    }

    pub fn set_year(
        &mut self,
        year: u16,
        stage: &mut impl TreeStage,
    ) -> Result<Option<TransitionReport>, ForestError> {
        self.step_year(year as i32 - self.state.year as i32, stage)
    }

    /// One step forward, wrapping back to the first year after the last.
    pub fn cycle_year(
        &mut self,
        stage: &mut impl TreeStage,
    ) -> Result<Option<TransitionReport>, ForestError> {
        let next = self.years.cycle(self.state.year);
        self.set_year(next, stage)
    }

    fn apply_year(
        &mut self,
        year: u16,
        stage: &mut impl TreeStage,
    ) -> Result<TransitionReport, ForestError> {
        let record = &self.dataset.records[self.state.selected];
        let period = self.years.period_for(year);
        let change = record
            .change_for(period)
            .ok_or_else(|| ForestError::MissingPeriod {
                iso: record.iso.clone(),
                period,
            })?;

        self.state.transition += 1;
        self.state.year = year;
        let transition = self.state.transition;

        let gained = change.trees_gained();
        for i in 0..gained {
            let motion = match self.mode {
                ViewMode::Immersive => Motion::Instant,
                ViewMode::Desktop => Motion::Animated {
                    delay: i as f32 * GROWTH_STAGGER_SECS,
                    transition,
                },
            };
            let tree = stage.plant(motion);
            self.state.trees.push(tree);
        }

        // Shrinking starts once the whole growth batch has finished.
        let shrink_delay = gained as f32 * GROWTH_STAGGER_SECS + GROWTH_SECS;
        let felled = change.trees_lost().min(self.state.trees.len());
        for _ in 0..felled {
            let Some(tree) = self.state.trees.pop() else {
                break;
            };
            let motion = match self.mode {
                ViewMode::Immersive => Motion::Instant,
                ViewMode::Desktop => Motion::Animated {
                    delay: shrink_delay,
                    transition,
                },
            };
            stage.fell(tree, motion);
        }

        let report = TransitionReport {
            period: Some(period),
            planted: gained,
            felled,
        };
        self.last_report = Some(report);
        Ok(report)
    }
}
