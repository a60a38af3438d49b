//! Dataset ingestion and the system that routes input commands into the
//! `ForestController`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::ViewerConfig;
use crate::data::DatasetChannel;
use crate::forest::{ForestController, ForestError, TransitionReport, ViewMode, YearRange};
use crate::input::ForestCommand;
use crate::render::{RendererResource, TreeAssets};
use crate::scene::growth::animate_trees;
use crate::scene::setup::{setup_scene, setup_tree_assets};
use crate::scene::stage::CommandStage;

const DEFAULT_SCATTER_HALF_EXTENT: f32 = 10.0;

/// Static viewer settings the scene systems read.
#[derive(Resource, Clone, Debug)]
pub struct ForestSettings {
    pub years: YearRange,
    pub initial_mode: ViewMode,
    /// Trees land uniformly in `[-half_extent, half_extent)` on x and z.
    pub scatter_half_extent: f32,
}

impl Default for ForestSettings {
    fn default() -> Self {
        Self {
            years: YearRange::default(),
            initial_mode: ViewMode::Desktop,
            scatter_half_extent: DEFAULT_SCATTER_HALF_EXTENT,
        }
    }
}

impl From<&ViewerConfig> for ForestSettings {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            initial_mode: config.mode,
            ..default()
        }
    }
}

/// Random source for tree placement.
#[derive(Resource)]
pub struct ForestRng(pub ChaCha8Rng);

impl ForestRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self(ChaCha8Rng::from_entropy()),
        }
    }
}

/// Where the dataset load stands, for the HUD.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub enum DatasetStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForestSet {
    /// Input sources writing `ForestCommand`s.
    Input,
    /// Dataset ingestion and command application.
    Apply,
    /// Tween playback.
    Animate,
}

pub fn forest_plugin(app: &mut App) {
    app.add_event::<ForestCommand>()
        .init_resource::<ForestSettings>()
        .init_resource::<DatasetStatus>()
        .configure_sets(
            Update,
            (ForestSet::Input, ForestSet::Apply, ForestSet::Animate).chain(),
        )
        .add_systems(Startup, (setup_scene, setup_tree_assets))
        .add_systems(
            Update,
            (
                (ingest_dataset, apply_forest_commands)
                    .chain()
                    .in_set(ForestSet::Apply),
                animate_trees.in_set(ForestSet::Animate),
            ),
        );

    if !app.world().contains_resource::<ForestRng>() {
        app.insert_resource(ForestRng::from_seed(None));
    }
}

/// Takes the loaded dataset off the channel, builds the controller and plants the
/// first country's forest. A failed load leaves the scene empty.
#[allow(clippy::too_many_arguments)]
pub fn ingest_dataset(
    mut commands: Commands,
    channel: Option<Res<DatasetChannel>>,
    settings: Res<ForestSettings>,
    renderer: Res<RendererResource>,
    assets: Option<Res<TreeAssets>>,
    mut rng: ResMut<ForestRng>,
    mut status: ResMut<DatasetStatus>,
) {
    let (Some(channel), Some(assets)) = (channel, assets) else {
        return;
    };
    let Ok(loaded) = channel.0.try_recv() else {
        return;
    };
    commands.remove_resource::<DatasetChannel>();

    let dataset = match loaded {
        Ok(dataset) => dataset,
        Err(err) => {
            error!("dataset unavailable, nothing to show: {err}");
            *status = DatasetStatus::Failed(err.to_string());
            return;
        }
    };
    info!("dataset loaded: {} countries", dataset.len());

    let mut controller =
        match ForestController::new(dataset, settings.years, settings.initial_mode) {
            Ok(controller) => controller,
            Err(err) => {
                error!("{err}");
                *status = DatasetStatus::Failed(err.to_string());
                return;
            }
        };

    let mut stage = CommandStage::new(
        &mut commands,
        renderer.0.as_ref(),
        &assets,
        &mut rng.0,
        settings.scatter_half_extent,
    );
    match controller.select_country(0, &mut stage) {
        Ok(report) => log_report(&controller, Some(report)),
        Err(err) => warn!("initial country: {err}"),
    }

    commands.insert_resource(controller);
    *status = DatasetStatus::Ready;
}

/// Applies queued `ForestCommand`s in arrival order. Failures are logged and the
/// command is dropped; the controller stays as it was.
#[allow(clippy::too_many_arguments)]
pub fn apply_forest_commands(
    mut commands: Commands,
    mut events: EventReader<ForestCommand>,
    controller: Option<ResMut<ForestController>>,
    settings: Res<ForestSettings>,
    renderer: Res<RendererResource>,
    assets: Option<Res<TreeAssets>>,
    mut rng: ResMut<ForestRng>,
) {
    let (Some(mut controller), Some(assets)) = (controller, assets) else {
        if !events.is_empty() {
            debug!("dropping {} commands, no dataset yet", events.len());
            events.clear();
        }
        return;
    };

    for command in events.read() {
        let mut stage = CommandStage::new(
            &mut commands,
            renderer.0.as_ref(),
            &assets,
            &mut rng.0,
            settings.scatter_half_extent,
        );
        let result: Result<Option<TransitionReport>, ForestError> = match command {
            ForestCommand::SelectCountry(index) => {
                controller.select_country(*index, &mut stage).map(Some)
            }
            ForestCommand::SelectIso(iso) => {
                controller.select_country_by_iso(iso, &mut stage).map(Some)
            }
            ForestCommand::NextCountry => controller.next_country(&mut stage).map(Some),
            ForestCommand::StepYear(delta) => controller.step_year(*delta, &mut stage),
            ForestCommand::SetYear(year) => controller.set_year(*year, &mut stage),
            ForestCommand::CycleYear => controller.cycle_year(&mut stage),
            ForestCommand::ToggleImmersive => {
                let mode = controller.mode().toggled();
                controller.set_mode(mode);
                info!("view mode: {mode:?}");
                Ok(None)
            }
        };

        match result {
            Ok(report) => log_report(&controller, report),
            Err(err) => warn!("{command:?} skipped: {err}"),
        }
    }
}

fn log_report(controller: &ForestController, report: Option<TransitionReport>) {
    let Some(report) = report else {
        return;
    };
    let record = controller.selected();
    match report.period {
        Some(period) => info!(
            "{} {period}: +{} / -{} trees, {} standing",
            record.iso,
            report.planted,
            report.felled,
            controller.tree_count()
        ),
        None => info!(
            "{} ({}): baseline {} trees",
            record.country,
            record.iso,
            controller.tree_count()
        ),
    }
}
