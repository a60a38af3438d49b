pub(crate) mod forest;
pub(crate) mod growth;
pub(crate) mod setup;
mod stage;

use bevy::prelude::*;

pub use forest::{
    apply_forest_commands, forest_plugin, ingest_dataset, DatasetStatus, ForestRng,
    ForestSettings, ForestSet,
};
pub use growth::{animate_trees, AfterTween, TreeTween};
pub use setup::{setup_scene, setup_tree_assets};
pub use stage::CommandStage;

/// Marker on the root entity of every tree model.
#[derive(Component, Debug, Clone, Copy)]
pub struct Tree;
