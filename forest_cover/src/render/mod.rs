//! Renderer traits and default implementations.

mod trunk_and_crown;

use bevy::prelude::*;

pub use trunk_and_crown::{TreeModelSettings, TrunkAndCrownRenderer};

/// Mesh and material handles shared by every tree.
#[derive(Resource, Clone, Debug)]
pub struct TreeAssets {
    pub trunk_mesh: Handle<Mesh>,
    pub crown_mesh: Handle<Mesh>,
    pub bark: Handle<StandardMaterial>,
    pub foliage: Handle<StandardMaterial>,
}

pub trait TreeRenderer: Send + Sync + 'static {
    fn setup(&self, _app: &mut App) {}

    /// Creates the shared handles once at startup.
    fn build_assets(
        &self,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
    ) -> TreeAssets;

    /// Spawns one tree rooted at `transform` and returns the root entity.
    /// Scaling the root grows or shrinks the whole model.
    fn spawn_tree(&self, commands: &mut Commands, assets: &TreeAssets, transform: Transform)
        -> Entity;
}

#[derive(Resource)]
pub struct RendererResource(pub Box<dyn TreeRenderer>);

impl RendererResource {
    pub fn new(renderer: impl TreeRenderer) -> Self {
        Self(Box::new(renderer))
    }
}
