use bevy::prelude::*;

use crate::render::{TreeAssets, TreeRenderer};
use crate::scene::Tree;

#[derive(Clone, Debug)]
pub struct TreeModelSettings {
    pub trunk_radius: f32,
    pub trunk_height: f32,
    pub crown_radius: f32,
    /// Height of the crown centre above the trunk centre.
    pub crown_offset: f32,
    pub bark_color: Color,
    pub foliage_color: Color,
}

impl Default for TreeModelSettings {
    fn default() -> Self {
        Self {
            trunk_radius: 0.1,
            trunk_height: 1.0,
            crown_radius: 0.5,
            crown_offset: 0.8,
            bark_color: Color::srgb_u8(0x8b, 0x45, 0x13),
            foliage_color: Color::srgb_u8(0x22, 0x8b, 0x22),
        }
    }
}

/// Cylinder trunk topped by a sphere crown.
#[derive(Default)]
pub struct TrunkAndCrownRenderer {
    pub settings: TreeModelSettings,
}

impl TreeRenderer for TrunkAndCrownRenderer {
    fn build_assets(
        &self,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
    ) -> TreeAssets {
        let s = &self.settings;
        TreeAssets {
            trunk_mesh: meshes.add(Cylinder::new(s.trunk_radius, s.trunk_height)),
            crown_mesh: meshes.add(Sphere::new(s.crown_radius)),
            bark: materials.add(StandardMaterial {
                base_color: s.bark_color,
                perceptual_roughness: 0.9,
                ..default()
            }),
            foliage: materials.add(StandardMaterial {
                base_color: s.foliage_color,
                ..default()
            }),
        }
    }

    fn spawn_tree(
        &self,
        commands: &mut Commands,
        assets: &TreeAssets,
        transform: Transform,
    ) -> Entity {
        // Root sits on the ground so scaling grows the tree upwards.
        let trunk_y = self.settings.trunk_height / 2.0;
        let crown_y = trunk_y + self.settings.crown_offset;

        commands
            .spawn((Tree, transform, Visibility::Visible))
            .with_children(|tree| {
                tree.spawn((
                    Mesh3d(assets.trunk_mesh.clone()),
                    MeshMaterial3d(assets.bark.clone()),
                    Transform::from_xyz(0.0, trunk_y, 0.0),
                ));
                tree.spawn((
                    Mesh3d(assets.crown_mesh.clone()),
                    MeshMaterial3d(assets.foliage.clone()),
                    Transform::from_xyz(0.0, crown_y, 0.0),
                ));
            })
            .id()
    }
}
