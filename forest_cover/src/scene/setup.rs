use bevy::prelude::*;

use crate::render::RendererResource;

const GROUND_SIZE: f32 = 24.0;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0., 10., 20.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(5., 5., 5.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.3,
    });
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.32, 0.27, 0.18),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::default(),
    ));
}

/// Builds the shared tree meshes and materials through the configured renderer.
pub fn setup_tree_assets(
    mut commands: Commands,
    renderer: Res<RendererResource>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let assets = renderer.0.build_assets(&mut meshes, &mut materials);
    commands.insert_resource(assets);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{TreeAssets, TrunkAndCrownRenderer};

    #[test]
    fn setup_inserts_camera_light_and_tree_assets() {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .insert_resource(RendererResource::new(TrunkAndCrownRenderer::default()))
            .add_systems(Startup, (setup_scene, setup_tree_assets));

        app.update();

        assert!(app.world().get_resource::<TreeAssets>().is_some());
        assert!(app.world().get_resource::<AmbientLight>().is_some());

        let world = app.world_mut();
        let camera_count = world.query::<&Camera3d>().iter(world).count();
        let light_count = world.query::<&DirectionalLight>().iter(world).count();

        assert_eq!(camera_count, 1);
        assert_eq!(light_count, 1);
    }
}
