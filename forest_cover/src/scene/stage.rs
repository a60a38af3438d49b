//! `TreeStage` over Bevy commands: trees become entities, motions become tweens.

use std::collections::HashMap;

use bevy::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::forest::{Motion, TreeStage};
use crate::render::{TreeAssets, TreeRenderer};
use crate::scene::growth::TreeTween;

pub struct CommandStage<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    renderer: &'a dyn TreeRenderer,
    assets: &'a TreeAssets,
    rng: &'a mut ChaCha8Rng,
    half_extent: f32,
    /// Growth delay of trees planted through this stage that are still growing.
    growing: HashMap<Entity, f32>,
}

impl<'a, 'w, 's> CommandStage<'a, 'w, 's> {
    pub fn new(
        commands: &'a mut Commands<'w, 's>,
        renderer: &'a dyn TreeRenderer,
        assets: &'a TreeAssets,
        rng: &'a mut ChaCha8Rng,
        half_extent: f32,
    ) -> Self {
        Self {
            commands,
            renderer,
            assets,
            rng,
            half_extent,
            growing: HashMap::new(),
        }
    }

    fn scatter(&mut self) -> Vec3 {
        let h = self.half_extent.max(f32::EPSILON);
        Vec3::new(self.rng.gen_range(-h..h), 0.0, self.rng.gen_range(-h..h))
    }
}

impl TreeStage for CommandStage<'_, '_, '_> {
    fn plant(&mut self, motion: Motion) -> Entity {
        let position = self.scatter();
        let scale = match motion {
            Motion::Instant => Vec3::ONE,
            Motion::Animated { .. } => Vec3::ZERO,
        };
        let transform = Transform::from_translation(position).with_scale(scale);
        let tree = self.renderer.spawn_tree(self.commands, self.assets, transform);

        if let Motion::Animated { delay, transition } = motion {
            self.commands
                .entity(tree)
                .insert(TreeTween::grow(delay, transition));
            self.growing.insert(tree, delay);
        }
        tree
    }

    fn fell(&mut self, tree: Entity, motion: Motion) {
        // A tree planted in this same transition finishes growing first.
        let grow_delay = self.growing.remove(&tree);
        let Some(mut entity) = self.commands.get_entity(tree) else {
            warn!("tree {tree} already gone");
            return;
        };
        match (motion, grow_delay) {
            (Motion::Instant, _) => entity.despawn_recursive(),
            (Motion::Animated { delay, transition }, Some(grow_delay)) => {
                entity.insert(TreeTween::grow_then_shrink(grow_delay, delay, transition));
            }
            (Motion::Animated { delay, transition }, None) => {
                entity.insert(TreeTween::shrink(delay, transition));
            }
        }
    }
}
