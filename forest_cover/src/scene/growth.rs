//! Tree growth and removal tweens, advanced once per frame.

use bevy::prelude::*;

use crate::animation::{Tween, TweenStep};
use crate::forest::{ForestController, GROWTH_SECS, SHRINK_SECS};

/// What happens to the tree once its tween finishes.
#[derive(Debug, Clone, PartialEq)]
pub enum AfterTween {
    Keep,
    Despawn,
    /// Run this shrink next, then despawn.
    Shrink(Tween),
}

/// Uniform-scale tween on a tree root. Tweens from a transition older than the
/// controller's current one are settled immediately instead of played out.
#[derive(Component, Debug, Clone)]
pub struct TreeTween {
    pub tween: Tween,
    pub then: AfterTween,
    pub transition: u64,
}

impl TreeTween {
    pub fn grow(delay: f32, transition: u64) -> Self {
        Self {
            tween: Tween::new(delay, GROWTH_SECS, 1.0).with_from(0.0),
            then: AfterTween::Keep,
            transition,
        }
    }

    pub fn shrink(delay: f32, transition: u64) -> Self {
        Self {
            tween: Tween::new(delay, SHRINK_SECS, 0.0),
            then: AfterTween::Despawn,
            transition,
        }
    }

    /// Full growth, then a shrink starting `shrink_delay` seconds after the
    /// transition began (or as soon as growth ends, if that is later).
    pub fn grow_then_shrink(grow_delay: f32, shrink_delay: f32, transition: u64) -> Self {
        let grown_at = grow_delay + GROWTH_SECS;
        Self {
            then: AfterTween::Shrink(Tween::new(shrink_delay - grown_at, SHRINK_SECS, 0.0)),
            ..Self::grow(grow_delay, transition)
        }
    }
}

pub fn animate_trees(
    mut commands: Commands,
    time: Res<Time>,
    controller: Option<Res<ForestController>>,
    mut trees: Query<(Entity, &mut Transform, &mut TreeTween)>,
) {
    let current = controller.map_or(0, |c| c.transition());
    let dt = time.delta_secs();

    for (entity, mut transform, mut tree_tween) in &mut trees {
        if tree_tween.transition < current {
            match tree_tween.then {
                AfterTween::Keep => {
                    transform.scale = Vec3::splat(tree_tween.tween.to);
                    commands.entity(entity).remove::<TreeTween>();
                }
                AfterTween::Despawn | AfterTween::Shrink(_) => {
                    commands.entity(entity).despawn_recursive();
                }
            }
            continue;
        }

        match tree_tween.tween.advance(dt, transform.scale.x) {
            TweenStep::Waiting => {}
            TweenStep::Running(scale) => transform.scale = Vec3::splat(scale),
            TweenStep::Finished(scale) => {
                transform.scale = Vec3::splat(scale);
                match std::mem::replace(&mut tree_tween.then, AfterTween::Despawn) {
                    AfterTween::Keep => {
                        commands.entity(entity).remove::<TreeTween>();
                    }
                    AfterTween::Despawn => commands.entity(entity).despawn_recursive(),
                    AfterTween::Shrink(next) => tree_tween.tween = next,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_starts_from_zero_and_keeps_the_tree() {
        let mut grow = TreeTween::grow(0.0, 1);
        assert_eq!(grow.then, AfterTween::Keep);
        // live scale is ignored: growth always starts from nothing
        assert_eq!(grow.tween.advance(0.0, 0.7), TweenStep::Running(0.0));
    }

    #[test]
    fn shrink_despawns_after_finishing() {
        let mut shrink = TreeTween::shrink(0.0, 1);
        assert_eq!(shrink.then, AfterTween::Despawn);
        assert_eq!(
            shrink.tween.advance(SHRINK_SECS, 1.0),
            TweenStep::Finished(0.0)
        );
    }

    #[test]
    fn chained_shrink_waits_for_the_rest_of_the_batch() {
        let chained = TreeTween::grow_then_shrink(0.1, 1.2, 1);
        assert_eq!(chained.tween, TreeTween::grow(0.1, 1).tween);
        let AfterTween::Shrink(shrink) = &chained.then else {
            panic!("expected a queued shrink, got {:?}", chained.then);
        };
        assert!((shrink.delay - 0.1).abs() < 1e-6);
        assert_eq!(shrink.to, 0.0);
    }
}
