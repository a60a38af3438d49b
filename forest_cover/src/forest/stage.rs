use bevy::prelude::Entity;

/// How a tree appears or disappears.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Applied on the spot (immersive mode, country switches).
    Instant,
    /// Tweened after `delay` seconds; `transition` identifies the controller
    /// transition that requested it so a later transition can settle it.
    Animated { delay: f32, transition: u64 },
}

/// Where trees come from and go to. The controller only ever talks to the scene
/// through this seam.
pub trait TreeStage {
    /// Places a new tree at a randomized spot and returns its handle.
    fn plant(&mut self, motion: Motion) -> Entity;
    /// Takes a tree out of the scene. The handle is no longer active afterwards.
    fn fell(&mut self, tree: Entity, motion: Motion);
}
