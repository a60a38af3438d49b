//! Tweening used for tree growth and removal.

mod easing;
mod tween;

pub use easing::{ease, Easing};
pub use tween::{Tween, TweenStep};
