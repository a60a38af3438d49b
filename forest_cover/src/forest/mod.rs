//! Forest state: which country and year are shown, and how the tree population
//! changes between them.

mod controller;
mod stage;
mod years;

pub use controller::{
    ForestController, TransitionReport, ViewMode, VisualizationState, GROWTH_SECS,
    GROWTH_STAGGER_SECS, SHRINK_SECS,
};
pub use stage::{Motion, TreeStage};
pub use years::YearRange;

use crate::data::Period;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ForestError {
    #[error("dataset has no displayable country records")]
    EmptyDataset,
    #[error("no country with iso {0:?}")]
    UnknownCountry(String),
    #[error("{iso} has no gain/loss figures for {period}")]
    MissingPeriod { iso: String, period: Period },
}
