//! Minimal prelude for SDK consumers.

pub use crate::config::{viewer_config, ViewerConfig};
pub use crate::data::{CountryRecord, Dataset, Period, PeriodChange};
pub use crate::forest::{ForestController, Motion, TreeStage, ViewMode, YearRange};
pub use crate::input::ForestCommand;
pub use crate::render::{TreeRenderer, TrunkAndCrownRenderer};
pub use crate::sdk::ForestViewerBuilder;
