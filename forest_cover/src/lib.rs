//! Forest cover explorer: countries as forests, one tree per 1000 ha, growing and
//! falling as the years go by.
//!
//! Library root: data, forest state, scene systems, input, UI and the SDK builder.

pub mod animation;
pub mod config;
pub mod data;
pub mod forest;
pub mod input;
pub mod render;
pub mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use data::{load_dataset, parse_dataset, CountryRecord, Dataset, DatasetChannel};
pub use forest::{ForestController, TreeStage, ViewMode};
pub use input::ForestCommand;
