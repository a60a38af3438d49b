mod channel;
pub mod derive;
mod loader;
mod model;

use std::path::PathBuf;

pub use channel::{dataset_channel_from, init_dataset_channel, DatasetChannel};
pub use loader::{load_dataset, parse_dataset};
pub use model::{CountryRecord, Dataset, Period, PeriodChange, HECTARES_PER_TREE, MAX_TREES};

/// Failures while reading or interpreting the country dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read dataset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset must be a JSON array of country records")]
    NotAnArray,
    #[error("malformed record: {0}")]
    Malformed(String),
}
