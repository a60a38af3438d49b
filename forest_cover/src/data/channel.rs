use std::path::PathBuf;

use crossbeam_channel::Receiver;

use crate::data::loader::load_dataset;
use crate::data::model::Dataset;
use crate::data::DataError;

/// Bevy resource holding the channel from the dataset loader thread.
/// Drained once by `ingest_dataset`.
#[derive(bevy::prelude::Resource)]
pub struct DatasetChannel(pub Receiver<Result<Dataset, DataError>>);

/// Read and parse the dataset on a dedicated thread so startup never blocks a frame.
pub fn init_dataset_channel(path: PathBuf) -> DatasetChannel {
    let (tx, rx) = crossbeam_channel::bounded(1);

    std::thread::spawn(move || {
        // Receiver gone means the app already shut down.
        let _ = tx.send(load_dataset(&path));
    });

    DatasetChannel(rx)
}

/// Channel that yields an already-loaded dataset. Used by tests and embedders that
/// bring their own data.
pub fn dataset_channel_from(dataset: Dataset) -> DatasetChannel {
    let (tx, rx) = crossbeam_channel::bounded(1);
    let _ = tx.send(Ok(dataset));
    DatasetChannel(rx)
}
