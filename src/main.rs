//! Canopy: forest-cover change viewer. Runs the forest_cover app.

use forest_cover::prelude::*;

fn main() {
    let config = viewer_config();
    ForestViewerBuilder::new().config(config).build().run();
}
