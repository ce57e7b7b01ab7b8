use anyhow::Result;
use geolayers::GeoJsonLayers;

use crate::cli::{Cli, SourceArgs};
use crate::commands::common::load;

pub fn run(_cli: &Cli, args: &SourceArgs) -> Result<()> {
    let view = load(GeoJsonLayers::new(), args)?;

    for category in view.category_options() {
        println!("{category}");
    }
    Ok(())
}
