use anyhow::{Context, Result};
use geolayers::GeoJsonLayers;

use crate::cli::{Cli, FilterArgs};
use crate::commands::common::{apply_query, load};

pub fn run(_cli: &Cli, args: &FilterArgs) -> Result<()> {
    let mut view = load(GeoJsonLayers::new(), &args.source)?;
    apply_query(&mut view, &args.query);

    if args.json {
        let out = serde_json::to_string_pretty(view.renderer().points())
            .context("Failed to serialize points layer")?;
        println!("{out}");
        return Ok(());
    }

    for f in view.visible() {
        println!("{}\t{}", f.name().unwrap_or("Unknown"), f.category().unwrap_or("Uncategorized"));
    }
    eprintln!("{}", view.status());
    Ok(())
}
