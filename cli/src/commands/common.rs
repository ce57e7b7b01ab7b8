use anyhow::Result;
use geolayers::{DataPaths, DataSource, DiskSource, LayerRenderer, ViewController};
use tracing::info;

use crate::cli::{QueryArgs, SourceArgs};

/// Disk root or, with `--url`, an HTTP base.
pub fn open_source(args: &SourceArgs) -> Result<Box<dyn DataSource>> {
    #[cfg(feature = "download")]
    if let Some(url) = &args.url {
        info!(%url, "reading documents over HTTP");
        return Ok(Box::new(geolayers::HttpSource::new(url.as_str())?));
    }

    let root = args.root.clone().unwrap_or_else(|| ".".into());
    info!(root = %root.display(), "reading documents from disk");
    Ok(Box::new(DiskSource::new(root)))
}

pub fn data_paths(args: &SourceArgs) -> DataPaths {
    DataPaths { boundary: args.boundary.clone(), points: args.points.clone() }
}

/// Run the two-stage load into a fresh viewer.
pub fn load<R: LayerRenderer>(renderer: R, args: &SourceArgs) -> Result<ViewController<R>> {
    let source = open_source(args)?;
    let mut view = ViewController::new(renderer);
    view.init(source.as_ref(), &data_paths(args))?;
    info!("{}", view.status());
    Ok(view)
}

/// Apply the search and category the way the UI inputs would.
pub fn apply_query<R: LayerRenderer>(view: &mut ViewController<R>, query: &QueryArgs) {
    if query.category != geolayers::CategoryFilter::ALL {
        view.set_category_str(&query.category);
    }
    if !query.text.is_empty() {
        view.set_text(query.text.as_str());
    }
}
