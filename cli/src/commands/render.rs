use anyhow::Result;
use geolayers::{Overlay, SvgRenderer};
use tracing::info;

use crate::cli::{Cli, RenderArgs};
use crate::commands::common::{apply_query, load};

pub fn run(_cli: &Cli, args: &RenderArgs) -> Result<()> {
    let out_path = args.output.clone().unwrap_or_else(|| "./map.svg".into());

    let mut view = load(SvgRenderer::new(args.width, args.height), &args.source)?;
    apply_query(&mut view, &args.query);
    view.fit();
    if args.no_boundary {
        view.set_overlay_visible(Overlay::Boundary, false);
    }

    info!(path = %out_path.display(), "writing SVG");
    view.renderer().write_to_file(&out_path)?;

    println!("{} -> {}", view.status(), out_path.display());
    Ok(())
}
