use std::path::PathBuf;

/// GeoJSON map layer CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "geolayers", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the categories present in the points document
    Categories(SourceArgs),

    /// List the locations matching a search and category
    Filter(FilterArgs),

    /// Render the boundary and matching locations to an SVG file
    Render(RenderArgs),
}

/// Where the two documents come from.
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// Site root containing data/boundary.geojson and data/points.geojson, defaults to "."
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Fetch documents over HTTP relative to this base URL instead of reading ROOT
    #[cfg(feature = "download")]
    #[arg(long, conflicts_with = "root")]
    pub url: Option<String>,

    /// Boundary document path, relative to the root
    #[arg(long, default_value = "data/boundary.geojson")]
    pub boundary: String,

    /// Points document path, relative to the root
    #[arg(long, default_value = "data/points.geojson")]
    pub points: String,
}

#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    /// Case-insensitive name search
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Category to show, or ALL
    #[arg(short, long, default_value = "ALL")]
    pub category: String,
}

#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Print the styled points layer as GeoJSON instead of a listing
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub query: QueryArgs,

    /// Output SVG file, defaults to "./map.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1200.0)]
    pub width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 900.0)]
    pub height: f64,

    /// Leave the boundary overlay out
    #[arg(long)]
    pub no_boundary: bool,
}
