//! Command-line interface for composing autotile sheets

use crate::assets::{AssetLibrary, SourceRole, SourceSet};
use crate::compose::compose;
use crate::io::configuration::{DEFAULT_OUTPUT, DEFAULT_TILE_SIZE};
use crate::io::error::Result;
use crate::io::image::{export_sheet_as_png, load_rgba};
use crate::io::region::{Region, extract};
use crate::mask::{Scheme, enumerate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autosheet")]
#[command(
    author,
    version,
    about = "Compose an autotile sheet from a handful of canonical tile pieces"
)]
/// Command-line arguments for the sheet composition tool
pub struct Cli {
    /// Outer corner piece, drawn in its top-left orientation
    #[arg(long, value_name = "IMAGE")]
    pub outer_corner: Option<PathBuf>,

    /// Inner corner piece, drawn in its top-left orientation
    #[arg(long, value_name = "IMAGE")]
    pub inner_corner: Option<PathBuf>,

    /// Left edge piece
    #[arg(long, value_name = "IMAGE")]
    pub edge_left: Option<PathBuf>,

    /// Top edge piece
    #[arg(long, value_name = "IMAGE")]
    pub edge_top: Option<PathBuf>,

    /// Interior fill piece
    #[arg(long, value_name = "IMAGE")]
    pub fill: Option<PathBuf>,

    /// Crop this region of the outer corner image before use
    #[arg(long, value_name = "X,Y,WxH")]
    pub outer_corner_region: Option<Region>,

    /// Crop this region of the inner corner image before use
    #[arg(long, value_name = "X,Y,WxH")]
    pub inner_corner_region: Option<Region>,

    /// Crop this region of the left edge image before use
    #[arg(long, value_name = "X,Y,WxH")]
    pub edge_left_region: Option<Region>,

    /// Crop this region of the top edge image before use
    #[arg(long, value_name = "X,Y,WxH")]
    pub edge_top_region: Option<Region>,

    /// Crop this region of the fill image before use
    #[arg(long, value_name = "X,Y,WxH")]
    pub fill_region: Option<Region>,

    /// Tiling scheme: basic4 (16 tiles) or blob8 (47 tiles)
    #[arg(short, long, default_value = "blob8")]
    pub scheme: String,

    /// Tile edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Output path for the composed sheet
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Suppress warnings about absent source roles
    #[arg(short, long)]
    pub quiet: bool,
}

/// Orchestrates loading sources, deriving assets, and composing the sheet
pub struct SheetProcessor {
    cli: Cli,
}

impl SheetProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the full pipeline: load, derive, enumerate, compose, export
    ///
    /// # Errors
    ///
    /// Returns an error if scheme or tile size validation fails, a source
    /// cannot be loaded or cropped, every role is absent, or the sheet
    /// cannot be written.
    pub fn process(&self) -> Result<()> {
        let scheme: Scheme = self.cli.scheme.parse()?;
        let sources = self.load_sources()?;
        self.warn_missing(&sources);

        let library = AssetLibrary::build(&sources, self.cli.tile_size)?;
        let masks = enumerate(scheme);
        let sheet = compose(&masks, &library, scheme.columns())?;

        export_sheet_as_png(&sheet, &self.cli.output)
    }

    fn load_sources(&self) -> Result<SourceSet> {
        let assignments = [
            (
                SourceRole::OuterCorner,
                &self.cli.outer_corner,
                self.cli.outer_corner_region,
            ),
            (
                SourceRole::InnerCorner,
                &self.cli.inner_corner,
                self.cli.inner_corner_region,
            ),
            (
                SourceRole::EdgeLeft,
                &self.cli.edge_left,
                self.cli.edge_left_region,
            ),
            (
                SourceRole::EdgeTop,
                &self.cli.edge_top,
                self.cli.edge_top_region,
            ),
            (SourceRole::Fill, &self.cli.fill, self.cli.fill_region),
        ];

        let mut sources = SourceSet::default();
        for (role, path, region) in assignments {
            if let Some(path) = path {
                let mut raster = load_rgba(path)?;
                if let Some(region) = region {
                    raster = extract(&raster, region)?;
                }
                sources.insert(role, raster);
            }
        }
        Ok(sources)
    }

    // Allow print for user feedback about degraded output
    #[allow(clippy::print_stderr)]
    fn warn_missing(&self, sources: &SourceSet) {
        if self.cli.quiet {
            return;
        }
        for role in sources.missing_roles() {
            eprintln!(
                "No source for role '{}'; its parts will render transparent",
                role.name()
            );
        }
    }
}
